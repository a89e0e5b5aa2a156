/// The environment variable [`ValidationConfig::from_env`] reads.
pub const CONFIG_ENV: &str = "DIOXUS_DOM_PROPS_CONFIG";

/// Configuration for the property validator.
///
/// Validation is a development aid. It is on by default in debug builds and off in release builds.
///
/// # Example
///
/// ```rust
/// use dioxus_dom_props::ValidationConfig;
///
/// let config = ValidationConfig::default()
///     .with_enabled(true)
///     .with_aria_validation(false);
/// assert!(config.enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ValidationConfig {
    pub(crate) enabled: bool,
    pub(crate) validate_aria: bool,
    pub(crate) validate_null_values: bool,
    pub(crate) validate_values: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: cfg!(debug_assertions),
            validate_aria: true,
            validate_null_values: true,
            validate_values: true,
        }
    }
}

impl ValidationConfig {
    /// Turn all validation on or off.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Check `aria-*` properties against the list of valid ARIA attributes.
    pub fn with_aria_validation(mut self, validate: bool) -> Self {
        self.validate_aria = validate;
        self
    }

    /// Warn when a form control is given an explicit null `value`.
    pub fn with_null_value_validation(mut self, validate: bool) -> Self {
        self.validate_null_values = validate;
        self
    }

    /// Check the values given to known properties, like NaN numbers or booleans for string attributes.
    pub fn with_value_validation(mut self, validate: bool) -> Self {
        self.validate_values = validate;
        self
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn validates_aria(&self) -> bool {
        self.validate_aria
    }

    pub fn validates_null_values(&self) -> bool {
        self.validate_null_values
    }

    pub fn validates_values(&self) -> bool {
        self.validate_values
    }

    /// Read the configuration from the JSON in the `DIOXUS_DOM_PROPS_CONFIG` environment variable.
    ///
    /// Missing fields keep their defaults. If the variable is not set or cannot be parsed, the default configuration
    /// is returned.
    #[cfg(feature = "serialize")]
    pub fn from_env() -> Self {
        let Ok(json) = std::env::var(CONFIG_ENV) else {
            return Self::default();
        };

        match serde_json::from_str(&json) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse {CONFIG_ENV}, using the default validation config: {err}");
                Self::default()
            }
        }
    }
}
