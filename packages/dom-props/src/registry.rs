use std::sync::{Arc, LazyLock};

use rustc_hash::FxHashMap;

use crate::names::is_attribute_name_char;
use crate::property::{flags, AttributeDescriptor, PropertySpec};

/// Errors raised while building an [`AttributeRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("the DOM property `{0}` has already been injected")]
    DuplicateProperty(&'static str),

    #[error("the DOM property `{0}` can be one of boolean, overloaded boolean, or numeric, but not a combination")]
    ConflictingValueKinds(&'static str),
}

/// Maps the property names components use to the attributes the DOM understands.
///
/// The registry is immutable once built. Most renderers share [`AttributeRegistry::standard`], which knows every
/// HTML and SVG property this crate ships tables for.
#[derive(Debug, Default)]
pub struct AttributeRegistry {
    properties: FxHashMap<&'static str, AttributeDescriptor>,

    // lowercased property name or literal attribute name -> property name
    possible_standard_names: FxHashMap<String, &'static str>,
}

static STANDARD: LazyLock<Arc<AttributeRegistry>> = LazyLock::new(|| {
    let registry = AttributeRegistry::builder()
        .inject(crate::html::HTML_PROPERTIES)
        .and_then(|builder| builder.inject(crate::svg::SVG_PROPERTIES))
        .map(RegistryBuilder::build)
        .expect("the built-in property tables never overlap");

    tracing::debug!(
        "Built the standard DOM property registry with {} properties",
        registry.len()
    );

    Arc::new(registry)
});

impl AttributeRegistry {
    /// The shared registry with every built-in HTML and SVG property.
    pub fn standard() -> Arc<AttributeRegistry> {
        STANDARD.clone()
    }

    /// Start building a custom registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Look up a property by the exact name components use.
    pub fn get(&self, property_name: &str) -> Option<&AttributeDescriptor> {
        self.properties.get(property_name)
    }

    pub fn contains(&self, property_name: &str) -> bool {
        self.properties.contains_key(property_name)
    }

    /// Find the canonical property name for a lowercased property name or a literal attribute name.
    ///
    /// `classname` and `class` both resolve to `className`.
    pub fn possible_standard_name(&self, lowercased_name: &str) -> Option<&'static str> {
        self.possible_standard_names.get(lowercased_name).copied()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.properties.values()
    }
}

/// Collects property tables into an [`AttributeRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: AttributeRegistry,
}

impl RegistryBuilder {
    /// Add a table of properties. Every property may only be injected once.
    pub fn inject(mut self, specs: &[PropertySpec]) -> Result<Self, RegistryError> {
        for spec in specs {
            if self.registry.properties.contains_key(spec.name) {
                return Err(RegistryError::DuplicateProperty(spec.name));
            }

            let value_kinds = [
                flags::HAS_BOOLEAN_VALUE,
                flags::HAS_NUMERIC_VALUE,
                flags::HAS_OVERLOADED_BOOLEAN_VALUE,
            ]
            .into_iter()
            .filter(|mask| spec.flags & mask != 0)
            .count();
            if value_kinds > 1 {
                return Err(RegistryError::ConflictingValueKinds(spec.name));
            }

            let descriptor = AttributeDescriptor::from_spec(spec);

            let names = &mut self.registry.possible_standard_names;
            names.insert(spec.name.to_ascii_lowercase(), spec.name);
            if spec.attribute_name.is_some() {
                names.insert(descriptor.attribute_name.to_string(), spec.name);
            }

            tracing::trace!(
                "Injected DOM property {} -> {}",
                spec.name,
                descriptor.attribute_name
            );
            self.registry.properties.insert(spec.name, descriptor);
        }

        Ok(self)
    }

    pub fn build(self) -> AttributeRegistry {
        self.registry
    }
}

/// Whether the name is a `data-*` or `aria-*` attribute that is passed to the DOM verbatim.
///
/// The prefix is case sensitive; `Data-foo` is not a custom attribute.
pub fn is_custom_attribute(name: &str) -> bool {
    let rest = match name
        .strip_prefix("data-")
        .or_else(|| name.strip_prefix("aria-"))
    {
        Some(rest) => rest,
        None => return false,
    };

    rest.chars().all(is_attribute_name_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_attributes() {
        assert!(is_custom_attribute("data-foo"));
        assert!(is_custom_attribute("data-"));
        assert!(is_custom_attribute("aria-label"));
        assert!(is_custom_attribute("data-fooBar"));
        assert!(!is_custom_attribute("Data-foo"));
        assert!(!is_custom_attribute("data"));
        assert!(!is_custom_attribute("data-foo bar"));
    }

    #[test]
    fn duplicate_injection_is_rejected() {
        let err = AttributeRegistry::builder()
            .inject(&[PropertySpec::new("id"), PropertySpec::new("id")])
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateProperty("id"));
    }

    #[test]
    fn conflicting_flags_are_rejected() {
        let spec = PropertySpec::new("open")
            .flags(flags::HAS_BOOLEAN_VALUE | flags::HAS_POSITIVE_NUMERIC_VALUE);
        let err = AttributeRegistry::builder().inject(&[spec]).unwrap_err();
        assert_eq!(err, RegistryError::ConflictingValueKinds("open"));
    }
}
