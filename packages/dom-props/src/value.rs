use std::borrow::Cow;
use std::fmt::{self, Write};

/// The value a component passed for a single element property.
///
/// This mirrors the shape of the attribute values the renderer hands to the DOM: text, numbers, booleans, event
/// listeners and an explicit "nothing" that is distinct from the property being absent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum PropValue {
    /// Text value
    Text(String),

    /// A float
    Float(f64),

    /// Signed integer
    Int(i64),

    /// Boolean
    Bool(bool),

    /// An event listener. Listeners are never written to the DOM as attributes.
    Listener,

    /// An explicit null value
    None,
}

impl PropValue {
    /// Whether the value is the explicit null value.
    pub fn is_none(&self) -> bool {
        matches!(self, PropValue::None)
    }

    /// Whether the value is a number that is not a number.
    pub fn is_nan(&self) -> bool {
        matches!(self, PropValue::Float(f) if f.is_nan())
    }

    /// Truthiness the way the DOM sees it: empty strings, zero, NaN, `false` and null are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Text(text) => !text.is_empty(),
            PropValue::Float(f) => *f != 0.0 && !f.is_nan(),
            PropValue::Int(i) => *i != 0,
            PropValue::Bool(b) => *b,
            PropValue::Listener => true,
            PropValue::None => false,
        }
    }

    /// Numeric coercion used by the numeric attribute checks.
    ///
    /// Text is trimmed and parsed, with the empty string coercing to zero. Anything that does not parse is NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            PropValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return 0.0;
                }
                match trimmed {
                    "Infinity" | "+Infinity" => f64::INFINITY,
                    "-Infinity" => f64::NEG_INFINITY,
                    // `parse` also accepts `inf` and `nan` in any casing
                    _ if trimmed
                        .trim_start_matches(['+', '-'])
                        .starts_with(|c: char| c.is_ascii_alphabetic()) =>
                    {
                        f64::NAN
                    }
                    _ => trimmed.parse().unwrap_or(f64::NAN),
                }
            }
            PropValue::Float(f) => *f,
            PropValue::Int(i) => *i as f64,
            PropValue::Bool(b) => u8::from(*b) as f64,
            PropValue::Listener => f64::NAN,
            PropValue::None => 0.0,
        }
    }

    /// The string written into the DOM for this value.
    pub fn to_attribute_string(&self) -> Cow<'_, str> {
        match self {
            PropValue::Text(text) => Cow::Borrowed(text),
            PropValue::Float(f) => {
                let mut out = String::new();
                let _ = write_float(&mut out, *f);
                Cow::Owned(out)
            }
            PropValue::Int(i) => Cow::Owned(i.to_string()),
            PropValue::Bool(true) => Cow::Borrowed("true"),
            PropValue::Bool(false) => Cow::Borrowed("false"),
            PropValue::Listener => Cow::Borrowed("[listener]"),
            PropValue::None => Cow::Borrowed("null"),
        }
    }
}

// Integral floats print without a trailing `.0`, the way the browser stringifies numbers.
fn write_float(out: &mut String, f: f64) -> fmt::Result {
    if f.is_nan() {
        out.write_str("NaN")
    } else if f.is_infinite() {
        out.write_str(if f > 0.0 { "Infinity" } else { "-Infinity" })
    } else if f == 0.0 {
        // Includes negative zero
        out.write_str("0")
    } else if f.fract() == 0.0 && f.abs() < 1e21 {
        write!(out, "{f:.0}")
    } else {
        write!(out, "{f}")
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_attribute_string())
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Float(value)
    }
}

impl From<f32> for PropValue {
    fn from(value: f32) -> Self {
        PropValue::Float(value as _)
    }
}

macro_rules! int_into_prop_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropValue {
                fn from(value: $ty) -> Self {
                    PropValue::Int(value as _)
                }
            }
        )*
    };
}

int_into_prop_value!(i8, i16, i32, i64, u8, u16, u32, isize, usize);

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => PropValue::None,
        }
    }
}

/// The properties a component passed to a single element, in the order they were written.
///
/// Property names can be any string, but the constants in [`crate::props`] are generated from the same tables as
/// the registry, so a typo in a known property name becomes a compile error:
///
/// ```rust
/// use dioxus_dom_props::{props, Props};
///
/// let props = Props::new()
///     .with(props::html::className, "card")
///     .with(props::html::htmlFor, "email")
///     .with("data-testid", "login");
/// assert_eq!(props.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Props {
    entries: Vec<(Cow<'static, str>, PropValue)>,
}

impl Props {
    /// Create an empty property bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any earlier value with the same name.
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a property, replacing any earlier value with the same name.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Get the value of a property if it was passed.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Whether the property was passed at all, including as an explicit null.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_ref(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<Cow<'static, str>>,
    V: Into<PropValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut props = Props::new();
        for (key, value) in iter {
            props.insert(key, value);
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!PropValue::from("").is_truthy());
        assert!(PropValue::from("0").is_truthy());
        assert!(!PropValue::Int(0).is_truthy());
        assert!(!PropValue::Float(f64::NAN).is_truthy());
        assert!(PropValue::Listener.is_truthy());
        assert!(!PropValue::None.is_truthy());
        assert!(PropValue::None.is_none());
        assert!(!PropValue::Listener.is_none());
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(PropValue::from(" 12 ").to_number(), 12.0);
        assert_eq!(PropValue::from("").to_number(), 0.0);
        assert!(PropValue::from("twelve").to_number().is_nan());
        assert_eq!(PropValue::Bool(true).to_number(), 1.0);
        assert_eq!(PropValue::from("1e3").to_number(), 1000.0);
        assert_eq!(PropValue::from("-Infinity").to_number(), f64::NEG_INFINITY);
        for text in ["inf", "-inf", "infinity", "INF", "nan", "NaN", "+Inf"] {
            assert!(PropValue::from(text).to_number().is_nan(), "{text}");
        }
    }

    #[test]
    fn floats_stringify_like_the_browser() {
        assert_eq!(PropValue::Float(1.0).to_attribute_string(), "1");
        assert_eq!(PropValue::Float(1.5).to_attribute_string(), "1.5");
        assert_eq!(PropValue::Float(f64::NAN).to_attribute_string(), "NaN");
        assert_eq!(PropValue::Float(-0.0).to_attribute_string(), "0");
        assert_eq!(PropValue::Float(-3.0).to_attribute_string(), "-3");
        assert_eq!(
            PropValue::Float(1e19).to_attribute_string(),
            "10000000000000000000"
        );
        assert_eq!(
            PropValue::Float(1e20).to_attribute_string(),
            "100000000000000000000"
        );
    }

    #[test]
    fn later_insert_replaces_earlier() {
        let props = Props::new().with("id", "a").with("title", "t").with("id", "b");
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("id"), Some(&PropValue::from("b")));
        assert_eq!(props.iter().next().map(|(k, _)| k), Some("id"));
    }
}
