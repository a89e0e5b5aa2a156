//! Developer warnings and the sinks they are sent to.

use std::fmt;

use rustc_hash::FxHashSet;

/// What a warning is about. Sinks can use this to filter or group warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum WarningKind {
    /// One or more properties on an element are not known DOM properties.
    UnknownProps,
    /// One or more known properties on an element were given a value that cannot be written to the DOM.
    InvalidValues,
    /// A property is a miscased or aliased version of a known DOM property.
    MisspelledProperty,
    /// A property is a miscased version of a known event handler.
    MisspelledEventHandler,
    /// A property looks like an event handler, but no such event exists.
    UnknownEventHandler,
    /// A property is known but cannot be used from components.
    DisallowedProperty,
    /// A number property was given NaN.
    NanValue,
    /// A boolean was given to an attribute that is not a boolean attribute.
    BooleanForNonBoolean,
    /// The string `"true"` or `"false"` was given to a boolean attribute.
    BooleanString,
    /// An attribute name contains characters the DOM does not allow.
    InvalidAttributeName,
    /// An `aria-*` property is not a valid ARIA attribute.
    InvalidAria,
    /// A form control was given an explicit null value.
    NullValue,
}

/// Receives the warnings the validator produces.
///
/// Warnings never affect rendering; a sink can drop them on the floor.
pub trait WarningSink {
    fn warn(&mut self, kind: WarningKind, message: fmt::Arguments<'_>);
}

impl<S: WarningSink + ?Sized> WarningSink for &mut S {
    fn warn(&mut self, kind: WarningKind, message: fmt::Arguments<'_>) {
        (**self).warn(kind, message)
    }
}

impl<S: WarningSink + ?Sized> WarningSink for Box<S> {
    fn warn(&mut self, kind: WarningKind, message: fmt::Arguments<'_>) {
        (**self).warn(kind, message)
    }
}

/// Forwards warnings to `tracing` at the `WARN` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&mut self, kind: WarningKind, message: fmt::Arguments<'_>) {
        tracing::warn!(target: "dioxus_dom_props", ?kind, "{message}");
    }
}

/// A warning that was recorded by a `Vec<Warning>` sink.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl WarningSink for Vec<Warning> {
    fn warn(&mut self, kind: WarningKind, message: fmt::Arguments<'_>) {
        self.push(Warning {
            kind,
            message: message.to_string(),
        });
    }
}

/// Property names that already produced a warning.
///
/// Each validator pass keeps its own set so a name warned about by one pass can still be reported by another.
#[derive(Debug, Default, Clone)]
pub struct WarnedProperties {
    pub(crate) unknown: FxHashSet<String>,
    pub(crate) aria: FxHashSet<String>,
    pub(crate) null_value: bool,
}

impl WarnedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the unknown property pass already warned about this name.
    pub fn has_warned(&self, name: &str) -> bool {
        self.unknown.contains(name)
    }

    /// Whether the ARIA pass already warned about this name.
    pub fn has_warned_aria(&self, name: &str) -> bool {
        self.aria.contains(name)
    }

    /// Forget every warning so they can be reported again.
    pub fn clear(&mut self) {
        self.unknown.clear();
        self.aria.clear();
        self.null_value = false;
    }
}

/// Points a warning at the element that caused it.
pub(crate) struct StackAddendum<'a> {
    pub tag: &'a str,
    pub debug_id: Option<&'a str>,
}

impl fmt::Display for StackAddendum<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.debug_id {
            Some(id) => write!(f, "\n    in <{}> (at {})", self.tag, id),
            None => Ok(()),
        }
    }
}

/// Formats a list of property names as "`a`, `b`, `c`".
pub(crate) struct PropList<'a>(pub &'a [&'a str]);

impl fmt::Display for PropList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, name) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "`{name}`")?;
        }
        Ok(())
    }
}
