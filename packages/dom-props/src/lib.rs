//! # DOM properties for Dioxus renderers
//!
//! Components describe elements with property names like `className` and `htmlFor`. The DOM speaks attributes like
//! `class` and `for`. This crate holds the tables that map between the two and the rules for writing each property:
//! whether it is a boolean attribute, a number, a node property, or lives in a namespace.
//!
//! On top of the registry sits a development-time validator. It warns about properties the DOM does not know, casing
//! mistakes like `classname` or `onclick`, invalid ARIA attributes and values that cannot be written to the DOM.
//! Unknown properties on one element are batched into a single warning, and each name is reported once for the
//! lifetime of a [`PropContext`].
//!
//! ```rust
//! use dioxus_dom_props::{MemoryNode, PropContext, Props, ValidationConfig, Warning};
//!
//! let mut ctx = PropContext::with_sink(Vec::<Warning>::new())
//!     .with_config(ValidationConfig::default().with_enabled(true));
//!
//! let props = Props::new()
//!     .with("className", "card")
//!     .with("forr", "email")
//!     .with("tabindex", 0);
//! ctx.validate_element("label", &props, None);
//!
//! let messages: Vec<_> = ctx.sink().iter().map(|w| w.message.as_str()).collect();
//! assert_eq!(
//!     messages,
//!     [
//!         "Unknown DOM property `tabindex`. Did you mean `tabIndex`?",
//!         "Unknown prop `forr` on <label> tag. Remove this prop from the element.",
//!     ]
//! );
//!
//! let mut node = MemoryNode::new("label");
//! ctx.set_value_for_property(&mut node, "className", &"card".into()).unwrap();
//! assert_eq!(node.attribute("class"), Some("card"));
//! ```

mod aria;
mod config;
mod context;
mod controlled;
mod events;
mod html;
mod markup;
mod memory;
mod names;
mod operations;
mod property;
mod registry;
mod reserved;
mod svg;
mod validate;
mod value;
mod warning;

/// Name constants for every property in the registry.
///
/// Using these instead of string literals turns a typo in a property name into a compile error.
pub mod props {
    pub use crate::html::html;
    pub use crate::svg::svg;
}

pub use aria::{is_aria_camel_case, VALID_ARIA_PROPERTIES};
pub use config::{ValidationConfig, CONFIG_ENV};
pub use context::PropContext;
pub use events::{EventRegistry, StandardEvents};
pub use memory::MemoryNode;
pub use names::{is_valid_attribute_name, AttributeNameCache, NameCheck};
pub use operations::{DomError, DomNode};
pub use property::{flags, AttributeDescriptor, MutationMethod, PropertySpec};
pub use registry::{is_custom_attribute, AttributeRegistry, RegistryBuilder, RegistryError};
pub use reserved::{is_reserved_prop, RESERVED_PROPS};
pub use svg::{XLINK_NAMESPACE, XML_NAMESPACE};
pub use validate::{
    is_custom_component, is_custom_element, Classification, PropStatus, Rejection, Suggestion,
    SuggestionKind,
};
pub use value::{PropValue, Props};
pub use warning::{TracingSink, WarnedProperties, Warning, WarningKind, WarningSink};
