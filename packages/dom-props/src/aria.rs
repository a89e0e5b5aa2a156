//! Validation for `aria-*` properties.
//!
//! `aria-*` attributes are passed to the DOM verbatim, so a typo silently produces an attribute assistive technology
//! ignores. This pass checks them against the attributes defined by WAI-ARIA.

use crate::context::PropContext;
use crate::names::is_attribute_name_char;
use crate::value::Props;
use crate::warning::{PropList, StackAddendum, WarningKind, WarningSink};

/// Every attribute defined by WAI-ARIA 1.1.
pub const VALID_ARIA_PROPERTIES: &[&str] = &[
    // Global attributes
    "aria-current",
    "aria-details",
    "aria-disabled",
    "aria-hidden",
    "aria-invalid",
    "aria-keyshortcuts",
    "aria-label",
    "aria-roledescription",
    // Widget attributes
    "aria-autocomplete",
    "aria-checked",
    "aria-expanded",
    "aria-haspopup",
    "aria-level",
    "aria-modal",
    "aria-multiline",
    "aria-multiselectable",
    "aria-orientation",
    "aria-placeholder",
    "aria-pressed",
    "aria-readonly",
    "aria-required",
    "aria-selected",
    "aria-sort",
    "aria-valuemax",
    "aria-valuemin",
    "aria-valuenow",
    "aria-valuetext",
    // Live region attributes
    "aria-atomic",
    "aria-busy",
    "aria-live",
    "aria-relevant",
    // Drag-and-drop attributes
    "aria-dropeffect",
    "aria-grabbed",
    // Relationship attributes
    "aria-activedescendant",
    "aria-colcount",
    "aria-colindex",
    "aria-colspan",
    "aria-controls",
    "aria-describedby",
    "aria-errormessage",
    "aria-flowto",
    "aria-labelledby",
    "aria-owns",
    "aria-posinset",
    "aria-rowcount",
    "aria-rowindex",
    "aria-rowspan",
    "aria-setsize",
];

fn valid_aria_property(name: &str) -> Option<&'static str> {
    VALID_ARIA_PROPERTIES
        .iter()
        .copied()
        .find(|valid| *valid == name)
}

/// `ariaLabel` style names: `aria` followed by an uppercase letter.
pub fn is_aria_camel_case(name: &str) -> bool {
    let Some(rest) = name.strip_prefix("aria") else {
        return false;
    };
    let mut chars = rest.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase()) && chars.all(is_attribute_name_char)
}

/// `aria-label` style names.
fn is_aria_attribute(name: &str) -> bool {
    name.strip_prefix("aria-")
        .is_some_and(|rest| rest.chars().all(is_attribute_name_char))
}

impl<S: WarningSink> PropContext<S> {
    /// Validate a single `aria-*` property.
    ///
    /// Returns `false` if the property is not a valid ARIA attribute and should be part of the element's batched
    /// warning. Miscased attributes are reported individually.
    pub fn validate_aria_property(&mut self, tag_name: &str, name: &str, debug_id: Option<&str>) -> bool {
        if self.warned.aria.contains(name) {
            return true;
        }

        let stack = StackAddendum {
            tag: tag_name,
            debug_id,
        };

        if is_aria_camel_case(name) {
            let aria_name = format!("aria-{}", name[4..].to_lowercase());
            match valid_aria_property(&aria_name) {
                Some(correct_name) => self.sink.warn(
                    WarningKind::InvalidAria,
                    format_args!("Invalid ARIA attribute `{name}`. Did you mean `{correct_name}`?{stack}"),
                ),
                None => self.sink.warn(
                    WarningKind::InvalidAria,
                    format_args!(
                        "Invalid ARIA attribute `{name}`. ARIA attributes follow the pattern aria-* and must be lowercase.{stack}"
                    ),
                ),
            }
            self.warned.aria.insert(name.to_string());
            return true;
        }

        if is_aria_attribute(name) {
            let lowercased = name.to_lowercase();
            let Some(standard_name) = valid_aria_property(&lowercased) else {
                self.warned.aria.insert(name.to_string());
                return false;
            };

            if name != standard_name {
                self.sink.warn(
                    WarningKind::InvalidAria,
                    format_args!("Unknown ARIA attribute `{name}`. Did you mean `{standard_name}`?{stack}"),
                );
                self.warned.aria.insert(name.to_string());
            }
        }

        true
    }

    pub(crate) fn warn_invalid_aria_properties(
        &mut self,
        tag_name: &str,
        props: &Props,
        debug_id: Option<&str>,
    ) {
        let mut invalid = Vec::new();
        for (name, _) in props.iter() {
            if !self.validate_aria_property(tag_name, name, debug_id) {
                invalid.push(name);
            }
        }

        let stack = StackAddendum {
            tag: tag_name,
            debug_id,
        };

        match invalid.len() {
            0 => {}
            1 => self.sink.warn(
                WarningKind::InvalidAria,
                format_args!(
                    "Invalid aria prop {} on <{tag_name}> tag.{stack}",
                    PropList(&invalid)
                ),
            ),
            _ => self.sink.warn(
                WarningKind::InvalidAria,
                format_args!(
                    "Invalid aria props {} on <{tag_name}> tag.{stack}",
                    PropList(&invalid)
                ),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_detection() {
        assert!(is_aria_camel_case("ariaLabel"));
        assert!(is_aria_camel_case("ariaHasPopup"));
        assert!(!is_aria_camel_case("aria-label"));
        assert!(!is_aria_camel_case("arialabel"));
        assert!(!is_aria_camel_case("aria"));
    }

    #[test]
    fn valid_attributes_are_known() {
        assert_eq!(valid_aria_property("aria-label"), Some("aria-label"));
        assert_eq!(valid_aria_property("aria-labelled"), None);
    }
}
