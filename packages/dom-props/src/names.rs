//! Attribute name validation.
//!
//! Attribute names follow the XML `Name` production. Names that fail the check are never written to the DOM since
//! `setAttribute` would throw for them.

use rustc_hash::FxHashSet;

/// Characters that can start an attribute name.
pub fn is_attribute_name_start_char(c: char) -> bool {
    matches!(c,
        ':'
        | 'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
    )
}

/// Characters that can appear anywhere after the first character of an attribute name.
pub fn is_attribute_name_char(c: char) -> bool {
    is_attribute_name_start_char(c)
        || matches!(c,
            '-'
            | '.'
            | '0'..='9'
            | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}'
        )
}

/// Whether the whole string is a valid attribute name.
pub fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_attribute_name_start_char(first) => chars.all(is_attribute_name_char),
        _ => false,
    }
}

/// The result of checking an attribute name against the [`AttributeNameCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCheck {
    /// The name is valid.
    Safe,
    /// The name is invalid and this is the first time it was seen.
    NewlyRejected,
    /// The name is invalid and was already reported.
    Rejected,
}

impl NameCheck {
    pub fn is_safe(self) -> bool {
        self == NameCheck::Safe
    }
}

/// Remembers which attribute names were already validated so each name is only checked once.
#[derive(Debug, Default, Clone)]
pub struct AttributeNameCache {
    validated: FxHashSet<String>,
    illegal: FxHashSet<String>,
}

impl AttributeNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, name: &str) -> NameCheck {
        if self.validated.contains(name) {
            return NameCheck::Safe;
        }
        if self.illegal.contains(name) {
            return NameCheck::Rejected;
        }

        if is_valid_attribute_name(name) {
            self.validated.insert(name.to_string());
            NameCheck::Safe
        } else {
            self.illegal.insert(name.to_string());
            NameCheck::NewlyRejected
        }
    }
}
