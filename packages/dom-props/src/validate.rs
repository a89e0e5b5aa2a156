use crate::aria::is_aria_camel_case;
use crate::context::PropContext;
use crate::registry::is_custom_attribute;
use crate::reserved::is_reserved_prop;
use crate::value::{PropValue, Props};
use crate::warning::{PropList, StackAddendum, WarningKind, WarningSink};

/// How the validator sees a single property name on a standard element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A DOM property, custom attribute, reserved property or event handler.
    Known,
    /// Not known, but close enough to a known name to suggest it.
    Misspelled(Suggestion),
    /// Recognized, but not allowed on elements.
    Rejected(Rejection),
    /// Not known and nothing similar is known either.
    Unknown,
}

/// The correctly spelled name for a misspelled property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub name: String,
    pub kind: SuggestionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    DomProperty,
    EventHandler,
}

/// Why a recognized property is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `innerHTML` in any casing. `dangerouslySetInnerHTML` is the supported way.
    InnerHtml,
    /// `onFocusIn` and `onFocusOut`. Focus events already bubble.
    FocusInOut,
    /// The bare `aria` property.
    AriaReserved,
    /// Looks like an event handler, but the event registry does not know it.
    UnknownEventHandler,
    /// Looks like an event handler, but is not camelCased. Only reported without an event registry.
    EventHandlerCasing,
}

/// The outcome of validating one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropStatus {
    /// Nothing left to report for this property.
    Valid,
    /// The name is unknown and should be part of the element's batched warning.
    Unknown,
    /// The value cannot be written to the DOM and should be part of the element's batched warning.
    InvalidValue,
}

/// Whether the tag is a custom element. Custom elements accept any property.
pub fn is_custom_element(tag_name: &str) -> bool {
    tag_name.contains('-')
}

/// Whether the element is a custom element, either by tag or through the `is` property.
pub fn is_custom_component(tag_name: &str, props: &Props) -> bool {
    is_custom_element(tag_name) || props.contains("is")
}

// `^on.`
fn looks_like_event_handler(name: &str) -> bool {
    name.starts_with("on") && name.chars().nth(2).is_some()
}

// `^on[A-Z]`
fn is_camel_cased_event_handler(name: &str) -> bool {
    name.strip_prefix("on")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

impl<S: WarningSink> PropContext<S> {
    /// Classify a property name on an element, without warning.
    pub fn classify(&self, tag_name: &str, name: &str) -> Classification {
        if is_custom_element(tag_name) {
            return Classification::Known;
        }

        if self.registry.contains(name)
            || is_custom_attribute(name)
            || is_reserved_prop(name)
            || is_aria_camel_case(name)
        {
            return Classification::Known;
        }

        let lowercased = name.to_lowercase();
        match lowercased.as_str() {
            "onfocusin" | "onfocusout" => return Classification::Rejected(Rejection::FocusInOut),
            "innerhtml" => return Classification::Rejected(Rejection::InnerHtml),
            "aria" => return Classification::Rejected(Rejection::AriaReserved),
            _ => {}
        }

        match &self.events {
            Some(events) => {
                if events.is_registration_name(name) {
                    return Classification::Known;
                }
                if let Some(registration_name) = events.possible_registration_name(&lowercased) {
                    return Classification::Misspelled(Suggestion {
                        name: registration_name.to_string(),
                        kind: SuggestionKind::EventHandler,
                    });
                }
            }
            None if looks_like_event_handler(name) => {
                return match is_camel_cased_event_handler(name) {
                    true => Classification::Known,
                    false => Classification::Rejected(Rejection::EventHandlerCasing),
                };
            }
            None => {}
        }

        if is_custom_attribute(&lowercased) {
            return Classification::Misspelled(Suggestion {
                name: lowercased,
                kind: SuggestionKind::DomProperty,
            });
        }

        if let Some(standard_name) = self.registry.possible_standard_name(&lowercased) {
            return Classification::Misspelled(Suggestion {
                name: standard_name.to_string(),
                kind: SuggestionKind::DomProperty,
            });
        }

        if self.events.is_some() && looks_like_event_handler(name) {
            return Classification::Rejected(Rejection::UnknownEventHandler);
        }

        Classification::Unknown
    }

    /// Validate every property of an element, warning about anything suspicious.
    ///
    /// Unknown properties and invalid values are each reported in one batched warning per element. Misspelled and
    /// rejected properties are reported individually. Each property name is reported at most once for the lifetime of
    /// the context. Custom elements are never validated.
    ///
    /// The `debug_id` is only used to point the warnings at the element, usually a source location.
    pub fn validate_element(&mut self, tag_name: &str, props: &Props, debug_id: Option<&str>) {
        if !self.config.enabled || is_custom_component(tag_name, props) {
            return;
        }

        self.warn_unknown_properties(tag_name, props, debug_id);

        if self.config.validate_aria {
            self.warn_invalid_aria_properties(tag_name, props, debug_id);
        }

        if self.config.validate_null_values {
            self.warn_null_value(tag_name, props);
        }
    }

    /// Validate a single property, warning about everything that is not batched.
    pub fn validate_property(
        &mut self,
        tag_name: &str,
        name: &str,
        value: &PropValue,
        debug_id: Option<&str>,
    ) -> PropStatus {
        if self.warned.unknown.contains(name) {
            return PropStatus::Valid;
        }

        let stack = StackAddendum {
            tag: tag_name,
            debug_id,
        };

        match self.classify(tag_name, name) {
            Classification::Known => {}
            Classification::Misspelled(suggestion) => {
                let (kind, what) = match suggestion.kind {
                    SuggestionKind::DomProperty => (WarningKind::MisspelledProperty, "DOM property"),
                    SuggestionKind::EventHandler => {
                        (WarningKind::MisspelledEventHandler, "event handler property")
                    }
                };
                self.sink.warn(
                    kind,
                    format_args!(
                        "Unknown {what} `{name}`. Did you mean `{}`?{stack}",
                        suggestion.name
                    ),
                );
                self.warned.unknown.insert(name.to_string());
                return PropStatus::Valid;
            }
            Classification::Rejected(rejection) => {
                self.warn_rejected(name, rejection, &stack);
                self.warned.unknown.insert(name.to_string());
                return PropStatus::Valid;
            }
            Classification::Unknown => {
                self.warned.unknown.insert(name.to_string());
                return PropStatus::Unknown;
            }
        }

        self.check_value(name, value, &stack)
    }

    fn warn_rejected(&mut self, name: &str, rejection: Rejection, stack: &StackAddendum<'_>) {
        match rejection {
            Rejection::InnerHtml => self.sink.warn(
                WarningKind::DisallowedProperty,
                format_args!(
                    "Directly setting property `{name}` is not permitted. Use `dangerouslySetInnerHTML` instead.{stack}"
                ),
            ),
            Rejection::FocusInOut => self.sink.warn(
                WarningKind::DisallowedProperty,
                format_args!(
                    "`{name}` is not supported. Use `onFocus` and `onBlur` instead; focus events are normalized to bubble.{stack}"
                ),
            ),
            Rejection::AriaReserved => self.sink.warn(
                WarningKind::DisallowedProperty,
                format_args!(
                    "The `aria` attribute is reserved for future use. Pass individual `aria-` attributes instead.{stack}"
                ),
            ),
            Rejection::UnknownEventHandler => self.sink.warn(
                WarningKind::UnknownEventHandler,
                format_args!("Unknown event handler property `{name}`. It will be ignored.{stack}"),
            ),
            Rejection::EventHandlerCasing => self.sink.warn(
                WarningKind::UnknownEventHandler,
                format_args!(
                    "Invalid event handler property `{name}`. Event handlers use the camelCase naming convention, for example `onClick`.{stack}"
                ),
            ),
        }
    }

    // Checks the value of a known property. Reserved properties and event handlers accept anything.
    fn check_value(&mut self, name: &str, value: &PropValue, stack: &StackAddendum<'_>) -> PropStatus {
        if !self.config.validate_values {
            return PropStatus::Valid;
        }

        let descriptor = self.registry.get(name);
        if descriptor.is_none() && !is_custom_attribute(name) {
            return PropStatus::Valid;
        }

        if value.is_nan() {
            self.sink.warn(
                WarningKind::NanValue,
                format_args!(
                    "Received NaN for the `{name}` attribute. If this is expected, cast the value to a string.{stack}"
                ),
            );
            self.warned.unknown.insert(name.to_string());
            return PropStatus::Valid;
        }

        if *value == PropValue::Listener {
            self.warned.unknown.insert(name.to_string());
            return PropStatus::InvalidValue;
        }

        let Some(descriptor) = descriptor else {
            return PropStatus::Valid;
        };

        match value {
            PropValue::Bool(b) if !descriptor.accepts_booleans() => {
                let hint = match *b {
                    true => String::new(),
                    false => format!(
                        "\n\nIf you used to conditionally omit it with {name}={{condition && value}}, pass {name}={{condition ? value : None}} instead."
                    ),
                };
                self.sink.warn(
                    WarningKind::BooleanForNonBoolean,
                    format_args!(
                        "Received `{b}` for a non-boolean attribute `{name}`.\n\nIf you want to write it to the DOM, pass a string instead: {name}=\"{b}\" or {name}={{value.to_string()}}.{hint}{stack}"
                    ),
                );
                self.warned.unknown.insert(name.to_string());
            }
            PropValue::Text(text)
                if descriptor.has_boolean_value && (text == "true" || text == "false") =>
            {
                let consequence = match text.as_str() {
                    "false" => "The browser will interpret it as a truthy value.",
                    _ => "Although this works, it will not work as expected if you pass the string \"false\".",
                };
                self.sink.warn(
                    WarningKind::BooleanString,
                    format_args!(
                        "Received the string `{text}` for the boolean attribute `{name}`. {consequence} Did you mean {name}={{{text}}}?{stack}"
                    ),
                );
                self.warned.unknown.insert(name.to_string());
            }
            _ => {}
        }

        PropStatus::Valid
    }

    fn warn_unknown_properties(&mut self, tag_name: &str, props: &Props, debug_id: Option<&str>) {
        let mut unknown = Vec::new();
        let mut invalid = Vec::new();

        for (name, value) in props.iter() {
            match self.validate_property(tag_name, name, value, debug_id) {
                PropStatus::Valid => {}
                PropStatus::Unknown => unknown.push(name),
                PropStatus::InvalidValue => invalid.push(name),
            }
        }

        let stack = StackAddendum {
            tag: tag_name,
            debug_id,
        };

        match unknown.len() {
            0 => {}
            1 => self.sink.warn(
                WarningKind::UnknownProps,
                format_args!(
                    "Unknown prop {} on <{tag_name}> tag. Remove this prop from the element.{stack}",
                    PropList(&unknown)
                ),
            ),
            _ => self.sink.warn(
                WarningKind::UnknownProps,
                format_args!(
                    "Unknown props {} on <{tag_name}> tag. Remove these props from the element.{stack}",
                    PropList(&unknown)
                ),
            ),
        }

        match invalid.len() {
            0 => {}
            1 => self.sink.warn(
                WarningKind::InvalidValues,
                format_args!(
                    "Invalid value for prop {} on <{tag_name}> tag. Either remove it from the element, or pass a string or number value to keep it in the DOM.{stack}",
                    PropList(&invalid)
                ),
            ),
            _ => self.sink.warn(
                WarningKind::InvalidValues,
                format_args!(
                    "Invalid values for props {} on <{tag_name}> tag. Either remove them from the element, or pass a string or number value to keep them in the DOM.{stack}",
                    PropList(&invalid)
                ),
            ),
        }
    }
}
