use std::fmt::Display;

use dioxus_dom_props::{PropContext, ValidationConfig, Warning, WarningKind};
use owo_colors::{
    colors::{css::LightBlue, BrightYellow},
    OwoColorize,
};
use serde::Serialize;

use crate::input::ElementInput;

/// The warnings produced while checking one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementReport {
    pub index: usize,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_id: Option<String>,
    pub warnings: Vec<Warning>,
}

/// Validate every element with a single context so each property is reported once per run.
pub fn check_elements(
    elements: &[ElementInput],
    config: ValidationConfig,
    server: bool,
) -> Vec<ElementReport> {
    let mut ctx = PropContext::with_sink(Vec::<Warning>::new()).with_config(config);
    if server {
        ctx = ctx.without_events();
    }

    let mut reports = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        ctx.validate_element(&element.tag, &element.props(), element.debug_id.as_deref());

        let warnings = std::mem::take(ctx.sink_mut());
        tracing::debug!(
            "Checked <{}> #{index}: {} warnings",
            element.tag,
            warnings.len()
        );

        if warnings.is_empty() {
            continue;
        }

        reports.push(ElementReport {
            index,
            tag: element.tag.clone(),
            debug_id: element.debug_id.clone(),
            warnings,
        });
    }

    reports
}

fn kind_label(kind: WarningKind) -> &'static str {
    match kind {
        WarningKind::UnknownProps => "unknown-props",
        WarningKind::InvalidValues => "invalid-values",
        WarningKind::MisspelledProperty => "misspelled-property",
        WarningKind::MisspelledEventHandler => "misspelled-event-handler",
        WarningKind::UnknownEventHandler => "unknown-event-handler",
        WarningKind::DisallowedProperty => "disallowed-property",
        WarningKind::NanValue => "nan-value",
        WarningKind::BooleanForNonBoolean => "boolean-for-non-boolean",
        WarningKind::BooleanString => "boolean-string",
        WarningKind::InvalidAttributeName => "invalid-attribute-name",
        WarningKind::InvalidAria => "invalid-aria",
        WarningKind::NullValue => "null-value",
    }
}

impl Display for ElementReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for warning in &self.warnings {
            // The location is printed below the message instead
            let message = warning
                .message
                .split_once("\n    in <")
                .map_or(warning.message.as_str(), |(message, _)| message);

            let heading = format!(
                "{}[{}]: {}",
                "warning".fg::<BrightYellow>(),
                kind_label(warning.kind),
                message
            );
            writeln!(f, "{}", heading.bold())?;

            match &self.debug_id {
                Some(debug_id) => writeln!(
                    f,
                    "  {} <{}> (element {}) at {}",
                    "-->".fg::<LightBlue>(),
                    self.tag,
                    self.index,
                    debug_id
                )?,
                None => writeln!(
                    f,
                    "  {} <{}> (element {})",
                    "-->".fg::<LightBlue>(),
                    self.tag,
                    self.index
                )?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_elements;
    use pretty_assertions::assert_eq;

    fn enabled() -> ValidationConfig {
        ValidationConfig::default().with_enabled(true)
    }

    #[test]
    fn clean_elements_are_left_out() {
        let elements = parse_elements(
            r#"[
                { "tag": "div", "props": { "className": "a" } },
                { "tag": "div", "props": { "class": "a" }, "debug_id": "app.rs:2" }
            ]"#,
        )
        .unwrap();

        let reports = check_elements(&elements, enabled(), false);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].index, 1);
        assert_eq!(reports[0].warnings[0].kind, WarningKind::MisspelledProperty);
    }

    #[test]
    fn names_are_reported_once_per_run() {
        let elements = parse_elements(
            r#"[
                { "tag": "div", "props": { "foo": 1 } },
                { "tag": "span", "props": { "foo": 1 } }
            ]"#,
        )
        .unwrap();

        let reports = check_elements(&elements, enabled(), false);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].tag, "div");
    }

    #[test]
    fn server_mode_only_checks_casing() {
        let elements = parse_elements(
            r#"[{ "tag": "button", "props": { "onFoo": {}, "onclick": {} } }]"#,
        )
        .unwrap();

        let client = check_elements(&elements, enabled(), false);
        assert_eq!(client[0].warnings.len(), 2);

        let server = check_elements(&elements, enabled(), true);
        assert_eq!(server[0].warnings.len(), 1);
        assert_eq!(server[0].warnings[0].kind, WarningKind::UnknownEventHandler);
    }

    #[test]
    fn report_lists_every_warning() {
        let report = ElementReport {
            index: 3,
            tag: "div".to_string(),
            debug_id: Some("app.rs:7".to_string()),
            warnings: vec![Warning {
                kind: WarningKind::UnknownProps,
                message: "Unknown prop `foo` on <div> tag. Remove this prop from the element.\n    in <div> (at app.rs:7)".to_string(),
            }],
        };

        let out = report.to_string();
        assert!(out.contains("unknown-props"));
        assert!(out.contains("Remove this prop from the element."));
        assert!(out.contains("<div> (element 3) at app.rs:7"));
        assert!(!out.contains("(at app.rs:7)"));
    }
}
