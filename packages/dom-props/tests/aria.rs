use dioxus_dom_props::*;
use pretty_assertions::assert_eq;

fn context() -> PropContext<Vec<Warning>> {
    PropContext::with_sink(Vec::new()).with_config(ValidationConfig::default().with_enabled(true))
}

fn messages(ctx: &PropContext<Vec<Warning>>) -> Vec<&str> {
    ctx.sink().iter().map(|w| w.message.as_str()).collect()
}

#[test]
fn camel_cased_aria_suggests_the_attribute() {
    let mut ctx = context();
    ctx.validate_element(
        "button",
        &Props::new()
            .with("ariaLabel", "Close")
            .with("ariaSomething", "x"),
        None,
    );
    assert_eq!(
        messages(&ctx),
        [
            "Invalid ARIA attribute `ariaLabel`. Did you mean `aria-label`?",
            "Invalid ARIA attribute `ariaSomething`. ARIA attributes follow the pattern aria-* and must be lowercase.",
        ]
    );
    assert!(ctx.sink().iter().all(|w| w.kind == WarningKind::InvalidAria));
}

#[test]
fn miscased_aria_attributes_are_reported_individually() {
    let mut ctx = context();
    ctx.validate_element("div", &Props::new().with("aria-Hidden", "true"), None);
    assert_eq!(
        messages(&ctx),
        ["Unknown ARIA attribute `aria-Hidden`. Did you mean `aria-hidden`?"]
    );
}

#[test]
fn invalid_aria_attributes_are_batched() {
    let mut ctx = context();
    ctx.validate_element("div", &Props::new().with("aria-foo", "x"), None);
    ctx.validate_element(
        "span",
        &Props::new()
            .with("aria-bar", "x")
            .with("aria-label", "ok")
            .with("aria-baz", "x")
            .with("aria-foo", "x"),
        Some("src/main.rs:4:9"),
    );
    assert_eq!(
        messages(&ctx),
        [
            "Invalid aria prop `aria-foo` on <div> tag.",
            "Invalid aria props `aria-bar`, `aria-baz` on <span> tag.\n    in <span> (at src/main.rs:4:9)",
        ]
    );
    assert!(ctx.warned().has_warned_aria("aria-foo"));
    assert!(!ctx.warned().has_warned("aria-foo"));
}

#[test]
fn aria_validation_can_be_turned_off() {
    let mut ctx = PropContext::with_sink(Vec::<Warning>::new()).with_config(
        ValidationConfig::default()
            .with_enabled(true)
            .with_aria_validation(false),
    );
    ctx.validate_element(
        "div",
        &Props::new().with("ariaLabel", "x").with("aria-foo", "x"),
        None,
    );
    assert!(ctx.sink().is_empty());
}

#[test]
fn single_property_check() {
    let mut ctx = context();
    assert!(ctx.validate_aria_property("div", "aria-label", None));
    assert!(ctx.validate_aria_property("div", "title", None));
    assert!(!ctx.validate_aria_property("div", "aria-nope", None));
    // Unknown attributes are only reported by the batched warning
    assert!(ctx.sink().is_empty());
}

#[test]
fn every_valid_attribute_is_a_custom_attribute() {
    for name in VALID_ARIA_PROPERTIES {
        assert!(is_custom_attribute(name), "{name}");
    }
}

#[test]
fn null_value_on_form_controls() {
    let mut ctx = context();
    ctx.validate_element("input", &Props::new().with("value", PropValue::None), None);
    ctx.validate_element("textarea", &Props::new().with("value", PropValue::None), None);
    assert_eq!(
        messages(&ctx),
        ["`value` prop on `input` should not be null. Consider using an empty string to clear the component or leaving it unset for uncontrolled components."]
    );
    assert_eq!(ctx.sink()[0].kind, WarningKind::NullValue);
}

#[test]
fn null_value_on_multiple_select() {
    let mut ctx = context();
    ctx.validate_element(
        "select",
        &Props::new()
            .with("multiple", true)
            .with("value", PropValue::None),
        None,
    );
    assert_eq!(
        messages(&ctx),
        ["`value` prop on `select` should not be null. Consider using an empty list when `multiple` is set to `true` to clear the component or leaving it unset for uncontrolled components."]
    );
}

#[test]
fn null_value_elsewhere_is_fine() {
    let mut ctx = context();
    ctx.validate_element("div", &Props::new().with("value", PropValue::None), None);
    ctx.validate_element("input", &Props::new().with("value", ""), None);
    ctx.validate_element("input", &Props::new(), None);
    assert!(ctx.sink().is_empty());

    let mut ctx = PropContext::with_sink(Vec::<Warning>::new()).with_config(
        ValidationConfig::default()
            .with_enabled(true)
            .with_null_value_validation(false),
    );
    ctx.validate_element("input", &Props::new().with("value", PropValue::None), None);
    assert!(ctx.sink().is_empty());
}
