use dioxus_dom_props::*;
use pretty_assertions::assert_eq;

fn context() -> PropContext<Vec<Warning>> {
    PropContext::with_sink(Vec::new()).with_config(ValidationConfig::default().with_enabled(true))
}

#[test]
fn mapped_attribute_names() {
    let mut ctx = context();
    let mut node = MemoryNode::new("label");
    ctx.set_value_for_property(&mut node, "className", &"a b".into())
        .unwrap();
    ctx.set_value_for_property(&mut node, "htmlFor", &"email".into())
        .unwrap();
    ctx.set_value_for_property(&mut node, "tabIndex", &PropValue::Float(1.0))
        .unwrap();

    assert_eq!(
        node.attributes().collect::<Vec<_>>(),
        [
            (None, "class", "a b"),
            (None, "for", "email"),
            (None, "tabindex", "1"),
        ]
    );
}

#[test]
fn properties_are_written_to_the_node() {
    let mut ctx = context();
    let mut node = MemoryNode::new("input");
    ctx.set_value_for_property(&mut node, "checked", &true.into())
        .unwrap();
    assert_eq!(node.property("checked"), Some(PropValue::Bool(true)));
    assert_eq!(node.attribute("checked"), None);

    ctx.delete_value_for_property(&mut node, "checked").unwrap();
    assert_eq!(node.property("checked"), Some(PropValue::Bool(false)));

    // Falsy values reset the property as well
    ctx.set_value_for_property(&mut node, "checked", &true.into())
        .unwrap();
    ctx.set_value_for_property(&mut node, "checked", &false.into())
        .unwrap();
    assert_eq!(node.property("checked"), Some(PropValue::Bool(false)));
}

#[test]
fn boolean_attributes() {
    let mut ctx = context();
    let mut node = MemoryNode::new("button");
    ctx.set_value_for_property(&mut node, "disabled", &true.into())
        .unwrap();
    assert_eq!(node.attribute("disabled"), Some(""));

    ctx.set_value_for_property(&mut node, "disabled", &"".into())
        .unwrap();
    assert_eq!(node.attribute("disabled"), None);

    ctx.set_value_for_property(&mut node, "hidden", &"yes".into())
        .unwrap();
    assert_eq!(node.attribute("hidden"), Some(""));
}

#[test]
fn overloaded_boolean_attributes() {
    let mut ctx = context();
    let mut node = MemoryNode::new("a");
    ctx.set_value_for_property(&mut node, "download", &true.into())
        .unwrap();
    assert_eq!(node.attribute("download"), Some(""));

    ctx.set_value_for_property(&mut node, "download", &"report.pdf".into())
        .unwrap();
    assert_eq!(node.attribute("download"), Some("report.pdf"));

    ctx.set_value_for_property(&mut node, "download", &false.into())
        .unwrap();
    assert_eq!(node.attribute("download"), None);
}

#[test]
fn numeric_attributes() {
    let mut ctx = context();
    let mut node = MemoryNode::new("textarea");
    ctx.set_value_for_property(&mut node, "rows", &3.into()).unwrap();
    assert_eq!(node.attribute("rows"), Some("3"));

    ctx.set_value_for_property(&mut node, "rows", &0.into()).unwrap();
    assert_eq!(node.attribute("rows"), None);

    ctx.set_value_for_property(&mut node, "rowSpan", &"two".into())
        .unwrap();
    assert_eq!(node.attribute("rowspan"), None);

    ctx.set_value_for_property(&mut node, "rowSpan", &0.into())
        .unwrap();
    assert_eq!(node.attribute("rowspan"), Some("0"));
}

#[test]
fn namespaced_attributes() {
    let mut ctx = context();
    let mut node = MemoryNode::new("use");
    ctx.set_value_for_property(&mut node, "xlinkHref", &"#icon".into())
        .unwrap();
    ctx.set_value_for_property(&mut node, "xmlLang", &"en".into())
        .unwrap();
    ctx.set_value_for_property(&mut node, "viewBox", &"0 0 24 24".into())
        .unwrap();

    assert_eq!(node.attribute_ns(XLINK_NAMESPACE, "xlink:href"), Some("#icon"));
    assert_eq!(node.attribute_ns(XML_NAMESPACE, "xml:lang"), Some("en"));
    assert_eq!(node.attribute("viewBox"), Some("0 0 24 24"));

    ctx.delete_value_for_property(&mut node, "xlinkHref").unwrap();
    assert_eq!(node.attribute_ns(XLINK_NAMESPACE, "xlink:href"), None);
}

#[test]
fn null_removes_the_attribute() {
    let mut ctx = context();
    let mut node = MemoryNode::new("div");
    ctx.set_value_for_property(&mut node, "title", &"hello".into())
        .unwrap();
    ctx.set_value_for_property(&mut node, "title", &PropValue::None)
        .unwrap();
    assert_eq!(node.attribute("title"), None);
}

#[test]
fn unknown_properties_and_listeners_are_not_written() {
    let mut ctx = context();
    let mut node = MemoryNode::new("div");
    ctx.set_value_for_property(&mut node, "foo", &"1".into())
        .unwrap();
    ctx.set_value_for_property(&mut node, "onClick", &PropValue::Listener)
        .unwrap();
    ctx.set_value_for_property(&mut node, "key", &"1".into())
        .unwrap();
    assert_eq!(node, MemoryNode::new("div"));
}

#[test]
fn custom_attributes_are_written_verbatim() {
    let mut ctx = context();
    let mut node = MemoryNode::new("div");
    ctx.set_value_for_property(&mut node, "data-fooBar", &"1".into())
        .unwrap();
    ctx.set_value_for_property(&mut node, "aria-label", &"Close".into())
        .unwrap();
    assert_eq!(node.attribute("data-fooBar"), Some("1"));
    assert_eq!(node.attribute("aria-label"), Some("Close"));

    ctx.set_value_for_property(&mut node, "data-fooBar", &PropValue::None)
        .unwrap();
    ctx.delete_value_for_property(&mut node, "aria-label").unwrap();
    assert_eq!(node.attribute("data-fooBar"), None);
    assert_eq!(node.attribute("aria-label"), None);
}

#[test]
fn invalid_attribute_names_are_skipped_and_reported_once() {
    let mut ctx = context();
    let mut node = MemoryNode::new("my-element");
    ctx.set_value_for_attribute(&mut node, "some attr", &"1".into())
        .unwrap();
    ctx.set_value_for_attribute(&mut node, "some attr", &"2".into())
        .unwrap();
    ctx.set_value_for_attribute(&mut node, "someAttr", &"3".into())
        .unwrap();

    assert_eq!(node.attribute("some attr"), None);
    assert_eq!(node.attribute("someAttr"), Some("3"));
    assert_eq!(
        ctx.sink().as_slice(),
        [Warning {
            kind: WarningKind::InvalidAttributeName,
            message: "Invalid attribute name: `some attr`".to_string(),
        }]
    );
}

#[test]
fn number_inputs_keep_what_the_user_is_typing() {
    let mut ctx = context();
    let mut node = MemoryNode::new("input");
    node.set_property("type", "number".into()).unwrap();

    ctx.set_value_for_property(&mut node, "value", &1.into())
        .unwrap();
    assert_eq!(node.attribute("value"), Some("1"));

    node.set_focused(true);
    ctx.set_value_for_property(&mut node, "value", &2.into())
        .unwrap();
    assert_eq!(node.attribute("value"), Some("1"));

    node.set_focused(false);
    node.set_bad_input(true);
    ctx.set_value_for_property(&mut node, "value", &3.into())
        .unwrap();
    assert_eq!(node.attribute("value"), Some("1"));

    node.set_bad_input(false);
    ctx.set_value_for_property(&mut node, "value", &4.into())
        .unwrap();
    assert_eq!(node.attribute("value"), Some("4"));

    ctx.delete_value_for_property(&mut node, "value").unwrap();
    assert_eq!(node.attribute("value"), None);
}

#[test]
fn listeners_never_become_the_value() {
    let mut ctx = context();
    let mut node = MemoryNode::new("input");
    ctx.set_value_for_property(&mut node, "value", &"typed".into())
        .unwrap();
    ctx.set_value_for_property(&mut node, "value", &PropValue::Listener)
        .unwrap();
    assert_eq!(node.attribute("value"), None);

    ctx.set_value_for_property(&mut node, "value", &PropValue::Listener)
        .unwrap();
    assert_eq!(node, MemoryNode::new("input"));
}

#[test]
fn large_and_non_numeric_numbers() {
    let mut ctx = context();
    let mut node = MemoryNode::new("textarea");
    ctx.set_value_for_property(&mut node, "width", &PropValue::Float(1e20))
        .unwrap();
    assert_eq!(node.attribute("width"), Some("100000000000000000000"));

    ctx.set_value_for_property(&mut node, "rows", &"inf".into())
        .unwrap();
    assert_eq!(node.attribute("rows"), None);

    ctx.set_value_for_property(&mut node, "rows", &"Infinity".into())
        .unwrap();
    assert_eq!(node.attribute("rows"), Some("Infinity"));
}

#[test]
fn text_inputs_always_take_the_value() {
    let mut ctx = context();
    let mut node = MemoryNode::new("input");
    node.set_focused(true);
    ctx.set_value_for_property(&mut node, "value", &"a".into())
        .unwrap();
    ctx.set_value_for_property(&mut node, "value", &"b".into())
        .unwrap();
    assert_eq!(node.attribute("value"), Some("b"));
}

struct FailingNode;

impl DomNode for FailingNode {
    fn set_attribute(&mut self, _name: &str, _value: &str) -> Result<(), DomError> {
        Err(DomError::Backend("detached".to_string()))
    }

    fn set_attribute_ns(&mut self, _ns: &str, _name: &str, _value: &str) -> Result<(), DomError> {
        Err(DomError::Backend("detached".to_string()))
    }

    fn remove_attribute(&mut self, _name: &str) -> Result<(), DomError> {
        Ok(())
    }

    fn has_attribute(&self, _name: &str) -> bool {
        false
    }

    fn set_property(&mut self, name: &str, _value: PropValue) -> Result<(), DomError> {
        Err(DomError::UnsupportedProperty(name.to_string()))
    }

    fn property(&self, _name: &str) -> Option<PropValue> {
        None
    }
}

#[test]
fn backend_errors_are_propagated() {
    let mut ctx = context();
    let mut node = FailingNode;
    assert_eq!(
        ctx.set_value_for_property(&mut node, "id", &"x".into()),
        Err(DomError::Backend("detached".to_string()))
    );
    assert_eq!(
        ctx.set_value_for_property(&mut node, "checked", &true.into())
            .unwrap_err()
            .to_string(),
        "the node does not support the `checked` property"
    );
    // Removing an attribute never touches the failing paths
    assert_eq!(ctx.set_value_for_property(&mut node, "id", &PropValue::None), Ok(()));
}
