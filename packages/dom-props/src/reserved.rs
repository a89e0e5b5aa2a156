/// Properties that only mean something to the renderer. They are never written to the DOM.
pub const RESERVED_PROPS: &[&str] = &[
    "children",
    "dangerouslySetInnerHTML",
    "key",
    "ref",
    "autoFocus",
    "defaultValue",
    "defaultChecked",
    "style",
    "suppressContentEditableWarning",
    "suppressHydrationWarning",
];

/// Whether the property is reserved by the renderer.
pub fn is_reserved_prop(name: &str) -> bool {
    RESERVED_PROPS.contains(&name)
}
