use crate::operations::{DomError, DomNode};
use crate::property::properties;
use crate::value::PropValue;

// Organized alphabetically, following
// https://developer.mozilla.org/en-US/docs/Web/HTML/Attributes
//
// Attribute names default to the lowercased property name.
properties! {
    /// Names of the HTML properties the registry knows about.
    HTML_PROPERTIES, html;

    accept;
    acceptCharset => "accept-charset";
    accessKey;
    action;
    allowFullScreen [HAS_BOOLEAN_VALUE];
    allowTransparency;
    alt;
    r#as = "as";
    r#async = "async" [HAS_BOOLEAN_VALUE];
    autoComplete;
    autoPlay [HAS_BOOLEAN_VALUE];
    capture [HAS_BOOLEAN_VALUE];
    cellPadding;
    cellSpacing;
    charSet;
    challenge;
    checked [MUST_USE_PROPERTY | HAS_BOOLEAN_VALUE];
    cite;
    classID;
    className => "class";
    cols [HAS_POSITIVE_NUMERIC_VALUE];
    colSpan;
    content;
    contentEditable;
    contextMenu;
    controls [HAS_BOOLEAN_VALUE];
    controlsList;
    coords;
    crossOrigin;
    data;
    dateTime;
    r#default = "default" [HAS_BOOLEAN_VALUE];
    defer [HAS_BOOLEAN_VALUE];
    dir;
    disabled [HAS_BOOLEAN_VALUE];
    download [HAS_OVERLOADED_BOOLEAN_VALUE];
    draggable;
    encType;
    form;
    formAction;
    formEncType;
    formMethod;
    formNoValidate [HAS_BOOLEAN_VALUE];
    formTarget;
    frameBorder;
    headers;
    height;
    hidden [HAS_BOOLEAN_VALUE];
    high;
    href;
    hrefLang;
    htmlFor => "for";
    httpEquiv => "http-equiv";
    icon;
    id;
    inputMode;
    integrity;
    is;
    keyParams;
    keyType;
    kind;
    label;
    lang;
    list;
    r#loop = "loop" [HAS_BOOLEAN_VALUE];
    low;
    manifest;
    marginHeight;
    marginWidth;
    max;
    maxLength;
    media;
    mediaGroup;
    method;
    min;
    minLength;
    // `option.selected` is not updated if `select.multiple` is disabled with `removeAttribute`.
    multiple [MUST_USE_PROPERTY | HAS_BOOLEAN_VALUE];
    muted [MUST_USE_PROPERTY | HAS_BOOLEAN_VALUE];
    name;
    nonce;
    noValidate [HAS_BOOLEAN_VALUE];
    open [HAS_BOOLEAN_VALUE];
    optimum;
    pattern;
    placeholder;
    playsInline [HAS_BOOLEAN_VALUE];
    poster;
    preload;
    profile;
    radioGroup;
    readOnly [HAS_BOOLEAN_VALUE];
    referrerPolicy;
    rel;
    required [HAS_BOOLEAN_VALUE];
    reversed [HAS_BOOLEAN_VALUE];
    role;
    rows [HAS_POSITIVE_NUMERIC_VALUE];
    rowSpan [HAS_NUMERIC_VALUE];
    sandbox;
    scope;
    scoped [HAS_BOOLEAN_VALUE];
    scrolling;
    seamless [HAS_BOOLEAN_VALUE];
    selected [MUST_USE_PROPERTY | HAS_BOOLEAN_VALUE];
    shape;
    size [HAS_POSITIVE_NUMERIC_VALUE];
    sizes;
    span [HAS_POSITIVE_NUMERIC_VALUE];
    spellCheck;
    src;
    srcDoc;
    srcLang;
    srcSet;
    start [HAS_NUMERIC_VALUE];
    step;
    summary;
    tabIndex;
    target;
    title;
    r#type = "type";
    useMap;
    value with mutate_value;
    width;
    wmode;
    wrap;

    // RDFa
    about;
    datatype;
    inlist;
    prefix;
    property;
    resource;
    r#typeof = "typeof";
    vocab;

    // Non-standard
    autoCapitalize;
    autoCorrect;
    autoSave;
    color;
    itemProp;
    itemScope [HAS_BOOLEAN_VALUE];
    itemType;
    itemID;
    itemRef;
    results;
    security;
    unselectable;
}

/// Writes `value` without clobbering what the user is typing into a number input.
///
/// Number inputs report an empty value while the text is not a valid number, and rewriting the attribute would move
/// the cursor. The attribute is only rewritten for such inputs when the input is valid and not focused.
fn mutate_value(node: &mut dyn DomNode, value: Option<&PropValue>) -> Result<(), DomError> {
    let value = match value {
        None | Some(PropValue::None | PropValue::Listener) => return node.remove_attribute("value"),
        Some(value) => value,
    };

    let is_number_input = matches!(
        node.property("type"),
        Some(PropValue::Text(ty)) if ty == "number"
    );

    if !is_number_input || !node.has_attribute("value") {
        return node.set_attribute("value", &value.to_attribute_string());
    }

    if !node.has_bad_input() && !node.is_focused() {
        node.set_attribute("value", &value.to_attribute_string())?;
    }

    Ok(())
}
