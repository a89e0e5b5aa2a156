use std::borrow::Cow;

use crate::operations::{DomError, DomNode};
use crate::value::PropValue;

/// Custom setter logic that replaces the default attribute or property assignment.
///
/// The mutation method is called with `None` when the property is removed.
pub type MutationMethod = fn(&mut dyn DomNode, Option<&PropValue>) -> Result<(), DomError>;

/// Bit flags used in the property tables.
pub mod flags {
    /// The value must be written to the node property instead of the attribute.
    pub const MUST_USE_PROPERTY: u8 = 0x1;
    /// The attribute is present or absent depending on the truthiness of the value.
    pub const HAS_BOOLEAN_VALUE: u8 = 0x4;
    /// The attribute is removed when the value is not a number.
    pub const HAS_NUMERIC_VALUE: u8 = 0x8;
    /// The attribute is removed when the value is not a number or is less than one.
    pub const HAS_POSITIVE_NUMERIC_VALUE: u8 = 0x10 | HAS_NUMERIC_VALUE;
    /// The attribute can hold either a boolean or a string.
    pub const HAS_OVERLOADED_BOOLEAN_VALUE: u8 = 0x20;
}

/// One row of a static property table.
///
/// Rows are const so whole tables can live in the binary; [`crate::AttributeRegistry`] turns them into
/// [`AttributeDescriptor`]s when it is built.
#[derive(Clone, Copy)]
pub struct PropertySpec {
    /// The name components use for the property, like `className`.
    pub name: &'static str,
    /// The literal attribute name if it is not the lowercased property name.
    pub attribute_name: Option<&'static str>,
    /// The namespace the attribute lives in, if any.
    pub namespace: Option<&'static str>,
    /// A combination of the values in [`flags`].
    pub flags: u8,
    pub mutation_method: Option<MutationMethod>,
}

impl PropertySpec {
    /// A plain string property whose attribute is the lowercased property name.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            attribute_name: None,
            namespace: None,
            flags: 0,
            mutation_method: None,
        }
    }

    pub const fn attribute(mut self, attribute_name: &'static str) -> Self {
        self.attribute_name = Some(attribute_name);
        self
    }

    pub const fn namespace(mut self, namespace: &'static str) -> Self {
        self.namespace = Some(namespace);
        self
    }

    pub const fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    pub const fn mutation_method(mut self, method: MutationMethod) -> Self {
        self.mutation_method = Some(method);
        self
    }
}

impl std::fmt::Debug for PropertySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertySpec")
            .field("name", &self.name)
            .field("attribute_name", &self.attribute_name)
            .field("namespace", &self.namespace)
            .field("flags", &self.flags)
            .field("mutation_method", &self.mutation_method.is_some())
            .finish()
    }
}

/// Everything the renderer needs to know to write one property to the DOM.
#[derive(Clone)]
pub struct AttributeDescriptor {
    /// The name components use for the property, like `htmlFor`.
    pub property_name: &'static str,
    /// The literal attribute name, like `for`.
    pub attribute_name: Cow<'static, str>,
    pub attribute_namespace: Option<&'static str>,
    pub must_use_property: bool,
    pub has_boolean_value: bool,
    pub has_numeric_value: bool,
    pub has_positive_numeric_value: bool,
    pub has_overloaded_boolean_value: bool,
    pub mutation_method: Option<MutationMethod>,
}

impl AttributeDescriptor {
    pub(crate) fn from_spec(spec: &PropertySpec) -> Self {
        let check = |mask: u8| spec.flags & mask == mask;
        Self {
            property_name: spec.name,
            attribute_name: match spec.attribute_name {
                Some(name) => Cow::Borrowed(name),
                None => Cow::Owned(spec.name.to_ascii_lowercase()),
            },
            attribute_namespace: spec.namespace,
            must_use_property: check(flags::MUST_USE_PROPERTY),
            has_boolean_value: check(flags::HAS_BOOLEAN_VALUE),
            has_numeric_value: check(flags::HAS_NUMERIC_VALUE),
            has_positive_numeric_value: check(flags::HAS_POSITIVE_NUMERIC_VALUE),
            has_overloaded_boolean_value: check(flags::HAS_OVERLOADED_BOOLEAN_VALUE),
            mutation_method: spec.mutation_method,
        }
    }

    /// Whether the attribute is written as a bare, valueless attribute when set.
    pub fn accepts_booleans(&self) -> bool {
        self.has_boolean_value || self.has_overloaded_boolean_value
    }

    /// Whether writing this value should remove the attribute instead.
    pub fn should_ignore_value(&self, value: &PropValue) -> bool {
        match value {
            PropValue::None | PropValue::Listener => return true,
            _ => {}
        }

        (self.has_boolean_value && !value.is_truthy())
            || (self.has_numeric_value && value.to_number().is_nan())
            || (self.has_positive_numeric_value && value.to_number() < 1.0)
            || (self.has_overloaded_boolean_value && *value == PropValue::Bool(false))
    }
}

impl std::fmt::Debug for AttributeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeDescriptor")
            .field("property_name", &self.property_name)
            .field("attribute_name", &self.attribute_name)
            .field("attribute_namespace", &self.attribute_namespace)
            .field("must_use_property", &self.must_use_property)
            .field("has_boolean_value", &self.has_boolean_value)
            .field("has_numeric_value", &self.has_numeric_value)
            .field("has_positive_numeric_value", &self.has_positive_numeric_value)
            .field(
                "has_overloaded_boolean_value",
                &self.has_overloaded_boolean_value,
            )
            .field("mutation_method", &self.mutation_method.is_some())
            .finish()
    }
}

/// Declares a property table along with a module of name constants for it.
///
/// ```rust, ignore
/// properties! {
///     /// HTML properties
///     HTML_PROPERTIES, html;
///
///     className => "class";
///     checked [MUST_USE_PROPERTY | HAS_BOOLEAN_VALUE];
///     r#type = "type";
///     xlinkHref => "xlink:href" in XLINK;
///     value with mutate_value;
/// }
/// ```
macro_rules! properties {
    (
        $(#[$mod_attr:meta])*
        $table:ident, $module:ident;
        $(
            $name:ident $(= $prop:literal)? $(=> $attr:literal)? $(in $ns:ident)? $([$($flag:ident)|+])? $(with $mutation:ident)?;
        )*
    ) => {
        pub(crate) const $table: &[$crate::property::PropertySpec] = &[
            $(
                $crate::property::PropertySpec {
                    name: $crate::property::properties!(@name $name $($prop)?),
                    attribute_name: $crate::property::properties!(@opt $($attr)?),
                    namespace: $crate::property::properties!(@opt $($ns)?),
                    flags: 0 $($(| $crate::property::flags::$flag)+)?,
                    mutation_method: $crate::property::properties!(@method $($mutation)?),
                },
            )*
        ];

        $(#[$mod_attr])*
        #[allow(non_upper_case_globals)]
        pub mod $module {
            $(
                pub const $name: &str = $crate::property::properties!(@name $name $($prop)?);
            )*
        }
    };

    (@name $name:ident) => { stringify!($name) };
    (@name $name:ident $prop:literal) => { $prop };

    (@opt) => { None };
    (@opt $value:expr) => { Some($value) };

    (@method) => { None };
    (@method $method:ident) => { Some($method as $crate::property::MutationMethod) };
}

pub(crate) use properties;
