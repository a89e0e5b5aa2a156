use crate::context::PropContext;
use crate::value::{PropValue, Props};
use crate::warning::{WarningKind, WarningSink};

impl<S: WarningSink> PropContext<S> {
    // Form controls are controlled through `value`. An explicit null turns a controlled control into an
    // uncontrolled one, which is almost never intended.
    pub(crate) fn warn_null_value(&mut self, tag_name: &str, props: &Props) {
        if !matches!(tag_name, "input" | "textarea" | "select") || self.warned.null_value {
            return;
        }

        if props.get("value") != Some(&PropValue::None) {
            return;
        }

        self.warned.null_value = true;

        let multiple = tag_name == "select" && props.get("multiple").is_some_and(PropValue::is_truthy);
        if multiple {
            self.sink.warn(
                WarningKind::NullValue,
                format_args!(
                    "`value` prop on `{tag_name}` should not be null. Consider using an empty list when `multiple` is set to `true` to clear the component or leaving it unset for uncontrolled components."
                ),
            );
        } else {
            self.sink.warn(
                WarningKind::NullValue,
                format_args!(
                    "`value` prop on `{tag_name}` should not be null. Consider using an empty string to clear the component or leaving it unset for uncontrolled components."
                ),
            );
        }
    }
}
