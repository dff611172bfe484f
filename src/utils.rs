//! Small helpers shared by the crate.
//!
//! - [`with_field_fn!`](crate::with_field_fn) generates builder-style
//!   `with_*` setters for plain option structs.
//! - [`escape_label`] prepares arbitrary label text for a double-quoted
//!   Graphviz attribute value.

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
                self.$field_name = value;
                self
            }
        }
    };
}

/// Escapes `"` and `\` so the text can be written between double quotes in
/// a DOT attribute list.
pub fn escape_label(label: &str) -> std::borrow::Cow<'_, str> {
    if !label.contains(['"', '\\']) {
        return std::borrow::Cow::Borrowed(label);
    }
    let mut escaped = String::with_capacity(label.len() + 2);
    for c in label.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    std::borrow::Cow::Owned(escaped)
}
