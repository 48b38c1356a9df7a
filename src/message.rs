//! Fixed message templates, one per rule.

use crate::schema::TypeTag;

pub(crate) fn required() -> String {
    "field is required".to_string()
}

pub(crate) fn expected_type(tag: &TypeTag) -> String {
    format!("expected type is {}", tag)
}

pub(crate) fn min_length(min: usize) -> String {
    format!("minimum length is {} characters.", min)
}

pub(crate) fn max_length(max: usize) -> String {
    format!("maximum length is {} characters.", max)
}

pub(crate) fn invalid_format() -> String {
    "format is invalid.".to_string()
}

pub(crate) fn mismatch(field: &str, confirm: &str) -> String {
    format!("fields '{}' and '{}' do not match.", field, confirm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates() {
        assert_eq!(required(), "field is required");
        assert_eq!(expected_type(&TypeTag::Integer), "expected type is integer");
        assert_eq!(
            expected_type(&TypeTag::Named("Address".to_string())),
            "expected type is Address"
        );
        assert_eq!(min_length(3), "minimum length is 3 characters.");
        assert_eq!(max_length(20), "maximum length is 20 characters.");
        assert_eq!(invalid_format(), "format is invalid.");
        assert_eq!(
            mismatch("password", "passwordConfirmation"),
            "fields 'password' and 'passwordConfirmation' do not match."
        );
    }
}
