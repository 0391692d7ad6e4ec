use crate::error::{Error, Result};

/// Shortest allowed table name.
pub const MINIMUM_TABLE_NAME_LENGTH: usize = 3;

/// Longest allowed table name.
pub const MAXIMUM_TABLE_NAME_LENGTH: usize = 255;

/// Shortest allowed index name.
pub const MINIMUM_INDEX_NAME_LENGTH: usize = 3;

/// Longest allowed index name.
pub const MAXIMUM_INDEX_NAME_LENGTH: usize = 255;

/// Shortest allowed key or attribute name.
pub const MINIMUM_KEY_NAME_LENGTH: usize = 1;

/// Longest allowed key or attribute name.
pub const MAXIMUM_KEY_NAME_LENGTH: usize = 255;

/// Longest allowed ARN.
pub const MAXIMUM_ARN_LENGTH: usize = 1283;

const NAME_CHARACTERS_DESCRIPTION: &str =
    "only alphanumeric characters, underscore (_), hyphen (-), and period (.) are allowed";

/// Whether `c` may appear in a table or index name.
pub fn is_name_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// Whether `c` may appear in an expression attribute name after its marker.
pub fn is_alphanumeric_character(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// The distinct characters of `value` that are not in the allowed set, in order of first appearance.
pub fn invalid_characters(value: &str, is_valid: impl Fn(char) -> bool) -> Vec<char> {
    let mut invalid = Vec::new();
    for c in value.chars() {
        if !is_valid(c) && !invalid.contains(&c) {
            invalid.push(c);
        }
    }
    invalid
}

fn validate_length(
    value: &str,
    param: &str,
    subject: &str,
    minimum: usize,
    maximum: usize,
) -> Result<()> {
    if value.trim().is_empty() {
        let message = format!("the name of the {subject} cannot be empty or consist only of white-space");
        return Err(Error::invalid_argument(param, message));
    }
    let length = value.chars().count();
    if length < minimum {
        let message = format!("the name of the {subject} cannot be less than {minimum} characters");
        return Err(Error::invalid_argument(param, message));
    }
    if length > maximum {
        let message = format!("the name of the {subject} cannot exceed a length of {maximum} characters");
        return Err(Error::invalid_argument(param, message));
    }
    Ok(())
}

fn validate_characters(
    value: &str,
    param: &str,
    is_valid: impl Fn(char) -> bool,
    description: &str,
) -> Result<()> {
    let invalid = invalid_characters(value, is_valid);
    if invalid.is_empty() {
        Ok(())
    } else {
        let invalid: String = invalid.into_iter().collect();
        let message =
            format!("one or more characters in the name are invalid ({invalid:?}); {description}");
        Err(Error::invalid_argument(param, message))
    }
}

/// Validate a table name: 3 to 255 characters of `[A-Za-z0-9_.-]`.
///
/// ```rust
/// use dynamodb_manager::common::validation;
///
/// assert!(validation::validate_table_name("users", "table").is_ok());
/// assert!(validation::validate_table_name("ab", "table").is_err());
/// assert!(validation::validate_table_name("user$", "table").is_err());
/// ```
pub fn validate_table_name(name: &str, param: &str) -> Result<()> {
    validate_length(
        name,
        param,
        "table",
        MINIMUM_TABLE_NAME_LENGTH,
        MAXIMUM_TABLE_NAME_LENGTH,
    )?;
    validate_characters(name, param, is_name_character, NAME_CHARACTERS_DESCRIPTION)
}

/// Validate an index name: 3 to 255 characters of `[A-Za-z0-9_.-]`.
pub fn validate_index_name(name: &str, param: &str) -> Result<()> {
    validate_length(
        name,
        param,
        "index",
        MINIMUM_INDEX_NAME_LENGTH,
        MAXIMUM_INDEX_NAME_LENGTH,
    )?;
    validate_characters(name, param, is_name_character, NAME_CHARACTERS_DESCRIPTION)
}

/// Validate a key or attribute name: 1 to 255 characters, not only white-space.
pub fn validate_key_name(name: &str, param: &str) -> Result<()> {
    validate_length(
        name,
        param,
        "key",
        MINIMUM_KEY_NAME_LENGTH,
        MAXIMUM_KEY_NAME_LENGTH,
    )
}

/// Validate that a name consists of alphanumeric characters only.
pub fn validate_alphanumeric(name: &str, param: &str) -> Result<()> {
    validate_characters(
        name,
        param,
        is_alphanumeric_character,
        "only alphanumeric characters are allowed",
    )
}

/// Validate an ARN: 1 to 1283 characters, not only white-space.
pub fn validate_arn(arn: &str, param: &str) -> Result<()> {
    validate_length(arn, param, "ARN", 1, MAXIMUM_ARN_LENGTH)
}

/// Reject blank free-form text such as expressions.
pub(crate) fn require_text(value: &str, param: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::missing_argument(param))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::minimum_length("abc", true)]
    #[case::all_allowed_characters("Users_2024-v1.0", true)]
    #[case::maximum_length(&"a".repeat(255), true)]
    #[case::empty("", false)]
    #[case::white_space("   ", false)]
    #[case::too_short("ab", false)]
    #[case::too_long(&"a".repeat(256), false)]
    #[case::space_inside("my table", false)]
    #[case::colon("a:b:c", false)]
    #[case::non_ascii("tåble", false)]
    fn test_validate_table_name(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(validate_table_name(name, "table").is_ok(), expected);
    }

    #[rstest]
    #[case::minimum_length("gsi", true)]
    #[case::too_short("ix", false)]
    #[case::slash("by/date", false)]
    fn test_validate_index_name(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(validate_index_name(name, "index_name").is_ok(), expected);
    }

    #[rstest]
    #[case::single_character("a", true)]
    #[case::any_characters("#weird name!", true)]
    #[case::maximum_length(&"k".repeat(255), true)]
    #[case::empty("", false)]
    #[case::white_space(" ", false)]
    #[case::too_long(&"k".repeat(256), false)]
    fn test_validate_key_name(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(validate_key_name(name, "key_name").is_ok(), expected);
    }

    #[rstest]
    #[case::short("a", true)]
    #[case::maximum_length(&"a".repeat(1283), true)]
    #[case::empty("", false)]
    #[case::too_long(&"a".repeat(1284), false)]
    fn test_validate_arn(#[case] arn: &str, #[case] expected: bool) {
        assert_eq!(validate_arn(arn, "arn").is_ok(), expected);
    }

    #[rstest]
    #[case::none_invalid("abc", vec![])]
    #[case::distinct("a!b!c?", vec!['!', '?'])]
    fn test_invalid_characters(#[case] value: &str, #[case] expected: Vec<char>) {
        assert_eq!(invalid_characters(value, is_name_character), expected);
    }

    #[test]
    fn test_error_names_parameter() {
        let error = validate_table_name("x", "table").unwrap_err();
        match error {
            Error::InvalidArgument { param, message } => {
                assert_eq!(param, "table");
                assert!(message.contains("less than 3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_require_text() {
        assert!(require_text("#a = :a", "expression").is_ok());
        assert!(matches!(
            require_text("  ", "expression"),
            Err(Error::MissingArgument { .. })
        ));
    }
}
