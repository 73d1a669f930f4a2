use models::{PostcodeError, ValidationResult, POSTCODE_MAX_LEN, POSTCODE_MIN_LEN};

/// Check the overall length of a space-stripped postcode.
pub fn validate_postcode_length(postcode: &str, result: &mut ValidationResult) {
    let postcode_len = postcode.chars().count();
    if !(POSTCODE_MIN_LEN..=POSTCODE_MAX_LEN).contains(&postcode_len) {
        result.add_issue(PostcodeError::Length {
            actual: postcode_len,
        });
    }
}
