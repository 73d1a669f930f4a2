use lazy_static::lazy_static;
use models::{PostcodeError, ValidationResult, OUTWARD_CODE_MAX_LEN, OUTWARD_CODE_MIN_LEN};
use regex::Regex;

lazy_static! {
    // GIR is the historic exception; otherwise A9A/AA9A or A9/A99/AA9/AA99.
    static ref OUTWARD_CODE_REGEX: Regex = Regex::new(
        r"^(?:(?i:GIR)|[a-zA-Z]{1,2}[0-9][a-zA-Z]|[a-zA-Z]{1,2}[0-9]{1,2})$"
    )
    .expect("Failed to compile outward code regex - this is a critical error");
}

/// Check the outward code length and its shape.
pub fn validate_outward_code(outward_code: &str, result: &mut ValidationResult) {
    validate_outward_code_length(outward_code, result);

    if !OUTWARD_CODE_REGEX.is_match(outward_code) {
        result.add_issue(PostcodeError::OutwardPattern {
            outward_code: outward_code.to_string(),
        });
    }
}

pub fn validate_outward_code_length(outward_code: &str, result: &mut ValidationResult) {
    let outward_code_len = outward_code.chars().count();
    if !(OUTWARD_CODE_MIN_LEN..=OUTWARD_CODE_MAX_LEN).contains(&outward_code_len) {
        result.add_issue(PostcodeError::OutwardLength {
            actual: outward_code_len,
        });
    }
}
