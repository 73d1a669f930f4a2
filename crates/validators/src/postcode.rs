use crate::{validate_inward_code, validate_outward_code, validate_postcode_length};
use models::{ValidationResult, INWARD_CODE_LEN};

/// Runs the full check sequence over one candidate postcode.
///
/// Every check runs regardless of earlier failures, so a single input can
/// report several problems at once. The validator is consumed by
/// [`PostcodeValidator::validate`].
pub struct PostcodeValidator {
    postcode: String,
    result: ValidationResult,
}

impl PostcodeValidator {
    pub fn new(postcode: &str) -> Self {
        PostcodeValidator {
            postcode: postcode.replace(' ', ""),
            result: ValidationResult::new(postcode),
        }
    }

    /// The working copy with spaces removed.
    pub fn stripped(&self) -> &str {
        &self.postcode
    }

    pub fn validate(mut self) -> ValidationResult {
        let (outward_code, inward_code) = split_codes(&self.postcode);

        validate_postcode_length(&self.postcode, &mut self.result);
        validate_inward_code(inward_code, &mut self.result);
        validate_outward_code(outward_code, &mut self.result);

        self.result.finalize(outward_code, inward_code);
        self.result
    }
}

/// Split a space-stripped postcode into `(outward, inward)`.
///
/// The inward code is the last three characters; shorter input gives
/// whatever characters exist and an empty outward code.
pub fn split_codes(postcode: &str) -> (&str, &str) {
    let char_count = postcode.chars().count();
    let outward_chars = char_count.saturating_sub(INWARD_CODE_LEN);
    let split_at = postcode
        .char_indices()
        .nth(outward_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(postcode.len());
    postcode.split_at(split_at)
}
