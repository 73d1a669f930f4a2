// models crate

mod error;
mod postcode;

pub use error::PostcodeError;
pub use postcode::Postcode;

use serde::Serialize;

pub const POSTCODE_MIN_LEN: usize = 5;
pub const POSTCODE_MAX_LEN: usize = 7;
pub const OUTWARD_CODE_MIN_LEN: usize = 2;
pub const OUTWARD_CODE_MAX_LEN: usize = 4;
pub const INWARD_CODE_LEN: usize = 3;

/// Outcome of validating a single candidate postcode.
///
/// `normalized_postcode` starts out as a copy of `original_input` and is only
/// replaced once every check has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub original_input: String,
    pub normalized_postcode: String,
    pub is_valid: Option<bool>,
    pub errors: Vec<PostcodeError>,
}

impl ValidationResult {
    pub fn new(original_input: &str) -> Self {
        ValidationResult {
            original_input: original_input.to_string(),
            normalized_postcode: original_input.to_string(),
            is_valid: None,
            errors: Vec::new(),
        }
    }

    pub fn add_issue(&mut self, issue: PostcodeError) {
        self.errors.push(issue);
    }

    /// Closes the validation pass. The normalized form is only written when
    /// no check reported a problem.
    pub fn finalize(&mut self, outward_code: &str, inward_code: &str) {
        if self.errors.is_empty() {
            self.is_valid = Some(true);
            self.normalized_postcode = format!("{} {}", outward_code, inward_code).to_uppercase();
        } else {
            self.is_valid = Some(false);
        }
    }

    /// True only for a finalized result without errors.
    pub fn succeeded(&self) -> bool {
        self.is_valid == Some(true)
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Structured view of a valid postcode.
    pub fn postcode(&self) -> Option<Postcode> {
        if !self.succeeded() {
            return None;
        }
        let (outward, inward) = self.normalized_postcode.split_once(' ')?;
        Some(Postcode::new(outward, inward))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_unset() {
        let result = ValidationResult::new("ec1a 1bb");
        assert_eq!(result.original_input, "ec1a 1bb");
        assert_eq!(result.normalized_postcode, "ec1a 1bb");
        assert_eq!(result.is_valid, None);
        assert!(result.errors.is_empty());
        assert!(!result.succeeded());
        assert!(result.postcode().is_none());
    }

    #[test]
    fn test_finalize_without_errors_normalizes() {
        let mut result = ValidationResult::new("ec1a1bb");
        result.finalize("ec1a", "1bb");
        assert_eq!(result.is_valid, Some(true));
        assert_eq!(result.normalized_postcode, "EC1A 1BB");
        assert_eq!(result.original_input, "ec1a1bb");
    }

    #[test]
    fn test_finalize_with_errors_keeps_original() {
        let mut result = ValidationResult::new("ec1( 1bb");
        result.add_issue(PostcodeError::OutwardPattern {
            outward_code: "ec1(".to_string(),
        });
        result.finalize("ec1(", "1bb");
        assert_eq!(result.is_valid, Some(false));
        assert_eq!(result.normalized_postcode, "ec1( 1bb");
        assert!(result.postcode().is_none());
    }

    #[test]
    fn test_errors_keep_insertion_order() {
        let mut result = ValidationResult::new("x");
        result.add_issue(PostcodeError::Length { actual: 1 });
        result.add_issue(PostcodeError::InwardLength { actual: 1 });
        let messages = result.error_messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("postcode length"));
        assert!(messages[1].starts_with("inward code length"));
    }

    #[test]
    fn test_postcode_view_of_valid_result() {
        let mut result = ValidationResult::new("dn551pt");
        result.finalize("dn55", "1pt");
        let postcode = result.postcode().unwrap();
        assert_eq!(postcode.outward(), "DN55");
        assert_eq!(postcode.inward(), "1PT");
        assert_eq!(postcode.to_string(), "DN55 1PT");
    }

    #[test]
    fn test_serializes_errors_as_messages() {
        let mut result = ValidationResult::new("EC1A 1B8");
        result.add_issue(PostcodeError::Unit {
            unit: "B8".to_string(),
        });
        result.finalize("EC1A", "1B8");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["original_input"], "EC1A 1B8");
        assert_eq!(json["is_valid"], false);
        assert_eq!(
            json["errors"][0],
            "unit must consist of alphabetic characters, current is `B8`"
        );
    }
}
