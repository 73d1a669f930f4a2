// validators crate

mod inward;
mod length;
mod outward;
mod postcode;

pub use inward::validate_inward_code;
pub use length::validate_postcode_length;
pub use outward::{validate_outward_code, validate_outward_code_length};
pub use postcode::{split_codes, PostcodeValidator};

use models::ValidationResult;

/// Validate a single raw postcode.
pub fn validate(raw_postcode: &str) -> ValidationResult {
    PostcodeValidator::new(raw_postcode).validate()
}
