use models::{PostcodeError, ValidationResult, INWARD_CODE_LEN};

/// Check the inward code: its length, the sector digit and the unit letters.
///
/// All three checks run even when the slice is too short.
pub fn validate_inward_code(inward_code: &str, result: &mut ValidationResult) {
    let inward_code_len = inward_code.chars().count();
    if inward_code_len != INWARD_CODE_LEN {
        result.add_issue(PostcodeError::InwardLength {
            actual: inward_code_len,
        });
    }

    let mut chars = inward_code.chars();
    let sector = chars.next();
    if !sector.is_some_and(|c| c.is_ascii_digit()) {
        result.add_issue(PostcodeError::Sector {
            sector: sector.map(String::from).unwrap_or_default(),
        });
    }

    let unit = chars.as_str();
    if unit.is_empty() || !unit.chars().all(|c| c.is_ascii_alphabetic()) {
        result.add_issue(PostcodeError::Unit {
            unit: unit.to_string(),
        });
    }
}
