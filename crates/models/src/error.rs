use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::{
    INWARD_CODE_LEN, OUTWARD_CODE_MAX_LEN, OUTWARD_CODE_MIN_LEN, POSTCODE_MAX_LEN,
    POSTCODE_MIN_LEN,
};

/// Field-level diagnostics produced while checking a postcode.
///
/// These are collected into a [`crate::ValidationResult`], not returned as
/// failures of the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostcodeError {
    #[error(
        "postcode length must be from {min} to {max} excluding a space, current is `{actual}`",
        min = POSTCODE_MIN_LEN,
        max = POSTCODE_MAX_LEN
    )]
    Length { actual: usize },

    #[error(
        "inward code length must be equal to {expected}, current is `{actual}`",
        expected = INWARD_CODE_LEN
    )]
    InwardLength { actual: usize },

    #[error("sector must be a digit, current is `{sector}`")]
    Sector { sector: String },

    #[error("unit must consist of alphabetic characters, current is `{unit}`")]
    Unit { unit: String },

    #[error(
        "outward code length must be from {min} to {max}, current is `{actual}`",
        min = OUTWARD_CODE_MIN_LEN,
        max = OUTWARD_CODE_MAX_LEN
    )]
    OutwardLength { actual: usize },

    #[error(
        "outward code must follow one of the patterns: (AA9A, A9A, A9, A99, AA9, AA99) \
         where A is an alphabetic character and 9 is a digit, current is `{outward_code}`"
    )]
    OutwardPattern { outward_code: String },
}

impl PostcodeError {
    /// Stable name of the diagnostic category.
    pub fn kind(&self) -> &'static str {
        match self {
            PostcodeError::Length { .. } => "LengthError",
            PostcodeError::InwardLength { .. } => "InwardLengthError",
            PostcodeError::Sector { .. } => "SectorError",
            PostcodeError::Unit { .. } => "UnitError",
            PostcodeError::OutwardLength { .. } => "OutwardLengthError",
            PostcodeError::OutwardPattern { .. } => "OutwardPatternError",
        }
    }
}

impl Serialize for PostcodeError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
