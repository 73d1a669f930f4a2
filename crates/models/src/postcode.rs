use serde::Serialize;
use std::fmt;

/// A normalized postcode split into its outward and inward codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Postcode {
    outward: String,
    inward: String,
}

impl Postcode {
    pub(crate) fn new(outward: &str, inward: &str) -> Self {
        Postcode {
            outward: outward.to_string(),
            inward: inward.to_string(),
        }
    }

    pub fn outward(&self) -> &str {
        &self.outward
    }

    pub fn inward(&self) -> &str {
        &self.inward
    }

    /// Leading letters of the outward code, e.g. `EC` for `EC1A`.
    pub fn area(&self) -> &str {
        let end = self
            .outward
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(self.outward.len());
        &self.outward[..end]
    }

    /// Remainder of the outward code after the area. Empty for `GIR`.
    pub fn district(&self) -> &str {
        &self.outward[self.area().len()..]
    }

    pub fn sector(&self) -> char {
        self.inward.chars().next().unwrap_or_default()
    }

    pub fn unit(&self) -> &str {
        match self.inward.char_indices().nth(1) {
            Some((idx, _)) => &self.inward[idx..],
            None => "",
        }
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.outward, self.inward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_of_alphanumeric_district() {
        let postcode = Postcode::new("EC1A", "1BB");
        assert_eq!(postcode.area(), "EC");
        assert_eq!(postcode.district(), "1A");
        assert_eq!(postcode.sector(), '1');
        assert_eq!(postcode.unit(), "BB");
    }

    #[test]
    fn test_parts_of_single_letter_area() {
        let postcode = Postcode::new("M1", "1AE");
        assert_eq!(postcode.area(), "M");
        assert_eq!(postcode.district(), "1");
        assert_eq!(postcode.unit(), "AE");
    }

    #[test]
    fn test_historic_exception_has_no_district() {
        let postcode = Postcode::new("GIR", "0AA");
        assert_eq!(postcode.area(), "GIR");
        assert_eq!(postcode.district(), "");
        assert_eq!(postcode.sector(), '0');
        assert_eq!(postcode.to_string(), "GIR 0AA");
    }
}
