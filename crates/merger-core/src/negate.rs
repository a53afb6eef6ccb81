//! Textual sign negation for cell values

/// Strip a single leading minus sign from a value.
///
/// Whitespace around the value is ignored when looking for the sign. When a sign
/// is found, the trimmed value without it is returned; otherwise the input comes
/// back untouched, surrounding whitespace included. No numeric parsing happens,
/// so `"-text"` becomes `"text"`.
pub fn negate_value(value: &str) -> String {
    match value.trim().strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate_strips_minus() {
        assert_eq!(negate_value("-50.00"), "50.00");
        assert_eq!(negate_value("-100"), "100");
        assert_eq!(negate_value("-text"), "text");
    }

    #[test]
    fn test_negate_leaves_unsigned_values() {
        assert_eq!(negate_value("25.50"), "25.50");
        assert_eq!(negate_value("0"), "0");
        assert_eq!(negate_value(""), "");
        assert_eq!(negate_value("text"), "text");
    }

    #[test]
    fn test_negate_trims_before_checking_sign() {
        assert_eq!(negate_value(" -25.00"), "25.00");
        assert_eq!(negate_value("\t-7 "), "7");
        // Unsigned values keep their padding
        assert_eq!(negate_value(" 25.00 "), " 25.00 ");
    }

    #[test]
    fn test_negate_removes_only_one_sign() {
        assert_eq!(negate_value("--5"), "-5");
        assert_eq!(negate_value(&negate_value("--5")), "5");
    }
}
