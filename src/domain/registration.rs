use std::sync::LazyLock;

use regex::Regex;

/// Every UK plate scheme accepted by the enquiry service, as anchored
/// alternatives. Order does not matter; the whole input must match one arm.
const PLATE_PATTERNS: [&str; 9] = [
    // current: AB12 CDE
    r"[A-Z]{2}[0-9]{2} ?[A-Z]{3}",
    // prefix: A123 BCD
    r"[A-Z][0-9]{1,3}[A-Z]{3}",
    // suffix: ABC 123D
    r"[A-Z]{3}[0-9]{1,3}[A-Z]",
    // dateless, numeric-led
    r"[0-9]{1,4}[A-Z]{1,2}",
    r"[0-9]{1,3}[A-Z]{1,3}",
    // dateless, letter-led
    r"[A-Z]{1,2}[0-9]{1,4}",
    r"[A-Z]{1,3}[0-9]{1,3}",
    r"[A-Z]{1,3}[0-9]{1,4}",
    // diplomatic: 123D456 / 123X456
    r"[0-9]{3}[DX][0-9]{3}",
];

static PLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = PLATE_PATTERNS
        .iter()
        .map(|pattern| format!("(?:{pattern})"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i-u)^(?:{alternatives})$")).expect("plate patterns are valid regex")
});

/// Check `input` against the historical and current UK registration formats.
///
/// Matching is ASCII case-insensitive and anchored at both ends, so a plate
/// embedded in a longer string is rejected. No trimming is performed.
pub fn is_valid_registration(input: &str) -> bool {
    PLATE_RE.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_plate_scheme() {
        for plate in [
            "AB12CDE", "AB12 CDE", "A123BCD", "ABC123D", "1234AB", "123ABC", "AB1234", "ABC123",
            "ABC1234", "123D456", "123X456", "A1", "1A",
        ] {
            assert!(is_valid_registration(plate), "expected {plate} to be valid");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_valid_registration("ab12cde"));
        assert!(is_valid_registration("Ab12 cDe"));
        assert!(is_valid_registration("123d456"));
    }

    #[test]
    fn rejects_inputs_outside_every_scheme() {
        for input in [
            "",
            "TOOLONGPLATE123",
            "1234567890",
            "AB12  CDE",
            " AB12CDE",
            "AB12CDE ",
            "AB-12-CDE",
            "ABCD",
            "12345",
            "ÄB12CDE",
            "\u{212A}B12CDE",
            "\u{17F}B12CDE",
            "A\u{212A}1",
        ] {
            assert!(!is_valid_registration(input), "expected {input:?} to be invalid");
        }
    }

    #[test]
    fn does_not_match_substrings() {
        assert!(!is_valid_registration("XAB12CDEX"));
        assert!(!is_valid_registration("AB12CDE\nAB12CDE"));
    }
}
