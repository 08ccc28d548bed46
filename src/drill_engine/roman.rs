//! Roman numeral conversion for the quiz generators.
//!
//! The domain is capped at 399 so numerals never need characters beyond "C";
//! quiz values stay far below that anyway (1..=100 operands, sums <= 150).

/// Greedy subtractive-pair table, largest value first.
const ROMAN_TABLE: [(u32, &str); 9] = [
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert `n` to its Roman numeral. Valid for `1..=399`; `None` outside.
pub fn to_roman(n: u32) -> Option<String> {
    if !(1..=399).contains(&n) {
        return None;
    }
    let mut rest = n;
    let mut out = String::new();
    for (value, symbol) in ROMAN_TABLE {
        while rest >= value {
            out.push_str(symbol);
            rest -= value;
        }
    }
    Some(out)
}

fn symbol_value(c: char) -> u32 {
    match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        _ => 0,
    }
}

/// Parse a Roman numeral in a single left-to-right pass, subtracting a symbol
/// whose value is below the one that follows it.
///
/// Performs no validation: malformed input ("IIII", "VX", stray characters)
/// still yields a deterministic number. The generators only ever feed this
/// `to_roman` output, so the lenient path is unreachable in practice.
pub fn from_roman(s: &str) -> u32 {
    let values: Vec<u32> = s.chars().map(symbol_value).collect();
    let mut total: i64 = 0;
    for (i, &current) in values.iter().enumerate() {
        let next = values.get(i + 1).copied().unwrap_or(0);
        if current < next {
            total -= current as i64;
        } else {
            total += current as i64;
        }
    }
    total.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_numerals() {
        assert_eq!(to_roman(1).as_deref(), Some("I"));
        assert_eq!(to_roman(4).as_deref(), Some("IV"));
        assert_eq!(to_roman(9).as_deref(), Some("IX"));
        assert_eq!(to_roman(14).as_deref(), Some("XIV"));
        assert_eq!(to_roman(40).as_deref(), Some("XL"));
        assert_eq!(to_roman(90).as_deref(), Some("XC"));
        assert_eq!(to_roman(148).as_deref(), Some("CXLVIII"));
        assert_eq!(to_roman(399).as_deref(), Some("CCCXCIX"));
    }

    #[test]
    fn out_of_domain_is_none() {
        assert_eq!(to_roman(0), None);
        assert_eq!(to_roman(400), None);
    }

    #[test]
    fn round_trip_over_whole_domain() {
        for n in 1..=399 {
            let roman = to_roman(n).unwrap();
            assert_eq!(from_roman(&roman), n, "round trip failed for {n} ({roman})");
        }
    }

    #[test]
    fn lenient_parse_is_deterministic() {
        // Malformed input is not rejected; it just produces a stable number.
        assert_eq!(from_roman("IIII"), 4);
        assert_eq!(from_roman("VX"), 5);
        assert_eq!(from_roman(""), 0);
        assert_eq!(from_roman("ZZZ"), 0);
    }
}
