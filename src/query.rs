//! Free-text query classification.
//!
//! A query is either an order name (`"#1001"`), a human-facing order number
//! (`"1001"`), or an internal numeric order id (`"4503620239415"`). Numbers
//! below [`ORDER_ID_THRESHOLD`] are treated as order numbers.

use std::fmt;

/// Parsed integers at or above this value are treated as order ids.
pub const ORDER_ID_THRESHOLD: i64 = 100_000;

/// How fetched orders should be filtered for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Exact match against the order `name` field.
    Name(String),
    /// Exact match against `order_number`.
    Num(i64),
    /// Exact match against `id`.
    Id(i64),
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "name={name:?}"),
            Self::Num(num) => write!(f, "order_number={num}"),
            Self::Id(id) => write!(f, "id={id}"),
        }
    }
}

/// Classify a raw query.
///
/// Parsing is leading-numeric: an optional sign followed by ASCII digits, with
/// any trailing text ignored (`"12abc"` classifies as `Num(12)`). When no
/// integer can be read, the original untrimmed text becomes a `Name` matcher.
pub fn classify(query: &str) -> Matcher {
    match parse_leading_int(query.trim()) {
        None => Matcher::Name(query.to_string()),
        Some(n) if n < ORDER_ID_THRESHOLD => Matcher::Num(n),
        Some(n) => Matcher::Id(n),
    }
}

/// Parse the longest `[+-]?[0-9]+` prefix of `input` as base-10.
///
/// Returns `None` when there is no digit. Values outside `i64` saturate, so an
/// oversized digit run still classifies as an id.
fn parse_leading_int(input: &str) -> Option<i64> {
    let (negative, rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // The digit run is non-empty ASCII, so the only parse failure is overflow.
    let value = match rest[..digits_len].parse::<i64>() {
        Ok(magnitude) if negative => -magnitude,
        Ok(magnitude) => magnitude,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_query_is_name_with_original_text() {
        assert_eq!(classify("#1002"), Matcher::Name("#1002".into()));
        assert_eq!(classify("  #1002 "), Matcher::Name("  #1002 ".into()));
        assert_eq!(classify("abc"), Matcher::Name("abc".into()));
        assert_eq!(classify("   "), Matcher::Name("   ".into()));
    }

    #[test]
    fn small_numbers_are_order_numbers() {
        assert_eq!(classify("1001"), Matcher::Num(1001));
        assert_eq!(classify("0"), Matcher::Num(0));
        assert_eq!(classify("99999"), Matcher::Num(99_999));
        assert_eq!(classify(" 42 "), Matcher::Num(42));
    }

    #[test]
    fn threshold_and_above_are_ids() {
        assert_eq!(classify("100000"), Matcher::Id(100_000));
        assert_eq!(classify("4503620239415"), Matcher::Id(4_503_620_239_415));
    }

    #[test]
    fn leading_numeric_prefix_wins() {
        assert_eq!(classify("12abc"), Matcher::Num(12));
        assert_eq!(classify("1e5"), Matcher::Num(1));
        assert_eq!(classify("0x10"), Matcher::Num(0));
        assert_eq!(classify("+7"), Matcher::Num(7));
    }

    #[test]
    fn negative_numbers_are_order_numbers() {
        assert_eq!(classify("-5"), Matcher::Num(-5));
        assert_eq!(classify("-"), Matcher::Name("-".into()));
    }

    #[test]
    fn oversized_digit_runs_saturate() {
        assert_eq!(classify("99999999999999999999999"), Matcher::Id(i64::MAX));
        assert_eq!(classify("99999999999999999999999abc"), Matcher::Id(i64::MAX));
        assert_eq!(classify("-99999999999999999999999"), Matcher::Num(i64::MIN));
        assert_eq!(classify("9223372036854775807"), Matcher::Id(i64::MAX));
    }

    #[test]
    fn matcher_display_names_the_field() {
        assert_eq!(Matcher::Num(1001).to_string(), "order_number=1001");
        assert_eq!(Matcher::Id(123_456).to_string(), "id=123456");
        assert_eq!(Matcher::Name("#1".into()).to_string(), "name=\"#1\"");
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn non_numeric_strings_classify_as_name(
                s in proptest::string::string_regex("[A-Za-z#][ -~]{0,24}").expect("regex")
            ) {
                prop_assert_eq!(classify(&s), Matcher::Name(s.clone()));
            }

            #[test]
            fn integers_below_threshold_classify_as_num(n in 0i64..ORDER_ID_THRESHOLD) {
                prop_assert_eq!(classify(&n.to_string()), Matcher::Num(n));
            }

            #[test]
            fn integers_at_or_above_threshold_classify_as_id(n in ORDER_ID_THRESHOLD..i64::MAX) {
                prop_assert_eq!(classify(&n.to_string()), Matcher::Id(n));
            }
        }
    }
}
