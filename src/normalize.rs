use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::record::{NormalizedRecord, RawRecord};
use crate::score::MAX_RATING;

// Optional currency token, the amount, optional trailing symbol/code (whitespace already removed)
static PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z]{0,3}\$|[€£¥]|[A-Za-z]{3})?(\d[\d.,]*)(?:[€£¥]|[A-Za-z]{3})?$")
        .expect("Invalid price regex pattern")
});

// Count inside parentheses: "4,5 (1.234)"
static REVIEW_COUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(\s*(\d[\d.,]*)\s*\)").expect("Invalid review count regex pattern")
});

/// Normalize every raw record, preserving length and order
pub fn normalize(records: &[RawRecord]) -> Vec<NormalizedRecord> {
    records
        .iter()
        .enumerate()
        .map(|(index, raw)| normalize_record(index, raw))
        .collect()
}

/// Normalize a single record. Malformed fields become `None`; the record is never dropped.
pub fn normalize_record(input_index: usize, raw: &RawRecord) -> NormalizedRecord {
    let price = parse_price(&raw.price);
    if price.is_none() {
        debug!(input_index, title = %raw.title, raw_price = %raw.price, "unparsable price");
    }

    let (review_rating, review_count) = raw
        .review
        .as_deref()
        .map(parse_review)
        .unwrap_or((None, None));

    // An unusable numeric rating falls back to the review text
    let rating = match raw.rating.and_then(valid_rating) {
        Some(value) => Some(value),
        None => review_rating,
    };
    if rating.is_none() {
        debug!(input_index, title = %raw.title, "missing or malformed rating");
    }

    NormalizedRecord {
        input_index,
        title: raw.title.trim().to_string(),
        price,
        url: raw.url.trim().to_string(),
        rating,
        rating_count: raw.rating_count.or(review_count),
    }
}

/// Parse a currency-formatted price such as "R$ 1.299,00", "$1,299.99" or "ou R$ 89,90".
///
/// Returns `None` when the text does not hold a non-negative amount.
pub fn parse_price(text: &str) -> Option<f64> {
    // Listings put installment offers on the following lines
    let line = text.lines().next().unwrap_or("").trim();
    let line = line.strip_prefix("ou ").unwrap_or(line);

    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let caps = PRICE_RE.captures(&compact)?;
    let amount = resolve_separators(&caps[1]);

    amount
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Rewrite an amount using `.` as the only separator (the decimal one)
fn resolve_separators(amount: &str) -> String {
    let decimal = match (amount.rfind('.'), amount.rfind(',')) {
        (Some(dot), Some(comma)) => Some(if dot > comma { '.' } else { ',' }),
        (Some(_), None) => single_separator_decimal(amount, '.'),
        (None, Some(_)) => single_separator_decimal(amount, ','),
        (None, None) => None,
    };

    amount
        .chars()
        .filter_map(|c| match c {
            c if Some(c) == decimal => Some('.'),
            '.' | ',' => None,
            c => Some(c),
        })
        .collect()
}

/// With a single separator kind: repeated, or followed by exactly three digits, it groups thousands
fn single_separator_decimal(amount: &str, sep: char) -> Option<char> {
    if amount.matches(sep).count() > 1 {
        return None;
    }
    let tail = amount.rsplit(sep).next().unwrap_or("");
    if tail.len() == 3 && tail.chars().all(|c| c.is_ascii_digit()) {
        None
    } else {
        Some(sep)
    }
}

/// Split composite review text ("4,5 (37)") into rating and count.
///
/// Each half degrades to `None` on its own.
pub fn parse_review(text: &str) -> (Option<f64>, Option<u64>) {
    let rating = text
        .split(|c: char| c.is_whitespace() || c == '(')
        .find(|token| !token.is_empty())
        .and_then(|token| token.replace(',', ".").parse::<f64>().ok())
        .and_then(valid_rating);

    let count = REVIEW_COUNT_RE.captures(text).and_then(|caps| {
        caps[1]
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse::<u64>()
            .ok()
    });

    (rating, count)
}

/// Finite ratings are clamped onto the 0-5 scale; NaN and infinities are absent
fn valid_rating(value: f64) -> Option<f64> {
    value.is_finite().then(|| value.clamp(0.0, MAX_RATING))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_brazilian_price() {
        assert_eq!(parse_price("R$ 1.000,00"), Some(1000.0));
        assert_eq!(parse_price("R$ 500,00"), Some(500.0));
        assert_eq!(parse_price("R$\u{a0}1.299,90"), Some(1299.9));
    }

    #[test]
    fn test_parse_dot_decimal_price() {
        assert_eq!(parse_price("$1,299.99"), Some(1299.99));
        assert_eq!(parse_price("$99.99"), Some(99.99));
        assert_eq!(parse_price("US$ 42"), Some(42.0));
    }

    #[test]
    fn test_thousands_only_price() {
        assert_eq!(parse_price("R$ 1.000"), Some(1000.0));
        assert_eq!(parse_price("1,000"), Some(1000.0));
        assert_eq!(parse_price("R$ 1.234.567"), Some(1234567.0));
    }

    #[test]
    fn test_installment_lines_are_ignored() {
        assert_eq!(parse_price("R$ 2.499,00\nou 10x de R$ 249,90"), Some(2499.0));
        assert_eq!(parse_price("ou R$ 89,90"), Some(89.9));
    }

    #[test]
    fn test_unparsable_price() {
        assert_eq!(parse_price("indisponível"), None);
        assert_eq!(parse_price("Não informado"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("R$ -10,00"), None);
        assert_eq!(parse_price("1.000,00,5"), None);
    }

    #[test]
    fn test_parse_review() {
        assert_eq!(parse_review("4.5 (37)"), (Some(4.5), Some(37)));
        assert_eq!(parse_review("4,8 (1.234)"), (Some(4.8), Some(1234)));
        assert_eq!(parse_review("5.0(12)"), (Some(5.0), Some(12)));
    }

    #[test]
    fn test_parse_review_degrades_per_field() {
        assert_eq!(parse_review("sem avaliações"), (None, None));
        assert_eq!(parse_review("4.2"), (Some(4.2), None));
        assert_eq!(parse_review("(15)"), (None, Some(15)));
        assert_eq!(parse_review("7.5 (3)"), (Some(5.0), Some(3)));
    }

    #[test]
    fn test_normalize_keeps_length_and_order() {
        let raws = vec![
            RawRecord::new("A", "R$ 10,00", "https://a", 4.0, 3),
            RawRecord::with_review("B", "indisponível", "https://b", "3,5 (8)"),
            RawRecord::new("C", "R$ 5,00", "https://c", 9.0, 1),
        ];
        let normalized = normalize(&raws);

        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[0].title, "A");
        assert_eq!(normalized[1].input_index, 1);
        assert_eq!(normalized[1].price, None);
        assert_eq!(normalized[1].rating, Some(3.5));
        assert_eq!(normalized[1].rating_count, Some(8));
        // Out-of-range numeric rating is clamped onto the scale
        assert_eq!(normalized[2].rating, Some(5.0));
        assert_eq!(normalized[2].rating_count, Some(1));
    }

    #[test]
    fn test_clamp_and_reject_numeric_ratings() {
        let over = normalize_record(0, &RawRecord::new("Over", "R$ 10,00", "", 5.2, 10));
        assert_eq!(over.rating, Some(5.0));

        let under = normalize_record(0, &RawRecord::new("Under", "R$ 10,00", "", -1.0, 10));
        assert_eq!(under.rating, Some(0.0));

        let nan = normalize_record(0, &RawRecord::new("NaN", "R$ 10,00", "", f64::NAN, 10));
        assert_eq!(nan.rating, None);
    }

    #[test]
    fn test_invalid_numeric_rating_falls_back_to_review() {
        let mut raw = RawRecord::with_review("Mixed", "R$ 10,00", "", "4,5 (20)");
        raw.rating = Some(f64::NAN);
        let normalized = normalize_record(0, &raw);

        assert_eq!(normalized.rating, Some(4.5));
        assert_eq!(normalized.rating_count, Some(20));
    }

    #[test]
    fn test_true_zero_rating_is_not_a_failure() {
        let normalized = normalize_record(0, &RawRecord::new("Z", "R$ 1,00", "", 0.0, 0));
        assert_eq!(normalized.rating, Some(0.0));
        assert_eq!(normalized.rating_count, Some(0));
    }
}
