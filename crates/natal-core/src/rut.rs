//! RUT identifier conventions.
//!
//! Pure string functions. These split a national identifier into its body and
//! check digit and format it for display. Check-digit validation happens at
//! data entry and is not repeated here.

const CHECK_SEPARATOR: char = '-';
const THOUSANDS_SEPARATOR: char = '.';

/// Split an identifier into `(body, check_digit)`.
///
/// With a `-` present the identifier is split on the first one; otherwise the
/// final character is the check digit. Thousands separators and whitespace in
/// the body are dropped, so a formatted identifier splits the same way as a
/// normalized one.
pub fn split(identifier: &str) -> (String, String) {
    let identifier = identifier.trim();
    let (body, check_digit) = match identifier.split_once(CHECK_SEPARATOR) {
        Some((body, rest)) => (body, rest.split(CHECK_SEPARATOR).next().unwrap_or_default()),
        None => match identifier.char_indices().next_back() {
            Some((idx, _)) if idx > 0 => (&identifier[..idx], &identifier[idx..]),
            _ => (identifier, ""),
        },
    };
    (strip_body(body), check_digit.trim().to_string())
}

/// Format a body and check digit as `12.345.678-5`.
pub fn format_with_separators(body: &str, check_digit: &str) -> String {
    let digits: Vec<char> = strip_body(body).chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(*c);
    }
    if check_digit.is_empty() {
        grouped
    } else {
        format!("{grouped}{CHECK_SEPARATOR}{check_digit}")
    }
}

/// Normalize free-form input (`12.345.678-k`, `12345678K`) to `12345678-K`.
///
/// Keeps only digits and `K`; the last kept character becomes the check
/// digit. Returns an empty string when nothing usable remains.
pub fn normalize(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || c.eq_ignore_ascii_case(&'k'))
        .map(|c| c.to_ascii_uppercase())
        .collect();
    match kept.len() {
        0 => String::new(),
        1 => kept,
        n => format!("{}{CHECK_SEPARATOR}{}", &kept[..n - 1], &kept[n - 1..]),
    }
}

fn strip_body(body: &str) -> String {
    body.chars()
        .filter(|c| *c != THOUSANDS_SEPARATOR && !c.is_whitespace())
        .collect()
}
