// src/core/parse.rs
//
// Lenient number parsing for free-text form fields. Both functions read the
// longest numeric prefix and ignore the rest ("42abc" -> 42), matching what
// users expect from a browser form.

/// Leading integer prefix: optional whitespace, optional sign, digits.
/// `None` when there are no digits or the value does not fit in `i64`.
pub fn leading_int(text: &str) -> Option<i64> {
    let t = text.trim_start();
    let bytes = t.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    t[..end].parse().ok()
}

/// Leading float prefix: `[+-]digits[.digits][e[+-]digits]`, shortest-suffix
/// trimmed until it parses. `None` when nothing numeric leads the text.
pub fn leading_float(text: &str) -> Option<f64> {
    let t = text.trim_start();
    let bytes = t.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut e = end + 1;
        if e < bytes.len() && matches!(bytes[e], b'+' | b'-') {
            e += 1;
        }
        let exp_digits = e;
        while e < bytes.len() && bytes[e].is_ascii_digit() {
            e += 1;
        }
        if e > exp_digits {
            end = e;
        }
    }

    // "+", "-", "." and "-." are not numbers; back off until something parses.
    (1..=end).rev().find_map(|n| t[..n].parse::<f64>().ok()).filter(|v| v.is_finite())
}
