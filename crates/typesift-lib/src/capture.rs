//! Scanning helpers shared by the logos callbacks.
//!
//! Logos matches the opening of a construct; these helpers measure how far the
//! construct extends into the remainder so the callback can `bump` past it.

/// Measures a parenthesised group whose `(` was already consumed.
///
/// Returns the byte length up to and including the closing `)` and whether
/// that `)` was found. Parens inside backtick literals do not count. An
/// unclosed group extends to the end of `rest`.
pub(crate) fn group_len(rest: &str) -> (usize, bool) {
    let mut depth = 0u32;
    let mut escaped = false;

    for (offset, ch) in rest.char_indices() {
        match ch {
            '`' => escaped = !escaped,
            _ if escaped => {}
            '(' => depth += 1,
            ')' if depth == 0 => return (offset + 1, true),
            ')' => depth -= 1,
            _ => {}
        }
    }

    (rest.len(), false)
}

/// Length of a `.digits` fraction at the start of `rest`, or 0.
///
/// A dot not followed by a digit is not part of the number (`13.` lexes as `13`).
pub(crate) fn fraction_len(rest: &str) -> usize {
    let Some(after_dot) = rest.strip_prefix('.') else {
        return 0;
    };
    let digits = after_dot
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 { 0 } else { 1 + digits }
}
