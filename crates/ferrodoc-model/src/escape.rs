//! Escaping of raw text for embedding in LaTeX source.

/// Characters that carry special meaning in LaTeX text mode.
pub const RESERVED: [char; 9] = ['#', '$', '%', '_', '^', '{', '}', '~', '\\'];

/// Returns true if `c` must be prefixed with a backslash.
pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// Escapes every reserved character in `text` with a leading backslash.
///
/// Only raw text leaves go through here. Composed markup fragments must not,
/// otherwise their own commands would be escaped a second time.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Appends the escaped form of `text` to `out`.
pub fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        if is_reserved(c) {
            out.push('\\');
        }
        out.push(c);
    }
}
