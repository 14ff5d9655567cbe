//! Input sanitization for names and emails.

/// Normalises an untrusted text field for storage and redisplay.
///
/// Trims surrounding whitespace, strips backslash escapes, then escapes `& < > " '`
/// so the value can be placed back into markup as is.
pub fn sanitize(raw: &str) -> String {
    let stripped = strip_slashes(raw.trim());

    html_escape::encode_quoted_attribute(&stripped).into_owned()
}

/// Removes backslash escapes, keeping the character each backslash escaped.
///
/// `\\` becomes `\`, a trailing lone backslash is dropped.
pub fn strip_slashes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }

    out
}
