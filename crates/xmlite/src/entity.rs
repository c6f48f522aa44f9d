//! Entity translation for attribute values
//!
//! Recognized on decode:
//! - `&amp;` `&apos;` `&quot;` `&lt;` `&gt;`, names matched case-insensitively
//! - `%#` followed by decimal digits, a numeric character reference
//!
//! Anything else is copied through untouched; decoding never fails.
//! Encoding only produces the five named entities, so numeric references
//! do not survive a decode/encode cycle.

use std::borrow::Cow;

const NAMED: [(&str, char); 5] = [
    ("amp;", '&'),
    ("apos;", '\''),
    ("quot;", '"'),
    ("lt;", '<'),
    ("gt;", '>'),
];

/// Resolve entity and numeric references in `text`
pub fn decode(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '%']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find(['&', '%']) {
        let (head, tail) = rest.split_at(idx);
        out.push_str(head);

        if let Some(after) = tail.strip_prefix('&') {
            match named_entity(after) {
                Some((c, len)) => {
                    out.push(c);
                    rest = after.get(len..).unwrap_or_default();
                }
                None => {
                    out.push('&');
                    rest = after;
                }
            }
        } else {
            let after = tail.get(1..).unwrap_or_default();
            match numeric_reference(after) {
                Some((c, len)) => {
                    out.push(c);
                    rest = after.get(len..).unwrap_or_default();
                }
                None => {
                    out.push('%');
                    rest = after;
                }
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Escape the five special characters of `text`
pub fn encode(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '"', '\'', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

// `after` starts right behind the `&`
fn named_entity(after: &str) -> Option<(char, usize)> {
    NAMED.iter().find_map(|&(name, c)| {
        after
            .get(..name.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(name))
            .map(|_| (c, name.len()))
    })
}

// `after` starts right behind the `%`; returns the character and the number
// of bytes consumed including the `#`
fn numeric_reference(after: &str) -> Option<(char, usize)> {
    let digits = after.strip_prefix('#')?;
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    let code = digits.get(..len).filter(|d| !d.is_empty())?.parse::<u32>().ok()?;
    char::from_u32(code).map(|c| (c, len + 1))
}
