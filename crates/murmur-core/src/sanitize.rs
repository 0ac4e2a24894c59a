//! Markup sanitizer for user-supplied text (names, messages, edits).
//!
//! Rules:
//! - `<script>` / `<style>` elements are dropped together with their content.
//!   An element that is never closed drops the rest of the input.
//! - Any other tag (`<` followed by a letter, `/`, `!` or `?`, up to the next
//!   `>`) is dropped with its attributes.
//! - Leftover `<` and `>` are escaped as `&lt;` / `&gt;`.
//!
//! The output never contains `<` or `>`, so sanitizing twice is a no-op.
//! `&` is left alone for the same reason.

/// Elements whose content is dropped along with the tags.
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

/// Strip active markup from `raw`. Total and side-effect free.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(lt) = rest.find('<') {
        push_text(&mut out, &rest[..lt]);
        let tail = &rest[lt..];

        match tag_len(tail) {
            Some(len) => {
                let tag = &tail[..len];
                rest = &tail[len..];
                if let Some(name) = raw_text_element(tag) {
                    rest = skip_past_close(rest, name);
                }
            }
            None => {
                out.push_str("&lt;");
                rest = &tail[1..];
            }
        }
    }

    push_text(&mut out, rest);
    out
}

fn push_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Byte length of the tag at the start of `s` (which begins with `<`),
/// including the closing `>`. `None` when `s` does not start a tag.
fn tag_len(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    chars.next()?;
    let opener = chars.next()?;
    if !(opener.is_ascii_alphabetic() || matches!(opener, '/' | '!' | '?')) {
        return None;
    }
    s.find('>').map(|gt| gt + 1)
}

/// Name of the raw-text element `tag` opens, if any.
fn raw_text_element(tag: &str) -> Option<&'static str> {
    let lower = tag.to_ascii_lowercase();
    let body = lower.strip_prefix('<')?;
    RAW_TEXT_ELEMENTS.into_iter().find(|name| {
        body.strip_prefix(*name)
            .and_then(|after| after.chars().next())
            .is_some_and(|c| !c.is_ascii_alphanumeric())
    })
}

/// Skip everything up to and including `</name ...>`.
fn skip_past_close<'a>(s: &'a str, name: &str) -> &'a str {
    // ASCII lowercasing keeps byte offsets aligned with `s`.
    let lower = s.to_ascii_lowercase();
    let close = format!("</{name}");
    let Some(start) = lower.find(&close) else {
        return "";
    };
    match s[start..].find('>') {
        Some(gt) => &s[start + gt + 1..],
        None => "",
    }
}
