//! Minimal HTML-to-text extraction.
//!
//! Walks start/end tags and text nodes, captures the `<title>` text, decodes
//! common character references, and collapses whitespace runs. Enough for
//! turning documentation pages into model-readable plain text; not a
//! conforming HTML parser.

/// Extraction result: the page title (first non-empty text inside `<title>`)
/// and the whitespace-collapsed body text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub title: String,
    pub text: String,
}

/// Strip markup from `html`, returning the title and the plain text with all
/// whitespace runs collapsed to single spaces.
pub fn extract_text(html: &str) -> ExtractedText {
    let mut parts: Vec<String> = Vec::new();
    let mut title = String::new();
    let mut in_title = false;

    let mut rest = html;
    while let Some(lt) = rest.find('<') {
        push_text(&rest[..lt], in_title, &mut parts, &mut title);
        rest = &rest[lt..];

        if let Some(after_comment) = strip_comment(rest) {
            rest = after_comment;
            continue;
        }

        let Some(gt) = rest.find('>') else {
            // Unterminated tag: drop the tail, like a forgiving parser would.
            rest = "";
            break;
        };
        let tag = &rest[1..gt];
        match tag_name(tag) {
            Some(name) if name.eq_ignore_ascii_case("title") => {
                in_title = !tag.trim_start().starts_with('/');
            }
            _ => {}
        }
        rest = &rest[gt + 1..];
    }
    push_text(rest, in_title, &mut parts, &mut title);

    ExtractedText {
        title,
        text: collapse_whitespace(&parts.join(" ")),
    }
}

fn push_text(raw: &str, in_title: bool, parts: &mut Vec<String>, title: &mut String) {
    let decoded = decode_entities(raw);
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        return;
    }
    parts.push(trimmed.to_string());
    if in_title && title.is_empty() {
        *title = trimmed.to_string();
    }
}

/// If `rest` starts with an HTML comment, return the remainder after it.
fn strip_comment(rest: &str) -> Option<&str> {
    let body = rest.strip_prefix("<!--")?;
    match body.find("-->") {
        Some(end) => Some(&body[end + 3..]),
        None => Some(""),
    }
}

/// The tag's element name, including a leading `/` stripped by the caller.
fn tag_name(tag: &str) -> Option<&str> {
    let tag = tag.trim_start();
    let tag = tag.strip_prefix('/').unwrap_or(tag);
    let end = tag
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(tag.len());
    if end == 0 {
        None
    } else {
        Some(&tag[..end])
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode named and numeric character references. Unknown references pass
/// through unchanged.
fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        // References longer than a dozen chars are not worth chasing.
        let semi = rest
            .char_indices()
            .take(12)
            .find(|&(_, c)| c == ';')
            .map(|(i, _)| i);
        let Some(semi) = semi else {
            out.push('&');
            rest = &rest[1..];
            continue;
        };
        let entity = &rest[1..semi];
        match decode_entity(entity) {
            Some(ch) => {
                out.push_str(&ch);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<String> {
    match entity {
        "amp" => return Some("&".into()),
        "lt" => return Some("<".into()),
        "gt" => return Some(">".into()),
        "quot" => return Some("\"".into()),
        "apos" => return Some("'".into()),
        "nbsp" => return Some(" ".into()),
        _ => {}
    }
    let digits = entity.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };
    char::from_u32(code).map(String::from)
}
