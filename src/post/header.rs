use log::trace;

use super::Metadata;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SplitPost {
    pub meta: Metadata,
    pub body: String,
}

fn is_content_marker(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("content:")
}

/// Parses a `key: value` header line. The key must be ASCII letters only.
pub(super) fn parse_header_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.trim().split_once(':')?;
    let key = key.trim_end();
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    Some((key, value.trim()))
}

/// Without a `content:` marker every line is header and the body is empty.
pub(crate) fn split(content: &str) -> SplitPost {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let normalized = content.replace('\r', "");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let mut meta = Metadata::default();
    let mut body_start = lines.len();
    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if is_content_marker(line) {
            body_start = i + 1;
            break;
        }
        match parse_header_line(line) {
            Some((key, value)) => meta.insert(key, value),
            None => trace!("ignoring header line {line:?}"),
        }
    }

    let body = lines[body_start..]
        .join("\n")
        .trim()
        .to_string();

    SplitPost { meta, body }
}
