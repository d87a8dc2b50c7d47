use super::paragraph;

pub(crate) const MAX_EXCERPT_CHARS: usize = 160;
pub(crate) const NO_PREVIEW: &str = "(No preview)";
const ELLIPSIS: char = '\u{2026}';

pub(super) fn truncate(text: &str) -> String {
    let text = text.trim_start();
    if text.chars().count() <= MAX_EXCERPT_CHARS {
        return text.to_string();
    }

    let mut out: String = text.chars().take(MAX_EXCERPT_CHARS - 3).collect();
    out.truncate(out.trim_end().len());
    out.push(ELLIPSIS);
    out
}

pub(super) fn resolve(preview_text: Option<&str>, body: &str) -> String {
    if let Some(preview) = preview_text.map(str::trim).filter(|p| !p.is_empty()) {
        return preview.to_string();
    }

    match paragraph::build(body, Some(1)).first() {
        Some(first) => truncate(&first.plain_text()),
        None => NO_PREVIEW.to_string(),
    }
}
