use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub(crate) enum Segment {
    Text(String),
    LineBreak,
}

/// One paragraph of body text. Never holds a blank line.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub(crate) struct ParagraphBlock {
    segments: Vec<Segment>,
}

impl ParagraphBlock {
    pub fn from_text(text: &str) -> Self {
        let mut segments = vec![];
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                segments.push(Segment::LineBreak);
            }
            segments.push(Segment::Text(line.to_string()));
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::LineBreak => out.push('\n'),
            }
        }
        out
    }
}

fn flush(current: &mut Vec<&str>, paragraphs: &mut Vec<ParagraphBlock>) {
    let joined = current.join("\n");
    current.clear();
    let trimmed = joined.trim_end();
    if !trimmed.is_empty() {
        paragraphs.push(ParagraphBlock::from_text(trimmed));
    }
}

/// Splits `body` into paragraphs at runs of blank lines, stopping after
/// `limit` paragraphs when one is given.
pub(crate) fn build(body: &str, limit: Option<usize>) -> Vec<ParagraphBlock> {
    let limit = limit.unwrap_or(usize::MAX);
    let mut paragraphs = vec![];
    let mut current: Vec<&str> = vec![];

    for line in body.split('\n') {
        if paragraphs.len() >= limit {
            return paragraphs;
        }
        if line.trim().is_empty() {
            flush(&mut current, &mut paragraphs);
        } else {
            current.push(line);
        }
    }
    if paragraphs.len() < limit {
        flush(&mut current, &mut paragraphs);
    }

    paragraphs
}
