use maud::{html, Markup};

use crate::post::{PostRecord, Segment};

/// `2024/Hello World.txt` -> `post-2024-hello-world-txt`
pub(super) fn anchor_id(source: &str) -> String {
    let mut id = String::from("post");
    let mut pending_dash = true;
    for c in source.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash {
                id.push('-');
                pending_dash = false;
            }
            id.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    id
}

fn meta_line(post: &PostRecord) -> Markup {
    let meta = &post.meta;
    html! {
        @if let Some(written) = meta.written() {
            span.post-written { "Written " (written) }
        }
        @if let Some(edited) = meta.edited() {
            span.post-edited { "Edited " (edited) }
        }
        @if let Some(author) = meta.author() {
            span.post-author { "by " (author) }
        }
        @if let Some(read_time) = meta.read_time() {
            span.post-readtime { (read_time) " read" }
        }
    }
}

/// A collapsible card: the summary shows title, metadata and excerpt, the
/// expanded part the full body.
pub(super) fn render_card(post: &PostRecord) -> String {
    html! {
        details.post-card.failed[post.failed] id=(anchor_id(&post.source)) {
            summary.post-summary {
                span.post-title { (post.title) }
                span.post-meta { (meta_line(post)) }
                span.post-excerpt {
                    @for (i, line) in post.excerpt.split('\n').enumerate() {
                        @if i > 0 { br; }
                        (line)
                    }
                }
            }
            div.post-body {
                @for paragraph in &post.paragraphs {
                    p {
                        @for segment in paragraph.segments() {
                            @match segment {
                                Segment::Text(text) => { (text) }
                                Segment::LineBreak => { br; }
                            }
                        }
                    }
                }
            }
        }
    }
    .into()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{anchor_id, render_card};
    use crate::post::PostRecord;

    #[test]
    fn anchors() {
        assert_eq!(anchor_id("post-3.txt"), "post-post-3-txt");
        assert_eq!(anchor_id("2024/Hello World.txt"), "post-2024-hello-world-txt");
        assert_eq!(anchor_id("!!!"), "post");
    }

    #[test]
    fn card_markup() {
        let post = PostRecord::parse(
            "hi.txt",
            "title: Hi <there>\nauthor: Sam\nwritten: 2024-01-02\ncontent:\none\ntwo\n\nthree",
        );
        let card = render_card(&post);
        assert_eq!(
            card,
            concat!(
                "<details class=\"post-card\" id=\"post-hi-txt\">",
                "<summary class=\"post-summary\">",
                "<span class=\"post-title\">Hi &lt;there&gt;</span>",
                "<span class=\"post-meta\">",
                "<span class=\"post-written\">Written 2024-01-02</span>",
                "<span class=\"post-author\">by Sam</span>",
                "</span>",
                "<span class=\"post-excerpt\">one<br>two</span>",
                "</summary>",
                "<div class=\"post-body\"><p>one<br>two</p><p>three</p></div>",
                "</details>",
            )
        );
    }

    #[test]
    fn failed_card_is_marked() {
        let card = render_card(&PostRecord::failed("gone.txt"));
        assert!(card.starts_with("<details class=\"post-card failed\" id=\"post-gone-txt\">"));
        assert!(card.contains("Failed to load this post."));
        assert!(card.contains("<p>This post could not be loaded.</p>"));
    }
}
