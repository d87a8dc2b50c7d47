pub(super) fn strip_heading(line: &str) -> &str {
    let line = line.trim_start();
    if line.starts_with('#') {
        line.trim_start_matches('#').trim()
    } else {
        line.trim()
    }
}

/// `post-3.txt` -> `post-3`. Only the last extension goes.
pub(super) fn file_stem(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.contains('/') => stem,
        _ => filename,
    }
}

fn first_line(body: &str) -> Option<&str> {
    body.lines().find(|line| !line.trim().is_empty())
}

/// Also drops a first body line that repeats an explicit header title.
pub(super) fn resolve<'a>(
    meta_title: Option<&str>,
    body: &'a str,
    filename: &str,
) -> (String, &'a str) {
    if let Some(title) = meta_title.map(str::trim).filter(|t| !t.is_empty()) {
        return (title.to_string(), dedup(title, body));
    }

    let derived = first_line(body).map(strip_heading).unwrap_or_default();
    if derived.is_empty() {
        (file_stem(filename).to_string(), body)
    } else {
        (derived.to_string(), body)
    }
}

fn dedup<'a>(title: &str, body: &'a str) -> &'a str {
    let mut end = 0;
    let mut echoed = false;
    for line in body.split_inclusive('\n') {
        end += line.len();
        if line.trim().is_empty() {
            continue;
        }
        echoed = strip_heading(line) == title;
        break;
    }
    if !echoed {
        return body;
    }

    let mut rest = &body[end..];
    while let Some((head, tail)) = rest.split_once('\n') {
        if !head.trim().is_empty() {
            break;
        }
        rest = tail;
    }
    if rest.trim().is_empty() {
        ""
    } else {
        rest
    }
}
