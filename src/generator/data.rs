use serde::Serialize;

#[derive(Serialize, Debug)]
pub(super) struct IndexPageData<'a> {
    pub blog_name: &'a str,
    pub post_count: usize,
    pub failed_count: usize,
    /// Pre-rendered card HTML, in index order.
    pub cards: Vec<String>,
}
