use std::{path::PathBuf, sync::OnceLock};

use anyhow::anyhow;

#[derive(Debug)]
pub(crate) struct Context {
    pub post_dir: PathBuf,
    pub out_dir: PathBuf,
    pub public_dir: PathBuf,
    /// Index file name, relative to `post_dir`.
    pub index_name: String,
    pub write_json: bool,

    pub blog_name: String,

    pub handlebars: handlebars::Handlebars<'static>,
}

static CONTEXT: OnceLock<Context> = OnceLock::new();

impl Context {
    pub fn init(context: Context) -> anyhow::Result<()> {
        CONTEXT
            .set(context)
            .map_err(|_| anyhow!("context is already initialized"))
    }

    pub fn instance() -> &'static Context {
        CONTEXT.get().expect("context is initialized in main")
    }
}
