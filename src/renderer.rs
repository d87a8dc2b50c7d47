use std::path::Path;

use anyhow::Context;
use handlebars::{handlebars_helper, Handlebars};

handlebars_helper!(plural: |count: u64, word: str| {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
});

pub(super) fn generate_renderer(template_dir: &Path) -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = handlebars::Handlebars::new();
    handlebars.register_helper("plural", Box::new(plural));
    handlebars
        .register_template_file("index", template_dir.join("index.hbs"))
        .context("index.hbs")?;
    handlebars.register_partial(
        "layout",
        std::fs::read_to_string(template_dir.join("layout.hbs")).context("layout.hbs")?,
    )?;

    Ok(handlebars)
}
