use std::{
    fs::File,
    io::BufWriter,
    path::Path,
};

use anyhow::Context as _;
use fs_extra::dir::CopyOptions;
use log::{info, warn};

use crate::{
    context::Context,
    fetch::{load_index, DirFetcher, Fetcher},
    post::PostRecord,
};

mod data;
mod utils;

use data::IndexPageData;
use utils::render_card;

/// Fetches and parses every listed post, in order. A post that cannot be
/// fetched becomes a failed placeholder.
pub(crate) fn load_posts(fetcher: &dyn Fetcher, filenames: &[String]) -> Vec<PostRecord> {
    filenames
        .iter()
        .map(|filename| match fetcher.fetch(filename) {
            Ok(content) => PostRecord::parse(filename, &content),
            Err(e) => {
                warn!("failed to load {filename:?}: {e:#}");
                PostRecord::failed(filename)
            }
        })
        .collect()
}

fn write_index_page(c: &Context, posts: &[PostRecord]) -> anyhow::Result<()> {
    let data = IndexPageData {
        blog_name: &c.blog_name,
        post_count: posts.len(),
        failed_count: posts.iter().filter(|p| p.failed).count(),
        cards: posts.iter().map(render_card).collect(),
    };

    let fd = File::create(c.out_dir.join("index.html"))?;
    let writer = BufWriter::new(fd);
    c.handlebars
        .render_to_write("index", &data, writer)
        .context("while generating index.html")?;
    Ok(())
}

fn write_json(path: &Path, posts: &[PostRecord]) -> anyhow::Result<()> {
    let fd = File::create(path)?;
    let writer = BufWriter::new(fd);
    serde_json::to_writer_pretty(writer, posts)
        .with_context(|| format!("while writing {path:?}"))?;
    Ok(())
}

fn generate_with(c: &Context) -> anyhow::Result<()> {
    let fetcher = DirFetcher::new(&c.post_dir);

    // nothing is written when the index itself is unavailable
    let filenames = load_index(&fetcher, &c.index_name)?;
    info!("{} posts listed in {:?}", filenames.len(), c.index_name);

    let posts = load_posts(&fetcher, &filenames);

    if c.out_dir.exists() {
        fs_extra::dir::remove(&c.out_dir)?;
    }
    std::fs::create_dir_all(&c.out_dir)?;

    // copy `public_dir`
    let mut cp_opts = CopyOptions::new();
    cp_opts.copy_inside = true;
    cp_opts.content_only = true;
    cp_opts.overwrite = true;
    fs_extra::dir::copy(&c.public_dir, &c.out_dir, &cp_opts)
        .with_context(|| format!("while copying {:?}", c.public_dir))?;

    write_index_page(c, &posts)?;
    if c.write_json {
        write_json(&c.out_dir.join("posts.json"), &posts)?;
    }

    info!(
        "wrote {} cards ({} failed) to {:?}",
        posts.len(),
        posts.iter().filter(|p| p.failed).count(),
        c.out_dir
    );
    Ok(())
}

pub(crate) fn generate() -> anyhow::Result<()> {
    generate_with(Context::instance())
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use anyhow::bail;
    use pretty_assertions::assert_eq;

    use super::{generate_with, load_posts};
    use crate::{context::Context, fetch::Fetcher};

    struct MapFetcher(Vec<(&'static str, &'static str)>);

    impl Fetcher for MapFetcher {
        fn fetch(&self, path: &str) -> anyhow::Result<String> {
            match self.0.iter().find(|(name, _)| *name == path) {
                Some((_, content)) => Ok(content.to_string()),
                None => bail!("404 for {path}"),
            }
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn failures_do_not_stop_the_listing() {
        let fetcher = MapFetcher(vec![
            ("a.txt", "title: A\ncontent:\nalpha"),
            ("c.txt", "title: C\ncontent:\ngamma"),
        ]);
        let posts = load_posts(&fetcher, &names(&["a.txt", "missing.txt", "c.txt"]));

        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "missing.txt", "C"]);
        let failed: Vec<bool> = posts.iter().map(|p| p.failed).collect();
        assert_eq!(failed, vec![false, true, false]);
        assert_eq!(posts[1].paragraphs.len(), 1);
    }

    fn test_context(root: &Path, write_json: bool) -> Context {
        let mut handlebars = handlebars::Handlebars::new();
        handlebars
            .register_template_string(
                "index",
                "<h1>{{blog_name}}</h1>{{post_count}}/{{failed_count}}{{#each cards}}{{{this}}}{{/each}}",
            )
            .unwrap();
        Context {
            post_dir: root.join("posts"),
            out_dir: root.join("out"),
            public_dir: root.join("public"),
            index_name: "index.txt".to_string(),
            write_json,
            blog_name: "Notes".to_string(),
            handlebars,
        }
    }

    #[test]
    fn writes_page_assets_and_json() {
        let root = tempfile::tempdir().unwrap();
        let c = test_context(root.path(), true);
        fs::create_dir_all(&c.post_dir).unwrap();
        fs::create_dir_all(&c.public_dir).unwrap();
        fs::write(c.public_dir.join("style.css"), "body {}").unwrap();
        fs::write(c.post_dir.join("index.txt"), "# posts\none.txt\n\ngone.txt\n").unwrap();
        fs::write(c.post_dir.join("one.txt"), "title: One\ncontent:\nfirst").unwrap();
        fs::create_dir_all(&c.out_dir).unwrap();
        fs::write(c.out_dir.join("stale.html"), "old").unwrap();

        generate_with(&c).unwrap();

        let page = fs::read_to_string(c.out_dir.join("index.html")).unwrap();
        assert!(page.starts_with("<h1>Notes</h1>2/1<details class=\"post-card\" id=\"post-one-txt\">"));
        assert!(page.contains("id=\"post-gone-txt\""));
        assert_eq!(fs::read_to_string(c.out_dir.join("style.css")).unwrap(), "body {}");
        assert!(!c.out_dir.join("stale.html").exists());

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(c.out_dir.join("posts.json")).unwrap())
                .unwrap();
        assert_eq!(json[0]["title"], "One");
        assert_eq!(json[1]["failed"], true);
    }

    #[test]
    fn missing_index_writes_nothing() {
        let root = tempfile::tempdir().unwrap();
        let c = test_context(root.path(), false);
        fs::create_dir_all(&c.post_dir).unwrap();
        fs::create_dir_all(&c.out_dir).unwrap();
        fs::write(c.out_dir.join("keep.html"), "old").unwrap();

        assert!(generate_with(&c).is_err());
        assert!(c.out_dir.join("keep.html").exists());
    }
}
