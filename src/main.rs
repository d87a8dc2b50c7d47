use anyhow::bail;
use clap::{command, value_parser, Arg, ArgAction};
use context::Context;
use generator::generate;
use renderer::generate_renderer;
use std::path::PathBuf;

mod context;
mod fetch;
mod generator;
mod post;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("post_dir")
                .help("Directory holding the post index and the post files")
                .value_parser(value_parser!(PathBuf))
                .default_value("posts"),
            Arg::new("out_dir")
                .help("Directory path of output. Existing contents will be removed.")
                .value_parser(value_parser!(PathBuf))
                .default_value("out"),
            Arg::new("public_dir")
                .help("Directory path of public. Contents will be copied as it is.")
                .value_parser(value_parser!(PathBuf))
                .default_value("public"),
            Arg::new("template_dir")
                .help("Directory of template")
                .value_parser(value_parser!(PathBuf))
                .default_value("template"),
            Arg::new("index")
                .long("index")
                .help("Name of the post index file inside post_dir")
                .default_value("index.txt"),
            Arg::new("json")
                .long("json")
                .help("Also write every parsed post to posts.json")
                .action(ArgAction::SetTrue),
        ])
        .get_matches();

    let Some(post_dir) = matches.get_one::<PathBuf>("post_dir") else {
        bail!("post_dir is required.");
    };
    if !post_dir.is_dir() {
        bail!("post_dir must be a directory.");
    }
    let Some(out_dir) = matches.get_one::<PathBuf>("out_dir") else {
        bail!("out_dir is required.");
    };
    if out_dir.exists() && !out_dir.is_dir() {
        bail!("if out_dir exists, it must be directory.");
    }
    let Some(public_dir) = matches.get_one::<PathBuf>("public_dir") else {
        bail!("public_dir is required.");
    };
    if !public_dir.is_dir() {
        bail!("public_dir must be a directory.")
    }
    let Some(template_dir) = matches.get_one::<PathBuf>("template_dir") else {
        bail!("template_dir is required.");
    };
    if !template_dir.is_dir() {
        bail!("template_dir must be a directory.")
    }
    let Some(index_name) = matches.get_one::<String>("index") else {
        bail!("index is required.");
    };

    Context::init(Context {
        post_dir: post_dir.to_owned(),
        out_dir: out_dir.to_owned(),
        public_dir: public_dir.to_owned(),
        index_name: index_name.to_owned(),
        write_json: matches.get_flag("json"),
        blog_name: std::env::var("BLOG_NAME").unwrap_or_default(),
        handlebars: generate_renderer(template_dir)?,
    })?;

    generate()
}
