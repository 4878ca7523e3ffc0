//! Reads HTML from stdin and prints a `scraped` message as JSON to stdout.
//!
//! Usage: `clip-stdin [--url URL] [--select CSS] [--content-type VALUE] [--icon-priority]`
//!
//! `--select` makes the full contents of the first element matching `CSS`
//! the active selection. Logs go to stderr; set `RUST_LOG` to see them.

use std::env;
use std::io::{self, Read};
use std::process;

use page_clip::{clip_with_options, ClipOptions, IconOrder, Message, Page, Range, TreePathCodec};
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "about:blank";

#[derive(Debug, Default)]
struct Args {
    url: Option<String>,
    select: Option<String>,
    content_type: Option<String>,
    icon_priority: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = env::args().skip(1);

    while let Some(arg) = iter.next() {
        let mut value = |name: &str| iter.next().ok_or_else(|| format!("{name} needs a value"));
        match arg.as_str() {
            "--url" => args.url = Some(value("--url")?),
            "--select" => args.select = Some(value("--select")?),
            "--content-type" => args.content_type = Some(value("--content-type")?),
            "--icon-priority" => args.icon_priority = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(args)
}

fn fail(message: &str) -> ! {
    eprintln!("clip-stdin: {message}");
    process::exit(1);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = parse_args().unwrap_or_else(|e| fail(&e));

    let mut html = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut html) {
        fail(&format!("failed to read from stdin: {e}"));
    }

    let url = args.url.as_deref().unwrap_or(DEFAULT_URL);
    let mut page = Page::from_bytes(&html, url, args.content_type.as_deref())
        .unwrap_or_else(|e| fail(&e.to_string()));

    if let Some(css) = &args.select {
        let range = page
            .root()
            .try_select(css)
            .and_then(|sel| sel.nodes().first().copied())
            .map(Range::select_node_contents);
        match range {
            Some(range) => page.set_selection(vec![range]),
            None => tracing::warn!(selector = %css, "nothing matched; clipping whole page"),
        }
    }

    let options = ClipOptions {
        icon_order: if args.icon_priority {
            IconOrder::RelPriority
        } else {
            IconOrder::DocumentOrder
        },
        ..ClipOptions::default()
    };

    let data = clip_with_options(&page, &options, &TreePathCodec)
        .await
        .unwrap_or_else(|e| fail(&e.to_string()));

    match serde_json::to_string(&Message::scraped(data)) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(&format!("failed to serialize: {e}")),
    }
}
