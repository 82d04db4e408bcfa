// src/cli.rs
//
// Headless front end: load N pages with the same controller the GUI uses,
// print them as text, optionally export CSV.

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, bail};

use crate::{
    config::{
        consts::{DEFAULT_OUT_DIR, LOCALES, MAX_AVG_LIKES},
        options::{AppOptions, NetOptions},
    },
    controller::Catalog,
    core::net::HttpSource,
    file,
    progress::CliProgress,
    render::{TextRenderer, ViewMode},
    runner,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ViewArg {
    Table,
    Gallery,
}

impl From<ViewArg> for ViewMode {
    fn from(v: ViewArg) -> Self {
        match v {
            ViewArg::Table => ViewMode::Table,
            ViewArg::Gallery => ViewMode::Gallery,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cli")]
#[command(version, about = "Browse and export a generated book catalog", long_about = None)]
#[command(after_help = "EXAMPLES:
    cli --locale de-DE --seed 7 --pages 3
    cli --view gallery --likes 2.5 --reviews 0.5
    cli --expand 1,4 --export exports/")]
pub struct Args {
    /// Locale selector (en-US, de-DE, fr-FR, ja-JP)
    #[arg(long, default_value = "en-US", value_parser = parse_locale)]
    locale: String,

    /// Seed; anything after the leading integer is ignored
    #[arg(long, default_value = "42")]
    seed: String,

    /// Average likes per book (0-10)
    #[arg(long, default_value_t = 5.0, value_parser = parse_likes)]
    likes: f64,

    /// Average reviews per book; fractional values allowed
    #[arg(long, default_value = "2")]
    reviews: String,

    /// Randomize the seed instead of using --seed
    #[arg(long, conflicts_with = "seed")]
    random_seed: bool,

    /// Number of pages to load (first page is 20 books, then 10 per page)
    #[arg(short, long, default_value_t = 1)]
    pages: u32,

    /// Output layout
    #[arg(long, value_enum, default_value_t = ViewArg::Table)]
    view: ViewArg,

    /// Book indices to expand in table view, comma separated
    #[arg(long, value_delimiter = ',', value_name = "INDEX")]
    expand: Vec<u64>,

    /// Write CSV into DIR (defaults to ./out)
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = DEFAULT_OUT_DIR)]
    export: Option<String>,

    /// Catalog endpoint (overrides CATALOG_API_URL)
    #[arg(long, value_name = "URL")]
    api: Option<String>,

    /// Write a debug log to .store/debug.log
    #[arg(long)]
    log: bool,

    /// Suppress the rendered listing
    #[arg(short, long)]
    quiet: bool,
}

fn parse_locale(s: &str) -> Result<String, String> {
    if LOCALES.iter().any(|(code, _)| *code == s) {
        Ok(s.to_string())
    } else {
        let known: Vec<&str> = LOCALES.iter().map(|(code, _)| *code).collect();
        Err(format!("unknown locale '{s}' (expected one of: {})", known.join(", ")))
    }
}

fn parse_likes(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("not a number: '{s}'"))?;
    if (0.0..=MAX_AVG_LIKES).contains(&v) {
        Ok(v)
    } else {
        Err(format!("likes must be within 0-{MAX_AVG_LIKES}"))
    }
}

impl Args {
    /// Fold flags into the shared option types.
    fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.query.locale = self.locale.clone();
        opts.query.seed_text = self.seed.clone();
        opts.query.avg_likes = self.likes;
        opts.query.reviews_text = self.reviews.clone();
        if self.random_seed {
            let seed = opts.query.randomize_seed(&mut rand::thread_rng());
            eprintln!("Seed: {seed}");
        }

        opts.net = NetOptions::from_env();
        if let Some(url) = &self.api {
            opts.net.api_url = url.trim().to_string();
        }
        if let Some(dir) = &self.export {
            opts.export.set_dir(dir);
        }
        opts.view = self.view.into();
        opts
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.log {
        let path = crate::log::init().wrap_err("could not open log file")?;
        eprintln!("Logging to {}", path.display());
    }
    if args.pages == 0 {
        bail!("--pages must be at least 1");
    }

    let opts = args.to_options();
    let source = HttpSource::new(&opts.net).wrap_err("could not build HTTP client")?;
    logf!("CLI: api={} pages={} view={:?}", source.url(), args.pages, opts.view);

    let mut catalog = Catalog::new(opts.query.to_params(), opts.view, TextRenderer::new());
    let mut progress = CliProgress::default();
    let pages = runner::load_pages(&mut catalog, &source, args.pages, Some(&mut progress))
        .wrap_err("catalog request failed")?;
    logf!("CLI: merged {} page(s), {} books", pages, catalog.books().len());

    for &index in &args.expand {
        if catalog.toggle_expanded(index).is_none() {
            eprintln!("Skipping --expand {index}: not among the loaded books");
        }
    }

    if !args.quiet {
        print!("{}", catalog.renderer().render());
    }

    if args.export.is_some() {
        let path = file::write_export_today(&opts.export, catalog.books())
            .wrap_err("export failed")?;
        logf!("CLI: exported {}", path.display());
        eprintln!("Exported {} books to {}", catalog.books().len(), path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_options() {
        let args = Args::try_parse_from([
            "cli", "--locale", "ja-JP", "--seed", "7x", "--likes", "2.5",
            "--reviews", "0.5", "--view", "gallery", "--export",
        ])
        .unwrap();
        let opts = args.to_options();
        assert_eq!(opts.query.locale, "ja-JP");
        assert_eq!(opts.query.to_params().seed, 7);
        assert_eq!(opts.view, ViewMode::Gallery);
        assert_eq!(opts.export.out_dir(), std::path::Path::new(DEFAULT_OUT_DIR));
    }

    #[test]
    fn rejects_unknown_locale_and_out_of_range_likes() {
        assert!(Args::try_parse_from(["cli", "--locale", "xx-YY"]).is_err());
        assert!(Args::try_parse_from(["cli", "--likes", "11"]).is_err());
    }

    #[test]
    fn expand_takes_a_comma_list() {
        let args = Args::try_parse_from(["cli", "--expand", "1,4,9"]).unwrap();
        assert_eq!(args.expand, vec![1, 4, 9]);
    }
}
