// src/bin/cli.rs
use catalog_viewer::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
