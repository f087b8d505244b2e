//! gearview - involute gear profile generator.
//!
//! Generates a meshing pair of involute spur gears and either shows them in
//! the terminal or exports them as an SVG document.

mod app;
mod cli;
mod config;
mod constants;
mod error;
mod event;
mod export;
mod gear;
mod theme;
mod ui;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

use crate::cli::args::Args;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.verbose)?;

    cli::commands::run(&args)
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let filter_layer = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env()
        .wrap_err("error reading logging directives")?;
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}
