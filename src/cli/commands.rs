//! Command execution: resolve parameters, generate, dispatch to a sink.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing::{debug, warn};

use super::args::Args;
use crate::config;
use crate::constants;
use crate::export::{self, Sink, SvgOptions};
use crate::gear::{GearParams, InvoluteSource, ProfileSource};

/// Defaults, then config file, then flags.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded.
pub fn resolve_params(args: &Args) -> Result<GearParams> {
    let file = config::load(args.config.as_deref())?;
    let mut params = GearParams::default();
    file.apply(&mut params);
    args.apply(&mut params);
    debug!(?params, "resolved gear parameters");
    Ok(params)
}

/// Sink selected by the presence of `--save`.
#[must_use]
pub fn sink_for(args: &Args) -> Sink {
    match &args.save {
        Some(path) => Sink::File(path.clone()),
        None => Sink::Window,
    }
}

/// Runs a full invocation.
///
/// # Errors
///
/// Propagates config, generation, export, and display failures.
pub fn run(args: &Args) -> Result<()> {
    let params = resolve_params(args)?;
    let profile = InvoluteSource::new(params).generate()?;
    let sink = sink_for(args);

    export::export(&profile, &sink, SvgOptions { guides: args.guides })
        .wrap_err("failed to export gear profile")?;

    if let Sink::File(path) = &sink {
        println!("{}{}", constants::CLI_MSG_SAVED, path.display());
        if args.open {
            if let Err(e) = open::that(path) {
                // the file is already written; not worth failing the run
                warn!(error = %e, "failed to launch viewer");
                eprintln!("{}{e}", constants::CLI_MSG_OPEN_FAILED);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_sink_for() {
        let args = Args::try_parse_from(["gearview"]).unwrap();
        assert_eq!(sink_for(&args), Sink::Window);
        let args = Args::try_parse_from(["gearview", "--save", "x.svg"]).unwrap();
        assert_eq!(sink_for(&args), Sink::File("x.svg".into()));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "teeth1 = 40\nteeth2 = 10\nmodule = 2.0").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let args =
            Args::try_parse_from(["gearview", "--config", &path, "--teeth2", "12"]).unwrap();
        let params = resolve_params(&args).unwrap();
        assert_eq!(params.teeth1, 40);
        assert_eq!(params.teeth2, 12);
        assert!((params.module - 2.0).abs() < f64::EPSILON);
        assert_eq!(params.frame_count, constants::DEFAULT_FRAME_COUNT);
    }

    #[test]
    fn test_run_saves_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pair.svg");
        let cfg = dir.path().join("config.toml");
        std::fs::write(&cfg, "").unwrap();
        let args = Args::try_parse_from([
            "gearview",
            "--config",
            cfg.to_str().unwrap(),
            "--save",
            out.to_str().unwrap(),
        ])
        .unwrap();
        run(&args).unwrap();
        assert!(std::fs::metadata(&out).unwrap().len() > 0);
    }

    #[test]
    fn test_run_reports_generation_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("config.toml");
        std::fs::write(&cfg, "teeth2 = 2").unwrap();
        let out = dir.path().join("pair.svg");
        let args = Args::try_parse_from([
            "gearview",
            "--config",
            cfg.to_str().unwrap(),
            "--save",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("at least 3 teeth"));
        assert!(!out.exists());
    }
}
