use crate::backend::Backend;
use crate::cli::Cli;
use crate::emit::FsSink;
use crate::errors::GenError;
use crate::generator::Generator;
use crate::graph::Params;
use crate::utils::config::{self, Config};
use std::path::{Path, PathBuf};

/// Settings for one run after merging CLI arguments, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub params: Params,
    pub backends: Vec<Backend>,
    pub parallel: bool,
}

/// Merge `cli` over `cfg` over built-in defaults.
#[must_use]
pub fn resolve(cli: &Cli, cfg: Option<&Config>) -> Resolved {
    let section = cfg.and_then(|c| c.generate.clone()).unwrap_or_default();
    let defaults = Params::default();
    let params = Params::new(
        cli.files.or(section.files).unwrap_or(defaults.files_per_module),
        cli.deps.or(section.deps).unwrap_or(defaults.fanout),
        cli.modules.or(section.modules).unwrap_or(defaults.modules),
    );
    let backends = if cli.backends.is_empty() {
        section.backends.unwrap_or_else(Backend::all)
    } else {
        cli.backends.clone()
    };
    Resolved { params, backends, parallel: cli.jobs || section.jobs.unwrap_or(false) }
}

/// Only an explicit `--config` is read; without it the run depends on the
/// command line alone.
fn load_config(cli: &Cli) -> Result<Option<Config>, GenError> {
    cli.config
        .as_ref()
        .map(|p| {
            let path = PathBuf::from(p);
            config::load_config_at(&path).map_err(|source| GenError::Config { path, source })
        })
        .transpose()
}

fn run(cli: &Cli) -> Result<(), GenError> {
    let out = PathBuf::from(&cli.out);
    let cfg = load_config(cli)?;
    let resolved = resolve(cli, cfg.as_ref());
    tracing::debug!(?resolved, "resolved settings");

    let generator = Generator::new(resolved.params, resolved.backends).parallel(resolved.parallel);
    // Paths are only collected when a manifest is requested.
    let summary = match cli.manifest.as_ref() {
        Some(manifest_path) => {
            let manifest = generator.generate_with_manifest(&FsSink, &out)?;
            manifest.save_json(Path::new(manifest_path))?;
            manifest.summary
        }
        None => generator.generate(&FsSink, &out)?,
    };

    if !cli.quiet {
        println!(
            "Generated {} modules ({} sources, {} build descriptions, {} dependency edges) in {}",
            summary.modules,
            summary.sources,
            summary.descriptions,
            summary.dependency_edges,
            out.display()
        );
    }
    Ok(())
}

/// Run the CLI logic in-process.
///
/// Returns an exit code (0 = success).
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "generation failed");
            eprintln!("Generation failed: {e}");
            1
        }
    }
}
