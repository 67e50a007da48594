use crate::backend::Backend;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "buildbench-gen",
    version,
    about = "Generate a C source tree for build-system benchmarks",
    long_about = "Generate MODULES directories of FILES C header/source pairs, each source including and calling DEPS sibling files (wrapping around the module), plus main.c and CMake/meique build descriptions. Output is fully determined by the parameters."
)]
pub struct Cli {
    /// Files per module
    #[arg(value_name = "FILES")]
    pub files: Option<usize>,
    /// Dependencies (includes and calls) per file
    #[arg(value_name = "DEPS")]
    pub deps: Option<usize>,
    /// Number of modules
    #[arg(value_name = "MODULES")]
    pub modules: Option<usize>,
    /// Output directory (the tree is written directly inside it)
    #[arg(short, long, default_value = ".")]
    pub out: String,
    /// Path to a TOML configuration file; positional arguments take precedence over it
    #[arg(long)]
    pub config: Option<String>,
    /// Build description formats to emit (repeatable; default: all)
    #[arg(long = "backend", value_enum)]
    pub backends: Vec<Backend>,
    /// Emit modules in parallel
    #[arg(long, default_value_t = false)]
    pub jobs: bool,
    /// Write a JSON manifest of the generated artifacts to this path
    #[arg(long)]
    pub manifest: Option<String>,
    /// Suppress non-essential output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
