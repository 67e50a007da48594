use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = buildbench_gen::cli::parse();
    let code = buildbench_gen::app::run_cli(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
