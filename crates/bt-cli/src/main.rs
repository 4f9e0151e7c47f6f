use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

mod commands;

#[derive(Parser)]
#[command(name = "busticket")]
#[command(about = "Bus ticket counter CLI", long_about = None)]
struct Cli {
    /// Config paths in merge order (base -> site -> ...). Falls back to $BUSTICKET_CONFIG.
    #[arg(long = "config", global = true)]
    config_paths: Vec<String>,

    /// Reject config keys that nothing reads instead of warning about them.
    #[arg(long, global = true, default_value_t = false)]
    strict_config: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the destination menu with fares
    Fares,

    /// Print the effective config hash + canonical JSON
    ConfigHash,

    /// Run the operator console: one command per line on stdin, until `quit` or EOF
    Console,
}

fn main() -> Result<()> {
    // Silent if the file does not exist.
    let _ = dotenvy::from_filename(".env.local");

    init_tracing();

    let cli = Cli::parse();
    let paths = commands::resolve_config_paths(cli.config_paths);
    let (loaded, ticketing) = commands::load_config(&paths, cli.strict_config)?;
    info!(
        config_hash = %loaded.config_hash,
        layers = paths.len(),
        destinations = ticketing.fares.len(),
        "config loaded"
    );

    match cli.cmd {
        Commands::Fares => commands::print_fares(&ticketing),
        Commands::ConfigHash => commands::print_config_hash(&loaded),
        Commands::Console => commands::console::run_stdio(ticketing),
    }
}

/// Logs go to stderr so stdout carries only receipts and tables.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
