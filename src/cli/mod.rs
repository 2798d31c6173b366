mod args;
mod config;
mod global;
mod handlers;
mod io;

use args::Command;
use clap::Parser;
use global::GlobalArgs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "base-block")]
#[command(version)]
#[command(about = "Block-structured base64, base32 and base16 encoder/decoder", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

/// Installs the stderr log subscriber; `BASE_BLOCK_LOG` overrides the
/// level picked from `-q` / `-v`.
fn init_tracing(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_env("BASE_BLOCK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(global.log_level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!global.no_color)
        .try_init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        base_block::errors::disable_color();
    }
    init_tracing(&cli.global);

    let registry = config::load_registry(&cli.global)?;

    match cli.command {
        Command::Encode(args) => handlers::encode::handle(args, &cli.global, &registry),
        Command::Decode(args) => handlers::decode::handle(args, &cli.global, &registry),
        Command::Config { action } => handlers::config::handle(action, &cli.global, &registry),
    }
}
