use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use assetgen::dataset::{DEFAULT_ASSETS, DEFAULT_OUTPUT, DEFAULT_USERS};
use assetgen::{DatasetShape, GenerateOptions};

#[derive(Parser)]
#[command(
    name = "assetgen",
    about = "Generate a CSV of random user emails and asset balances",
    version,
    allow_negative_numbers = true
)]
struct Cli {
    /// Number of user rows (negative values produce no rows)
    #[arg(short, long, default_value_t = DEFAULT_USERS as i64)]
    users: i64,

    /// Number of asset columns per user (negative values produce none)
    #[arg(short, long, default_value_t = DEFAULT_ASSETS as i64)]
    assets: i64,

    /// Output file; a .gz or .zst extension compresses it
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed for reproducible output (default: seeded from the OS)
    #[arg(long)]
    seed: Option<u64>,

    /// Field delimiter, a single ASCII character
    #[arg(short, long, default_value_t = ',', value_parser = parse_delimiter)]
    delimiter: char,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn parse_delimiter(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && c != '\n' && c != '\r' => Ok(c),
        _ => Err(format!("delimiter must be one ASCII character, got {s:?}")),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let shape = DatasetShape::new(cli.users, cli.assets);
    let options = GenerateOptions {
        delimiter: cli.delimiter as u8,
        seed: cli.seed,
    };

    assetgen::generate_asset_data(&cli.output, shape, &options)?;

    println!(
        "Data generation complete. File saved as '{}'.",
        cli.output.display()
    );
    Ok(())
}
