//! Open Billing Core - billing CLI
//!
//! Generates formatted shop bills from JSON requests and spells amounts in
//! words using the Indian numbering system.
//!
//! # Usage
//!
//! ```bash
//! # Render a bill from a request file and print it
//! billing-cli generate --input bill.json
//!
//! # Render and save under bill_<customer>_<date>.txt
//! billing-cli generate --input bill.json --save
//!
//! # Read the request from stdin, write the bill to a chosen path
//! cat bill.json | billing-cli generate --output /tmp/bill.txt
//!
//! # Spell an amount
//! billing-cli words 1234567.89
//! ```
//!
//! # Environment Variables
//!
//! * `BILL_NAME` - Shop name printed in the header
//! * `BILL_ADDRESS` - Shop address
//! * `BILL_PHONE` - Shop phone number
//! * `RUST_LOG` - Log filter (default: info)
//!
//! Shop details may also live in a `billing.toml` next to the working
//! directory; environment variables win.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::convert_amount_to_words;
use interface_cli::config::ShopConfig;
use interface_cli::dto::BillRequest;
use interface_cli::generate_from_request;

#[derive(Parser, Debug)]
#[command(name = "billing-cli", version, about = "Generates formatted shop bills")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a bill from a JSON request and print it
    Generate {
        /// Path to the bill request JSON, or `-` for stdin
        #[arg(long, default_value = "-")]
        input: String,
        /// Write the bill text to this path
        #[arg(long)]
        output: Option<PathBuf>,
        /// Save under the derived `bill_<customer>_<date>.txt` name
        #[arg(long, default_value_t = false)]
        save: bool,
    },
    /// Spell an amount in words (Indian currency format)
    Words {
        /// The amount, e.g. 1234567.89
        amount: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            input,
            output,
            save,
        } => generate(&input, output, save),
        Commands::Words { amount } => {
            // Errors are part of the output contract here: the converter
            // reports them inline as sentinel strings.
            println!("{}", convert_amount_to_words(&amount));
            Ok(())
        }
    }
}

/// Handles the `generate` subcommand end to end.
fn generate(input: &str, output: Option<PathBuf>, save: bool) -> anyhow::Result<()> {
    let shop = load_shop_config();
    let raw = read_input(input)?;

    let request: BillRequest =
        serde_json::from_str(&raw).context("parsing the bill request JSON")?;
    let bill = generate_from_request(&shop, request)?;

    print!("{}", bill.text);

    let target = output.or_else(|| save.then(|| PathBuf::from(&bill.suggested_filename)));
    if let Some(path) = target {
        fs::write(&path, &bill.text)
            .with_context(|| format!("writing bill to {}", path.display()))?;
        tracing::info!(path = %path.display(), total = %bill.total, "bill saved");
    }

    Ok(())
}

/// Loads shop details, falling back to defaults when no configuration is
/// present.
fn load_shop_config() -> ShopConfig {
    ShopConfig::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "no shop configuration found, using defaults");
        ShopConfig::default()
    })
}

/// Reads the request body from a file path or stdin (`-`).
fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("reading bill request from stdin")?;
        Ok(raw)
    } else {
        fs::read_to_string(input).with_context(|| format!("reading bill request from {input}"))
    }
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
