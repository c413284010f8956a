//! CLI error handling

use thiserror::Error;

use domain_billing::BillingError;

/// Errors surfaced by the CLI interface layer
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid bill request: {0}")]
    Request(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Billing error: {0}")]
    Billing(#[from] BillingError),

    #[error("Please add at least one product before generating the bill")]
    EmptyBill,
}
