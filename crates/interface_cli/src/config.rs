//! Shop configuration

use serde::Deserialize;

/// Shop identity printed in every bill header
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShopConfig {
    /// Shop name
    pub name: String,
    /// Shop address
    pub address: String,
    /// Shop phone number
    pub phone: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: "MY SHOP".to_string(),
            address: "Shop Address".to_string(),
            phone: "0000000000".to_string(),
        }
    }
}

impl ShopConfig {
    /// Loads configuration from an optional `billing.toml` file and
    /// `BILL_`-prefixed environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("billing").required(false))
            .add_source(config::Environment::with_prefix("BILL"))
            .build()?
            .try_deserialize()
    }
}
