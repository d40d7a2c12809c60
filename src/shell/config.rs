use crate::modules::product_showcase::core::dataset::DEFAULT_SEED;
use std::env;
use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub showcase_seed: u64,
}

impl Config {
    /// Reads `APP_ADDR` and `SHOWCASE_SEED`, after loading a `.env` file if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = lookup("APP_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("APP_ADDR is not a socket address: {e}"))?;
        let showcase_seed = match lookup("SHOWCASE_SEED") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| anyhow::anyhow!("SHOWCASE_SEED is not an unsigned integer: {e}"))?,
            None => DEFAULT_SEED,
        };
        Ok(Self {
            addr,
            showcase_seed,
        })
    }
}
