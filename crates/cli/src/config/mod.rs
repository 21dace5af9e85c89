//! CLI configuration

use clap::Parser;
use jiff::{Timestamp, civil::Date, tz::TimeZone};

use crate::{
    commands::Command,
    config::{catalog::CatalogConfig, observability::LoggingConfig, storage::StorageConfig},
};

pub(crate) mod catalog;
pub(crate) mod observability;
pub(crate) mod storage;

/// Storefront command line
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Browse the storefront and manage the cart", long_about = None)]
pub struct CliConfig {
    /// Catalog source settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Cart storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Date new arrivals are measured from (YYYY-MM-DD); defaults to now
    #[arg(long, env = "STOREFRONT_REFERENCE_DATE", global = true)]
    pub reference_date: Option<Date>,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Instant new arrivals are measured from: midnight UTC of the reference
    /// date, or the current time when none is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the date cannot be placed in UTC.
    pub fn reference_time(&self) -> Result<Timestamp, jiff::Error> {
        self.reference_date.map_or_else(
            || Ok(Timestamp::now()),
            |date| Ok(date.to_zoned(TimeZone::UTC)?.timestamp()),
        )
    }
}
