//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod facets;
pub mod shelf;

use clap::{Args, Subcommand};
use vitrine_commerce::money::Money;
use vitrine_commerce::search::SortOrder;
use vitrine_commerce::storefront::StorefrontCommand;

/// Facet and sort selections shared by the catalog commands.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Colors to keep (repeat or comma-separate).
    #[arg(long = "color", value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Sizes to keep (repeat or comma-separate).
    #[arg(long = "size", value_delimiter = ',')]
    pub sizes: Vec<String>,

    /// Price bands such as `0-50` (repeat or comma-separate).
    #[arg(long = "price", value_delimiter = ',', conflicts_with_all = ["min", "max"])]
    pub prices: Vec<String>,

    /// Minimum price in reais.
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum price in reais.
    #[arg(long)]
    pub max: Option<f64>,

    /// Sort order: newest, price_asc, price_desc or a dropdown label.
    #[arg(short, long)]
    pub sort: Option<String>,
}

impl FilterArgs {
    /// Commands that apply these selections, in dispatch order.
    pub fn commands(&self, price_ceiling: Money) -> anyhow::Result<Vec<StorefrontCommand>> {
        let mut commands = Vec::new();

        if !self.colors.is_empty() {
            commands.push(StorefrontCommand::SetColors(self.colors.clone()));
        }
        if !self.sizes.is_empty() {
            commands.push(StorefrontCommand::SetSizes(self.sizes.clone()));
        }
        if !self.prices.is_empty() {
            commands.push(StorefrontCommand::SetPriceBands(self.prices.clone()));
        }
        if self.min.is_some() || self.max.is_some() {
            let min = Money::from_decimal(self.min.unwrap_or(0.0))?;
            let max = match self.max {
                Some(max) => Money::from_decimal(max)?,
                None => price_ceiling,
            };
            commands.push(StorefrontCommand::SetPriceRange { min, max });
        }
        if let Some(ref sort) = self.sort {
            commands.push(StorefrontCommand::SetSortOrder(SortOrder::parse(sort)));
        }

        Ok(commands)
    }
}

/// Arguments for the shelf command.
#[derive(Args)]
pub struct ShelfArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Press "show more" once after filtering.
    #[arg(long)]
    pub more: bool,

    /// Read the catalog from this JSON file.
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Product ids to add (repeat or comma-separate).
    #[arg(short, long, value_delimiter = ',')]
    pub add: Vec<String>,

    /// Product ids to remove after adding (repeat or comma-separate).
    #[arg(short, long, value_delimiter = ',')]
    pub remove: Vec<String>,

    /// Read the catalog from this JSON file.
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for the facets command.
#[derive(Args)]
pub struct FacetsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Read the catalog from this JSON file.
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
