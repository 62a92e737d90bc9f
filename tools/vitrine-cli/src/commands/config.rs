//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[storefront]");
    ctx.output
        .kv("page_size", &ctx.config.storefront.page_size.to_string());
    ctx.output.kv(
        "price_ceiling",
        &ctx.config.storefront.price_ceiling.to_string(),
    );
    ctx.output.kv("catalog_url", &ctx.config.storefront.catalog_url);

    ctx.output.info("");
    ctx.output.info("[catalog]");
    if let Some(ref path) = ctx.config.catalog.path {
        ctx.output.kv("path", path);
    }
    if let Some(ref url) = ctx.config.catalog.url {
        ctx.output.kv("url", url);
    }
    ctx.output.kv("effective source", &effective_source(&ctx.config));

    Ok(())
}

fn effective_source(config: &CliConfig) -> String {
    match config.catalog.path {
        Some(ref path) => format!("file {}", path),
        None => format!("endpoint {}", config.catalog_url()),
    }
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(ref config_path) = ctx.config_path else {
        bail!("No config file found. Run `vitrine config init` to create one.");
    };

    let mut config = CliConfig::load(config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path: PathBuf = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            ctx.output.info("Keeping existing config");
            return Ok(());
        }
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if let Err(e) = ctx.config.storefront.validate() {
        errors.push(e.to_string());
    }

    let url = ctx.config.catalog_url();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        errors.push(format!("catalog url '{}' must be http or https", url));
    }

    if let Some(ref path) = ctx.config.catalog.path {
        if !ctx.resolve_path(path).exists() {
            warnings.push(format!("catalog.path '{}' does not exist", path));
        }
    }

    if ctx.config.storefront.page_size > 100 {
        warnings.push(format!(
            "storefront.page_size {} is unusually large",
            ctx.config.storefront.page_size
        ));
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["storefront", "page_size"] => Ok(config.storefront.page_size.to_string()),
        ["storefront", "price_ceiling"] => Ok(config.storefront.price_ceiling.to_string()),
        ["storefront", "catalog_url"] => Ok(config.storefront.catalog_url.clone()),
        ["catalog", "path"] => Ok(config.catalog.path.clone().unwrap_or_default()),
        ["catalog", "url"] => Ok(config.catalog.url.clone().unwrap_or_default()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["storefront", "page_size"] => config.storefront.page_size = value.parse()?,
        ["storefront", "price_ceiling"] => config.storefront.price_ceiling = value.parse()?,
        ["storefront", "catalog_url"] => config.storefront.catalog_url = value.to_string(),
        ["catalog", "path"] => config.catalog.path = non_empty(value),
        ["catalog", "url"] => config.catalog.url = non_empty(value),
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    config.storefront.validate()?;
    Ok(())
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
