//! Command runner for the data-sharing backend client
//!
//! Loads `config.toml` (or `CONFIG_PATH`), runs a single backend operation and
//! prints the resolved JSON body.

use anyhow::{Context, Result, bail};
use datashare_client::core::config::Config;
use datashare_client::core::logging::init_logging;
use datashare_client::{ApiClient, Payload};
use serde_json::Value;
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log_level);

    let client = match ApiClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create client: {}", e);
            std::process::exit(1);
        }
    };

    match run(&client, &args).await {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("Failed to render response: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Dispatch a command to the matching client operation
async fn run(client: &ApiClient, args: &[String]) -> Result<Value> {
    let command = args[0].as_str();
    let rest = &args[1..];
    debug!("Running command {} with {} argument(s)", command, rest.len());

    let value = match command {
        "get-settings" => client.get_settings().await?,
        "update-settings" => client.update_settings(payload_arg(rest, 0)?).await?,
        "reset-settings" => client.reset_settings().await?,
        "get-datasets" => client.get_datasets().await?,
        "create-dataset" => {
            client
                .create_dataset(arg(rest, 0, "dataset-id")?, optional_arg(rest, 1))
                .await?
        }
        "update-dataset" => {
            client
                .update_dataset(arg(rest, 0, "dataset-id")?, optional_arg(rest, 1))
                .await?
        }
        "delete-dataset" => client.delete_dataset(arg(rest, 0, "dataset-id")?).await?,
        "get-accounts" => client.get_accounts(&payload_arg(rest, 0)?).await?,
        "get-account" => client.get_account(arg(rest, 0, "account-id")?).await?,
        "save-account" => client.save_account(payload_arg(rest, 0)?).await?,
        "delete-account" => {
            client
                .delete_account(arg(rest, 0, "account-id")?, payload_arg(rest, 1)?)
                .await?
        }
        "get-policies" => client.get_policies().await?,
        "get-policy" => client.get_policy(arg(rest, 0, "policy-id")?).await?,
        "get-policy-accounts" => {
            client
                .get_policy_accounts(arg(rest, 0, "policy-id")?)
                .await?
        }
        "save-policy" => client.save_policy(payload_arg(rest, 0)?).await?,
        "delete-policy" => {
            client
                .delete_policy(arg(rest, 0, "policy-id")?, payload_arg(rest, 1)?)
                .await?
        }
        "get-views" => client.get_views(&payload_arg(rest, 0)?).await?,
        "get-view" => {
            client
                .get_view(arg(rest, 0, "dataset-id")?, arg(rest, 1, "view-id")?)
                .await?
        }
        "get-tables" => client.get_tables(arg(rest, 0, "dataset-id")?).await?,
        "get-table-columns" => {
            client
                .get_table_columns(arg(rest, 0, "dataset-id")?, arg(rest, 1, "table-id")?)
                .await?
        }
        "validate-view" => client.validate_view(payload_arg(rest, 0)?).await?,
        "save-view" => client.save_view(payload_arg(rest, 0)?).await?,
        "delete-view" => {
            let row_id = arg(rest, 2, "row-id")?;
            client
                .delete_view(
                    arg(rest, 0, "dataset-id")?,
                    arg(rest, 1, "view-id")?,
                    serde_json::from_str::<Value>(row_id)
                        .unwrap_or_else(|_| Value::String(row_id.to_string())),
                )
                .await?
        }
        "get-ingestion" => {
            client
                .get_ingestion(
                    arg(rest, 0, "bucket-name")?,
                    arg(rest, 1, "dataset-id")?,
                    arg(rest, 2, "table-id")?,
                )
                .await?
        }
        "save-ingestion" => client.save_ingestion(payload_arg(rest, 0)?).await?,
        "init-schema" => client.init_schema().await?,
        "sync-resources" => client.sync_resources(arg(rest, 0, "type")?).await?,
        other => bail!("Unknown command: {} (see --help)", other),
    };

    Ok(value)
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("Missing argument <{}>", name))
}

fn optional_arg(args: &[String], index: usize) -> Option<&str> {
    args.get(index).map(String::as_str)
}

/// Parse a JSON object argument; a missing argument is an empty payload
fn payload_arg(args: &[String], index: usize) -> Result<Payload> {
    let Some(raw) = args.get(index) else {
        return Ok(Payload::new());
    };
    match serde_json::from_str::<Value>(raw).context("Payload must be valid JSON")? {
        Value::Object(map) => Ok(map),
        _ => bail!("Payload must be a JSON object"),
    }
}

/// Print help message
fn print_help() {
    println!("Data-sharing API client v0.1.0");
    println!();
    println!("Usage: datashare-client <COMMAND> [ARGS...]");
    println!();
    println!("Settings (served locally):");
    println!("  get-settings | update-settings <json> | reset-settings");
    println!();
    println!("Datasets:");
    println!("  get-datasets");
    println!("  create-dataset <dataset-id> [description]");
    println!("  update-dataset <dataset-id> [description]");
    println!("  delete-dataset <dataset-id>");
    println!("  get-tables <dataset-id>");
    println!("  get-table-columns <dataset-id> <table-id>");
    println!();
    println!("Accounts and policies:");
    println!("  get-accounts [json] | get-account <account-id>");
    println!("  save-account <json> | delete-account <account-id> [json]");
    println!("  get-policies | get-policy <policy-id> | get-policy-accounts <policy-id>");
    println!("  save-policy <json> | delete-policy <policy-id> [json]");
    println!();
    println!("Views:");
    println!("  get-views [json] | get-view <dataset-id> <view-id>");
    println!("  validate-view <json> | save-view <json>");
    println!("  delete-view <dataset-id> <view-id> <row-id>");
    println!();
    println!("Ingestion and admin:");
    println!("  get-ingestion <bucket-name> <dataset-id> <table-id>");
    println!("  save-ingestion <json>");
    println!("  init-schema | sync-resources <type>");
    println!();
    println!("Environment variables:");
    println!("  CONFIG_PATH - Path to the TOML configuration (default: config.toml)");
    println!("  RUST_LOG    - Overrides [logging] log_level");
}
