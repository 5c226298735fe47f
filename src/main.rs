//! adaptive-assessment - item bank sanity check.
//!
//! Loads the configured item bank, prints catalog diagnostics and a preview
//! of the default baseline tier as pretty JSON.

use std::process::ExitCode;
use std::sync::Arc;

use adaptive_assessment::adapters::catalog::{load_item_bank, InMemoryItemCatalog};
use adaptive_assessment::application::{
    CatalogDiagnosticsHandler, SelectBaselineHandler, SelectBaselineQuery,
};
use adaptive_assessment::config::AppConfig;
use adaptive_assessment::error::{AppError, AppResult};
use adaptive_assessment::ports::ItemCatalog;
use adaptive_assessment::telemetry;
use serde_json::json;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "adaptive-assessment failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> AppResult<()> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config.logging)?;

    let path = config
        .catalog
        .item_bank_path
        .as_deref()
        .ok_or(AppError::MissingItemBank)?;
    let items = load_item_bank(path).await?;
    let bank = InMemoryItemCatalog::with_items(items)?;
    tracing::info!(path = %path.display(), items = bank.len().await, "item bank loaded");
    let catalog: Arc<dyn ItemCatalog> = Arc::new(bank);

    let diagnostics = CatalogDiagnosticsHandler::new(catalog.clone()).handle().await?;

    let tier = config.selection.default_tier.clone();
    let baseline = SelectBaselineHandler::new(catalog, config.selection.policy())
        .with_shuffle_seed(config.selection.shuffle_seed)
        .handle(SelectBaselineQuery { tier: tier.clone() })
        .await?;

    if baseline.report.is_short() {
        tracing::warn!(
            tier = %tier,
            shortfall = baseline.report.shortfall(),
            "baseline preview is short"
        );
    }

    let output = json!({
        "diagnostics": diagnostics,
        "baseline": {
            "tier": tier,
            "item_ids": baseline.items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            "report": baseline.report,
        },
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
