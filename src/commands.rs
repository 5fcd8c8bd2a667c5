use std::io::Read;

use kitchen_retail_shopping::{
    GroceryItem, IMPERIAL_CATALOG, METRIC_CATALOG, MeasurementSystem, NormalizedQuantity,
    QuantityNormalizer, RetailCatalog,
};
use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::config::Config;
use crate::error::AppError;

/// One line of a batch request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchRequest {
    pub ingredient: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizeOutput {
    Normalized(NormalizedQuantity),
    Grocery(GroceryItem),
}

impl NormalizeOutput {
    fn new(normalized: NormalizedQuantity, ingredient: &str, grocery: bool) -> Self {
        if grocery {
            NormalizeOutput::Grocery(GroceryItem::from_normalized(&normalized, ingredient))
        } else {
            NormalizeOutput::Normalized(normalized)
        }
    }
}

/// Normalizer built from the configured density table
pub fn build_normalizer(config: &Config) -> QuantityNormalizer {
    QuantityNormalizer::new(config.normalizer.densities.clone())
}

pub fn normalize_one(
    normalizer: &QuantityNormalizer,
    request: &BatchRequest,
    system: MeasurementSystem,
    grocery: bool,
) -> NormalizeOutput {
    let normalized = normalizer.normalize(
        &request.ingredient,
        request.quantity,
        &request.unit,
        system,
    );

    NormalizeOutput::new(normalized, &request.ingredient, grocery)
}

/// Parse a JSON array of requests
pub fn read_batch<R: Read>(reader: R) -> Result<Vec<BatchRequest>, AppError> {
    Ok(serde_json::from_reader(reader)?)
}

#[tracing::instrument(skip(normalizer, requests), fields(count = requests.len()))]
pub fn normalize_batch(
    normalizer: &QuantityNormalizer,
    requests: &[BatchRequest],
    system: MeasurementSystem,
    grocery: bool,
) -> Vec<NormalizeOutput> {
    let outputs: Vec<NormalizeOutput> = requests
        .iter()
        .map(|request| normalize_one(normalizer, request, system, grocery))
        .collect();

    tracing::info!(count = outputs.len(), %system, "Batch normalized");

    outputs
}

/// Catalog pair check followed by the density check
pub fn check_tables(config: &Config) -> Result<(), AppError> {
    RetailCatalog::validate_pair(&IMPERIAL_CATALOG, &METRIC_CATALOG)?;
    config
        .normalizer
        .densities
        .validate(config.normalizer.density_tolerance)?;

    tracing::info!(
        tolerance = config.normalizer.density_tolerance,
        "Lookup tables are consistent"
    );

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemSummary {
    pub name: MeasurementSystem,
    pub display_name: &'static str,
    pub volume_units: &'static [&'static str],
    pub weight_units: &'static [&'static str],
}

pub fn systems() -> Vec<SystemSummary> {
    MeasurementSystem::VARIANTS
        .iter()
        .map(|system| {
            let units = system.common_units();
            SystemSummary {
                name: *system,
                display_name: system.display_name(),
                volume_units: units.volume,
                weight_units: units.weight,
            }
        })
        .collect()
}
