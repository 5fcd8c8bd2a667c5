use kitchen_retail_shared::MeasurementSystem;
use thiserror::Error;

/// Inconsistency found while checking the lookup tables
#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    #[error("Package catalog entry '{key}' exists for {present} but not for {missing}")]
    MissingCounterpart {
        key: String,
        present: MeasurementSystem,
        missing: MeasurementSystem,
    },

    #[error("Package sizes for '{key}' ({system}) must be positive and strictly ascending")]
    UnorderedSizes {
        key: String,
        system: MeasurementSystem,
    },

    #[error("Cup weight for {ingredient} must be positive (got {grams} g / {ounces} oz)")]
    NonPositiveDensity {
        ingredient: String,
        grams: f64,
        ounces: f64,
    },

    #[error(
        "Cup weight for {ingredient} drifts {drift:.3}: {grams} g vs {ounces} oz (max {tolerance})"
    )]
    DensityDrift {
        ingredient: String,
        grams: f64,
        ounces: f64,
        drift: f64,
        tolerance: f64,
    },
}
