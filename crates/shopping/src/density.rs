use kitchen_retail_shared::MeasurementSystem;
use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::units::G_PER_OZ;

/// Weight of one US cup of an ingredient, authored in both systems
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CupWeight {
    pub grams: f64,
    pub ounces: f64,
}

impl CupWeight {
    pub const fn new(grams: f64, ounces: f64) -> Self {
        Self { grams, ounces }
    }

    /// Weight per cup in the base weight unit of `system` (g or oz)
    pub fn per_cup(&self, system: MeasurementSystem) -> f64 {
        match system {
            MeasurementSystem::Metric => self.grams,
            MeasurementSystem::Imperial => self.ounces,
        }
    }

    /// Relative disagreement between the gram and ounce figures
    pub fn drift(&self) -> f64 {
        let ounces_in_grams = self.ounces * G_PER_OZ;
        (self.grams - ounces_in_grams).abs() / self.grams.max(ounces_in_grams)
    }
}

/// Volume-to-weight approximations for dry goods measured in cups
///
/// Lookup order is flour, sugar, rice, then the generic fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityTable {
    pub flour: CupWeight,
    pub sugar: CupWeight,
    pub rice: CupWeight,
    pub fallback: CupWeight,
}

impl Default for DensityTable {
    fn default() -> Self {
        Self {
            flour: CupWeight::new(125.0, 4.5),
            sugar: CupWeight::new(200.0, 7.0),
            rice: CupWeight::new(185.0, 6.5),
            fallback: CupWeight::new(140.0, 5.0),
        }
    }
}

pub const DEFAULT_DENSITY_TOLERANCE: f64 = 0.05;

impl DensityTable {
    pub fn cup_weight(&self, ingredient: &str) -> &CupWeight {
        if ingredient.contains("flour") {
            &self.flour
        } else if ingredient.contains("sugar") {
            &self.sugar
        } else if ingredient.contains("rice") {
            &self.rice
        } else {
            &self.fallback
        }
    }

    fn entries(&self) -> [(&'static str, &CupWeight); 4] {
        [
            ("flour", &self.flour),
            ("sugar", &self.sugar),
            ("rice", &self.rice),
            ("fallback", &self.fallback),
        ]
    }

    /// Reject non-positive weights and gram/ounce pairs that disagree by more
    /// than `tolerance` (a fraction, 0.05 = 5%)
    pub fn validate(&self, tolerance: f64) -> Result<(), TableError> {
        for (ingredient, weight) in self.entries() {
            if !(weight.grams > 0.0 && weight.ounces > 0.0) {
                return Err(TableError::NonPositiveDensity {
                    ingredient: ingredient.to_string(),
                    grams: weight.grams,
                    ounces: weight.ounces,
                });
            }

            let drift = weight.drift();
            if drift > tolerance {
                return Err(TableError::DensityDrift {
                    ingredient: ingredient.to_string(),
                    grams: weight.grams,
                    ounces: weight.ounces,
                    drift,
                    tolerance,
                });
            }
        }

        Ok(())
    }
}
