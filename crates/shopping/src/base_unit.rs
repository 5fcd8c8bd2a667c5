use kitchen_retail_shared::MeasurementSystem;
use serde::Serialize;
use strum::{AsRefStr, Display};

use crate::categorization::IngredientCategory;
use crate::density::DensityTable;
use crate::units::{Dimension, G_PER_OZ, ML_PER_CUP, ML_PER_FL_OZ, SystemQuantity, round_to};

/// Canonical unit retail packages are sized in
#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BaseUnit {
    #[strum(serialize = "fl oz")]
    #[serde(rename = "fl oz")]
    FluidOunce,
    #[strum(serialize = "ml")]
    #[serde(rename = "ml")]
    Milliliter,
    #[strum(serialize = "oz")]
    #[serde(rename = "oz")]
    Ounce,
    #[strum(serialize = "g")]
    #[serde(rename = "g")]
    Gram,
}

impl BaseUnit {
    pub fn for_liquid(system: MeasurementSystem) -> Self {
        match system {
            MeasurementSystem::Imperial => BaseUnit::FluidOunce,
            MeasurementSystem::Metric => BaseUnit::Milliliter,
        }
    }

    pub fn for_dry_goods(system: MeasurementSystem) -> Self {
        match system {
            MeasurementSystem::Imperial => BaseUnit::Ounce,
            MeasurementSystem::Metric => BaseUnit::Gram,
        }
    }

    pub fn is_volume(&self) -> bool {
        matches!(self, BaseUnit::FluidOunce | BaseUnit::Milliliter)
    }
}

/// Result of moving a system quantity into its category's base unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BaseQuantity {
    Measured { amount: f64, unit: BaseUnit },
    Count(f64),
    /// No base unit applies; the caller's quantity is passed through
    Unconvertible,
}

/// Base Unit Converter
///
/// - Liquids land in `fl oz` (imperial) or `ml` (metric). Weights given for a liquid
///   are read at the density of water.
/// - Dry goods land in `oz` or `g`. Volumes are turned into cups and weighed with
///   the ingredient's cup weight from the density table. Dry goods the caller
///   measured in teaspoons or tablespoons stay unconvertible.
/// - Count-based items keep their quantity as a bare count.
/// - Everything else is unconvertible.
///
/// Measured amounts are rounded to six decimals.
pub struct BaseUnitConverter<'a> {
    densities: &'a DensityTable,
}

impl<'a> BaseUnitConverter<'a> {
    pub fn new(densities: &'a DensityTable) -> Self {
        Self { densities }
    }

    pub fn to_base_unit(
        &self,
        category: IngredientCategory,
        system: MeasurementSystem,
        ingredient: &str,
        quantity: &SystemQuantity,
    ) -> BaseQuantity {
        match category {
            IngredientCategory::Liquid => Self::liquid(system, quantity),
            IngredientCategory::DryGoods => self.dry_goods(system, ingredient, quantity),
            IngredientCategory::CountBased => BaseQuantity::Count(quantity.quantity),
            IngredientCategory::Other => BaseQuantity::Unconvertible,
        }
    }

    fn liquid(system: MeasurementSystem, quantity: &SystemQuantity) -> BaseQuantity {
        let Some(unit) = quantity.parsed else {
            return BaseQuantity::Unconvertible;
        };

        // 1 g of water occupies 1 ml
        let ml = quantity.quantity * unit.si_factor();
        let base = BaseUnit::for_liquid(system);
        let amount = match base {
            BaseUnit::FluidOunce => ml / ML_PER_FL_OZ,
            _ => ml,
        };

        BaseQuantity::Measured {
            amount: round_to(amount, 6),
            unit: base,
        }
    }

    fn dry_goods(
        &self,
        system: MeasurementSystem,
        ingredient: &str,
        quantity: &SystemQuantity,
    ) -> BaseQuantity {
        let Some(unit) = quantity.parsed else {
            return BaseQuantity::Unconvertible;
        };
        if quantity.source.is_some_and(|source| source.is_spoon()) {
            return BaseQuantity::Unconvertible;
        }

        let base = BaseUnit::for_dry_goods(system);
        let amount = match unit.dimension() {
            Dimension::Weight => {
                let grams = quantity.quantity * unit.si_factor();
                match base {
                    BaseUnit::Ounce => grams / G_PER_OZ,
                    _ => grams,
                }
            }
            Dimension::Volume => {
                let cups = quantity.quantity * (unit.si_factor() / ML_PER_CUP);
                let weight = self.densities.cup_weight(ingredient);
                tracing::debug!(
                    ingredient,
                    cups,
                    per_cup = weight.per_cup(system),
                    "weighing dry goods by volume"
                );
                cups * weight.per_cup(system)
            }
        };

        BaseQuantity::Measured {
            amount: round_to(amount, 6),
            unit: base,
        }
    }
}
