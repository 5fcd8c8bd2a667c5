use kitchen_retail_shared::MeasurementSystem;
use serde::Serialize;

use crate::base_unit::BaseUnit;
use crate::catalog::RetailCatalog;
use crate::categorization::IngredientCategory;

/// Smallest positive amount the matcher works with; a positive request never
/// rounds up to zero packages or items.
pub const MIN_QUANTITY: f64 = 1e-9;

/// Chosen retail package and how many of them to buy
///
/// `count` is a whole number kept as `f64` so very large orders are never
/// truncated to an integer range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PackageSelection {
    pub count: f64,
    pub size: f64,
    pub unit: BaseUnit,
}

impl PackageSelection {
    pub fn total(&self) -> f64 {
        self.count * self.size
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PackageMatch {
    Packaged(PackageSelection),
    /// No catalog entry; buy the base amount rounded up to a whole unit
    Loose { amount: f64, unit: BaseUnit },
}

/// Retail Package Matcher
///
/// Picks the smallest catalog size that covers the need, or the largest size
/// when nothing does, and buys `ceil(need / size)` of it.
pub struct RetailPackageMatcher;

impl RetailPackageMatcher {
    pub fn select(
        category: IngredientCategory,
        ingredient: &str,
        base_amount: f64,
        base_unit: BaseUnit,
        system: MeasurementSystem,
    ) -> PackageMatch {
        let needed = clamp_quantity(base_amount);
        let catalog = RetailCatalog::for_system(system);

        let Some(entry) = catalog.lookup(category, ingredient) else {
            tracing::debug!(ingredient, needed, "no retail package, buying loose");
            return PackageMatch::Loose {
                amount: needed.ceil(),
                unit: base_unit,
            };
        };

        let size = smallest_sufficient_size(entry.sizes, needed);
        let count = (needed / size).ceil().max(1.0);

        tracing::debug!(
            ingredient,
            key = entry.key,
            needed,
            size,
            count,
            "matched retail package"
        );

        PackageMatch::Packaged(PackageSelection {
            count,
            size,
            unit: entry.unit,
        })
    }
}

/// Smallest size >= `needed`, falling back to the largest size.
/// `sizes` must be ascending and non-empty.
pub fn smallest_sufficient_size(sizes: &[f64], needed: f64) -> f64 {
    sizes
        .iter()
        .copied()
        .find(|size| *size >= needed)
        .or_else(|| sizes.last().copied())
        .unwrap_or(needed)
}

/// Whole items to buy for a count-based ingredient
pub fn count_items(quantity: f64) -> f64 {
    clamp_quantity(quantity).ceil()
}

/// Clamp NaN and non-positive amounts up to `MIN_QUANTITY`
pub fn clamp_quantity(quantity: f64) -> f64 {
    if quantity.is_nan() {
        MIN_QUANTITY
    } else {
        quantity.max(MIN_QUANTITY)
    }
}
