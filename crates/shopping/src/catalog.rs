use kitchen_retail_shared::MeasurementSystem;

use crate::base_unit::BaseUnit;
use crate::categorization::IngredientCategory;
use crate::error::TableError;

/// Standard retail sizes for one catalog keyword, ascending
#[derive(Debug, PartialEq)]
pub struct PackageSizes {
    pub key: &'static str,
    pub sizes: &'static [f64],
    pub unit: BaseUnit,
}

/// Retail package catalog for one measurement system
///
/// Entries are scoped by category: liquids are sized by volume, dry goods by
/// weight. Keys are matched by substring in declaration order.
#[derive(Debug)]
pub struct RetailCatalog {
    pub system: MeasurementSystem,
    pub liquids: &'static [PackageSizes],
    pub dry_goods: &'static [PackageSizes],
}

macro_rules! packages {
    ($unit:expr; $($key:literal => [$($size:expr),+ $(,)?]),+ $(,)?) => {
        &[$(PackageSizes { key: $key, sizes: &[$($size),+], unit: $unit }),+]
    };
}

pub static IMPERIAL_CATALOG: RetailCatalog = RetailCatalog {
    system: MeasurementSystem::Imperial,
    liquids: packages![BaseUnit::FluidOunce;
        // half pint to gallon
        "milk" => [8.0, 16.0, 32.0, 64.0, 128.0],
        "cream" => [8.0, 16.0, 32.0],
        "juice" => [12.0, 32.0, 64.0],
        "oil" => [8.0, 16.0, 24.0, 32.0],
        "soy sauce" => [5.0, 10.0, 15.0],
        "tamari" => [5.0, 10.0, 15.0],
    ],
    dry_goods: packages![BaseUnit::Ounce;
        // sticks and pounds
        "butter" => [8.0, 16.0],
        // 2 lb and 5 lb bags
        "flour" => [32.0, 80.0],
        "sugar" => [32.0, 64.0, 80.0],
        "rice" => [32.0, 64.0, 80.0, 160.0],
        "pasta" => [16.0, 32.0],
        "cheese" => [8.0, 16.0, 32.0],
        // single cups or tubs
        "yogurt" => [5.3, 32.0],
    ],
};

pub static METRIC_CATALOG: RetailCatalog = RetailCatalog {
    system: MeasurementSystem::Metric,
    liquids: packages![BaseUnit::Milliliter;
        "milk" => [250.0, 500.0, 1000.0, 2000.0],
        "cream" => [200.0, 250.0, 500.0],
        "juice" => [330.0, 500.0, 1000.0, 2000.0],
        "oil" => [250.0, 500.0, 750.0, 1000.0],
        "soy sauce" => [150.0, 250.0, 500.0],
        "tamari" => [150.0, 250.0, 500.0],
    ],
    dry_goods: packages![BaseUnit::Gram;
        "butter" => [250.0, 500.0],
        "flour" => [500.0, 1000.0, 2000.0],
        "sugar" => [500.0, 1000.0, 2000.0],
        "rice" => [500.0, 1000.0, 2000.0, 5000.0],
        "pasta" => [500.0, 1000.0],
        "cheese" => [200.0, 500.0, 1000.0],
        "yogurt" => [150.0, 500.0],
    ],
};

impl RetailCatalog {
    pub fn for_system(system: MeasurementSystem) -> &'static RetailCatalog {
        match system {
            MeasurementSystem::Imperial => &IMPERIAL_CATALOG,
            MeasurementSystem::Metric => &METRIC_CATALOG,
        }
    }

    pub fn section(&self, category: IngredientCategory) -> &'static [PackageSizes] {
        match category {
            IngredientCategory::Liquid => self.liquids,
            IngredientCategory::DryGoods => self.dry_goods,
            IngredientCategory::CountBased | IngredientCategory::Other => &[],
        }
    }

    /// First entry of the category's section whose key occurs in `ingredient`
    pub fn lookup(
        &self,
        category: IngredientCategory,
        ingredient: &str,
    ) -> Option<&'static PackageSizes> {
        self.section(category)
            .iter()
            .find(|entry| ingredient.contains(entry.key))
    }

    fn entries(&self) -> impl Iterator<Item = (IngredientCategory, &'static PackageSizes)> {
        let liquids = self
            .liquids
            .iter()
            .map(|entry| (IngredientCategory::Liquid, entry));
        let dry_goods = self
            .dry_goods
            .iter()
            .map(|entry| (IngredientCategory::DryGoods, entry));
        liquids.chain(dry_goods)
    }

    fn validate_sizes(&self) -> Result<(), TableError> {
        for (_, entry) in self.entries() {
            let positive = entry.sizes.iter().all(|size| *size > 0.0);
            let ascending = entry.sizes.windows(2).all(|pair| pair[0] < pair[1]);
            if entry.sizes.is_empty() || !positive || !ascending {
                return Err(TableError::UnorderedSizes {
                    key: entry.key.to_string(),
                    system: self.system,
                });
            }
        }

        Ok(())
    }

    fn check_counterparts(&self, other: &RetailCatalog) -> Result<(), TableError> {
        for (category, entry) in self.entries() {
            let mirrored = other
                .section(category)
                .iter()
                .any(|candidate| candidate.key == entry.key);
            if !mirrored {
                return Err(TableError::MissingCounterpart {
                    key: entry.key.to_string(),
                    present: self.system,
                    missing: other.system,
                });
            }
        }

        Ok(())
    }

    /// Cross-table consistency check between the two independently authored
    /// catalogs: identical keys per section, sizes positive and strictly ascending
    pub fn validate_pair(
        imperial: &RetailCatalog,
        metric: &RetailCatalog,
    ) -> Result<(), TableError> {
        imperial.validate_sizes()?;
        metric.validate_sizes()?;
        imperial.check_counterparts(metric)?;
        metric.check_counterparts(imperial)?;
        Ok(())
    }
}
