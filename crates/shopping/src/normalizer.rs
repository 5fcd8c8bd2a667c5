use std::sync::LazyLock;

use kitchen_retail_shared::MeasurementSystem;
use serde::Serialize;

use crate::base_unit::{BaseQuantity, BaseUnitConverter};
use crate::categorization::{IngredientCategory, IngredientClassifier};
use crate::density::DensityTable;
use crate::description::{Description, DescriptionFormatter, NO_PURCHASE_NEEDED};
use crate::packaging::{PackageMatch, RetailPackageMatcher, clamp_quantity, count_items};
use crate::units::{MeasurementConverter, SystemQuantity};

/// Retail-purchasable form of a cooking quantity
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuantity {
    pub original_quantity: f64,
    pub original_unit: String,
    /// Packages for liquids and dry goods, whole items for everything else
    pub retail_quantity: f64,
    /// "package", "count", or the unit the quantity was passed through in
    pub retail_unit: String,
    pub retail_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_note: Option<String>,
    pub measurement_system: MeasurementSystem,
}

impl NormalizedQuantity {
    /// Description followed by the conversion note, if any
    pub fn formatted(&self) -> String {
        match &self.conversion_note {
            Some(note) => format!("{} {}", self.retail_description, note),
            None => self.retail_description.clone(),
        }
    }
}

/// Quantity Normalizer
///
/// Turns a cooking quantity ("4 cups milk") into what to buy ("1 quart").
/// Every call is independent and never fails: unrecognised ingredients or
/// units degrade to a pass-through result.
///
/// Pipeline: classify → convert to the requested system → base unit →
/// retail package → description.
#[derive(Debug, Clone, Default)]
pub struct QuantityNormalizer {
    densities: DensityTable,
}

static DEFAULT_NORMALIZER: LazyLock<QuantityNormalizer> =
    LazyLock::new(QuantityNormalizer::default);

/// Normalize with the built-in density table
pub fn normalize_quantity(
    ingredient: &str,
    quantity: f64,
    unit: &str,
    system: MeasurementSystem,
) -> NormalizedQuantity {
    DEFAULT_NORMALIZER.normalize(ingredient, quantity, unit, system)
}

impl QuantityNormalizer {
    pub fn new(densities: DensityTable) -> Self {
        Self { densities }
    }

    pub fn densities(&self) -> &DensityTable {
        &self.densities
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn normalize(
        &self,
        ingredient: &str,
        quantity: f64,
        unit: &str,
        system: MeasurementSystem,
    ) -> NormalizedQuantity {
        let result = Outcome {
            original_quantity: quantity,
            original_unit: unit,
            system,
        };

        if !quantity.is_finite() || quantity <= 0.0 {
            return result.no_purchase(quantity.is_finite());
        }

        let name = ingredient.trim().to_lowercase();
        let category = IngredientClassifier::classify(&name);

        let mut converted = MeasurementConverter::convert(quantity, unit, system);
        converted.quantity = clamp_quantity(converted.quantity);

        // Items are counted on the caller's quantity; only the note uses the conversion
        if category == IngredientCategory::CountBased {
            let count = count_items(quantity);
            let description =
                DescriptionFormatter::describe_count(&name, count, quantity, &converted);
            return result.build(count, "count", description);
        }

        let base = BaseUnitConverter::new(&self.densities).to_base_unit(
            category,
            system,
            &name,
            &converted,
        );

        match base {
            BaseQuantity::Measured { amount, unit: base_unit } => {
                match RetailPackageMatcher::select(category, &name, amount, base_unit, system) {
                    PackageMatch::Packaged(selection) => {
                        let description = DescriptionFormatter::describe(&selection, system);
                        result.build(selection.count, "package", description)
                    }
                    PackageMatch::Loose { amount, unit } => {
                        let description = DescriptionFormatter::describe_loose(amount, unit);
                        result.build(1.0, unit.as_ref(), description)
                    }
                }
            }
            BaseQuantity::Count(count) => {
                let items = count_items(count);
                let description =
                    DescriptionFormatter::describe_count(&name, items, count, &converted);
                result.build(items, "count", description)
            }
            BaseQuantity::Unconvertible => result.pass_through(&converted),
        }
    }
}

/// Caller inputs echoed into every result
struct Outcome<'a> {
    original_quantity: f64,
    original_unit: &'a str,
    system: MeasurementSystem,
}

impl Outcome<'_> {
    fn build(
        &self,
        retail_quantity: f64,
        retail_unit: &str,
        description: Description,
    ) -> NormalizedQuantity {
        NormalizedQuantity {
            original_quantity: self.original_quantity,
            original_unit: self.original_unit.to_string(),
            retail_quantity,
            retail_unit: retail_unit.to_string(),
            retail_description: description.text,
            conversion_note: description.note,
            measurement_system: self.system,
        }
    }

    fn pass_through(&self, converted: &SystemQuantity) -> NormalizedQuantity {
        let label = converted.unit_label();
        let description = DescriptionFormatter::describe_pass_through(converted.quantity, &label);
        self.build(converted.quantity.ceil(), &converted.unit, description)
    }

    fn no_purchase(&self, finite: bool) -> NormalizedQuantity {
        tracing::debug!(quantity = self.original_quantity, "nothing to buy");

        let note = (!finite).then(|| "Quantity could not be interpreted".to_string());
        self.build(
            0.0,
            self.original_unit.trim(),
            Description {
                text: NO_PURCHASE_NEEDED.to_string(),
                note,
            },
        )
    }
}
