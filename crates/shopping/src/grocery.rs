use serde::{Deserialize, Serialize};

use crate::normalizer::NormalizedQuantity;

/// Payload handed to grocery-service integrations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    pub search_query: String,
    pub original_measurement: String,
}

impl GroceryItem {
    pub fn from_normalized(normalized: &NormalizedQuantity, ingredient: &str) -> Self {
        let product_name = ingredient.trim().to_string();
        let original_measurement = format!(
            "{} {}",
            normalized.original_quantity,
            normalized.original_unit.trim()
        );

        Self {
            search_query: format!("{} {}", product_name, normalized.retail_description),
            product_name,
            quantity: normalized.retail_quantity,
            unit: normalized.retail_unit.clone(),
            original_measurement: original_measurement.trim_end().to_string(),
        }
    }
}

impl From<(&str, &NormalizedQuantity)> for GroceryItem {
    fn from((ingredient, normalized): (&str, &NormalizedQuantity)) -> Self {
        Self::from_normalized(normalized, ingredient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize_quantity;
    use kitchen_retail_shared::MeasurementSystem;

    #[test]
    fn test_grocery_item_from_packaged_liquid() {
        let normalized = normalize_quantity("milk", 4.0, "cup", MeasurementSystem::Imperial);
        let item = GroceryItem::from_normalized(&normalized, "milk");

        assert_eq!(item.product_name, "milk");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit, "package");
        assert_eq!(item.search_query, "milk 1 quart");
        assert_eq!(item.original_measurement, "4 cup");
    }

    #[test]
    fn test_grocery_item_keeps_caller_spelling() {
        let normalized = normalize_quantity(" Lemon ", 0.5, "", MeasurementSystem::Metric);
        let item = GroceryItem::from(("Lemon", &normalized));

        assert_eq!(item.product_name, "Lemon");
        assert_eq!(item.unit, "count");
        assert_eq!(item.search_query, "Lemon 1 lemon");
        assert_eq!(item.original_measurement, "0.5");
    }

    #[test]
    fn test_original_measurement_is_not_rounded() {
        let normalized = normalize_quantity("milk", 0.333, "cup", MeasurementSystem::Imperial);
        let item = GroceryItem::from_normalized(&normalized, "milk");

        assert_eq!(item.original_measurement, "0.333 cup");
    }

    #[test]
    fn test_grocery_item_serializes_camel_case() {
        let normalized = normalize_quantity("flour", 10.0, "cups", MeasurementSystem::Imperial);
        let item = GroceryItem::from_normalized(&normalized, "flour");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["productName"], "flour");
        assert_eq!(json["searchQuery"], "flour 1 × 5 lb package");
        assert_eq!(json["originalMeasurement"], "10 cups");
    }
}
