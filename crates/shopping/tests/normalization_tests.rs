use kitchen_retail_shopping::{
    GroceryItem, IngredientCategory, IngredientClassifier, MeasurementSystem, NO_PURCHASE_NEEDED,
    PURCHASE_AS_NEEDED, normalize_quantity,
};

#[test]
fn test_milk_four_cups_imperial() {
    let result = normalize_quantity("milk", 4.0, "cup", MeasurementSystem::Imperial);

    assert_eq!(result.retail_quantity, 1.0);
    assert_eq!(result.retail_unit, "package");
    assert_eq!(result.retail_description, "1 quart");
    assert_eq!(result.conversion_note, None);
}

#[test]
fn test_milk_four_cups_metric() {
    let result = normalize_quantity("milk", 4.0, "cup", MeasurementSystem::Metric);

    assert_eq!(result.retail_quantity, 1.0);
    assert_eq!(result.retail_description, "1 × 1L container");
    assert_eq!(result.conversion_note, None);
}

#[test]
fn test_flour_ten_cups_imperial() {
    let result = normalize_quantity("flour", 10.0, "cup", MeasurementSystem::Imperial);

    assert_eq!(result.retail_quantity, 1.0);
    assert_eq!(result.retail_description, "1 × 5 lb package");
    assert_eq!(result.conversion_note, None);
}

#[test]
fn test_apples_round_up() {
    for system in [MeasurementSystem::Imperial, MeasurementSystem::Metric] {
        let result = normalize_quantity("apple", 2.5, "count", system);

        assert_eq!(result.retail_quantity, 3.0);
        assert_eq!(result.retail_unit, "count");
        assert_eq!(result.retail_description, "3 apple");
        assert_eq!(result.conversion_note, None);
    }
}

#[test]
fn test_half_lemon_buys_one() {
    let result = normalize_quantity("lemon", 0.5, "count", MeasurementSystem::Imperial);

    assert_eq!(result.retail_quantity, 1.0);
    assert_eq!(result.retail_description, "1 lemon");
    assert_eq!(
        result.conversion_note.as_deref(),
        Some("(need only 0.5 count)")
    );
}

#[test]
fn test_spice_blend_in_teaspoons_passes_through() {
    let result = normalize_quantity("exotic spice blend", 3.0, "tsp", MeasurementSystem::Imperial);

    assert_eq!(result.retail_description, "3 tsp");
    assert_eq!(result.retail_quantity, 3.0);
    assert_eq!(result.retail_unit, "tsp");
    assert_eq!(result.conversion_note.as_deref(), Some(PURCHASE_AS_NEEDED));
}

#[test]
fn test_spice_blend_in_teaspoons_metric() {
    let result = normalize_quantity("exotic spice blend", 3.0, "tsp", MeasurementSystem::Metric);

    // 3 tsp = 14.79 ml
    assert_eq!(result.retail_description, "14.79 ml");
    assert_eq!(result.retail_quantity, 15.0);
    assert_eq!(result.retail_unit, "ml");
    assert_eq!(result.conversion_note.as_deref(), Some(PURCHASE_AS_NEEDED));
}

#[test]
fn test_unknown_ingredient_passes_through_in_cups() {
    let result = normalize_quantity("tofu", 2.0, "cups", MeasurementSystem::Imperial);

    assert_eq!(result.retail_description, "2 cups");
    assert_eq!(result.retail_unit, "cup");
    assert_eq!(result.conversion_note.as_deref(), Some(PURCHASE_AS_NEEDED));
}

#[test]
fn test_unknown_unit_passes_through() {
    let result = normalize_quantity("milk", 2.0, "bottle", MeasurementSystem::Metric);

    assert_eq!(result.retail_description, "2 bottle");
    assert_eq!(result.retail_quantity, 2.0);
    assert_eq!(result.retail_unit, "bottle");
    assert_eq!(result.conversion_note.as_deref(), Some(PURCHASE_AS_NEEDED));
}

#[test]
fn test_large_milk_order_buys_several_gallons() {
    let result = normalize_quantity("milk", 300.0, "fl oz", MeasurementSystem::Imperial);

    assert_eq!(result.retail_quantity, 3.0);
    assert_eq!(result.retail_description, "3 gallons");
    assert_eq!(
        result.conversion_note.as_deref(),
        Some("Total: 384.0 fl oz")
    );
}

#[test]
fn test_metric_flour_beyond_largest_bag() {
    let result = normalize_quantity("flour", 3.0, "kg", MeasurementSystem::Metric);

    assert_eq!(result.retail_quantity, 2.0);
    assert_eq!(result.retail_description, "2 × 2kg packages");
    assert_eq!(result.conversion_note.as_deref(), Some("Total: 4000.0 g"));
}

#[test]
fn test_uncatalogued_liquid_is_bought_loose() {
    let result = normalize_quantity("vegetable broth", 3.0, "cups", MeasurementSystem::Imperial);

    assert_eq!(result.retail_quantity, 1.0);
    assert_eq!(result.retail_unit, "fl oz");
    assert_eq!(result.retail_description, "24 fl oz");
    assert_eq!(result.conversion_note, None);
}

#[test]
fn test_lemon_juice_is_a_liquid() {
    assert_eq!(
        IngredientClassifier::classify("Lemon Juice"),
        IngredientCategory::Liquid
    );

    let result = normalize_quantity("Lemon Juice", 2.0, "cups", MeasurementSystem::Imperial);
    // 16 fl oz of the "juice" catalog: smallest sufficient size is 32
    assert_eq!(result.retail_description, "1 quart");
}

#[test]
fn test_no_purchase_needed() {
    let result = normalize_quantity("flour", 0.0, "cup", MeasurementSystem::Metric);

    assert_eq!(result.retail_quantity, 0.0);
    assert_eq!(result.retail_unit, "cup");
    assert_eq!(result.retail_description, NO_PURCHASE_NEEDED);

    let result = normalize_quantity("apple", f64::INFINITY, "count", MeasurementSystem::Metric);
    assert_eq!(result.retail_quantity, 0.0);
    assert!(result.conversion_note.is_some());
}

#[test]
fn test_batch_into_grocery_payload() {
    let requests = [
        ("milk", 4.0, "cup"),
        ("flour", 10.0, "cup"),
        ("apple", 2.5, "count"),
    ];

    let items: Vec<GroceryItem> = requests
        .iter()
        .map(|(ingredient, quantity, unit)| {
            let normalized =
                normalize_quantity(ingredient, *quantity, unit, MeasurementSystem::Imperial);
            GroceryItem::from_normalized(&normalized, ingredient)
        })
        .collect();

    assert_eq!(items[0].search_query, "milk 1 quart");
    assert_eq!(items[1].search_query, "flour 1 × 5 lb package");
    assert_eq!(items[2].quantity, 3.0);
    assert_eq!(items[2].original_measurement, "2.5 count");
}
