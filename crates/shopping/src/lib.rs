pub mod base_unit;
pub mod catalog;
pub mod categorization;
pub mod density;
pub mod description;
pub mod error;
pub mod grocery;
pub mod normalizer;
pub mod packaging;
pub mod units;

// Re-export commonly used types
pub use base_unit::{BaseQuantity, BaseUnit, BaseUnitConverter};
pub use catalog::{IMPERIAL_CATALOG, METRIC_CATALOG, PackageSizes, RetailCatalog};
pub use categorization::{IngredientCategory, IngredientClassifier};
pub use density::{CupWeight, DEFAULT_DENSITY_TOLERANCE, DensityTable};
pub use description::{Description, DescriptionFormatter, NO_PURCHASE_NEEDED, PURCHASE_AS_NEEDED};
pub use error::TableError;
pub use grocery::GroceryItem;
pub use kitchen_retail_shared::MeasurementSystem;
pub use normalizer::{NormalizedQuantity, QuantityNormalizer, normalize_quantity};
pub use packaging::{MIN_QUANTITY, PackageMatch, PackageSelection, RetailPackageMatcher};
pub use units::{MeasurementConverter, SystemQuantity, Unit, format_measurement};
