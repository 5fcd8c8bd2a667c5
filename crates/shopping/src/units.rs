use kitchen_retail_shared::MeasurementSystem;

/// US fluid ounce in milliliters. Every imperial volume factor is a multiple of it.
pub const ML_PER_FL_OZ: f64 = 29.573_529_562_5;
pub const ML_PER_CUP: f64 = 8.0 * ML_PER_FL_OZ;
/// Avoirdupois ounce in grams. Every imperial weight factor is a multiple of it.
pub const G_PER_OZ: f64 = 28.349_523_125;
pub const G_PER_LB: f64 = 16.0 * G_PER_OZ;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Volume,
    Weight,
}

/// Cooking units understood by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Teaspoon,
    Tablespoon,
    FluidOunce,
    Cup,
    Pint,
    Quart,
    Gallon,
    Milliliter,
    Liter,
    Ounce,
    Pound,
    Gram,
    Kilogram,
}

impl Unit {
    /// Parse a free-text unit (case-insensitive, singular, plural or abbreviated)
    pub fn parse(unit: &str) -> Option<Unit> {
        let normalized = unit.trim().to_lowercase();

        let parsed = match normalized.as_str() {
            "tsp" | "tsps" | "teaspoon" | "teaspoons" => Unit::Teaspoon,
            "tbsp" | "tbsps" | "tablespoon" | "tablespoons" => Unit::Tablespoon,
            "fl oz" | "fl. oz" | "fl. oz." | "floz" | "fluid ounce" | "fluid ounces" => {
                Unit::FluidOunce
            }
            "cup" | "cups" => Unit::Cup,
            "pint" | "pints" | "pt" => Unit::Pint,
            "quart" | "quarts" | "qt" => Unit::Quart,
            "gallon" | "gallons" | "gal" => Unit::Gallon,
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Unit::Milliliter
            }
            "l" | "liter" | "liters" | "litre" | "litres" => Unit::Liter,
            "oz" | "ounce" | "ounces" => Unit::Ounce,
            "lb" | "lbs" | "pound" | "pounds" => Unit::Pound,
            "g" | "gram" | "grams" => Unit::Gram,
            "kg" | "kilogram" | "kilograms" => Unit::Kilogram,
            _ => return None,
        };

        Some(parsed)
    }

    pub fn dimension(self) -> Dimension {
        match self {
            Unit::Teaspoon
            | Unit::Tablespoon
            | Unit::FluidOunce
            | Unit::Cup
            | Unit::Pint
            | Unit::Quart
            | Unit::Gallon
            | Unit::Milliliter
            | Unit::Liter => Dimension::Volume,
            Unit::Ounce | Unit::Pound | Unit::Gram | Unit::Kilogram => Dimension::Weight,
        }
    }

    pub fn system(self) -> MeasurementSystem {
        match self {
            Unit::Milliliter | Unit::Liter | Unit::Gram | Unit::Kilogram => {
                MeasurementSystem::Metric
            }
            _ => MeasurementSystem::Imperial,
        }
    }

    /// Canonical SI factor: milliliters for volumes, grams for weights.
    ///
    /// This is the only conversion table; imperial base units are derived from it.
    pub fn si_factor(self) -> f64 {
        match self {
            Unit::Teaspoon => ML_PER_FL_OZ / 6.0,
            Unit::Tablespoon => ML_PER_FL_OZ / 2.0,
            Unit::FluidOunce => ML_PER_FL_OZ,
            Unit::Cup => ML_PER_CUP,
            Unit::Pint => 16.0 * ML_PER_FL_OZ,
            Unit::Quart => 32.0 * ML_PER_FL_OZ,
            Unit::Gallon => 128.0 * ML_PER_FL_OZ,
            Unit::Milliliter => 1.0,
            Unit::Liter => 1000.0,
            Unit::Ounce => G_PER_OZ,
            Unit::Pound => G_PER_LB,
            Unit::Gram => 1.0,
            Unit::Kilogram => 1000.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Teaspoon => "tsp",
            Unit::Tablespoon => "tbsp",
            Unit::FluidOunce => "fl oz",
            Unit::Cup => "cup",
            Unit::Pint => "pint",
            Unit::Quart => "quart",
            Unit::Gallon => "gallon",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Ounce => "oz",
            Unit::Pound => "lb",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
        }
    }

    /// Symbol to print next to `amount`; spelled-out units take a plural
    pub fn label(self, amount: f64) -> String {
        match self {
            Unit::Cup | Unit::Pint | Unit::Quart | Unit::Gallon if amount > 1.0 => {
                format!("{}s", self.symbol())
            }
            _ => self.symbol().to_string(),
        }
    }

    pub fn is_spoon(self) -> bool {
        matches!(self, Unit::Teaspoon | Unit::Tablespoon)
    }

    /// Unit a cross-system conversion lands in
    pub fn canonical_for(dimension: Dimension, system: MeasurementSystem) -> Unit {
        match (dimension, system) {
            (Dimension::Volume, MeasurementSystem::Imperial) => Unit::FluidOunce,
            (Dimension::Volume, MeasurementSystem::Metric) => Unit::Milliliter,
            (Dimension::Weight, MeasurementSystem::Imperial) => Unit::Ounce,
            (Dimension::Weight, MeasurementSystem::Metric) => Unit::Gram,
        }
    }
}

/// Quantity expressed in the cooking units of the requested system
#[derive(Debug, Clone, PartialEq)]
pub struct SystemQuantity {
    pub quantity: f64,
    pub unit: String,
    /// Unit of `quantity`, when recognised
    pub parsed: Option<Unit>,
    /// Unit the caller supplied, when recognised
    pub source: Option<Unit>,
}

impl SystemQuantity {
    /// Unit text with plural form applied for the current quantity
    pub fn unit_label(&self) -> String {
        match self.parsed {
            Some(unit) => unit.label(self.quantity),
            None => self.unit.clone(),
        }
    }
}

/// Measurement System Converter
///
/// Moves a `(quantity, unit)` pair into the cooking units of the target system.
///
/// - Unknown units pass through untouched.
/// - Units already in the target system keep their quantity.
/// - Units from the other system convert through the SI table into a single unit
///   per dimension (`fl oz`, `oz`, `ml`, `g`), rounded to two decimals, so a
///   converted quantity always scales linearly with the input.
pub struct MeasurementConverter;

impl MeasurementConverter {
    pub fn convert(quantity: f64, unit: &str, target: MeasurementSystem) -> SystemQuantity {
        let Some(source) = Unit::parse(unit) else {
            return SystemQuantity {
                quantity,
                unit: unit.trim().to_string(),
                parsed: None,
                source: None,
            };
        };

        if source.system() == target {
            return SystemQuantity {
                quantity,
                unit: source.symbol().to_string(),
                parsed: Some(source),
                source: Some(source),
            };
        }

        let destination = Unit::canonical_for(source.dimension(), target);
        let converted = quantity * source.si_factor() / destination.si_factor();

        tracing::debug!(
            from = source.symbol(),
            to = destination.symbol(),
            quantity,
            converted,
            "converted across measurement systems"
        );

        SystemQuantity {
            quantity: round_to(converted, 2),
            unit: destination.symbol().to_string(),
            parsed: Some(destination),
            source: Some(source),
        }
    }
}

pub fn is_volume_unit(unit: &str) -> bool {
    Unit::parse(unit).is_some_and(|u| u.dimension() == Dimension::Volume)
}

pub fn is_weight_unit(unit: &str) -> bool {
    Unit::parse(unit).is_some_and(|u| u.dimension() == Dimension::Weight)
}

/// Render a measurement in the given system for display
///
/// Whole numbers print bare, amounts below 10 keep two decimals, larger amounts one.
pub fn format_measurement(quantity: f64, unit: &str, system: MeasurementSystem) -> String {
    let converted = MeasurementConverter::convert(quantity, unit, system);
    let amount = converted.quantity;

    let formatted = if amount.fract() == 0.0 {
        format!("{}", amount)
    } else if amount < 10.0 {
        format!("{:.2}", amount)
    } else {
        format!("{:.1}", amount)
    };

    format!("{} {}", formatted, converted.unit_label())
        .trim_end()
        .to_string()
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
