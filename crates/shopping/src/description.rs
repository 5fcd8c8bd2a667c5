use kitchen_retail_shared::MeasurementSystem;

use crate::base_unit::BaseUnit;
use crate::packaging::PackageSelection;
use crate::units::SystemQuantity;

pub const PURCHASE_AS_NEEDED: &str = "Purchase as needed";
pub const NO_PURCHASE_NEEDED: &str = "No purchase needed";

/// Rendered retail phrase and the optional overage note
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    pub text: String,
    pub note: Option<String>,
}

/// Format a number for display
///
/// Formats:
/// - Whole numbers: 2.0 → "2"
/// - Decimals: rounded to two places, trailing zeros dropped (2.50 → "2.5")
/// - Positive amounts too small to show: "<0.01"
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;

    if amount > 0.0 && rounded == 0.0 {
        return "<0.01".to_string();
    }

    if rounded.fract() == 0.0 {
        // `+ 0.0` turns -0.0 into 0.0
        return format!("{}", rounded + 0.0);
    }

    let fixed = format!("{:.2}", rounded);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn plural(count: f64) -> &'static str {
    if count > 1.0 { "s" } else { "" }
}

/// Description Formatter
///
/// Size-aware phrasing per system and base unit:
/// - imperial liquids: gallon, half gallon, quart, otherwise fl oz containers
/// - imperial dry goods: whole pounds in lb, otherwise oz packages
/// - metric liquids: 1000 ml and up in L, otherwise ml containers
/// - metric dry goods: 1000 g and up in kg, otherwise g packages
///
/// Multiple packages carry a note with the total purchased amount.
pub struct DescriptionFormatter;

impl DescriptionFormatter {
    pub fn describe(selection: &PackageSelection, system: MeasurementSystem) -> Description {
        let text = match system {
            MeasurementSystem::Imperial => Self::imperial(selection),
            MeasurementSystem::Metric => Self::metric(selection),
        };

        let note = (selection.count > 1.0)
            .then(|| format!("Total: {:.1} {}", selection.total(), selection.unit));

        Description { text, note }
    }

    fn imperial(selection: &PackageSelection) -> String {
        let PackageSelection { count, size, unit } = *selection;
        let s = plural(count);

        if unit.is_volume() {
            if size == 128.0 {
                format!("{} gallon{}", count, s)
            } else if size == 64.0 {
                format!("{} half gallon{}", count, s)
            } else if size == 32.0 {
                format!("{} quart{}", count, s)
            } else {
                format!("{} × {} fl oz container{}", count, format_amount(size), s)
            }
        } else {
            let pounds = size / 16.0;
            if pounds >= 1.0 && pounds.fract() == 0.0 {
                format!("{} × {} lb package{}", count, format_amount(pounds), s)
            } else {
                format!("{} × {} oz package{}", count, format_amount(size), s)
            }
        }
    }

    fn metric(selection: &PackageSelection) -> String {
        let PackageSelection { count, size, unit } = *selection;
        let s = plural(count);

        match (unit.is_volume(), size >= 1000.0) {
            (true, true) => {
                let liters = format_amount(size / 1000.0);
                format!("{} × {}L container{}", count, liters, s)
            }
            (true, false) => {
                format!("{} × {}ml container{}", count, format_amount(size), s)
            }
            (false, true) => {
                let kilograms = format_amount(size / 1000.0);
                format!("{} × {}kg package{}", count, kilograms, s)
            }
            (false, false) => format!("{} × {}g package{}", count, format_amount(size), s),
        }
    }

    /// Uncatalogued liquid or dry good, bought by the base unit
    pub fn describe_loose(amount: f64, unit: BaseUnit) -> Description {
        Description {
            text: format!("{} {}", format_amount(amount), unit),
            note: None,
        }
    }

    /// Count-based item; fractional needs still buy one whole item.
    ///
    /// `needed` is the caller's amount already expressed in the requested system.
    pub fn describe_count(
        ingredient: &str,
        count: f64,
        quantity: f64,
        needed: &SystemQuantity,
    ) -> Description {
        let note = (quantity > 0.0 && quantity < 1.0).then(|| {
            let needed = format!("{} {}", format_amount(needed.quantity), needed.unit_label());
            format!("(need only {})", needed.trim_end())
        });

        Description {
            text: format!("{} {}", count, ingredient),
            note,
        }
    }

    /// Quantity passed through in its own unit
    pub fn describe_pass_through(amount: f64, unit_label: &str) -> Description {
        let text = format!("{} {}", format_amount(amount), unit_label.trim());

        Description {
            text: text.trim_end().to_string(),
            note: Some(PURCHASE_AS_NEEDED.to_string()),
        }
    }
}
