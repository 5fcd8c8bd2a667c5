use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Unit family a user shops in. Chosen once per request and never mixed.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    #[default]
    Imperial,
    Metric,
}

/// Units a measurement system is normally displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonUnits {
    pub volume: &'static [&'static str],
    pub weight: &'static [&'static str],
}

impl MeasurementSystem {
    pub fn display_name(&self) -> &'static str {
        match self {
            MeasurementSystem::Imperial => "Imperial (oz, cups, lbs, gallons)",
            MeasurementSystem::Metric => "Metric (g, ml, kg, L)",
        }
    }

    pub fn common_units(&self) -> CommonUnits {
        match self {
            MeasurementSystem::Imperial => CommonUnits {
                volume: &["tsp", "tbsp", "cups", "fl oz", "pints", "quarts", "gallons"],
                weight: &["oz", "lbs"],
            },
            MeasurementSystem::Metric => CommonUnits {
                volume: &["ml", "liters"],
                weight: &["g", "kg"],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_is_imperial() {
        assert_eq!(MeasurementSystem::default(), MeasurementSystem::Imperial);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            MeasurementSystem::from_str("metric").unwrap(),
            MeasurementSystem::Metric
        );
        assert_eq!(
            MeasurementSystem::from_str("IMPERIAL").unwrap(),
            MeasurementSystem::Imperial
        );
        assert!(MeasurementSystem::from_str("nautical").is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for system in MeasurementSystem::VARIANTS {
            let parsed = MeasurementSystem::from_str(&system.to_string()).unwrap();
            assert_eq!(&parsed, system);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&MeasurementSystem::Metric).unwrap();
        assert_eq!(json, "\"metric\"");

        let parsed: MeasurementSystem = serde_json::from_str("\"imperial\"").unwrap();
        assert_eq!(parsed, MeasurementSystem::Imperial);
    }

    #[test]
    fn test_common_units_stay_in_their_system() {
        let metric = MeasurementSystem::Metric.common_units();
        assert!(metric.volume.contains(&"ml"));
        assert!(!metric.weight.contains(&"oz"));

        let imperial = MeasurementSystem::Imperial.common_units();
        assert!(imperial.volume.contains(&"cups"));
        assert!(!imperial.weight.contains(&"g"));
    }

    #[test]
    fn test_display_name() {
        assert!(MeasurementSystem::Metric.display_name().starts_with("Metric"));
        assert!(
            MeasurementSystem::Imperial
                .display_name()
                .starts_with("Imperial")
        );
    }
}
