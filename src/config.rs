use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use kitchen_retail_shopping::{DEFAULT_DENSITY_TOLERANCE, DensityTable, MeasurementSystem};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NormalizerConfig {
    /// System used when a command does not pass `--system`
    #[serde(default)]
    pub measurement_system: MeasurementSystem,
    /// Allowed disagreement between the gram and ounce cup weights (0.05 = 5%)
    #[serde(default = "default_density_tolerance")]
    pub density_tolerance: f64,
    #[serde(default)]
    pub densities: DensityTable,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            measurement_system: MeasurementSystem::default(),
            density_tolerance: default_density_tolerance(),
            densities: DensityTable::default(),
        }
    }
}

fn default_density_tolerance() -> f64 {
    DEFAULT_DENSITY_TOLERANCE
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (KITCHEN_RETAIL__NORMALIZER__MEASUREMENT_SYSTEM, etc.)
    /// 2. Config file specified by path, CONFIG_PATH, or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("normalizer.measurement_system", "imperial")?
            .set_default("normalizer.density_tolerance", DEFAULT_DENSITY_TOLERANCE)?
            .set_default("observability.log_level", default_log_level())?;

        // Every cup weight gets a default so a single overridden field still
        // deserializes into a complete pair
        let densities = DensityTable::default();
        for (ingredient, weight) in [
            ("flour", densities.flour),
            ("sugar", densities.sugar),
            ("rice", densities.rice),
            ("fallback", densities.fallback),
        ] {
            builder = builder
                .set_default(format!("normalizer.densities.{ingredient}.grams"), weight.grams)?
                .set_default(format!("normalizer.densities.{ingredient}.ounces"), weight.ounces)?;
        }

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional - ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("KITCHEN_RETAIL")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let tolerance = self.normalizer.density_tolerance;
        if !(tolerance.is_finite() && tolerance > 0.0 && tolerance < 1.0) {
            return Err(format!(
                "Density tolerance must be between 0 and 1, got {}",
                tolerance
            ));
        }

        self.normalizer
            .densities
            .validate(tolerance)
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitchen_retail_shopping::CupWeight;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validation_tolerance_out_of_range() {
        for tolerance in [0.0, -0.1, 1.0, f64::NAN] {
            let config = Config {
                normalizer: NormalizerConfig {
                    density_tolerance: tolerance,
                    ..NormalizerConfig::default()
                },
                ..Config::default()
            };

            assert!(config.validate().is_err(), "tolerance {}", tolerance);
        }
    }

    #[test]
    fn test_validation_density_drift() {
        let config = Config {
            normalizer: NormalizerConfig {
                densities: DensityTable {
                    sugar: CupWeight::new(200.0, 9.0),
                    ..DensityTable::default()
                },
                ..NormalizerConfig::default()
            },
            ..Config::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.contains("sugar"), "{}", err);
    }

    #[test]
    fn test_validation_non_positive_density() {
        let config = Config {
            normalizer: NormalizerConfig {
                densities: DensityTable {
                    fallback: CupWeight::new(0.0, 5.0),
                    ..DensityTable::default()
                },
                ..NormalizerConfig::default()
            },
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }
}
