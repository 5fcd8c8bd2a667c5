pub mod measurement;

pub use measurement::{CommonUnits, MeasurementSystem};
