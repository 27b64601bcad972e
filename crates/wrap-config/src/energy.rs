//! Constants behind the energy, carbon, and water estimate.
//!
//! The defaults deliberately estimate high: 20 Wh per conversation for long
//! reasoning-heavy prompts, a PUE of 1.3, 0.45 kg CO2 per kWh, embodied
//! hardware carbon at 1.5x operational, 6 g CO2 of training amortisation per
//! conversation, 10 L of water per kWh, and offsets at $20 per tonne.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_wh_per_conversation() -> f64 {
    20.0
}

const fn default_pue() -> f64 {
    1.3
}

const fn default_grid_kg_co2_per_kwh() -> f64 {
    0.45
}

const fn default_hardware_multiplier() -> f64 {
    1.5
}

const fn default_training_kg_co2_per_conversation() -> f64 {
    0.006
}

const fn default_reasoning_multiplier() -> f64 {
    4.0
}

const fn default_water_liters_per_kwh() -> f64 {
    10.0
}

const fn default_offset_usd_per_ton() -> f64 {
    20.0
}

const fn default_car_kg_co2_per_mile() -> f64 {
    0.4
}

const fn default_flight_kg_co2_per_mile() -> f64 {
    0.25
}

const fn default_liters_per_shower() -> f64 {
    65.0
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EnergyConfig {
    /// Inference energy of one standard conversation, in watt-hours.
    #[serde(default = "default_wh_per_conversation")]
    pub wh_per_conversation: f64,

    /// Data-center power usage effectiveness.
    #[serde(default = "default_pue")]
    pub pue: f64,

    #[serde(default = "default_grid_kg_co2_per_kwh")]
    pub grid_kg_co2_per_kwh: f64,

    /// Embodied hardware carbon as a multiple of electricity carbon.
    #[serde(default = "default_hardware_multiplier")]
    pub hardware_multiplier: f64,

    #[serde(default = "default_training_kg_co2_per_conversation")]
    pub training_kg_co2_per_conversation: f64,

    /// Cost of an extended-reasoning conversation relative to a standard one.
    #[serde(default = "default_reasoning_multiplier")]
    pub reasoning_multiplier: f64,

    #[serde(default = "default_water_liters_per_kwh")]
    pub water_liters_per_kwh: f64,

    #[serde(default = "default_offset_usd_per_ton")]
    pub offset_usd_per_ton: f64,

    #[serde(default = "default_car_kg_co2_per_mile")]
    pub car_kg_co2_per_mile: f64,

    #[serde(default = "default_flight_kg_co2_per_mile")]
    pub flight_kg_co2_per_mile: f64,

    #[serde(default = "default_liters_per_shower")]
    pub liters_per_shower: f64,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            wh_per_conversation: default_wh_per_conversation(),
            pue: default_pue(),
            grid_kg_co2_per_kwh: default_grid_kg_co2_per_kwh(),
            hardware_multiplier: default_hardware_multiplier(),
            training_kg_co2_per_conversation: default_training_kg_co2_per_conversation(),
            reasoning_multiplier: default_reasoning_multiplier(),
            water_liters_per_kwh: default_water_liters_per_kwh(),
            offset_usd_per_ton: default_offset_usd_per_ton(),
            car_kg_co2_per_mile: default_car_kg_co2_per_mile(),
            flight_kg_co2_per_mile: default_flight_kg_co2_per_mile(),
            liters_per_shower: default_liters_per_shower(),
        }
    }
}

impl EnergyConfig {
    /// Check every constant is finite and non-negative, and divisors positive.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            ("wh_per_conversation", self.wh_per_conversation),
            ("pue", self.pue),
            ("grid_kg_co2_per_kwh", self.grid_kg_co2_per_kwh),
            ("hardware_multiplier", self.hardware_multiplier),
            (
                "training_kg_co2_per_conversation",
                self.training_kg_co2_per_conversation,
            ),
            ("reasoning_multiplier", self.reasoning_multiplier),
            ("water_liters_per_kwh", self.water_liters_per_kwh),
            ("offset_usd_per_ton", self.offset_usd_per_ton),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    format!("energy.{name}"),
                    format!("must be a non-negative number, got {value}"),
                ));
            }
        }

        let divisors = [
            ("car_kg_co2_per_mile", self.car_kg_co2_per_mile),
            ("flight_kg_co2_per_mile", self.flight_kg_co2_per_mile),
            ("liters_per_shower", self.liters_per_shower),
        ];
        for (name, value) in divisors {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(
                    format!("energy.{name}"),
                    format!("must be a positive number, got {value}"),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EnergyConfig::default();
        config.validate().expect("defaults should validate");
        assert!((config.wh_per_conversation - 20.0).abs() < f64::EPSILON);
        assert!((config.reasoning_multiplier - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_negative_factor() {
        let config = EnergyConfig {
            pue: -1.0,
            ..EnergyConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "energy.pue"
        ));
    }

    #[test]
    fn rejects_zero_divisor() {
        let config = EnergyConfig {
            liters_per_shower: 0.0,
            ..EnergyConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
