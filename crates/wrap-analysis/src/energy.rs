//! Energy, carbon, and water estimate.
//!
//! Every output is linear in the standard and reasoning conversation counts.

use wrap_config::EnergyConfig;
use wrap_core::summary::EnergyEstimate;

/// Conversation counts the estimate is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnergyInputs {
    pub standard_conversations: u64,
    pub reasoning_conversations: u64,
    pub message_pairs: u64,
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimate(inputs: EnergyInputs, config: &EnergyConfig) -> EnergyEstimate {
    let units = (inputs.reasoning_conversations as f64).mul_add(
        config.reasoning_multiplier,
        inputs.standard_conversations as f64,
    );

    let operational_kwh = units * config.wh_per_conversation * config.pue / 1000.0;
    let electricity_co2_kg = operational_kwh * config.grid_kg_co2_per_kwh;
    let operational_co2_kg = electricity_co2_kg * config.hardware_multiplier;
    let training_co2_kg = units * config.training_kg_co2_per_conversation;
    let total_co2_kg = operational_co2_kg + training_co2_kg;
    let total_co2_tons = total_co2_kg / 1000.0;

    EnergyEstimate {
        standard_conversations: inputs.standard_conversations,
        reasoning_conversations: inputs.reasoning_conversations,
        message_pairs: inputs.message_pairs,
        operational_kwh,
        electricity_co2_kg,
        operational_co2_kg,
        training_co2_kg,
        total_co2_kg,
        total_co2_tons,
        offset_cost_usd: total_co2_tons * config.offset_usd_per_ton,
        water_liters: operational_kwh * config.water_liters_per_kwh,
        car_miles_equivalent: total_co2_kg / config.car_kg_co2_per_mile,
        flight_miles_equivalent: total_co2_kg / config.flight_kg_co2_per_mile,
        showers_equivalent: operational_kwh * config.water_liters_per_kwh
            / config.liters_per_shower,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    fn inputs(standard: u64, reasoning: u64) -> EnergyInputs {
        EnergyInputs {
            standard_conversations: standard,
            reasoning_conversations: reasoning,
            message_pairs: 0,
        }
    }

    #[test]
    fn zero_conversations_cost_nothing() {
        let result = estimate(EnergyInputs::default(), &EnergyConfig::default());
        assert_eq!(result.total_co2_kg, 0.0);
        assert_eq!(result.water_liters, 0.0);
        assert_eq!(result.offset_cost_usd, 0.0);
    }

    #[test]
    fn hundred_standard_conversations_with_defaults() {
        let result = estimate(inputs(100, 0), &EnergyConfig::default());
        // 100 * 20 Wh * 1.3 = 2.6 kWh
        assert!(close(result.operational_kwh, 2.6));
        assert!(close(result.electricity_co2_kg, 1.17));
        assert!(close(result.operational_co2_kg, 1.755));
        assert!(close(result.training_co2_kg, 0.6));
        assert!(close(result.total_co2_kg, 2.355));
        assert!(close(result.total_co2_tons, 0.002_355));
        assert!(close(result.offset_cost_usd, 0.0471));
        assert!(close(result.water_liters, 26.0));
        assert!(close(result.car_miles_equivalent, 5.8875));
        assert!(close(result.flight_miles_equivalent, 9.42));
        assert!(close(result.showers_equivalent, 0.4));
    }

    #[test]
    fn reasoning_conversations_scale_by_multiplier() {
        let config = EnergyConfig::default();
        let reasoning = estimate(inputs(0, 10), &config);
        let standard = estimate(inputs(40, 0), &config);
        assert!(close(reasoning.total_co2_kg, standard.total_co2_kg));
        assert!(close(reasoning.water_liters, standard.water_liters));
    }

    #[test]
    fn doubling_counts_doubles_every_quantity() {
        let config = EnergyConfig::default();
        let once = estimate(inputs(37, 5), &config);
        let twice = estimate(inputs(74, 10), &config);
        for (single, double) in [
            (once.operational_kwh, twice.operational_kwh),
            (once.electricity_co2_kg, twice.electricity_co2_kg),
            (once.operational_co2_kg, twice.operational_co2_kg),
            (once.training_co2_kg, twice.training_co2_kg),
            (once.total_co2_kg, twice.total_co2_kg),
            (once.offset_cost_usd, twice.offset_cost_usd),
            (once.water_liters, twice.water_liters),
            (once.car_miles_equivalent, twice.car_miles_equivalent),
            (once.flight_miles_equivalent, twice.flight_miles_equivalent),
            (once.showers_equivalent, twice.showers_equivalent),
        ] {
            assert!(close(single * 2.0, double), "{single} * 2 != {double}");
        }
    }

    #[test]
    fn constants_come_from_config() {
        let config = EnergyConfig {
            wh_per_conversation: 1000.0,
            pue: 1.0,
            grid_kg_co2_per_kwh: 1.0,
            hardware_multiplier: 1.0,
            training_kg_co2_per_conversation: 0.0,
            ..EnergyConfig::default()
        };
        let result = estimate(inputs(3, 0), &config);
        assert!(close(result.operational_kwh, 3.0));
        assert!(close(result.total_co2_kg, 3.0));
    }
}
