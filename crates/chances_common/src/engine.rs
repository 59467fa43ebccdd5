//! The probability engine.
//!
//! Pure, synchronous, never fails on its documented domain (age > 0, any city
//! string). Safe to call from any number of concurrent requests: each call
//! reads the constant tables and allocates only its own result.

use crate::classifier::{lightning_modifier, meteor_modifier, shark_modifier};
use crate::format::one_in;
use crate::rates::BASE_RATES;
use crate::types::{AggregateResult, Event, Inputs, ProbabilityResult};
use std::collections::BTreeMap;

/// Verdict text is static per event. The raw numbers already carry the scale;
/// the verdict is just a deadpan caption.
pub fn verdict(event: Event) -> &'static str {
    match event {
        Event::SharkAttack => "Relax.",
        Event::LightningStrike => "Still very unlikely.",
        Event::MeteorImpact => "Astronomically low.",
    }
}

/// Raw probability fraction for one event.
///
/// - shark: annual base rate, scaled by age and the coastal modifier
/// - lightning: annual base rate, scaled by age and the storm modifier
/// - meteor: lifetime base rate annualized over the assumed lifespan, scaled
///   by age and the megacity modifier
pub fn raw_probability(event: Event, age: f64, city: &str) -> f64 {
    match event {
        Event::SharkAttack => BASE_RATES.shark_annual * age * shark_modifier(city),
        Event::LightningStrike => {
            BASE_RATES.lightning_annual * age * lightning_modifier(city)
        }
        Event::MeteorImpact => {
            let meteor_annual =
                (BASE_RATES.meteor_lifetime / BASE_RATES.assumed_lifespan_years) * age;
            meteor_annual * meteor_modifier(city)
        }
    }
}

/// Compute and format all three probabilities for the given age and city.
pub fn calculate_all_probabilities(age: f64, city: &str) -> AggregateResult {
    let mut results = BTreeMap::new();
    for event in Event::ALL {
        results.insert(
            event,
            ProbabilityResult {
                probability: one_in(raw_probability(event, age, city)),
                verdict: verdict(event).to_string(),
            },
        );
    }

    AggregateResult {
        inputs: Inputs {
            age,
            city: city.to_string(),
        },
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn barcelona_at_27_uses_coastal_shark_rate_only() {
        // Coastal, not stormy, not a megacity
        let shark = raw_probability(Event::SharkAttack, 27.0, "Barcelona");
        assert_relative_eq!(shark, BASE_RATES.shark_annual * 27.0);

        let lightning = raw_probability(Event::LightningStrike, 27.0, "Barcelona");
        assert_relative_eq!(lightning, BASE_RATES.lightning_annual * 27.0);

        let meteor = raw_probability(Event::MeteorImpact, 27.0, "Barcelona");
        let annual = BASE_RATES.meteor_lifetime / BASE_RATES.assumed_lifespan_years;
        assert_relative_eq!(meteor, annual * 27.0);
    }

    #[test]
    fn miami_at_27_gets_the_storm_bump() {
        let shark = raw_probability(Event::SharkAttack, 27.0, "Miami");
        assert_relative_eq!(shark, BASE_RATES.shark_annual * 27.0);

        let lightning = raw_probability(Event::LightningStrike, 27.0, "Miami");
        assert_relative_eq!(lightning, BASE_RATES.lightning_annual * 27.0 * 1.5);

        let meteor = raw_probability(Event::MeteorImpact, 27.0, "Miami");
        let annual = BASE_RATES.meteor_lifetime / BASE_RATES.assumed_lifespan_years;
        assert_relative_eq!(meteor, annual * 27.0);
    }

    #[test]
    fn all_probabilities_finite_and_positive() {
        for age in [0.5, 1.0, 27.0, 80.0, 120.0] {
            for city in ["barcelona", "tokyo", "nowhere", "", "NYC"] {
                for event in Event::ALL {
                    let p = raw_probability(event, age, city);
                    assert!(p.is_finite() && p > 0.0, "{event} age={age} city={city:?}");
                }
            }
        }
    }

    #[test]
    fn probabilities_never_decrease_with_age() {
        for city in ["miami", "tokyo", "nowhere"] {
            for event in Event::ALL {
                let mut last = 0.0;
                for age in [1.0, 5.0, 27.0, 50.0, 99.0] {
                    let p = raw_probability(event, age, city);
                    assert!(p >= last, "{event} regressed at age {age} in {city}");
                    last = p;
                }
            }
        }
    }

    #[test]
    fn aggregate_echoes_inputs_and_covers_all_events() {
        let report = calculate_all_probabilities(27.0, "Barcelona");
        assert_eq!(report.inputs.age, 27.0);
        assert_eq!(report.inputs.city, "Barcelona");
        assert_eq!(report.results.len(), 3);
        for event in Event::ALL {
            let result = &report.results[&event];
            assert!(result.probability.starts_with("1 in "));
            assert_eq!(result.verdict, verdict(event));
        }
    }

    #[test]
    fn verdicts_are_static_text() {
        assert_eq!(verdict(Event::SharkAttack), "Relax.");
        assert_eq!(verdict(Event::LightningStrike), "Still very unlikely.");
        assert_eq!(verdict(Event::MeteorImpact), "Astronomically low.");
    }
}
