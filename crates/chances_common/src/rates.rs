//! Base incidence rates for the three events.
//!
//! Sources: Florida Museum shark attack statistics, NWS lightning statistics,
//! CNEOS impact risk tables. Annual rates are per person per year; the meteor
//! rate is per lifetime and gets spread over the assumed lifespan by the engine.

/// Process-wide constant rate table. Built once, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct BaseRates {
    /// Shark attack, per person per year (1 in 11,500,000)
    pub shark_annual: f64,
    /// Lightning strike, per person per year (1 in 1,200,000)
    pub lightning_annual: f64,
    /// Meteor impact, per lifetime (1 in 174,000,000)
    pub meteor_lifetime: f64,
    /// Lifespan used to annualize the meteor rate
    pub assumed_lifespan_years: f64,
}

pub const BASE_RATES: BaseRates = BaseRates {
    shark_annual: 1.0 / 11_500_000.0,
    lightning_annual: 1.0 / 1_200_000.0,
    meteor_lifetime: 1.0 / 174_000_000.0,
    assumed_lifespan_years: 80.0,
};
