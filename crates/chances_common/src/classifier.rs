//! City classification via static membership lookups.
//!
//! A city name maps to three independent multipliers through fixed category
//! lists. Matching is exact case-insensitive equality only: no trimming, no
//! diacritic folding, no aliasing ("NYC" is not "new york"). Unknown cities
//! silently fall back to the default multiplier. These semantics are part of
//! the API contract and must not be "improved".

/// Cities close enough to open water for shark attacks to register
const COASTAL_CITIES: [&str; 4] = ["barcelona", "miami", "sydney", "lisbon"];

/// Cities with well above average thunderstorm days
const STORMY_CITIES: [&str; 3] = ["miami", "bangkok", "singapore"];

/// Dense megacities (more people per impact footprint)
const MEGA_CITIES: [&str; 3] = ["tokyo", "new york", "london"];

/// 1.0 for coastal cities, 0.01 everywhere else (landlocked shark attacks
/// are effectively aquarium accidents).
pub fn shark_modifier(city: &str) -> f64 {
    if COASTAL_CITIES.contains(&city.to_lowercase().as_str()) {
        1.0
    } else {
        0.01
    }
}

/// 1.5 for storm-prone cities, 1.0 everywhere else.
pub fn lightning_modifier(city: &str) -> f64 {
    if STORMY_CITIES.contains(&city.to_lowercase().as_str()) {
        1.5
    } else {
        1.0
    }
}

/// 1.2 for megacities, 1.0 everywhere else.
pub fn meteor_modifier(city: &str) -> f64 {
    if MEGA_CITIES.contains(&city.to_lowercase().as_str()) {
        1.2
    } else {
        1.0
    }
}
