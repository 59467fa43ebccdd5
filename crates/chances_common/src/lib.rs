//! Chances Common - Shared types and the probability core for ChancesAre
//!
//! Everything with domain logic lives here: the base rate table, the city
//! classifier, the probability engine, and the "1 in N" formatter. The HTTP
//! daemon and the CLI client are thin consumers of these types.

pub mod classifier;
pub mod engine;
pub mod error;
pub mod format;
pub mod rates;
pub mod types;

pub use classifier::*;
pub use engine::*;
pub use error::*;
pub use format::*;
pub use rates::*;
pub use types::*;
