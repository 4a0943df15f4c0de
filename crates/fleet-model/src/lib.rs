//! Fleet model - asset fixture schema and derived case types.
//!
//! Mirrors the JSON shape of the fleet asset fixture (camelCase field
//! names) and the flattened `Case` records derived from it.

pub mod asset;
pub mod case;
pub mod error;
pub mod fixture;

pub use asset::*;
pub use case::*;
pub use error::*;
pub use fixture::AssetFixture;
