//! Domain types shared by the storage and API layers.
//!
//! Holds the entity and input contracts for the catalog, their validation
//! rules, and the conversions that have to agree on both sides of the
//! storage boundary (price representation, tri-state patch fields).

pub mod category;
pub mod error;
pub mod patch;
pub mod price;
pub mod product;
pub mod pros_cons;
pub mod query;
pub mod review;
pub mod types;
pub mod validation;
