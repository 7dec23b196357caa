//! Storage row models.
//!
//! Each row type mirrors its table and converts into the matching entity
//! from `gearshelf_core`.

pub mod category;
pub mod product;
pub mod pros_cons;
pub mod review;
