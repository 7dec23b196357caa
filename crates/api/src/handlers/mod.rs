//! HTTP handlers, one module per catalog entity.

pub mod category;
pub mod product;
pub mod pros_cons;
pub mod review;
