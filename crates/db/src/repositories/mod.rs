//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and return storage rows.

pub mod category_repo;
pub mod product_repo;
pub mod pros_cons_repo;
pub mod review_repo;

pub use category_repo::CategoryRepo;
pub use product_repo::ProductRepo;
pub use pros_cons_repo::ProsConsRepo;
pub use review_repo::ReviewRepo;
