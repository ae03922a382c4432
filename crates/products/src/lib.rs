//! Product catalog reference data.

pub mod product;

pub use product::{Product, ProductCategory};
