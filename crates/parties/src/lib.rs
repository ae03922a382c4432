//! Parties the company trades with. Only suppliers are modeled.

pub mod party;

pub use party::Supplier;
