//! Sales history: immutable records of units sold.

pub mod sale;

pub use sale::SaleRecord;
