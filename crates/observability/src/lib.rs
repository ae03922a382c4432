//! Tracing and logging setup shared by StockWatch binaries.

/// Initialize process-wide tracing/logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;
