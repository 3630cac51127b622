mod metrics;
pub mod token_handler;

pub use metrics::metrics_handler;
