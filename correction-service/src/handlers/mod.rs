pub mod app;
pub mod correct;
pub mod metrics;
