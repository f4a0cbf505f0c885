// Statistics over a user's application history.
// Core: the interval-bucketed, gap-filled time series (timeseries.rs).
// summary.rs covers the one-shot aggregate and stage-percentage endpoints.

pub mod handlers;
pub mod interval;
pub mod store;
pub mod summary;
pub mod timeseries;
