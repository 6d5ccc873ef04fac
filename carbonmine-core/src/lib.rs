pub mod builder;
pub mod error;
pub mod estimator;
pub mod factors;
pub mod policy;
pub mod recommendations;
pub mod report;
pub mod sources;

pub use error::FootprintError;
pub use estimator::{breakdown, estimate, estimate_checked, FootprintBreakdown, FootprintResult};
pub use policy::{Assessment, EstimationPolicy, Estimator, FuelKeyPolicy, NegativeInputPolicy};
