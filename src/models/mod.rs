pub mod factors;
pub mod report;
pub mod stadium;
pub mod weather;

pub use factors::{AdjustedFactorSet, BaseFactorSet};
pub use report::{ErrorReport, ParkFactorReport, ParkFactorRow};
pub use stadium::Stadium;
pub use weather::WeatherObservation;
