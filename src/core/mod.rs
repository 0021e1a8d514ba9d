pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{Court, Person, ReportBundle, ResultRecord, RowOutcome};
pub use crate::domain::ports::{ConfigProvider, CourtLookup, Pipeline, Storage};
pub use crate::utils::error::Result;
