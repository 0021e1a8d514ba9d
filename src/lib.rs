pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::courts_api::CourtsApiClient;
pub use config::cli::LocalStorage;
pub use core::{engine::LookupEngine, pipeline::CourtLookupPipeline};
pub use domain::timesum::sum_time_components;
pub use utils::error::{FinderError, Result};
