pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;

pub use adapters::ensembl::EnsemblClient;
pub use core::{etl::EtlEngine, pipeline::OrthologPipeline};
pub use domain::model::{OrthologRecord, RunReport, TransformResult};
pub use utils::error::{EtlError, Result};
