pub mod cli;

#[cfg(feature = "cli")]
use crate::adapters::ensembl::DEFAULT_SERVER;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "orthomap")]
#[command(
    about = "Find human orthologs for rat genes from a CSV file or a single Ensembl identifier and output the results to another CSV file"
)]
pub struct CliConfig {
    /// Path to the input CSV file containing rat gene identifiers.
    pub input_file_path: Option<String>,

    /// Path to the output CSV file to save the results.
    pub output_file_path: Option<String>,

    #[arg(long, help = "Overwrite the output file if it exists")]
    pub overwrite: bool,

    #[arg(
        long = "ensembl_id",
        help = "A single Ensembl identifier to process instead of an input file"
    )]
    pub ensembl_id: Option<String>,

    #[arg(long, default_value = DEFAULT_SERVER)]
    pub api_server: String,

    #[arg(long, default_value = "30", help = "Per-request timeout in seconds")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU/memory stats per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input_file_path.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output_file_path.as_deref()
    }

    fn overwrite(&self) -> bool {
        self.overwrite
    }

    fn ensembl_id(&self) -> Option<&str> {
        self.ensembl_id.as_deref()
    }

    fn api_server(&self) -> &str {
        &self.api_server
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_server", &self.api_server)?;
        validation::validate_positive_number("timeout_secs", self.timeout_secs, 1)?;

        match &self.ensembl_id {
            Some(id) => {
                // Single-identifier mode; file paths are optional.
                validation::validate_ensembl_id(id)?;
            }
            None => {
                let input =
                    validation::validate_required_field("input_file_path", &self.input_file_path)?;
                validation::validate_path("input_file_path", input)?;
                let output = validation::validate_required_field(
                    "output_file_path",
                    &self.output_file_path,
                )?;
                validation::validate_path("output_file_path", output)?;
            }
        }

        Ok(())
    }
}
