use crate::adapters::ensembl::EnsemblClient;
use crate::core::{ConfigProvider, OrthologRecord, Pipeline, Storage, TransformResult};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation;
use std::time::Duration;

/// The one column the input CSV must carry.
pub const INPUT_GENE_COLUMN: &str = "Rat Gene";

/// Fixed output column order.
pub const OUTPUT_HEADER: [&str; 4] = [
    "Murine Ensembl ID",
    "Human Ensembl ID",
    "Identity",
    "Positivity",
];

pub struct OrthologPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: EnsemblClient,
}

impl<S: Storage, C: ConfigProvider> OrthologPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = EnsemblClient::new(
            config.api_server(),
            Duration::from_secs(config.timeout_secs()),
        )?;
        Ok(Self {
            storage,
            config,
            client,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for OrthologPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        if let Some(id) = self.config.ensembl_id() {
            tracing::info!("Processing single Ensembl identifier: {}", id);
            validation::validate_ensembl_id(id)?;
            return Ok(vec![id.to_string()]);
        }

        let input_path =
            self.config
                .input_path()
                .ok_or_else(|| EtlError::MissingConfigError {
                    field: "input_file_path".to_string(),
                })?;

        let raw = self.storage.read_file(input_path).await?;
        read_gene_column(&raw)
    }

    async fn transform(&self, genes: Vec<String>) -> Result<TransformResult> {
        let mut records = Vec::with_capacity(genes.len());
        let mut not_found_count = 0;
        let mut error_count = 0;

        // One request per identifier, strictly sequential; a failed lookup
        // only blanks that identifier's row.
        for gene in genes {
            let record = match self.client.get_human_ortholog(&gene).await {
                Ok(Some(ortholog)) => {
                    OrthologRecord::found(gene, ortholog.id, ortholog.identity, ortholog.positivity)
                }
                Ok(None) => {
                    tracing::warn!("No human ortholog found for {}", gene);
                    not_found_count += 1;
                    OrthologRecord::not_found(gene)
                }
                Err(e) => {
                    tracing::error!("Lookup failed for {}: {}", gene, e);
                    not_found_count += 1;
                    error_count += 1;
                    OrthologRecord::not_found(gene)
                }
            };
            records.push(record);
        }

        let csv_output = render_csv(&records)?;

        Ok(TransformResult {
            records,
            csv_output,
            not_found_count,
            error_count,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let Some(output_path) = self.config.output_path() else {
            // Single-identifier mode without an output file prints the report.
            print!("{}", result.csv_output);
            return Ok("-".to_string());
        };

        if self.storage.exists(output_path) && !self.config.overwrite() {
            return Err(EtlError::OutputExistsError {
                path: output_path.to_string(),
            });
        }

        self.storage
            .write_file(output_path, result.csv_output.as_bytes())
            .await?;

        tracing::debug!("Report saved to {}", output_path);
        Ok(output_path.to_string())
    }
}

/// Pulls the values of the "Rat Gene" column, in file order. Empty cells are
/// skipped; malformed identifiers are rejected with a logged error and never
/// sent to the remote service.
fn read_gene_column(raw: &[u8]) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_reader(raw);

    let headers = reader.headers()?.clone();
    let column = headers
        .iter()
        .position(|h| h == INPUT_GENE_COLUMN)
        .ok_or_else(|| EtlError::ValidationError {
            message: format!(
                "The input CSV file must contain a column named '{}'.",
                INPUT_GENE_COLUMN
            ),
        })?;

    let mut genes = Vec::new();
    for row in reader.records() {
        let row = row?;
        let Some(cell) = row.get(column).map(str::trim) else {
            continue;
        };
        if cell.is_empty() {
            continue;
        }
        match validation::validate_ensembl_id(cell) {
            Ok(()) => genes.push(cell.to_string()),
            Err(e) => tracing::error!("Rejected input row: {}", e),
        }
    }

    Ok(genes)
}

fn render_csv(records: &[OrthologRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(OUTPUT_HEADER)?;

    for record in records {
        let identity = format_percentage(record.identity);
        let positivity = format_percentage(record.positivity);
        writer.write_record([
            record.murine_id.as_str(),
            record.human_id.as_deref().unwrap_or(""),
            identity.as_str(),
            positivity.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::ProcessingError {
            message: format!("CSV buffer error: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("Report is not valid UTF-8: {}", e),
    })
}

fn format_percentage(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
