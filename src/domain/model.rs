use serde::{Deserialize, Serialize};

/// One row of the ortholog report.
///
/// `murine_id` is always present. The remaining fields are absent together
/// when no human ortholog was found or the remote lookup failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrthologRecord {
    pub murine_id: String,
    pub human_id: Option<String>,
    /// Percentage of identical residues in the alignment, in [0, 100].
    pub identity: Option<f64>,
    /// Percentage of exact or biochemically similar positions, in [0, 100].
    pub positivity: Option<f64>,
}

impl OrthologRecord {
    pub fn found(
        murine_id: impl Into<String>,
        human_id: impl Into<String>,
        identity: Option<f64>,
        positivity: Option<f64>,
    ) -> Self {
        Self {
            murine_id: murine_id.into(),
            human_id: Some(human_id.into()),
            identity,
            positivity,
        }
    }

    pub fn not_found(murine_id: impl Into<String>) -> Self {
        Self {
            murine_id: murine_id.into(),
            human_id: None,
            identity: None,
            positivity: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    /// Resolved records, strictly in input order.
    pub records: Vec<OrthologRecord>,
    /// The rendered report, ready to load.
    pub csv_output: String,
    pub not_found_count: usize,
    pub error_count: usize,
}

/// What `EtlEngine::run` hands back for the final summary line.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Destination the report was loaded to ("-" for stdout).
    pub output_path: String,
    pub not_found_count: usize,
    pub error_count: usize,
}
