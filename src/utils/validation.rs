use crate::utils::error::{EtlError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// Ensembl stable gene IDs: "ENS", an optional species code, "G", 11 digits.
// Covers e.g. ENSG00000139618 (human), ENSRNOG00000016516 (rat),
// ENSMUSG00000111497 (mouse).
static ENSEMBL_GENE_ID: OnceLock<Regex> = OnceLock::new();

fn ensembl_gene_id_pattern() -> &'static Regex {
    ENSEMBL_GENE_ID
        .get_or_init(|| Regex::new(r"^ENS[A-Z]{0,6}G\d{11}$").expect("hard-coded pattern is valid"))
}

pub fn is_valid_ensembl_id(id: &str) -> bool {
    ensembl_gene_id_pattern().is_match(id.trim())
}

pub fn validate_ensembl_id(id: &str) -> Result<()> {
    if is_valid_ensembl_id(id) {
        Ok(())
    } else {
        Err(EtlError::InvalidGeneIdError { id: id.to_string() })
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| EtlError::MissingConfigError {
        field: field_name.to_string(),
    })
}
