use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use consent_reconcile::{
    AlignmentAlgorithm, BuiltinTokenizer, ComparisonOptions, DEFAULT_LCS_CELL_LIMIT,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cli::consts::{DEFAULT_MAX_DOCUMENT_BYTES, DEFAULT_PDFTOTEXT_PATH};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: u64,

    #[serde(default = "default_tokenizer")]
    pub tokenizer: BuiltinTokenizer,

    #[serde(default = "default_algorithm")]
    pub algorithm: AlignmentAlgorithm,

    #[serde(default = "default_lcs_cell_limit")]
    pub lcs_cell_limit: usize,

    #[serde(default = "default_pdftotext_path")]
    pub pdftotext_path: PathBuf,
}

fn default_max_document_bytes() -> u64 {
    debug!("Using default max document size (bytes): {DEFAULT_MAX_DOCUMENT_BYTES}");
    DEFAULT_MAX_DOCUMENT_BYTES
}

fn default_tokenizer() -> BuiltinTokenizer {
    let tokenizer = BuiltinTokenizer::default();
    debug!("Using default tokenizer: {tokenizer}");
    tokenizer
}

fn default_algorithm() -> AlignmentAlgorithm {
    let algorithm = AlignmentAlgorithm::default();
    debug!("Using default alignment algorithm: {algorithm:?}");
    algorithm
}

fn default_lcs_cell_limit() -> usize {
    debug!("Using default LCS cell limit: {DEFAULT_LCS_CELL_LIMIT}");
    DEFAULT_LCS_CELL_LIMIT
}

fn default_pdftotext_path() -> PathBuf {
    debug!("Using default pdftotext executable: {DEFAULT_PDFTOTEXT_PATH}");
    PathBuf::from(DEFAULT_PDFTOTEXT_PATH)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_document_bytes: default_max_document_bytes(),
            tokenizer: default_tokenizer(),
            algorithm: default_algorithm(),
            lcs_cell_limit: default_lcs_cell_limit(),
            pdftotext_path: default_pdftotext_path(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                info!("Loading configuration from '{}'", path.display());
                Self::load_from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).with_context(|| {
            format!("Cannot load configuration from disk from {}", path.display())
        })?;

        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        // An empty file is a valid configuration with every default.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(contents).context("Failed to parse configuration")
    }

    pub fn comparison_options(&self) -> ComparisonOptions {
        ComparisonOptions {
            tokenizer: self.tokenizer,
            algorithm: self.algorithm,
            lcs_cell_limit: self.lcs_cell_limit,
        }
    }
}
