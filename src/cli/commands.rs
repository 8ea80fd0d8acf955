use std::{
    fs,
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, anyhow};
use consent_reconcile::{ComparisonResult, Reconciler, Selection, compare_with_options};
use log::info;

use crate::cli::{
    args::{AlgorithmArg, TokenizerArg},
    config::Config,
    errors::{CliError, input_error, other_error, reconcile_error},
    read_document::read_document,
};

#[derive(Debug)]
pub struct CompareCommand {
    pub document_a: PathBuf,
    pub document_b: PathBuf,
    pub output: Option<PathBuf>,
    pub tokenizer: Option<TokenizerArg>,
    pub algorithm: Option<AlgorithmArg>,
}

#[derive(Debug)]
pub struct MergeCommand {
    pub comparison: PathBuf,
    pub selection: PathBuf,
    pub output: Option<PathBuf>,
    pub spans: bool,
}

pub fn compare(command: &CompareCommand, config: &Config) -> Result<(), CliError> {
    let mut options = config.comparison_options();
    if let Some(tokenizer) = command.tokenizer {
        options.tokenizer = tokenizer.into();
    }
    if let Some(algorithm) = command.algorithm {
        options.algorithm = algorithm.into();
    }

    let a = read_document(&command.document_a, config)?;
    let b = read_document(&command.document_b, config)?;

    let comparison = compare_with_options(&a, &b, &options)
        .map_err(|error| reconcile_error(error, "Failed to compare the documents"))?;
    info!(
        "Found {} disagreement(s) between '{}' and '{}'",
        comparison.diff_table().len(),
        command.document_a.display(),
        command.document_b.display()
    );

    let json = serde_json::to_string_pretty(&comparison)
        .context("Failed to serialize the comparison")
        .map_err(other_error)?;

    write_output(command.output.as_deref(), &json)
}

pub fn merge(command: &MergeCommand) -> Result<(), CliError> {
    let comparison = load_comparison(&command.comparison)?;
    let selection = load_selection(&command.selection)?;

    let mut reconciler = Reconciler::new(comparison)
        .map_err(|error| reconcile_error(error, "The comparison file is inconsistent"))?;
    reconciler
        .apply_selection(&selection)
        .map_err(|error| reconcile_error(error, "The selection file does not fit the comparison"))?;

    if !reconciler.is_complete() {
        info!("Unresolved disagreements: {:?}", reconciler.unresolved_ids());
    }

    let merged = if command.spans {
        let spans = reconciler
            .assemble_spans()
            .map_err(|error| reconcile_error(error, "Failed to assemble the merged document"))?;
        serde_json::to_string_pretty(&spans)
            .context("Failed to serialize the merged spans")
            .map_err(other_error)?
    } else {
        reconciler
            .assemble()
            .map_err(|error| reconcile_error(error, "Failed to assemble the merged document"))?
    };

    write_output(command.output.as_deref(), &merged)
}

fn load_comparison(path: &Path) -> Result<ComparisonResult, CliError> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Cannot read the comparison from '{}'", path.display()))
        .map_err(input_error)?;

    serde_json::from_str(&contents)
        .with_context(|| format!("'{}' is not a comparison", path.display()))
        .map_err(input_error)
}

fn load_selection(path: &Path) -> Result<Selection, CliError> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Cannot read the selection from '{}'", path.display()))
        .map_err(input_error)?;

    if contents.trim().is_empty() {
        return Ok(Selection::new());
    }

    serde_yaml::from_str(&contents)
        .with_context(|| format!("'{}' is not a selection", path.display()))
        .map_err(input_error)
}

fn write_output(output: Option<&Path>, contents: &str) -> Result<(), CliError> {
    match output {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write '{}'", path.display()))
                .map_err(other_error)?;
            info!("Wrote '{}'", path.display());
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|error| other_error(anyhow!(error).context("Failed to write to stdout")))
        }
    }
}
