use std::{
    fs,
    path::Path,
    process::{Command, Stdio},
};

use anyhow::{Context as _, anyhow};
use consent_reconcile::string_or_nothing;
use log::{debug, warn};

use crate::cli::{
    config::Config,
    errors::{CliError, input_error},
};

/// Load a document as text. PDFs go through `pdftotext`, everything else has
/// to be UTF-8 already.
pub fn read_document(path: &Path, config: &Config) -> Result<String, CliError> {
    let size = fs::metadata(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))
        .map_err(input_error)?
        .len();

    if size > config.max_document_bytes {
        return Err(input_error(anyhow!(
            "'{}' is {size} bytes, the limit is {} bytes",
            path.display(),
            config.max_document_bytes
        )));
    }

    if is_pdf(path) {
        return extract_pdf_text(path, config);
    }

    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))
        .map_err(input_error)?;

    string_or_nothing(&bytes)
        .map(str::to_owned)
        .ok_or_else(|| input_error(anyhow!("'{}' is not UTF-8 text", path.display())))
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("pdf"))
}

fn extract_pdf_text(path: &Path, config: &Config) -> Result<String, CliError> {
    debug!(
        "Extracting text from '{}' with '{}'",
        path.display(),
        config.pdftotext_path.display()
    );

    let output = Command::new(&config.pdftotext_path)
        .arg(path)
        .arg("-")
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("Failed to run '{}'", config.pdftotext_path.display()))
        .map_err(input_error)?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() {
        return Err(input_error(anyhow!(
            "pdftotext failed on '{}' ({}): {}",
            path.display(),
            output.status,
            stderr.trim()
        )));
    }
    if !stderr.trim().is_empty() {
        warn!("pdftotext reported on '{}': {}", path.display(), stderr.trim());
    }

    String::from_utf8(output.stdout)
        .with_context(|| format!("pdftotext produced non-UTF-8 text for '{}'", path.display()))
        .map_err(input_error)
}
