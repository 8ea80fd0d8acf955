use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use consent_reconcile::{AlignmentAlgorithm, BuiltinTokenizer};

use crate::cli::color_when::ColorWhen;

/// Compare two versions of a consent form and merge them from per-difference
/// choices
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// YAML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    #[arg(
            long,
            global = true,
            value_name = "WHEN",
            default_value_t = ColorWhen::Auto,
            default_missing_value = "always",
            num_args = 0..=1,
            value_enum
        )]
    pub color: ColorWhen,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare two documents and write the comparison as JSON
    Compare {
        /// First document (plain text, or PDF through pdftotext)
        document_a: PathBuf,

        /// Second document (plain text, or PDF through pdftotext)
        document_b: PathBuf,

        /// Where to write the comparison, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Granularity of the comparison, overrides the configuration
        #[arg(long, value_enum)]
        tokenizer: Option<TokenizerArg>,

        /// Diff algorithm, overrides the configuration
        #[arg(long, value_enum)]
        algorithm: Option<AlgorithmArg>,
    },

    /// Assemble the merged document from a comparison and a selection file
    Merge {
        /// JSON written by `compare`
        comparison: PathBuf,

        /// YAML mapping every disagreement id to `a` or `b`
        selection: PathBuf,

        /// Where to write the merged document, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write JSON spans tagged with their origin instead of plain text
        #[arg(long)]
        spans: bool,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenizerArg {
    Word,
    Line,
    Character,
}

impl From<TokenizerArg> for BuiltinTokenizer {
    fn from(tokenizer: TokenizerArg) -> Self {
        match tokenizer {
            TokenizerArg::Word => BuiltinTokenizer::Word,
            TokenizerArg::Line => BuiltinTokenizer::Line,
            TokenizerArg::Character => BuiltinTokenizer::Character,
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum AlgorithmArg {
    Auto,
    Lcs,
    Myers,
}

impl From<AlgorithmArg> for AlignmentAlgorithm {
    fn from(algorithm: AlgorithmArg) -> Self {
        match algorithm {
            AlgorithmArg::Auto => AlignmentAlgorithm::Auto,
            AlgorithmArg::Lcs => AlignmentAlgorithm::Lcs,
            AlgorithmArg::Myers => AlignmentAlgorithm::Myers,
        }
    }
}
