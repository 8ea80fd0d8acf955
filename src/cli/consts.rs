/// Documents above this size are rejected before they are compared.
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 1024 * 1024;

pub const DEFAULT_PDFTOTEXT_PATH: &str = "pdftotext";

pub const EXIT_NOT_READY: u8 = 65;
pub const EXIT_INPUT: u8 = 66;
pub const EXIT_INTERNAL: u8 = 70;
pub const EXIT_CONFIG: u8 = 78;
