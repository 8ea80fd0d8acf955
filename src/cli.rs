pub mod args;
pub mod color_when;
pub mod commands;
pub mod config;
pub mod consts;
pub mod errors;
pub mod read_document;
