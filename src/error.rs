//! Error types for xmind2docx

use std::path::PathBuf;
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML encoding error: {0}")]
    XmlEncoding(#[from] quick_xml::encoding::EncodingError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid part URI: {0}")]
    InvalidPartUri(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("cannot read {}: no structured content entry and legacy parsing failed", .0.display())]
    UnrecognizedFormat(PathBuf),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
