//! # xmind2docx
//!
//! Convert XMind mind maps into Word DOCX documents.
//!
//! ## Features
//!
//! - Branch topics become headings, leaf topics become bulleted text
//! - Embedded raster images are carried over as inline pictures
//! - An auto-updating table-of-contents field is inserted
//! - Legacy (XML-based) XMind files are supported without images
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use xmind2docx::{convert, Options};
//!
//! convert("map.xmind".as_ref(), "map.docx".as_ref(), &Options::default())?;
//! ```

pub mod docx;
pub mod error;
pub mod opc;
pub mod project;
pub mod xmind;
pub mod xml;

pub use docx::Document;
pub use error::{Error, Result};
pub use xmind::{Resources, Topic, Workbook};

use std::fs;
use std::path::Path;

/// Title used when the root topic has none
const DEFAULT_TITLE: &str = "XMind";

/// Conversion settings
#[derive(Clone, Debug)]
pub struct Options {
    /// Width of embedded images, in inches
    pub img_width: f64,
    /// Insert the table-of-contents field
    pub toc: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            img_width: 6.0,
            toc: true,
        }
    }
}

/// Convert an XMind file into a DOCX document at `output`.
///
/// Parent directories of `output` are created as needed.
pub fn convert(source: &Path, output: &Path, options: &Options) -> Result<()> {
    let workbook = xmind::load(source)?;

    let mut doc = Document::new();
    doc.set_title(workbook.root.title().unwrap_or(DEFAULT_TITLE));
    if options.toc {
        doc.add_toc_field();
    }
    project::project(
        &mut doc,
        &workbook.root,
        &workbook.resources,
        options.img_width,
    );

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    doc.save(output)?;

    log::info!(
        "converted {} -> {} ({} blocks, {} resources)",
        source.display(),
        output.display(),
        doc.paragraph_count(),
        workbook.resources.len(),
    );

    Ok(())
}
