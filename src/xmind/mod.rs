//! XMind source-format reading
//!
//! Modern archives carry a JSON content entry plus binary resources; older
//! ones fall back to an XML content entry without resources. Both produce the
//! same `Topic` tree.

mod legacy;
mod resources;
mod topic;

pub use resources::Resources;
pub use topic::{ChildLists, ImageRef, Topic};

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::read::ZipArchive;

/// Name suffix of the structured-content entry in modern archives
const CONTENT_JSON: &str = "content.json";

/// A parsed source file: the root topic plus its embedded resources
#[derive(Clone, Debug)]
pub struct Workbook {
    pub root: Topic,
    pub resources: Resources,
}

/// One sheet of the structured content entry
#[derive(Debug, Deserialize)]
struct Sheet {
    #[serde(rename = "rootTopic")]
    root_topic: Option<Topic>,
}

/// Load a source file, trying the structured format first and the legacy
/// format second. Fails only when neither yields a root topic.
pub fn load(path: &Path) -> Result<Workbook> {
    if let Some(workbook) = from_content_json(path) {
        return Ok(workbook);
    }
    if let Some(workbook) = legacy::load(path) {
        return Ok(workbook);
    }
    Err(Error::UnrecognizedFormat(path.to_path_buf()))
}

/// Structured-format attempt; any failure degrades to "no result" so the
/// caller can try the legacy path.
fn from_content_json(path: &Path) -> Option<Workbook> {
    match read_content_json(path) {
        Ok(found) => found,
        Err(err) => {
            debug!("structured parse of {} failed: {}", path.display(), err);
            None
        }
    }
}

fn read_content_json(path: &Path) -> Result<Option<Workbook>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let Some(entry_name) = archive
        .file_names()
        .find(|name| name.ends_with(CONTENT_JSON))
        .map(String::from)
    else {
        return Ok(None);
    };

    let resources = extract_resources(&mut archive)?;

    let mut data = Vec::new();
    archive.by_name(&entry_name)?.read_to_end(&mut data)?;
    let sheets: Vec<Sheet> = serde_json::from_slice(&data)?;

    let root = sheets.into_iter().next().and_then(|sheet| sheet.root_topic);
    Ok(root.map(|root| Workbook { root, resources }))
}

/// Pull every file under the resource directory into memory
fn extract_resources<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Resources> {
    let mut assets = Resources::new();

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let name = file.name().to_string();

        if !name.starts_with(resources::RESOURCE_DIR) || name.ends_with('/') {
            continue;
        }

        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        assets.insert(name, data);
    }

    Ok(assets)
}
