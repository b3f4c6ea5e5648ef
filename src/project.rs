//! Tree-to-document projection
//!
//! Walks the topic tree depth-first and appends one block per topic to the
//! document: a heading for the root and every branch, a bulleted paragraph
//! for leaves, plus an inline picture when the topic carries one.

use crate::docx::Document;
use crate::xmind::{Resources, Topic};
use log::debug;

/// Left indent applied to bulleted leaves, per nesting level below the root
/// (0.25 inch in twentieths of a point)
const INDENT_TWIPS_PER_LEVEL: u32 = 360;

/// Word heading styles stop at nine levels; deeper topics collapse onto 9
const MAX_HEADING_LEVEL: usize = 9;

/// Narrowest sensible picture width
const MIN_IMG_WIDTH_IN: f64 = 0.1;

/// Project a topic tree into the document, starting at heading level 1.
pub fn project(doc: &mut Document, root: &Topic, assets: &Resources, img_width_in: f64) {
    project_topic(doc, root, assets, 1, img_width_in.max(MIN_IMG_WIDTH_IN));
}

fn project_topic(
    doc: &mut Document,
    topic: &Topic,
    assets: &Resources,
    level: usize,
    img_width_in: f64,
) {
    let title = sanitize_title(topic.title().unwrap_or(""));

    if level == 1 || !topic.is_leaf() {
        doc.add_heading(&title, level.min(MAX_HEADING_LEVEL) as u8);
    } else {
        let indent = (level - 1) as u32 * INDENT_TWIPS_PER_LEVEL;
        doc.add_bullet(&title).set_left_indent_twips(indent);
    }

    // A broken or unsupported image only costs its own picture
    if let Some(src) = topic.image_src() {
        match assets.get(src) {
            Some(data) => {
                if let Err(err) = doc.add_picture(data, img_width_in) {
                    debug!("skipping image {}: {}", src, err);
                }
            }
            None => debug!("image {} not found among archive resources", src),
        }
    }

    for child in topic.children() {
        project_topic(doc, child, assets, level + 1, img_width_in);
    }
}

/// Strip characters below the space code point (keeping tab, newline and
/// carriage return), trim, and substitute a period for an empty result so the
/// document never receives an empty heading or bullet.
pub fn sanitize_title(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|&c| c >= ' ' || matches!(c, '\t' | '\n' | '\r'))
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        ".".to_string()
    } else {
        trimmed.to_string()
    }
}
