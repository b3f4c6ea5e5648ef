//! Legacy XMind archive parsing (content.xml)
//!
//! Older XMind files carry the outline as XML instead of JSON. Only titles
//! and child topics survive on this path; embedded resources do not.

use crate::error::Result;
use crate::xmind::{Resources, Topic, Workbook};
use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use zip::read::ZipArchive;

/// Name of the legacy content entry
const CONTENT_XML: &str = "content.xml";

/// Load the first sheet's root topic from a legacy archive.
///
/// Returns `None` on any failure so the caller can escalate; legacy files
/// never contribute image resources.
pub(crate) fn load(path: &Path) -> Option<Workbook> {
    match read_content_xml(path) {
        Ok(root) => root.map(|root| Workbook {
            root,
            resources: Resources::new(),
        }),
        Err(err) => {
            debug!("legacy parse of {} failed: {}", path.display(), err);
            None
        }
    }
}

fn read_content_xml(path: &Path) -> Result<Option<Topic>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let mut xml = String::new();
    match archive.by_name(CONTENT_XML) {
        Ok(mut entry) => {
            entry.read_to_string(&mut xml)?;
        }
        Err(_) => return Ok(None),
    }

    parse_content_xml(&xml)
}

/// Parse the first `<topic>` in document order, which is the first sheet's
/// root topic.
fn parse_content_xml(xml: &str) -> Result<Option<Topic>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().local_name().as_ref() == b"topic" => {
                let topic = parse_topic(&mut reader)?;
                return Ok(Some(topic));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
        buf.clear();
    }
}

/// Parse a topic element (after its start tag was read)
fn parse_topic<R: std::io::BufRead>(reader: &mut Reader<R>) -> Result<Topic> {
    let mut topic = Topic::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = e.name();
                let local = name.local_name();

                match local.as_ref() {
                    b"title" if topic.title.is_none() => {
                        topic.title = Some(read_text(reader, b"title")?);
                    }
                    b"children" => {
                        parse_children(reader, &mut topic)?;
                    }
                    _ => {
                        // Notes, markers, extensions - not carried over
                        skip_element(reader, &e)?;
                    }
                }
            }
            Event::End(e) => {
                if e.name().local_name().as_ref() == b"topic" {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(topic)
}

/// Parse a children element into the attached/detached lists
fn parse_children<R: std::io::BufRead>(reader: &mut Reader<R>, topic: &mut Topic) -> Result<()> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = e.name();
                let local = name.local_name();

                if local.as_ref() == b"topics" {
                    let kind = crate::xml::get_attr(&e, "type").unwrap_or_default();
                    let parsed = parse_topics_list(reader)?;
                    match kind.as_str() {
                        "detached" => topic.children.detached.extend(parsed),
                        _ => topic.children.attached.extend(parsed),
                    }
                } else {
                    skip_element(reader, &e)?;
                }
            }
            Event::End(e) => {
                if e.name().local_name().as_ref() == b"children" {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Parse a topics list element into a vector of topics
fn parse_topics_list<R: std::io::BufRead>(reader: &mut Reader<R>) -> Result<Vec<Topic>> {
    let mut topics = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if e.name().local_name().as_ref() == b"topic" {
                    topics.push(parse_topic(reader)?);
                } else {
                    skip_element(reader, &e)?;
                }
            }
            Event::End(e) => {
                if e.name().local_name().as_ref() == b"topics" {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(topics)
}

/// Read the text content of the current element until its end tag
fn read_text<R: std::io::BufRead>(reader: &mut Reader<R>, end: &[u8]) -> Result<String> {
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::End(e) if e.name().local_name().as_ref() == end => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Skip an element and all its children
fn skip_element<R: std::io::BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<()> {
    let target = start.name().as_ref().to_vec();
    let mut depth = 1;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == target => depth += 1,
            Event::End(e) if e.name().as_ref() == target => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
