use crate::error::{BmError, Result};
use crate::models::errors::{ParseError, StructuralError};
use crate::models::tree::{Entry, Folder, Link, Node, Tree};
use crate::scalar::{self, Object};
use crate::timestamp;
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

type ParseResult<T> = std::result::Result<T, ParseError>;

/// Key and name of the synthetic root folder
pub const ROOT_KEY: &str = "roots";

/// Trait for importing bookmark trees from different sources
pub trait BookmarkImporter {
    fn import(&self, path: &Path) -> Result<Tree>;
}

/// Chromium-family JSON bookmark store importer (Chrome, Opera, Edge, ...)
pub struct JsonImporter;

impl BookmarkImporter for JsonImporter {
    fn import(&self, path: &Path) -> Result<Tree> {
        let doc = load_document(path)?;
        let tree = parse_document(&doc)?;
        debug!(
            "Parsed {:?}: {} folders, {} links",
            path,
            tree.root.folder_count(),
            tree.root.link_count()
        );
        Ok(tree)
    }
}

/// Read and decode a bookmarks file without interpreting it
pub fn load_document(path: &Path) -> Result<Value> {
    let mut json_content = fs::read(path).map_err(|e| BmError::at_path(path, e))?;
    debug!("Read {} bytes from {:?}", json_content.len(), path);
    let doc: Value = simd_json::serde::from_slice(&mut json_content)?;
    Ok(doc)
}

/// Import a bookmark tree from a JSON bookmarks file
pub fn import_bookmarks(path: &Path) -> Result<Tree> {
    JsonImporter.import(path)
}

/// Build a tree from a whole bookmarks document, i.e. an object with a `roots` field
pub fn parse_document(doc: &Value) -> ParseResult<Tree> {
    match doc.get(ROOT_KEY) {
        Some(roots) => parse(roots),
        None => Err(StructuralError::InvalidRootType.into()),
    }
}

/// Build a tree from the `roots` mapping of a bookmarks document.
///
/// Parsing stops at the first problem; the returned error carries the path of
/// keys from `roots` down to the offending node.
pub fn parse(roots: &Value) -> ParseResult<Tree> {
    let Value::Object(data) = roots else {
        return Err(StructuralError::InvalidRootType.into());
    };

    let root = build_group(ROOT_KEY, data).map_err(|e| e.within(ROOT_KEY))?;
    Ok(Tree { root })
}

/// Build whatever `item` describes. Errors come back qualified with `key`.
fn build_entry(key: &str, item: &Value) -> ParseResult<Entry> {
    dispatch(key, item).map_err(|e| e.within(key))
}

fn dispatch(key: &str, item: &Value) -> ParseResult<Entry> {
    let Value::Object(data) = item else {
        return Err(StructuralError::UnexpectedNodeType.into());
    };

    match data.get("type") {
        Some(Value::String(tag)) => match tag.as_str() {
            "folder" => build_folder(key, data).map(Entry::Folder),
            "url" => build_link(key, data).map(Entry::Link),
            other => Err(StructuralError::UnknownType(other.to_string()).into()),
        },
        Some(_) => Err(StructuralError::TypeTagNotString.into()),
        // Untyped: a named top-level folder, or a plain grouping object
        None if data.contains_key("name") => build_folder(key, data).map(Entry::Folder),
        None => build_group(key, data).map(Entry::Folder),
    }
}

fn read_node(key: &str, data: &Object) -> ParseResult<Node> {
    Ok(Node {
        name: scalar::read_string("name", data)?.to_string(),
        key: key.to_string(),
        added: scalar::read_timestamp("date_added", data)?,
        modified: scalar::read_optional_timestamp("date_modified", data)?,
    })
}

fn build_link(key: &str, data: &Object) -> ParseResult<Link> {
    let node = read_node(key, data)?;
    let url = scalar::read_string("url", data)?.to_string();
    Ok(Link { node, url })
}

fn build_folder(key: &str, data: &Object) -> ParseResult<Folder> {
    let mut folder = Folder::new(read_node(key, data)?);

    match data.get("children") {
        None => {}
        Some(Value::Array(children)) => {
            for (i, child) in children.iter().enumerate() {
                add_child(&mut folder, &format!("#{}", i), child)?;
            }
        }
        Some(_) => return Err(StructuralError::ChildrenNotArray.into()),
    }

    Ok(folder)
}

/// Folder made of every entry of an object, named after its own key
fn build_group(key: &str, data: &Object) -> ParseResult<Folder> {
    let mut folder = Folder::new(Node {
        name: key.to_string(),
        key: key.to_string(),
        added: timestamp::vendor_epoch(),
        modified: None,
    });

    for (k, v) in data {
        add_child(&mut folder, k, v)?;
    }

    Ok(folder)
}

fn add_child(folder: &mut Folder, key: &str, item: &Value) -> ParseResult<()> {
    match build_entry(key, item)? {
        Entry::Link(link) => folder.links.push(link),
        Entry::Folder(child) => folder.folders.push(child),
    }
    Ok(())
}
