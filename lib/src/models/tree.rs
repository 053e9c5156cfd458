use chrono::{DateTime, Utc};
use serde::Serialize;

/// Data shared by every bookmark entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub name: String,
    /// Position in the source structure: the object key, or `#<index>` inside a `children` array.
    /// Unique among siblings only.
    pub key: String,
    pub added: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

/// A single bookmark
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    #[serde(flatten)]
    pub node: Node,
    pub url: String,
}

/// Bookmark container, children kept in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Folder {
    #[serde(flatten)]
    pub node: Node,
    pub links: Vec<Link>,
    pub folders: Vec<Folder>,
}

impl Folder {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            links: Vec::new(),
            folders: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.node.name
    }

    pub fn key(&self) -> &str {
        &self.node.key
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.folders.is_empty()
    }

    /// Number of links in this folder and all of its subfolders
    pub fn link_count(&self) -> usize {
        self.links.len() + self.folders.iter().map(Folder::link_count).sum::<usize>()
    }

    /// Number of subfolders at any depth, not counting `self`
    pub fn folder_count(&self) -> usize {
        self.folders.len() + self.folders.iter().map(Folder::folder_count).sum::<usize>()
    }

    /// Nesting depth; a folder without subfolders has depth 1
    pub fn depth(&self) -> usize {
        1 + self.folders.iter().map(Folder::depth).max().unwrap_or(0)
    }
}

impl Link {
    pub fn name(&self) -> &str {
        &self.node.name
    }

    pub fn key(&self) -> &str {
        &self.node.key
    }
}

/// Child produced by the tree builder for one `(key, value)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Link(Link),
    Folder(Folder),
}

/// A complete bookmark hierarchy
///
/// The root is synthetic: key and name are `"roots"`, `added` is the vendor epoch
/// and it has no modification time. Its subfolders are the named top-level
/// folders of the store (bookmarks bar, other bookmarks, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tree {
    pub root: Folder,
}

impl Tree {
    pub fn folders(&self) -> &[Folder] {
        &self.root.folders
    }
}
