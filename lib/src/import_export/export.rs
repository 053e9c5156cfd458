use crate::error::{BmError, Result};
use crate::html::{anchor, each, raw, tag, text, Fragment};
use crate::models::tree::{Folder, Tree};
use log::{debug, warn};
use std::io::{self, Write};

/// Title used when none is configured
pub const DEFAULT_TITLE: &str = "Bookmarks";

const HEAD_OPEN: &str = "<!DOCTYPE HTML><html>\n<head>\n<meta charset=\"utf-8\"/>";
const HEAD_CLOSE: &str = "<style> ul { list-style-type: disc; } </style>\n</head>\n";
const DOC_CLOSE: &str = "</html>\n";

fn folder_name(folder: &Folder) -> impl Fragment + '_ {
    tag("h4", text(folder.name()))
}

fn folder_links(folder: &Folder) -> impl Fragment + '_ {
    (!folder.links.is_empty()).then(|| {
        tag(
            "dl",
            each(&folder.links, |link| tag("dt", anchor(&link.url, link.name()))),
        )
    })
}

/// `<ul>` of subfolders, each rendered recursively inside an `<li>`.
/// Nothing at all for an empty slice.
struct FolderList<'a>(&'a [Folder]);

impl Fragment for FolderList<'_> {
    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        if self.0.is_empty() {
            return Ok(());
        }

        tag(
            "ul",
            each(self.0, |folder| {
                tag(
                    "li",
                    (
                        folder_name(folder),
                        folder_links(folder),
                        FolderList(&folder.folders),
                    ),
                )
            }),
        )
        .write_to(out)
    }
}

/// Render `folders` as a complete HTML document titled "Bookmarks"
pub fn render<W: Write + ?Sized>(folders: &[Folder], out: &mut W) -> io::Result<()> {
    render_titled(DEFAULT_TITLE, folders, out)
}

pub fn render_titled<W: Write + ?Sized>(
    title: &str,
    folders: &[Folder],
    out: &mut W,
) -> io::Result<()> {
    (
        raw(HEAD_OPEN),
        tag("title", text(title)),
        raw(HEAD_CLOSE),
        (tag("body", FolderList(folders)), raw(DOC_CLOSE)),
    )
        .write_to(out)
}

/// Trait for exporting a bookmark tree to different formats
pub trait TreeExporter {
    fn export(&self, tree: &Tree, out: &mut dyn Write) -> Result<()>;
}

/// HTML document exporter
pub struct HtmlExporter {
    pub title: String,
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl TreeExporter for HtmlExporter {
    fn export(&self, tree: &Tree, out: &mut dyn Write) -> Result<()> {
        if !tree.root.links.is_empty() {
            warn!(
                "{} link(s) directly under the root are not part of any folder and are skipped",
                tree.root.links.len()
            );
        }
        debug!("Rendering {} top-level folders", tree.folders().len());
        render_titled(&self.title, tree.folders(), out)?;
        Ok(())
    }
}

/// Indented plain-text listing of folders and links, for inspecting a tree
pub struct OutlineExporter;

impl OutlineExporter {
    fn write_folder(folder: &Folder, level: usize, out: &mut dyn Write) -> io::Result<()> {
        let indent = " ".repeat(level);
        writeln!(
            out,
            "{}({}) Folder[{:?}]: {:?}",
            indent,
            level,
            folder.key(),
            folder.name()
        )?;

        let level = level + 1;
        let indent = " ".repeat(level);
        for link in &folder.links {
            writeln!(
                out,
                "{}({}) Link[{:?}]: {:?} (added {})",
                indent,
                level,
                link.key(),
                link.name(),
                link.node.added
            )?;
        }

        for child in &folder.folders {
            Self::write_folder(child, level, out)?;
        }

        Ok(())
    }
}

impl TreeExporter for OutlineExporter {
    fn export(&self, tree: &Tree, out: &mut dyn Write) -> Result<()> {
        Self::write_folder(&tree.root, 0, out)?;
        Ok(())
    }
}

/// The typed tree as pretty-printed JSON
pub struct JsonExporter;

impl TreeExporter for JsonExporter {
    fn export(&self, tree: &Tree, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, &tree.root)?;
        writeln!(out)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Outline,
    Json,
}

impl ExportFormat {
    pub fn from_string(format: &str) -> Result<Self> {
        match format.to_lowercase().as_str() {
            "html" | "htm" => Ok(ExportFormat::Html),
            "outline" | "tree" | "txt" => Ok(ExportFormat::Outline),
            "json" => Ok(ExportFormat::Json),
            _ => Err(BmError::InvalidInput(format!(
                "Unsupported export format: {}",
                format
            ))),
        }
    }

    pub fn exporter(self, title: &str) -> Box<dyn TreeExporter> {
        match self {
            ExportFormat::Html => Box::new(HtmlExporter {
                title: title.to_string(),
            }),
            ExportFormat::Outline => Box::new(OutlineExporter),
            ExportFormat::Json => Box::new(JsonExporter),
        }
    }
}

/// Export `tree` in `format` to `out`
pub fn export_tree(
    tree: &Tree,
    format: ExportFormat,
    title: &str,
    out: &mut dyn Write,
) -> Result<()> {
    format.exporter(title).export(tree, out)
}
