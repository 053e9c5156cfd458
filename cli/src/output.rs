use bmhtml::error::{BmError, Result};
use std::fmt;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Where the rendered document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `None` and `-` mean standard output
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            None => Destination::Stdout,
            Some(p) if p.as_os_str() == "-" => Destination::Stdout,
            Some(p) => Destination::File(p.to_path_buf()),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => write!(f, "standard output"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Run `write` against a buffered writer for `dest`.
///
/// File output goes to a temporary file next to the target, which replaces the
/// target only after `write` and the final flush succeed. On any failure the
/// temporary file is removed and the target is left as it was.
pub fn with_writer<F>(dest: &Destination, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    match dest {
        Destination::Stdout => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write(&mut out)?;
            out.flush()?;
        }
        Destination::File(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };

            let mut tmp = NamedTempFile::new_in(dir).map_err(|e| BmError::at_path(dir, e))?;
            {
                let mut out = BufWriter::new(&mut tmp);
                write(&mut out)?;
                out.flush().map_err(|e| BmError::at_path(path, e))?;
            }
            tmp.persist(path).map_err(|e| BmError::at_path(path, e.error))?;
        }
    }

    Ok(())
}
