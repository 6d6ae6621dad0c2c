//! Output formats for enumeration results.

use std::borrow::Borrow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{PartitionError, Result};
use crate::partition::Partition;
use crate::request::{Mode, Request};

#[derive(Debug, Serialize)]
struct Report<'a> {
    n: u32,
    mode: Mode,
    count: usize,
    partitions: &'a [Partition],
}

/// Write one partition per line. Returns the number of lines written.
pub fn write_text<W, I>(out: &mut W, partitions: I, sep: &str) -> std::io::Result<usize>
where
    W: Write,
    I: IntoIterator,
    I::Item: Borrow<Partition>,
{
    let mut written = 0;
    for p in partitions {
        writeln!(out, "{}", p.borrow().join(sep))?;
        written += 1;
    }
    Ok(written)
}

/// Pretty-printed JSON report of a finished enumeration.
pub fn to_json(req: &Request, partitions: &[Partition]) -> Result<String> {
    let report = Report {
        n: req.n,
        mode: req.mode,
        count: partitions.len(),
        partitions,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Plain list files: one partition per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFile {
    /// Space-separated `.txt`.
    Txt,
    /// Comma-separated `.csv`.
    Csv,
}

impl ListFile {
    pub fn extension(self) -> &'static str {
        match self {
            ListFile::Txt => "txt",
            ListFile::Csv => "csv",
        }
    }

    pub fn separator(self) -> &'static str {
        match self {
            ListFile::Txt => " ",
            ListFile::Csv => ",",
        }
    }

    /// `<dir>/<tag>.<ext>`, named like the FORM file.
    pub fn path(self, dir: &Path, req: &Request) -> PathBuf {
        dir.join(format!("{}.{}", req.tag(), self.extension()))
    }
}

/// Create `dir` if needed and write the list file of kind `kind` for `req` into it.
pub fn export_list<I>(dir: &Path, req: &Request, kind: ListFile, partitions: I) -> Result<PathBuf>
where
    I: IntoIterator,
    I::Item: Borrow<Partition>,
{
    let path = kind.path(dir, req);
    let io_err = |source| PartitionError::Io {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(|source| PartitionError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(File::create(&path).map_err(io_err)?);
    let lines = write_text(&mut out, partitions, kind.separator()).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    info!(path = %path.display(), lines, "wrote list file");
    Ok(path)
}
