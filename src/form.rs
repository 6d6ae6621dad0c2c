//! FORM header-file export.
//!
//! A `.hf` file is a FORM fragment that sums `ipart(...)` over every partition, so a
//! FORM program can `#include` the precomputed list instead of enumerating it itself:
//!
//! ```text
//! * Generated with options ['4', 'u'] on Sun Oct 18 12:00:00 2026
//!    + ipart(4)
//!    + ipart(3,1)
//! ```

use std::borrow::Borrow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use crate::error::{PartitionError, Result};
use crate::partition::Partition;
use crate::request::Request;

/// `<dir>/<n><mode letter>[<length>].hf`, e.g. `5o.hf` or `4f2.hf`.
pub fn form_path(dir: &Path, req: &Request) -> PathBuf {
    dir.join(format!("{}.hf", req.tag()))
}

/// Write the header comment and one `+ ipart(..)` term per partition.
///
/// `options` are the command-line arguments recorded in the header.
pub fn write_form<W, I>(
    out: &mut W,
    options: &[String],
    generated: DateTime<Local>,
    partitions: I,
) -> std::io::Result<usize>
where
    W: Write,
    I: IntoIterator,
    I::Item: Borrow<Partition>,
{
    let quoted: Vec<String> = options.iter().map(|o| format!("'{o}'")).collect();
    writeln!(
        out,
        "* Generated with options [{}] on {}",
        quoted.join(", "),
        generated.format("%c")
    )?;

    let mut terms = 0;
    for p in partitions {
        writeln!(out, "   + ipart({})", p.borrow().join(","))?;
        terms += 1;
    }
    Ok(terms)
}

/// Create `dir` if needed and write the FORM file for `req` into it.
pub fn export<I>(dir: &Path, req: &Request, options: &[String], partitions: I) -> Result<PathBuf>
where
    I: IntoIterator,
    I::Item: Borrow<Partition>,
{
    let path = form_path(dir, req);
    let io_err = |source| PartitionError::Io {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(|source| PartitionError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let file = File::create(&path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    let terms = write_form(&mut out, options, Local::now(), partitions).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    info!(path = %path.display(), terms, "wrote FORM file");
    Ok(path)
}
