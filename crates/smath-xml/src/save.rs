use std::fs;
use std::io::{self, Write};
use std::path::Path;

use smath_model::Worksheet;
use tempfile::NamedTempFile;

use crate::write::to_xml_bytes;
use crate::WriteError;

/// Serializes `worksheet` and writes it to `path`, creating parent directories.
///
/// The document is written to a temporary file next to `path` and renamed into
/// place, so an existing file is either fully replaced or left untouched.
pub fn save(worksheet: &Worksheet, path: impl AsRef<Path>) -> Result<(), WriteError> {
    let path = path.as_ref();
    let bytes = to_xml_bytes(worksheet)?;
    atomic_write_bytes(path, &bytes)?;
    log::debug!("saved worksheet to {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn parent_dir_or_dot(path: &Path) -> &Path {
    // `Path::parent` is `Some("")` for bare file names.
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn atomic_write_bytes(dest: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = parent_dir_or_dot(dest);
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.as_file_mut().write_all(bytes)?;
    tmp.as_file_mut().flush()?;
    tmp.as_file().sync_all()?;

    tmp.persist(dest).map_err(|err| err.error)?;
    Ok(())
}
