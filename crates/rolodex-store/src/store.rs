//! Snapshot load and save.

use std::{
  ffi::OsString,
  fs,
  io::{self, Write as _},
  path::{Path, PathBuf},
};

use rolodex_core::Directory;

use crate::Result;

/// Load the directory stored at `path`.
///
/// A missing file, an unreadable file and a snapshot that fails to parse or
/// validate all produce an empty directory.
pub fn load(path: impl AsRef<Path>) -> Directory {
  let path = path.as_ref();
  match read(path) {
    Ok(dir) => {
      tracing::debug!(path = %path.display(), contacts = dir.len(), "loaded directory");
      dir
    }
    Err(crate::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
      tracing::debug!(path = %path.display(), "no snapshot yet; starting empty");
      Directory::new()
    }
    Err(e) => {
      tracing::warn!(path = %path.display(), error = %e, "discarding unreadable snapshot");
      Directory::new()
    }
  }
}

fn read(path: &Path) -> Result<Directory> {
  let raw = fs::read(path)?;
  Ok(serde_json::from_slice(&raw)?)
}

/// Write `dir` to `path`, replacing any previous snapshot.
///
/// The snapshot goes to a sibling temporary file first and is renamed into
/// place, so the target is either the old snapshot or the new one.
pub fn save(path: impl AsRef<Path>, dir: &Directory) -> Result<()> {
  let path = path.as_ref();
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }

  let tmp = tmp_path(path);
  {
    let mut file = fs::File::create(&tmp)?;
    serde_json::to_writer_pretty(&mut file, dir)?;
    file.write_all(b"\n")?;
    file.sync_all()?;
  }
  fs::rename(&tmp, path)?;

  tracing::debug!(path = %path.display(), contacts = dir.len(), "saved directory");
  Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
  let mut name = path
    .file_name()
    .map(OsString::from)
    .unwrap_or_else(|| OsString::from("directory"));
  name.push(".tmp");
  path.with_file_name(name)
}
