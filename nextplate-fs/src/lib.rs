//! Shared filesystem helpers built on `cap-std` and `camino`.
//!
//! Input tables are read through capability handles opened with ambient
//! authority at the process edge; nothing below the CLI touches `std::fs`.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a UTF-8 file path for reading using ambient authority.
///
/// # Errors
/// Propagates the underlying I/O error, e.g. `NotFound`.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Resolve the parent directory of `path` and return it with the file name.
///
/// # Errors
/// Fails when the path has no file name or the parent cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Return whether a path exists and is a regular file.
///
/// # Errors
/// Returns `NotFound` when the path or its parent is missing.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Return whether a path exists and is a directory.
///
/// # Errors
/// Returns `NotFound` when the path is missing, or the error raised while
/// opening anything that is neither a directory nor a regular file.
pub fn dir_is_dir(path: &Utf8Path) -> io::Result<bool> {
    match fs_utf8::Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(err),
        Err(err) => match file_is_file(path) {
            Ok(true) => Ok(false),
            _ => Err(err),
        },
    }
}

/// Convert a standard path into a UTF-8 path.
///
/// # Errors
/// Returns `InvalidData` when the path is not valid UTF-8.
pub fn utf8_path(path: std::path::PathBuf) -> io::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|raw| io::Error::new(io::ErrorKind::InvalidData, format!("non-UTF-8 path {raw:?}")))
}
