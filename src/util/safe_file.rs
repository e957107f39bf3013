//! Output files that appear only once fully written.
//!
//! A [`SafeFile`] writes into a temporary file next to the target and renames
//! it into place on [`SafeFile::commit`]. Until then the target, if any, is
//! untouched, and dropping the handle (including during unwinding) discards
//! the temporary file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Debug)]
pub struct SafeFile {
    temp: NamedTempFile,
    path: PathBuf,
    overwrite: bool,
}

impl SafeFile {
    /// Prepares a new file at `path`, failing with `AlreadyExists` when it is
    /// already present.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            ));
        }
        Self::open(path, false)
    }

    /// Prepares to replace `path`. The existing file stays in place until
    /// [`SafeFile::commit`].
    pub fn replace(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::open(path.as_ref(), true)
    }

    fn open(path: &Path, overwrite: bool) -> io::Result<Self> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;
        let temp = NamedTempFile::new_in(dir)?;
        debug!(path = %path.display(), temp = %temp.path().display(), "staging output file");
        Ok(Self {
            temp,
            path: path.to_path_buf(),
            overwrite,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes the staged content and moves it to the target path.
    pub fn commit(mut self) -> io::Result<()> {
        self.temp.flush()?;
        self.temp.as_file().sync_all()?;
        if self.overwrite {
            self.temp.persist(&self.path)?;
        } else {
            self.temp.persist_noclobber(&self.path)?;
        }
        debug!(path = %self.path.display(), "committed output file");
        Ok(())
    }
}

impl Write for SafeFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.temp.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.temp.flush()
    }
}
