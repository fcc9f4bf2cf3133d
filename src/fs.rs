//! Filesystem capability handed to commands
//!
//! Commands never touch `std::fs` directly; they receive an [`Fs`] so tests can
//! substitute an in-memory tree.

use std::io;
use std::path::Path;

/// Read-only filesystem operations used by the secrets commands
pub trait Fs: Send + Sync {
    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// The real operating-system filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFs;

impl Fs for OsFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

#[cfg(test)]
pub use mem::MemFs;
