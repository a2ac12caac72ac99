// Explorer types: directory children and the filesystem seam

use compact_str::CompactString;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::vec;
use tracing::debug;

/// An immediate child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    /// Display name (lossy for names that are not UTF-8)
    pub name: CompactString,
    /// Name as stored on disk
    pub file_name: OsString,
    pub is_dir: bool,
}

impl Child {
    pub fn new(name: impl Into<CompactString>, is_dir: bool) -> Self {
        let name = name.into();
        Self {
            file_name: OsString::from(name.as_str()),
            name,
            is_dir,
        }
    }

    pub fn from_file_name(file_name: OsString, is_dir: bool) -> Self {
        Self {
            name: CompactString::from(file_name.to_string_lossy()),
            file_name,
            is_dir,
        }
    }
}

/// Directory primitives the explorer needs from the host
pub trait Filesystem {
    /// Whether `path` exists at all
    fn exists(&self, path: &Path) -> bool;

    /// Immediate children of `path`, in no particular order
    fn read_children(&self, path: &Path) -> io::Result<Vec<Child>>;
}

/// The real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFs;

impl Filesystem for HostFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_children(&self, path: &Path) -> io::Result<Vec<Child>> {
        let mut children = Vec::new();
        for entry in fs::read_dir(path)?.filter_map(|e| e.ok()) {
            // Follow symlinks so a linked directory can be entered
            let is_dir = entry.path().is_dir();
            children.push(Child::from_file_name(entry.file_name(), is_dir));
        }
        Ok(children)
    }
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_children(&self, path: &Path) -> io::Result<Vec<Child>> {
        (**self).read_children(path)
    }
}

/// Children of one directory, read again on every iteration.
///
/// Nothing touches the filesystem until the listing is iterated. Errors
/// while reading yield an empty sequence.
#[derive(Debug)]
pub struct Listing<'fs, F: Filesystem + ?Sized = HostFs> {
    fs: &'fs F,
    path: PathBuf,
}

impl<F: Filesystem + ?Sized> Clone for Listing<'_, F> {
    fn clone(&self) -> Self {
        Self {
            fs: self.fs,
            path: self.path.clone(),
        }
    }
}

impl<'fs, F: Filesystem + ?Sized> Listing<'fs, F> {
    pub fn new(fs: &'fs F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the directory and iterate its children sorted by name
    pub fn iter(&self) -> vec::IntoIter<Child> {
        let mut children = match self.fs.read_children(&self.path) {
            Ok(children) => children,
            Err(e) => {
                debug!("Could not list {:?}: {}", self.path, e);
                Vec::new()
            }
        };
        children.sort_by(|a, b| a.name.cmp(&b.name));
        children.into_iter()
    }
}

impl<'a, 'fs, F: Filesystem + ?Sized> IntoIterator for &'a Listing<'fs, F> {
    type Item = Child;
    type IntoIter = vec::IntoIter<Child>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static HOST: HostFs = HostFs;

/// Listing of `path` on the host filesystem
pub fn listing(path: impl Into<PathBuf>) -> Listing<'static, HostFs> {
    Listing::new(&HOST, path)
}
