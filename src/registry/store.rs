//! Template storage backends.
//!
//! A store hands out the text of the index and template files by path
//! relative to its root. The parsing core never touches the filesystem
//! itself; it only sees text returned by a store.

use include_dir::{include_dir, Dir};
use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Templates bundled into the binary at compile time.
static BUNDLED_TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Source of template and index text.
pub trait TemplateStore: fmt::Debug + Send + Sync {
    /// Read a file relative to the store root.
    ///
    /// Fails with `NotFound` when the file does not exist.
    fn read_text(&self, relative: &str) -> io::Result<String>;

    /// Human-readable location, used in messages and logs.
    fn describe(&self) -> String;
}

/// Templates embedded in the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStore;

impl BundledStore {
    /// Create the bundled store.
    pub fn new() -> Self {
        Self
    }

    /// Relative paths of every bundled file.
    pub fn file_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        collect_files(&BUNDLED_TEMPLATES, &mut names);
        names.sort();
        names
    }
}

fn collect_files(dir: &Dir<'_>, names: &mut Vec<String>) {
    for file in dir.files() {
        names.push(file.path().to_string_lossy().replace('\\', "/"));
    }
    for sub in dir.dirs() {
        collect_files(sub, names);
    }
}

impl TemplateStore for BundledStore {
    fn read_text(&self, relative: &str) -> io::Result<String> {
        let file = BUNDLED_TEMPLATES.get_file(relative).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no bundled template file '{}'", relative),
            )
        })?;

        file.contents_utf8().map(str::to_string).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("bundled template file '{}' is not UTF-8", relative),
            )
        })
    }

    fn describe(&self) -> String {
        "bundled templates".to_string()
    }
}

/// Templates in a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Create a store rooted at `root`. The directory need not exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check if the root directory exists.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Resolve a relative path, refusing anything that leaves the root.
    fn resolve(&self, relative: &str) -> io::Result<PathBuf> {
        let path = Path::new(relative);
        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if escapes || relative.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("template path '{}' is outside {}", relative, self.root.display()),
            ));
        }

        Ok(self.root.join(path))
    }
}

impl TemplateStore for DirectoryStore {
    fn read_text(&self, relative: &str) -> io::Result<String> {
        std::fs::read_to_string(self.resolve(relative)?)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
