//! Template lookup by id.
//!
//! Resolution goes through the index: the first entry whose id matches
//! names the template file, which is read from the store and parsed.

use std::io;
use std::path::PathBuf;

use crate::error::{AgentrigError, Result};
use crate::registry::index::{parse_index_text, IndexEntry, INDEX_FILE};
use crate::registry::store::TemplateStore;
use crate::template::{parse_template_text, TemplateDocument};

/// Label used for read errors when the loader is a bare closure.
const LOADER_LABEL: &str = "template loader";

/// Find a template by id given index text and a file loader.
///
/// Returns `Ok(None)` when no index entry has exactly this id. When an entry
/// matches, `loader` is called once with its file path; a failed read is an
/// error, not an absent template.
pub fn find_template<F>(id: &str, index_text: &str, loader: F) -> Result<Option<TemplateDocument>>
where
    F: FnOnce(&str) -> io::Result<String>,
{
    find_in_index(id, index_text, LOADER_LABEL, loader)
}

fn find_in_index<F>(
    id: &str,
    index_text: &str,
    store: &str,
    loader: F,
) -> Result<Option<TemplateDocument>>
where
    F: FnOnce(&str) -> io::Result<String>,
{
    let Some(entry) = first_match(parse_index_text(index_text), id) else {
        tracing::debug!("No template '{}' in index", id);
        return Ok(None);
    };

    tracing::debug!("Resolved template '{}' to '{}' in {}", id, entry.file, store);
    let text = loader(entry.file.as_str()).map_err(|e| read_error(&entry.file, store, e))?;
    Ok(Some(parse_template_text(&text)))
}

fn first_match(entries: Vec<IndexEntry>, id: &str) -> Option<IndexEntry> {
    entries.into_iter().find(|entry| entry.id == id)
}

fn read_error(file: &str, store: &str, source: io::Error) -> AgentrigError {
    if source.kind() == io::ErrorKind::InvalidInput {
        return AgentrigError::InvalidTemplatePath {
            path: PathBuf::from(file),
        };
    }
    AgentrigError::TemplateRead {
        file: file.to_string(),
        store: store.to_string(),
        source,
    }
}

/// Catalog of templates backed by a [`TemplateStore`].
#[derive(Debug)]
pub struct TemplateRegistry {
    store: Box<dyn TemplateStore>,
}

impl TemplateRegistry {
    /// Create a registry over a store.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// The backing store.
    pub fn store(&self) -> &dyn TemplateStore {
        self.store.as_ref()
    }

    /// Index text, or empty when the index cannot be read.
    fn index_text(&self) -> String {
        match self.store.read_text(INDEX_FILE) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    "Could not read template index from {}: {}",
                    self.store.describe(),
                    e
                );
                String::new()
            }
        }
    }

    /// All index entries, in index order.
    pub fn list(&self) -> Vec<IndexEntry> {
        parse_index_text(&self.index_text())
    }

    /// The index entry for an id, if listed.
    pub fn entry(&self, id: &str) -> Option<IndexEntry> {
        first_match(self.list(), id)
    }

    /// Find and parse a template by id.
    ///
    /// An unknown id, or an unreadable index, yields `Ok(None)`.
    pub fn find(&self, id: &str) -> Result<Option<TemplateDocument>> {
        let index = self.index_text();
        let store = self.store.describe();
        find_in_index(id, &index, &store, |file| self.store.read_text(file))
    }

    /// Like [`find`](Self::find), but an unknown id is an error.
    pub fn require(&self, id: &str) -> Result<TemplateDocument> {
        self.find(id)?.ok_or_else(|| AgentrigError::UnknownTemplate { id: id.to_string() })
    }

    /// Parse a template file by its path in the store, bypassing the index.
    pub fn load_file(&self, relative: &str) -> Result<TemplateDocument> {
        let text = self
            .store
            .read_text(relative)
            .map_err(|e| read_error(relative, &self.store.describe(), e))?;
        Ok(parse_template_text(&text))
    }
}
