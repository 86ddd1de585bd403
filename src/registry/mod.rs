//! Template catalog and lookup.
//!
//! Templates live in a [`TemplateStore`] next to an index file
//! ([`INDEX_FILE`]) that maps template ids to files:
//! - Bundled templates (embedded in the binary)
//! - A directory on disk (`--templates-dir`, or the installed location)
//!
//! # Example
//!
//! ```
//! use agentrig::registry::{BundledStore, TemplateRegistry};
//!
//! let registry = TemplateRegistry::new(Box::new(BundledStore::new()));
//!
//! for entry in registry.list() {
//!     println!("{}: {}", entry.id, entry.description);
//! }
//!
//! if let Some(doc) = registry.find("python-api").unwrap() {
//!     println!("{} skills", doc.skills.len());
//! }
//! ```

pub mod index;
pub mod resolver;
pub mod store;

pub use index::{parse_index_text, IndexEntry, INDEX_FILE};
pub use resolver::{find_template, TemplateRegistry};
pub use store::{BundledStore, DirectoryStore, TemplateStore};
