//! Static tool catalog: the read-only corpus the search engine ranks.
//!
//! The index is generated out-of-band from the live tool registry and loaded
//! whole at process start; nothing here mutates after construction.

mod entry;
mod error;
mod index;

pub use entry::ToolIndexEntry;
pub use error::{CatalogError, Result};
pub use index::Catalog;
