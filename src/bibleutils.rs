//! Main module for bibleutils library functionality
//!
//!     Leaf first:
//!         - [identifier]: immutable name to value registries and the typed identifier macro.
//!         - [books], [forms]: canonical book ids, versification systems, reference forms.
//!         - [versification]: external book name tables.
//!         - [catalogs]: the validated set of all of the above.
//!         - [reference]: the reference value type.
//!         - [parsing], [conversion], [expansion]: the operations over references.

pub mod books;
pub mod catalogs;
pub mod config;
pub mod conversion;
pub mod error;
pub mod expansion;
pub mod forms;
pub mod identifier;
pub mod parsing;
pub mod reference;
pub mod testing;
pub mod versification;
