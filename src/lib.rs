//! # Clipcat
//!
//! `clipcat` gathers source files into a single text blob meant for the
//! clipboard, or renders a directory's structure as an indented tree.
//!
//! Every traversal skips the version-control metadata directory (`.git`) and
//! any directory that directly contains an ignore marker (`.gitignore`),
//! together with everything beneath them.
//!
//! Three operations are offered:
//!
//! - [`collect_by_extension`]: walk a directory and concatenate every file whose
//!   name ends with a given suffix (case-insensitive).
//! - [`collect_explicit`]: concatenate an explicit list of files, in order.
//! - [`render_tree`] / [`build_tree`]: draw the filtered tree with `├── ` / `└── `
//!   connectors.
//!
//! [`run`] dispatches a [`TraversalRequest`] to the matching operation. All
//! calls are independent and keep no state; failures come back as
//! [`ClipcatError`] values whose [`kind`](ClipcatError::kind) tells them apart.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use clipcat::{ClipcatBuilder, TraversalRequest, run};
//!
//! let options = ClipcatBuilder::new().sort_entries(true).build();
//!
//! match run(&TraversalRequest::collect("./project", ".py"), &options) {
//!     Ok(text) => println!("{}", text),
//!     Err(e) => eprintln!("{} ({:?})", e, e.kind()),
//! }
//! ```

mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{collect_by_extension, collect_explicit, run};
pub use error::{ClipcatError, ErrorKind, ReadCause};
pub use filter::{IGNORE_MARKER, METADATA_DIR, PathFilter};
pub use options::{ClipcatBuilder, ClipcatOptions, SUGGESTED_EXTENSIONS};
pub use tree::{build_tree, render_tree};
pub use types::{AggregatedResult, FileRecord, TraversalRequest, TreeLine, TreeRendering};
