//! Syntax-driven code augmentation.
//!
//! `augmentor` scans a syntax tree supplied by an external front end for
//! declarations that match a [`ScanRule`] (by default, classes carrying the
//! `partial` modifier) and renders a companion source [`Fragment`] for each
//! one. Fragments are handed to a [`FragmentSink`] owned by the host build.
//!
//! The data flow is one-way: tree → [`Scanner`] → [`Synthesizer`] → sink.
//! Both stages are pure; the same tree always yields the same fragments in
//! the same order.
//!
//! ```
//! use augmentor::{SyntaxDocument, scan, synthesize};
//!
//! let document = SyntaxDocument::from_json(
//!     r#"{"members":[{"kind":"namespace","name":"Acme","members":[
//!         {"kind":"class","name":"Foo","modifiers":["partial"]}]}]}"#,
//! )?;
//! let tree = document.to_tree()?;
//! let found = scan(&tree);
//! let fragment = synthesize(&found[0])?;
//! assert_eq!(fragment.key, "Foo_generated");
//! assert_eq!(fragment.container, "Acme");
//! # Ok::<(), augmentor::AugmentError>(())
//! ```

mod error;
pub mod ident;
mod pipeline;
pub mod scan;
pub mod sink;
pub mod synthesize;
pub mod syntax;

pub use error::{AugmentError, Result, SinkError};
pub use pipeline::{GenerationReport, Generator, ReportEntry};
pub use scan::{Candidates, Declaration, ScanRule, Scanner, scan};
pub use sink::{CollisionPolicy, Encoding, FragmentSink, MemorySink};
pub use synthesize::{Fragment, SynthesisOptions, Synthesizer, synthesize};
pub use syntax::{NodeDocument, NodeId, NodeKind, SyntaxDocument, SyntaxTree, SyntaxView};
