//! casefolio - Portfolio case-study scaffolding
//!
//! Populates a page-structured design document from a fixed catalog of
//! case-study sections. Runs are re-entrant: nodes are found by name before
//! they are created, so running again against a populated document reuses
//! its structure and keeps user edits unless a refresh is requested.
//!
//! # Example
//!
//! ```rust
//! use casefolio::{generate, GenerationOptions, MemoryDocument, SystemFonts};
//!
//! let mut doc = MemoryDocument::new();
//! let mut fonts = SystemFonts::common();
//! let options = GenerationOptions::with_title("Acme");
//!
//! let report = generate(&mut doc, &mut fonts, &options).unwrap();
//! assert_eq!(report.pages.created, 10);
//!
//! // A second run finds everything in place
//! let report = generate(&mut doc, &mut fonts, &options).unwrap();
//! assert_eq!(report.pages.untouched, 10);
//! ```

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod catalog;
pub mod clear;
pub mod engine;
pub mod error;
pub mod fonts;
pub mod host;
pub mod locator;
pub mod memory;
pub mod options;
pub mod shell;
pub mod style;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use catalog::Section;
pub use engine::{generate, sync, SyncReport};
pub use error::SyncError;
pub use fonts::{FontName, FontProvider, FontSet, SystemFonts};
pub use host::{DocumentHost, HostError, NodeId};
pub use memory::MemoryDocument;
pub use options::{Category, DividerStyle, GenerationOptions, Theme};
pub use shell::{GenerateRequest, Message, Notification};
pub use style::{resolve, StyleBundle};
