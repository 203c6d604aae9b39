//! Renderers that live in the core crate.
//!
//! Terminal and JSON output belong to the CLI; HTML is here because it is
//! a pure function of the document with no terminal concerns.

pub mod html;

pub use html::to_html;
