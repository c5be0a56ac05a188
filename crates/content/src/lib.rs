//! The content model of the Green Lens page.
//!
//! Every value shown on the rendered page is declared here as an immutable,
//! compile-time record. Nothing in this crate computes or derives values:
//! the records are literal fixtures and the order in which they are declared
//! is the order in which they are displayed.
//!
//! Tabular content is turned into a [Table] through validated constructors,
//! which reject ragged or mistyped data with a [DataShapeError].

#![warn(missing_docs)]

pub mod error;
pub mod page;
pub mod prose;
pub mod record;
pub mod table;

mod green_lens;

pub use crate::error::DataShapeError;
pub use crate::page::PageContent;
pub use crate::table::Table;
