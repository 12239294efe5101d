//! MIME type lookups.
//!
//! Resolves a file name, bare extension or URL path to a MIME type through a
//! static extension table generated from `mime_types.json` at build time,
//! sniffs a few well-known content signatures, and sorts MIME strings into
//! coarse [`MimeTypeCategory`] buckets.
//!
//! ```rust
//! use mimetypes::{get_mime_category, get_mime_type, types, MimeTypeCategory};
//!
//! assert_eq!(get_mime_type("report.PDF"), types::PDF);
//! assert_eq!(get_mime_type(".gz"), "application/gzip");
//! assert_eq!(get_mime_type("no-such-ext"), mimetypes::DEFAULT_MIME_TYPE);
//! assert_eq!(get_mime_category("application/ld+json"), MimeTypeCategory::Json);
//! ```

use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;

mod error;
pub use crate::error::*;

mod table;
pub use crate::table::*;

mod mimetype;
pub use crate::mimetype::*;

mod sniff;
pub use crate::sniff::*;

mod category;
pub use crate::category::*;

#[cfg(test)]
mod generate;

/// Returned whenever an input cannot be resolved to anything more specific.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// One constant per entry of `mime_types.json`, named after the extension
/// (`PDF`, `GZ`, `_7Z`, `JSON5`, ...).
pub mod types {
    include!(concat!(env!("OUT_DIR"), "/mime_types.rs"));
}
