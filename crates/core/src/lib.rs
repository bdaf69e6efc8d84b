//! Domain types and pure logic shared by the store, the HTTP service and
//! the client: the media-entry model, payload validation, text
//! normalization, pagination arithmetic and display formatting.

pub mod display;
pub mod entry;
pub mod error;
pub mod pagination;
pub mod text;
pub mod types;
pub mod validation;
