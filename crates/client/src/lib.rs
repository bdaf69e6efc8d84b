//! Client side of the media library.
//!
//! - [`api::EntriesClient`] talks to the entry service over HTTP and
//!   normalizes every response into [`model::MediaEntry`].
//! - [`library`] holds the list/pagination/form state that a view renders,
//!   as a plain state container driven through an [`gateway::EntryGateway`].

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod library;
pub mod model;
