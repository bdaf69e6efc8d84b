//! List, pagination, form and notification state for the library view.

pub mod controller;
pub mod form;
pub mod notifications;
pub mod scroll;
pub mod state;

pub use controller::LibraryController;
pub use form::{EntryForm, Field};
pub use notifications::{Level, Notification, Notifications};
pub use scroll::ScrollMetrics;
pub use state::{Command, LibraryState, Modal, Outcome};
