//! Domain model structs.
//!
//! Input DTOs (`NewEntry`, `EntryChanges`) live in `marquee_core::entry`
//! because the validation layer produces them.

pub mod entry;
