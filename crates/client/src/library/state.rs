//! The library view's state container.
//!
//! Transitions are plain methods. Those that need the entry service return
//! a [`Command`]; the caller performs it and feeds the result back through
//! [`LibraryState::apply`] as an [`Outcome`]. Nothing here does I/O, so
//! every transition is testable without a server or a renderer.

use marquee_core::types::DbId;

use crate::error::ClientError;
use crate::model::{Deleted, EntryDraft, EntryPage, EntryPatch, MediaEntry, Saved};

use super::form::{EntryForm, Field};
use super::notifications::{Level, Notifications};
use super::scroll::ScrollMetrics;

/// Which dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Closed,
    Add,
    Edit { id: DbId },
    ConfirmDelete { id: DbId },
}

/// Work the state asks its driver to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchPage { page: u32, limit: u32 },
    Create(EntryDraft),
    Update { id: DbId, patch: EntryPatch },
    Delete { id: DbId },
}

/// Result of a [`Command`], fed back into [`LibraryState::apply`].
#[derive(Debug)]
pub enum Outcome {
    PageLoaded {
        page: u32,
        result: Result<EntryPage, ClientError>,
    },
    Created(Result<Saved, ClientError>),
    Updated {
        id: DbId,
        result: Result<Saved, ClientError>,
    },
    Deleted {
        id: DbId,
        result: Result<Deleted, ClientError>,
    },
}

#[derive(Debug, Clone)]
pub struct LibraryState {
    entries: Vec<MediaEntry>,
    page: u32,
    loaded_page: u32,
    page_size: u32,
    has_more: bool,
    loading: bool,
    greeted: bool,
    form: EntryForm,
    modal: Modal,
    notifications: Notifications,
}

impl LibraryState {
    pub fn new(page_size: u32) -> Self {
        Self {
            entries: Vec::new(),
            page: 1,
            loaded_page: 0,
            page_size: page_size.max(1),
            has_more: true,
            loading: false,
            greeted: false,
            form: EntryForm::default(),
            modal: Modal::Closed,
            notifications: Notifications::default(),
        }
    }

    pub fn entries(&self) -> &[MediaEntry] {
        &self.entries
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    // ---- list / pagination ----

    /// Load the first page.
    pub fn mount(&mut self) -> Option<Command> {
        if self.loading {
            return None;
        }
        self.page = 1;
        Some(self.begin_fetch())
    }

    /// Advance to the next page when the viewport nears the end of the list.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<Command> {
        if self.loading || !self.has_more || !metrics.near_bottom() {
            return None;
        }
        self.page += 1;
        Some(self.begin_fetch())
    }

    fn begin_fetch(&mut self) -> Command {
        self.loading = true;
        Command::FetchPage {
            page: self.page,
            limit: self.page_size,
        }
    }

    fn page_loaded(&mut self, page: u32, result: Result<EntryPage, ClientError>) {
        if page != self.page {
            tracing::debug!(page, current = self.page, "Ignoring stale page");
            return;
        }
        self.loading = false;

        match result {
            Ok(loaded) => {
                if !self.greeted {
                    self.greeted = true;
                    if !loaded.message.is_empty() {
                        self.notifications.push(Level::Success, loaded.message);
                    }
                }
                if page == 1 {
                    self.entries = loaded.items;
                } else {
                    for item in loaded.items {
                        if !self.entries.iter().any(|e| e.id == item.id) {
                            self.entries.push(item);
                        }
                    }
                }
                self.has_more = loaded.has_more;
                self.loaded_page = page;
            }
            Err(e) => {
                self.notifications
                    .push(Level::Error, e.user_message("fetch entries"));
                self.page = self.loaded_page;
            }
        }
    }

    // ---- dialogs / form ----

    pub fn open_add(&mut self) {
        self.form.reset();
        self.modal = Modal::Add;
    }

    /// Open the edit dialog for `id`. Returns `false` if the entry is not
    /// in the loaded list.
    pub fn open_edit(&mut self, id: DbId) -> bool {
        let Some(entry) = self.entries.iter().find(|e| e.id == id) else {
            return false;
        };
        self.form = EntryForm::from_entry(entry);
        self.modal = Modal::Edit { id };
        true
    }

    pub fn request_delete(&mut self, id: DbId) {
        self.modal = Modal::ConfirmDelete { id };
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
        self.form.reset();
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Submit the open add/edit form.
    pub fn submit(&mut self) -> Option<Command> {
        let id = match self.modal {
            Modal::Add => None,
            Modal::Edit { id } => Some(id),
            Modal::Closed | Modal::ConfirmDelete { .. } => return None,
        };

        let draft = match self.form.to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                self.notifications.push(Level::Error, message);
                return None;
            }
        };

        Some(match id {
            None => Command::Create(draft),
            Some(id) => Command::Update {
                id,
                patch: EntryPatch::from(&draft),
            },
        })
    }

    pub fn confirm_delete(&mut self) -> Option<Command> {
        match self.modal {
            Modal::ConfirmDelete { id } => Some(Command::Delete { id }),
            _ => None,
        }
    }

    // ---- outcomes ----

    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PageLoaded { page, result } => self.page_loaded(page, result),
            Outcome::Created(Ok(saved)) => {
                self.entries.retain(|e| e.id != saved.item.id);
                self.entries.insert(0, saved.item);
                self.finish_mutation(saved.message, "Entry added");
            }
            Outcome::Created(Err(e)) => {
                self.notifications.push(Level::Error, e.user_message("add entry"));
            }
            Outcome::Updated { result: Ok(saved), .. } => {
                if let Some(slot) = self.entries.iter_mut().find(|e| e.id == saved.item.id) {
                    *slot = saved.item;
                }
                self.finish_mutation(saved.message, "Entry updated");
            }
            Outcome::Updated { result: Err(e), .. } => {
                self.notifications
                    .push(Level::Error, e.user_message("update entry"));
            }
            Outcome::Deleted { id, result: Ok(deleted) } => {
                self.entries.retain(|e| e.id != id);
                self.finish_mutation(deleted.message, "Entry deleted");
            }
            Outcome::Deleted { result: Err(e), .. } => {
                self.notifications
                    .push(Level::Error, e.user_message("delete entry"));
            }
        }
    }

    fn finish_mutation(&mut self, message: String, fallback: &str) {
        self.close_modal();
        let message = if message.is_empty() {
            fallback.to_string()
        } else {
            message
        };
        self.notifications.push(Level::Success, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::entry::MediaKind;

    fn entry(id: DbId, title: &str) -> MediaEntry {
        MediaEntry {
            id,
            title: title.into(),
            kind: MediaKind::Movie,
            director: String::new(),
            budget: String::new(),
            location: String::new(),
            duration: String::new(),
            year: String::new(),
            poster_url: None,
            notes: None,
        }
    }

    fn page(ids: &[DbId], has_more: bool) -> EntryPage {
        EntryPage {
            items: ids.iter().map(|&id| entry(id, &format!("E{id}"))).collect(),
            total: 0,
            page: 1,
            limit: 2,
            has_more,
            message: "Entries fetched successfully".into(),
        }
    }

    fn near_bottom() -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: 900.0,
            viewport_height: 100.0,
            content_height: 1000.0,
        }
    }

    fn loaded(state: &mut LibraryState, ids: &[DbId], has_more: bool) {
        let current = state.page();
        state.apply(Outcome::PageLoaded {
            page: current,
            result: Ok(page(ids, has_more)),
        });
    }

    fn ids(state: &LibraryState) -> Vec<DbId> {
        state.entries().iter().map(|e| e.id).collect()
    }

    fn failure() -> ClientError {
        ClientError::Server {
            status: 500,
            message: "Failed to fetch entries".into(),
        }
    }

    #[test]
    fn mount_fetches_first_page_and_greets_once() {
        let mut state = LibraryState::new(2);
        assert_eq!(state.mount(), Some(Command::FetchPage { page: 1, limit: 2 }));
        assert!(state.is_loading());
        assert_eq!(state.mount(), None);

        loaded(&mut state, &[9, 8], true);
        assert!(!state.is_loading());
        assert_eq!(ids(&state), [9, 8]);
        assert_eq!(state.notifications().len(), 1);

        state.on_scroll(near_bottom());
        loaded(&mut state, &[7, 6], true);
        assert_eq!(state.notifications().len(), 1);
    }

    #[test]
    fn scroll_appends_and_skips_duplicates() {
        let mut state = LibraryState::new(2);
        state.mount();
        loaded(&mut state, &[9, 8], true);

        assert_eq!(
            state.on_scroll(near_bottom()),
            Some(Command::FetchPage { page: 2, limit: 2 })
        );
        // An insert shifted the window by one.
        loaded(&mut state, &[8, 7], false);
        assert_eq!(ids(&state), [9, 8, 7]);
        assert!(!state.has_more());
        assert_eq!(state.on_scroll(near_bottom()), None);
    }

    #[test]
    fn scroll_is_gated_by_loading_and_distance() {
        let mut state = LibraryState::new(2);
        state.mount();
        assert_eq!(state.on_scroll(near_bottom()), None);
        loaded(&mut state, &[2, 1], true);

        let far = ScrollMetrics {
            scroll_top: 0.0,
            viewport_height: 100.0,
            content_height: 1000.0,
        };
        assert_eq!(state.on_scroll(far), None);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn failed_page_keeps_entries_and_reverts_cursor() {
        let mut state = LibraryState::new(2);
        state.mount();
        loaded(&mut state, &[4, 3], true);
        state.on_scroll(near_bottom());

        state.apply(Outcome::PageLoaded {
            page: 2,
            result: Err(failure()),
        });
        assert_eq!(ids(&state), [4, 3]);
        assert_eq!(state.page(), 1);
        assert!(!state.is_loading());
        assert_eq!(
            state.notifications().latest().unwrap().level,
            Level::Error
        );
        assert_eq!(
            state.on_scroll(near_bottom()),
            Some(Command::FetchPage { page: 2, limit: 2 })
        );
    }

    #[test]
    fn stale_page_is_ignored() {
        let mut state = LibraryState::new(2);
        state.mount();
        state.apply(Outcome::PageLoaded {
            page: 5,
            result: Ok(page(&[1], false)),
        });
        assert!(state.entries().is_empty());
        assert!(state.is_loading());
    }

    #[test]
    fn add_submit_validates_then_prepends() {
        let mut state = LibraryState::new(10);
        state.mount();
        loaded(&mut state, &[2, 1], false);

        state.open_add();
        assert_eq!(state.submit(), None);
        assert_eq!(state.modal(), Modal::Add);
        assert_eq!(state.notifications().latest().unwrap().message, "Title is required");

        state.set_field(Field::Title, "Heat");
        let Some(Command::Create(draft)) = state.submit() else {
            panic!("expected create command");
        };
        assert_eq!(draft.title, "Heat");

        state.apply(Outcome::Created(Ok(Saved {
            item: entry(3, "Heat"),
            message: "Entry created successfully".into(),
        })));
        assert_eq!(ids(&state), [3, 2, 1]);
        assert_eq!(state.modal(), Modal::Closed);
        assert_eq!(state.form(), &EntryForm::default());
    }

    #[test]
    fn failed_create_leaves_form_open() {
        let mut state = LibraryState::new(10);
        state.open_add();
        state.set_field(Field::Title, "Heat");
        state.apply(Outcome::Created(Err(failure())));

        assert_eq!(state.modal(), Modal::Add);
        assert_eq!(state.form().title, "Heat");
        assert!(state.entries().is_empty());
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut state = LibraryState::new(10);
        state.mount();
        loaded(&mut state, &[3, 2, 1], false);

        assert!(!state.open_edit(99));
        assert!(state.open_edit(2));
        assert_eq!(state.form().title, "E2");
        state.set_field(Field::Title, "Renamed");

        let Some(Command::Update { id, patch }) = state.submit() else {
            panic!("expected update command");
        };
        assert_eq!(id, 2);
        assert_eq!(patch.title.as_deref(), Some("Renamed"));

        state.apply(Outcome::Updated {
            id,
            result: Ok(Saved {
                item: entry(2, "Renamed"),
                message: String::new(),
            }),
        });
        assert_eq!(ids(&state), [3, 2, 1]);
        assert_eq!(state.entries()[1].title, "Renamed");
        assert_eq!(state.notifications().latest().unwrap().message, "Entry updated");
    }

    #[test]
    fn delete_removes_only_on_success() {
        let mut state = LibraryState::new(10);
        state.mount();
        loaded(&mut state, &[2, 1], false);

        assert_eq!(state.confirm_delete(), None);
        state.request_delete(1);
        assert_eq!(state.confirm_delete(), Some(Command::Delete { id: 1 }));

        state.apply(Outcome::Deleted {
            id: 1,
            result: Err(ClientError::NotFound {
                message: "Entry not found".into(),
            }),
        });
        assert_eq!(ids(&state), [2, 1]);

        state.apply(Outcome::Deleted {
            id: 1,
            result: Ok(Deleted {
                message: "Entry deleted successfully".into(),
            }),
        });
        assert_eq!(ids(&state), [2]);
        assert_eq!(state.modal(), Modal::Closed);
    }
}
