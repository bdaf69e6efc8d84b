use crate::gateway::EntryGateway;

use super::scroll::ScrollMetrics;
use super::state::{Command, LibraryState, Outcome};

/// Drives a [`LibraryState`] against an [`EntryGateway`], one command at a
/// time.
pub struct LibraryController<G> {
    gateway: G,
    state: LibraryState,
}

impl<G: EntryGateway> LibraryController<G> {
    pub fn new(gateway: G, page_size: u32) -> Self {
        Self {
            gateway,
            state: LibraryState::new(page_size),
        }
    }

    pub fn state(&self) -> &LibraryState {
        &self.state
    }

    /// Direct access for transitions that need no I/O (opening dialogs,
    /// editing form fields, dismissing notifications).
    pub fn state_mut(&mut self) -> &mut LibraryState {
        &mut self.state
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub async fn mount(&mut self) {
        let command = self.state.mount();
        self.run(command).await;
    }

    pub async fn scroll(&mut self, metrics: ScrollMetrics) {
        let command = self.state.on_scroll(metrics);
        self.run(command).await;
    }

    pub async fn submit(&mut self) {
        let command = self.state.submit();
        self.run(command).await;
    }

    pub async fn confirm_delete(&mut self) {
        let command = self.state.confirm_delete();
        self.run(command).await;
    }

    async fn run(&mut self, command: Option<Command>) {
        if let Some(command) = command {
            self.execute(command).await;
        }
    }

    /// Perform `command` and apply its outcome.
    pub async fn execute(&mut self, command: Command) {
        let outcome = match command {
            Command::FetchPage { page, limit } => Outcome::PageLoaded {
                page,
                result: self.gateway.fetch_page(page, limit).await,
            },
            Command::Create(draft) => Outcome::Created(self.gateway.create(&draft).await),
            Command::Update { id, patch } => Outcome::Updated {
                id,
                result: self.gateway.update(id, &patch).await,
            },
            Command::Delete { id } => Outcome::Deleted {
                id,
                result: self.gateway.delete(id).await,
            },
        };
        self.state.apply(outcome);
    }
}
