use std::time::{Duration, Instant};

/// How long a notification stays visible unless dismissed.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: Level,
    pub message: String,
    pub created_at: Instant,
}

/// Transient notifications, newest first.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    next_id: u64,
    items: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, level: Level, message: impl Into<String>) -> u64 {
        self.push_at(level, message, Instant::now())
    }

    pub fn push_at(&mut self, level: Level, message: impl Into<String>, now: Instant) -> u64 {
        self.next_id += 1;
        self.items.insert(
            0,
            Notification {
                id: self.next_id,
                level,
                message: message.into(),
                created_at: now,
            },
        );
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop every notification older than [`NOTIFICATION_TTL`].
    pub fn expire(&mut self, now: Instant) {
        self.items
            .retain(|n| now.saturating_duration_since(n.created_at) < NOTIFICATION_TTL);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
