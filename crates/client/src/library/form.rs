use marquee_core::entry::MediaKind;

use crate::model::{EntryDraft, MediaEntry};

/// Editable fields of the add/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Kind,
    Director,
    Budget,
    Location,
    Duration,
    Year,
    PosterUrl,
    Notes,
}

/// Form contents. Every field is text while editing; `kind` is kept as the
/// raw selection and coerced on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub title: String,
    pub kind: String,
    pub director: String,
    pub budget: String,
    pub location: String,
    pub duration: String,
    pub year: String,
    pub poster_url: String,
    pub notes: String,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: MediaKind::Movie.as_str().to_string(),
            director: String::new(),
            budget: String::new(),
            location: String::new(),
            duration: String::new(),
            year: String::new(),
            poster_url: String::new(),
            notes: String::new(),
        }
    }
}

impl EntryForm {
    pub fn from_entry(entry: &MediaEntry) -> Self {
        Self {
            title: entry.title.clone(),
            kind: entry.kind.as_str().to_string(),
            director: entry.director.clone(),
            budget: entry.budget.clone(),
            location: entry.location.clone(),
            duration: entry.duration.clone(),
            year: entry.year.clone(),
            poster_url: entry.poster_url.clone().unwrap_or_default(),
            notes: entry.notes.clone().unwrap_or_default(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Kind => self.kind = value,
            Field::Director => self.director = value,
            Field::Budget => self.budget = value,
            Field::Location => self.location = value,
            Field::Duration => self.duration = value,
            Field::Year => self.year = value,
            Field::PosterUrl => self.poster_url = value,
            Field::Notes => self.notes = value,
        }
    }

    /// Build the request body. Fails with a user-facing message when the
    /// form cannot be submitted.
    pub fn to_draft(&self) -> Result<EntryDraft, String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".into());
        }
        let kind = MediaKind::coerce(&self.kind).map_err(|e| e.to_string())?;
        Ok(EntryDraft {
            title: self.title.clone(),
            kind,
            director: self.director.clone(),
            budget: self.budget.clone(),
            location: self.location.clone(),
            duration: self.duration.clone(),
            year: self.year.clone(),
            poster_url: Some(self.poster_url.clone()),
            notes: Some(self.notes.clone()),
        })
    }
}
