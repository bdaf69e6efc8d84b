//! Behavioural tests for the in-memory entry store.
//!
//! The same contract is exercised against PostgreSQL in `entry_repo.rs`.

use marquee_core::entry::{EntryChanges, MediaKind, NewEntry};
use marquee_db::store::{EntryStore, MemoryEntryStore};

fn movie(title: &str) -> NewEntry {
    NewEntry::new(title, MediaKind::Movie)
}

#[tokio::test]
async fn create_assigns_increasing_ids() {
    let store = MemoryEntryStore::new();
    let first = store.create(&movie("Alien")).await.unwrap();
    let second = store.create(&movie("Aliens")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(second.title, "Aliens");
    assert_eq!(second.kind, MediaKind::Movie);
    assert_eq!(second.director, None);
}

#[tokio::test]
async fn list_returns_newest_first_with_total() {
    let store = MemoryEntryStore::new();
    for i in 1..=25 {
        store.create(&movie(&format!("Movie {i}"))).await.unwrap();
    }

    let (items, total) = store.list(0, 10).await.unwrap();
    assert_eq!(total, 25);
    let ids: Vec<i64> = items.iter().map(|e| e.id).collect();
    assert_eq!(ids, (16..=25).rev().collect::<Vec<_>>());

    let (items, _) = store.list(20, 10).await.unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items.last().map(|e| e.id), Some(1));

    let (items, _) = store.list(100, 10).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn update_applies_only_supplied_fields() {
    let store = MemoryEntryStore::new();
    let mut input = movie("Inception");
    input.director = Some("Christopher Nolan".into());
    input.budget = Some("$160M".into());
    let created = store.create(&input).await.unwrap();

    let changes = EntryChanges {
        notes: Some("Dream within a dream".into()),
        kind: Some(MediaKind::TvShow),
        ..Default::default()
    };
    let updated = store.update(created.id, &changes).await.unwrap().unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Inception");
    assert_eq!(updated.kind, MediaKind::TvShow);
    assert_eq!(updated.director.as_deref(), Some("Christopher Nolan"));
    assert_eq!(updated.budget.as_deref(), Some("$160M"));
    assert_eq!(updated.notes.as_deref(), Some("Dream within a dream"));
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_missing_id_returns_none() {
    let store = MemoryEntryStore::new();
    let result = store.update(42, &EntryChanges::default()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_is_permanent_and_ids_are_not_reused() {
    let store = MemoryEntryStore::new();
    let created = store.create(&movie("Heat")).await.unwrap();

    assert!(store.delete(created.id).await.unwrap());
    assert!(store.find_by_id(created.id).await.unwrap().is_none());
    assert!(!store.delete(created.id).await.unwrap());

    let next = store.create(&movie("Ronin")).await.unwrap();
    assert_eq!(next.id, created.id + 1);
    let (_, total) = store.list(0, 10).await.unwrap();
    assert_eq!(total, 1);
}

#[tokio::test]
async fn entry_serializes_with_wire_field_names() {
    let store = MemoryEntryStore::new();
    let mut input = NewEntry::new("Dark", MediaKind::TvShow);
    input.poster_url = Some("https://example.com/dark.jpg".into());
    let entry = store.create(&input).await.unwrap();

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["type"], "TV_SHOW");
    assert_eq!(json["posterUrl"], "https://example.com/dark.jpg");
    assert!(json["notes"].is_null());
    assert!(json.get("createdAt").is_some());
}
