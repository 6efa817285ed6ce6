//! In-memory resource stores backing the admin CRUD screens.
//!
//! A [`ResourceStore`] is the sole owner of one entity collection and the only
//! place ids get assigned. Every operation is async with a simulated network
//! delay so the UI exercises the same states it would against a real API; a
//! database-backed implementation could replace this behind the same four
//! operations without touching any caller.

use std::{
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
    time::Duration,
};

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{OngoingProject, Project, Review};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Update or remove addressed an id that is not in the collection.
    /// Signalled explicitly rather than silently ignored.
    #[error("no entity with id {id}")]
    NotFound { id: u32 },
    /// Entity rejected by store-side validation.
    #[error("invalid entity: {0}")]
    Invalid(String),
}

/// One entity kind managed by a [`ResourceStore`].
pub trait Resource: Clone + PartialEq + Send + Sync + 'static {
    /// Resource name used in logs.
    const KIND: &'static str;

    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);

    /// Store-boundary validation. The edit dialogs enforce the same rules
    /// client-side, but callers bypassing the dialog must not be able to
    /// insert invalid entities.
    fn validate(&self) -> Result<(), StoreError>;
}

/// Per-operation artificial delays, mimicking network round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub fetch: Duration,
    pub create: Duration,
    pub update: Duration,
    pub remove: Duration,
}

impl Latency {
    /// The delays the UI is tuned against.
    pub const fn simulated() -> Self {
        Self {
            fetch: Duration::from_millis(500),
            create: Duration::from_millis(800),
            update: Duration::from_millis(800),
            remove: Duration::from_millis(600),
        }
    }

    /// No delays; used by tests and internal aggregation.
    pub const fn none() -> Self {
        Self {
            fetch: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            remove: Duration::ZERO,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn simulate_delay(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(target_arch = "wasm32")]
async fn simulate_delay(delay: Duration) {
    if !delay.is_zero() {
        gloo_timers::future::TimeoutFuture::new(delay.as_millis() as u32).await;
    }
}

/// Ordered in-memory collection of one resource type.
///
/// Cloning the store clones the handle, not the collection; all clones see
/// the same entities. Concurrent updates to the same id are last-write-wins
/// with no conflict detection. The lock is only held for the in-memory
/// mutation, never across the simulated delay.
#[derive(Debug)]
pub struct ResourceStore<T> {
    items: Arc<RwLock<Vec<T>>>,
    latency: Latency,
}

impl<T> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            latency: self.latency,
        }
    }
}

impl<T: Resource> ResourceStore<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self::with_latency(seed, Latency::simulated())
    }

    pub fn with_latency(seed: Vec<T>, latency: Latency) -> Self {
        Self {
            items: Arc::new(RwLock::new(seed)),
            latency,
        }
    }

    // The store is also used from single-threaded wasm, where a poisoned
    // lock cannot happen; on native we recover the guard rather than panic.
    fn read_items(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.items.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_items(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.items.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot copy of the whole collection.
    pub async fn fetch_all(&self) -> Vec<T> {
        simulate_delay(self.latency.fetch).await;
        self.read_items().clone()
    }

    /// Validate the draft, assign the next id (max existing + 1, or 1 for an
    /// empty collection), append, and return the stored entity.
    pub async fn create(&self, draft: T) -> Result<T, StoreError> {
        simulate_delay(self.latency.create).await;
        draft.validate()?;

        let mut items = self.write_items();
        let next_id = items.iter().map(Resource::id).max().unwrap_or(0) + 1;
        let mut stored = draft;
        stored.set_id(next_id);
        items.push(stored.clone());
        tracing::debug!(kind = T::KIND, id = next_id, "entity created");
        Ok(stored)
    }

    /// Replace the entity with the same id. An unknown id is a
    /// [`StoreError::NotFound`], not a silent no-op.
    pub async fn update(&self, entity: T) -> Result<T, StoreError> {
        simulate_delay(self.latency.update).await;
        entity.validate()?;

        let mut items = self.write_items();
        match items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                tracing::debug!(kind = T::KIND, id = entity.id(), "entity updated");
                Ok(entity)
            },
            None => Err(StoreError::NotFound { id: entity.id() }),
        }
    }

    /// Remove the entity with the given id, or [`StoreError::NotFound`].
    pub async fn remove(&self, id: u32) -> Result<(), StoreError> {
        simulate_delay(self.latency.remove).await;

        let mut items = self.write_items();
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Err(StoreError::NotFound { id });
        }
        tracing::debug!(kind = T::KIND, id, "entity removed");
        Ok(())
    }

    /// Current collection size, without the simulated delay. Used for
    /// dashboard aggregation.
    pub fn count(&self) -> usize {
        self.read_items().len()
    }

    /// Delay-free snapshot for internal aggregation (stats, section status).
    pub fn snapshot(&self) -> Vec<T> {
        self.read_items().clone()
    }
}

fn require(field: &str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::Invalid(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_iso_date(field: &str, value: &str) -> Result<(), StoreError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| StoreError::Invalid(format!("{field} must be an ISO date (YYYY-MM-DD)")))
}

impl Resource for Project {
    const KIND: &'static str = "project";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), StoreError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("image", &self.image)?;
        Ok(())
    }
}

impl Resource for OngoingProject {
    const KIND: &'static str = "ongoing-project";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), StoreError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("image", &self.image)?;
        if self.progress > 100 {
            return Err(StoreError::Invalid(format!(
                "progress must be 0-100, got {}",
                self.progress
            )));
        }
        require_iso_date("start_date", &self.start_date)?;
        require_iso_date("estimated_completion", &self.estimated_completion)?;
        Ok(())
    }
}

impl Resource for Review {
    const KIND: &'static str = "review";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), StoreError> {
        require("name", &self.name)?;
        require("role", &self.role)?;
        require("text", &self.text)?;
        if !(1..=5).contains(&self.rating) {
            return Err(StoreError::Invalid(format!(
                "rating must be 1-5, got {}",
                self.rating
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{CaseStudy, Milestone},
        seed::{seed_ongoing_projects, seed_projects, seed_reviews},
    };

    fn project(title: &str) -> Project {
        Project {
            id: 0,
            title: title.to_string(),
            description: "A test project".to_string(),
            image: "https://example.com/cover.jpg".to_string(),
            tags: vec!["rust".to_string()],
            github: "https://github.com/example".to_string(),
            demo: "https://demo.example.com".to_string(),
            case_study: Default::default(),
        }
    }

    fn empty_store<T: Resource>() -> ResourceStore<T> {
        ResourceStore::with_latency(Vec::new(), Latency::none())
    }

    #[tokio::test]
    async fn create_assigns_strictly_increasing_ids_from_one() {
        let store = empty_store::<Project>();
        let mut ids = Vec::new();
        for i in 0..4 {
            let created = store
                .create(project(&format!("Project {i}")))
                .await
                .expect("create");
            ids.push(created.id);
        }
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn create_then_fetch_round_trips_every_field() {
        let store = empty_store::<Project>();
        let mut draft = project("Round Trip");
        draft.case_study = CaseStudy {
            challenge: "c".to_string(),
            solution: "s".to_string(),
            outcome: "o".to_string(),
            tech_stack: vec!["Rust".to_string(), "Yew".to_string()],
        };
        let created = store.create(draft.clone()).await.expect("create");

        let all = store.fetch_all().await;
        assert_eq!(all.len(), 1);
        draft.id = created.id;
        assert_eq!(all[0], draft);
    }

    #[tokio::test]
    async fn create_after_existing_ids_continues_from_max() {
        // Store holds ids [1, 2, 3]; the next create must yield id 4 and a
        // four-entity collection.
        let store =
            ResourceStore::with_latency(seed_projects()[..3].to_vec(), Latency::none());
        let created = store.create(project("X")).await.expect("create");
        assert_eq!(created.id, 4);

        let all = store.fetch_all().await;
        assert_eq!(all.len(), 4);
        assert!(all.iter().any(|p| p.id == 4));
    }

    #[tokio::test]
    async fn update_replaces_only_the_target_entity() {
        let store = ResourceStore::with_latency(seed_projects(), Latency::none());
        let before = store.fetch_all().await;

        let mut edited = before[1].clone();
        edited.title = "Renamed".to_string();
        let stored = store.update(edited.clone()).await.expect("update");
        assert_eq!(stored, edited);

        let after = store.fetch_all().await;
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(&after) {
            if old.id == edited.id {
                assert_eq!(new, &edited);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let store = ResourceStore::with_latency(seed_projects(), Latency::none());
        let mut ghost = project("Ghost");
        ghost.id = 999;
        assert_eq!(
            store.update(ghost).await,
            Err(StoreError::NotFound { id: 999 })
        );
        assert_eq!(store.count(), seed_projects().len());
    }

    #[tokio::test]
    async fn editing_progress_preserves_everything_else() {
        let store = ResourceStore::with_latency(seed_ongoing_projects(), Latency::none());
        let original = store
            .fetch_all()
            .await
            .into_iter()
            .find(|p| p.progress == 40)
            .expect("seed has a 40% project");

        let mut edited = original.clone();
        edited.progress = 55;
        let stored = store.update(edited).await.expect("update");

        assert_eq!(stored.progress, 55);
        assert_eq!(stored.id, original.id);
        assert_eq!(stored.tags, original.tags);
        assert_eq!(stored.milestones, original.milestones);
    }

    #[tokio::test]
    async fn remove_drops_exactly_one_entity() {
        let store = ResourceStore::with_latency(seed_reviews(), Latency::none());
        let before = store.fetch_all().await;
        assert_eq!(before.len(), 6);

        store.remove(3).await.expect("remove");

        let after = store.fetch_all().await;
        assert_eq!(after.len(), 5);
        assert!(after.iter().all(|r| r.id != 3));
        // Position-independent: every surviving entity is unchanged.
        for review in &after {
            assert_eq!(before.iter().find(|r| r.id == review.id), Some(review));
        }
    }

    #[tokio::test]
    async fn remove_of_absent_id_is_not_found_and_changes_nothing() {
        let store = ResourceStore::with_latency(seed_reviews(), Latency::none());
        assert_eq!(
            store.remove(42).await,
            Err(StoreError::NotFound { id: 42 })
        );
        assert_eq!(store.count(), 6);
    }

    #[tokio::test]
    async fn store_rejects_out_of_range_progress() {
        let store = empty_store::<OngoingProject>();
        let draft = OngoingProject {
            id: 0,
            title: "Overflow".to_string(),
            description: "d".to_string(),
            image: "i".to_string(),
            tags: vec![],
            progress: 101,
            start_date: "2025-01-01".to_string(),
            estimated_completion: "2025-02-01".to_string(),
            milestones: vec![Milestone {
                title: "Kickoff".to_string(),
                completed: true,
            }],
        };
        assert!(matches!(
            store.create(draft).await,
            Err(StoreError::Invalid(_))
        ));
        assert_eq!(store.count(), 0);
    }

    #[tokio::test]
    async fn store_rejects_out_of_range_rating() {
        let store = ResourceStore::with_latency(seed_reviews(), Latency::none());
        let mut review = store.fetch_all().await.remove(0);
        review.rating = 6;
        assert!(matches!(
            store.update(review).await,
            Err(StoreError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn store_rejects_missing_required_fields() {
        let store = empty_store::<Project>();
        let mut draft = project("  ");
        draft.title = "   ".to_string();
        assert!(matches!(
            store.create(draft).await,
            Err(StoreError::Invalid(_))
        ));
    }
}
