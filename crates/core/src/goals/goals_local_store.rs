//! Goal store persisted as a single JSON document in a key-value slot.
//!
//! The whole collection is read once when the store is opened and rewritten
//! wholesale after every mutation. This keeps the storage format trivial but
//! costs O(n) per write, which is fine up to a few hundred goals and not
//! beyond. There is no conflict detection: two processes sharing a slot
//! overwrite each other's changes (last writer wins).

use async_trait::async_trait;
use log::{debug, error, warn};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::goals_model::{Goal, GoalUpdate, NewGoal};
use super::goals_samples::sample_goals;
use super::goals_traits::GoalStoreTrait;
use crate::errors::{Error, Result};
use crate::kv::KeyValueStoreTrait;
use crate::utils::Clock;

pub struct LocalGoalStore {
    kv: Arc<dyn KeyValueStoreTrait>,
    slot: String,
    clock: Arc<dyn Clock>,
    // Held across the persist await so that in-process mutations apply one at a time.
    goals: Mutex<Vec<Goal>>,
}

impl LocalGoalStore {
    /// Opens the store, loading whatever the slot currently holds.
    ///
    /// An unwritten slot is treated as an empty collection.
    pub fn open(
        kv: Arc<dyn KeyValueStoreTrait>,
        slot: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let slot = slot.into();
        let goals = match kv.get_value(&slot)? {
            Some(raw) => decode_goals(&slot, &raw)?,
            None => Vec::new(),
        };
        debug!("Opened goal slot '{}' with {} goals", slot, goals.len());
        Ok(Self {
            kv,
            slot,
            clock,
            goals: Mutex::new(goals),
        })
    }

    /// Opens the store and writes the sample goals if the slot was never written.
    ///
    /// A slot holding an empty array is left alone: the user deleted everything.
    pub async fn open_seeded(
        kv: Arc<dyn KeyValueStoreTrait>,
        slot: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let slot = slot.into();
        let is_unwritten = kv.get_value(&slot)?.is_none();
        let store = Self::open(kv, slot, clock)?;
        if is_unwritten {
            let samples = sample_goals();
            debug!(
                "Seeding goal slot '{}' with {} sample goals",
                store.slot,
                samples.len()
            );
            let mut goals = store.goals.lock().await;
            store.persist(&samples).await?;
            *goals = samples;
        }
        Ok(store)
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    async fn persist(&self, goals: &[Goal]) -> Result<()> {
        let raw = serde_json::to_string(goals)?;
        self.kv.set_value(&self.slot, &raw).await.map_err(|e| {
            error!("Failed to persist goal slot '{}': {}", self.slot, e);
            e
        })
    }

    /// Applies `mutate` to a copy of the collection, persists the copy and only
    /// then swaps it in. A failed mutation or write leaves the collection untouched.
    async fn mutate<T, F>(&self, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Goal>) -> Result<T> + Send,
        T: Send,
    {
        let mut goals = self.goals.lock().await;
        let mut next = goals.clone();
        let output = mutate(&mut next)?;
        self.persist(&next).await?;
        *goals = next;
        Ok(output)
    }
}

fn decode_goals(slot: &str, raw: &str) -> Result<Vec<Goal>> {
    serde_json::from_str(raw).map_err(|e| {
        error!("Goal slot '{}' holds malformed JSON: {}", slot, e);
        Error::Storage(format!("Goal slot '{}' is not a goal list: {}", slot, e))
    })
}

fn find_goal<'a>(goals: &'a mut [Goal], goal_id: &str) -> Result<&'a mut Goal> {
    goals
        .iter_mut()
        .find(|g| g.id == goal_id)
        .ok_or_else(|| Error::not_found(goal_id))
}

#[async_trait]
impl GoalStoreTrait for LocalGoalStore {
    async fn list(&self) -> Result<Vec<Goal>> {
        Ok(self.goals.lock().await.clone())
    }

    async fn get(&self, goal_id: &str) -> Result<Goal> {
        self.goals
            .lock()
            .await
            .iter()
            .find(|g| g.id == goal_id)
            .cloned()
            .ok_or_else(|| Error::not_found(goal_id))
    }

    async fn create(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        let goal = new_goal.into_goal(Uuid::new_v4().to_string(), self.clock.today());
        debug!("Creating goal {} ('{}')", goal.id, goal.name);

        let created = goal.clone();
        self.mutate(move |goals| {
            goals.push(goal);
            Ok(())
        })
        .await?;
        Ok(created)
    }

    async fn update(&self, goal_id: &str, goal_update: GoalUpdate) -> Result<Goal> {
        goal_update.validate()?;
        debug!("Updating goal {}", goal_id);
        self.mutate(|goals| {
            let goal = find_goal(goals, goal_id)?;
            goal_update.apply_to(goal);
            Ok(goal.clone())
        })
        .await
    }

    async fn remove(&self, goal_id: &str) -> Result<()> {
        debug!("Deleting goal {}", goal_id);
        self.mutate(|goals| {
            let index = goals
                .iter()
                .position(|g| g.id == goal_id)
                .ok_or_else(|| Error::not_found(goal_id))?;
            goals.remove(index);
            Ok(())
        })
        .await
    }

    async fn deposit(&self, goal_id: &str, amount: Decimal) -> Result<Goal> {
        if amount <= Decimal::ZERO {
            warn!("Rejected deposit of {} into goal {}", amount, goal_id);
            return Err(Error::InvalidAmount(amount));
        }
        debug!("Depositing {} into goal {}", amount, goal_id);
        self.mutate(|goals| {
            let goal = find_goal(goals, goal_id)?;
            goal.saved_amount = goal.saved_amount.checked_add(amount).ok_or_else(|| {
                warn!("Deposit of {} would overflow goal {}", amount, goal_id);
                Error::InvalidAmount(amount)
            })?;
            Ok(goal.clone())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_GOALS_SLOT;
    use crate::kv::InMemoryKeyValueStore;
    use crate::utils::FixedClock;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(today()))
    }

    fn new_goal(name: &str, target: Decimal) -> NewGoal {
        NewGoal {
            name: name.to_string(),
            target_amount: target,
            category: "Travel".to_string(),
            deadline: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        }
    }

    /// Key-value store whose writes always fail.
    struct ReadOnlyKeyValueStore;

    #[async_trait]
    impl KeyValueStoreTrait for ReadOnlyKeyValueStore {
        fn get_value(&self, _: &str) -> Result<Option<String>> {
            Ok(Some("[]".to_string()))
        }

        async fn set_value(&self, _: &str, _: &str) -> Result<()> {
            Err(Error::Storage("disk is read-only".to_string()))
        }
    }

    #[tokio::test]
    async fn test_create_assigns_store_fields() {
        let store = LocalGoalStore::open(
            Arc::new(InMemoryKeyValueStore::new()),
            DEFAULT_GOALS_SLOT,
            clock(),
        )
        .unwrap();

        let goal = store.create(new_goal("  Japan trip ", dec!(5000))).await.unwrap();
        assert!(!goal.id.is_empty());
        assert_eq!(goal.name, "Japan trip");
        assert_eq!(goal.saved_amount, Decimal::ZERO);
        assert_eq!(goal.created_at, today());

        let listed = store.list().await.unwrap();
        assert_eq!(listed, vec![goal]);
    }

    #[tokio::test]
    async fn test_list_preserves_creation_order() {
        let store = LocalGoalStore::open(
            Arc::new(InMemoryKeyValueStore::new()),
            DEFAULT_GOALS_SLOT,
            clock(),
        )
        .unwrap();

        for name in ["first", "second", "third"] {
            store.create(new_goal(name, dec!(100))).await.unwrap();
        }
        let names: Vec<String> = store.list().await.unwrap().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_collection_survives_reopen() {
        let kv: Arc<dyn KeyValueStoreTrait> = Arc::new(InMemoryKeyValueStore::new());
        let store = LocalGoalStore::open(kv.clone(), DEFAULT_GOALS_SLOT, clock()).unwrap();
        let goal = store.create(new_goal("Laptop", dec!(1500))).await.unwrap();
        store.deposit(&goal.id, dec!(250.50)).await.unwrap();

        let reopened = LocalGoalStore::open(kv, DEFAULT_GOALS_SLOT, clock()).unwrap();
        let loaded = reopened.get(&goal.id).await.unwrap();
        assert_eq!(loaded.saved_amount, dec!(250.50));
        assert_eq!(loaded.created_at, today());
    }

    #[tokio::test]
    async fn test_update_merges_only_provided_fields() {
        let store = LocalGoalStore::open(
            Arc::new(InMemoryKeyValueStore::new()),
            DEFAULT_GOALS_SLOT,
            clock(),
        )
        .unwrap();
        let goal = store.create(new_goal("Phone", dec!(1200))).await.unwrap();
        store.deposit(&goal.id, dec!(200)).await.unwrap();

        let updated = store
            .update(
                &goal.id,
                GoalUpdate {
                    target_amount: Some(dec!(900)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, goal.id);
        assert_eq!(updated.name, "Phone");
        assert_eq!(updated.target_amount, dec!(900));
        assert_eq!(updated.saved_amount, dec!(200));
        assert_eq!(updated.created_at, goal.created_at);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name() {
        let store = LocalGoalStore::open(
            Arc::new(InMemoryKeyValueStore::new()),
            DEFAULT_GOALS_SLOT,
            clock(),
        )
        .unwrap();
        let goal = store.create(new_goal("Phone", dec!(1200))).await.unwrap();

        let result = store
            .update(
                &goal.id,
                GoalUpdate {
                    name: Some("   ".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(store.get(&goal.id).await.unwrap().name, "Phone");
    }

    #[tokio::test]
    async fn test_unknown_id_reports_not_found() {
        let store = LocalGoalStore::open(
            Arc::new(InMemoryKeyValueStore::new()),
            DEFAULT_GOALS_SLOT,
            clock(),
        )
        .unwrap();
        store.create(new_goal("Phone", dec!(1200))).await.unwrap();

        assert!(matches!(store.get("missing").await, Err(Error::NotFound(_))));
        assert!(matches!(
            store.update("missing", GoalUpdate::default()).await,
            Err(Error::NotFound(_))
        ));
        assert!(matches!(store.remove("missing").await, Err(Error::NotFound(_))));
        assert!(matches!(
            store.deposit("missing", dec!(10)).await,
            Err(Error::NotFound(_))
        ));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_non_positive_deposit_is_rejected_without_writing() {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        let store = LocalGoalStore::open(kv.clone(), DEFAULT_GOALS_SLOT, clock()).unwrap();
        let goal = store.create(new_goal("Phone", dec!(1200))).await.unwrap();
        let before = kv.get_value(DEFAULT_GOALS_SLOT).unwrap();

        for amount in [Decimal::ZERO, dec!(-50)] {
            match store.deposit(&goal.id, amount).await {
                Err(Error::InvalidAmount(rejected)) => assert_eq!(rejected, amount),
                other => panic!("expected InvalidAmount, got {:?}", other),
            }
        }

        assert_eq!(kv.get_value(DEFAULT_GOALS_SLOT).unwrap(), before);
        assert_eq!(store.get(&goal.id).await.unwrap().saved_amount, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_overflowing_deposit_is_rejected() {
        let kv: Arc<dyn KeyValueStoreTrait> = Arc::new(InMemoryKeyValueStore::new());
        let store = LocalGoalStore::open(kv.clone(), DEFAULT_GOALS_SLOT, clock()).unwrap();
        let goal = store.create(new_goal("Moonshot", dec!(1))).await.unwrap();

        let full = store.deposit(&goal.id, Decimal::MAX).await.unwrap();
        assert_eq!(full.saved_amount, Decimal::MAX);
        let before = kv.get_value(DEFAULT_GOALS_SLOT).unwrap();

        match store.deposit(&goal.id, dec!(1)).await {
            Err(Error::InvalidAmount(rejected)) => assert_eq!(rejected, dec!(1)),
            other => panic!("expected InvalidAmount, got {:?}", other),
        }
        assert_eq!(store.get(&goal.id).await.unwrap(), full);
        assert_eq!(kv.get_value(DEFAULT_GOALS_SLOT).unwrap(), before);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_collection_unchanged() {
        let store =
            LocalGoalStore::open(Arc::new(ReadOnlyKeyValueStore), DEFAULT_GOALS_SLOT, clock())
                .unwrap();

        let result = store.create(new_goal("Phone", dec!(1200))).await;
        assert!(matches!(result, Err(Error::Storage(_))));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_slot_fails_to_open() {
        let kv = Arc::new(InMemoryKeyValueStore::with_slot(DEFAULT_GOALS_SLOT, "{not json"));
        let result = LocalGoalStore::open(kv, DEFAULT_GOALS_SLOT, clock());
        assert!(matches!(result, Err(Error::Storage(_))));
    }

    #[tokio::test]
    async fn test_seeding_only_fills_an_unwritten_slot() {
        let kv: Arc<dyn KeyValueStoreTrait> = Arc::new(InMemoryKeyValueStore::new());
        let seeded = LocalGoalStore::open_seeded(kv.clone(), DEFAULT_GOALS_SLOT, clock())
            .await
            .unwrap();
        assert_eq!(seeded.list().await.unwrap().len(), 10);
        assert!(kv.get_value(DEFAULT_GOALS_SLOT).unwrap().is_some());

        for goal in seeded.list().await.unwrap() {
            seeded.remove(&goal.id).await.unwrap();
        }

        let reopened = LocalGoalStore::open_seeded(kv, DEFAULT_GOALS_SLOT, clock())
            .await
            .unwrap();
        assert!(reopened.list().await.unwrap().is_empty());
    }
}
