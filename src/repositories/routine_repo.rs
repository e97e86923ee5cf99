use std::collections::BTreeSet;

use crate::error::{AppError, Result};
use crate::models::{routine::default_entries, RoutineEntry};
use crate::storage::StoreRef;

#[derive(Clone)]
pub struct RoutineRepository {
    store: StoreRef<RoutineEntry>,
}

impl RoutineRepository {
    pub fn new(store: StoreRef<RoutineEntry>) -> Self {
        Self { store }
    }

    /// Give `username` the default routine if they have no entries yet.
    ///
    /// Returns `true` when the default routine was inserted.
    pub async fn ensure_seeded(&self, username: &str) -> Result<bool> {
        let store = self.store.clone();
        let username = username.to_string();
        let seeded = tokio::task::spawn_blocking(move || {
            store.modify(|entries| {
                if entries.iter().any(|e| e.username == username) {
                    return Ok(false);
                }
                entries.extend(default_entries(&username));
                Ok(true)
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        Ok(seeded)
    }

    /// Distinct day labels for the user, in lexicographic order.
    pub async fn list_days(&self, username: &str) -> Result<Vec<String>> {
        let store = self.store.clone();
        let username = username.to_string();
        tokio::task::spawn_blocking(move || {
            let days: BTreeSet<String> = store
                .load()?
                .into_iter()
                .filter(|e| e.username == username)
                .map(|e| e.day)
                .collect();
            Ok(days.into_iter().collect())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Exercises for one day, in the order they were added.
    pub async fn list_exercises(&self, username: &str, day: &str) -> Result<Vec<String>> {
        let store = self.store.clone();
        let username = username.to_string();
        let day = day.to_string();
        tokio::task::spawn_blocking(move || {
            let exercises: Vec<String> = store
                .load()?
                .into_iter()
                .filter(|e| e.username == username && e.day == day)
                .map(|e| e.exercise)
                .collect();
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Append an exercise to a day. Adding the same exercise twice keeps both.
    pub async fn add_exercise(&self, username: &str, day: &str, exercise: &str) -> Result<()> {
        let store = self.store.clone();
        let entry = RoutineEntry::new(username, day, exercise);
        tokio::task::spawn_blocking(move || {
            store.modify(|entries| {
                entries.push(entry);
                Ok(())
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Remove every entry matching the triple. Returns how many were removed.
    pub async fn remove_exercise(
        &self,
        username: &str,
        day: &str,
        exercise: &str,
    ) -> Result<usize> {
        let store = self.store.clone();
        let username = username.to_string();
        let day = day.to_string();
        let exercise = exercise.to_string();
        tokio::task::spawn_blocking(move || {
            store.modify(|entries| {
                let before = entries.len();
                entries.retain(|e| !e.matches(&username, &day, &exercise));
                Ok(before - entries.len())
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryTable, Store};

    fn setup_repo() -> (RoutineRepository, StoreRef<RoutineEntry>) {
        let store = Store::new(MemoryTable::new());
        (RoutineRepository::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_fresh_user_gets_default_days() {
        let (repo, _) = setup_repo();

        assert!(repo.ensure_seeded("ana").await.unwrap());

        let days = repo.list_days("ana").await.unwrap();
        assert_eq!(days, vec!["Día 1", "Día 2", "Día 3", "Día 4", "Día 5"]);
    }

    #[tokio::test]
    async fn test_day_one_exercises_in_order() {
        let (repo, _) = setup_repo();
        repo.ensure_seeded("ana").await.unwrap();

        let exercises = repo.list_exercises("ana", "Día 1").await.unwrap();

        assert_eq!(
            exercises,
            vec![
                "Barbell Bench Press",
                "Incline Barbell Bench Press",
                "Chest Fly (Machine)",
                "Machine Shoulder Press",
                "Dumbbell Lateral Raise",
                "Triceps Pushdown",
                "Cable Overhead Triceps Extension",
            ]
        );
    }

    #[tokio::test]
    async fn test_ensure_seeded_is_idempotent() {
        let (repo, store) = setup_repo();

        assert!(repo.ensure_seeded("ana").await.unwrap());
        let after_first = store.load().unwrap().len();
        assert!(!repo.ensure_seeded("ana").await.unwrap());

        assert_eq!(store.load().unwrap().len(), after_first);
    }

    #[tokio::test]
    async fn test_seed_skips_user_with_custom_routine() {
        let (repo, _) = setup_repo();
        repo.add_exercise("ana", "Lunes", "Pull-up").await.unwrap();

        assert!(!repo.ensure_seeded("ana").await.unwrap());
        assert_eq!(repo.list_days("ana").await.unwrap(), vec!["Lunes"]);
    }

    #[tokio::test]
    async fn test_seeding_is_per_user() {
        let (repo, _) = setup_repo();
        repo.ensure_seeded("ana").await.unwrap();

        assert!(repo.list_days("luis").await.unwrap().is_empty());
        assert!(repo.ensure_seeded("luis").await.unwrap());
        assert_eq!(repo.list_days("luis").await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_days_sort_lexicographically() {
        let (repo, _) = setup_repo();
        for day in ["Día 2", "Día 10", "Día 1"] {
            repo.add_exercise("ana", day, "Plank").await.unwrap();
        }

        let days = repo.list_days("ana").await.unwrap();

        assert_eq!(days, vec!["Día 1", "Día 10", "Día 2"]);
    }

    #[tokio::test]
    async fn test_add_then_remove_restores_list() {
        let (repo, _) = setup_repo();
        repo.ensure_seeded("ana").await.unwrap();
        let before = repo.list_exercises("ana", "Día 2").await.unwrap();

        repo.add_exercise("ana", "Día 2", "Nordic Curl").await.unwrap();
        assert_eq!(
            repo.list_exercises("ana", "Día 2").await.unwrap().last(),
            Some(&"Nordic Curl".to_string())
        );
        let removed = repo
            .remove_exercise("ana", "Día 2", "Nordic Curl")
            .await
            .unwrap();

        assert_eq!(removed, 1);
        assert_eq!(repo.list_exercises("ana", "Día 2").await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_duplicates_are_kept_and_removed_together() {
        let (repo, _) = setup_repo();
        repo.add_exercise("ana", "Día 1", "Dips").await.unwrap();
        repo.add_exercise("ana", "Día 1", "Dips").await.unwrap();

        assert_eq!(
            repo.list_exercises("ana", "Día 1").await.unwrap(),
            vec!["Dips", "Dips"]
        );

        let removed = repo.remove_exercise("ana", "Día 1", "Dips").await.unwrap();

        assert_eq!(removed, 2);
        assert!(repo.list_exercises("ana", "Día 1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_only_touches_matching_user_and_day() {
        let (repo, _) = setup_repo();
        repo.ensure_seeded("ana").await.unwrap();
        repo.ensure_seeded("luis").await.unwrap();

        // Seated Calf Raise is on both Día 2 and Día 5
        repo.remove_exercise("ana", "Día 2", "Seated Calf Raise")
            .await
            .unwrap();

        let ana_day5 = repo.list_exercises("ana", "Día 5").await.unwrap();
        let luis_day2 = repo.list_exercises("luis", "Día 2").await.unwrap();
        assert!(ana_day5.contains(&"Seated Calf Raise".to_string()));
        assert!(luis_day2.contains(&"Seated Calf Raise".to_string()));
    }
}
