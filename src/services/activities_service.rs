use tracing::info;

use crate::database::ActivityStore;
use crate::errors::ActivityError;
use crate::models::ActivityMap;

pub async fn list_activities(store: &ActivityStore) -> ActivityMap {
    store.list_activities().await
}

/// Adds `email` to the roster of `activity_name`. Returns the confirmation message.
pub async fn signup_for_activity(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let spots_left = store
        .update_activity(activity_name, |activity| {
            if activity.is_signed_up(email) {
                return Err(ActivityError::AlreadySignedUp);
            }
            if activity.is_full() {
                return Err(ActivityError::ActivityFull);
            }
            activity.participants.push(email.to_string());
            Ok(activity.spots_left())
        })
        .await?;

    info!(activity = %activity_name, %email, spots_left, "signup accepted");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub async fn unregister_from_activity(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    store
        .update_activity(activity_name, |activity| {
            let Some(pos) = activity.participants.iter().position(|p| p == email) else {
                return Err(ActivityError::NotRegistered);
            };
            activity.participants.remove(pos);
            Ok(())
        })
        .await?;

    info!(activity = %activity_name, %email, "unregister accepted");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed;
    use crate::models::Activity;

    fn seeded() -> ActivityStore {
        ActivityStore::new(seed::default_activities())
    }

    async fn roster(store: &ActivityStore, name: &str) -> Vec<String> {
        store.list_activities().await[name].participants.clone()
    }

    #[tokio::test]
    async fn signup_appends_in_order() {
        let store = seeded();
        let before = roster(&store, "Chess Club").await;

        let msg = signup_for_activity(&store, "Chess Club", "newstudent@mergington.edu")
            .await
            .unwrap();
        assert_eq!(msg, "Signed up newstudent@mergington.edu for Chess Club");

        let after = roster(&store, "Chess Club").await;
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().unwrap(), "newstudent@mergington.edu");
        assert_eq!(&after[..before.len()], &before[..]);
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected_and_roster_unchanged() {
        let store = seeded();
        signup_for_activity(&store, "Programming Class", "duplicate@mergington.edu")
            .await
            .unwrap();
        let before = roster(&store, "Programming Class").await;

        let err = signup_for_activity(&store, "Programming Class", "duplicate@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::AlreadySignedUp);
        assert!(err.to_string().contains("already signed up"));
        assert_eq!(roster(&store, "Programming Class").await, before);
    }

    #[tokio::test]
    async fn unknown_activity_is_not_found_for_both_operations() {
        let store = seeded();
        for email in ["a@mergington.edu", "michael@mergington.edu", ""] {
            assert_eq!(
                signup_for_activity(&store, "Nonexistent Activity", email).await,
                Err(ActivityError::NotFound)
            );
            assert_eq!(
                unregister_from_activity(&store, "Nonexistent Activity", email).await,
                Err(ActivityError::NotFound)
            );
        }
    }

    #[tokio::test]
    async fn activity_names_are_case_sensitive() {
        let store = seeded();
        assert_eq!(
            signup_for_activity(&store, "chess club", "a@mergington.edu").await,
            Err(ActivityError::NotFound)
        );
    }

    #[tokio::test]
    async fn full_activity_rejects_signup() {
        let mut map = ActivityMap::new();
        map.insert(
            "Tiny".to_string(),
            Activity::new("d", "s", 1, &["only@mergington.edu"]),
        );
        let store = ActivityStore::new(map);

        let err = signup_for_activity(&store, "Tiny", "late@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::ActivityFull);
        assert_eq!(roster(&store, "Tiny").await.len(), 1);
    }

    #[tokio::test]
    async fn duplicate_check_wins_over_capacity() {
        let mut map = ActivityMap::new();
        map.insert(
            "Tiny".to_string(),
            Activity::new("d", "s", 1, &["only@mergington.edu"]),
        );
        let store = ActivityStore::new(map);
        assert_eq!(
            signup_for_activity(&store, "Tiny", "only@mergington.edu").await,
            Err(ActivityError::AlreadySignedUp)
        );
    }

    #[tokio::test]
    async fn unregister_removes_exactly_that_email() {
        let store = seeded();
        signup_for_activity(&store, "Basketball Team", "unregister@mergington.edu")
            .await
            .unwrap();
        let before = roster(&store, "Basketball Team").await;

        let msg = unregister_from_activity(&store, "Basketball Team", "unregister@mergington.edu")
            .await
            .unwrap();
        assert!(msg.contains("Unregistered"));

        let after = roster(&store, "Basketball Team").await;
        assert_eq!(after.len(), before.len() - 1);
        assert!(!after.contains(&"unregister@mergington.edu".to_string()));
        assert!(after.contains(&"james@mergington.edu".to_string()));
    }

    #[tokio::test]
    async fn unregister_non_member_is_rejected() {
        let store = seeded();
        let before = roster(&store, "Tennis Club").await;

        let err = unregister_from_activity(&store, "Tennis Club", "notregistered@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::NotRegistered);
        assert!(err.to_string().contains("not registered"));
        assert_eq!(roster(&store, "Tennis Club").await, before);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_duplicate_signups_admit_one() {
        let store = seeded();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                signup_for_activity(&store, "Gym Class", "racer@mergington.edu").await
            }));
        }

        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);

        let count = roster(&store, "Gym Class")
            .await
            .iter()
            .filter(|p| p.as_str() == "racer@mergington.edu")
            .count();
        assert_eq!(count, 1);
    }
}
