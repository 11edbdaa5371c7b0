use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::errors::StartupError;
use crate::models::{Activity, ActivityMap};

pub fn default_activities() -> ActivityMap {
    let seed = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice drills and compete in inter-school basketball games",
                "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
                15,
                &["james@mergington.edu"],
            ),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Improve your serve and play friendly matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                10,
                &["lucas@mergington.edu"],
            ),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
                &["ava@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct and stage school theater productions",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
                &["mia@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Fridays, 2:00 PM - 3:30 PM",
                16,
                &["liam@mergington.edu"],
            ),
        ),
        (
            "Science Club",
            Activity::new(
                "Run hands-on experiments and explore scientific ideas",
                "Mondays, 3:30 PM - 4:30 PM",
                20,
                &["isabella@mergington.edu"],
            ),
        ),
    ];

    seed.into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}

/// Reads a seed file shaped like the `GET /activities` response.
pub fn load_seed_file(path: &Path) -> Result<ActivityMap, StartupError> {
    let raw = fs::read_to_string(path).map_err(|source| StartupError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    let activities: ActivityMap =
        serde_json::from_str(&raw).map_err(|source| StartupError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_seed(&activities)?;
    Ok(activities)
}

pub fn validate_seed(activities: &ActivityMap) -> Result<(), StartupError> {
    for (name, activity) in activities {
        let invalid = |reason: &str| StartupError::InvalidSeed {
            activity: name.clone(),
            reason: reason.to_string(),
        };

        if activity.max_participants == 0 {
            return Err(invalid("max_participants must be positive"));
        }
        if activity.participants.len() > activity.max_participants as usize {
            return Err(invalid("more participants than max_participants"));
        }
        let mut seen = HashSet::new();
        if !activity.participants.iter().all(|p| seen.insert(p.as_str())) {
            return Err(invalid("duplicate participant email"));
        }
    }
    Ok(())
}
