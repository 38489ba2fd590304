//! Seed dataset for the activity catalog.
//!
//! The catalog is created once at process start from this fixed set of
//! activities; entries are never added or removed at runtime.

use crate::api::{Activity, Catalog};

/// Build the seed catalog.
pub fn seed_catalog() -> Catalog {
    let entries = [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"][..],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"][..],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"][..],
        ),
        (
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"][..],
        ),
        (
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"][..],
        ),
        (
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"][..],
        ),
        (
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"][..],
        ),
        (
            "Math Club",
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"][..],
        ),
        (
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"][..],
        ),
    ];

    entries
        .into_iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            (
                name.to_string(),
                Activity::new(
                    description,
                    schedule,
                    max_participants,
                    participants.iter().map(|p| p.to_string()).collect(),
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_contents() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 9);
        assert!(catalog.contains_key("Soccer Team"));
        assert!(catalog.contains_key("Basketball Team"));
        assert!(catalog.contains_key("Chess Club"));
    }

    #[test]
    fn test_seed_rosters_have_no_duplicates() {
        for (name, activity) in seed_catalog() {
            let mut emails = activity.participants.clone();
            emails.sort();
            emails.dedup();
            assert_eq!(
                emails.len(),
                activity.participants.len(),
                "duplicate participant in {}",
                name
            );
        }
    }

    #[test]
    fn test_seed_rosters_fit_capacity() {
        for (name, activity) in seed_catalog() {
            assert!(
                activity.participants.len() <= activity.max_participants as usize,
                "{} seeded over capacity",
                name
            );
        }
    }
}
