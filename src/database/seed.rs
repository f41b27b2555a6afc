use crate::models::{Activity, ActivityCatalog};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: [&'static str; 2],
}

const SEED: [SeedActivity; 9] = [
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: ["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: ["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: ["john@mergington.edu", "olivia@mergington.edu"],
    },
    // Sports
    SeedActivity {
        name: "Soccer Team",
        description: "Competitive soccer team practice and matches",
        schedule: "Mondays, Wednesdays, 4:00 PM - 6:00 PM",
        max_participants: 22,
        participants: ["alex@mergington.edu", "lisa@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Club",
        description: "Pickup games, drills, and intramural tournaments",
        schedule: "Tuesdays and Thursdays, 5:00 PM - 7:00 PM",
        max_participants: 15,
        participants: ["maria@mergington.edu", "kevin@mergington.edu"],
    },
    // Arts
    SeedActivity {
        name: "Art Club",
        description: "Drawing, painting, and mixed-media projects",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: ["nina@mergington.edu", "gabe@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Acting workshops, rehearsals, and school plays",
        schedule: "Fridays, 4:00 PM - 6:00 PM",
        max_participants: 25,
        participants: ["harper@mergington.edu", "leo@mergington.edu"],
    },
    // Academic
    SeedActivity {
        name: "Debate Team",
        description: "Debate techniques, research, and interschool competitions",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: ["sam@mergington.edu", "maya@mergington.edu"],
    },
    SeedActivity {
        name: "Science Olympiad",
        description: "Hands-on STEM challenges and contest preparation",
        schedule: "Saturdays, 9:00 AM - 12:00 PM",
        max_participants: 20,
        participants: ["ryan@mergington.edu", "zoe@mergington.edu"],
    },
];

/// The catalog every process starts from.
pub fn seed_catalog() -> ActivityCatalog {
    SEED.iter()
        .map(|s| {
            (
                s.name,
                Activity::new(
                    s.description,
                    s.schedule,
                    s.max_participants,
                    s.participants.iter().map(|p| p.to_string()).collect(),
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_nine_activities_in_order() {
        let catalog = seed_catalog();
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            vec![
                "Chess Club",
                "Programming Class",
                "Gym Class",
                "Soccer Team",
                "Basketball Club",
                "Art Club",
                "Drama Club",
                "Debate Team",
                "Science Olympiad",
            ]
        );
    }

    #[test]
    fn every_seed_activity_starts_with_two_participants() {
        for (name, activity) in seed_catalog().iter() {
            assert_eq!(activity.participants.len(), 2, "{name}");
            assert!(!activity.is_over_capacity(), "{name}");
        }
    }

    #[test]
    fn chess_club_seed_values() {
        let catalog = seed_catalog();
        let chess = catalog.get("Chess Club").unwrap();
        assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }
}
