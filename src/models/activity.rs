use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Signup order; an email appears at most once.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }
}

/// Activities keyed by name, kept in insertion order.
///
/// Serializes as a JSON object whose keys follow that order, so listing the
/// catalog is stable across requests and mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `name`. A replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.get_mut(&name) {
            Some(existing) => *existing = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, activity)| activity)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, activity)| activity)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }
}

impl<N: Into<String>> FromIterator<(N, Activity)> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = (N, Activity)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (name, activity) in iter {
            catalog.insert(name, activity);
        }
        catalog
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut catalog = ActivityCatalog::new();
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    catalog.insert(name, activity);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club(max: u32, participants: &[&str]) -> Activity {
        Activity::new(
            "desc",
            "Mondays",
            max,
            participants.iter().map(|p| p.to_string()).collect(),
        )
    }

    #[test]
    fn serializes_in_insertion_order() {
        let catalog: ActivityCatalog = [("Zeta", club(2, &[])), ("Alpha", club(3, &["a@x"]))]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&catalog).unwrap();
        let zeta = json.find("\"Zeta\"").unwrap();
        let alpha = json.find("\"Alpha\"").unwrap();
        assert!(zeta < alpha);
        assert!(json.contains("\"max_participants\":3"));
    }

    #[test]
    fn deserialize_keeps_document_order() {
        let raw = r#"{
            "B": {"description": "b", "schedule": "s", "max_participants": 1, "participants": []},
            "A": {"description": "a", "schedule": "s", "max_participants": 1, "participants": ["x@y"]}
        }"#;
        let catalog: ActivityCatalog = serde_json::from_str(raw).unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["B", "A"]);
        assert!(catalog.get("A").unwrap().has_participant("x@y"));
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut catalog: ActivityCatalog =
            [("One", club(1, &[])), ("Two", club(1, &[]))].into_iter().collect();
        catalog.insert("One", club(9, &[]));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["One", "Two"]);
        assert_eq!(catalog.get("One").unwrap().max_participants, 9);
    }

    #[test]
    fn over_capacity_only_past_the_limit() {
        assert!(!club(2, &["a", "b"]).is_over_capacity());
        assert!(club(1, &["a", "b"]).is_over_capacity());
    }
}
