//! Wire Models
//!
//! Data structures matching the backend's JSON payloads.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Response wrapper used by `/dashboard`, `/issues` and `/trends`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default = "none")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(error.into()) }
    }

    /// Payload of a logically successful response.
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}

/// Acknowledgement returned by `/auth/login` and `/refresh`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Ack {
    pub fn accepted() -> Self {
        Self { success: true, ..Default::default() }
    }

    pub fn rejected() -> Self {
        Self::default()
    }
}

/// A `{name, value}` bucket of the dashboard statistics
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedCount {
    pub name: String,
    pub value: u64,
}

impl NamedCount {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self { name: name.into(), value }
    }
}

/// Completion buckets for one category
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryDetail {
    pub total: u64,
    pub done: u64,
    #[serde(rename = "inProgress")]
    pub in_progress: u64,
    pub backlog: u64,
    pub other: u64,
    #[serde(default)]
    pub completion: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardSnapshot {
    pub total_issues: u64,
    #[serde(default)]
    pub category_stats: Vec<NamedCount>,
    #[serde(default)]
    pub status_stats: Vec<NamedCount>,
    #[serde(default)]
    pub priority_stats: Vec<NamedCount>,
    #[serde(default)]
    pub category_details: OrderedMap<CategoryDetail>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Issue {
    pub issue_key: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub summary: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub status: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub category: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub priority: String,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub updated_date: Option<String>,
}

/// One week of a trend series; `change` is the backend's week-over-week delta in percent
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendPoint {
    pub week: String,
    pub count: u64,
    #[serde(default)]
    pub change: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrendsData {
    #[serde(default)]
    pub total: Vec<TrendPoint>,
    #[serde(default)]
    pub by_category: OrderedMap<Vec<TrendPoint>>,
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ========================
// Ordered Map
// ========================

/// JSON object decoded with its key order preserved.
///
/// Category colours are assigned by position, so the backend's key order
/// has to survive decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'de, V: DeserializeOwned> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: DeserializeOwned> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    match entries.iter().position(|entry: &(String, V)| entry.0 == key) {
                        Some(index) => entries[index].1 = value,
                        None => entries.push((key, value)),
                    }
                }
                Ok(OrderedMap(entries))
            }

            // `null` decodes as an empty map
            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(OrderedMap::default())
            }
        }

        deserializer.deserialize_any(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_envelope_keeps_category_order() {
        let body = r#"{
            "success": true,
            "data": {
                "total_issues": 4,
                "category_stats": [{"name": "Rating", "value": 3}, {"name": "Billing", "value": 1}],
                "status_stats": [{"name": "Done", "value": 4}],
                "priority_stats": [],
                "category_details": {
                    "Rating": {"total": 3, "done": 3, "inProgress": 0, "backlog": 0, "other": 0, "completion": 100.0},
                    "Billing": {"total": 1, "done": 1, "inProgress": 0, "backlog": 0, "other": 0, "completion": 100.0}
                },
                "last_updated": "2024-05-01T10:00:00"
            }
        }"#;

        let envelope: Envelope<DashboardSnapshot> = serde_json::from_str(body).unwrap();
        let snapshot = envelope.into_data().expect("data");
        let keys: Vec<_> = snapshot.category_details.keys().collect();
        assert_eq!(keys, vec!["Rating", "Billing"]);
        assert_eq!(snapshot.category_details.get("Billing").unwrap().total, 1);
        assert_eq!(snapshot.last_updated.as_deref(), Some("2024-05-01T10:00:00"));
    }

    #[test]
    fn test_failed_envelope_has_no_data() {
        let envelope: Envelope<Vec<Issue>> =
            serde_json::from_str(r#"{"success": false, "error": "db down"}"#).unwrap();
        assert_eq!(envelope.error.as_deref(), Some("db down"));
        assert!(envelope.into_data().is_none());
    }

    #[test]
    fn test_issue_null_fields() {
        let issue: Issue = serde_json::from_str(
            r#"{"issue_key": "EPIC-7", "summary": null, "status": "To Do", "category": "Other", "priority": null, "created_date": null}"#,
        )
        .unwrap();
        assert_eq!(issue.summary, "");
        assert_eq!(issue.priority, "");
        assert!(issue.created_date.is_none());
    }

    #[test]
    fn test_trends_change_optional() {
        let trends: TrendsData = serde_json::from_str(
            r#"{"total": [{"week": "2024-W01", "count": 5}, {"week": "2024-W02", "count": 8, "change": 60.0}],
                "by_category": {"Rating": [{"week": "2024-W02", "count": 2, "change": -50.0}]}}"#,
        )
        .unwrap();
        assert_eq!(trends.total[0].change, None);
        assert_eq!(trends.total[1].change, Some(60.0));
        assert_eq!(trends.by_category.get("Rating").unwrap()[0].count, 2);
    }

    #[test]
    fn test_null_ordered_map() {
        let trends: TrendsData =
            serde_json::from_str(r#"{"total": [], "by_category": null}"#).unwrap();
        assert!(trends.by_category.is_empty());
    }
}
