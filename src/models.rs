//! Frontend Models
//!
//! Data structures matching the special move API payloads.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// Special move entry (matches API JSON)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecialMove {
    pub id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sp_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub furigana: String,
    #[serde(deserialize_with = "null_as_default")]
    pub heading: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub registed_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub battle_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub win_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub lose_count: u32,
}

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl SpecialMove {
    /// Win rate label: `"NoData"` with no battles, otherwise a rounded percentage like `"75%"`
    pub fn win_rate_label(&self) -> String {
        if self.battle_count == 0 {
            return "NoData".to_string();
        }
        let rate = (self.win_count as f64 / self.battle_count as f64 * 100.0).round();
        format!("{}%", rate as u64)
    }

    /// Win/loss record, e.g. `3勝1敗`
    pub fn record_label(&self) -> String {
        format!("{}勝{}敗", self.win_count, self.lose_count)
    }
}

/// Ids of the entries the current user has already favorited
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gallery {
    ids: HashSet<u32>,
}

impl Gallery {
    pub fn from_entries(entries: &[SpecialMove]) -> Self {
        Self {
            ids: entries.iter().map(|entry| entry.id).collect(),
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
