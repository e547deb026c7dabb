//! Digest document as produced by the upstream summariser.
//!
//! Fields the producer may leave out, or write as `null`, are defaulted so
//! rendering only has to decide between "present" and "absent". `tabs` is the
//! one required field.
use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestDocument {
    /// Newest first; index 0 is "today".
    #[serde(default, deserialize_with = "null_default")]
    pub dates: Vec<String>,
    #[serde(default)]
    pub generated_at: Option<String>,
    pub tabs: Tabs,
}

impl DigestDocument {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn contains_date(&self, date: &str) -> bool {
        self.dates.iter().any(|d| d == date)
    }

    /// The default selection; an empty first entry means there is none.
    pub fn first_date(&self) -> Option<&str> {
        self.dates
            .first()
            .map(String::as_str)
            .filter(|date| !date.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Tabs {
    #[serde(default, deserialize_with = "null_default")]
    pub youtube: YoutubeTab,
    #[serde(default, deserialize_with = "null_default")]
    pub apps: AppsTab,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct YoutubeTab {
    #[serde(default, deserialize_with = "days")]
    pub days: HashMap<String, YoutubeDay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AppsTab {
    #[serde(default, deserialize_with = "days")]
    pub days: HashMap<String, AppsDay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct YoutubeDay {
    #[serde(default, deserialize_with = "null_default")]
    pub items: Vec<VideoItem>,
    #[serde(default)]
    pub transparency: Option<YoutubeTransparency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub brief_summary: Option<String>,
    /// `None` and `Some(vec![])` render differently.
    #[serde(default)]
    pub core_insights: Option<Vec<String>>,
    #[serde(default)]
    pub personal_relevance: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeTransparency {
    #[serde(default, deserialize_with = "count")]
    pub feeds_configured: u64,
    #[serde(default, deserialize_with = "count")]
    pub total_videos_fetched: u64,
    #[serde(default, deserialize_with = "count")]
    pub with_transcript: u64,
    #[serde(default, deserialize_with = "count")]
    pub included_in_report: u64,
    #[serde(default, deserialize_with = "optional_count")]
    pub high_priority_count: Option<u64>,
    #[serde(default, deserialize_with = "optional_count")]
    pub low_priority_count: Option<u64>,
    #[serde(default)]
    pub by_source: Option<Vec<FeedCount>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedCount {
    #[serde(default, deserialize_with = "null_default")]
    pub feed_name: String,
    #[serde(default, deserialize_with = "count")]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AppsDay {
    #[serde(default, deserialize_with = "null_default")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transparency: Option<AppsTransparency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub items: Vec<CategoryItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CategoryItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppsTransparency {
    #[serde(default, deserialize_with = "count")]
    pub accounts_configured: u64,
    #[serde(default, deserialize_with = "count")]
    pub total_tweets_fetched: u64,
    #[serde(default, deserialize_with = "count")]
    pub included_in_report: u64,
    #[serde(default, rename = "nonAICount", deserialize_with = "count")]
    pub non_ai_count: u64,
    /// Label to count, in producer order.
    #[serde(default)]
    pub by_block: Option<Map<String, Value>>,
    #[serde(default)]
    pub by_configured_account: Option<Vec<AccountCount>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCount {
    #[serde(default, deserialize_with = "null_default")]
    pub handle: String,
    #[serde(default, deserialize_with = "count")]
    pub original_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub retweet_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub quote_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub included_count: u64,
}

/// Treats an explicit `null` like a missing key.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Date-keyed day maps; a `null` day is an empty day.
fn days<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let days = Option::<HashMap<String, Option<T>>>::deserialize(deserializer)?;
    Ok(days
        .unwrap_or_default()
        .into_iter()
        .map(|(date, day)| (date, day.unwrap_or_default()))
        .collect())
}

fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_count(deserializer)?.unwrap_or_default())
}

/// Counters accept any JSON number. Fractions are truncated and negative
/// values clamp to zero.
fn optional_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<Number>::deserialize(deserializer)?;
    Ok(number.map(|number| {
        number.as_u64().unwrap_or_else(|| {
            number
                .as_f64()
                .filter(|value| *value > 0.0)
                .map_or(0, |value| value as u64)
        })
    }))
}
