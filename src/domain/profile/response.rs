//! Raw response history used by indicator estimation

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{ItemId, ValidationError};
use crate::domain::item::Item;

/// Lowest Likert value
pub const LIKERT_MIN: u8 = 1;
/// Highest Likert value
pub const LIKERT_MAX: u8 = 5;

static SENSORY_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "sensory",
        "noise",
        "noises",
        "noisy",
        "loud",
        "sound",
        "sounds",
        "light",
        "lights",
        "bright",
        "texture",
        "textures",
        "fabric",
        "fabrics",
        "smell",
        "smells",
        "odor",
        "odors",
        "touch",
        "touched",
        "crowded",
        "crowds",
        "overstimulated",
        "overwhelmed",
        "overwhelming",
    ]
    .into_iter()
    .collect()
});

/// Whether item text mentions sensory experience
pub fn mentions_sensory_content(text: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .any(|w| SENSORY_KEYWORDS.contains(w.to_lowercase().as_str()))
}

/// One recorded answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub item_id: ItemId,
    /// Likert value, 1-5
    pub value: u8,
    /// Time from display to answer
    #[serde(default)]
    pub latency_ms: Option<u64>,
    /// The answered item concerns sensory experience
    #[serde(default)]
    pub sensory_flagged: bool,
    pub answered_at: DateTime<Utc>,
}

impl ResponseRecord {
    pub fn new(
        item_id: ItemId,
        value: u8,
        latency_ms: Option<u64>,
    ) -> Result<Self, ValidationError> {
        if !(LIKERT_MIN..=LIKERT_MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "value",
                f64::from(LIKERT_MIN),
                f64::from(LIKERT_MAX),
                f64::from(value),
            ));
        }
        Ok(Self {
            item_id,
            value,
            latency_ms,
            sensory_flagged: false,
            answered_at: Utc::now(),
        })
    }

    /// Record an answer to `item`, flagging sensory content from its tags or text
    pub fn for_item(
        item: &Item,
        value: u8,
        latency_ms: Option<u64>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self::new(item.id.clone(), value, latency_ms)?;
        record.sensory_flagged = item.has_tag("sensory") || mentions_sensory_content(&item.text);
        Ok(record)
    }

    pub fn flagged_sensory(mut self) -> Self {
        self.sensory_flagged = true;
        self
    }

    /// Answer at either end of the scale
    pub fn is_extreme(&self) -> bool {
        self.value == LIKERT_MIN || self.value == LIKERT_MAX
    }
}
