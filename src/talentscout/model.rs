use crate::codes;
use crate::filter::Gender;
use crate::range::RangeFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    TopCreator,
    RespondsFast,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::TopCreator => f.write_str("Top Creator"),
            Badge::RespondsFast => f.write_str("Responds Fast"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub region_code: String,
    /// ISO-3166 alpha-2.
    pub country_code: String,
}

/// A catalog record. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Influencer {
    pub id: String,
    pub name: String,
    /// Lowercase platform code ("instagram", "ugc", ...).
    pub platform: String,
    pub followers: u64,
    #[serde(default)]
    pub followers_short: String,
    pub rating: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u32>,
    #[serde(default)]
    pub tagline: String,
    /// Whole dollars.
    pub price_usd: u64,
    pub location: Location,
    #[serde(default)]
    pub badges: BTreeSet<Badge>,
    #[serde(default)]
    pub image_url: String,

    // Optional attributes. A record without one never satisfies an active
    // clause on it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    /// ISO-639-1 codes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
}

impl Influencer {
    /// The platform's display label, falling back to the stored code.
    pub fn platform_label(&self) -> &str {
        codes::PLATFORM_CODES
            .label_for(&self.platform)
            .unwrap_or(self.platform.as_str())
    }

    /// The country's display label, falling back to the stored code.
    pub fn country_label(&self) -> &str {
        codes::COUNTRY_CODES
            .label_for(&self.location.country_code)
            .unwrap_or(self.location.country_code.as_str())
    }

    /// "1.6k"-style follower count. Uses the stored string when present.
    pub fn followers_display(&self) -> String {
        if self.followers_short.is_empty() {
            let followers = i64::try_from(self.followers).unwrap_or(i64::MAX);
            RangeFormat::Compact.format(followers)
        } else {
            self.followers_short.clone()
        }
    }
}
