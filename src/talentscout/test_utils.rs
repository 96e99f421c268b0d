use crate::filter::{ConfirmPort, FilterListener, FilterState, Gender};
use crate::model::{Influencer, Location};
use std::collections::VecDeque;

/// Listener that keeps every notification it receives.
#[derive(Debug, Default)]
pub struct RecordingListener {
    pub changes: Vec<FilterState>,
    pub clear_alls: usize,
}

impl FilterListener for RecordingListener {
    fn on_filters_change(&mut self, committed: &FilterState) {
        self.changes.push(committed.clone());
    }

    fn on_clear_all(&mut self) {
        self.clear_alls += 1;
    }
}

/// Confirmation port that replays canned answers, then declines.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    pub asked: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    pub fn accept() -> Self {
        Self::new([true])
    }

    pub fn decline() -> Self {
        Self::new([false])
    }
}

impl ConfirmPort for ScriptedConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}

pub struct RecordBuilder {
    record: Influencer,
}

/// A plain Instagram record in Springfield, US with 1000 followers at $100.
pub fn record(id: &str) -> RecordBuilder {
    RecordBuilder {
        record: Influencer {
            id: id.to_string(),
            name: format!("Creator {}", id),
            platform: "instagram".to_string(),
            followers: 1_000,
            followers_short: String::new(),
            rating: 4.5,
            rating_count: None,
            tagline: String::new(),
            price_usd: 100,
            location: Location {
                city: "Springfield".to_string(),
                region_code: "IL".to_string(),
                country_code: "US".to_string(),
            },
            badges: Default::default(),
            image_url: String::new(),
            categories: Vec::new(),
            content_types: Vec::new(),
            gender: None,
            age: None,
            ethnicity: None,
            languages: Vec::new(),
        },
    }
}

impl RecordBuilder {
    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn platform(mut self, code: &str) -> Self {
        self.record.platform = code.to_string();
        self
    }

    pub fn followers(mut self, n: u64) -> Self {
        self.record.followers = n;
        self
    }

    pub fn price(mut self, usd: u64) -> Self {
        self.record.price_usd = usd;
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.record.location.city = city.to_string();
        self
    }

    pub fn country(mut self, code: &str) -> Self {
        self.record.location.country_code = code.to_string();
        self
    }

    pub fn category(mut self, label: &str) -> Self {
        self.record.categories.push(label.to_string());
        self
    }

    pub fn content_type(mut self, label: &str) -> Self {
        self.record.content_types.push(label.to_string());
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.record.gender = Some(gender);
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.record.age = Some(age);
        self
    }

    pub fn ethnicity(mut self, label: &str) -> Self {
        self.record.ethnicity = Some(label.to_string());
        self
    }

    pub fn language(mut self, code: &str) -> Self {
        self.record.languages.push(code.to_string());
        self
    }

    pub fn build(self) -> Influencer {
        self.record
    }
}
