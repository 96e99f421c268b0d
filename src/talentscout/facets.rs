//! Option lists offered by an editor for each set dimension.
//!
//! These are display labels. The platform list starts with the "Any"
//! sentinel.

use crate::filter::{Dimension, ANY};

pub const PLATFORMS: &[&str] = &[
    ANY,
    "Instagram",
    "TikTok",
    "User Generated Content",
    "YouTube",
    "Twitter",
    "Twitch",
    "Amazon",
];

pub const CATEGORIES: &[&str] = &[
    "Suggested",
    "Popular",
    "Lifestyle",
    "Beauty",
    "Fashion",
    "Travel",
    "Health & Fitness",
    "Food & Drink",
    "Family & Children",
    "Comedy & Entertainment",
    "Art & Photography",
    "Music & Dance",
    "Model",
    "Animals & Pets",
    "Adventure & Outdoors",
    "Entrepreneur & Business",
    "Education",
    "Athlete & Sports",
    "Gaming",
    "Technology",
    "LGBTQ2+",
    "Healthcare",
    "Automotive",
    "Actor",
    "Vegan",
    "Celebrity & Public Figure",
    "Skilled Trades",
    "Cannabis",
];

pub const CONTENT_TYPES: &[&str] = &[
    "Livestream",
    "Video",
    "Photo",
    "Product Video",
    "Product Photo",
    "Video Ad",
    "Photo Ad",
    "Tutorial",
    "Testimonial/Review",
    "Unboxing",
    "Blog",
    "Photo Feed Post",
    "Reel",
    "Story",
    "Live",
    "Video Short",
    "Tweet",
    "Thread",
    "Retweet",
];

pub const COUNTRIES: &[&str] = &[
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "Germany",
    "France",
    "Italy",
    "Spain",
    "Netherlands",
    "Sweden",
    "Norway",
    "Denmark",
    "India",
    "China",
    "Japan",
    "South Korea",
    "Singapore",
    "Thailand",
    "Brazil",
    "Mexico",
    "Argentina",
    "Chile",
    "South Africa",
    "Egypt",
    "United Arab Emirates",
    "Saudi Arabia",
    "Israel",
    "Turkey",
    "Russia",
    "Poland",
    "Belgium",
    "Switzerland",
    "Austria",
    "Portugal",
    "Greece",
    "Ireland",
    "New Zealand",
    "Philippines",
    "Indonesia",
    "Malaysia",
    "Vietnam",
    "Taiwan",
    "Hong Kong",
];

pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Chinese",
    "Japanese",
    "Korean",
    "Hindi",
    "Arabic",
    "Russian",
    "Dutch",
    "Swedish",
    "Norwegian",
    "Danish",
    "Finnish",
    "Polish",
    "Turkish",
    "Greek",
    "Hebrew",
    "Thai",
    "Vietnamese",
    "Indonesian",
    "Malay",
    "Tagalog",
    "Czech",
    "Hungarian",
    "Romanian",
    "Bulgarian",
];

pub const ETHNICITIES: &[&str] = &[
    "Caucasian",
    "Hispanic or Latino",
    "Black or African American",
    "Asian/Pacific Islander",
    "Native American or American Indian",
    "Other",
];

pub const GENDERS: &[&str] = &["female", "male", "other"];

/// The option list for `dimension`, if it has one.
pub fn options(dimension: Dimension) -> Option<&'static [&'static str]> {
    match dimension {
        Dimension::Platform => Some(PLATFORMS),
        Dimension::Category => Some(CATEGORIES),
        Dimension::ContentType => Some(CONTENT_TYPES),
        Dimension::Country => Some(COUNTRIES),
        Dimension::Ethnicity => Some(ETHNICITIES),
        Dimension::Language => Some(LANGUAGES),
        Dimension::Gender => Some(GENDERS),
        Dimension::Followers | Dimension::City | Dimension::Price | Dimension::Age => None,
    }
}

/// Whether `label` is one of the offered options for `dimension`. Dimensions
/// without a list accept anything.
pub fn is_known(dimension: Dimension, label: &str) -> bool {
    options(dimension).map_or(true, |opts| opts.contains(&label))
}
