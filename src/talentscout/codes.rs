//! Canonical code maps.
//!
//! The editing side of the engine only ever sees human-readable labels
//! ("United States", "User Generated Content"). Catalog records store codes
//! ("US", "ugc"). The maps here translate one into the other and are consulted
//! only by the predicate compiler.
//!
//! A label with no entry is taken to be canonical already and passes through
//! unchanged.

use crate::filter::Dimension;

/// A static label → code dictionary for one dimension.
#[derive(Debug)]
pub struct CodeMap {
    pub name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl CodeMap {
    const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Translate a label, falling back to the label itself.
    pub fn to_code<'a>(&self, label: &'a str) -> &'a str {
        self.lookup(label).unwrap_or(label)
    }

    /// The explicit mapping for `label`, if one exists.
    pub fn lookup(&self, label: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, code)| *code)
    }

    /// Reverse lookup, used when rendering a record's code back as a label.
    pub fn label_for(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(label, _)| *label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub static PLATFORM_CODES: CodeMap = CodeMap::new(
    "platform",
    &[
        ("Instagram", "instagram"),
        ("TikTok", "tiktok"),
        ("YouTube", "youtube"),
        ("Twitter", "twitter"),
        ("Twitch", "twitch"),
        ("Amazon", "amazon"),
        ("User Generated Content", "ugc"),
    ],
);

pub static COUNTRY_CODES: CodeMap = CodeMap::new(
    "country",
    &[
        ("United States", "US"),
        ("United Kingdom", "GB"),
        ("Canada", "CA"),
        ("Australia", "AU"),
        ("Germany", "DE"),
        ("France", "FR"),
        ("Italy", "IT"),
        ("Spain", "ES"),
        ("Netherlands", "NL"),
        ("Sweden", "SE"),
        ("Norway", "NO"),
        ("Denmark", "DK"),
        ("India", "IN"),
        ("China", "CN"),
        ("Japan", "JP"),
        ("South Korea", "KR"),
        ("Singapore", "SG"),
        ("Thailand", "TH"),
        ("Brazil", "BR"),
        ("Mexico", "MX"),
        ("Argentina", "AR"),
        ("Chile", "CL"),
        ("South Africa", "ZA"),
        ("Egypt", "EG"),
        ("United Arab Emirates", "AE"),
        ("Saudi Arabia", "SA"),
        ("Israel", "IL"),
        ("Turkey", "TR"),
        ("Russia", "RU"),
        ("Poland", "PL"),
        ("Belgium", "BE"),
        ("Switzerland", "CH"),
        ("Austria", "AT"),
        ("Portugal", "PT"),
        ("Greece", "GR"),
        ("Ireland", "IE"),
        ("New Zealand", "NZ"),
        ("Philippines", "PH"),
        ("Indonesia", "ID"),
        ("Malaysia", "MY"),
        ("Vietnam", "VN"),
        ("Taiwan", "TW"),
        ("Hong Kong", "HK"),
    ],
);

pub static LANGUAGE_CODES: CodeMap = CodeMap::new(
    "language",
    &[
        ("English", "en"),
        ("Spanish", "es"),
        ("French", "fr"),
        ("German", "de"),
        ("Italian", "it"),
        ("Portuguese", "pt"),
        ("Chinese", "zh"),
        ("Japanese", "ja"),
        ("Korean", "ko"),
        ("Hindi", "hi"),
        ("Arabic", "ar"),
        ("Russian", "ru"),
        ("Dutch", "nl"),
        ("Swedish", "sv"),
        ("Norwegian", "no"),
        ("Danish", "da"),
        ("Finnish", "fi"),
        ("Polish", "pl"),
        ("Turkish", "tr"),
        ("Greek", "el"),
        ("Hebrew", "he"),
        ("Thai", "th"),
        ("Vietnamese", "vi"),
        ("Indonesian", "id"),
        ("Malay", "ms"),
        ("Tagalog", "tl"),
        ("Czech", "cs"),
        ("Hungarian", "hu"),
        ("Romanian", "ro"),
        ("Bulgarian", "bg"),
    ],
);

/// Category, content type and ethnicity labels are stored verbatim.
pub static IDENTITY: CodeMap = CodeMap::new("identity", &[]);

/// The map the compiler uses for a set-valued dimension.
///
/// Returns `None` for dimensions that are not label sets.
pub fn for_dimension(dimension: Dimension) -> Option<&'static CodeMap> {
    match dimension {
        Dimension::Platform => Some(&PLATFORM_CODES),
        Dimension::Country => Some(&COUNTRY_CODES),
        Dimension::Language => Some(&LANGUAGE_CODES),
        Dimension::Category | Dimension::ContentType | Dimension::Ethnicity => Some(&IDENTITY),
        Dimension::Followers
        | Dimension::City
        | Dimension::Price
        | Dimension::Gender
        | Dimension::Age => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_labels() {
        assert_eq!(COUNTRY_CODES.to_code("United States"), "US");
        assert_eq!(COUNTRY_CODES.to_code("United Kingdom"), "GB");
        assert_eq!(PLATFORM_CODES.to_code("User Generated Content"), "ugc");
        assert_eq!(LANGUAGE_CODES.to_code("Greek"), "el");
    }

    #[test]
    fn unknown_labels_pass_through() {
        assert_eq!(COUNTRY_CODES.to_code("FR"), "FR");
        assert_eq!(PLATFORM_CODES.to_code("Snapchat"), "Snapchat");
        assert_eq!(IDENTITY.to_code("Beauty"), "Beauty");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(COUNTRY_CODES.lookup("united states"), None);
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(PLATFORM_CODES.label_for("tiktok"), Some("TikTok"));
        assert_eq!(COUNTRY_CODES.label_for("XX"), None);
    }

    #[test]
    fn every_set_dimension_has_a_map() {
        for d in Dimension::ALL {
            assert_eq!(for_dimension(*d).is_some(), d.kind().is_labels());
        }
    }
}
