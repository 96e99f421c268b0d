//! Dimension identifiers and their registry.
//!
//! Every filter axis is a variant of [`Dimension`]. Code that needs to treat
//! "any dimension" generically (the save/clear affordances, the CLI) goes
//! through this closed enumeration instead of string keys, and looks up the
//! per-dimension metadata in [`DIMENSIONS`].

use crate::error::ScoutError;
use crate::range::{RangeFormat, SliderBounds};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Platform,
    Category,
    ContentType,
    Followers,
    Country,
    City,
    Price,
    Gender,
    Age,
    Ethnicity,
    Language,
}

impl Dimension {
    /// All dimensions in editor order.
    pub const ALL: &'static [Dimension] = &[
        Dimension::Platform,
        Dimension::Category,
        Dimension::ContentType,
        Dimension::Followers,
        Dimension::Country,
        Dimension::City,
        Dimension::Price,
        Dimension::Gender,
        Dimension::Age,
        Dimension::Ethnicity,
        Dimension::Language,
    ];

    pub fn spec(self) -> &'static DimensionSpec {
        &DIMENSIONS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn kind(self) -> DimensionKind {
        self.spec().kind
    }

    pub fn section(self) -> Section {
        match self {
            Dimension::Platform => Section::Platform,
            Dimension::Category => Section::Category,
            Dimension::ContentType => Section::ContentType,
            Dimension::Followers => Section::Followers,
            Dimension::Country | Dimension::City => Section::Location,
            Dimension::Price => Section::Price,
            Dimension::Gender => Section::Gender,
            Dimension::Age => Section::Age,
            Dimension::Ethnicity => Section::Ethnicity,
            Dimension::Language => Section::Language,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase and drop `-`/`_` so "content-type", "content_type" and
/// "contentType" all name the same dimension.
fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Dimension {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| normalize_name(d.name()) == wanted)
            .ok_or_else(|| ScoutError::UnknownDimension(s.to_string()))
    }
}

/// The shape of value a dimension holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionKind {
    /// Set of labels, OR within the set.
    Labels,
    /// Inclusive integer range.
    Range,
    /// Free text matched as a substring.
    Text,
    /// Exactly one gender.
    Choice,
}

impl DimensionKind {
    pub fn is_labels(self) -> bool {
        self == DimensionKind::Labels
    }

    pub fn describe(self) -> &'static str {
        match self {
            DimensionKind::Labels => "label set",
            DimensionKind::Range => "range",
            DimensionKind::Text => "text",
            DimensionKind::Choice => "gender",
        }
    }
}

/// Static metadata for one dimension.
#[derive(Debug, Clone)]
pub struct DimensionSpec {
    pub dimension: Dimension,
    /// Name used in the API and on the command line.
    pub name: &'static str,
    /// Heading shown by an editor.
    pub title: &'static str,
    pub kind: DimensionKind,
    /// Gated behind premium access.
    pub premium: bool,
    /// Advisory slider track for range dimensions.
    pub slider: Option<SliderBounds>,
    pub format: Option<RangeFormat>,
}

impl DimensionSpec {
    const fn new(
        dimension: Dimension,
        name: &'static str,
        title: &'static str,
        kind: DimensionKind,
    ) -> Self {
        Self {
            dimension,
            name,
            title,
            kind,
            premium: false,
            slider: None,
            format: None,
        }
    }

    const fn premium(mut self) -> Self {
        self.premium = true;
        self
    }

    const fn slider(mut self, lo: i64, hi: i64, format: RangeFormat) -> Self {
        self.slider = Some(SliderBounds::new(lo, hi));
        self.format = Some(format);
        self
    }
}

/// Registry of all dimensions, indexed by `Dimension as usize`.
pub const DIMENSIONS: &[DimensionSpec] = &[
    DimensionSpec::new(
        Dimension::Platform,
        "platform",
        "Platform",
        DimensionKind::Labels,
    ),
    DimensionSpec::new(
        Dimension::Category,
        "category",
        "Category",
        DimensionKind::Labels,
    ),
    DimensionSpec::new(
        Dimension::ContentType,
        "contentType",
        "Content Type",
        DimensionKind::Labels,
    ),
    DimensionSpec::new(
        Dimension::Followers,
        "followers",
        "Followers",
        DimensionKind::Range,
    )
    .slider(0, 10_000_000, RangeFormat::Compact),
    DimensionSpec::new(
        Dimension::Country,
        "country",
        "Country",
        DimensionKind::Labels,
    ),
    DimensionSpec::new(Dimension::City, "city", "City", DimensionKind::Text),
    DimensionSpec::new(
        Dimension::Price,
        "price",
        "Price (USD)",
        DimensionKind::Range,
    )
    .slider(0, 5_000, RangeFormat::Currency("$")),
    DimensionSpec::new(
        Dimension::Gender,
        "gender",
        "Gender",
        DimensionKind::Choice,
    ),
    DimensionSpec::new(Dimension::Age, "age", "Age", DimensionKind::Range).slider(
        0,
        100,
        RangeFormat::Plain,
    ),
    DimensionSpec::new(
        Dimension::Ethnicity,
        "ethnicity",
        "Ethnicity",
        DimensionKind::Labels,
    )
    .premium(),
    DimensionSpec::new(
        Dimension::Language,
        "language",
        "Language",
        DimensionKind::Labels,
    )
    .premium(),
];

/// An editor section. Most sections hold one dimension; Location holds the
/// country set and the city text together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Platform,
    Category,
    ContentType,
    Followers,
    Location,
    Price,
    Gender,
    Age,
    Ethnicity,
    Language,
}

impl Section {
    pub const ALL: &'static [Section] = &[
        Section::Platform,
        Section::Category,
        Section::ContentType,
        Section::Followers,
        Section::Location,
        Section::Price,
        Section::Gender,
        Section::Age,
        Section::Ethnicity,
        Section::Language,
    ];

    pub fn dimensions(self) -> &'static [Dimension] {
        match self {
            Section::Platform => &[Dimension::Platform],
            Section::Category => &[Dimension::Category],
            Section::ContentType => &[Dimension::ContentType],
            Section::Followers => &[Dimension::Followers],
            Section::Location => &[Dimension::Country, Dimension::City],
            Section::Price => &[Dimension::Price],
            Section::Gender => &[Dimension::Gender],
            Section::Age => &[Dimension::Age],
            Section::Ethnicity => &[Dimension::Ethnicity],
            Section::Language => &[Dimension::Language],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Location => "Location",
            Section::Ethnicity => "Ethnicity (Premium)",
            Section::Language => "Language (Premium)",
            other => other.dimensions()[0].spec().title,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Section::Location => "location",
            other => other.dimensions()[0].name(),
        }
    }
}

impl FromStr for Section {
    type Err = ScoutError;

    /// Accepts a section name ("location") or the name of any dimension,
    /// which resolves to the section holding it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if normalize_name(s) == "location" {
            return Ok(Section::Location);
        }
        s.parse::<Dimension>().map(Dimension::section)
    }
}
