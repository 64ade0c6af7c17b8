use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A content-suitability label. Covers the ESRB letters and their PEGI
/// counterparts.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum AgeRating {
    #[serde(rename = "E")]
    Everyone,
    #[serde(rename = "E10+")]
    EveryoneTenPlus,
    #[serde(rename = "T")]
    Teen,
    #[serde(rename = "M")]
    Mature,
    #[serde(rename = "AO")]
    AdultsOnly,
    #[serde(rename = "PEGI 3")]
    Pegi3,
    #[serde(rename = "PEGI 7")]
    Pegi7,
    #[serde(rename = "PEGI 12")]
    Pegi12,
    #[serde(rename = "PEGI 16")]
    Pegi16,
    #[serde(rename = "PEGI 18")]
    Pegi18,
}

impl AgeRating {
    pub const ALL: [AgeRating; 10] = [
        AgeRating::Everyone,
        AgeRating::EveryoneTenPlus,
        AgeRating::Teen,
        AgeRating::Mature,
        AgeRating::AdultsOnly,
        AgeRating::Pegi3,
        AgeRating::Pegi7,
        AgeRating::Pegi12,
        AgeRating::Pegi16,
        AgeRating::Pegi18,
    ];

    /// The label as printed on the box.
    pub fn label(self) -> &'static str {
        use AgeRating::*;

        match self {
            Everyone => "E",
            EveryoneTenPlus => "E10+",
            Teen => "T",
            Mature => "M",
            AdultsOnly => "AO",
            Pegi3 => "PEGI 3",
            Pegi7 => "PEGI 7",
            Pegi12 => "PEGI 12",
            Pegi16 => "PEGI 16",
            Pegi18 => "PEGI 18",
        }
    }

    /// Ratings shown with a warning badge.
    pub fn is_mature(self) -> bool {
        matches!(self, AgeRating::Mature | AgeRating::AdultsOnly | AgeRating::Pegi18)
    }
}

impl fmt::Display for AgeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown age rating {0:?}")]
pub struct UnknownRating(pub String);

impl FromStr for AgeRating {
    type Err = UnknownRating;

    /// Parses a label, ignoring case and whitespace. A bare `E10` is
    /// accepted because an unescaped `+` in a query string decodes to a
    /// space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        let rating = match squashed.as_str() {
            "E10" => AgeRating::EveryoneTenPlus,
            other => AgeRating::ALL
                .iter()
                .copied()
                .find(|r| r.label().replace(' ', "") == other)
                .ok_or_else(|| UnknownRating(s.to_owned()))?,
        };

        Ok(rating)
    }
}

/// A single game in the catalog, as shown in listings.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameRecord {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) image_url: String,
    pub(crate) age_rating: AgeRating,
    pub(crate) short_description: String,
    pub(crate) detail_page_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) genre: Option<String>,
    #[serde(default)]
    pub(crate) tags: Vec<String>,
}

impl GameRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        age_rating: AgeRating,
        short_description: impl Into<String>,
        detail_page_path: impl Into<String>,
    ) -> Self {
        GameRecord {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            age_rating,
            short_description: short_description.into(),
            detail_page_path: detail_page_path.into(),
            genre: None,
            tags: vec![],
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Adds impact tags, skipping any already present.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();

            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }

        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn age_rating(&self) -> AgeRating {
        self.age_rating
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// How a single impact item bears on a child.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Positive,
    Neutral,
    Concern,
    HighConcern,
    Informational,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ImpactItem {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) level: ImpactLevel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) details: Vec<String>,
}

impl ImpactItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        level: ImpactLevel,
    ) -> Self {
        ImpactItem {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            level,
            details: vec![],
        }
    }

    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details.extend(details.into_iter().map(Into::into));
        self
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ImpactCategory {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) items: Vec<ImpactItem>,
}

impl ImpactCategory {
    pub fn new(id: impl Into<String>, title: impl Into<String>, items: Vec<ImpactItem>) -> Self {
        ImpactCategory {
            id: id.into(),
            title: title.into(),
            items,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Screenshot {
    pub(crate) id: String,
    pub(crate) image_url: String,
    pub(crate) alt_text: String,
}

impl Screenshot {
    pub fn new(id: impl Into<String>, image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Screenshot {
            id: id.into(),
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// The category whose items are read out as parental guidance.
pub const PARENTAL_GUIDANCE_CATEGORY: &str = "parental_guidance";

/// Shown when a game has no guidance of its own.
pub const GENERAL_GUIDANCE: &str =
    "General advice: Always review game content and discuss with your child.";

/// Everything the detail page shows about a game.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameDetails {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) age_rating: AgeRating,
    pub(crate) description: String,
    pub(crate) screenshots: Vec<Screenshot>,
    pub(crate) impact: Vec<ImpactCategory>,
    pub(crate) system_requirements: String,
    pub(crate) user_reviews_summary: String,
}

impl GameDetails {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Descriptions from the parental guidance category, or the general
    /// advice if the game has none.
    pub fn parental_guidance(&self) -> Vec<String> {
        let guidance: Vec<String> = self
            .impact
            .iter()
            .filter(|c| c.id == PARENTAL_GUIDANCE_CATEGORY)
            .flat_map(|c| c.items.iter().map(|i| i.description.clone()))
            .collect();

        if guidance.is_empty() {
            vec![GENERAL_GUIDANCE.to_owned()]
        } else {
            guidance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_parse_loosely() {
        assert_eq!("e".parse::<AgeRating>(), Ok(AgeRating::Everyone));
        assert_eq!("E10+".parse::<AgeRating>(), Ok(AgeRating::EveryoneTenPlus));
        assert_eq!("E10 ".parse::<AgeRating>(), Ok(AgeRating::EveryoneTenPlus));
        assert_eq!("pegi 16".parse::<AgeRating>(), Ok(AgeRating::Pegi16));
        assert_eq!("PEGI12".parse::<AgeRating>(), Ok(AgeRating::Pegi12));
        assert_eq!(
            "X".parse::<AgeRating>(),
            Err(UnknownRating("X".to_owned()))
        );
    }

    #[test]
    fn unknown_rating_names_the_input() {
        let error = "PG-13".parse::<AgeRating>().unwrap_err();

        assert_eq!(error.to_string(), "unknown age rating \"PG-13\"");
    }

    #[test]
    fn labels_round_trip() {
        for rating in AgeRating::ALL.iter() {
            assert_eq!(rating.label().parse::<AgeRating>(), Ok(*rating));
            assert_eq!(
                serde_json::to_string(rating).unwrap(),
                format!("{:?}", rating.label())
            );
        }
    }

    #[test]
    fn only_adult_ratings_are_mature() {
        let mature: Vec<_> = AgeRating::ALL.iter().filter(|r| r.is_mature()).collect();

        assert_eq!(
            mature,
            vec![&AgeRating::Mature, &AgeRating::AdultsOnly, &AgeRating::Pegi18]
        );
    }

    #[test]
    fn duplicate_tags_are_dropped() {
        let record = GameRecord::new("g", "G", "img", AgeRating::Teen, "d", "/games/g")
            .with_tags(vec!["coding", "learning", "coding"]);

        assert_eq!(record.tags(), &["coding".to_owned(), "learning".to_owned()]);
        assert!(record.has_tag("learning"));
        assert!(!record.has_tag("Learning"));
    }

    #[test]
    fn guidance_falls_back_to_general_advice() {
        let mut details = GameDetails {
            id: "g".to_owned(),
            title: "G".to_owned(),
            age_rating: AgeRating::Everyone,
            description: String::new(),
            screenshots: vec![],
            impact: vec![ImpactCategory::new(
                "positive_aspects",
                "Positive Aspects",
                vec![ImpactItem::new("fun", "Fun", "It is fun.", ImpactLevel::Positive)],
            )],
            system_requirements: String::new(),
            user_reviews_summary: String::new(),
        };

        assert_eq!(details.parental_guidance(), vec![GENERAL_GUIDANCE.to_owned()]);

        details.impact.push(ImpactCategory::new(
            PARENTAL_GUIDANCE_CATEGORY,
            "Parental Guidance",
            vec![ImpactItem::new(
                "talk",
                "Talk",
                "Talk about it.",
                ImpactLevel::Informational,
            )],
        ));

        assert_eq!(details.parental_guidance(), vec!["Talk about it.".to_owned()]);
    }
}
