//! The character sheet: metadata, trait ratings, and descriptive text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dbdd_mechanics::roll::MAX_RATING;
use dbdd_mechanics::{MechError, RollModifier, is_available};

use crate::error::{SheetError, SheetResult};

/// Trait points a character is expected to spend, excluding Talent.
pub const POINT_BUDGET: u32 = 20;

/// A rated trait, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Trait {
    /// Raw strength.
    Might,
    /// Fine control.
    Precision,
    /// Speed and reflexes.
    Agility,
    /// Staying power.
    Endurance,
    /// Resistance to sickness and poison.
    Immunity,
    /// Reasoning.
    Intellect,
    /// Concentration.
    Focus,
    /// Perception and intuition.
    Insight,
    /// Persuasion.
    Influence,
    /// Raw magical or supernatural force.
    Power,
    /// Leadership.
    Command,
    /// The character's signature talent.
    Talent,
}

impl Trait {
    /// All traits in sheet order.
    pub const ALL: [Self; 12] = [
        Self::Might,
        Self::Precision,
        Self::Agility,
        Self::Endurance,
        Self::Immunity,
        Self::Intellect,
        Self::Focus,
        Self::Insight,
        Self::Influence,
        Self::Power,
        Self::Command,
        Self::Talent,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Might => "Might",
            Self::Precision => "Precision",
            Self::Agility => "Agility",
            Self::Endurance => "Endurance",
            Self::Immunity => "Immunity",
            Self::Intellect => "Intellect",
            Self::Focus => "Focus",
            Self::Insight => "Insight",
            Self::Influence => "Influence",
            Self::Power => "Power",
            Self::Command => "Command",
            Self::Talent => "Talent",
        }
    }

    /// Parse a trait name, ignoring case.
    pub fn parse(s: &str) -> SheetResult<Self> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| SheetError::UnknownTrait(s.trim().to_string()))
    }

    /// Whether this trait's rating counts toward [`POINT_BUDGET`].
    pub fn counts_toward_budget(self) -> bool {
        self != Self::Talent
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Short descriptive fields at the top of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MetaField {
    /// Body size.
    Size,
    /// Body build.
    Build,
    /// Character level.
    Level,
}

impl MetaField {
    /// All metadata fields in sheet order.
    pub const ALL: [Self; 3] = [Self::Size, Self::Build, Self::Level];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Size => "Size",
            Self::Build => "Build",
            Self::Level => "Level",
        }
    }

    /// Parse a field name, ignoring case.
    pub fn parse(s: &str) -> SheetResult<Self> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| SheetError::UnknownField(s.trim().to_string()))
    }
}

/// Free-text fields below the traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TextField {
    /// What the Talent trait represents.
    TalentDescription,
    /// Weak spot.
    Vulnerability,
    /// Strong spot.
    Resistance,
    /// A defining feature.
    Feature,
}

impl TextField {
    /// All text fields in sheet order.
    pub const ALL: [Self; 4] = [
        Self::TalentDescription,
        Self::Vulnerability,
        Self::Resistance,
        Self::Feature,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::TalentDescription => "Talent Description",
            Self::Vulnerability => "Vulnerability",
            Self::Resistance => "Resistance",
            Self::Feature => "Feature",
        }
    }

    /// Parse a field name, ignoring case. Dashes and underscores count as spaces.
    pub fn parse(s: &str) -> SheetResult<Self> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| SheetError::UnknownField(s.trim().to_string()))
    }
}

/// Which roll buttons are usable for a trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOptions {
    /// Plain roll.
    pub normal: bool,
    /// Roll with advantage.
    pub advantage: bool,
    /// Roll with disadvantage.
    pub disadvantage: bool,
}

impl RollOptions {
    /// Options for a trait at `rating`.
    pub fn for_rating(rating: u8) -> Self {
        Self {
            normal: is_available(rating, RollModifier::Normal),
            advantage: is_available(rating, RollModifier::Advantage),
            disadvantage: is_available(rating, RollModifier::Disadvantage),
        }
    }

    /// Whether `modifier` is usable.
    pub fn allows(&self, modifier: RollModifier) -> bool {
        match modifier {
            RollModifier::Normal => self.normal,
            RollModifier::Advantage => self.advantage,
            RollModifier::Disadvantage => self.disadvantage,
        }
    }
}

/// A character's sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSheet {
    meta: BTreeMap<MetaField, String>,
    ratings: BTreeMap<Trait, u8>,
    text: BTreeMap<TextField, String>,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self {
            meta: MetaField::ALL
                .into_iter()
                .map(|m| (m, String::new()))
                .collect(),
            ratings: Trait::ALL.into_iter().map(|t| (t, 0)).collect(),
            text: TextField::ALL
                .into_iter()
                .map(|t| (t, String::new()))
                .collect(),
        }
    }
}

impl CharacterSheet {
    /// A blank sheet: empty text, every trait at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rating of `t`.
    pub fn rating(&self, t: Trait) -> u8 {
        self.ratings.get(&t).copied().unwrap_or(0)
    }

    /// Set the rating of `t`, rejecting values above 4.
    pub fn set_rating(&mut self, t: Trait, rating: u8) -> SheetResult<()> {
        if rating > MAX_RATING {
            return Err(MechError::RatingOutOfRange(rating).into());
        }
        self.ratings.insert(t, rating);
        Ok(())
    }

    /// Reject a sheet holding any rating above 4.
    pub fn validate(&self) -> SheetResult<()> {
        match self.ratings.values().find(|&&r| r > MAX_RATING) {
            Some(&r) => Err(MechError::RatingOutOfRange(r).into()),
            None => Ok(()),
        }
    }

    /// All traits with their ratings, in sheet order.
    pub fn ratings(&self) -> impl Iterator<Item = (Trait, u8)> + '_ {
        Trait::ALL.into_iter().map(|t| (t, self.rating(t)))
    }

    /// Value of a metadata field.
    pub fn meta(&self, field: MetaField) -> &str {
        self.meta.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Replace a metadata field.
    pub fn set_meta(&mut self, field: MetaField, value: impl Into<String>) {
        self.meta.insert(field, value.into());
    }

    /// Value of a text field.
    pub fn text(&self, field: TextField) -> &str {
        self.text.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Replace a text field.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        self.text.insert(field, value.into());
    }

    /// Sum of all ratings except Talent.
    pub fn total_points(&self) -> u32 {
        self.ratings()
            .filter(|(t, _)| t.counts_toward_budget())
            .map(|(_, r)| u32::from(r))
            .sum()
    }

    /// Whether more than [`POINT_BUDGET`] points are spent.
    pub fn over_budget(&self) -> bool {
        self.total_points() > POINT_BUDGET
    }

    /// Which rolls the current rating of `t` allows.
    pub fn roll_options(&self, t: Trait) -> RollOptions {
        RollOptions::for_rating(self.rating(t))
    }
}

/// Treat `-` and `_` as spaces and collapse runs of whitespace.
fn normalize(s: &str) -> String {
    s.replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blank_sheet() {
        let sheet = CharacterSheet::new();
        assert_eq!(sheet.total_points(), 0);
        assert_eq!(sheet.ratings().count(), 12);
        assert!(sheet.ratings().all(|(_, r)| r == 0));
        assert_eq!(sheet.meta(MetaField::Level), "");
    }

    #[test]
    fn set_rating_bounds() {
        let mut sheet = CharacterSheet::new();
        sheet.set_rating(Trait::Might, 4).unwrap();
        assert_eq!(sheet.rating(Trait::Might), 4);
        assert!(sheet.set_rating(Trait::Might, 5).is_err());
        assert_eq!(sheet.rating(Trait::Might), 4);
        assert!(sheet.validate().is_ok());
    }

    #[test]
    fn validate_rejects_deserialized_overflow() {
        let sheet: CharacterSheet =
            serde_json::from_str(r#"{"ratings":{"Might":9}}"#).unwrap();
        assert!(matches!(
            sheet.validate(),
            Err(SheetError::Mech(MechError::RatingOutOfRange(9)))
        ));
    }

    #[test]
    fn talent_excluded_from_points() {
        let mut sheet = CharacterSheet::new();
        sheet.set_rating(Trait::Might, 3).unwrap();
        sheet.set_rating(Trait::Focus, 2).unwrap();
        sheet.set_rating(Trait::Talent, 4).unwrap();
        assert_eq!(sheet.total_points(), 5);
        assert!(!sheet.over_budget());
    }

    #[test]
    fn over_budget() {
        let mut sheet = CharacterSheet::new();
        for t in Trait::ALL.into_iter().take(6) {
            sheet.set_rating(t, 4).unwrap();
        }
        assert_eq!(sheet.total_points(), 24);
        assert!(sheet.over_budget());
    }

    #[test]
    fn parse_names() {
        assert_eq!(Trait::parse("might").unwrap(), Trait::Might);
        assert_eq!(Trait::parse(" COMMAND ").unwrap(), Trait::Command);
        assert!(Trait::parse("Charisma").is_err());
        assert_eq!(MetaField::parse("level").unwrap(), MetaField::Level);
        assert_eq!(
            TextField::parse("talent-description").unwrap(),
            TextField::TalentDescription
        );
        assert_eq!(
            TextField::parse("Talent   Description").unwrap(),
            TextField::TalentDescription
        );
        assert!(TextField::parse("backstory").is_err());
    }

    #[test]
    fn text_fields() {
        let mut sheet = CharacterSheet::new();
        sheet.set_meta(MetaField::Size, "Medium");
        sheet.set_text(TextField::Vulnerability, "Fire");
        assert_eq!(sheet.meta(MetaField::Size), "Medium");
        assert_eq!(sheet.text(TextField::Vulnerability), "Fire");
        assert_eq!(sheet.text(TextField::Feature), "");
    }

    #[test]
    fn roll_options_follow_rating() {
        let mut sheet = CharacterSheet::new();
        let zero = sheet.roll_options(Trait::Power);
        assert_eq!(
            zero,
            RollOptions {
                normal: false,
                advantage: true,
                disadvantage: false
            }
        );
        sheet.set_rating(Trait::Power, 4).unwrap();
        let four = sheet.roll_options(Trait::Power);
        assert!(!four.normal);
        assert!(!four.advantage);
        assert!(four.allows(RollModifier::Disadvantage));
    }

    #[test]
    fn sparse_json_fills_defaults() {
        let sheet: CharacterSheet =
            serde_json::from_str(r#"{"ratings":{"Might":2}}"#).unwrap();
        assert_eq!(sheet.rating(Trait::Might), 2);
        assert_eq!(sheet.rating(Trait::Talent), 0);
        assert_eq!(sheet.meta(MetaField::Build), "");
    }

    proptest! {
        #[test]
        fn points_never_exceed_eleven_maxed_traits(ratings in prop::collection::vec(0u8..=4, 12)) {
            let mut sheet = CharacterSheet::new();
            for (t, r) in Trait::ALL.into_iter().zip(ratings) {
                sheet.set_rating(t, r).unwrap();
            }
            prop_assert!(sheet.total_points() <= 44);
        }
    }
}
