//! Criminal convictions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Offence categories a conviction can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Offence {
    Murder,
    Assault,
    SexualAssault,
    Theft,
    Burglary,
    Fraud,
    DrugOffence,
    PossessionOfOffensiveWeapon,
    ResistingArrest,
    DrinkDriving,
}

/// A conviction: the date, a description, and one or more offence tags
///
/// Convictions are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conviction {
    date: NaiveDate,
    description: String,
    #[serde(default)]
    offence_tags: BTreeSet<Offence>,
}

impl Conviction {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        offence_tags: impl IntoIterator<Item = Offence>,
    ) -> Self {
        Conviction {
            date,
            description: description.into(),
            offence_tags: offence_tags.into_iter().collect(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn offence_tags(&self) -> &BTreeSet<Offence> {
        &self.offence_tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let conviction = Conviction::new(date, "Shoplifting", [Offence::Theft]);

        let json = serde_json::to_value(&conviction).unwrap();
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["description"], "Shoplifting");
        assert_eq!(json["offenceTags"], serde_json::json!(["THEFT"]));

        let back: Conviction = serde_json::from_value(json).unwrap();
        assert_eq!(back.date(), date);
        assert_eq!(back.description(), "Shoplifting");
        assert!(back.offence_tags().contains(&Offence::Theft));
    }

    #[test]
    fn test_tags_compare_as_set() {
        let date = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        let a = Conviction::new(date, "Brawl", [Offence::Assault, Offence::ResistingArrest]);
        let b = Conviction::new(date, "Brawl", [Offence::ResistingArrest, Offence::Assault, Offence::Assault]);
        assert_eq!(a, b);
    }
}
