//! Static catalog of age-group game formats and their rules reference.

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

/// How the timed segments of a match are named for a given format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PeriodName {
    /// Generic "Period N" naming.
    Period,
    /// Four quarters ("1st Quarter" .. "4th Quarter").
    Quarter,
    /// Two halves ("1st Half" / "2nd Half").
    Half,
}

/// Immutable description of one age-group game format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameFormat {
    /// Stable identifier used in URLs and match creation requests.
    pub id: &'static str,
    /// Age bracket the format applies to (e.g. "U8-9").
    pub age_group: &'static str,
    /// Team size notation (e.g. "5v5").
    pub format: &'static str,
    /// Number of timed segments in a full match.
    pub period_count: u8,
    /// Length of one segment in whole minutes.
    pub period_duration_minutes: u16,
    /// Naming scheme for the segments.
    pub period_name: PeriodName,
}

impl GameFormat {
    /// Full duration of one period in seconds.
    pub fn period_seconds(&self) -> u32 {
        u32::from(self.period_duration_minutes) * 60
    }

    /// Human-readable label for a 1-based period number.
    pub fn period_label(&self, period: u8) -> String {
        match self.period_name {
            PeriodName::Quarter => format!("{} Quarter", ordinal(period)),
            PeriodName::Half => format!("{} Half", ordinal(period)),
            PeriodName::Period => format!("Period {period}"),
        }
    }
}

/// English ordinal suffix for small period numbers.
fn ordinal(n: u8) -> String {
    match n {
        1 => "1st".into(),
        2 => "2nd".into(),
        3 => "3rd".into(),
        other => format!("{other}th"),
    }
}

/// Rules reference sheet associated with a team-size format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub format: &'static str,
    pub play_time: &'static str,
    pub field: &'static str,
    pub goals: &'static str,
    pub ball: &'static str,
    pub ranking: &'static str,
    pub substitutions: &'static str,
    pub offside: &'static str,
    pub penalty: &'static str,
    pub goal_kick: &'static str,
    pub free_kick: &'static str,
    pub corner_kick: &'static str,
    pub throw_in: &'static str,
    pub cards: &'static str,
    pub fairplay: &'static str,
    pub shoes: &'static str,
}

/// Selectable formats in catalog order, youngest bracket first.
const FORMATS: &[GameFormat] = &[
    GameFormat {
        id: "u7",
        age_group: "U7",
        format: "3v3",
        period_count: 4,
        period_duration_minutes: 10,
        period_name: PeriodName::Quarter,
    },
    GameFormat {
        id: "u8-9",
        age_group: "U8-9",
        format: "5v5",
        period_count: 4,
        period_duration_minutes: 15,
        period_name: PeriodName::Quarter,
    },
    GameFormat {
        id: "u10-13",
        age_group: "U10-13",
        format: "8v8",
        period_count: 4,
        period_duration_minutes: 15,
        period_name: PeriodName::Quarter,
    },
    GameFormat {
        id: "u14-17",
        age_group: "U14-17",
        format: "11v11",
        period_count: 4,
        period_duration_minutes: 20,
        period_name: PeriodName::Quarter,
    },
    GameFormat {
        id: "u19-21",
        age_group: "U19-21",
        format: "11v11",
        period_count: 2,
        period_duration_minutes: 45,
        period_name: PeriodName::Half,
    },
];

/// Rules sheets keyed by team-size format, smallest first.
static RULES: LazyLock<IndexMap<&'static str, GameRules>> = LazyLock::new(|| {
    IndexMap::from([
        (
            "2v2",
            GameRules {
                format: "2v2",
                play_time: "Max 6 wedstrijdjes x 6 min",
                field: "12,5m x 18m",
                goals: "Verdedigd (max keeper)",
                ball: "Maat 3",
                ranking: "Geen rangschikking",
                substitutions: "Iedereen speelt",
                offside: "Geen buitenspel",
                penalty: "Geen strafschop",
                goal_kick: "Indribbelen",
                free_kick: "Altijd onrechtstreeks",
                corner_kick: "Geen hoekschop",
                throw_in: "Indribbelen",
                cards: "Geen gele/rode kaarten",
                fairplay: "High 5 voor en na de wedstrijd",
                shoes: "Geen aluminium noppen toegelaten",
            },
        ),
        (
            "3v3",
            GameRules {
                format: "3v3",
                play_time: "Max 4 wedstrijdjes x 10 min",
                field: "20m x 30m",
                goals: "Verdedigd (max keeper)",
                ball: "Maat 3",
                ranking: "Geen rangschikking",
                substitutions: "Iedereen speelt",
                offside: "Geen buitenspel",
                penalty: "Geen strafschop",
                goal_kick: "Intrappen of indribbelen",
                free_kick: "Altijd onrechtstreeks",
                corner_kick: "Geen hoekschop",
                throw_in: "Intrappen of indribbelen",
                cards: "Geen gele/rode kaarten",
                fairplay: "High 5 voor en na de wedstrijd",
                shoes: "Geen aluminium noppen toegelaten",
            },
        ),
        (
            "5v5",
            GameRules {
                format: "5v5",
                play_time: "4 x 15 min",
                field: "25m x 35m",
                goals: "2m x 5m",
                ball: "Maat 4",
                ranking: "Geen rangschikking",
                substitutions: "Doorlopende wissels",
                offside: "Geen buitenspel",
                penalty: "Geen strafschop binnen doelzone",
                goal_kick: "Intrappen of indribbelen",
                free_kick: "Altijd onrechtstreeks - 8m afstand",
                corner_kick: "Van toepassing - 8m afstand",
                throw_in: "Intrappen of indribbelen - 3m afstand",
                cards: "Gele kaarten niet geboekt",
                fairplay: "High 5 voor en na de wedstrijd",
                shoes: "Geen aluminium noppen toegelaten",
            },
        ),
        (
            "8v8",
            GameRules {
                format: "8v8",
                play_time: "4 x 15 min",
                field: "U10-U11: 30/35m x 40/50m, U12-U13: 40/45m x 50/60m",
                goals: "2m x 5m",
                ball: "Maat 4",
                ranking: "Geen rangschikking",
                substitutions: "Doorlopende wissels",
                offside: "Geen buitenspel",
                penalty: "Geen strafschop",
                goal_kick: "Intrappen",
                free_kick: "Altijd onrechtstreeks",
                corner_kick: "Van toepassing",
                throw_in: "Inworp",
                cards: "Gele kaarten niet geboekt",
                fairplay: "High 5 voor en na de wedstrijd",
                shoes: "Geen aluminium noppen toegelaten",
            },
        ),
        (
            "11v11",
            GameRules {
                format: "11v11",
                play_time: "U14-U17: 4 x 20 min, U19-U21: 2 x 45 min",
                field: "Volledig terrein",
                goals: "2,44m x 7,32m",
                ball: "Maat 5 (U14-U16: Maat 4)",
                ranking: "Van toepassing",
                substitutions: "Van toepassing",
                offside: "Van toepassing",
                penalty: "Van toepassing",
                goal_kick: "Intrappen",
                free_kick: "(On)rechtstreeks",
                corner_kick: "Van toepassing",
                throw_in: "Inworp",
                cards: "Van toepassing",
                fairplay: "High 5 voor en na de wedstrijd",
                shoes: "Aluminium noppen toegelaten",
            },
        ),
    ])
});

/// All selectable formats in catalog order.
pub fn formats() -> &'static [GameFormat] {
    FORMATS
}

/// Look a format up by its identifier.
pub fn find(id: &str) -> Option<&'static GameFormat> {
    FORMATS.iter().find(|format| format.id == id)
}

/// Rules sheet for a team-size format (e.g. "5v5"), matched case-insensitively.
pub fn rules_for_format(format: &str) -> Option<&'static GameRules> {
    let key = format.to_lowercase();
    RULES.get(key.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_five_formats_in_order() {
        let ids: Vec<&str> = formats().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["u7", "u8-9", "u10-13", "u14-17", "u19-21"]);
    }

    #[test]
    fn find_resolves_known_and_unknown_ids() {
        let format = find("u19-21").expect("format exists");
        assert_eq!(format.period_count, 2);
        assert_eq!(format.period_duration_minutes, 45);
        assert_eq!(format.period_name, PeriodName::Half);
        assert!(find("u99").is_none());
    }

    #[test]
    fn period_seconds_converts_minutes() {
        assert_eq!(find("u7").unwrap().period_seconds(), 600);
        assert_eq!(find("u19-21").unwrap().period_seconds(), 2700);
    }

    #[test]
    fn quarter_labels_use_ordinals() {
        let format = find("u8-9").unwrap();
        assert_eq!(format.period_label(1), "1st Quarter");
        assert_eq!(format.period_label(2), "2nd Quarter");
        assert_eq!(format.period_label(3), "3rd Quarter");
        assert_eq!(format.period_label(4), "4th Quarter");
    }

    #[test]
    fn half_and_generic_labels() {
        let halves = find("u19-21").unwrap();
        assert_eq!(halves.period_label(1), "1st Half");
        assert_eq!(halves.period_label(2), "2nd Half");

        let generic = GameFormat {
            period_name: PeriodName::Period,
            ..*find("u7").unwrap()
        };
        assert_eq!(generic.period_label(3), "Period 3");
    }

    #[test]
    fn rules_lookup_is_case_insensitive() {
        assert!(rules_for_format("5V5").is_some());
        assert_eq!(rules_for_format("8v8").unwrap().ball, "Maat 4");
        assert!(rules_for_format("9v9").is_none());
    }

    #[test]
    fn every_catalog_format_has_a_rules_sheet() {
        for format in formats() {
            assert!(
                rules_for_format(format.format).is_some(),
                "missing rules for {}",
                format.format
            );
        }
    }
}
