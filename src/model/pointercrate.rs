//! Pointercrate API payloads.
//!
//! Only the fields the bot renders are modeled; serde ignores the rest.

use serde::Deserialize;

/// Last position of the main list.
pub const MAIN_LIST_END: u32 = 75;
/// Last position of the extended list.
pub const EXTENDED_LIST_END: u32 = 150;

/// Player as embedded in demons and records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerRef {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub banned: bool,
}

/// A demon on the list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Demon {
    pub id: u64,
    #[serde(default)]
    pub position: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub requirement: Option<u8>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub level_id: Option<u64>,
    pub publisher: PlayerRef,
    pub verifier: PlayerRef,
}

/// A player's country.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Nationality {
    pub country_code: String,
    pub nation: String,
}

/// A row of the player ranking.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankedPlayer {
    pub id: u64,
    pub name: String,
    pub rank: u32,
    pub score: f64,
    #[serde(default)]
    pub banned: bool,
    #[serde(default)]
    pub nationality: Option<Nationality>,
}

/// Demon as embedded in records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemonRef {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub position: Option<u32>,
}

/// An approved completion or progress record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub id: u64,
    pub progress: u8,
    #[serde(default)]
    pub video: Option<String>,
    pub player: PlayerRef,
    pub demon: DemonRef,
}

/// A row of the nationality score ranking.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NationScore {
    #[serde(default)]
    pub rank: Option<u32>,
    pub country_code: String,
    pub nation: String,
    pub score: f64,
}

/// Section of the list a position falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTier {
    Main,
    Extended,
    Legacy,
}

impl ListTier {
    pub fn from_position(position: u32) -> Self {
        if position <= MAIN_LIST_END {
            ListTier::Main
        } else if position <= EXTENDED_LIST_END {
            ListTier::Extended
        } else {
            ListTier::Legacy
        }
    }

    /// Number of positions preceding the tier.
    pub fn offset_base(&self) -> u32 {
        match self {
            ListTier::Main => 0,
            ListTier::Extended => MAIN_LIST_END,
            ListTier::Legacy => EXTENDED_LIST_END,
        }
    }

    /// Pages a 25-entry listing of the tier spans; legacy is open ended.
    pub fn page_cap(&self) -> Option<u32> {
        match self {
            ListTier::Main => Some(3),
            ListTier::Extended => Some(3),
            ListTier::Legacy => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture::pointercrate;

    #[test]
    fn deserializes_listed_demon() {
        let demon: Demon = serde_json::from_value(pointercrate::demon(3, "Acheron")).unwrap();

        assert_eq!(demon.position, Some(3));
        assert_eq!(demon.name, "Acheron");
        assert_eq!(demon.publisher.name, "Publisher");
        assert_eq!(demon.level_id, Some(80000003));
    }

    #[test]
    fn deserializes_player_without_nationality() {
        let player: RankedPlayer =
            serde_json::from_value(pointercrate::ranked_player(7, "Zoink", 310.5, None)).unwrap();

        assert_eq!(player.rank, 7);
        assert!(player.nationality.is_none());
        assert!(!player.banned);
    }

    #[test]
    fn deserializes_record() {
        let record: Record =
            serde_json::from_value(pointercrate::record(9, "Trick", 12, "Sakupen Circles", 100))
                .unwrap();

        assert_eq!(record.progress, 100);
        assert_eq!(record.demon.position, Some(12));
        assert_eq!(record.player.name, "Trick");
    }

    #[test]
    fn classifies_positions() {
        assert_eq!(ListTier::from_position(1), ListTier::Main);
        assert_eq!(ListTier::from_position(75), ListTier::Main);
        assert_eq!(ListTier::from_position(76), ListTier::Extended);
        assert_eq!(ListTier::from_position(150), ListTier::Extended);
        assert_eq!(ListTier::from_position(151), ListTier::Legacy);
    }
}
