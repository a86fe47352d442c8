//! Aggregates assembled from several API calls.

use crate::model::{
    level::DemonDifficulty,
    pointercrate::{Demon, DemonRef, ListTier, PlayerRef, RankedPlayer, Record},
};

/// A demon with everything its detail view shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DemonDetail {
    pub demon: Demon,
    pub first_victor: Option<PlayerRef>,
    pub difficulty: Option<DemonDifficulty>,
    /// Verification video, or the first victor's when the demon has none.
    pub video: Option<String>,
    pub image: Option<String>,
}

/// Completions per list tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub main: usize,
    pub extended: usize,
    pub legacy: usize,
}

/// A ranked player together with their records and verifications.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub player: RankedPlayer,
    pub records: Vec<Record>,
    pub verified: Vec<Demon>,
}

impl PlayerProfile {
    /// Full completions on positioned demons, ordered by position.
    pub fn completed(&self) -> Vec<&DemonRef> {
        let mut demons: Vec<&DemonRef> = self
            .records
            .iter()
            .filter(|record| record.progress == 100)
            .map(|record| &record.demon)
            .collect();
        demons.sort_by_key(|demon| demon.position.unwrap_or(u32::MAX));
        demons
    }

    /// Partial records, ordered by position.
    pub fn in_progress(&self) -> Vec<&Record> {
        let mut records: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| record.progress < 100)
            .collect();
        records.sort_by_key(|record| record.demon.position.unwrap_or(u32::MAX));
        records
    }

    pub fn tier_counts(&self) -> TierCounts {
        let mut counts = TierCounts::default();

        for position in self.completed().iter().filter_map(|demon| demon.position) {
            match ListTier::from_position(position) {
                ListTier::Main => counts.main += 1,
                ListTier::Extended => counts.extended += 1,
                ListTier::Legacy => counts.legacy += 1,
            }
        }

        counts
    }

    /// Best placed demon the player has completed.
    pub fn hardest(&self) -> Option<&DemonRef> {
        self.completed()
            .into_iter()
            .find(|demon| demon.position.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture::pointercrate;

    fn record(id: u64, position: u32, name: &str, progress: u8) -> Record {
        serde_json::from_value(pointercrate::record(id, "Zoink", position, name, progress)).unwrap()
    }

    fn profile(records: Vec<Record>) -> PlayerProfile {
        PlayerProfile {
            player: serde_json::from_value(pointercrate::ranked_player(1, "Zoink", 500.0, None))
                .unwrap(),
            records,
            verified: Vec::new(),
        }
    }

    #[test]
    fn counts_completions_per_tier() {
        let profile = profile(vec![
            record(1, 3, "Acheron", 100),
            record(2, 80, "Cataclysm", 100),
            record(3, 151, "Bloodbath", 100),
            record(4, 160, "Sonic Wave", 100),
            record(5, 10, "Tidal Wave", 56),
        ]);

        assert_eq!(
            profile.tier_counts(),
            TierCounts {
                main: 1,
                extended: 1,
                legacy: 2,
            }
        );
    }

    #[test]
    fn hardest_is_best_placed_completion() {
        let profile = profile(vec![
            record(1, 40, "Slaughterhouse", 100),
            record(2, 2, "Thinking Space II", 80),
            record(3, 12, "Avernus", 100),
        ]);

        assert_eq!(profile.hardest().map(|demon| demon.name.as_str()), Some("Avernus"));
        assert_eq!(profile.in_progress().len(), 1);
    }

    #[test]
    fn no_completions_has_no_hardest() {
        let profile = profile(vec![record(1, 5, "Acheron", 42)]);

        assert!(profile.hardest().is_none());
        assert_eq!(profile.tier_counts(), TierCounts::default());
    }
}
