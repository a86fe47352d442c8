//! Level metadata payloads.

use serde::Deserialize;

/// Level as returned by the metadata API's `api/level/{id}` route.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelInfo {
    pub difficulty: String,
}

/// Demon difficulty face shown next to a demon's details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemonDifficulty {
    Easy,
    Medium,
    Hard,
    Insane,
    Extreme,
}

impl DemonDifficulty {
    /// Maps the metadata API's difficulty label.
    ///
    /// Non-demon difficulties yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy demon" => Some(Self::Easy),
            "medium demon" => Some(Self::Medium),
            "hard demon" => Some(Self::Hard),
            "insane demon" => Some(Self::Insane),
            "extreme demon" => Some(Self::Extreme),
            _ => None,
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Insane => "insane",
            Self::Extreme => "extreme",
        }
    }

    /// Image of the difficulty face, served by the metadata API host.
    pub fn face_url(&self, level_api_url: &str) -> String {
        format!(
            "{}/assets/difficulties/demon-{}.png",
            level_api_url.trim_end_matches('/'),
            self.slug()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_labels() {
        assert_eq!(
            DemonDifficulty::from_label("Extreme Demon"),
            Some(DemonDifficulty::Extreme)
        );
        assert_eq!(
            DemonDifficulty::from_label("easy demon"),
            Some(DemonDifficulty::Easy)
        );
        assert_eq!(DemonDifficulty::from_label("Harder"), None);
    }

    #[test]
    fn builds_face_url() {
        assert_eq!(
            DemonDifficulty::Insane.face_url("https://gdbrowser.com/"),
            "https://gdbrowser.com/assets/difficulties/demon-insane.png"
        );
    }
}
