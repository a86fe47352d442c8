//! Embed formatting for bot replies.
//!
//! Formatters are pure: they turn API models into [`PageView`]s without touching
//! Discord, so layout can be unit tested.

pub mod demon;
pub mod info;
pub mod nation;
pub mod player;

use crate::{
    i18n::Text,
    model::{
        guild_settings::Language,
        pointercrate::{ListTier, Nationality, PlayerRef},
    },
    pagination::view::{
        EmbedAuthor, EmbedField, EmbedView, EMBED_FIELD_LIMIT, EMBED_TEXT_LIMIT, FIELD_VALUE_LIMIT,
    },
};

pub const EMBED_COLOR: u32 = 0x2B2D31;
pub const BOT_NAME: &str = "PointerBot";
/// Zero width space, for fields that continue the previous one.
const BLANK: &str = "\u{200B}";

/// Embed with the bot's color, author and title.
pub fn base_embed(title: impl Into<String>) -> EmbedView {
    EmbedView {
        title: Some(title.into()),
        color: Some(EMBED_COLOR),
        author: Some(EmbedAuthor {
            name: BOT_NAME.to_string(),
            icon_url: None,
            url: None,
        }),
        ..Default::default()
    }
}

pub fn page_footer(lang: Language, page_index: u32) -> String {
    format!("{} {}", lang.text(Text::Page), page_index)
}

/// Demon name styled by list tier: bold for main, italic for extended.
pub fn styled_demon_name(name: &str, position: Option<u32>) -> String {
    match position.map(ListTier::from_position) {
        Some(ListTier::Main) => format!("**{name}**"),
        Some(ListTier::Extended) => format!("*{name}*"),
        Some(ListTier::Legacy) | None => name.to_string(),
    }
}

/// Player name, underlined when banned from the list.
pub fn player_name(player: &PlayerRef) -> String {
    if player.banned {
        format!("__{}__", player.name)
    } else {
        player.name.clone()
    }
}

pub fn flag_emoji(nationality: Option<&Nationality>) -> String {
    match nationality {
        Some(nationality) => format!(":flag_{}:", nationality.country_code.to_lowercase()),
        None => ":united_nations:".to_string(),
    }
}

pub fn flag_image(country_code: &str) -> String {
    format!("https://flagcdn.com/h240/{}.png", country_code.to_lowercase())
}

/// Trophy for a completed demon's list position.
pub fn demon_trophy(position: u32) -> &'static str {
    match position {
        1 => ":crown:",
        2..=10 => ":trophy:",
        11..=75 => ":first_place:",
        76..=150 => ":second_place:",
        _ => ":third_place:",
    }
}

/// Trophy for a player's ranking.
pub fn player_trophy(rank: u32) -> &'static str {
    match rank {
        1 => ":crown:",
        2..=10 => ":trophy:",
        11..=50 => ":first_place:",
        51..=100 => ":second_place:",
        101..=500 => ":third_place:",
        _ => ":medal:",
    }
}

/// Right-aligned number in a code span.
pub fn padded(number: u32, width: usize) -> String {
    format!("`{:>width$}`", number, width = width)
}

/// Digits needed for the largest number in a list.
pub fn pad_width(largest: u32) -> usize {
    largest.to_string().len()
}

/// Room left in an embed for a list of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBudget {
    pub fields: usize,
    pub chars: usize,
}

impl FieldBudget {
    /// Equal share of what `embed` leaves of Discord's limits, for `parts` lists.
    pub fn share_of(embed: &EmbedView, parts: usize) -> Self {
        let parts = parts.max(1);

        Self {
            fields: EMBED_FIELD_LIMIT.saturating_sub(embed.fields.len()) / parts,
            chars: EMBED_TEXT_LIMIT.saturating_sub(embed.text_len()) / parts,
        }
    }
}

/// Room kept free for the "+N more" tail.
const TAIL_RESERVE: usize = 24;

/// Packs entries into as many fields as `budget` allows.
///
/// Entries are joined with ` - ` and each field stays under Discord's value limit.
/// Continuation fields carry a blank name. Entries past the budget are replaced
/// by a "+N more" tail. An empty list yields one field saying there is nothing.
pub fn split_fields(
    lang: Language,
    name: &str,
    entries: &[String],
    budget: FieldBudget,
) -> Vec<EmbedField> {
    if entries.is_empty() {
        return vec![EmbedField::new(name, lang.text(Text::Nothing), false)];
    }

    let value_limit = FIELD_VALUE_LIMIT - TAIL_RESERVE;
    let mut fields = vec![EmbedField::new(name, String::new(), false)];
    let mut used = name.len() + TAIL_RESERVE;

    for (index, entry) in entries.iter().enumerate() {
        let current_len = fields.last().map_or(0, |field| field.value.len());
        let separator = if current_len == 0 { "" } else { " - " };
        let fits_current = current_len + separator.len() + entry.len() <= value_limit;
        let cost = if fits_current {
            separator.len() + entry.len()
        } else {
            BLANK.len() + entry.len()
        };

        if used + cost > budget.chars || (!fits_current && fields.len() >= budget.fields) {
            let hidden = entries.len() - index;
            if let Some(last) = fields.last_mut() {
                let separator = if last.value.is_empty() { "" } else { " - " };
                last.value
                    .push_str(&format!("{separator}+{hidden} {}", lang.text(Text::More)));
            }
            break;
        }

        used += cost;
        match fields.last_mut() {
            Some(last) if fits_current => {
                last.value.push_str(separator);
                last.value.push_str(entry);
            }
            _ => fields.push(EmbedField::new(BLANK, entry.clone(), false)),
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roomy() -> FieldBudget {
        FieldBudget {
            fields: EMBED_FIELD_LIMIT,
            chars: EMBED_TEXT_LIMIT,
        }
    }

    #[test]
    fn styles_names_by_tier() {
        assert_eq!(styled_demon_name("Acheron", Some(1)), "**Acheron**");
        assert_eq!(styled_demon_name("Cataclysm", Some(100)), "*Cataclysm*");
        assert_eq!(styled_demon_name("Bloodbath", Some(200)), "Bloodbath");
        assert_eq!(styled_demon_name("Unlisted", None), "Unlisted");
    }

    #[test]
    fn marks_banned_players() {
        let banned = PlayerRef {
            id: 1,
            name: "Cheater".to_string(),
            banned: true,
        };

        assert_eq!(player_name(&banned), "__Cheater__");
    }

    #[test]
    fn pads_numbers() {
        assert_eq!(padded(7, pad_width(150)), "`  7`");
        assert_eq!(padded(150, pad_width(150)), "`150`");
    }

    #[test]
    fn splits_long_field_lists() {
        let entries: Vec<String> = (0..100).map(|i| format!("Demon number {i:03}")).collect();

        let fields = split_fields(Language::English, "Completed", &entries, roomy());

        assert!(fields.len() > 1);
        assert!(fields.iter().all(|field| field.value.len() <= FIELD_VALUE_LIMIT));
        assert_eq!(fields[0].name, "Completed");
        assert_eq!(fields[1].name, BLANK);
        assert!(!fields[1].value.starts_with(" - "));
    }

    #[test]
    fn empty_field_list_says_none() {
        let fields = split_fields(Language::Spanish, "Completados", &[], roomy());

        assert_eq!(fields, vec![EmbedField::new("Completados", "Ninguno", false)]);
    }

    #[test]
    fn long_lists_end_in_a_count_of_hidden_entries() {
        let entries: Vec<String> = (0..600).map(|i| format!("Demon number {i:03}")).collect();
        let budget = FieldBudget {
            fields: 7,
            chars: 1900,
        };

        let fields = split_fields(Language::English, "Completed", &entries, budget);

        assert!(fields.len() <= budget.fields);
        let total: usize = fields.iter().map(|f| f.name.len() + f.value.len()).sum();
        assert!(total <= budget.chars);
        assert!(fields.iter().all(|field| field.value.len() <= FIELD_VALUE_LIMIT));

        let tail = fields.last().unwrap().value.rsplit(" - ").next().unwrap();
        let shown: usize = fields
            .iter()
            .map(|field| field.value.split(" - ").filter(|e| e.starts_with("Demon")).count())
            .sum();
        assert_eq!(tail, format!("+{} more", entries.len() - shown));
    }

    #[test]
    fn share_leaves_room_for_fixed_fields() {
        let mut embed = base_embed("Zoink");
        embed.fields = vec![EmbedField::new("Rank", "3", true); 4];

        let budget = FieldBudget::share_of(&embed, 3);

        assert_eq!(budget.fields, 7);
        assert_eq!(budget.chars, (EMBED_TEXT_LIMIT - embed.text_len()) / 3);
    }
}
