use crate::{
    bot::embed::{
        base_embed, demon_trophy, flag_emoji, flag_image, pad_width, padded, page_footer,
        player_trophy, split_fields, FieldBudget, styled_demon_name,
    },
    i18n::Text,
    model::{
        guild_settings::Language,
        pointercrate::RankedPlayer,
        profile::PlayerProfile,
    },
    pagination::view::{EmbedField, PageView, SelectOption, ViewRow, ViewSelect},
};

pub const PLAYER_SELECT_ID: &str = "player";

fn ranking_lines(players: &[RankedPlayer]) -> String {
    let width = pad_width(players.iter().map(|p| p.rank).max().unwrap_or(0));

    players
        .iter()
        .map(|player| {
            format!(
                "{} {} - **{}** *{:.2}*\n",
                flag_emoji(player.nationality.as_ref()),
                padded(player.rank, width),
                player.name,
                player.score
            )
        })
        .collect()
}

/// A page of the international player ranking.
pub fn ranking(lang: Language, players: &[RankedPlayer], page_index: u32) -> PageView {
    let mut embed = base_embed(lang.text(Text::Ranking));
    embed.description = Some(ranking_lines(players));
    embed.footer = Some(page_footer(lang, page_index));

    PageView::embed(embed)
}

/// A page of players matching a name search, with a menu to open one.
pub fn player_search(lang: Language, players: &[RankedPlayer], page_index: u32) -> PageView {
    let mut embed = base_embed(lang.text(Text::Players));
    embed.description = Some(ranking_lines(players));
    embed.footer = Some(page_footer(lang, page_index));

    let options = players
        .iter()
        .map(|player| {
            SelectOption::new(&player.name, player.id.to_string())
                .description(&format!("#{} - {:.2}", player.rank, player.score))
        })
        .collect();

    PageView::embed(embed).with_row(ViewRow::Select(ViewSelect::new(
        PLAYER_SELECT_ID,
        lang.text(Text::SelectPlayer),
        options,
    )))
}

/// A page of one nation's player leaderboard.
pub fn nation_leaderboard(
    lang: Language,
    nation: &str,
    country_code: &str,
    players: &[RankedPlayer],
    first_rank: u32,
    page_index: u32,
) -> PageView {
    let last_rank = first_rank + players.len().saturating_sub(1) as u32;
    let width = pad_width(last_rank);

    let description: String = players
        .iter()
        .enumerate()
        .map(|(i, player)| {
            format!(
                "{} - **{}** *{:.2}*\n",
                padded(first_rank + i as u32, width),
                player.name,
                player.score
            )
        })
        .collect();

    let mut embed = base_embed(format!("{} {}", lang.text(Text::CountryStats), nation));
    embed.description = Some(description);
    embed.footer = Some(format!("{} - {}", nation, page_footer(lang, page_index)));
    embed.thumbnail = Some(flag_image(country_code));

    PageView::embed(embed)
}

/// A player's rank, completions and verifications.
pub fn profile(lang: Language, profile: &PlayerProfile) -> PageView {
    let player = &profile.player;
    let counts = profile.tier_counts();

    let hardest = profile
        .hardest()
        .map(|demon| {
            let position = demon.position.unwrap_or(u32::MAX);
            format!(
                "{} {}",
                styled_demon_name(&demon.name, demon.position),
                demon_trophy(position)
            )
        })
        .unwrap_or_else(|| lang.text(Text::Nothing).to_string());

    let completed: Vec<String> = profile
        .completed()
        .iter()
        .map(|demon| styled_demon_name(&demon.name, demon.position))
        .collect();
    let progress: Vec<String> = profile
        .in_progress()
        .iter()
        .map(|record| {
            format!(
                "{} ({}%)",
                styled_demon_name(&record.demon.name, record.demon.position),
                record.progress
            )
        })
        .collect();
    let verified: Vec<String> = profile
        .verified
        .iter()
        .map(|demon| styled_demon_name(&demon.name, demon.position))
        .collect();

    let mut embed = base_embed(&player.name);
    embed.fields = vec![
        EmbedField::new(
            lang.text(Text::Rank),
            format!("{} {}", player.rank, player_trophy(player.rank)),
            true,
        ),
        EmbedField::new(lang.text(Text::Score), format!("{:.2}", player.score), true),
        EmbedField::new(
            lang.text(Text::Stats),
            format!(
                "{} Main, {} Extended, {} Legacy",
                counts.main, counts.extended, counts.legacy
            ),
            true,
        ),
        EmbedField::new(lang.text(Text::Hardest), hardest, true),
    ];
    let budget = FieldBudget::share_of(&embed, 3);
    embed
        .fields
        .extend(split_fields(lang, lang.text(Text::Completed), &completed, budget));
    embed
        .fields
        .extend(split_fields(lang, lang.text(Text::Progress), &progress, budget));
    embed
        .fields
        .extend(split_fields(lang, lang.text(Text::Verified), &verified, budget));
    embed.thumbnail = player
        .nationality
        .as_ref()
        .map(|nationality| flag_image(&nationality.country_code));

    PageView::embed(embed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pointercrate::{Demon, Record};
    use crate::pagination::view::{EMBED_FIELD_LIMIT, EMBED_TEXT_LIMIT};
    use test_utils::fixture::pointercrate;

    fn player(rank: u32, name: &str, country: Option<(&str, &str)>) -> RankedPlayer {
        serde_json::from_value(pointercrate::ranked_player(rank, name, 250.0, country)).unwrap()
    }

    fn record(id: u64, position: u32, name: &str, progress: u8) -> Record {
        serde_json::from_value(pointercrate::record(id, "Zoink", position, name, progress)).unwrap()
    }

    #[test]
    fn ranking_lines_show_flags() {
        let players = vec![
            player(1, "Zoink", Some(("CH", "Switzerland"))),
            player(2, "Trick", None),
        ];

        let view = ranking(Language::English, &players, 1);

        assert_eq!(
            view.embed.unwrap().description.as_deref(),
            Some(":flag_ch: `1` - **Zoink** *250.00*\n:united_nations: `2` - **Trick** *250.00*\n")
        );
        assert!(view.rows.is_empty());
    }

    #[test]
    fn profile_summarises_records() {
        let verified: Demon = serde_json::from_value(pointercrate::demon(160, "Sonic Wave")).unwrap();
        let profile = PlayerProfile {
            player: player(3, "Zoink", Some(("CH", "Switzerland"))),
            records: vec![
                record(1, 1, "Tidal Wave", 100),
                record(2, 90, "Cataclysm", 100),
                record(3, 5, "Acheron", 67),
            ],
            verified: vec![verified],
        };

        let view = super::profile(Language::English, &profile);

        let embed = view.embed.unwrap();
        assert_eq!(embed.fields[0].value, "3 :trophy:");
        assert_eq!(embed.fields[2].value, "1 Main, 1 Extended, 0 Legacy");
        assert_eq!(embed.fields[3].value, "**Tidal Wave** :crown:");
        assert_eq!(embed.fields[4].value, "**Tidal Wave** - *Cataclysm*");
        assert_eq!(embed.fields[5].value, "**Acheron** (67%)");
        assert_eq!(embed.fields[6].value, "Sonic Wave");
        assert_eq!(
            embed.thumbnail.as_deref(),
            Some("https://flagcdn.com/h240/ch.png")
        );
    }

    #[test]
    fn profile_with_many_records_fits_discord_limits() {
        let records = (1..=400u32)
            .map(|i| {
                let progress = if i % 3 == 0 { 80 } else { 100 };
                record(u64::from(i), i, &format!("Some Long Demon Name {i}"), progress)
            })
            .collect();
        let profile = PlayerProfile {
            player: player(1, "Zoink", None),
            records,
            verified: Vec::new(),
        };

        let view = super::profile(Language::English, &profile);

        let embed = view.embed.unwrap();
        assert!(embed.fields.len() <= EMBED_FIELD_LIMIT);
        assert!(embed.text_len() <= EMBED_TEXT_LIMIT);
        assert!(embed.fields.iter().any(|field| field.value.ends_with(" more")));
    }

    #[test]
    fn nation_leaderboard_numbers_from_offset() {
        let players = vec![player(40, "A", None), player(77, "B", None)];

        let view = nation_leaderboard(Language::English, "Spain", "ES", &players, 16, 2);

        let embed = view.embed.unwrap();
        assert_eq!(embed.title.as_deref(), Some("Country stats Spain"));
        assert_eq!(
            embed.description.as_deref(),
            Some("`16` - **A** *250.00*\n`17` - **B** *250.00*\n")
        );
        assert_eq!(embed.footer.as_deref(), Some("Spain - Page 2"));
    }
}
