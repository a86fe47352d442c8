use crate::{
    bot::embed::{base_embed, flag_emoji, pad_width, padded, page_footer},
    i18n::Text,
    model::{
        guild_settings::Language,
        pointercrate::{NationScore, Nationality},
    },
    pagination::view::{PageView, SelectOption, ViewRow, ViewSelect},
};

pub const COUNTRY_SELECT_ID: &str = "country";

/// A page of the nation score ranking.
///
/// `first_rank` numbers rows when the API omits ranks.
pub fn nationalities(
    lang: Language,
    nations: &[NationScore],
    first_rank: u32,
    page_index: u32,
) -> PageView {
    let ranks: Vec<u32> = nations
        .iter()
        .enumerate()
        .map(|(i, nation)| nation.rank.unwrap_or(first_rank + i as u32))
        .collect();
    let width = pad_width(ranks.iter().copied().max().unwrap_or(0));

    let description: String = nations
        .iter()
        .zip(ranks)
        .map(|(nation, rank)| {
            let nationality = Nationality {
                country_code: nation.country_code.clone(),
                nation: nation.nation.clone(),
            };
            format!(
                "{} {} - **{}** *{:.2}*\n",
                flag_emoji(Some(&nationality)),
                padded(rank, width),
                nation.nation,
                nation.score
            )
        })
        .collect();

    let mut embed = base_embed(lang.text(Text::Nationalities));
    embed.description = Some(description);
    embed.footer = Some(page_footer(lang, page_index));

    PageView::embed(embed)
}

/// A page of countries to pick a leaderboard from.
pub fn country_picker(
    lang: Language,
    nations: &[NationScore],
    first_index: u32,
    page_index: u32,
) -> PageView {
    let width = pad_width(first_index + nations.len() as u32);

    let description: String = nations
        .iter()
        .enumerate()
        .map(|(i, nation)| format!("{} {}\n", padded(first_index + i as u32, width), nation.nation))
        .collect();

    let options = nations
        .iter()
        .map(|nation| SelectOption::new(&nation.nation, nation.country_code.clone()))
        .collect();

    let mut embed = base_embed(lang.text(Text::Countries));
    embed.description = Some(description);
    embed.footer = Some(page_footer(lang, page_index));

    PageView::embed(embed).with_row(ViewRow::Select(ViewSelect::new(
        COUNTRY_SELECT_ID,
        lang.text(Text::SelectCountry),
        options,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture::pointercrate;

    fn nation(rank: u32, code: &str, name: &str) -> NationScore {
        serde_json::from_value(pointercrate::nation_score(rank, code, name, 1234.5)).unwrap()
    }

    #[test]
    fn ranks_nations_with_flags() {
        let nations = vec![nation(9, "US", "United States"), nation(10, "KR", "Korea")];

        let view = nationalities(Language::English, &nations, 1, 1);

        assert_eq!(
            view.embed.unwrap().description.as_deref(),
            Some(":flag_us: ` 9` - **United States** *1234.50*\n:flag_kr: `10` - **Korea** *1234.50*\n")
        );
    }

    #[test]
    fn picker_offers_country_codes() {
        let nations = vec![nation(3, "AR", "Argentina"), nation(1, "AU", "Australia")];

        let view = country_picker(Language::Spanish, &nations, 21, 2);

        let embed = view.embed.as_ref().unwrap();
        assert_eq!(embed.title.as_deref(), Some("Países"));
        assert_eq!(embed.description.as_deref(), Some("`21` Argentina\n`22` Australia\n"));
        let ViewRow::Select(select) = &view.rows[0] else {
            panic!("expected country select");
        };
        assert_eq!(select.custom_id, COUNTRY_SELECT_ID);
        assert_eq!(select.options[1].value, "AU");
    }
}
