use crate::{
    bot::embed::{
        base_embed, demon_trophy, pad_width, padded, page_footer, player_name, styled_demon_name,
    },
    i18n::Text,
    model::{guild_settings::Language, pointercrate::Demon, profile::DemonDetail},
    pagination::view::{EmbedField, PageView, SelectOption, ViewButton, ViewRow, ViewSelect},
};

pub const DEMON_SELECT_ID: &str = "demon";

/// A page of listed demons with a menu to open one.
pub fn demon_list(lang: Language, title: &str, demons: &[Demon], page_index: u32) -> PageView {
    let width = pad_width(demons.iter().filter_map(|d| d.position).max().unwrap_or(0));

    let description: String = demons
        .iter()
        .map(|demon| {
            format!(
                "{} - **{}** *by* {}\n",
                padded(demon.position.unwrap_or(0), width),
                demon.name,
                player_name(&demon.publisher)
            )
        })
        .collect();

    let mut embed = base_embed(title);
    embed.description = Some(description);
    embed.footer = Some(page_footer(lang, page_index));

    PageView::embed(embed).with_row(demon_select(lang, demons))
}

/// A page of demons matching a name search.
pub fn demon_search(lang: Language, demons: &[Demon], page_index: u32) -> PageView {
    let description: String = demons
        .iter()
        .map(|demon| {
            let position = demon
                .position
                .map(|p| format!("#{p}"))
                .unwrap_or_else(|| "-".to_string());
            format!(
                "`{}` - {} *by {}*\n",
                position,
                styled_demon_name(&demon.name, demon.position),
                demon.publisher.name
            )
        })
        .collect();

    let mut embed = base_embed(lang.text(Text::SearchResults));
    embed.description = Some(description);
    embed.footer = Some(page_footer(lang, page_index));

    PageView::embed(embed).with_row(demon_select(lang, demons))
}

fn demon_select(lang: Language, demons: &[Demon]) -> ViewRow {
    let options = demons
        .iter()
        .map(|demon| {
            let label = match demon.position {
                Some(position) => format!("{}. {}", position, demon.name),
                None => demon.name.clone(),
            };
            SelectOption::new(&label, demon.id.to_string())
                .description(&format!("by {}", demon.publisher.name))
        })
        .collect();

    ViewRow::Select(ViewSelect::new(
        DEMON_SELECT_ID,
        lang.text(Text::SelectDemon),
        options,
    ))
}

/// Everything known about one demon, with links to its page and video.
///
/// # Arguments
/// - `permalink` - Demon page on the Pointercrate website
/// - `level_api_url` - Host serving difficulty face images
pub fn demon_detail(
    lang: Language,
    detail: &DemonDetail,
    permalink: &str,
    level_api_url: &str,
) -> PageView {
    let demon = &detail.demon;
    let unknown = lang.text(Text::Unknown);

    let position = demon
        .position
        .map(|p| p.to_string())
        .unwrap_or_else(|| unknown.to_string());
    let first_victor = match (&detail.first_victor, demon.position) {
        (Some(victor), Some(position)) => {
            format!("{} {}", player_name(victor), demon_trophy(position))
        }
        (Some(victor), None) => player_name(victor),
        (None, _) => unknown.to_string(),
    };
    let level_id = demon
        .level_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| unknown.to_string());

    let mut embed = base_embed(&demon.name);
    embed.url = Some(permalink.to_string());
    embed.fields = vec![
        EmbedField::new(lang.text(Text::Position), position, true),
        EmbedField::new(lang.text(Text::Publisher), player_name(&demon.publisher), true),
        EmbedField::new(lang.text(Text::Verifier), player_name(&demon.verifier), true),
        EmbedField::new(lang.text(Text::FirstVictor), first_victor, true),
        EmbedField::new(lang.text(Text::LevelId), level_id, true),
    ];
    if let Some(requirement) = demon.requirement {
        embed
            .fields
            .push(EmbedField::new(lang.text(Text::Requirement), format!("{requirement}%"), true));
    }
    embed.thumbnail = detail
        .difficulty
        .map(|difficulty| difficulty.face_url(level_api_url));
    embed.image = detail.image.clone();

    let mut links = vec![ViewButton::link(permalink, "Pointercrate")];
    if let Some(video) = &detail.video {
        links.push(ViewButton::link(video, lang.text(Text::Video)));
    }

    PageView::embed(embed).with_row(ViewRow::Buttons(links))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::level::DemonDifficulty;
    use test_utils::fixture::pointercrate;

    fn demon(position: u32, name: &str) -> Demon {
        serde_json::from_value(pointercrate::demon(position, name)).unwrap()
    }

    #[test]
    fn lists_demons_with_aligned_positions() {
        let demons = vec![demon(9, "Kyouki"), demon(10, "Acheron")];

        let view = demon_list(Language::English, "Main List", &demons, 1);

        let embed = view.embed.unwrap();
        assert_eq!(
            embed.description.as_deref(),
            Some("` 9` - **Kyouki** *by* Publisher\n`10` - **Acheron** *by* Publisher\n")
        );
        assert_eq!(embed.footer.as_deref(), Some("Page 1"));
        let ViewRow::Select(select) = &view.rows[0] else {
            panic!("expected demon select");
        };
        assert_eq!(select.options[1].value, "1010");
        assert_eq!(select.options[1].label, "10. Acheron");
    }

    #[test]
    fn detail_shows_victor_and_links() {
        let detail = DemonDetail {
            demon: demon(1, "Tidal Wave"),
            first_victor: Some(crate::model::pointercrate::PlayerRef {
                id: 3,
                name: "Zoink".to_string(),
                banned: false,
            }),
            difficulty: Some(DemonDifficulty::Extreme),
            video: Some("https://youtu.be/vid1".to_string()),
            image: Some("https://img.youtube.com/vi/vid1/mqdefault.jpg".to_string()),
        };

        let view = demon_detail(
            Language::English,
            &detail,
            "https://pointercrate.com/demonlist/permalink/1001/",
            "https://gdbrowser.com/",
        );

        let embed = view.embed.as_ref().unwrap();
        assert_eq!(embed.fields[3].value, "Zoink :crown:");
        assert_eq!(
            embed.thumbnail.as_deref(),
            Some("https://gdbrowser.com/assets/difficulties/demon-extreme.png")
        );
        assert_eq!(
            view.rows,
            vec![ViewRow::Buttons(vec![
                ViewButton::link("https://pointercrate.com/demonlist/permalink/1001/", "Pointercrate"),
                ViewButton::link("https://youtu.be/vid1", "Video"),
            ])]
        );
    }

    #[test]
    fn detail_without_victor_says_unknown() {
        let detail = DemonDetail {
            demon: demon(40, "Slaughterhouse"),
            first_victor: None,
            difficulty: None,
            video: None,
            image: None,
        };

        let view = demon_detail(Language::Spanish, &detail, "https://x/", "https://y/");

        let embed = view.embed.as_ref().unwrap();
        assert_eq!(embed.fields[3].value, "desconocido");
        assert!(embed.thumbnail.is_none());
        assert_eq!(view.rows.len(), 1);
    }
}
