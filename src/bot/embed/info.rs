use crate::{
    bot::embed::{base_embed, BOT_NAME},
    i18n::Text,
    model::guild_settings::Language,
    pagination::view::{EmbedField, PageView, SelectOption, ViewButton, ViewRow, ViewSelect},
};

pub const COMMAND_SELECT_ID: &str = "command";

/// Command overview with a menu to read about each one.
///
/// # Arguments
/// - `commands` - `(name, description)` pairs in menu order
pub fn help(lang: Language, commands: &[(&str, &str)]) -> PageView {
    let listing: String = commands
        .iter()
        .map(|(name, _)| format!("`/{name}` "))
        .collect();

    let mut embed = base_embed(lang.text(Text::Help));
    embed.description = Some(format!("{}\n\n{}", lang.text(Text::HelpIntro), listing.trim_end()));

    let options = commands
        .iter()
        .map(|(name, description)| {
            SelectOption::new(&format!("/{name}"), *name).description(description)
        })
        .collect();

    PageView::embed(embed).with_row(ViewRow::Select(ViewSelect::new(
        COMMAND_SELECT_ID,
        lang.text(Text::SelectCommand),
        options,
    )))
}

pub fn command_help(name: &str, description: &str) -> PageView {
    let mut embed = base_embed(format!("/{name}"));
    embed.description = Some(description.to_string());

    PageView::embed(embed)
}

/// What the bot is, how much it has been used, and where its data comes from.
pub fn about(lang: Language, commands_served: i64, pointercrate_url: &str) -> PageView {
    let mut embed = base_embed(format!("{} {}", lang.text(Text::About), BOT_NAME));
    embed.description = Some(lang.text(Text::AboutBody).to_string());
    embed.fields = vec![EmbedField::new(
        lang.text(Text::CommandsServed),
        commands_served.to_string(),
        true,
    )];

    PageView::embed(embed).with_row(ViewRow::Buttons(vec![ViewButton::link(
        pointercrate_url,
        "Pointercrate",
    )]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_command() {
        let view = help(
            Language::English,
            &[("ranking", "Show the ranking"), ("top", "Show the top 1")],
        );

        let embed = view.embed.as_ref().unwrap();
        assert!(embed.description.as_deref().unwrap().ends_with("`/ranking` `/top`"));
        let ViewRow::Select(select) = &view.rows[0] else {
            panic!("expected command select");
        };
        assert_eq!(select.options[0].value, "ranking");
        assert_eq!(select.options[1].description.as_deref(), Some("Show the top 1"));
    }

    #[test]
    fn about_links_to_pointercrate() {
        let view = about(Language::English, 1500, "https://pointercrate.com/");

        assert_eq!(view.embed.as_ref().unwrap().fields[0].value, "1500");
        assert!(!view.is_interactive());
    }
}
