use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter,
    CreateInteractionResponseMessage, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption, EditInteractionResponse,
};

use crate::pagination::event::{BACK_ID, CLOSE_ID, FOLLOW_ID};

/// Discord caps select option labels and descriptions at 100 characters.
pub const SELECT_TEXT_LIMIT: usize = 100;
/// Discord caps embed field values at 1024 characters.
pub const FIELD_VALUE_LIMIT: usize = 1024;
/// Discord rejects embeds with more than 25 fields.
pub const EMBED_FIELD_LIMIT: usize = 25;
/// Discord caps the combined text of an embed at 6000 characters.
pub const EMBED_TEXT_LIMIT: usize = 6000;

/// Everything a rendered message shows.
///
/// Views are plain data so they can be compared in tests; conversion to serenity
/// builders happens at the transport boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageView {
    pub content: Option<String>,
    pub embed: Option<EmbedView>,
    pub rows: Vec<ViewRow>,
}

impl PageView {
    pub fn embed(embed: EmbedView) -> Self {
        Self {
            content: None,
            embed: Some(embed),
            rows: Vec::new(),
        }
    }

    /// Plain text message without controls.
    pub fn notice(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embed: None,
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, row: ViewRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Copy with every interactive control disabled. Link buttons stay usable.
    pub fn disabled(&self) -> Self {
        Self {
            content: self.content.clone(),
            embed: self.embed.clone(),
            rows: self.rows.iter().map(ViewRow::disabled).collect(),
        }
    }

    /// Whether any control on the view can still produce an event.
    pub fn is_interactive(&self) -> bool {
        self.rows.iter().any(ViewRow::is_interactive)
    }

    pub fn to_response_message(&self) -> CreateInteractionResponseMessage {
        let mut message = CreateInteractionResponseMessage::new()
            .content(self.content.clone().unwrap_or_default())
            .components(self.action_rows());

        message = match &self.embed {
            Some(embed) => message.embeds(vec![embed.to_create_embed()]),
            None => message.embeds(Vec::new()),
        };

        message
    }

    pub fn to_edit_response(&self) -> EditInteractionResponse {
        let mut edit = EditInteractionResponse::new()
            .content(self.content.clone().unwrap_or_default())
            .components(self.action_rows());

        edit = match &self.embed {
            Some(embed) => edit.embeds(vec![embed.to_create_embed()]),
            None => edit.embeds(Vec::new()),
        };

        edit
    }

    fn action_rows(&self) -> Vec<CreateActionRow> {
        self.rows.iter().map(ViewRow::to_action_row).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedView {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub color: Option<u32>,
    pub author: Option<EmbedAuthor>,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedAuthor {
    pub name: String,
    pub icon_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

impl EmbedView {
    /// Length of the text Discord counts against [`EMBED_TEXT_LIMIT`].
    pub fn text_len(&self) -> usize {
        let optional = [&self.title, &self.description, &self.footer]
            .into_iter()
            .flatten()
            .map(String::len)
            .sum::<usize>();
        let author = self.author.as_ref().map_or(0, |author| author.name.len());
        let fields = self
            .fields
            .iter()
            .map(|field| field.name.len() + field.value.len())
            .sum::<usize>();

        optional + author + fields
    }

    pub fn to_create_embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new();

        if let Some(title) = &self.title {
            embed = embed.title(title);
        }
        if let Some(description) = &self.description {
            embed = embed.description(description);
        }
        if let Some(url) = &self.url {
            embed = embed.url(url);
        }
        if let Some(color) = self.color {
            embed = embed.color(color);
        }
        if let Some(author) = &self.author {
            let mut builder = CreateEmbedAuthor::new(&author.name);
            if let Some(icon_url) = &author.icon_url {
                builder = builder.icon_url(icon_url);
            }
            if let Some(url) = &author.url {
                builder = builder.url(url);
            }
            embed = embed.author(builder);
        }
        for field in &self.fields {
            embed = embed.field(&field.name, &field.value, field.inline);
        }
        if let Some(footer) = &self.footer {
            embed = embed.footer(CreateEmbedFooter::new(footer));
        }
        if let Some(thumbnail) = &self.thumbnail {
            embed = embed.thumbnail(thumbnail);
        }
        if let Some(image) = &self.image {
            embed = embed.image(image);
        }

        embed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewRow {
    Buttons(Vec<ViewButton>),
    Select(ViewSelect),
}

impl ViewRow {
    /// Back, follow and close buttons.
    pub fn navigation(back_enabled: bool, follow_enabled: bool) -> Self {
        Self::Buttons(vec![
            ViewButton::action(BACK_ID, '◀', !back_enabled),
            ViewButton::action(FOLLOW_ID, '▶', !follow_enabled),
            ViewButton::close(),
        ])
    }

    /// Row holding only a close button.
    pub fn close_only() -> Self {
        Self::Buttons(vec![ViewButton::close()])
    }

    pub fn disabled(&self) -> Self {
        match self {
            Self::Buttons(buttons) => Self::Buttons(buttons.iter().map(ViewButton::disabled).collect()),
            Self::Select(select) => Self::Select(ViewSelect {
                disabled: true,
                ..select.clone()
            }),
        }
    }

    pub fn is_interactive(&self) -> bool {
        match self {
            Self::Buttons(buttons) => buttons.iter().any(|button| match button {
                ViewButton::Action { disabled, .. } => !disabled,
                ViewButton::Link { .. } => false,
            }),
            Self::Select(select) => !select.disabled,
        }
    }

    fn to_action_row(&self) -> CreateActionRow {
        match self {
            Self::Buttons(buttons) => {
                CreateActionRow::Buttons(buttons.iter().map(ViewButton::to_create_button).collect())
            }
            Self::Select(select) => CreateActionRow::SelectMenu(select.to_create_select()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Primary,
    Danger,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewButton {
    Action {
        custom_id: String,
        emoji: char,
        tone: ButtonTone,
        disabled: bool,
    },
    Link {
        url: String,
        label: String,
    },
}

impl ViewButton {
    pub fn action(custom_id: &str, emoji: char, disabled: bool) -> Self {
        Self::Action {
            custom_id: custom_id.to_string(),
            emoji,
            tone: ButtonTone::Primary,
            disabled,
        }
    }

    pub fn close() -> Self {
        Self::Action {
            custom_id: CLOSE_ID.to_string(),
            emoji: '✖',
            tone: ButtonTone::Danger,
            disabled: false,
        }
    }

    pub fn back() -> Self {
        Self::action(BACK_ID, '◀', false)
    }

    pub fn link(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Link {
            url: url.into(),
            label: label.into(),
        }
    }

    pub fn disabled(&self) -> Self {
        match self {
            Self::Action {
                custom_id,
                emoji,
                tone,
                ..
            } => Self::Action {
                custom_id: custom_id.clone(),
                emoji: *emoji,
                tone: *tone,
                disabled: true,
            },
            Self::Link { .. } => self.clone(),
        }
    }

    fn to_create_button(&self) -> CreateButton {
        match self {
            Self::Action {
                custom_id,
                emoji,
                tone,
                disabled,
            } => {
                let style = match tone {
                    ButtonTone::Primary => ButtonStyle::Primary,
                    ButtonTone::Danger => ButtonStyle::Danger,
                };
                CreateButton::new(custom_id)
                    .style(style)
                    .emoji(*emoji)
                    .disabled(*disabled)
            }
            Self::Link { url, label } => CreateButton::new_link(url).label(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewSelect {
    pub custom_id: String,
    pub placeholder: String,
    pub options: Vec<SelectOption>,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub description: Option<String>,
}

impl SelectOption {
    pub fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: truncate(label, SELECT_TEXT_LIMIT),
            value: value.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(truncate(description, SELECT_TEXT_LIMIT));
        self
    }
}

impl ViewSelect {
    pub fn new(custom_id: &str, placeholder: &str, options: Vec<SelectOption>) -> Self {
        Self {
            custom_id: custom_id.to_string(),
            placeholder: truncate(placeholder, SELECT_TEXT_LIMIT),
            options,
            disabled: false,
        }
    }

    fn to_create_select(&self) -> CreateSelectMenu {
        let options = self
            .options
            .iter()
            .map(|option| {
                let mut builder = CreateSelectMenuOption::new(&option.label, &option.value);
                if let Some(description) = &option.description {
                    builder = builder.description(description);
                }
                builder
            })
            .collect();

        CreateSelectMenu::new(&self.custom_id, CreateSelectMenuKind::String { options })
            .placeholder(&self.placeholder)
            .disabled(self.disabled)
    }
}

/// Cuts `text` to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_view() -> PageView {
        PageView::embed(EmbedView {
            title: Some("Ranking".to_string()),
            ..Default::default()
        })
        .with_row(ViewRow::Select(ViewSelect::new(
            "demon",
            "Select a demon",
            vec![SelectOption::new("Tidal Wave", "1")],
        )))
        .with_row(ViewRow::navigation(true, true))
        .with_row(ViewRow::Buttons(vec![ViewButton::link(
            "https://youtu.be/vid1",
            "Video",
        )]))
    }

    #[test]
    fn disabling_keeps_links_usable() {
        let view = list_view().disabled();

        assert!(!view.is_interactive());
        assert_eq!(
            view.rows[2],
            ViewRow::Buttons(vec![ViewButton::link("https://youtu.be/vid1", "Video")])
        );
        assert_eq!(view.embed, list_view().embed);
    }

    #[test]
    fn navigation_row_reflects_enablement() {
        let ViewRow::Buttons(buttons) = ViewRow::navigation(false, true) else {
            panic!("navigation row must hold buttons");
        };

        let disabled: Vec<bool> = buttons
            .iter()
            .map(|button| matches!(button, ViewButton::Action { disabled: true, .. }))
            .collect();
        assert_eq!(disabled, vec![true, false, false]);
    }

    #[test]
    fn truncates_long_labels() {
        let long = "x".repeat(150);
        let option = SelectOption::new(&long, "1");

        assert_eq!(option.label.chars().count(), SELECT_TEXT_LIMIT);
        assert!(option.label.ends_with('…'));
        assert_eq!(truncate("short", SELECT_TEXT_LIMIT), "short");
    }
}
