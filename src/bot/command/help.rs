use crate::{
    bot::{
        command::{BotCommand, CommandContext},
        embed,
    },
    error::{api::ApiError, AppError},
    model::guild_settings::Language,
    pagination::{Listing, Page, PageCursor, PageView, RenderResult, Selection},
};

/// The command list as a single page with a menu for per-command help.
pub struct HelpListing {
    pub lang: Language,
}

#[serenity::async_trait]
impl Listing for HelpListing {
    type Item = BotCommand;

    fn page_size(&self) -> usize {
        BotCommand::ALL.len()
    }

    async fn fetch(&self, _cursor: &PageCursor, _via: Option<&str>) -> Result<Page<BotCommand>, ApiError> {
        Ok(Page {
            items: BotCommand::ALL.to_vec(),
            next: None,
            prev: None,
            more: false,
        })
    }

    fn view(&self, result: &RenderResult<BotCommand>, _cursor: &PageCursor) -> PageView {
        let entries: Vec<(&str, &str)> = result
            .items
            .iter()
            .map(|command| (command.name(), command.description(self.lang)))
            .collect();

        embed::info::help(self.lang, &entries)
    }

    async fn select(&self, value: &str, _result: &RenderResult<BotCommand>) -> Result<Selection, ApiError> {
        Ok(match BotCommand::from_name(value) {
            Some(command) => Selection::Detail(embed::info::command_help(
                command.name(),
                command.description(self.lang),
            )),
            None => Selection::Ignore,
        })
    }
}

pub async fn run(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let listing = HelpListing { lang: cx.lang() };

    let mut transport = cx.transport();
    cx.static_controller(&mut transport).run(&listing, 1).await?;

    Ok(())
}
