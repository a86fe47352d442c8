use serenity::all::ActivityData;

use crate::{
    bot::command::CommandContext, error::AppError, i18n::Text,
    service::presence::PresenceService,
};

/// Pins the bot's activity to a demon name chosen by the bot owner.
///
/// The choice is stored so the presence scheduler keeps showing it.
pub async fn run(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let name = cx.string_option("name").unwrap_or_default().trim().to_string();
    if name.is_empty() {
        return cx.reply_text(Text::MissingOption).await;
    }

    PresenceService::new(&cx.state.db, &cx.state.pointercrate)
        .set_activity(&name)
        .await?;
    cx.ctx.set_activity(Some(ActivityData::playing(name.clone())));
    tracing::info!("Activity set to {}", name);

    cx.reply_text(Text::PresenceUpdated).await
}
