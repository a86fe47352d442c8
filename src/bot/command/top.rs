use crate::{
    bot::{command::CommandContext, embed},
    error::AppError,
    i18n::Text,
    service::demon::DemonService,
};

/// Shows the demon at position 1.
pub async fn run(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let state = cx.state;

    let Some(detail) = DemonService::new(&state.pointercrate, &state.levels)
        .detail_at_position(1)
        .await?
    else {
        return cx.reply_text(Text::NoResults).await;
    };

    let view = embed::demon::demon_detail(
        cx.lang(),
        &detail,
        &state.pointercrate.demon_permalink(detail.demon.id),
        state.levels.base().as_str(),
    );

    let mut transport = cx.transport();
    cx.static_controller(&mut transport).present(view).await?;

    Ok(())
}
