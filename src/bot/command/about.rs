use crate::{
    bot::{command::CommandContext, embed},
    data::command_usage::CommandUsageRepository,
    error::AppError,
};

pub async fn run(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let served: i64 = CommandUsageRepository::new(&cx.state.db)
        .get_all()
        .await?
        .iter()
        .map(|usage| usage.count)
        .sum();

    let view = embed::info::about(cx.lang(), served, cx.state.pointercrate.base().as_str());

    let mut transport = cx.transport();
    cx.static_controller(&mut transport).present(view).await?;

    Ok(())
}
