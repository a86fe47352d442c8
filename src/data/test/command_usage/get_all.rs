use super::*;

/// Tests counters are listed most used first.
///
/// Expected: Ok with descending counts
#[tokio::test]
async fn orders_by_count_descending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::command_usage::CommandUsageFactory::new(db)
        .command("help")
        .count(3)
        .build()
        .await?;
    factory::command_usage::CommandUsageFactory::new(db)
        .command("ranking")
        .count(10)
        .build()
        .await?;
    factory::create_command_usage(db).await?;

    let repo = CommandUsageRepository::new(db);
    let all = repo.get_all().await?;

    assert_eq!(all.len(), 3);
    assert_eq!(all[0].command, "ranking");
    assert_eq!(all[1].command, "help");

    Ok(())
}
