use super::*;

/// Tests the first invocation creates a counter at 1.
///
/// Expected: Ok with count 1
#[tokio::test]
async fn creates_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandUsageRepository::new(db);
    let usage = repo.increment("ranking").await?;

    assert_eq!(usage.command, "ranking");
    assert_eq!(usage.count, 1);

    Ok(())
}

/// Tests later invocations add to the existing counter.
///
/// Expected: Ok with count incremented from the stored value
#[tokio::test]
async fn increments_existing_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::command_usage::CommandUsageFactory::new(db)
        .command("level")
        .count(41)
        .build()
        .await?;

    let repo = CommandUsageRepository::new(db);
    let usage = repo.increment("level").await?;

    assert_eq!(usage.count, 42);
    assert_eq!(repo.get("level").await?.unwrap().count, 42);

    Ok(())
}

/// Tests counters are kept per command.
///
/// Expected: Ok with independent counts
#[tokio::test]
async fn keeps_commands_separate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandUsageRepository::new(db);
    repo.increment("main").await?;
    repo.increment("main").await?;
    repo.increment("top").await?;

    assert_eq!(repo.get("main").await?.unwrap().count, 2);
    assert_eq!(repo.get("top").await?.unwrap().count, 1);
    assert!(repo.get("legacy").await?.is_none());

    Ok(())
}

/// Tests concurrent invocations of a counted command all land.
///
/// Expected: Ok with every increment reflected in the stored count
#[tokio::test]
async fn concurrent_increments_are_not_lost() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::command_usage::CommandUsageFactory::new(db)
        .command("ranking")
        .count(1)
        .build()
        .await?;

    let repo = CommandUsageRepository::new(db);
    let (a, b, c) = tokio::join!(
        repo.increment("ranking"),
        repo.increment("ranking"),
        repo.increment("ranking")
    );
    a?;
    b?;
    c?;

    assert_eq!(repo.get("ranking").await?.unwrap().count, 4);

    Ok(())
}

/// Tests two first invocations racing on the same command both succeed.
///
/// Expected: Ok for both, with a single row counting 2
#[tokio::test]
async fn concurrent_first_uses_share_one_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandUsageRepository::new(db);
    let (a, b) = tokio::join!(repo.increment("top"), repo.increment("top"));
    a?;
    b?;

    assert_eq!(repo.get("top").await?.unwrap().count, 2);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
