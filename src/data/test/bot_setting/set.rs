use super::*;

/// Tests writing a new setting.
///
/// Expected: Ok with value readable afterwards
#[tokio::test]
async fn stores_new_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotSettingRepository::new(db);
    repo.set(PLAYING_KEY, "Acheron").await?;

    assert_eq!(repo.get(PLAYING_KEY).await?.as_deref(), Some("Acheron"));

    Ok(())
}

/// Tests overwriting an existing setting.
///
/// Expected: Ok with the latest value stored
#[tokio::test]
async fn replaces_existing_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_bot_setting(db, PLAYING_KEY, "Acheron").await?;

    let repo = BotSettingRepository::new(db);
    repo.set(PLAYING_KEY, "Tidal Wave").await?;

    assert_eq!(repo.get(PLAYING_KEY).await?.as_deref(), Some("Tidal Wave"));

    Ok(())
}
