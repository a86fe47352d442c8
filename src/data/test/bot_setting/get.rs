use super::*;

/// Tests reading a stored setting.
///
/// Expected: Ok(Some(value))
#[tokio::test]
async fn returns_stored_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_bot_setting(db, PLAYING_KEY, "Tidal Wave").await?;

    let repo = BotSettingRepository::new(db);
    let value = repo.get(PLAYING_KEY).await?;

    assert_eq!(value.as_deref(), Some("Tidal Wave"));

    Ok(())
}

/// Tests reading a setting that was never written.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotSettingRepository::new(db);

    assert!(repo.get(PLAYING_KEY).await?.is_none());

    Ok(())
}
