use super::*;

/// Tests retrieving settings for a known guild.
///
/// Expected: Ok(Some(settings)) with stored values
#[tokio::test]
async fn returns_stored_settings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id(123456789)
        .lang("spanish")
        .prefix("?")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.find_by_guild_id(123456789).await?.unwrap();

    assert_eq!(settings.guild_id, 123456789);
    assert_eq!(settings.lang, Language::Spanish);
    assert_eq!(settings.prefix, "?");

    Ok(())
}

/// Tests retrieving settings for a guild that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_settings(db).await?;

    let repo = GuildSettingsRepository::new(db);
    let result = repo.find_by_guild_id(999999999).await?;

    assert!(result.is_none());

    Ok(())
}
