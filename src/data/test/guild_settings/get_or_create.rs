use super::*;

/// Tests first use of a guild creates default settings.
///
/// Expected: Ok with english language and "!p" prefix
#[tokio::test]
async fn creates_defaults_for_new_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.get_or_create(123456789).await?;

    assert_eq!(settings.guild_id, 123456789);
    assert_eq!(settings.lang, Language::English);
    assert_eq!(settings.prefix, "!p");

    let count = entity::prelude::GuildSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests existing settings are returned untouched.
///
/// Expected: Ok with the stored row, no duplicate inserted
#[tokio::test]
async fn returns_existing_settings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id(123456789)
        .lang("spanish")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.get_or_create(123456789).await?;

    assert_eq!(settings.id, stored.id);
    assert_eq!(settings.lang, Language::Spanish);

    let count = entity::prelude::GuildSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests calling get_or_create repeatedly is idempotent.
///
/// Expected: Ok with the same row id every time
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let first = repo.get_or_create(42).await?;
    let second = repo.get_or_create(42).await?;

    assert_eq!(first.id, second.id);

    Ok(())
}
