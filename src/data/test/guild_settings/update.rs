use super::*;

/// Tests updating only the language.
///
/// Expected: Ok(true) with prefix unchanged
#[tokio::test]
async fn updates_language_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.get_or_create(123456789).await?;

    let updated = repo
        .update(
            settings.id,
            UpdateGuildSettingsParam {
                lang: Some(Language::Spanish),
                prefix: None,
            },
        )
        .await?;

    assert!(updated);
    let stored = repo.find_by_guild_id(123456789).await?.unwrap();
    assert_eq!(stored.lang, Language::Spanish);
    assert_eq!(stored.prefix, "!p");

    Ok(())
}

/// Tests updating only the prefix.
///
/// Expected: Ok(true) with language unchanged
#[tokio::test]
async fn updates_prefix_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.get_or_create(123456789).await?;

    repo.update(
        settings.id,
        UpdateGuildSettingsParam {
            lang: None,
            prefix: Some("?".to_string()),
        },
    )
    .await?;

    let stored = repo.find_by_guild_id(123456789).await?.unwrap();
    assert_eq!(stored.prefix, "?");
    assert_eq!(stored.lang, Language::English);

    Ok(())
}

/// Tests updating a row that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let updated = repo
        .update(
            9999,
            UpdateGuildSettingsParam {
                lang: Some(Language::Spanish),
                prefix: None,
            },
        )
        .await?;

    assert!(!updated);

    Ok(())
}
