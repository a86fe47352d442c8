use sea_orm::DatabaseConnection;

use crate::{
    data::bot_setting::{BotSettingRepository, PLAYING_KEY},
    error::AppError,
    service::pointercrate::PointercrateClient,
};

/// Chooses the "Playing" activity the bot shows.
pub struct PresenceService<'a> {
    db: &'a DatabaseConnection,
    pointercrate: &'a PointercrateClient,
}

impl<'a> PresenceService<'a> {
    pub fn new(db: &'a DatabaseConnection, pointercrate: &'a PointercrateClient) -> Self {
        Self { db, pointercrate }
    }

    /// Activity name: the owner's manual choice, else the current top 1 demon.
    ///
    /// # Returns
    /// - `Ok(Some(name))` - Activity to show
    /// - `Ok(None)` - Nothing stored and the list is empty
    /// - `Err(AppError)` - Database or API failure
    pub async fn current_activity(&self) -> Result<Option<String>, AppError> {
        if let Some(stored) = BotSettingRepository::new(self.db).get(PLAYING_KEY).await? {
            return Ok(Some(stored));
        }

        let top = self.pointercrate.demon_at_position(1).await?;

        Ok(top.map(|demon| demon.name))
    }

    /// Stores the owner's choice of activity.
    pub async fn set_activity(&self, name: &str) -> Result<(), AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Activity name is empty".to_string()));
        }

        BotSettingRepository::new(self.db)
            .set(PLAYING_KEY, name)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory::create_bot_setting, fixture::pointercrate};

    fn client() -> PointercrateClient {
        PointercrateClient::new(reqwest::Client::new(), pointercrate::BASE_URL).unwrap()
    }

    /// Tests that a stored activity wins over the live list.
    ///
    /// Expected: stored value returned without any request
    #[tokio::test]
    async fn prefers_stored_activity() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        create_bot_setting(db, PLAYING_KEY, "Tidal Wave").await?;
        let client = client();

        let activity = PresenceService::new(db, &client).current_activity().await?;

        assert_eq!(activity.as_deref(), Some("Tidal Wave"));

        Ok(())
    }

    /// Tests storing a new activity.
    ///
    /// Expected: trimmed value persisted, empty names rejected
    #[tokio::test]
    async fn stores_activity() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let client = client();
        let service = PresenceService::new(db, &client);

        service.set_activity("  Acheron ").await?;
        assert!(matches!(
            service.set_activity("   ").await,
            Err(AppError::BadRequest(_))
        ));

        let stored = BotSettingRepository::new(db).get(PLAYING_KEY).await?;
        assert_eq!(stored.as_deref(), Some("Acheron"));

        Ok(())
    }
}
