use crate::{
    error::api::ApiError,
    model::{pointercrate::RankedPlayer, profile::PlayerProfile},
    service::pointercrate::PointercrateClient,
};

pub struct PlayerService<'a> {
    pointercrate: &'a PointercrateClient,
}

impl<'a> PlayerService<'a> {
    pub fn new(pointercrate: &'a PointercrateClient) -> Self {
        Self { pointercrate }
    }

    /// Loads a player's records and verifications.
    pub async fn profile(&self, player: RankedPlayer) -> Result<PlayerProfile, ApiError> {
        let (records, verified) = tokio::try_join!(
            self.pointercrate.player_records(player.id),
            self.pointercrate.verified_demons(player.id),
        )?;

        Ok(PlayerProfile {
            player,
            records,
            verified,
        })
    }
}
