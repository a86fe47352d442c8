use crate::{
    error::api::ApiError,
    model::{pointercrate::Demon, profile::DemonDetail},
    service::{level::LevelMetadataClient, pointercrate::PointercrateClient},
    util::youtube,
};

pub struct DemonService<'a> {
    pointercrate: &'a PointercrateClient,
    levels: &'a LevelMetadataClient,
}

impl<'a> DemonService<'a> {
    pub fn new(pointercrate: &'a PointercrateClient, levels: &'a LevelMetadataClient) -> Self {
        Self {
            pointercrate,
            levels,
        }
    }

    /// Gathers the first victor, difficulty and media of a demon.
    ///
    /// A failing level metadata lookup only costs the difficulty face; a failing
    /// Pointercrate lookup fails the whole detail.
    pub async fn detail(&self, demon: Demon) -> Result<DemonDetail, ApiError> {
        let victor = match demon.position {
            Some(position) => self.pointercrate.first_victor(position).await?,
            None => None,
        };

        let difficulty = match demon.level_id {
            Some(level_id) => match self.levels.difficulty(level_id).await {
                Ok(difficulty) => difficulty,
                Err(e) => {
                    tracing::warn!("Failed to look up difficulty of level {}: {}", level_id, e);
                    None
                }
            },
            None => None,
        };

        let video = demon
            .video
            .clone()
            .or_else(|| victor.as_ref().and_then(|record| record.video.clone()));
        let image = video
            .as_deref()
            .and_then(youtube::thumbnail_url)
            .or_else(|| demon.thumbnail.clone());

        Ok(DemonDetail {
            first_victor: victor.map(|record| record.player),
            difficulty,
            video,
            image,
            demon,
        })
    }

    /// Demon at a list position with its details.
    pub async fn detail_at_position(&self, position: u32) -> Result<Option<DemonDetail>, ApiError> {
        match self.pointercrate.demon_at_position(position).await? {
            Some(demon) => Ok(Some(self.detail(demon).await?)),
            None => Ok(None),
        }
    }
}
