use std::time::Duration;

use serenity::all::{
    CommandInteraction, ComponentInteraction, ComponentInteractionCollector, Context,
    CreateInteractionResponse, CreateInteractionResponseMessage, MessageId,
};

use crate::{
    error::AppError,
    pagination::{
        event::{Incoming, NavigationEvent},
        view::PageView,
    },
};

/// Message plumbing a pagination session runs on.
///
/// Every method that answers an event consumes the event most recently returned
/// by [`SessionTransport::next_event`], so each event is answered once.
#[serenity::async_trait]
pub trait SessionTransport: Send {
    /// Shows `view`, as the update to the pending event if there is one.
    async fn render(&mut self, view: &PageView) -> Result<(), AppError>;

    /// Waits up to `timeout` for a component event on the rendered message.
    async fn next_event(&mut self, timeout: Duration) -> Option<Incoming>;

    /// Answers the pending event without changing the message.
    async fn acknowledge(&mut self) -> Result<(), AppError>;

    /// Answers the pending event with a notice only its sender sees.
    async fn reject(&mut self, notice: &str) -> Result<(), AppError>;

    /// Deletes the rendered message.
    async fn close(&mut self) -> Result<(), AppError>;
}

/// Transport backed by a deferred slash command and a component collector.
///
/// The collector is filtered by message id only, so clicks on other sessions'
/// messages never arrive here. Ownership is checked by the controller.
pub struct InteractionTransport<'a> {
    ctx: &'a Context,
    command: &'a CommandInteraction,
    message_id: Option<MessageId>,
    pending: Option<ComponentInteraction>,
}

impl<'a> InteractionTransport<'a> {
    /// The command must already be deferred.
    pub fn new(ctx: &'a Context, command: &'a CommandInteraction) -> Self {
        Self {
            ctx,
            command,
            message_id: None,
            pending: None,
        }
    }
}

#[serenity::async_trait]
impl SessionTransport for InteractionTransport<'_> {
    async fn render(&mut self, view: &PageView) -> Result<(), AppError> {
        match self.pending.take() {
            Some(interaction) => {
                interaction
                    .create_response(
                        &self.ctx.http,
                        CreateInteractionResponse::UpdateMessage(view.to_response_message()),
                    )
                    .await?;
            }
            None => {
                let message = self
                    .command
                    .edit_response(&self.ctx.http, view.to_edit_response())
                    .await?;
                self.message_id = Some(message.id);
            }
        }

        Ok(())
    }

    async fn next_event(&mut self, timeout: Duration) -> Option<Incoming> {
        let message_id = self.message_id?;

        let interaction = ComponentInteractionCollector::new(self.ctx)
            .message_id(message_id)
            .timeout(timeout)
            .await?;

        let incoming = Incoming {
            user_id: interaction.user.id.get(),
            event: NavigationEvent::from_component(&interaction.data),
        };
        self.pending = Some(interaction);

        Some(incoming)
    }

    async fn acknowledge(&mut self) -> Result<(), AppError> {
        if let Some(interaction) = self.pending.take() {
            interaction
                .create_response(&self.ctx.http, CreateInteractionResponse::Acknowledge)
                .await?;
        }

        Ok(())
    }

    async fn reject(&mut self, notice: &str) -> Result<(), AppError> {
        if let Some(interaction) = self.pending.take() {
            let message = CreateInteractionResponseMessage::new()
                .content(notice)
                .ephemeral(true);
            interaction
                .create_response(&self.ctx.http, CreateInteractionResponse::Message(message))
                .await?;
        }

        Ok(())
    }

    async fn close(&mut self) -> Result<(), AppError> {
        self.acknowledge().await?;
        self.command.delete_response(&self.ctx.http).await?;
        self.message_id = None;

        Ok(())
    }
}
