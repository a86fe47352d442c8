//! Access checks for privileged commands.
//!
//! Checks run on data already present in the interaction and the cache, so a
//! rejected command never reaches the network.

use serenity::all::{CommandInteraction, Context, Permissions};

use crate::{i18n::Text, state::BotState};

/// Who may run a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Everyone,
    /// Guild owner or members with the administrator permission.
    GuildAdmin,
    /// The configured bot owner only.
    Superuser,
}

impl Access {
    /// Message shown to users who fail the check.
    pub fn denial(&self) -> Text {
        match self {
            Access::Superuser => Text::SuperuserOnly,
            Access::Everyone | Access::GuildAdmin => Text::NoPrivileges,
        }
    }
}

pub fn is_guild_admin(user_id: u64, guild_owner_id: Option<u64>, permissions: Option<Permissions>) -> bool {
    guild_owner_id == Some(user_id)
        || permissions.is_some_and(|permissions| permissions.administrator())
}

pub fn is_superuser(user_id: u64, bot_owner_id: Option<u64>) -> bool {
    bot_owner_id == Some(user_id)
}

/// Whether the invoker of `command` satisfies `access`.
pub fn is_allowed(access: Access, ctx: &Context, command: &CommandInteraction, state: &BotState) -> bool {
    let user_id = command.user.id.get();

    match access {
        Access::Everyone => true,
        Access::Superuser => is_superuser(user_id, state.owner_id),
        Access::GuildAdmin => {
            let Some(guild_id) = command.guild_id else {
                return false;
            };
            let guild_owner_id = ctx.cache.guild(guild_id).map(|guild| guild.owner_id.get());
            let permissions = command.member.as_ref().and_then(|member| member.permissions);

            is_guild_admin(user_id, guild_owner_id, permissions)
        }
    }
}
