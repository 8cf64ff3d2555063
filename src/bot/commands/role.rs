//! Rank and auto-role commands.

use serenity::all::Role;

use crate::{
    bot::{
        commands::{guild_roles, reply},
        embed::EmbedStyle,
    },
    error::AppError,
    model::role::RoleRegistry,
    service::role::RoleRegistryService,
    state::Context,
};

/// List the ranks you can join.
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn ranks(ctx: Context<'_>) -> Result<(), AppError> {
    let roles = guild_roles(ctx)?;
    let ranks = RoleRegistryService::new(&ctx.data().db, RoleRegistry::Rank)
        .list_existing(&roles)
        .await?;

    if ranks.is_empty() {
        return reply(
            ctx,
            EmbedStyle::Error.embed("No ranks found", "This server doesn't have ranks yet."),
        )
        .await;
    }

    reply(
        ctx,
        EmbedStyle::Information.embed_with_footer(
            format!("Ranks ({})", ranks.len()),
            role_names(&ranks),
            format!("Use \"{}rank name\" to join a rank", ctx.data().config.prefix),
        ),
    )
    .await
}

/// Join or leave a rank.
///
/// A rank named `join`, `add` or `delete` is shadowed by the subcommand; use
/// `rank join <name>` for those.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    subcommands("join", "add", "delete")
)]
pub async fn rank(
    ctx: Context<'_>,
    #[description = "Name of the rank"]
    #[rest]
    name: String,
) -> Result<(), AppError> {
    toggle_rank(ctx, &name).await
}

/// Join or leave a rank.
#[poise::command(prefix_command, slash_command, guild_only)]
async fn join(
    ctx: Context<'_>,
    #[description = "Name of the rank"]
    #[rest]
    name: String,
) -> Result<(), AppError> {
    toggle_rank(ctx, &name).await
}

/// Register a role as a rank.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR"
)]
async fn add(ctx: Context<'_>, #[description = "Role"] role: Role) -> Result<(), AppError> {
    register(ctx, RoleRegistry::Rank, &role).await
}

/// Unregister a rank.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR"
)]
async fn delete(ctx: Context<'_>, #[description = "Role"] role: Role) -> Result<(), AppError> {
    unregister(ctx, RoleRegistry::Rank, &role).await
}

/// List the roles granted on join.
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn autoroles(ctx: Context<'_>) -> Result<(), AppError> {
    let roles = guild_roles(ctx)?;
    let auto_roles = RoleRegistryService::new(&ctx.data().db, RoleRegistry::AutoRole)
        .list_existing(&roles)
        .await?;

    if auto_roles.is_empty() {
        return reply(
            ctx,
            EmbedStyle::Error.embed(
                "No auto roles found",
                "This server doesn't have auto roles yet.",
            ),
        )
        .await;
    }

    reply(
        ctx,
        EmbedStyle::Information.embed(
            format!("Auto roles ({})", auto_roles.len()),
            role_names(&auto_roles),
        ),
    )
    .await
}

/// Manage the roles granted on join.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    subcommands("autorole_add", "autorole_delete"),
    subcommand_required
)]
pub async fn autorole(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Grant a role to every member who joins.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    rename = "add",
    required_permissions = "ADMINISTRATOR"
)]
async fn autorole_add(ctx: Context<'_>, #[description = "Role"] role: Role) -> Result<(), AppError> {
    register(ctx, RoleRegistry::AutoRole, &role).await
}

/// Stop granting a role on join.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    rename = "delete",
    required_permissions = "ADMINISTRATOR"
)]
async fn autorole_delete(
    ctx: Context<'_>,
    #[description = "Role"] role: Role,
) -> Result<(), AppError> {
    unregister(ctx, RoleRegistry::AutoRole, &role).await
}

async fn toggle_rank(ctx: Context<'_>, name: &str) -> Result<(), AppError> {
    let roles = guild_roles(ctx)?;
    let rank = RoleRegistryService::new(&ctx.data().db, RoleRegistry::Rank)
        .find_by_name(name, &roles)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("The rank you requested could not be found.".to_string())
        })?;

    let member = ctx
        .author_member()
        .await
        .ok_or_else(|| AppError::NotFound("You are not a member of this server.".to_string()))?;

    let embed = if member.roles.contains(&rank.id) {
        member.remove_role(ctx, rank.id).await?;
        EmbedStyle::Success.embed(
            "Left rank",
            format!("You have successfully left {}.", rank.name),
        )
    } else {
        member.add_role(ctx, rank.id).await?;
        EmbedStyle::Success.embed(
            "Joined rank",
            format!("You have successfully joined {}.", rank.name),
        )
    };

    reply(ctx, embed).await
}

async fn register(ctx: Context<'_>, registry: RoleRegistry, role: &Role) -> Result<(), AppError> {
    RoleRegistryService::new(&ctx.data().db, registry)
        .add(role.id.get())
        .await?;

    reply(
        ctx,
        EmbedStyle::Success.embed(
            format!("Added {}", registry.noun()),
            format!("{} has been added as {}.", role.name, registry.with_article()),
        ),
    )
    .await
}

async fn unregister(
    ctx: Context<'_>,
    registry: RoleRegistry,
    role: &Role,
) -> Result<(), AppError> {
    RoleRegistryService::new(&ctx.data().db, registry)
        .remove(role.id.get())
        .await?;

    reply(
        ctx,
        EmbedStyle::Success.embed(
            format!("Deleted {}", registry.noun()),
            format!("{} is no longer {}.", role.name, registry.with_article()),
        ),
    )
    .await
}

fn role_names(roles: &[Role]) -> String {
    roles
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
