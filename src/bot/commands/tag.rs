use poise::CreateReply;
use serenity::all::Member;

use crate::{
    bot::{checks, commands::reply, embed::EmbedStyle},
    error::AppError,
    service::tag::TagService,
    state::Context,
};

/// Show a tag, or list all tags.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    subcommands("show", "list", "create", "edit", "delete", "transfer")
)]
pub async fn tag(
    ctx: Context<'_>,
    #[description = "Name of the tag"] name: Option<String>,
) -> Result<(), AppError> {
    match name {
        Some(name) => show_tag(ctx, &name).await,
        None => list_tags(ctx).await,
    }
}

/// Show a tag.
#[poise::command(prefix_command, slash_command, guild_only)]
async fn show(
    ctx: Context<'_>,
    #[description = "Name of the tag"] name: String,
) -> Result<(), AppError> {
    show_tag(ctx, &name).await
}

/// List all tags.
#[poise::command(prefix_command, slash_command, guild_only)]
async fn list(ctx: Context<'_>) -> Result<(), AppError> {
    list_tags(ctx).await
}

/// Create a tag.
#[poise::command(prefix_command, slash_command, guild_only)]
async fn create(
    ctx: Context<'_>,
    #[description = "Name of the tag"] name: String,
    #[description = "Content of the tag"]
    #[rest]
    content: String,
) -> Result<(), AppError> {
    let actor = checks::actor(ctx).await?;
    let tag = TagService::new(&ctx.data().db)
        .create(&actor, &name, &content)
        .await?;

    reply(
        ctx,
        EmbedStyle::Success.embed(
            "Tag created",
            format!(
                "The tag has been created. You can view it by using `${}`.",
                tag.name
            ),
        ),
    )
    .await
}

/// Replace the content of a tag.
#[poise::command(prefix_command, slash_command, guild_only)]
async fn edit(
    ctx: Context<'_>,
    #[description = "Name of the tag"] name: String,
    #[description = "New content"]
    #[rest]
    content: String,
) -> Result<(), AppError> {
    let actor = checks::actor(ctx).await?;
    let tag = TagService::new(&ctx.data().db)
        .edit(&actor, &name, &content)
        .await?;

    reply(
        ctx,
        EmbedStyle::Success.embed(
            "Tag content modified",
            format!("The content of `{}` has been modified.", tag.name),
        ),
    )
    .await
}

/// Delete a tag.
#[poise::command(prefix_command, slash_command, guild_only)]
async fn delete(
    ctx: Context<'_>,
    #[description = "Name of the tag"] name: String,
) -> Result<(), AppError> {
    let actor = checks::actor(ctx).await?;
    let tag = TagService::new(&ctx.data().db).delete(&actor, &name).await?;

    reply(
        ctx,
        EmbedStyle::Success.embed(
            "Tag deleted",
            format!("The tag `{}` has been deleted.", tag.name),
        ),
    )
    .await
}

/// Transfer a tag to another member.
#[poise::command(prefix_command, slash_command, guild_only)]
async fn transfer(
    ctx: Context<'_>,
    #[description = "Name of the tag"] name: String,
    #[description = "New owner"] member: Member,
) -> Result<(), AppError> {
    let actor = checks::actor(ctx).await?;
    TagService::new(&ctx.data().db)
        .transfer(&actor, &name, member.user.id.get())
        .await?;

    reply(
        ctx,
        EmbedStyle::Success.embed(
            "Tag ownership transferred",
            format!(
                "The ownership of the tag has been transferred to <@{}>",
                member.user.id
            ),
        ),
    )
    .await
}

async fn show_tag(ctx: Context<'_>, name: &str) -> Result<(), AppError> {
    let tag = TagService::new(&ctx.data().db).get(name).await?;

    ctx.send(CreateReply::default().content(tag.content)).await?;

    Ok(())
}

async fn list_tags(ctx: Context<'_>) -> Result<(), AppError> {
    let tags = TagService::new(&ctx.data().db).list().await?;

    if tags.is_empty() {
        return reply(
            ctx,
            EmbedStyle::Error.embed("No tags found", "This server doesn't have any tags yet."),
        )
        .await;
    }

    let names = tags
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    reply(
        ctx,
        EmbedStyle::Information.embed_with_footer(
            format!("Tags ({})", tags.len()),
            names,
            "Use $name to view it.",
        ),
    )
    .await
}
