//! Small community commands.

use poise::CreateReply;
use rand::Rng;
use serenity::all::{CreateEmbedFooter, ReactionType, User};

use crate::{
    bot::{
        commands::{
            reply,
            suggestion::{DOWNVOTE, UPVOTE},
        },
        embed::EmbedStyle,
    },
    error::AppError,
    state::Context,
};

const EIGHT_BALL_ANSWERS: [&str; 20] = [
    "It is certain.",
    "It is decidedly so.",
    "Without a doubt.",
    "Yes, definitely.",
    "You may rely on it.",
    "As I see it, yes.",
    "Most likely.",
    "Outlook good.",
    "Yes.",
    "Signs point to yes.",
    "Reply hazy, try again.",
    "Ask again later.",
    "Better not tell you now.",
    "Cannot predict now.",
    "Concentrate and ask again.",
    "Don't count on it.",
    "My reply is no.",
    "My sources say no.",
    "Outlook not so good.",
    "Very doubtful.",
];

/// Give someone a hug.
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn hug(ctx: Context<'_>, #[description = "Who to hug"] user: User) -> Result<(), AppError> {
    reply(
        ctx,
        EmbedStyle::Information.embed(
            "Hug",
            format!("<@{}> gave <@{}> a hug", ctx.author().id, user.id),
        ),
    )
    .await
}

/// Ask the magic 8-ball.
#[poise::command(prefix_command, slash_command, rename = "8ball")]
pub async fn eight_ball(
    ctx: Context<'_>,
    #[description = "Your question"]
    #[rest]
    question: String,
) -> Result<(), AppError> {
    let answer = EIGHT_BALL_ANSWERS[rand::rng().random_range(0..EIGHT_BALL_ANSWERS.len())];

    reply(
        ctx,
        EmbedStyle::Information.embed("8ball", format!("> {}\n{}", question, answer)),
    )
    .await
}

/// Flip a coin.
#[poise::command(prefix_command, slash_command)]
pub async fn coinflip(ctx: Context<'_>) -> Result<(), AppError> {
    let side = if rand::random::<bool>() { "Heads" } else { "Tails" };

    reply(
        ctx,
        EmbedStyle::Information.embed("Coinflip", format!("The coin landed on **{}**.", side)),
    )
    .await
}

/// Start a poll in this channel.
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn poll(
    ctx: Context<'_>,
    #[description = "What to vote on"]
    #[rest]
    text: String,
) -> Result<(), AppError> {
    let embed = EmbedStyle::Information
        .embed("Poll", text)
        .footer(CreateEmbedFooter::new(format!("Poll by {}", ctx.author().name)));

    let handle = ctx.send(CreateReply::default().embed(embed)).await?;
    let message = handle.message().await?;

    message
        .react(ctx, ReactionType::Unicode(UPVOTE.to_string()))
        .await?;
    message
        .react(ctx, ReactionType::Unicode(DOWNVOTE.to_string()))
        .await?;

    Ok(())
}
