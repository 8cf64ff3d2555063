use serenity::all::{Context, Message};

use crate::{service::tag::TagService, state::Data, util::inline_tag::extract_inline_tag};

/// Handle message creation in a channel
///
/// Guild messages mentioning `$name` outside of code and quotes get the tag's
/// content posted in reply.
pub async fn handle_message(data: &Data, ctx: Context, message: Message) {
    if message.author.bot || message.guild_id.is_none() {
        return;
    }
    if !message.content.contains('$') {
        return;
    }

    let Some(name) = extract_inline_tag(&message.content) else {
        return;
    };

    let tag = match TagService::new(&data.db).find(&name).await {
        Ok(Some(tag)) => tag,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Failed to look up inline tag '{}': {:?}", name, e);
            return;
        }
    };

    if let Err(e) = message.channel_id.say(&ctx.http, tag.content).await {
        tracing::error!("Failed to send inline tag '{}': {:?}", name, e);
    }
}
