//! Paginated list replies.
//!
//! Lines are chunked into [`Pages`] of at most [`LINES_PER_PAGE`] lines. Lists that
//! span more than one page get navigation buttons that only the invoker can use.

use std::time::Duration;

use poise::CreateReply;
use serenity::all::{
    ButtonStyle, ComponentInteractionCollector, CreateActionRow, CreateButton, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{bot::embed::EmbedStyle, error::AppError, state::Context};

pub const LINES_PER_PAGE: usize = 10;
/// Discord's embed description limit.
const MAX_PAGE_CHARS: usize = 4096;
const TIMEOUT: Duration = Duration::from_secs(300);

/// Lines split into pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pages {
    pages: Vec<String>,
}

impl Pages {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pages = Vec::new();
        let mut current = String::new();
        let mut count = 0;

        for line in lines {
            let line = line.as_ref();
            let needed = if current.is_empty() { line.len() } else { line.len() + 1 };

            if count == LINES_PER_PAGE || (count > 0 && current.len() + needed > MAX_PAGE_CHARS) {
                pages.push(std::mem::take(&mut current));
                count = 0;
            }

            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
            count += 1;
        }

        if !current.is_empty() {
            pages.push(current);
        }

        Self { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, index: usize) -> &str {
        self.pages.get(index).map(String::as_str).unwrap_or_default()
    }

    /// "Page i/n", 1-based.
    pub fn footer(&self, index: usize) -> String {
        format!("Page {}/{}", index + 1, self.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    First,
    Previous,
    Next,
    Last,
    Stop,
}

impl Nav {
    const ALL: [Nav; 5] = [Nav::First, Nav::Previous, Nav::Next, Nav::Last, Nav::Stop];

    fn emoji(self) -> char {
        match self {
            Nav::First => '⏮',
            Nav::Previous => '◀',
            Nav::Next => '▶',
            Nav::Last => '⏭',
            Nav::Stop => '⏹',
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Nav::First => "first",
            Nav::Previous => "prev",
            Nav::Next => "next",
            Nav::Last => "last",
            Nav::Stop => "stop",
        }
    }

    /// The page shown after pressing this button, `None` for stop.
    fn target(self, current: usize, len: usize) -> Option<usize> {
        let last = len.saturating_sub(1);
        match self {
            Nav::First => Some(0),
            Nav::Previous => Some(current.saturating_sub(1)),
            Nav::Next => Some((current + 1).min(last)),
            Nav::Last => Some(last),
            Nav::Stop => None,
        }
    }
}

/// Sends `lines` as a paginated Information embed titled `title`.
///
/// The caller handles the empty case; an empty list is sent as a single empty page.
pub async fn send_paginated(
    ctx: Context<'_>,
    title: &str,
    lines: Vec<String>,
) -> Result<(), AppError> {
    let pages = Pages::new(&lines);
    let page_embed = |index: usize| -> CreateEmbed {
        EmbedStyle::Information.embed_with_footer(title, pages.page(index), pages.footer(index))
    };

    if pages.is_empty() || pages.len() == 1 {
        ctx.send(CreateReply::default().embed(page_embed(0))).await?;
        return Ok(());
    }

    let id_prefix = format!("page:{}:", ctx.id());
    let buttons = CreateActionRow::Buttons(
        Nav::ALL
            .iter()
            .map(|nav| {
                CreateButton::new(format!("{}{}", id_prefix, nav.suffix()))
                    .emoji(nav.emoji())
                    .style(ButtonStyle::Secondary)
            })
            .collect(),
    );

    let handle = ctx
        .send(
            CreateReply::default()
                .embed(page_embed(0))
                .components(vec![buttons]),
        )
        .await?;

    let mut current = 0;
    loop {
        let filter_prefix = id_prefix.clone();
        let Some(press) = ComponentInteractionCollector::new(ctx)
            .author_id(ctx.author().id)
            .filter(move |press| press.data.custom_id.starts_with(&filter_prefix))
            .timeout(TIMEOUT)
            .await
        else {
            break;
        };

        let Some(nav) = press
            .data
            .custom_id
            .strip_prefix(&id_prefix)
            .and_then(|suffix| Nav::ALL.into_iter().find(|n| n.suffix() == suffix))
        else {
            continue;
        };

        let Some(target) = nav.target(current, pages.len()) else {
            press
                .create_response(ctx, CreateInteractionResponse::Acknowledge)
                .await?;
            break;
        };
        current = target;

        press
            .create_response(
                ctx,
                CreateInteractionResponse::UpdateMessage(
                    CreateInteractionResponseMessage::new().embed(page_embed(current)),
                ),
            )
            .await?;
    }

    handle
        .edit(
            ctx,
            CreateReply::default()
                .embed(page_embed(current))
                .components(vec![]),
        )
        .await?;

    Ok(())
}
