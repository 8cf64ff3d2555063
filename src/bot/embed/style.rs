//! Shared embed colours, icons and the styled embed builder.

use serenity::all::{Colour, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};

pub mod colors {
    use serenity::all::Colour;

    pub const INFORMATION: Colour = Colour::from_rgb(26, 155, 226);
    pub const SUCCESS: Colour = Colour::from_rgb(95, 218, 153);
    pub const ERROR: Colour = Colour::from_rgb(236, 56, 69);
    pub const WARNING: Colour = Colour::from_rgb(254, 184, 6);
    pub const ACTIVE: Colour = Colour::from_rgb(254, 200, 16);
    pub const DISCORD: Colour = Colour::from_rgb(114, 137, 218);
}

pub mod icons {
    pub const SUCCESS: &str = "https://i.imgur.com/It9BNU8.png";
    pub const ERROR: &str = "https://i.imgur.com/mNCmgf3.png";
    pub const INFORMATION: &str = "https://i.imgur.com/gLR4k7d.png";
    pub const WARNING: &str = "https://i.imgur.com/X6M1yE7.png";
    pub const NEW_CAMPAIGN: &str = "https://i.imgur.com/r8xwMAD.png";
    pub const ACCEPTED_CAMPAIGN: &str = "https://i.imgur.com/k6vzLkO.png";
    pub const DENIED_CAMPAIGN: &str = "https://i.imgur.com/6mwoy56.png";
    pub const NEW_REQUEST: &str = "https://i.imgur.com/VgEclzE.png";
    pub const ACTIVE_REQUEST: &str = "https://i.imgur.com/zhEdQeo.png";
    pub const DENIED_REQUEST: &str = "https://i.imgur.com/a8L3jK0.png";
    pub const RESTRICTED: &str = "https://i.imgur.com/mTUfdsc.png";
    pub const WAIT: &str = "https://i.imgur.com/XWK6FIH.png";
}

/// The four general-purpose reply styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedStyle {
    Success,
    Error,
    Information,
    Warning,
}

impl EmbedStyle {
    pub fn colour(self) -> Colour {
        match self {
            EmbedStyle::Success => colors::SUCCESS,
            EmbedStyle::Error => colors::ERROR,
            EmbedStyle::Information => colors::INFORMATION,
            EmbedStyle::Warning => colors::WARNING,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            EmbedStyle::Success => icons::SUCCESS,
            EmbedStyle::Error => icons::ERROR,
            EmbedStyle::Information => icons::INFORMATION,
            EmbedStyle::Warning => icons::WARNING,
        }
    }

    /// Builds an embed with `title` in the author line next to the style's icon.
    pub fn embed(self, title: impl Into<String>, description: impl Into<String>) -> CreateEmbed {
        styled(self.colour(), self.icon(), title, description)
    }

    /// Same as [`EmbedStyle::embed`] with a footer line.
    pub fn embed_with_footer(
        self,
        title: impl Into<String>,
        description: impl Into<String>,
        footer: impl Into<String>,
    ) -> CreateEmbed {
        self.embed(title, description)
            .footer(CreateEmbedFooter::new(footer))
    }
}

/// Builds an embed with an arbitrary colour and author icon.
pub fn styled(
    colour: Colour,
    icon: &str,
    title: impl Into<String>,
    description: impl Into<String>,
) -> CreateEmbed {
    CreateEmbed::new()
        .colour(colour)
        .author(CreateEmbedAuthor::new(title).icon_url(icon))
        .description(description)
}
