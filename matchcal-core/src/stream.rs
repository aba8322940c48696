//! Stream reference resolution.
//!
//! The sheet's stream cell is free text: a channel list like
//! "twitch/caedrel/ibai", a bare channel name, or several names
//! separated by spaces or commas. Some rows also carry an explicit
//! hyperlink, which wins over any text parsing.

use serde::{Deserialize, Serialize};

/// Broadcast platform of a resolved stream link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Twitch,
    YouTube,
}

/// A resolved, clickable reference to a live-broadcast channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamLink {
    pub url: String,
    pub platform: Platform,
    /// The text this link was derived from.
    pub original: String,
    /// Channel name with any platform prefix stripped.
    pub display_name: String,
}

/// Resolve a stream cell into zero or more links, in input order.
///
/// An explicit hyperlink yields exactly one link with the URL taken
/// verbatim. Otherwise the text is interpreted as a "twitch/" or
/// "youtube/" channel list, or as whitespace/comma-separated channel
/// references defaulting to Twitch.
pub fn resolve(stream_text: &str, stream_url: Option<&str>) -> Vec<StreamLink> {
    if let Some(url) = stream_url.filter(|url| !url.is_empty()) {
        let platform = if url.contains("youtube.com") || url.contains("youtu.be") {
            Platform::YouTube
        } else {
            // twitch.tv, or the default for anything unrecognized
            Platform::Twitch
        };
        return vec![StreamLink {
            url: url.to_string(),
            platform,
            original: stream_text.to_string(),
            display_name: stream_text.to_string(),
        }];
    }

    if let Some(channels) = after_prefix(stream_text, "twitch/") {
        return channel_list(channels, Platform::Twitch);
    }
    if let Some(channels) = after_prefix(stream_text, "youtube/") {
        return channel_list(channels, Platform::YouTube);
    }

    stream_text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|segment| !segment.is_empty())
        .map(segment_link)
        .collect()
}

/// Everything after the first occurrence of `prefix`, if present.
fn after_prefix<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.find(prefix).map(|at| &text[at + prefix.len()..])
}

/// One link per non-empty `/`-separated channel name.
fn channel_list(channels: &str, platform: Platform) -> Vec<StreamLink> {
    let prefix = match platform {
        Platform::Twitch => "twitch",
        Platform::YouTube => "youtube",
    };
    channels
        .split('/')
        .filter(|channel| !channel.is_empty())
        .map(|channel| StreamLink {
            url: channel_url(channel, platform),
            platform,
            original: format!("{prefix}/{channel}"),
            display_name: channel.to_string(),
        })
        .collect()
}

fn channel_url(channel: &str, platform: Platform) -> String {
    match platform {
        Platform::Twitch => format!("https://twitch.tv/{channel}"),
        Platform::YouTube => format!("https://youtube.com/@{channel}"),
    }
}

/// Resolve one whitespace/comma-delimited segment.
fn segment_link(segment: &str) -> StreamLink {
    if let Some(channel) = segment.strip_prefix("twitch.tv/") {
        StreamLink {
            url: format!("https://{segment}"),
            platform: Platform::Twitch,
            original: segment.to_string(),
            display_name: channel.to_string(),
        }
    } else if segment.starts_with("youtube.com/") {
        let display = segment
            .trim_start_matches("youtube.com/@")
            .trim_start_matches("youtube.com/");
        StreamLink {
            url: format!("https://{segment}"),
            platform: Platform::YouTube,
            original: segment.to_string(),
            display_name: display.to_string(),
        }
    } else {
        // Bare channel names are assumed to be Twitch
        StreamLink {
            url: format!("https://twitch.tv/{segment}"),
            platform: Platform::Twitch,
            original: segment.to_string(),
            display_name: segment.to_string(),
        }
    }
}
