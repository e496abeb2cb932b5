use std::sync::OnceLock;

use regex::Regex;

use crate::foundation::error::{ScrollcueError, ScrollcueResult};

const YOUTUBE_ID_LEN: usize = 11;

fn youtube_re() -> &'static Regex {
    static YOUTUBE_RE: OnceLock<Regex> = OnceLock::new();
    YOUTUBE_RE.get_or_init(|| {
        Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
            .expect("youtube id regex should compile")
    })
}

/// Extract the 11-character YouTube video id from any of the common URL shapes.
pub fn youtube_id(url: &str) -> ScrollcueResult<String> {
    let id = youtube_re()
        .captures(url.trim())
        .and_then(|c| c.get(2))
        .map(|m| m.as_str())
        .filter(|id| id.chars().count() == YOUTUBE_ID_LEN)
        .ok_or_else(|| ScrollcueError::media(format!("no video id in '{url}'")))?;
    Ok(id.to_string())
}

/// An embeddable video, or the placeholder shown when the URL cannot be resolved.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VideoEmbed {
    /// Playable YouTube embed.
    Embedded {
        /// 11-character video id.
        id: String,
        /// `https://www.youtube.com/embed/{id}`.
        src: String,
    },
    /// Link could not be resolved; show "Video unavailable".
    Unavailable,
}

impl VideoEmbed {
    /// Resolve `url` to an embed. Unrecognized links log a warning and give the placeholder.
    pub fn resolve(url: &str) -> Self {
        match youtube_id(url) {
            Ok(id) => Self::Embedded {
                src: format!("https://www.youtube.com/embed/{id}"),
                id,
            },
            Err(err) => {
                tracing::warn!(%err, "video unavailable, showing placeholder");
                Self::Unavailable
            }
        }
    }

    /// Return `true` for a playable embed.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Embedded { .. })
    }

    /// High-quality poster frame for an embedded video.
    pub fn thumbnail_url(&self) -> Option<String> {
        match self {
            Self::Embedded { id, .. } => Some(format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")),
            Self::Unavailable => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/video.rs"]
mod tests;
