//! Page configuration decoded from a countdown URL.

use serde::{Deserialize, Serialize};

use crate::utils::query::{split_url, QueryPairs};

/// Target used when no `date` parameter is given. It is long past, so the
/// countdown shows `00:00:00` straight away.
pub const DEFAULT_DATE: &str = "1999-12-31T23:59:59";
pub const DEFAULT_TITLE: &str = "Countdown";
pub const DEFAULT_IMAGE: &str = "clock";
pub const DEFAULT_FONT: &str = "lcd14";
pub const DEFAULT_EFFECT: &str = "gradient";

pub const PARAM_DATE: &str = "date";
pub const PARAM_TITLE: &str = "title";
pub const PARAM_IMAGE: &str = "image";
pub const PARAM_UNSPLASH: &str = "unsplash";
pub const PARAM_FONT: &str = "font";
pub const PARAM_EFFECT: &str = "effect";
pub const PARAM_EDIT: &str = "edit";
pub const PARAM_PREVIEW: &str = "preview";

/// Immutable settings for one countdown page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownParams {
    pub date: String,
    pub title: String,
    pub image: String,
    pub unsplash: Option<String>,
    pub font: String,
    pub effect: String,
    pub edit: bool,
    pub preview: bool,
}

impl Default for CountdownParams {
    fn default() -> Self {
        Self {
            date: DEFAULT_DATE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            unsplash: None,
            font: DEFAULT_FONT.to_string(),
            effect: DEFAULT_EFFECT.to_string(),
            edit: false,
            preview: false,
        }
    }
}

impl CountdownParams {
    /// Decode parameters from a raw query string (leading `?` optional).
    /// Values are trimmed; missing or empty values fall back to the defaults.
    pub fn from_query(query: &str) -> Self {
        Self::from_pairs(&QueryPairs::parse(query))
    }

    /// Decode parameters from a full page URL, ignoring any fragment.
    pub fn from_url(url: &str) -> Self {
        Self::from_query(split_url(url).query)
    }

    pub fn from_pairs(pairs: &QueryPairs) -> Self {
        let defaults = Self::default();
        let text = |key: &str, fallback: String| {
            pairs
                .get(key)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .unwrap_or(fallback)
        };

        Self {
            date: text(PARAM_DATE, defaults.date),
            title: text(PARAM_TITLE, defaults.title),
            image: text(PARAM_IMAGE, defaults.image),
            unsplash: pairs
                .get(PARAM_UNSPLASH)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
            font: text(PARAM_FONT, defaults.font),
            effect: text(PARAM_EFFECT, defaults.effect),
            edit: pairs.get(PARAM_EDIT) == Some("true"),
            preview: pairs.get(PARAM_PREVIEW) == Some("true"),
        }
    }
}
