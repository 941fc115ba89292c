use std::sync::OnceLock;

use regex::Regex;

use crate::models::page::{
    DEFAULT_EFFECT, DEFAULT_FONT, DEFAULT_IMAGE, DEFAULT_TITLE, PARAM_DATE, PARAM_EFFECT,
    PARAM_FONT, PARAM_IMAGE, PARAM_PREVIEW, PARAM_TITLE,
};
use crate::utils::query::QueryPairs;

fn builder_offset_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[+-][0-9]{2}:[0-9]{2}$").expect("builder offset pattern is valid"))
}

/// Assembles a countdown link from builder form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    page: String,
    title: String,
    date: String,
    offset: String,
    image: String,
    font: String,
    effect: String,
}

impl LinkBuilder {
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            title: DEFAULT_TITLE.to_string(),
            date: String::new(),
            offset: String::new(),
            image: DEFAULT_IMAGE.to_string(),
            font: DEFAULT_FONT.to_string(),
            effect: DEFAULT_EFFECT.to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// `±HH:MM`; anything else is dropped and the date is read in the
    /// viewer's local time.
    pub fn offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = offset.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Accepts a picked image path such as `img/beach.jpg` and keeps only
    /// the file stem.
    pub fn image_from_path(self, path: &str) -> Self {
        let file = path.rsplit('/').next().unwrap_or(path);
        let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);
        self.image(stem)
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub fn effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = effect.into();
        self
    }

    /// The offset that will be appended to the date, if it is well formed.
    pub fn clean_offset(&self) -> Option<&str> {
        if builder_offset_pattern().is_match(&self.offset) {
            Some(&self.offset)
        } else {
            if !self.offset.is_empty() {
                log::debug!("Dropping malformed offset {:?}", self.offset);
            }
            None
        }
    }

    pub fn build(&self) -> String {
        let date = match self.clean_offset() {
            Some(offset) => format!("{}{}", self.date, offset),
            None => self.date.clone(),
        };

        let mut pairs = QueryPairs::new();
        pairs.append(PARAM_TITLE, self.title.as_str());
        pairs.append(PARAM_DATE, date);
        pairs.append(PARAM_IMAGE, self.image.as_str());
        pairs.append(PARAM_FONT, self.font.as_str());
        pairs.append(PARAM_EFFECT, self.effect.as_str());

        format!("{}?{}", self.page, pairs.to_query_string())
    }

    /// Link for the embedded builder preview.
    pub fn preview_link(&self) -> String {
        format!("{}&{}=true", self.build(), PARAM_PREVIEW)
    }
}
