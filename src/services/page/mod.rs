//! Countdown page assembly: turning query parameters into what the page
//! shows, and building or rewriting links to it.

mod edit;
mod link;
mod share;

pub use edit::{EditField, EditSession};
pub use link::LinkBuilder;
pub use share::{share_link, shared_preview};

use chrono::{DateTime, TimeZone, Utc};

use crate::models::page::CountdownParams;
use crate::services::countdown::{
    resolve_split, sentinel_target, Clock, CountdownHandle, DisplaySurface, RefreshConfig, RefreshLoop,
};
use crate::utils::date::{split_offset, OffsetLabel};

pub const UNSPLASH_IMAGE_BASE: &str = "https://images.unsplash.com";

/// Everything a rendered countdown page needs, fixed at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownPage {
    pub params: CountdownParams,
    pub document_title: String,
    pub background_url: String,
    pub font_class: String,
    pub effect_class: String,
    pub menu_visible: bool,
    /// Raw target date as given in the link.
    pub suffix_text: String,
    pub offset_label: OffsetLabel,
    pub target: DateTime<Utc>,
}

impl CountdownPage {
    /// Apply `params` to a page. Dates without an offset are read in `local`;
    /// unreadable dates fall back to the long-past default.
    pub fn initialize<Tz: TimeZone>(params: CountdownParams, local: &Tz) -> Self {
        let split = split_offset(params.date.trim());
        let offset_label = split.label();
        let target = resolve_split(&split, local).unwrap_or_else(|err| {
            log::warn!("Falling back to the default target for {:?}: {}", params.date, err);
            sentinel_target()
        });

        log::debug!("Initializing countdown {:?} for {}", params.title, params.date);

        Self {
            document_title: params.title.clone(),
            background_url: background_url(&params),
            font_class: format!("countdown-font-{}", params.font),
            effect_class: format!("countdown-effect-{}", params.effect),
            menu_visible: !params.preview,
            suffix_text: params.date.clone(),
            offset_label,
            target,
            params,
        }
    }

    pub fn title(&self) -> &str {
        &self.params.title
    }

    pub fn is_edit_mode(&self) -> bool {
        self.params.edit
    }

    /// Start the refresh loop for this page's target.
    pub fn start_countdown<S, C>(&self, surface: S, clock: C, config: RefreshConfig) -> CountdownHandle
    where
        S: DisplaySurface + 'static,
        C: Clock + 'static,
    {
        RefreshLoop::new(self.target, config).spawn(surface, clock)
    }

    /// Open an editor for `field`, or `None` outside edit mode.
    pub fn edit(&self, field: EditField) -> Option<EditSession> {
        if !self.is_edit_mode() {
            return None;
        }

        let current = match field {
            EditField::Title => self.params.title.as_str(),
            EditField::Date => self.suffix_text.as_str(),
        };
        Some(EditSession::open(field, current))
    }
}

fn background_url(params: &CountdownParams) -> String {
    match &params.unsplash {
        Some(photo) => format!("{}/{}", UNSPLASH_IMAGE_BASE, photo),
        None => format!("./img/{}.jpg", params.image),
    }
}
