//! In-place editing of a rendered countdown by rewriting its link.

use crate::models::page::{PARAM_DATE, PARAM_TITLE};
use crate::utils::date::split_offset;
use crate::utils::query::{split_url, QueryPairs};

/// Length of a `YYYY-MM-DDTHH:MM` date-time input value.
const DATE_INPUT_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Date,
}

impl EditField {
    pub fn param(&self) -> &'static str {
        match self {
            Self::Title => PARAM_TITLE,
            Self::Date => PARAM_DATE,
        }
    }

    pub fn dialog_title(&self) -> &'static str {
        match self {
            Self::Title => "Edit Title",
            Self::Date => "Edit Date",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Title => "Enter a new title:",
            Self::Date => "Select a new date and time:",
        }
    }
}

/// One open edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    field: EditField,
    input_value: String,
    /// Offset carried over from the current date so a new date keeps it.
    offset: String,
}

impl EditSession {
    pub fn open(field: EditField, current_value: &str) -> Self {
        let current_value = current_value.trim();
        match field {
            EditField::Title => Self {
                field,
                input_value: current_value.to_string(),
                offset: String::new(),
            },
            EditField::Date => {
                let split = split_offset(current_value);
                let input_value = split
                    .naive_date_part
                    .replacen(' ', "T", 1)
                    .chars()
                    .take(DATE_INPUT_LEN)
                    .collect();
                Self {
                    field,
                    input_value,
                    offset: split.offset_part.to_string(),
                }
            }
        }
    }

    pub fn field(&self) -> EditField {
        self.field
    }

    /// Value the dialog input starts with.
    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn offset(&self) -> &str {
        &self.offset
    }

    /// Apply `new_value` to `page_url`. Returns the URL to reload, or `None`
    /// when the value is unchanged and the dialog should just close.
    pub fn save(&self, page_url: &str, new_value: &str) -> Option<String> {
        let new_value = new_value.trim();
        if new_value == self.input_value {
            log::debug!("{} unchanged, closing dialog", self.field.param());
            return None;
        }

        let final_value = match self.field {
            EditField::Title => new_value.to_string(),
            EditField::Date => format!("{}:00{}", new_value, self.offset),
        };

        let parts = split_url(page_url);
        let mut pairs = QueryPairs::parse(parts.query);
        pairs.set(self.field.param(), final_value);

        log::info!("Rewriting {} for reload", self.field.param());
        Some(format!("{}?{}{}", parts.base, pairs.to_query_string(), parts.fragment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::page::CountdownParams;

    const PAGE: &str = "countdown.html?title=Launch&date=2030-01-01T09%3A30%3A00&edit=true";

    #[test]
    fn test_date_input_value_is_truncated_to_minutes() {
        let session = EditSession::open(EditField::Date, "2030-01-01 09:30:45");
        assert_eq!(session.input_value(), "2030-01-01T09:30");
        assert_eq!(session.offset(), "");
    }

    #[test]
    fn test_date_edit_appends_seconds() {
        let session = EditSession::open(EditField::Date, "2030-01-01T09:30:00");
        let url = session.save(PAGE, " 2031-02-03T04:05 ").unwrap();
        assert_eq!(
            url,
            "countdown.html?title=Launch&date=2031-02-03T04%3A05%3A00&edit=true"
        );
    }

    #[test]
    fn test_date_edit_keeps_offset() {
        let session = EditSession::open(EditField::Date, "2030-01-01T09:30:00+05:30");
        assert_eq!(session.input_value(), "2030-01-01T09:30");

        let url = session.save(PAGE, "2031-02-03T04:05").unwrap();
        assert_eq!(CountdownParams::from_url(&url).date, "2031-02-03T04:05:00+05:30");
    }

    #[test]
    fn test_unchanged_value_closes_dialog() {
        let session = EditSession::open(EditField::Title, "  Launch ");
        assert_eq!(session.save(PAGE, "Launch"), None);

        let session = EditSession::open(EditField::Date, "2030-01-01T09:30:00");
        assert_eq!(session.save(PAGE, "2030-01-01T09:30"), None);
    }

    #[test]
    fn test_title_edit_keeps_other_params_and_fragment() {
        let session = EditSession::open(EditField::Title, "Launch");
        let url = session.save(&format!("{PAGE}#top"), "Lift off").unwrap();
        assert!(url.starts_with("countdown.html?title=Lift%20off&date="));
        assert!(url.ends_with("&edit=true#top"));
    }

    #[test]
    fn test_new_param_is_appended() {
        let session = EditSession::open(EditField::Title, "Countdown");
        let url = session.save("countdown.html", "Party").unwrap();
        assert_eq!(url, "countdown.html?title=Party");
    }
}
