//! Newsletter record model

use crate::domain::Theme;
use chrono::NaiveDate;

/// Delimiter line marking the start and end of the guide section
pub const DELIMITER: &str = "-----";

/// Rule drawn in place of [`DELIMITER`] when a body is shown in full
const RULE: &str = "━━━━━━━━━━━━━━━━━━━━";

/// One newsletter issue as loaded from the data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub month: u32,
    pub day: u32,
    pub weekday: String,
    pub title: String,
    pub body: String,
}

impl Record {
    pub fn new(
        month: u32,
        day: u32,
        weekday: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Record {
            month,
            day,
            weekday: weekday.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// Date label such as `4月1日 (火)`
    pub fn display_date(&self) -> String {
        format!("{}月{}日 ({})", self.month, self.day, self.weekday)
    }

    /// Theme derived from the weekday, `None` for Sunday or unknown labels
    pub fn theme(&self) -> Option<Theme> {
        Theme::from_weekday(&self.weekday)
    }

    /// Calendar date of this issue in the given archive year
    pub fn date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    /// Body prepared for full display: escaped line breaks become real ones
    /// and delimiter lines become a visible rule.
    pub fn readable_body(&self) -> String {
        unescape_newlines(&self.body).replace(DELIMITER, RULE)
    }
}

/// Convert literal `\r\n` escape sequences (as stored by the spreadsheet
/// export) into newlines.
pub fn unescape_newlines(text: &str) -> String {
    text.replace("\\r\\n", "\n")
}
