//! Markup and table rendering for directory results.
//!
//! HTML goes through askama templates, which escape every interpolated
//! value, so user-supplied names, emails and regions cannot inject markup.

use askama::Template;
use chrono::{DateTime, Local, Locale, NaiveDateTime, Utc};
use tabled::Tabled;

use crate::constants::EMPTY_RESULT_MESSAGE;
use crate::types::UserRecord;

/// Locale-aware formatting for `created_at` values.
#[derive(Debug, Clone, Copy)]
pub struct DateFormat {
    pub locale: Locale,
    /// Show UTC instead of the viewer's local time.
    pub utc: bool,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
            utc: false,
        }
    }
}

impl DateFormat {
    pub fn new(locale: Locale, utc: bool) -> Self {
        Self { locale, utc }
    }

    /// Render a timestamp in the locale's date and time representation.
    ///
    /// Unparseable values are shown as received; missing ones as blank.
    pub fn format(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw else {
            return String::new();
        };

        match parse_timestamp(raw) {
            Some(dt) if self.utc => dt.format_localized("%c", self.locale).to_string(),
            Some(dt) => dt
                .with_timezone(&Local)
                .format_localized("%c", self.locale)
                .to_string(),
            None => raw.to_string(),
        }
    }
}

/// Parse an ISO-8601 timestamp; values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// One rendered table row, shared by the HTML and terminal views.
#[derive(Tabled, Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Region")]
    pub region: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Registered")]
    pub registered: String,
}

impl UserRow {
    pub fn from_record(user: &UserRecord, dates: &DateFormat) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            region: user.region.clone(),
            email: user.email.clone(),
            registered: dates.format(user.created_at.as_deref()),
        }
    }
}

pub fn rows(users: &[UserRecord], dates: &DateFormat) -> Vec<UserRow> {
    users
        .iter()
        .map(|user| UserRow::from_record(user, dates))
        .collect()
}

#[derive(Template)]
#[template(path = "directory/users.html")]
struct UsersTemplate<'a> {
    count: u64,
    label: &'a str,
    rows: &'a [UserRow],
}

#[derive(Template)]
#[template(path = "directory/empty.html")]
struct EmptyTemplate<'a> {
    message: &'a str,
}

#[derive(Template)]
#[template(path = "directory/error.html")]
struct ErrorTemplate<'a> {
    message: &'a str,
}

/// Heading plus table, rows in the order given.
pub fn users_html(count: u64, label: &str, rows: &[UserRow]) -> askama::Result<String> {
    UsersTemplate { count, label, rows }.render()
}

pub fn empty_html() -> askama::Result<String> {
    EmptyTemplate {
        message: EMPTY_RESULT_MESSAGE,
    }
    .render()
}

pub fn error_html(message: &str) -> askama::Result<String> {
    ErrorTemplate { message }.render()
}
