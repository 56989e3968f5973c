//! Calendar values and month-grid generation for the date & time picker.
//!
//! ## Usage
//!
//! Shared by the picker session, the calendar grid, and the field
//! formatting/parsing protocol.
use std::time::{SystemTime, UNIX_EPOCH};

use smallvec::SmallVec;
use thiserror::Error;

/// Number of columns in the calendar grid.
pub const GRID_COLUMNS: usize = 7;

/// Short weekday labels for the grid header, Sunday first.
pub const WEEKDAY_LABELS: [&str; GRID_COLUMNS] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Days of the week in Sunday-first order, matching the grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    /// Sunday.
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl Weekday {
    /// Returns the column index in a Sunday-first grid (0-6).
    pub fn index_from_sunday(self) -> u8 {
        match self {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        }
    }

    fn from_sunday_index(index: i64) -> Self {
        match index.rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }
}

/// A calendar date expressed as year, month, and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a calendar date if the values are valid.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the weekday this date falls on.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 is a Thursday, index 4 in Sunday-first order.
        Weekday::from_sunday_index(self.to_days() + 4)
    }

    /// Returns the date shifted by the given number of days.
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_days(self.to_days() + days)
    }

    /// Returns the current date in UTC.
    pub fn today() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::from_days((duration.as_secs() / 86_400) as i64)
    }

    fn to_days(self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    fn from_days(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days);
        Self { year, month, day }
    }

    fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// A year and month pair used as the calendar grid anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a year/month pair if the month is valid.
    pub fn new(year: i32, month: u8) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Returns the anchor month of the given date.
    pub fn of(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the first day of this month.
    pub fn first_day(&self) -> CalendarDate {
        CalendarDate::new_unchecked(self.year, self.month, 1)
    }

    /// Returns the last day of this month.
    pub fn last_day(&self) -> CalendarDate {
        CalendarDate::new_unchecked(self.year, self.month, days_in_month(self.year, self.month))
    }

    /// Adds or subtracts months, adjusting the year as needed.
    pub fn add_months(&self, delta: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;
        Self {
            year: total.div_euclid(12),
            month: (total.rem_euclid(12) + 1) as u8,
        }
    }

    /// Returns true when the date belongs to this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// A calendar date with an hour and minute, the value a picker session
/// reads from and writes to its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDateTime {
    date: CalendarDate,
    hour: u8,
    minute: u8,
}

impl CalendarDateTime {
    /// Creates a date-time if the time of day is valid.
    pub fn new(date: CalendarDate, hour: u8, minute: u8) -> Option<Self> {
        (hour <= 23 && minute <= 59).then_some(Self { date, hour, minute })
    }

    /// Returns the calendar date.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns a copy with the date replaced, keeping the time of day.
    pub fn with_date(&self, date: CalendarDate) -> Self {
        Self { date, ..*self }
    }

    /// Returns a copy with the hour replaced, clamped to 0-23.
    pub fn with_hour(&self, hour: u8) -> Self {
        Self {
            hour: hour.min(23),
            ..*self
        }
    }

    /// Returns a copy with the minute replaced, clamped to 0-59.
    pub fn with_minute(&self, minute: u8) -> Self {
        Self {
            minute: minute.min(59),
            ..*self
        }
    }

    /// Returns the current moment in UTC, at minute precision.
    pub fn now_utc() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let secs = duration.as_secs();
        Self {
            date: CalendarDate::from_days((secs / 86_400) as i64),
            hour: ((secs / 3_600) % 24) as u8,
            minute: ((secs / 60) % 60) as u8,
        }
    }
}

/// A single cell of the calendar month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// A selectable day. `outer_month` marks days shown for grid
    /// completeness that belong to the previous month.
    Day {
        /// The date this cell selects.
        date: CalendarDate,
        /// Whether the date lies outside the displayed month.
        outer_month: bool,
    },
    /// Trailing padding so every row has exactly [`GRID_COLUMNS`] cells.
    Blank,
}

/// Cells of one rendered month, row-major with 7 columns per row.
pub type MonthGrid = SmallVec<[GridCell; 42]>;

/// Builds the grid for one month.
///
/// The first cell is always a Sunday: the walk starts at the first day of
/// the month and backs up to the preceding Sunday, so leading cells are
/// real (clickable) days of the previous month. Rows are emitted until
/// the last day of the month has been placed, and the trailing row is
/// padded with blank cells to a multiple of 7.
pub fn build_month_grid(month: YearMonth) -> MonthGrid {
    let mut cells = MonthGrid::new();

    let mut current = month.first_day();
    while current.weekday() != Weekday::Sunday {
        current = current.add_days(-1);
    }

    let last = month.last_day();
    while current.to_days() <= last.to_days() {
        cells.push(GridCell::Day {
            date: current,
            outer_month: !month.contains(current),
        });
        current = current.add_days(1);
    }

    while cells.len() % GRID_COLUMNS != 0 {
        cells.push(GridCell::Blank);
    }

    cells
}

/// Error describing why a field value could not be parsed.
///
/// The picker session itself swallows this and falls back to the current
/// moment; the error is exposed for hosts that validate input directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDateTimeError {
    /// The input was empty or whitespace.
    #[error("expected `YYYY-MM-DD HH:MM`, got an empty value")]
    Empty,
    /// The input did not match the `YYYY-MM-DD HH:MM` shape.
    #[error("expected `YYYY-MM-DD HH:MM`, got `{0}`")]
    Malformed(String),
    /// The date components do not name a real calendar date.
    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Parsed year.
        year: i32,
        /// Parsed month.
        month: u8,
        /// Parsed day.
        day: u8,
    },
    /// The time components are out of range.
    #[error("time of day out of range: {hour:02}:{minute:02}")]
    InvalidTime {
        /// Parsed hour.
        hour: u8,
        /// Parsed minute.
        minute: u8,
    },
}

/// Parses a field value of the form `YYYY-MM-DD HH:MM`.
///
/// A `T` separator is tolerated in place of the space, and a trailing
/// `:SS` seconds component is tolerated and dropped.
///
/// ## Examples
///
/// ```
/// use chronopick::calendar::parse_date_time;
///
/// let a = parse_date_time("2024-02-15 14:30").unwrap();
/// let b = parse_date_time("2024-02-15T14:30:00").unwrap();
/// assert_eq!(a, b);
/// assert!(parse_date_time("2024-02-30 14:30").is_err());
/// ```
pub fn parse_date_time(input: &str) -> Result<CalendarDateTime, ParseDateTimeError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseDateTimeError::Empty);
    }

    let malformed = || ParseDateTimeError::Malformed(input.to_string());

    let (date_part, time_part) = input
        .split_once(['T', ' '])
        .ok_or_else(malformed)?;

    let mut date_fields = date_part.splitn(3, '-');
    let year: i32 = parse_field(date_fields.next()).ok_or_else(malformed)?;
    let month: u8 = parse_field(date_fields.next()).ok_or_else(malformed)?;
    let day: u8 = parse_field(date_fields.next()).ok_or_else(malformed)?;

    let mut time_fields = time_part.splitn(3, ':');
    let hour: u8 = parse_field(time_fields.next()).ok_or_else(malformed)?;
    let minute: u8 = parse_field(time_fields.next()).ok_or_else(malformed)?;
    if let Some(seconds) = time_fields.next() {
        // Seconds are accepted but not stored; the canonical value has none.
        let seconds: u8 = seconds.trim().parse().map_err(|_| malformed())?;
        if seconds > 59 {
            return Err(malformed());
        }
    }

    let date =
        CalendarDate::new(year, month, day).ok_or(ParseDateTimeError::InvalidDate {
            year,
            month,
            day,
        })?;
    CalendarDateTime::new(date, hour, minute)
        .ok_or(ParseDateTimeError::InvalidTime { hour, minute })
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>) -> Option<T> {
    field.and_then(|f| f.trim().parse().ok())
}

/// Formats the headline presentation, e.g. `February 2024`.
pub fn format_headline(month: YearMonth) -> String {
    format!("{} {}", month_name(month.month()), month.year())
}

/// Formats the grid-cell date key, e.g. `2024-02-15`.
pub fn format_date_key(date: CalendarDate) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Formats the canonical field value, e.g. `2024-02-15 14:30`.
///
/// ## Examples
///
/// ```
/// use chronopick::calendar::{
///     format_field_value, parse_date_time, CalendarDate, CalendarDateTime,
/// };
///
/// let date = CalendarDate::new(2024, 2, 15).unwrap();
/// let value = CalendarDateTime::new(date, 14, 30).unwrap();
/// let text = format_field_value(value);
/// assert_eq!(text, "2024-02-15 14:30");
/// assert_eq!(parse_date_time(&text).unwrap(), value);
/// ```
pub fn format_field_value(value: CalendarDateTime) -> String {
    format!(
        "{} {:02}:{:02}",
        format_date_key(value.date()),
        value.hour(),
        value.minute()
    )
}

/// Returns the English month name for a month number (1-12).
pub fn month_name(month: u8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let mut y = year;
    let m = month as i32;
    let d = day as i32;
    y -= if m <= 2 { 1 } else { 0 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = m + if m > 2 { -3 } else { 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    (era * 146_097 + doe - 719_468) as i64
}

fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = mp + if mp < 10 { 3 } else { -9 };
    let year = y + if month <= 2 { 1 } else { 0 };
    (year as i32, month as u8, day as u8)
}
