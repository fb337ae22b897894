//! Filter records by date range, author and role.
//!
//! This module provides [`RecordFilter`] for defining filter criteria and
//! [`apply_filters`] for filtering record collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](RecordFilter::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](RecordFilter::with_date_to) | Records on or before date |
//! | Author | [`with_username`](RecordFilter::with_username) | Records from one username |
//! | Role | [`with_role`](RecordFilter::with_role) | Records with one role |
//!
//! # Examples
//!
//! ```
//! use modlog::core::filter::{RecordFilter, apply_filters};
//! use modlog::{MessageRecord, Role};
//!
//! # fn main() -> modlog::Result<()> {
//! let records = vec![
//!     MessageRecord::new("2024-01-01 12:00:00", "Alice", "1234").with_message("Old"),
//!     MessageRecord::new("2024-06-15 12:00:00", "Mod", "0001").with_role(Role::Staff),
//!     MessageRecord::new("2024-06-16 12:00:00", "alice", "1234").with_message("New"),
//! ];
//!
//! let filter = RecordFilter::new()
//!     .with_date_from("2024-06-01")?
//!     .with_username("ALICE");
//!
//! let filtered = apply_filters(records, &filter);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].message, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Records whose timestamp does not parse are **excluded** when date filters are active
//! - Username matching is case-insensitive for ASCII characters
//! - Multiple filters are combined with AND logic

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::ModlogError;
use crate::record::{MessageRecord, Role};

/// Configuration for filtering records.
///
/// A record must match all active filters to be included in the result.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Include only records on or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this timestamp.
    pub before: Option<NaiveDateTime>,

    /// Include only records from this username (case-insensitive).
    pub username: Option<String>,

    /// Include only records with this role.
    pub role: Option<Role>,
}

impl RecordFilter {
    /// Creates a new empty filter; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ModlogError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ModlogError> {
        let naive = parse_date(date_str)?;
        self.after = Some(naive.and_time(chrono::NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ModlogError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ModlogError> {
        let naive = parse_date(date_str)?;
        // End of the day to include the full day
        self.before = naive.and_hms_opt(23, 59, 59);
        Ok(self)
    }

    /// Sets the username filter (ASCII case-insensitive).
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.username.is_some() || self.role.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `record` passes every active filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        if let Some(ref username) = self.username {
            if !record.username.eq_ignore_ascii_case(username) {
                return false;
            }
        }

        if self.role.is_some_and(|role| record.role != role) {
            return false;
        }

        if self.has_date_filter() {
            let Some(ts) = record.parsed_timestamp() else {
                return false;
            };
            if self.after.is_some_and(|after| ts < after) {
                return false;
            }
            if self.before.is_some_and(|before| ts > before) {
                return false;
            }
        }

        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ModlogError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ModlogError::invalid_date(date_str))
}

/// Filters records, keeping only those that match all active filters.
///
/// If no filters are active, returns the input unchanged.
pub fn apply_filters(records: Vec<MessageRecord>, filter: &RecordFilter) -> Vec<MessageRecord> {
    if !filter.is_active() {
        return records;
    }

    records.into_iter().filter(|r| filter.matches(r)).collect()
}
