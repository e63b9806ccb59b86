//! Month/year filter selection and the option lists that drive it.
//!
//! A filter dimension is either a concrete value or an "all" sentinel that
//! leaves the dimension unconstrained. The option lists are derived from the
//! dates actually present in the collections, so the selectors never offer a
//! month or year with no records behind it.

use chrono::{DateTime, Datelike, Utc};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// Sentinel value for the unconstrained month selection.
pub const ALL_MONTHS: &str = "all-months";
/// Sentinel value for the unconstrained year selection.
pub const ALL_YEARS: &str = "all-years";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month selection: a zero-based month index (0 = January) or all months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Month(u32),
}

impl MonthFilter {
    /// Whether `date` satisfies this dimension of the filter.
    pub fn matches(&self, date: &DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Month(month) => date.month0() == *month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_MONTHS),
            Self::Month(month) => write!(f, "{month}"),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_MONTHS {
            return Ok(Self::All);
        }
        match s.parse::<u32>() {
            Ok(month) if month <= 11 => Ok(Self::Month(month)),
            _ => Err(Error::InvalidInput(format!(
                "'{s}' is not a month index (0-11) or '{ALL_MONTHS}'"
            ))),
        }
    }
}

/// Year selection: a calendar year or all years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Year(i32),
}

impl YearFilter {
    /// Whether `date` satisfies this dimension of the filter.
    pub fn matches(&self, date: &DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Year(year) => date.year() == *year,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_YEARS),
            Self::Year(year) => write!(f, "{year}"),
        }
    }
}

impl FromStr for YearFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_YEARS {
            return Ok(Self::All);
        }
        s.parse::<i32>().map(Self::Year).map_err(|_| {
            Error::InvalidInput(format!("'{s}' is not a year or '{ALL_YEARS}'"))
        })
    }
}

/// One entry in a filter selector: the machine value plus its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// Builds the month selector options for the given record dates: the "all"
/// sentinel followed by each distinct month index present, ascending,
/// labelled with the English month name.
pub fn month_options<I>(dates: I) -> Vec<FilterOption>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let months: BTreeSet<u32> = dates.into_iter().map(|date| date.month0()).collect();
    let mut options = vec![FilterOption {
        value: ALL_MONTHS.to_string(),
        label: "All Months".to_string(),
    }];
    options.extend(months.into_iter().map(|month| FilterOption {
        value: month.to_string(),
        label: MONTH_NAMES[month as usize].to_string(),
    }));
    options
}

/// Builds the year selector options: the "all" sentinel followed by each
/// distinct year present, ascending.
pub fn year_options<I>(dates: I) -> Vec<FilterOption>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let years: BTreeSet<i32> = dates.into_iter().map(|date| date.year()).collect();
    let mut options = vec![FilterOption {
        value: ALL_YEARS.to_string(),
        label: "All Years".to_string(),
    }];
    options.extend(years.into_iter().map(|year| FilterOption {
        value: year.to_string(),
        label: year.to_string(),
    }));
    options
}
