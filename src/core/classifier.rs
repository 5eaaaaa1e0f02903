use crate::domain::model::{AgeBreakdown, SignId};
use crate::utils::error::Result;
use crate::utils::validation::validate_date_order;
use chrono::{Datelike, NaiveDate};

/// First (month, day) of each sign, in calendar-year order.
const CUSPS: [(u32, u32, SignId); 12] = [
    (1, 20, SignId::Aquarius),
    (2, 19, SignId::Pisces),
    (3, 21, SignId::Aries),
    (4, 20, SignId::Taurus),
    (5, 21, SignId::Gemini),
    (6, 21, SignId::Cancer),
    (7, 23, SignId::Leo),
    (8, 23, SignId::Virgo),
    (9, 23, SignId::Libra),
    (10, 23, SignId::Scorpio),
    (11, 22, SignId::Sagittarius),
    (12, 22, SignId::Capricorn),
];

/// Tropical sign for a calendar date. Only month and day are consulted.
pub fn sign_for_date(date: NaiveDate) -> SignId {
    let key = (date.month(), date.day());
    let (_, _, sign) = CUSPS
        .iter()
        .rev()
        .find(|(month, day, _)| (*month, *day) <= key)
        // Jan 1..=19 is still inside the sign that started on the last cusp of the year.
        .unwrap_or(&CUSPS[CUSPS.len() - 1]);
    *sign
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .expect("month must lie inside chrono's supported date range")
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Years, months and days elapsed from `birth` to `as_of`, by calendar-field subtraction.
///
/// A negative day difference borrows the length of the month preceding `as_of`'s month.
/// A birth day missing from a shorter month (the 31st, or Feb 29 in a common year) is
/// clamped to that month's last day, so every field stays non-negative.
pub fn age_breakdown(birth: NaiveDate, as_of: NaiveDate) -> Result<AgeBreakdown> {
    validate_date_order(birth, as_of)?;

    let mut years = as_of.year() - birth.year();
    let mut months = as_of.month() as i32 - birth.month() as i32;

    let anchor_day = birth.day().min(days_in_month(as_of.year(), as_of.month()));
    let mut days = as_of.day() as i32 - anchor_day as i32;

    if days < 0 {
        let (prev_year, prev_month) = previous_month(as_of.year(), as_of.month());
        let prev_len = days_in_month(prev_year, prev_month);
        days = as_of.day() as i32 + prev_len as i32 - birth.day().min(prev_len) as i32;
        months -= 1;
    }

    if months < 0 {
        months += 12;
        years -= 1;
    }

    tracing::debug!(%birth, %as_of, years, months, days, "computed age");

    Ok(AgeBreakdown {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    })
}
