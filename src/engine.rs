use crate::models::{DayMark, DayState, Habit, HabitMonthView};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// First and last calendar day of a month. `month` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBounds {
    pub year: i32,
    pub month: u32,
    pub first: NaiveDate,
    pub last: NaiveDate,
    pub days_in_month: u32,
}

impl MonthBounds {
    /// Accepts any `month`; values outside `0..12` roll into neighbouring years.
    pub fn new(year: i32, month: i32) -> Option<Self> {
        let year = year.checked_add(month.div_euclid(12))?;
        let month = month.rem_euclid(12) as u32;

        let first = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
        let next_first = if month == 11 {
            NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 2, 1)?
        };
        let last = next_first.pred_opt()?;

        Some(Self {
            year,
            month,
            first,
            last,
            days_in_month: last.day(),
        })
    }

    pub fn containing(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        let days_in_month = days_in_month_of(first);
        Self {
            year: date.year(),
            month: date.month0(),
            first,
            last: first + Duration::days(i64::from(days_in_month) - 1),
            days_in_month,
        }
    }

    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.days_in_month {
            return None;
        }
        self.first.with_day(day)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first.iter_days().take_while(|date| *date <= self.last)
    }

    /// Whether the whole month lies after the month containing `today`.
    pub fn is_after_month_of(&self, today: NaiveDate) -> bool {
        (self.year, self.month) > (today.year(), today.month0())
    }
}

fn days_in_month_of(first: NaiveDate) -> u32 {
    first
        .iter_days()
        .take_while(|date| date.month() == first.month())
        .count() as u32
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Explicit marks win over anything inferred from `today`, except that days
/// before the start date are always disabled.
pub fn day_state(habit: &Habit, date: NaiveDate, today: NaiveDate) -> DayState {
    if date < habit.start_date {
        return DayState::Disabled;
    }

    match habit.mark(date) {
        Some(DayMark::Done) => DayState::Done,
        Some(DayMark::Missed) => DayState::Missed,
        None if date == today => DayState::Today,
        None if date < today => DayState::Missed,
        None => DayState::Future,
    }
}

/// Share of eligible days in the month that carry an explicit done mark, as a
/// whole percentage rounded half up.
pub fn progress(habit: &Habit, bounds: &MonthBounds, today: NaiveDate) -> u8 {
    if habit.start_date > bounds.last {
        return 0;
    }

    let start = habit.start_date.max(bounds.first);
    let end = if bounds.is_after_month_of(today) {
        bounds.last
    } else {
        today.min(bounds.last)
    };
    if end < start {
        return 0;
    }

    let eligible = ((end - start).num_days() + 1).max(1) as u64;
    let done = habit
        .status
        .range(start..=end)
        .filter(|(_, mark)| **mark == DayMark::Done)
        .count() as u64;

    ((200 * done + eligible) / (2 * eligible)).min(100) as u8
}

pub fn streak(habit: &Habit, today: NaiveDate) -> u32 {
    let mut count = 0;
    let mut date = today;
    while date >= habit.start_date && habit.is_done(date) {
        count += 1;
        match date.pred_opt() {
            Some(prev) => date = prev,
            None => break,
        }
    }
    count
}

pub fn month_view(habit: &Habit, bounds: &MonthBounds, today: NaiveDate) -> HabitMonthView {
    let days: BTreeMap<String, DayState> = bounds
        .days()
        .map(|date| (date.day().to_string(), day_state(habit, date, today)))
        .collect();

    HabitMonthView {
        id: habit.id,
        name: habit.name.clone(),
        goal: habit.goal.clone(),
        start_date: habit.start_date,
        start_day: habit.start_date.day(),
        days,
        progress: progress(habit, bounds, today),
        streak: streak(habit, today),
    }
}
