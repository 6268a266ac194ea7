use crate::engine::MonthBounds;
use crate::models::{DayState, HabitMonthView, SummaryResponse};

/// Totals every displayed day-state. Anything that is neither done nor missed
/// (today, future and disabled days) counts as pending.
pub fn summarize(bounds: &MonthBounds, habits: &[HabitMonthView]) -> SummaryResponse {
    let mut done = 0u32;
    let mut missed = 0u32;
    let mut pending = 0u32;

    for state in habits.iter().flat_map(|habit| habit.days.values()) {
        match state {
            DayState::Done => done += 1,
            DayState::Missed => missed += 1,
            DayState::Today | DayState::Future | DayState::Disabled => pending += 1,
        }
    }

    let count = habits.len();
    let total: u64 = habits.iter().map(|habit| u64::from(habit.progress)).sum();
    let denom = count.max(1) as u64;

    SummaryResponse {
        year: bounds.year,
        month: bounds.month,
        done,
        missed,
        pending,
        habit_count: count,
        average_progress: ((2 * total + denom) / (2 * denom)) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::month_view;
    use crate::models::HabitData;
    use chrono::NaiveDate;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn empty_month_has_no_counts() {
        let bounds = MonthBounds::new(2025, 0).unwrap();
        let summary = summarize(&bounds, &[]);
        assert_eq!(summary.done + summary.missed + summary.pending, 0);
        assert_eq!(summary.habit_count, 0);
        assert_eq!(summary.average_progress, 0);
    }

    #[test]
    fn counts_every_day_of_every_habit() {
        let today = ymd(2025, 1, 15);
        let bounds = MonthBounds::new(2025, 0).unwrap();
        let mut data = HabitData::default();
        let run = data.create("run", ymd(2025, 1, 10), "");
        let read = data.create("read", ymd(2025, 1, 1), "");
        data.mark_date(run.id, ymd(2025, 1, 10), true).unwrap();
        data.mark_date(read.id, ymd(2025, 1, 2), true).unwrap();
        data.mark_date(read.id, today, true).unwrap();

        let views: Vec<_> = data
            .list()
            .iter()
            .map(|habit| month_view(habit, &bounds, today))
            .collect();
        let summary = summarize(&bounds, &views);

        // run: 9 disabled, 1 done, 4 missed, today, 16 future.
        // read: 2 done (incl. today), 13 missed, 16 future.
        assert_eq!(summary.done, 3);
        assert_eq!(summary.missed, 17);
        assert_eq!(summary.pending, 9 + 1 + 16 + 16);
        assert_eq!(summary.done + summary.missed + summary.pending, 62);
        assert_eq!(summary.habit_count, 2);
        // run 1/6 = 17%, read 2/15 = 13%.
        assert_eq!(summary.average_progress, 15);
    }
}
