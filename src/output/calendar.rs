use chrono::{Datelike, Months, NaiveDate};
use comfy_table::Color;

use crate::consts::NO_DATE;
use crate::output::format::{create_styled_table, format_days, header_cell, right_cell};
use crate::tracker::PeriodTracker;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Monday-first weeks of the month containing `month`; `None` pads the
/// cells before the 1st and after the last day.
pub(crate) fn month_grid(month: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let Some(first) = month.with_day(1) else {
        return Vec::new();
    };
    let days_in_month = first
        .checked_add_months(Months::new(1))
        .map_or(31, |next| (next - first).num_days() as u32);
    let offset = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut col = offset;
    for day in 1..=days_in_month {
        week[col] = Some(day);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(week);
    }
    weeks
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct CalendarOptions {
    pub(crate) use_color: bool,
    pub(crate) today: NaiveDate,
}

fn day_label(day: u32, is_period: bool, is_today: bool, use_color: bool) -> String {
    if use_color {
        return day.to_string();
    }
    match (is_period, is_today) {
        (true, _) => format!("{day}*"),
        (false, true) => format!("({day})"),
        (false, false) => day.to_string(),
    }
}

pub(crate) fn print_month(tracker: &PeriodTracker, month: NaiveDate, opts: CalendarOptions) {
    let c = opts.use_color;
    let marked = tracker.dates_in_month(month);

    let mut table = create_styled_table();
    table.set_header(WEEKDAYS.iter().map(|d| header_cell(d, c)).collect::<Vec<_>>());

    for week in month_grid(month) {
        let row = week.iter().map(|cell| {
            let Some(day) = *cell else {
                return right_cell("", None, false);
            };
            let date = month.with_day(day);
            let is_period = date.is_some_and(|d| marked.contains(&d));
            let is_today = date == Some(opts.today);
            let color = if !c {
                None
            } else if is_period {
                Some(Color::Red)
            } else if is_today {
                Some(Color::Green)
            } else {
                None
            };
            right_cell(&day_label(day, is_period, is_today, c), color, is_period)
        });
        table.add_row(row.collect::<Vec<_>>());
    }

    println!("\n  {}\n", month.format("%B %Y"));
    println!("{table}");

    let span = tracker
        .span()
        .map_or_else(|| "not set".to_string(), |s| format_days(i64::from(s.days())));
    let last = tracker
        .last_date()
        .map_or_else(|| NO_DATE.to_string(), |d| d.to_string());
    println!("\n  Span: {span} | Last date: {last}");
    if !c && !marked.is_empty() {
        println!("  * period date, (n) today");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_of(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn grid_starts_on_correct_weekday() {
        // February 2024 starts on a Thursday
        let grid = month_grid(first_of(2024, 2));
        assert_eq!(grid[0], [None, None, None, Some(1), Some(2), Some(3), Some(4)]);
    }

    #[test]
    fn grid_covers_every_day_once() {
        let grid = month_grid(first_of(2024, 2));
        let days: Vec<u32> = grid.iter().flatten().flatten().copied().collect();
        assert_eq!(days, (1..=29).collect::<Vec<_>>());
        assert_eq!(grid.len(), 5);
    }

    #[test]
    fn grid_for_month_starting_on_sunday_needs_six_weeks() {
        // September 2024 starts on a Sunday and has 30 days
        let grid = month_grid(first_of(2024, 9));
        assert_eq!(grid[0][6], Some(1));
        assert_eq!(grid.len(), 6);
    }

    #[test]
    fn grid_accepts_any_day_of_month() {
        let mid = NaiveDate::from_ymd_opt(2023, 2, 17).unwrap();
        assert_eq!(month_grid(mid), month_grid(first_of(2023, 2)));
    }

    #[test]
    fn plain_labels_mark_period_and_today() {
        assert_eq!(day_label(5, true, false, false), "5*");
        assert_eq!(day_label(5, true, true, false), "5*");
        assert_eq!(day_label(5, false, true, false), "(5)");
        assert_eq!(day_label(5, true, true, true), "5");
    }
}
