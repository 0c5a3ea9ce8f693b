use chrono::NaiveDate;
use comfy_table::Color;

use crate::output::format::{create_styled_table, format_days, header_cell, right_cell, styled_cell};

/// Print dates with the weekday and the gap to the previous entry
pub(crate) fn print_date_list(dates: &[NaiveDate], today: NaiveDate, use_color: bool) {
    let c = use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Date", c),
        header_cell("Weekday", c),
        header_cell("Gap", c),
        header_cell("When", c),
    ]);

    let mut prev: Option<NaiveDate> = None;
    for date in dates {
        let gap = prev.map_or_else(String::new, |p| format_days((*date - p).num_days()));
        let (when, color) = relative_label(*date, today);
        table.add_row(vec![
            styled_cell(&date.to_string(), if c { color } else { None }, false),
            styled_cell(&date.format("%A").to_string(), None, false),
            right_cell(&gap, None, false),
            styled_cell(&when, if c { color } else { None }, false),
        ]);
        prev = Some(*date);
    }

    println!("{table}");
    println!("\n  {} dates\n", dates.len());
}

fn relative_label(date: NaiveDate, today: NaiveDate) -> (String, Option<Color>) {
    let diff = (date - today).num_days();
    match diff {
        0 => ("today".to_string(), Some(Color::Green)),
        d if d > 0 => (format!("in {}", format_days(d)), Some(Color::Red)),
        d => (format!("{} ago", format_days(-d)), None),
    }
}
