mod calendar;
mod format;
mod json;
mod list;

pub(crate) use calendar::{CalendarOptions, print_month};
pub(crate) use json::{change_json, dates_json, month_json, removed_json, tracker_json};
pub(crate) use list::print_date_list;
