use chrono::{Datelike, NaiveDate};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::consts::{FORECAST_COUNT, NO_DATE};
use crate::error::AppError;
use crate::output::{
    CalendarOptions, change_json, dates_json, month_json, print_date_list, print_month,
    removed_json, tracker_json,
};
use crate::tracker::{Confirmation, Loaded, PeriodTracker, Span, Store};
use crate::utils::{Timezone, confirm, parse_date, parse_month};

const FIRST_RUN_NOTICE: &str = "No period dates recorded yet. Add the first one with \
                                `periods add <DATE>` to start forecasting.";

const SPAN_MISSING_NOTICE: &str = "Warning: no span configured, so no forecast was generated. \
                                   Set one with `periods span <DAYS>`.";

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) store: &'a Store,
    pub(crate) today: NaiveDate,
}

impl CommandContext<'_> {
    fn ask(&self, question: &str) -> bool {
        let accepted = confirm(question, self.cli.yes);
        if !accepted {
            eprintln!("Cancelled.");
        }
        accepted
    }

    fn save(&self, tracker: &PeriodTracker) -> Result<(), AppError> {
        self.store.save(tracker)
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn handle_show(
    tracker: &PeriodTracker,
    month: Option<&str>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let month = match month {
        Some(raw) => parse_month(raw)?,
        None => ctx.today.with_day(1).unwrap_or(ctx.today),
    };
    if ctx.cli.json {
        println!("{}", month_json(tracker, month)?);
    } else {
        print_month(
            tracker,
            month,
            CalendarOptions {
                use_color: ctx.cli.use_color(),
                today: ctx.today,
            },
        );
    }
    Ok(())
}

fn handle_list(
    tracker: &PeriodTracker,
    since: Option<&str>,
    until: Option<&str>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let since = since.map(parse_date).transpose()?;
    let until = until.map(parse_date).transpose()?;
    let dates = tracker.dates_between(since, until);

    if ctx.cli.json {
        println!("{}", dates_json(&dates)?);
    } else if dates.is_empty() {
        println!("No dates found.");
    } else {
        print_date_list(&dates, ctx.today, ctx.cli.use_color());
    }
    Ok(())
}

fn handle_last(tracker: &PeriodTracker, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let last = tracker.last_date().map(|d| d.to_string());
    if ctx.cli.json {
        println!("{}", serde_json::json!({ "last_date": last }));
    } else {
        println!("{}", last.as_deref().unwrap_or(NO_DATE));
    }
    Ok(())
}

fn handle_add(
    tracker: &mut PeriodTracker,
    raw: &str,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let date = parse_date(raw)?;
    if !ctx.ask(&format!(
        "Add a period start on {date}? Later dates will be replaced by a new forecast."
    )) {
        return Ok(());
    }

    let outcome = tracker.confirm(date);
    ctx.save(tracker)?;

    let forecast = match outcome {
        Confirmation::Forecast(dates) => dates,
        Confirmation::SpanMissing => {
            eprintln!("{SPAN_MISSING_NOTICE}");
            Vec::new()
        }
    };
    if ctx.cli.json {
        println!("{}", change_json(tracker, "forecast", &forecast)?);
    } else if let Some(next) = forecast.first() {
        println!(
            "Added {date}. Next expected on {next} ({} dates forecast).",
            forecast.len()
        );
    } else {
        println!("Added {date}.");
    }
    Ok(())
}

fn handle_remove(
    tracker: &mut PeriodTracker,
    raw: &str,
    later: bool,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let date = parse_date(raw)?;
    if !later && !tracker.contains(date) {
        println!("{date} is not recorded.");
        return Ok(());
    }
    let question = if later {
        format!("Remove {date} and every later date?")
    } else {
        format!("Remove {date}?")
    };
    if !ctx.ask(&question) {
        return Ok(());
    }

    let removed = tracker.remove_date(date, later);
    ctx.save(tracker)?;
    report_removed(tracker, removed, ctx)
}

fn handle_clear(
    tracker: &mut PeriodTracker,
    raw: &str,
    inclusive: bool,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let date = parse_date(raw)?;
    let question = if inclusive {
        format!("Remove every date from {date} on?")
    } else {
        format!("Remove every date after {date}?")
    };
    if !ctx.ask(&question) {
        return Ok(());
    }

    let removed = tracker.clear_dates_after(date, inclusive);
    ctx.save(tracker)?;
    report_removed(tracker, removed, ctx)
}

fn report_removed(
    tracker: &PeriodTracker,
    removed: usize,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    if ctx.cli.json {
        println!("{}", removed_json(tracker, removed)?);
    } else {
        println!("Removed {removed} date{}.", plural(removed));
    }
    Ok(())
}

fn handle_forecast(
    tracker: &mut PeriodTracker,
    from: Option<&str>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let span = tracker.span().ok_or(AppError::SpanNotConfigured)?;

    let generated = match from {
        Some(raw) => {
            let from = parse_date(raw)?;
            if !ctx.ask(&format!(
                "Replace every date after {from} with {FORECAST_COUNT} new forecasts?"
            )) {
                return Ok(());
            }
            tracker.clear_dates_after(from, false);
            tracker.regenerate_forecast(from, span)
        }
        None => {
            let last = tracker.last_date().ok_or(AppError::NoDates)?;
            if !ctx.ask(&format!("Add {FORECAST_COUNT} forecast dates after {last}?")) {
                return Ok(());
            }
            tracker.extend_forecast()?
        }
    };
    ctx.save(tracker)?;

    if ctx.cli.json {
        println!("{}", change_json(tracker, "forecast", &generated)?);
    } else {
        match (generated.first(), generated.last()) {
            (Some(first), Some(last)) => println!(
                "Forecast {} date{} every {span} days, {first} to {last}.",
                generated.len(),
                plural(generated.len())
            ),
            _ => println!("No forecast dates could be generated."),
        }
    }
    Ok(())
}

fn handle_span(
    tracker: &mut PeriodTracker,
    days: Option<&str>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let Some(raw) = days else {
        if ctx.cli.json {
            println!("{}", serde_json::json!({ "span": tracker.span().map(Span::days) }));
        } else {
            match tracker.span() {
                Some(span) => println!("{span}"),
                None => println!("not set"),
            }
        }
        return Ok(());
    };

    let span: Span = raw.parse()?;
    tracker.set_span(Some(span));
    ctx.save(tracker)?;
    tracing::debug!(span = span.days(), "span updated");

    if ctx.cli.json {
        println!("{}", serde_json::json!({ "span": span.days() }));
    } else {
        println!("Span set to {span} days.");
    }
    Ok(())
}

/// Reset tolerates a corrupt state file so the user can always start over
fn handle_reset(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let mut tracker = match ctx.store.load() {
        Ok(loaded) => loaded.tracker,
        Err(AppError::CorruptState { path, source }) => {
            tracing::warn!(path = %path.display(), error = %source, "discarding corrupt state");
            PeriodTracker::new(None)
        }
        Err(e) => return Err(e),
    };

    let count = tracker.dates().len();
    if !ctx.ask(&format!("Delete all {count} recorded date{}?", plural(count))) {
        return Ok(());
    }
    tracker.reset();
    ctx.save(&tracker)?;

    if ctx.cli.json {
        println!("{}", tracker_json(&tracker)?);
    } else {
        println!("All dates removed.");
    }
    Ok(())
}

/// Load state, run one command, and persist the result
pub(crate) fn run(mut cli: Cli, config: &Config) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let store = Store::locate(cli.data_file.as_deref(), config.data_file.as_deref())?;
    let command = cli.command.take().unwrap_or_default();
    tracing::debug!(path = %store.path().display(), ?command, "running command");

    let ctx = CommandContext {
        cli: &cli,
        store: &store,
        today: timezone.today(),
    };

    if matches!(command, Commands::Reset) {
        return handle_reset(&ctx);
    }

    let Loaded {
        mut tracker,
        first_run,
    } = store.load()?;
    if first_run {
        eprintln!("{FIRST_RUN_NOTICE}");
        ctx.save(&tracker)?;
    }

    match command {
        Commands::Show { month } => handle_show(&tracker, month.as_deref(), &ctx),
        Commands::List { since, until } => {
            handle_list(&tracker, since.as_deref(), until.as_deref(), &ctx)
        }
        Commands::Last => handle_last(&tracker, &ctx),
        Commands::Add { date } => handle_add(&mut tracker, &date, &ctx),
        Commands::Remove { date, later } => handle_remove(&mut tracker, &date, later, &ctx),
        Commands::Clear { date, inclusive } => handle_clear(&mut tracker, &date, inclusive, &ctx),
        Commands::Forecast { from } => handle_forecast(&mut tracker, from.as_deref(), &ctx),
        Commands::Span { days } => handle_span(&mut tracker, days.as_deref(), &ctx),
        Commands::Reset => handle_reset(&ctx),
    }
}
