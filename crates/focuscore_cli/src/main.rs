//! FocusCore command-line entry point.
//!
//! # Responsibility
//! - Wire configuration, logging and the on-disk store to `focuscore_core`.
//! - Print holidays and calendar events as plain text.
//! - Export/import the user's data snapshot.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use focuscore_core::db::{open_db, Connection};
use focuscore_core::{
    build_month_events, default_config_path, default_log_level, events_for_day, get_holidays,
    init_logging, sort_day_events, AppConfig, AppStore, CalendarEvent, CalendarView,
    SqliteKvRepository, YearMonth,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "focuscore", version, about = "Personal planner: tasks, routines, holidays")]
struct Cli {
    /// Config file; defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List national holidays of a year.
    Holidays {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Show calendar events of a month, or of one day.
    Month {
        /// Month as YYYY-MM; defaults to the current month.
        #[arg(long)]
        month: Option<YearMonth>,
        /// Single day as YYYY-MM-DD.
        #[arg(long)]
        day: Option<NaiveDate>,
    },
    /// Write all stored data of the configured user as JSON.
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Restore a snapshot written by `export`.
    Import { path: PathBuf },
    /// Print the core version.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match cli.config.or_else(default_config_path) {
        Some(path) => AppConfig::load_or_default(path)?,
        None => AppConfig::default(),
    };
    start_logging(&config);

    let today = Local::now().date_naive();
    match cli.command {
        Command::Version => {
            println!("focuscore_core version={}", focuscore_core::core_version());
        }
        Command::Holidays { year } => {
            let year = year.unwrap_or_else(|| YearMonth::of(today).year());
            let mut holidays = get_holidays(year);
            holidays.sort_by_key(|holiday| holiday.date);
            for holiday in holidays {
                println!("{year}-{}  {}", holiday.date, holiday.name);
            }
        }
        Command::Month { month, day } => {
            let conn = open_store(&config)?;
            let store = AppStore::new(SqliteKvRepository::new(&conn), config.user_id.as_str());
            let tasks = store.load_tasks()?;
            let routines = store.load_routines()?;

            let mut view = CalendarView::new(today);
            if let Some(month) = month {
                view.show_month(month);
            }
            if let Some(day) = day {
                view.select(day);
                if let Some(holiday) = view.selected_holiday() {
                    println!("Feriado: {}", holiday.name);
                }
                for event in view.selected_day_events(&tasks, &routines) {
                    println!("{}", format_event(&event));
                }
                return Ok(());
            }

            let displayed = view.displayed_month();
            let events = build_month_events(displayed, &tasks, &routines, view.holidays());
            for date in displayed.days() {
                let mut day_events = events_for_day(&events, date);
                if day_events.is_empty() {
                    continue;
                }
                sort_day_events(&mut day_events);
                println!("{date}");
                for event in &day_events {
                    println!("  {}", format_event(event));
                }
            }
        }
        Command::Export { output } => {
            let conn = open_store(&config)?;
            let store = AppStore::new(SqliteKvRepository::new(&conn), config.user_id.as_str());
            let snapshot = store.export_snapshot()?;
            match output {
                Some(path) => std::fs::write(path, snapshot)?,
                None => println!("{snapshot}"),
            }
        }
        Command::Import { path } => {
            let conn = open_store(&config)?;
            let store = AppStore::new(SqliteKvRepository::new(&conn), config.user_id.as_str());
            let raw = std::fs::read_to_string(&path)?;
            let written = store.restore_snapshot(&raw)?;
            println!("restored {written} entries");
        }
    }
    Ok(())
}

fn start_logging(config: &AppConfig) {
    let Some(log_dir) = config.resolved_log_dir() else {
        return;
    };
    let level = config.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
        return;
    }
    info!("event=cli_start module=cli status=ok");
}

fn open_store(config: &AppConfig) -> Result<Connection, Box<dyn Error>> {
    let path = config
        .resolved_database_path()
        .ok_or("no database path configured and no platform data directory found")?;
    Ok(open_db(path)?)
}

fn format_event(event: &CalendarEvent<'_>) -> String {
    let time = event
        .time
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string());
    let status = match event.completed {
        Some(true) => " [x]",
        Some(false) => " [ ]",
        None => "",
    };
    let priority = event
        .priority
        .map(|priority| format!(" ({})", priority.as_str()))
        .unwrap_or_default();
    format!(
        "{time} {:<8}{status} {}{priority}",
        event.kind.as_str(),
        event.title
    )
}
