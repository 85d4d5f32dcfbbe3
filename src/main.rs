use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use log::{error, info};
use seahorse::error::FlagError;
use seahorse::{App, Command, Context, Flag, FlagType};

use work_hours::calculator::{DateRangeRequest, ManualSumRequest};
use work_hours::config::Config;
use work_hours::export::{write_document, write_spreadsheet, DocumentOptions};
use work_hours::history::HistoryStore;
use work_hours::time::{Date, TimeSpan, WeekDaySet};
use work_hours::{record_date_range, record_manual_sum};

const DEFAULT_HISTORY_FILE: &str = "history.json";

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run();
}

/// Runs a fallible action and turns its error into an error message and a
/// non-zero exit code.
fn exit_on_error(context: &Context, action: fn(&Context) -> anyhow::Result<()>) {
    if let Err(e) = action(context) {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

fn required_string_flag(context: &Context, name: &str) -> anyhow::Result<String> {
    context
        .string_flag(name)
        .map_err(|_| anyhow::anyhow!("missing required flag \"{}\"", name))
}

/// Reads an optional numeric flag. An absent flag is fine, a flag with a
/// value that is not a number is an error and must never be replaced by a
/// default behind the user's back.
fn optional_int_flag(context: &Context, name: &str) -> anyhow::Result<Option<isize>> {
    match context.int_flag(name) {
        Ok(value) => Ok(Some(value)),
        Err(FlagError::NotFound | FlagError::Undefined) => Ok(None),
        Err(_) => anyhow::bail!("flag \"{}\" expects a whole number", name),
    }
}

fn optional_float_flag(context: &Context, name: &str) -> anyhow::Result<Option<f64>> {
    match context.float_flag(name) {
        Ok(value) => Ok(Some(value)),
        Err(FlagError::NotFound | FlagError::Undefined) => Ok(None),
        Err(_) => anyhow::bail!("flag \"{}\" expects a number", name),
    }
}

fn load_config(context: &Context) -> anyhow::Result<Config> {
    match context.string_flag("config") {
        Ok(path) => Config::from_toml_file(path),
        Err(_) => Ok(Config::default()),
    }
}

fn history_path(context: &Context) -> PathBuf {
    context
        .string_flag("history")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_HISTORY_FILE))
}

fn load_store(path: &PathBuf) -> anyhow::Result<HistoryStore> {
    if !path.exists() {
        return Ok(HistoryStore::new());
    }

    info!("restoring history from: {}", path.display());
    Ok(HistoryStore::from_json(&fs::read_to_string(path)?)?)
}

fn save_store(path: &PathBuf, store: &HistoryStore) -> anyhow::Result<()> {
    fs::write(path, store.to_json()?)?;

    Ok(())
}

/// The hours per day to calculate with, in order of precedence: a custom
/// daily schedule (`--from`/`--to`), an explicit `--hours` value, the
/// configured default.
fn hours_per_day(context: &Context, config: &Config) -> anyhow::Result<f64> {
    match (context.string_flag("from").ok(), context.string_flag("to").ok()) {
        (Some(from), Some(to)) => {
            Ok(TimeSpan::new(from.parse()?, to.parse()?).hours_per_day())
        }
        (None, None) => Ok(optional_float_flag(context, "hours")?
            .unwrap_or_else(|| config.hours_per_day())),
        _ => anyhow::bail!("flags \"from\" and \"to\" must be given together"),
    }
}

fn week_days(context: &Context, config: &Config) -> anyhow::Result<WeekDaySet> {
    match context.string_flag("days") {
        Ok(days) => Ok(days
            .split(',')
            .map(str::parse)
            .collect::<Result<WeekDaySet, _>>()?),
        Err(_) => Ok(config.week_days()),
    }
}

fn try_range(context: &Context) -> anyhow::Result<()> {
    let config = load_config(context)?;

    let start: Date = required_string_flag(context, "start")?.parse()?;
    let end: Date = required_string_flag(context, "end")?.parse()?;

    let vacation_days = optional_int_flag(context, "vacation")?.unwrap_or(0);
    anyhow::ensure!(
        vacation_days >= 0,
        "vacation days must not be negative, got {}",
        vacation_days
    );

    let request = DateRangeRequest::new(start, end, hours_per_day(context, &config)?)
        .with_week_days(week_days(context, &config)?)
        .with_vacation_days(vacation_days as u32);

    let path = history_path(context);
    let mut store = load_store(&path)?;

    let result = record_date_range(&request, &mut store)?;

    println!("Work days:       {}", result.work_days().unwrap_or_default());
    println!("Total hours:     {:.2} h", result.total_hours());

    save_store(&path, &store)
}

fn try_sum(context: &Context) -> anyhow::Result<()> {
    let config = load_config(context)?;

    let days = optional_int_flag(context, "days")?.unwrap_or(0);
    let minutes = optional_int_flag(context, "minutes")?.unwrap_or(0);
    anyhow::ensure!(
        days >= 0 && minutes >= 0,
        "days and minutes must not be negative"
    );

    let hours_per_day =
        optional_float_flag(context, "hours")?.unwrap_or_else(|| config.hours_per_day());
    let request = ManualSumRequest::new(days as u32, minutes as u32, hours_per_day);

    let path = history_path(context);
    let mut store = load_store(&path)?;

    let result = record_manual_sum(&request, &mut store)?;

    println!("Total hours:     {:.2} h", result.total_hours());
    println!("Equivalent days: ~{}", result.equivalent_days());

    save_store(&path, &store)
}

fn try_history(context: &Context) -> anyhow::Result<()> {
    let store = load_store(&history_path(context))?;

    let mut exported = false;

    if let Ok(path) = context.string_flag("spreadsheet") {
        info!("exporting history to spreadsheet: {}", path);
        write_spreadsheet(store.all(), fs::File::create(path)?)?;
        exported = true;
    }

    if let Ok(path) = context.string_flag("document") {
        info!("exporting history to document: {}", path);
        write_document(store.all(), &DocumentOptions::default(), fs::File::create(path)?)?;
        exported = true;
    }

    if exported {
        return Ok(());
    }

    if store.is_empty() {
        println!("No calculations recorded yet.");
        return Ok(());
    }

    for record in store.all() {
        println!("{} ({}): {}", record.kind(), record.timestamp(), record.summary());
    }

    Ok(())
}

fn range_action(context: &Context) {
    exit_on_error(context, try_range);
}

fn sum_action(context: &Context) {
    exit_on_error(context, try_sum);
}

fn history_action(context: &Context) {
    exit_on_error(context, try_history);
}

fn config_flag() -> Flag {
    Flag::new("config", FlagType::String).description("Path to the config file.")
}

fn history_flag() -> Flag {
    Flag::new("history", FlagType::String)
        .description("Path to the history file. Defaults to \"history.json\".")
}

fn run() {
    let args: Vec<String> = env::args().collect();

    let range_command = Command::new("range")
        .usage(format!("{} range [flags]", args[0]))
        .description("Calculates the worked hours in an inclusive date range.")
        .flag(
            Flag::new("start", FlagType::String)
                .description("First day of the range (YYYY-MM-DD)."),
        )
        .flag(Flag::new("end", FlagType::String).description("Last day of the range (YYYY-MM-DD)."))
        .flag(
            Flag::new("vacation", FlagType::Int)
                .description("Vacation days to subtract from the work day count."),
        )
        .flag(Flag::new("hours", FlagType::Float).description("Hours per work day."))
        .flag(
            Flag::new("from", FlagType::String)
                .description("Daily schedule start (HH:MM), replaces \"hours\"."),
        )
        .flag(
            Flag::new("to", FlagType::String)
                .description("Daily schedule end (HH:MM), replaces \"hours\"."),
        )
        .flag(
            Flag::new("days", FlagType::String)
                .description("Week days that count as work days, e.g. \"Monday,Tuesday\"."),
        )
        .flag(config_flag())
        .flag(history_flag())
        .action(range_action);

    let sum_command = Command::new("sum")
        .usage(format!("{} sum [flags]", args[0]))
        .description("Sums up manually entered days and minutes.")
        .flag(Flag::new("days", FlagType::Int).description("Number of work days to add."))
        .flag(Flag::new("minutes", FlagType::Int).description("Number of minutes to add."))
        .flag(Flag::new("hours", FlagType::Float).description("Hours per work day."))
        .flag(config_flag())
        .flag(history_flag())
        .action(sum_action);

    let history_command = Command::new("history")
        .usage(format!("{} history [flags]", args[0]))
        .description("Shows or exports the recorded calculations.")
        .flag(
            Flag::new("spreadsheet", FlagType::String)
                .description("Exports the history as CSV to the given path."),
        )
        .flag(
            Flag::new("document", FlagType::String)
                .description("Exports the history as a paginated document to the given path."),
        )
        .flag(history_flag())
        .action(history_action);

    App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [command] [flags]", args[0]))
        .command(range_command)
        .command(sum_command)
        .command(history_command)
        .run(args);
}
