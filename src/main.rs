use anyhow::Context;
use chrono::NaiveDate;
use clap::{
    Parser,
    Subcommand
};
use tracing_subscriber::EnvFilter;

use bizday::configuration::Configuration;
use bizday::time::calendar::holidaycalendar::HolidayCalendar;
use bizday::time::traversal::businessdaycounter::count_business_days;
use bizday::time::traversal::businessdaystepper::{
    business_day_offset,
    parse_day_count
};
use bizday::time::traversal::traversaldirection::TraversalDirection;
use bizday::time::utility::{
    from_date_key,
    weekday_name
};

#[derive(Parser)]
#[command(name = "bizday")]
#[command(about = "US federal business-day calculator.")]
struct CommandLine {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands
}

#[derive(Subcommand)]
enum Commands {
    /// Move N business days from a date
    Add {
        date: String,
        #[arg(allow_hyphen_values = true)]
        count: String,
        #[arg(long)]
        backward: bool,
        /// Count the start date when it is a business day
        #[arg(long, conflicts_with = "exclude_start")]
        include_start: bool,
        /// Never count the start date, whatever the configuration says
        #[arg(long)]
        exclude_start: bool
    },
    /// Count business days between two dates
    Between {
        from: String,
        to: String,
        #[arg(long)]
        include_start: bool
    },
    /// List the observed federal holidays of a year
    Holidays {
        year: i32
    },
    /// Say whether a date is a business day
    Classify {
        date: String
    }
}

fn parse_date(text: &str) -> anyhow::Result<NaiveDate> {
    from_date_key(text.trim()).with_context(|| format!("invalid date '{}'", text))
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse();
    init_logging();

    let configuration = match &commands.config {
        Some(path) => Configuration::from_reader(path)
            .with_context(|| format!("loading configuration from {}", path))?,
        None => Configuration::new()
    };
    let index = configuration.build_holiday_index();

    match commands.command {
        Commands::Add { date, count, backward, include_start, exclude_start } => {
            let start = parse_date(&date)?;
            let n = parse_day_count(&count)?;
            let direction = if backward {
                TraversalDirection::Backward
            } else {
                TraversalDirection::Forward
            };
            let explicit = match (include_start, exclude_start) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None
            };
            let policy = configuration.resolve_start_inclusion_policy(explicit);
            let offset = business_day_offset(start, n, direction, policy, &index)?;
            println!("{} ({}): {}", offset.date(), weekday_name(offset.date()), offset.classification());
        }
        Commands::Between { from, to, include_start } => {
            let a = parse_date(&from)?;
            let b = parse_date(&to)?;
            println!("{} business days", count_business_days(a, b, include_start, &index));
        }
        Commands::Holidays { year } => {
            for (d, holiday) in index.holidays_in_year(year) {
                println!("{} ({}): {}", d, weekday_name(d), holiday);
            }
        }
        Commands::Classify { date } => {
            let d = parse_date(&date)?;
            println!("{} ({}): {}", d, weekday_name(d), index.classify(d));
        }
    }
    Ok(())
}
