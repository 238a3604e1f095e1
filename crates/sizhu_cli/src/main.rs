use clap::{Parser, Subcommand, ValueEnum};
use sizhu_calendar::{CalendarProvider, DayInfo, LocalCalendar, RemoteCalendar};
use sizhu_core::{BaziChart, BirthInput, Gender, compute_chart};

#[derive(Parser)]
#[command(name = "sizhu", about = "Four-pillar (BaZi) chart CLI")]
struct Cli {
    /// Base URL of a remote calendar service; local perpetual calendar
    /// when omitted. Chosen once at startup, never per request.
    #[arg(long, global = true)]
    remote_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the four-pillar chart for a birth instant
    Chart {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        day: u32,
        /// Birth hour 0-23; ignored with --time-unknown
        #[arg(long, default_value = "12")]
        hour: u32,
        #[arg(long, value_enum)]
        gender: GenderArg,
        /// Birth time unknown: substitute noon and flag the chart
        #[arg(long)]
        time_unknown: bool,
        /// Emit the chart as JSON in the report-service shape
        #[arg(long)]
        json: bool,
    },
    /// Resolve the day pillar (and lunar date) of one Gregorian date
    Day {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        day: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    // Deployment-time backend choice; everything downstream is agnostic.
    let provider: Box<dyn CalendarProvider> = match &cli.remote_url {
        Some(url) => Box::new(RemoteCalendar::new(url.clone())),
        None => Box::new(LocalCalendar::new()),
    };

    match cli.command {
        Commands::Chart {
            year,
            month,
            day,
            hour,
            gender,
            time_unknown,
            json,
        } => {
            let input = BirthInput {
                year,
                month,
                day,
                hour,
                gender: gender.into(),
                time_unknown,
            };
            let chart = match compute_chart(provider.as_ref(), &input) {
                Ok(chart) => chart,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            if json {
                match serde_json::to_string_pretty(&chart) {
                    Ok(out) => println!("{out}"),
                    Err(e) => {
                        eprintln!("JSON encoding failed: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_chart(&chart);
            }
        }

        Commands::Day { year, month, day } => {
            match provider.resolve_day(year, month, day) {
                Ok(info) => print_day(&info),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn print_chart(chart: &BaziChart) {
    println!(
        "Pillars: {} {} {} {}",
        chart.year, chart.month, chart.day, chart.hour
    );
    if let Some(lunar) = &chart.lunar {
        println!("Lunar:   {}{}{}", lunar.year, lunar.month, lunar.day);
    }
    let tally: Vec<String> = chart
        .tally
        .iter()
        .map(|(e, n)| format!("{} {n}", e.symbol()))
        .collect();
    println!("Wuxing:  {}", tally.join("  "));
    println!(
        "Day master: {} ({})",
        chart.day_master.symbol(),
        chart.day_master.name()
    );
    println!(
        "Favorable:  {} ({})",
        chart.favorable.symbol(),
        chart.favorable.name()
    );
    if chart.time_unknown {
        println!("Note: birth time unknown, hour pillar assumes noon");
    }
}

fn print_day(info: &DayInfo) {
    println!("Day pillar: {}", info.pillar);
    if let Some(lunar) = &info.lunar {
        println!("Lunar:      {}{}{}", lunar.year, lunar.month, lunar.day);
    }
}
