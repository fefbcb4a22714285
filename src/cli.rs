// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::{
    config::consts::*,
    config::options::{AppOptions, ExportFormat, Locale, WaitPolicy},
    error::Result,
    file,
    progress::Progress,
    runner::{self, ScrapeContext},
};

#[derive(Debug, Parser)]
#[command(name = "wattpad-mate", version, about = "Scrape a Wattpad listing into an author table")]
pub struct Args {
    /// Listing page to harvest
    #[arg(long, default_value = DEFAULT_LISTING_URL)]
    pub url: String,

    #[arg(long, default_value_t = DEFAULT_MIN_VISITS)]
    pub min_visits: f64,
    #[arg(long, default_value_t = DEFAULT_MAX_VISITS)]
    pub max_visits: f64,
    #[arg(long, default_value_t = DEFAULT_MIN_VOTES)]
    pub min_votes: f64,
    #[arg(long, default_value_t = DEFAULT_MAX_VOTES)]
    pub max_votes: f64,

    /// Stop scrolling once this many authors are loaded
    #[arg(long, default_value_t = DEFAULT_LIMIT_USERS as u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit_users: u64,

    /// Seconds to wait after each scroll
    #[arg(long, default_value_t = SCROLL_PAUSE.as_secs_f64(), value_parser = parse_secs)]
    pub pause: f64,

    /// Poll the page height instead of sleeping a fixed pause (bounded by --max-wait)
    #[arg(long)]
    pub until_growth: bool,

    #[arg(long, default_value_t = GROWTH_MAX_WAIT.as_secs_f64(), value_parser = parse_secs)]
    pub max_wait: f64,

    /// Column names
    #[arg(long, value_enum, default_value_t = LocaleArg::En)]
    pub locale: LocaleArg,

    /// Write to a file instead of printing TSV to stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    #[arg(long)]
    pub no_headers: bool,

    /// `name,male,female` CSV to use instead of the bundled name table
    #[arg(long)]
    pub names: Option<PathBuf>,

    #[arg(long, default_value = LOG_FILE)]
    pub log_file: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LocaleArg {
    En,
    Es,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
    Html,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.scrape.url = self.url.clone();
        opts.scrape.wait = if self.until_growth {
            WaitPolicy::UntilGrowth {
                poll: GROWTH_POLL,
                max_wait: secs(self.max_wait),
            }
        } else {
            WaitPolicy::Fixed(secs(self.pause))
        };

        opts.filter.min_visits = self.min_visits;
        opts.filter.max_visits = self.max_visits;
        opts.filter.min_votes = self.min_votes;
        opts.filter.max_votes = self.max_votes;
        opts.filter.limit_users = self.limit_users as usize;

        opts.locale = match self.locale {
            LocaleArg::En => Locale::En,
            LocaleArg::Es => Locale::Es,
        };
        opts.export.format = match self.format {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
            FormatArg::Html => ExportFormat::Html,
        };
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

/// Seconds in `0..=MAX_WAIT_SECS`.
fn parse_secs(s: &str) -> std::result::Result<f64, String> {
    let v: f64 = s.trim().parse().map_err(|_| format!("{s:?} is not a number of seconds"))?;
    if !v.is_finite() || !(0.0..=MAX_WAIT_SECS).contains(&v) {
        return Err(format!("expected 0 to {MAX_WAIT_SECS} seconds, got {s}"));
    }
    Ok(v)
}

/// Clamped so hand-built `Args` cannot panic the conversion.
fn secs(v: f64) -> Duration {
    Duration::try_from_secs_f64(v.clamp(0.0, MAX_WAIT_SECS)).unwrap_or(Duration::ZERO)
}

/// Status lines on stderr so stdout stays clean for the table.
struct StderrProgress {
    done: usize,
    total: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.done = 0;
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        eprintln!("Fetched {} ({}/{})", label, self.done, self.total);
    }
}

pub fn run(args: Args) -> Result<()> {
    crate::log::init(&args.log_file)?;
    let opts = args.to_options();

    let ctx = ScrapeContext::live_with_names(args.names.as_deref())?;
    let mut progress = StderrProgress { done: 0, total: 0 };
    let table = runner::run(&ctx, &opts, &mut progress)?;

    if args.out.is_some() {
        let path = file::export_table(&opts.export, opts.locale, &table)?;
        eprintln!("Wrote {} rows to {}", table.len(), path.display());
    } else {
        print!("{}", file::render(&table, opts.locale, ExportFormat::Tsv, opts.export.include_headers));
    }
    Ok(())
}
