use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use digest_core::Tab;
use digest_engine::{FetchSettings, LoaderSettings};
use log::LevelFilter;
use url::Url;

/// Fetch the daily digest and keep a rendered page in sync with the
/// selection typed on stdin (`tab apps`, `date 2024-01-02`, `quit`).
#[derive(Debug, Parser)]
#[command(name = "digest_viewer", version)]
pub struct Args {
    /// Page location; `data/digest.json` is resolved against it.
    #[arg(long, value_name = "URL")]
    pub base_url: Url,

    /// Directory the rendered `index.html` is written to.
    #[arg(long, value_name = "DIR", default_value = "output")]
    pub out: PathBuf,

    /// Tab to show once the digest is loaded.
    #[arg(long)]
    pub tab: Option<Tab>,

    /// Date to show once the digest is loaded (defaults to the newest).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    /// Render once after loading and exit instead of reading stdin.
    #[arg(long)]
    pub once: bool,

    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Delay before the single retry of a failed load.
    #[arg(long, value_name = "MS", default_value_t = 800)]
    pub retry_delay_ms: u64,

    #[arg(long, value_name = "SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl Args {
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..FetchSettings::default()
        }
    }

    pub fn loader_settings(&self) -> LoaderSettings {
        LoaderSettings {
            retry_delay: Duration::from_millis(self.retry_delay_ms),
            ..LoaderSettings::default()
        }
    }
}
