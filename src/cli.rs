// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Drives the command-line program.

use crate::conf::{ConfigError, DEFAULT_CONFIG_PATH, Settings};
use crate::http::HTTPError;
use crate::reddit::auth::Credentials;
use crate::reddit::client::{self, DEFAULT_FETCH_LIMIT, Posts};
use crate::reddit::demo::{DEMO_FORUM, DemoService};
use crate::reddit::service::{RedditService, Service, SortMode, is_valid_forum_name};
use crate::sentiment::{self, SentimentAnalyzer};
use crate::storage::{self, StorageError};
use crate::summary::TrendSummary;
use crate::thing::PostRecord;
use crate::view::Viewable;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::{LevelFilter, debug, info};
use std::path::PathBuf;
use thiserror::Error;

/// Forum read in live mode when none is given.
pub const DEFAULT_FORUM: &str = "Peptides";

/// An error that ends the program.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Posts could not be retrieved.
    #[error(transparent)]
    Client(#[from] client::Error),

    /// The Reddit API could not be reached or refused access.
    #[error(transparent)]
    Http(#[from] HTTPError),

    /// Posts or the trend summary could not be saved.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The subreddit name cannot be a subreddit.
    #[error("invalid subreddit name '{0}': use only letters, digits, and underscores, without the r/ prefix")]
    InvalidForum(String),
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Collects anonymized Reddit posts for trend research (read-only)", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    /// Use built-in sample data instead of the Reddit API
    #[arg(long, default_value_t = false)]
    demo: bool,

    /// Subreddit to read, without the r/ prefix
    #[arg(long, value_name = "NAME", default_value = DEFAULT_FORUM)]
    subreddit: String,

    /// Listing order: new, hot, top, or rising
    #[arg(long, value_name = "MODE", default_value = "new")]
    sort: String,

    /// Only fetch 'n' posts
    #[arg(short = 'n', long, default_value_t = DEFAULT_FETCH_LIMIT)]
    limit: usize,

    /// Configuration file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Print keyword, engagement, and sentiment trends after fetching
    #[arg(long, default_value_t = false)]
    analyze: bool,

    /// Append each post to the local record log
    #[arg(long, default_value_t = false)]
    save: bool,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity<InfoLevel> {
        self.verbosity
    }

    /// Path of the configuration file.
    pub fn config_path(&self) -> &PathBuf {
        &self.config
    }
}

/// Where posts come from.
#[derive(Debug)]
pub enum Mode {
    /// The Reddit API, using the given credentials.
    Live(Credentials),

    /// The built-in sample data.
    Demo,
}

/// Initializes the global logger.
///
/// Explicit `-v` or `-q` flags take precedence over the configured level,
/// which takes precedence over the default level, `info`. `RUST_LOG` can
/// still be used to tune individual modules.
pub fn init_logging(verbosity: &Verbosity<InfoLevel>, configured: Option<LevelFilter>) {
    let level = if verbosity.is_present() {
        verbosity.log_level_filter()
    } else {
        configured.unwrap_or(LevelFilter::Info)
    };

    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .try_init();
    if let Err(err) = result {
        debug!("logger already initialized: {err}");
    }
}

/// Runs the command-line program.
pub async fn run(config: Config) -> Result<(), Error> {
    let settings = Settings::load(config.config_path())?;
    init_logging(&config.verbosity(), settings.log_level());
    if settings.found() {
        debug!("Read settings from {}", settings.path().display());
    } else {
        debug!("No configuration file at {}; using defaults", settings.path().display());
    }
    settings.warn_ignored();
    Runner::new(config, settings)?.run().await
}

/// Runs the command-line program.
pub struct Runner {
    config: Config,
    settings: Settings,
    mode: Mode,
    sort: SortMode,
    analyzer: Option<Box<dyn SentimentAnalyzer>>,
}

impl Runner {
    /// Create a new program runner using the given `config` and `settings`.
    ///
    /// Returns an error with a helpful message if live mode is requested
    /// without credentials or with an invalid subreddit name.
    pub fn new(config: Config, settings: Settings) -> Result<Self, Error> {
        let mode = if config.demo {
            Mode::Demo
        } else if !is_valid_forum_name(&config.subreddit) {
            return Err(Error::InvalidForum(config.subreddit));
        } else {
            Mode::Live(settings.credentials()?)
        };
        let sort = SortMode::parse_lenient(&config.sort);
        let analyzer = config.analyze.then(sentiment::analyzer);
        Ok(Self {
            config,
            settings,
            mode,
            sort,
            analyzer,
        })
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Run the command-line program using its stored configuration options.
    pub async fn run(&self) -> Result<(), Error> {
        let posts = match &self.mode {
            Mode::Demo => {
                info!("Running in demo mode with sample data; no network requests are made");
                self.run_with(&DemoService, &[DEMO_FORUM]).await?
            }
            Mode::Live(credentials) => {
                let service = RedditService::connect(credentials).await?;
                self.run_with(&service, &[self.config.subreddit.as_str()])
                    .await?
            }
        };

        if let Some(analyzer) = &self.analyzer {
            self.run_analysis(&posts, analyzer.as_ref())?;
        }
        Ok(())
    }

    /// Fetches posts from each of `forums` through `service`, logging each
    /// one and saving it if requested.
    pub async fn run_with<S: Service>(
        &self,
        service: &S,
        forums: &[&str],
    ) -> Result<Vec<PostRecord>, Error> {
        let mut all_posts = Vec::new();
        for forum in forums {
            info!("--- Processing r/{forum} ---");
            let mut posts = Posts::new(service, *forum, self.sort, self.config.limit);
            let mut count = 0;
            while let Some(post) = posts.next().await {
                let post = post?;
                info!("{}", post.view());
                if self.config.save {
                    storage::save_post(&post, self.settings.storage_path())?;
                }
                count += 1;
                all_posts.push(post);
            }
            info!("Processed {count} posts from r/{forum}");
        }
        if self.config.save {
            info!(
                "Saved {} posts to {}",
                all_posts.len(),
                self.settings.storage_path().display()
            );
        }
        Ok(all_posts)
    }

    fn run_analysis(
        &self,
        posts: &[PostRecord],
        analyzer: &dyn SentimentAnalyzer,
    ) -> Result<(), Error> {
        let summary = TrendSummary::for_posts(posts, analyzer);
        println!("{}", summary.view());
        if let Some(output_dir) = self.settings.output_dir() {
            let path = storage::save_summary(&summary, output_dir)?;
            info!("Wrote trend summary to {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reddit::demo::demo_posts;
    use crate::test_utils::{FailingService, do_logging};
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;
    use temp_env::with_vars_unset;

    const ENV_VARS: [&str; 3] = [
        "TRENDWATCH_CLIENT_ID",
        "TRENDWATCH_CLIENT_SECRET",
        "TRENDWATCH_USER_AGENT",
    ];

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("trendwatch").chain(args.iter().copied())).unwrap()
    }

    fn demo_runner(args: &[&str], settings: &str) -> (Runner, TempDir) {
        do_logging();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, settings.replace("{dir}", &dir.path().display().to_string())).unwrap();
        let settings = Settings::load(&path).unwrap();
        let mut full_args = vec!["--demo"];
        full_args.extend_from_slice(args);
        (Runner::new(parse(&full_args), settings).unwrap(), dir)
    }

    #[test]
    fn it_has_a_valid_command_line() {
        Config::command().debug_assert();
    }

    #[test]
    fn it_has_defaults() {
        let config = parse(&[]);
        assert!(!config.demo);
        assert_eq!(config.subreddit, DEFAULT_FORUM);
        assert_eq!(config.sort, "new");
        assert_eq!(config.limit, DEFAULT_FETCH_LIMIT);
        assert_eq!(config.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(!config.analyze);
        assert!(!config.save);
        assert!(!config.verbosity().is_present());
    }

    #[test]
    fn it_parses_every_option() {
        let config = parse(&[
            "--demo",
            "--subreddit",
            "Nootropics",
            "--sort",
            "top",
            "-n",
            "25",
            "--config",
            "other.toml",
            "--analyze",
            "--save",
            "-v",
        ]);
        assert!(config.demo);
        assert_eq!(config.subreddit, "Nootropics");
        assert_eq!(config.sort, "top");
        assert_eq!(config.limit, 25);
        assert_eq!(config.config, PathBuf::from("other.toml"));
        assert!(config.analyze);
        assert!(config.save);
        assert_eq!(config.verbosity().log_level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn it_selects_demo_mode_without_credentials() {
        with_vars_unset(ENV_VARS, || {
            let settings = Settings::load("/nonexistent/config.toml").unwrap();
            let runner = Runner::new(parse(&["--demo"]), settings).unwrap();
            assert!(matches!(runner.mode(), Mode::Demo));
        });
    }

    #[test]
    fn it_requires_credentials_for_live_mode() {
        with_vars_unset(ENV_VARS, || {
            let settings = Settings::load("/nonexistent/config.toml").unwrap();
            let err = Runner::new(parse(&[]), settings).err().unwrap();
            assert!(matches!(err, Error::Config(ConfigError::NotFound(_))));
            assert!(err.to_string().contains("/nonexistent/config.toml"));
        });
    }

    #[test]
    fn it_rejects_invalid_forum_names_in_live_mode() {
        with_vars_unset(ENV_VARS, || {
            let settings = Settings::load("/nonexistent/config.toml").unwrap();
            let config = parse(&["--subreddit", "Peptides#x", "--sort", "top"]);
            let err = Runner::new(config, settings).err().unwrap();
            assert!(matches!(&err, Error::InvalidForum(name) if name == "Peptides#x"), "{err}");
        });
    }

    #[test]
    fn it_ignores_the_forum_name_in_demo_mode() {
        let (runner, _dir) = demo_runner(&["--subreddit", "Peptides#x"], "");
        assert!(matches!(runner.mode(), Mode::Demo));
    }

    #[test]
    fn it_tolerates_unknown_sort_modes() {
        let (runner, _dir) = demo_runner(&["--sort", "controversial"], "");
        assert_eq!(runner.sort, SortMode::New);
    }

    #[test]
    fn it_only_selects_an_analyzer_when_analyzing() {
        let (runner, _dir) = demo_runner(&[], "");
        assert!(runner.analyzer.is_none());
        let (runner, _dir) = demo_runner(&["--analyze"], "");
        assert!(runner.analyzer.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn it_processes_demo_posts() {
        let (runner, _dir) = demo_runner(&[], "");
        let posts = runner.run_with(&DemoService, &[DEMO_FORUM]).await.unwrap();
        assert_eq!(posts, demo_posts());
    }

    #[tokio::test(start_paused = true)]
    async fn it_respects_the_limit() {
        let (runner, _dir) = demo_runner(&["-n", "2"], "");
        let posts = runner.run_with(&DemoService, &[DEMO_FORUM]).await.unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn it_saves_posts_when_asked() {
        let (runner, dir) =
            demo_runner(&["--save"], "storage_path = \"{dir}/records/posts.jsonl\"\n");
        runner.run_with(&DemoService, &[DEMO_FORUM]).await.unwrap();
        let saved = storage::load_posts(dir.path().join("records/posts.jsonl")).unwrap();
        assert_eq!(saved, demo_posts());
    }

    #[tokio::test(start_paused = true)]
    async fn it_does_not_save_posts_by_default() {
        let (runner, dir) = demo_runner(&[], "storage_path = \"{dir}/posts.jsonl\"\n");
        runner.run_with(&DemoService, &[DEMO_FORUM]).await.unwrap();
        assert!(!dir.path().join("posts.jsonl").exists());
    }

    #[tokio::test(start_paused = true)]
    async fn it_propagates_service_errors() {
        let (runner, _dir) = demo_runner(&[], "");
        let result = runner.run_with(&FailingService, &[DEMO_FORUM]).await;
        assert!(matches!(result, Err(Error::Client(client::Error::Service(_)))));
    }

    #[tokio::test(start_paused = true)]
    async fn it_writes_the_trend_summary() {
        let (runner, dir) = demo_runner(&["--analyze"], "output_dir = \"{dir}/out\"\n");
        runner.run().await.unwrap();
        let summary = fs::read_to_string(dir.path().join("out").join(storage::SUMMARY_FILE_NAME)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&summary).unwrap();
        assert_eq!(value["metrics"]["total_posts"], 5);
    }
}
