use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bodax_core::models::Team;
use bodax_core::schedule::MatchFilter;
use bodax_core::seed::sample_snapshot;
use bodax_core::{AppConfig, JsonSnapshotSource, MatchSource, StaticSource};

use commands::admin::{MatchInput, PlayerInput};

mod commands;

#[derive(Parser)]
#[command(name = "bodax")]
#[command(author, version, about = "Bodax Gaming esports site in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read matches and players from this snapshot instead of the configured one
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Show built-in sample data instead of reading a snapshot
    #[arg(long, global = true)]
    demo: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// List matches
    Matches {
        /// all, upcoming or past
        #[arg(short, long, default_value = "all")]
        filter: MatchFilter,
    },
    /// Upcoming games and filtered recent results
    Schedule {
        #[arg(long)]
        year: Option<i32>,
        /// Month number (1-12)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Only results from the last N days
        #[arg(long)]
        days: Option<u32>,
        /// Number of results to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a team roster (main, vantage, game-changers)
    Roster {
        team: Team,
    },
    /// Every player of every team, by name
    Players,
    /// Time left until the next match
    Countdown {
        /// Only matches of this team
        #[arg(short, long)]
        team: Option<Team>,
    },
    /// Write the sample snapshot
    Seed {
        /// Overwrite an existing snapshot
        #[arg(long)]
        force: bool,
    },
    /// Cookie consent stored in the preferences file
    Consent {
        #[command(subcommand)]
        action: ConsentAction,
    },
    /// Print the configuration file path and the effective configuration
    Config,
    /// Edit matches and players in the snapshot
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Add or delete matches
    Match {
        #[command(subcommand)]
        action: MatchAction,
    },
    /// Add or delete players
    Player {
        #[command(subcommand)]
        action: PlayerAction,
    },
}

#[derive(Subcommand)]
enum MatchAction {
    Add(MatchArgs),
    Delete { id: String },
}

#[derive(Subcommand)]
enum PlayerAction {
    Add(PlayerArgs),
    Delete { id: String },
}

#[derive(Args)]
struct MatchArgs {
    #[arg(long)]
    opponent: String,
    #[arg(long, default_value = "")]
    tournament: String,
    /// Start time in UTC, `YYYY-MM-DD HH:MM` or RFC 3339
    #[arg(long)]
    date: Option<String>,
    #[arg(long, default_value_t = 0)]
    our_score: u32,
    #[arg(long, default_value_t = 0)]
    opponent_score: u32,
    /// main, vantage or game-changers
    #[arg(long)]
    team: Option<String>,
    #[arg(long)]
    stream: Option<String>,
    #[arg(long)]
    vlr: Option<String>,
    #[arg(long)]
    caster: Option<String>,
    #[arg(long)]
    logo: Option<String>,
}

impl From<MatchArgs> for MatchInput {
    fn from(args: MatchArgs) -> Self {
        Self {
            opponent: args.opponent,
            tournament: args.tournament,
            date: args.date,
            our_score: args.our_score,
            opponent_score: args.opponent_score,
            team: args.team,
            stream_link: args.stream,
            vlr_link: args.vlr,
            caster: args.caster,
            opponent_logo: args.logo,
        }
    }
}

#[derive(Args)]
struct PlayerArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    ign: String,
    #[arg(long)]
    role: String,
    /// main, vantage or game-changers
    #[arg(long)]
    team: Option<String>,
    #[arg(long, default_value = "")]
    bio: String,
    #[arg(long)]
    photo: Option<String>,
    #[arg(long)]
    twitter: Option<String>,
    #[arg(long)]
    twitch: Option<String>,
}

impl From<PlayerArgs> for PlayerInput {
    fn from(args: PlayerArgs) -> Self {
        Self {
            full_name: args.name,
            ign: args.ign,
            role: args.role,
            team: args.team,
            bio: args.bio,
            photo_url: args.photo,
            twitter: args.twitter,
            twitch: args.twitch,
        }
    }
}

#[derive(Subcommand)]
enum ConsentAction {
    /// Show the stored answer
    Show,
    /// Accept all cookies
    Accept,
    /// Essential cookies only
    Decline,
    /// Forget the answer
    Reset,
}

/// Log to stderr, or to the log file while the TUI owns the terminal
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        std::fs::create_dir_all(config.data_dir())?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    let is_tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, is_tui)?;

    let snapshot_path = cli.snapshot.unwrap_or_else(|| config.snapshot_path());
    let source: Arc<dyn MatchSource> = if cli.demo {
        Arc::new(StaticSource::new(sample_snapshot(Utc::now())))
    } else {
        Arc::new(JsonSnapshotSource::new(&snapshot_path))
    };

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, source).await,
        Some(Commands::Matches { filter }) => commands::matches::run(source.as_ref(), filter).await,
        Some(Commands::Schedule {
            year,
            month,
            days,
            limit,
        }) => {
            let limit = limit.unwrap_or(config.schedule.default_limit);
            commands::schedule::run(source.as_ref(), year, month, days, limit).await
        }
        Some(Commands::Roster { team }) => commands::roster::run(source.as_ref(), team).await,
        Some(Commands::Players) => commands::players::run(source.as_ref()).await,
        Some(Commands::Countdown { team }) => commands::countdown::run(source.as_ref(), team).await,
        Some(Commands::Seed { force }) => {
            commands::refuse_in_demo(cli.demo, "seed")?;
            commands::seed::run(&snapshot_path, force).await
        }
        Some(Commands::Consent { action }) => match action {
            ConsentAction::Show => commands::consent::show(config),
            ConsentAction::Accept => commands::consent::answer(config, true),
            ConsentAction::Decline => commands::consent::answer(config, false),
            ConsentAction::Reset => commands::consent::reset(config),
        },
        Some(Commands::Config) => commands::config::run(&config),
        Some(Commands::Admin { action }) => {
            commands::refuse_in_demo(cli.demo, "admin")?;
            match action {
                AdminAction::Match { action: MatchAction::Add(args) } => {
                    commands::admin::add_match(&snapshot_path, args.into()).await
                }
                AdminAction::Match { action: MatchAction::Delete { id } } => {
                    commands::admin::delete_match(&snapshot_path, &id).await
                }
                AdminAction::Player { action: PlayerAction::Add(args) } => {
                    commands::admin::add_player(&snapshot_path, args.into()).await
                }
                AdminAction::Player { action: PlayerAction::Delete { id } } => {
                    commands::admin::delete_player(&snapshot_path, &id).await
                }
            }
        }
    }
}
