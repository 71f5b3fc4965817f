use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use spin_client::{
    validate_webhook, Config, Language, ListType, PlayForFun, ShowSystems, SpinApiClient,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spin")]
#[command(about = "Spin gaming platform API CLI", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to ./config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Read SPIN_* environment variables instead of a config file
    #[arg(long, global = true)]
    env: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new player
    CreatePlayer {
        username: String,
        password: String,
        currency: String,
    },
    /// Look up an existing player
    PlayerExists { username: String, currency: String },
    /// List available games
    GameList {
        currency: String,
        /// Include provider system details
        #[arg(long)]
        show_systems: bool,
        /// Use the compact listing (list type 2)
        #[arg(long)]
        compact: bool,
        #[arg(long)]
        show_additional: bool,
    },
    /// Start a game session for a player
    Game {
        username: String,
        password: String,
        currency: String,
        gameid: String,
        #[arg(short, long, default_value = "en")]
        lang: Language,
        /// Launch in play-for-fun mode
        #[arg(long)]
        fun: bool,
    },
    /// Start a demo session
    Demo {
        gameid: String,
        currency: String,
        #[arg(short, long, default_value = "en")]
        lang: Language,
    },
    /// List a player's free rounds
    FreeRounds {
        username: String,
        password: String,
        currency: String,
    },
    /// Grant free rounds on a game
    AddFreeRounds {
        username: String,
        password: String,
        currency: String,
        gameid: String,
        freespins: u32,
        /// Bet level (0 to 6)
        bet_level: u8,
        valid_days: u32,
    },
    /// Delete a player's free rounds on a game
    DeleteFreeRounds {
        username: String,
        password: String,
        currency: String,
        gameid: String,
    },
    /// Delete all of a player's free rounds
    DeleteAllFreeRounds {
        username: String,
        password: String,
        currency: String,
    },
    /// Validate and send a raw JSON request carrying its own `method`
    Raw { payload: String },
    /// Check a webhook signature
    VerifyWebhook {
        key: String,
        timestamp: String,
        salt: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::VerifyWebhook {
        key,
        timestamp,
        salt,
    } = &cli.command
    {
        let valid = validate_webhook(key, timestamp, salt);
        println!("{valid}");
        if !valid {
            std::process::exit(1);
        }
        return Ok(());
    }

    let config = match (&cli.config, cli.env) {
        (_, true) => Config::from_env()?,
        (Some(path), false) => Config::from_path(path)?,
        (None, false) => Config::new()?,
    };

    tokio::runtime::Runtime::new()?.block_on(run(SpinApiClient::new(config), cli.command))
}

async fn run(client: SpinApiClient, command: Commands) -> Result<()> {
    match command {
        Commands::CreatePlayer {
            username,
            password,
            currency,
        } => print(&client.create_player(&username, &password, currency).await?),
        Commands::PlayerExists { username, currency } => {
            print(&client.player_exists(&username, currency).await?)
        }
        Commands::GameList {
            currency,
            show_systems,
            compact,
            show_additional,
        } => {
            let show_systems = if show_systems {
                ShowSystems::Shown
            } else {
                ShowSystems::Hidden
            };
            let list_type = if compact {
                ListType::Compact
            } else {
                ListType::Full
            };
            let games = client
                .get_game_list(show_systems, currency, Some(list_type), Some(show_additional))
                .await?;
            info!("Received {} games", games.len());
            print(&games)
        }
        Commands::Game {
            username,
            password,
            currency,
            gameid,
            lang,
            fun,
        } => {
            let mode = if fun { PlayForFun::Fun } else { PlayForFun::Real };
            print(
                &client
                    .get_game(&username, &password, currency, &gameid, lang, mode)
                    .await?,
            )
        }
        Commands::Demo {
            gameid,
            currency,
            lang,
        } => print(&client.get_game_demo(&gameid, currency, lang).await?),
        Commands::FreeRounds {
            username,
            password,
            currency,
        } => print(&client.get_free_rounds(&username, &password, currency).await?),
        Commands::AddFreeRounds {
            username,
            password,
            currency,
            gameid,
            freespins,
            bet_level,
            valid_days,
        } => print(
            &client
                .add_free_rounds(
                    &username, &password, currency, &gameid, freespins, bet_level, valid_days,
                )
                .await?,
        ),
        Commands::DeleteFreeRounds {
            username,
            password,
            currency,
            gameid,
        } => print(
            &client
                .delete_free_rounds(&username, &password, currency, &gameid)
                .await?,
        ),
        Commands::DeleteAllFreeRounds {
            username,
            password,
            currency,
        } => print(
            &client
                .delete_all_free_rounds(&username, &password, currency)
                .await?,
        ),
        Commands::Raw { payload } => {
            let payload: serde_json::Value = serde_json::from_str(&payload)?;
            print(&client.send_value(&payload).await?)
        }
        Commands::VerifyWebhook {
            key,
            timestamp,
            salt,
        } => print(&client.validate_webhook(&key, &timestamp, &salt)),
    }
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
