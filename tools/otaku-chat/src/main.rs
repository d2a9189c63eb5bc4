//! OtakuVerse terminal assistant
//!
//! Chat with the Jikan anime catalog from the terminal, classify chat text
//! offline, and manage locally stored favorites, theme and recent searches.

mod terminal;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use otakuverse_core::{
    ChatConfig, ChatSession, FavoritesStore, Intent, IntentClassifier, RecentSearchStore,
    ThemeStore,
};
use otakuverse_jikan::{DEFAULT_BASE_URL, JikanClient, JikanConfig};
use otakuverse_store::{SqlitePreferences, default_data_dir};
use serde::Serialize;
use tracing::{info, warn};

use crate::terminal::{TerminalSink, format_card, format_details, format_recent};

/// CLI arguments
#[derive(Parser)]
#[command(name = "otaku-chat")]
#[command(about = "Chat with the Jikan anime catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the preferences database
    #[arg(short = 'D', long, env = "OTAKU_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Jikan API base URL
    #[arg(long, env = "JIKAN_API_BASE", default_value = DEFAULT_BASE_URL, global = true)]
    api_base: String,

    /// Request timeout in seconds
    #[arg(long, env = "JIKAN_TIMEOUT_SECS", default_value_t = 30, global = true)]
    timeout_secs: u64,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify chat text (arguments, or one input per stdin line) and print JSON
    Classify {
        /// Text to classify; reads stdin when omitted
        text: Vec<String>,
    },
    /// Interactive chat session
    Chat,
    /// Show full details for one anime
    Details {
        /// MyAnimeList id
        mal_id: u64,
    },
    /// Show or manage recent searches
    Recent {
        /// Remove all recent searches
        #[arg(long)]
        clear: bool,
        /// Remove the entry at this position (0 = newest)
        #[arg(long, conflicts_with = "clear")]
        remove: Option<usize>,
    },
    /// Show or manage favorites
    Favorites {
        /// Remove all favorites
        #[arg(long)]
        clear: bool,
        /// Remove the favorite with this MyAnimeList id
        #[arg(long, conflicts_with = "clear")]
        remove: Option<u64>,
    },
    /// Show or toggle the theme
    Theme {
        /// Switch between light and dark
        #[arg(short, long)]
        toggle: bool,
    },
}

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    input: &'a str,
    intent: &'a Intent,
}

/// One line of chat input, either a slash command or a message.
#[derive(Debug, PartialEq, Eq)]
enum ChatCommand<'a> {
    Skip,
    Quit,
    Favorite,
    Recent,
    Again(usize),
    Usage(&'static str),
    Message(&'a str),
}

impl<'a> ChatCommand<'a> {
    fn parse(input: &'a str) -> Self {
        let input = input.trim();
        let (command, arg) = input
            .split_once(char::is_whitespace)
            .map_or((input, ""), |(command, arg)| (command, arg.trim()));

        match command {
            "" => Self::Skip,
            "/quit" | "/exit" => Self::Quit,
            "/fav" => Self::Favorite,
            "/recent" => Self::Recent,
            "/again" => arg
                .parse()
                .map_or(Self::Usage("usage: /again N (N as listed by /recent)"), Self::Again),
            _ => Self::Message(input),
        }
    }
}

/// Query of the recent search at `index` (0 = newest), if there is one.
fn recent_query<R: RecentSearchStore>(store: &R, index: usize) -> Result<Option<String>> {
    Ok(store
        .recent_searches()?
        .into_iter()
        .nth(index)
        .map(|search| search.query))
}

fn catalog_client(cli: &Cli) -> Result<JikanClient> {
    let config = JikanConfig::new()
        .with_base_url(cli.api_base.clone())
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    JikanClient::new(config).context("Failed to build HTTP client")
}

fn open_store(data_dir: Option<PathBuf>) -> Result<SqlitePreferences> {
    let dir = data_dir.unwrap_or_else(default_data_dir);
    SqlitePreferences::open_in_dir(&dir)
        .with_context(|| format!("Failed to open preferences in {}", dir.display()))
}

fn print_classification(classifier: &IntentClassifier, input: &str) -> Result<()> {
    let intent = classifier.classify(input);
    let output = ClassifyOutput {
        input,
        intent: &intent,
    };
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn run_classify(text: Vec<String>) -> Result<()> {
    let classifier = IntentClassifier::new().context("Failed to build intent classifier")?;

    if !text.is_empty() {
        for input in &text {
            print_classification(&classifier, input)?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        print_classification(&classifier, line)?;
    }
    Ok(())
}

async fn run_chat(cli: &Cli) -> Result<()> {
    let catalog = catalog_client(cli)?;
    let store = open_store(cli.data_dir.clone())?;

    let mut session = ChatSession::new(catalog, store, TerminalSink::new(), ChatConfig::default())
        .context("Failed to start chat session")?;
    session.welcome();
    println!(
        "\n(/fav toggles the last anime as favorite, /recent lists searches, \
         /again N repeats one, /quit exits)"
    );

    let stdin = io::stdin();
    loop {
        print!("\nyou> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }

        match ChatCommand::parse(&input) {
            ChatCommand::Skip => continue,
            ChatCommand::Quit => break,
            ChatCommand::Usage(usage) => println!("{usage}"),
            ChatCommand::Favorite => {
                let Some(anime) = session.sink().last_anime().cloned() else {
                    println!("No anime shown yet.");
                    continue;
                };
                if session.store_mut().toggle_favorite(&anime)? {
                    println!("Added '{}' to favorites.", anime.title);
                } else {
                    println!("Removed '{}' from favorites.", anime.title);
                }
            }
            ChatCommand::Recent => {
                println!("{}", format_recent(&session.store().recent_searches()?));
            }
            ChatCommand::Again(index) => match recent_query(session.store(), index)? {
                Some(query) => {
                    let intent = session.repeat_search(&query).await;
                    info!(%intent, index, "repeated search");
                }
                None => println!("No recent search at position {index}."),
            },
            ChatCommand::Message(text) => {
                let intent = session.process_user_message(text).await;
                info!(%intent, "turn complete");
            }
        }
    }

    info!("chat session ended");
    Ok(())
}

async fn run_details(cli: &Cli, mal_id: u64) -> Result<()> {
    let catalog = catalog_client(cli)?;
    let anime = catalog
        .anime_details(mal_id)
        .await
        .with_context(|| format!("Failed to fetch anime {mal_id}"))?;
    match anime {
        Some(anime) => println!("{}", format_details(&anime)),
        None => println!("No anime found with id {mal_id}."),
    }
    Ok(())
}

fn run_recent(store: &mut SqlitePreferences, clear: bool, remove: Option<usize>) -> Result<()> {
    if clear {
        store.clear_searches()?;
        println!("Cleared recent searches.");
        return Ok(());
    }
    if let Some(index) = remove {
        let removed = store.remove_search(index)?;
        println!("Removed '{}'.", removed.query);
        return Ok(());
    }
    println!("{}", format_recent(&store.recent_searches()?));
    Ok(())
}

fn run_favorites(store: &mut SqlitePreferences, clear: bool, remove: Option<u64>) -> Result<()> {
    if clear {
        store.clear_favorites()?;
        println!("Cleared all favorites.");
        return Ok(());
    }
    if let Some(mal_id) = remove {
        if !store.is_favorite(mal_id)? {
            warn!(mal_id, "not a favorite");
        }
        store.remove_favorite(mal_id)?;
        return Ok(());
    }

    let favorites = store.favorites()?;
    if favorites.is_empty() {
        println!("No Favorites Yet");
    }
    for anime in &favorites {
        println!("{}", format_card(anime));
    }
    Ok(())
}

fn run_theme(store: &mut SqlitePreferences, toggle: bool) -> Result<()> {
    let dark = if toggle {
        store.toggle_theme()?
    } else {
        store.is_dark_mode()?
    };
    println!("{}", if dark { "dark" } else { "light" });
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match &cli.command {
        Commands::Classify { text } => run_classify(text.clone()),
        Commands::Chat => run_chat(&cli).await,
        Commands::Details { mal_id } => run_details(&cli, *mal_id).await,
        Commands::Recent { clear, remove } => {
            run_recent(&mut open_store(cli.data_dir.clone())?, *clear, *remove)
        }
        Commands::Favorites { clear, remove } => {
            run_favorites(&mut open_store(cli.data_dir.clone())?, *clear, *remove)
        }
        Commands::Theme { toggle } => run_theme(&mut open_store(cli.data_dir.clone())?, *toggle),
    }
}
