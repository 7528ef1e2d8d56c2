use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spolib::{
    cli, config,
    types::{RangeQuery, SortColumn, SortDirection},
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in, log out or check the session
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Show library totals, top artists and the artist table
    Dashboard(DashboardArgs),

    /// Delete tracks from the library
    #[command(subcommand)]
    Tracks(TracksCommand),

    /// List or clear playlists
    #[command(subcommand)]
    Playlist(PlaylistCommand),

    /// Show or change the table theme
    Theme(ThemeArgs),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AuthCommand {
    /// Log in through the browser
    Login,
    /// End the session
    Logout,
    /// Check whether the session is still valid
    Status,
}

#[derive(Parser, Debug, Clone)]
pub struct DashboardArgs {
    /// Only artists with at least this many tracks
    #[clap(long)]
    pub min: Option<u64>,

    /// Only artists with at most this many tracks
    #[clap(long)]
    pub max: Option<u64>,

    /// Filter artists by name (case-insensitive)
    #[clap(long)]
    pub search: Option<String>,

    /// Column to sort the table by
    #[clap(long, value_enum, default_value_t = SortColumn::Count)]
    pub sort: SortColumn,

    /// Sort direction
    #[clap(long, value_enum, default_value_t = SortDirection::Desc)]
    pub direction: SortDirection,

    /// Page of the artist table, starting at 1
    #[clap(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to SPOLIB_PAGE_SIZE or 10)
    #[clap(long)]
    pub page_size: Option<usize>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TracksCommand {
    /// Delete every track of one artist
    DeleteArtist {
        /// Artist id or exact name
        artist: String,
        /// Skip the confirmation prompt
        #[clap(long, short)]
        yes: bool,
    },
    /// Delete the tracks of all artists whose track count is within a range
    DeleteRange {
        #[clap(long)]
        min: Option<u64>,
        #[clap(long)]
        max: Option<u64>,
        /// Skip the confirmation prompt
        #[clap(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistCommand {
    /// List your playlists
    List,
    /// Remove all tracks from a playlist
    Clear {
        /// Playlist id or exact name
        playlist: String,
        /// Also remove the playlist's tracks from your library
        #[clap(long)]
        library: bool,
        /// Skip the confirmation prompt
        #[clap(long, short)]
        yes: bool,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct ThemeArgs {
    #[clap(value_enum)]
    choice: Option<cli::ThemeChoice>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(cmd) => match cmd {
            AuthCommand::Login => cli::login().await,
            AuthCommand::Logout => cli::logout().await,
            AuthCommand::Status => cli::status().await,
        },

        Command::Dashboard(args) => {
            cli::dashboard(cli::DashboardOptions {
                range: RangeQuery::new(args.min, args.max),
                search: args.search.unwrap_or_default(),
                sort: args.sort,
                direction: args.direction,
                page: args.page,
                page_size: args.page_size.unwrap_or_else(config::page_size),
            })
            .await
        }

        Command::Tracks(cmd) => match cmd {
            TracksCommand::DeleteArtist { artist, yes } => cli::delete_artist(artist, yes).await,
            TracksCommand::DeleteRange { min, max, yes } => cli::delete_range(min, max, yes).await,
        },

        Command::Playlist(cmd) => match cmd {
            PlaylistCommand::List => cli::list_playlists().await,
            PlaylistCommand::Clear {
                playlist,
                library,
                yes,
            } => cli::clear_playlist(playlist, library, yes).await,
        },

        Command::Theme(args) => cli::theme(args.choice).await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
