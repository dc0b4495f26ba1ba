use clap::{Parser, Subcommand};
use log::info;
use playlist_fetcher::{PlaylistFetcher, SPOTIFY_API_URL};

#[derive(Parser)]
#[command(name = "playlist_fetcher")]
#[command(version, about = "List Spotify playlists and their tracks", long_about = None)]
struct Cli {
    /// Spotify access token, sent as a bearer credential.
    #[arg(long, env = "SPOTIFY_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    #[arg(long, default_value = SPOTIFY_API_URL)]
    base_url: String,

    /// Print JSON instead of plain text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the current user's playlists.
    Playlists,
    /// List the tracks of one playlist.
    Tracks { playlist_id: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let fetcher = PlaylistFetcher::builder().base_url(&cli.base_url).build()?;

    match &cli.command {
        Commands::Playlists => {
            let playlists = fetcher.try_get_playlists(&cli.token)?;
            info!("Fetched {} playlists", playlists.len());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&playlists)?);
            } else {
                for playlist in &playlists {
                    let total = playlist
                        .track_total()
                        .map_or_else(|| "?".to_string(), |total| total.to_string());
                    println!(
                        "{}\t{}\t{} tracks",
                        playlist.id().unwrap_or("-"),
                        playlist.name().unwrap_or(""),
                        total
                    );
                }
            }
        }
        Commands::Tracks { playlist_id } => {
            let tracks = fetcher.try_get_playlist_tracks(playlist_id, &cli.token)?;
            info!("Fetched {} tracks from playlist {playlist_id}", tracks.len());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tracks)?);
            } else {
                for track in &tracks {
                    println!("{} - {}", track.name, track.artist);
                }
            }
        }
    }

    Ok(())
}
