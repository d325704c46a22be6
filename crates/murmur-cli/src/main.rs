use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "murmur",
    version,
    about = "Transcribe audio/video files and URLs with Groq Whisper"
)]
struct Cli {
    /// Groq API key (GROQ_API_KEY environment variable takes precedence)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Print diagnostic output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transcribe a local audio/video file
    File {
        /// Path to the media file (mp3, mp4, wav, ... — max 25 MiB)
        path: PathBuf,
    },
    /// Transcribe a remote audio/video URL
    Url {
        /// http(s) URL of the media file
        url: String,
    },
}

fn main() {
    // A .env file is optional; ignore its absence
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    murmur_core::set_verbose(cli.verbose);

    let result = match cli.command {
        Command::File { path } => commands::file::run(&path, cli.api_key),
        Command::Url { url } => commands::url::run(&url, cli.api_key),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
