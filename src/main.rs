use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use vtt_thumbnails::track::{parse_timestamp_strict, parse_timestamp_with_scale, TrackStats};
use vtt_thumbnails::utils::logger::init_logger;
use vtt_thumbnails::{
    analyze_track, fetcher_for, qualify_track_url, ImageDescriptor, PreviewConfig,
    ThumbnailResolver,
};

#[derive(Parser)]
#[command(name = "thumbnail-preview")]
#[command(about = "Resolve timeline positions to WebVTT sprite thumbnails")]
#[command(version)]
struct Cli {
    /// Thumbnail track: local path or URL
    track: String,

    /// Times to resolve, in seconds or as timestamps (01:02.500)
    times: Vec<String>,

    /// Page location used to qualify a relative track URL
    #[arg(long)]
    page: Option<String>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject malformed query times instead of reading them as zero
    #[arg(long)]
    strict: bool,

    /// Print track statistics before the lookups
    #[arg(long)]
    stats: bool,
}

#[derive(Serialize)]
struct Lookup<'a> {
    query: &'a str,
    time: f64,
    image: Option<ImageDescriptor>,
}

#[derive(Serialize)]
struct Summary<'a> {
    source: Option<String>,
    stats: &'a TrackStats,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PreviewConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PreviewConfig::default(),
    };
    if let Some(page) = cli.page.clone() {
        config.page_location = page;
    }

    let track_url = qualify_track_url(&cli.track, &config.page_location);
    let fetcher = fetcher_for(&track_url, &config)?;

    let resolver = ThumbnailResolver::new(config);
    let count = resolver.load(fetcher.as_ref(), &cli.track).await;
    log::info!("Loaded {} cues from {}", count, track_url);

    if cli.stats {
        let track = resolver.snapshot();
        let stats = analyze_track(&track);
        let summary = Summary {
            source: resolver.source(),
            stats: &stats,
        };
        println!("{}", serde_json::to_string(&summary)?);
    }

    let scale = resolver.config().millisecond_scale;
    for query in &cli.times {
        let time = if cli.strict {
            match parse_timestamp_strict(query, scale) {
                Ok(time) => time,
                Err(e) => {
                    log::warn!("Skipping query: {}", e);
                    continue;
                }
            }
        } else {
            parse_timestamp_with_scale(query, scale)
        };

        let lookup = Lookup {
            query,
            time,
            image: resolver.resolve(time),
        };
        println!("{}", serde_json::to_string(&lookup)?);
    }

    Ok(())
}
