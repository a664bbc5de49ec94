//! Библиотека vtt-thumbnails
//!
//! Показывает превью при наведении на таймлайн плеера: позиция указателя
//! переводится во время, а время в участок спрайта, описанный в
//! WebVTT-треке миниатюр.
//!
//! ```
//! use vtt_thumbnails::{parse_track, resolve_url};
//!
//! let track = parse_track(
//!     "WEBVTT\n\n00:00.000 --> 00:05.000\nsprite.jpg#xywh=0,0,160,90\n",
//!     "https://cdn.example.com/thumbs/",
//! );
//! let image = track.resolve(2.0).unwrap();
//! assert_eq!(image.url, "https://cdn.example.com/thumbs/sprite.jpg");
//! assert_eq!(resolve_url("//cdn.example.com/a.vtt", "/page/"), "//cdn.example.com/a.vtt");
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod resolver;
pub mod timeline;
pub mod track;
pub mod utils;

pub use config::{LookupStrategy, MillisecondScale, PreviewConfig};
pub use error::{Result, ThumbnailError};
pub use fetch::{fetcher_for, FileFetcher, HttpFetcher, TrackFetcher};
pub use resolver::ThumbnailResolver;
pub use timeline::time_at_position;
pub use track::{
    analyze_track, parse_image_spec, parse_timestamp, parse_timestamp_strict, parse_track,
    CropRect, Cue, ImageDescriptor, Track, TrackStats,
};
pub use utils::url::{base_directory, qualify_track_url, resolve_url};
