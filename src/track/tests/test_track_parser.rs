//! Тест для модуля разбора треков миниатюр

use crate::config::MillisecondScale;
use crate::track::{parse_track, parse_track_with_scale, CropRect, Track};

const BASE: &str = "https://cdn.example.com/thumbs/";

fn sample_track() -> &'static str {
    r#"WEBVTT

NOTE generated by the sprite builder

STYLE
::cue { color: red; }

1
00:00:00.000 --> 00:00:05.000
sprite-0.jpg#xywh=0,0,160,90

2
00:00:05.000 --> 00:00:10.000 align:start
sprite-0.jpg#xywh=160,0,160,90

00:00:10.000-->00:00:15.000
https://other.example.com/full/frame-3.jpg
"#
}

#[test]
fn test_parse_sample_track() {
    let track = parse_track(sample_track(), BASE);

    assert_eq!(track.len(), 3);

    let first = &track.cues()[0];
    assert_eq!(first.start, 0.0);
    assert_eq!(first.end, 5.0);
    assert_eq!(first.image.url, "https://cdn.example.com/thumbs/sprite-0.jpg");
    assert_eq!(
        first.image.crop,
        Some(CropRect {
            x: 0,
            y: 0,
            width: 160,
            height: 90
        })
    );

    // Настройки реплики после тайминга игнорируются
    let second = &track.cues()[1];
    assert_eq!(second.start, 5.0);
    assert_eq!(second.image.crop.map(|c| c.x), Some(160));

    // Полный URL не квалифицируется повторно, пробелы вокруг стрелки необязательны
    let third = &track.cues()[2];
    assert_eq!(third.start, 10.0);
    assert_eq!(third.image.url, "https://other.example.com/full/frame-3.jpg");
    assert_eq!(third.image.crop, None);

    assert!(track.is_sorted());
}

#[test]
fn test_crlf_input() {
    let raw = "WEBVTT\r\n\r\n00:00.000 --> 00:02.500\r\na.jpg\r\n\r\n00:02.500 --> 00:05.000\r\nb.jpg\r\n";
    let track = parse_track(raw, BASE);

    assert_eq!(track.len(), 2);
    assert_eq!(track.cues()[0].end, 2.5);
    assert_eq!(track.cues()[1].image.url, "https://cdn.example.com/thumbs/b.jpg");
}

#[test]
fn test_empty_and_unmatched_input() {
    assert!(parse_track("", BASE).is_empty());
    assert!(parse_track("WEBVTT\n\nNOTE nothing here\n", BASE).is_empty());
    assert!(parse_track("just some text\nwith lines", BASE).is_empty());
}

#[test]
fn test_malformed_sprite_keeps_cue() {
    let track = parse_track("00:00.000 --> 00:05.000\nsprite.jpg#xywh=1,2\n", BASE);

    assert_eq!(track.len(), 1);
    assert_eq!(track.cues()[0].image.url, "https://cdn.example.com/thumbs/sprite.jpg");
    assert_eq!(track.cues()[0].image.crop, None);
}

#[test]
fn test_relative_base_passthrough() {
    let track = parse_track("00:00.000 --> 00:05.000\nimg/a.jpg\n", "/local/dir/");
    assert_eq!(track.cues()[0].image.url, "img/a.jpg");
}

#[test]
fn test_parse_is_idempotent() {
    let first = parse_track(sample_track(), BASE);
    let second = parse_track(sample_track(), BASE);
    assert_eq!(first, second);
}

#[test]
fn test_legacy_scale_track() {
    let raw = "00:00:00.000 --> 00:00:01.000\na.jpg\n\n00:00:01.000 --> 00:00:02.000\nb.jpg\n";

    let legacy = parse_track_with_scale(raw, BASE, MillisecondScale::Legacy);
    // Нулевые миллисекунды не затрагиваются старой арифметикой
    assert_eq!(legacy.cues()[1].start, 1.0);

    let raw = "00:00.000 --> 00:00.001\na.jpg\n";
    let legacy = parse_track_with_scale(raw, BASE, MillisecondScale::Legacy);
    assert_eq!(legacy.cues()[0].end, 1000.0);
}

#[test]
fn test_track_serializes_as_cue_list() {
    let track = parse_track("00:00.000 --> 00:05.000\na.jpg#xywh=1,2,3,4\n", BASE);
    let json = serde_json::to_value(&track).unwrap();

    assert!(json.is_array());
    assert_eq!(json[0]["image"]["crop"]["width"], 3);

    let restored: Track = serde_json::from_value(json).unwrap();
    assert_eq!(restored, track);
}
