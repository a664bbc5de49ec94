//! Модуль для парсинга треков миниатюр
//!
//! Трек делится на блоки по пустым строкам. Блок становится репликой, если
//! его первая строка (или вторая, когда первая является идентификатором реплики)
//! является строкой тайминга `start --> end`. Следующая за таймингом строка
//! содержит ссылку на картинку. Остальные блоки (`WEBVTT`, `NOTE`, `STYLE`)
//! молча пропускаются.

use lazy_static::lazy_static;
use regex::Regex;

use super::sprite::parse_image_spec;
use super::timestamp::parse_timestamp_with_scale;
use super::{Cue, ImageDescriptor, Track};
use crate::config::MillisecondScale;
use crate::utils::url::resolve_url;

lazy_static! {
    static ref BLOCK_SEPARATOR: Regex = Regex::new(r"\n[ \t]*\n").unwrap();
    static ref TIMING_LINE: Regex = Regex::new(
        r"^\s*((?:\d+:){0,2}\d+(?:\.\d+)?)\s*-->\s*((?:\d+:){0,2}\d+(?:\.\d+)?)(?:\s+.*)?$"
    )
    .unwrap();
}

/// Парсинг текста трека.
///
/// Ссылки на картинки квалифицируются относительно `base_url` сразу же;
/// дальше они не пересчитываются. Никогда не возвращает ошибку: пустой или
/// нераспознанный текст даёт пустой трек.
pub fn parse_track(raw_text: &str, base_url: &str) -> Track {
    parse_track_with_scale(raw_text, base_url, MillisecondScale::Standard)
}

/// То же, что [`parse_track`], с явным пересчётом миллисекунд
pub fn parse_track_with_scale(raw_text: &str, base_url: &str, scale: MillisecondScale) -> Track {
    let normalized = raw_text.replace("\r\n", "\n").replace('\r', "\n");

    let mut cues = Vec::new();
    let mut skipped = 0usize;

    for block in BLOCK_SEPARATOR.split(&normalized) {
        match parse_cue_block(block, base_url, scale) {
            Some(cue) => cues.push(cue),
            None => {
                if !block.trim().is_empty() {
                    skipped += 1;
                }
            }
        }
    }

    log::info!(
        "Parsed {} thumbnail cues ({} blocks skipped)",
        cues.len(),
        skipped
    );
    Track::new(cues)
}

/// Парсинг одного блока
fn parse_cue_block(block: &str, base_url: &str, scale: MillisecondScale) -> Option<Cue> {
    let lines: Vec<&str> = block
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .collect();

    // Тайминг либо первой строкой, либо сразу после идентификатора
    let timing_idx = lines
        .iter()
        .take(2)
        .position(|line| TIMING_LINE.is_match(line))?;
    let captures = TIMING_LINE.captures(lines[timing_idx])?;

    let start = parse_timestamp_with_scale(&captures[1], scale);
    let end = parse_timestamp_with_scale(&captures[2], scale);
    if !(end > start) {
        log::debug!(
            "Dropping cue with empty interval: {} --> {}",
            &captures[1],
            &captures[2]
        );
        return None;
    }

    let payload = lines.get(timing_idx + 1).map(|line| line.trim())?;
    if payload.is_empty() {
        log::debug!("Dropping cue without image reference at {}", &captures[1]);
        return None;
    }

    let (reference, crop) = parse_image_spec(payload);
    let image = ImageDescriptor {
        url: resolve_url(reference, base_url),
        crop,
    };

    Some(Cue::new(start, end, image))
}
