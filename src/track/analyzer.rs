//! Модуль для анализа трека миниатюр
//!
//! Сводка по репликам: покрытие, разрывы, пересечения, число спрайтов.

use std::collections::HashSet;

use serde::Serialize;

use super::Track;

/// Метрики трека
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackStats {
    /// Количество реплик
    pub cue_count: usize,
    /// Начало первой реплики
    pub first_start: f64,
    /// Максимальный конец среди реплик
    pub last_end: f64,
    /// Суммарная длительность реплик
    pub covered_duration: f64,
    /// Количество разрывов между соседними репликами
    pub gap_count: usize,
    /// Количество пересечений соседних реплик
    pub overlap_count: usize,
    /// Количество различных картинок (спрайтов)
    pub distinct_images: usize,
    /// Сколько реплик использует обрезку
    pub cropped_cues: usize,
    /// Трек отсортирован и без пересечений
    pub sorted: bool,
}

/// Анализ трека
pub fn analyze_track(track: &Track) -> TrackStats {
    let cues = track.cues();
    if cues.is_empty() {
        return TrackStats {
            cue_count: 0,
            first_start: 0.0,
            last_end: 0.0,
            covered_duration: 0.0,
            gap_count: 0,
            overlap_count: 0,
            distinct_images: 0,
            cropped_cues: 0,
            sorted: track.is_sorted(),
        };
    }

    let mut gap_count = 0;
    let mut overlap_count = 0;
    for pair in cues.windows(2) {
        let gap = pair[1].start - pair[0].end;
        if gap > 0.0 {
            gap_count += 1;
        } else if gap < 0.0 {
            overlap_count += 1;
        }
    }

    let distinct_images = cues
        .iter()
        .map(|cue| cue.image.url.as_str())
        .collect::<HashSet<_>>()
        .len();

    TrackStats {
        cue_count: cues.len(),
        first_start: cues[0].start,
        last_end: cues.iter().map(|cue| cue.end).fold(f64::MIN, f64::max),
        covered_duration: cues.iter().map(|cue| cue.duration()).sum(),
        gap_count,
        overlap_count,
        distinct_images,
        cropped_cues: cues.iter().filter(|cue| cue.image.crop.is_some()).count(),
        sorted: track.is_sorted(),
    }
}
