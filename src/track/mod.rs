//! # Трек миниатюр
//!
//! Модуль для разбора WebVTT-треков миниатюр и поиска картинки по времени.
//! Трек строится один раз на каждый источник и дальше не изменяется.

pub mod analyzer;
pub mod parser;
pub mod sprite;
pub mod timestamp;

use serde::{Deserialize, Serialize};

pub use analyzer::{analyze_track, TrackStats};
pub use parser::{parse_track, parse_track_with_scale};
pub use sprite::parse_image_spec;
pub use timestamp::{parse_timestamp, parse_timestamp_strict, parse_timestamp_with_scale};

/// Прямоугольник внутри спрайта, в пикселях
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Результат поиска: полностью квалифицированная ссылка и необязательная обрезка.
///
/// `crop == None` означает, что миниатюрой является вся картинка.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub url: String,
    pub crop: Option<CropRect>,
}

/// Реплика: полуоткрытый интервал `[start, end)` и картинка для него
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Начало, секунды
    pub start: f64,
    /// Конец, секунды (не включается)
    pub end: f64,
    pub image: ImageDescriptor,
}

impl Cue {
    /// Создать новую реплику
    pub fn new(start: f64, end: f64, image: ImageDescriptor) -> Self {
        Self { start, end, image }
    }

    /// Попадает ли время в интервал реплики
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time < self.end
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Упорядоченный набор реплик одного источника
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Cue>", into = "Vec<Cue>")]
pub struct Track {
    cues: Vec<Cue>,
    /// Реплики строго возрастают и не пересекаются; вычисляется при создании
    sorted: bool,
}

impl Track {
    /// Создать трек из реплик в порядке источника
    pub fn new(cues: Vec<Cue>) -> Self {
        let sorted = cues
            .windows(2)
            .all(|pair| pair[0].start < pair[1].start && pair[0].end <= pair[1].start);
        Self { cues, sorted }
    }

    /// Пустой трек: любой запрос возвращает `None`
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Реплики отсортированы и не пересекаются, можно искать бинарно
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Найти картинку для момента времени.
    ///
    /// Побеждает первая подходящая реплика в порядке источника. Для
    /// отсортированного трека без пересечений используется бинарный поиск,
    /// результат совпадает с линейным проходом.
    pub fn resolve(&self, time: f64) -> Option<&ImageDescriptor> {
        if self.sorted {
            self.resolve_sorted(time)
        } else {
            self.resolve_linear(time)
        }
    }

    /// Линейный проход по репликам
    pub fn resolve_linear(&self, time: f64) -> Option<&ImageDescriptor> {
        self.cues
            .iter()
            .find(|cue| cue.contains(time))
            .map(|cue| &cue.image)
    }

    fn resolve_sorted(&self, time: f64) -> Option<&ImageDescriptor> {
        // Индекс первой реплики, начинающейся позже `time`
        let idx = self.cues.partition_point(|cue| cue.start <= time);
        let cue = self.cues.get(idx.checked_sub(1)?)?;
        cue.contains(time).then_some(&cue.image)
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Cue>> for Track {
    fn from(cues: Vec<Cue>) -> Self {
        Self::new(cues)
    }
}

impl From<Track> for Vec<Cue> {
    fn from(track: Track) -> Self {
        track.cues
    }
}
