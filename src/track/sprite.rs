//! Разбор полезной нагрузки реплики: `URL` или `URL#xywh=x,y,w,h`

use lazy_static::lazy_static;
use regex::Regex;

use super::CropRect;

const XYWH_MARKER: &str = "#xywh=";

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"\d+").unwrap();
}

/// Разделяет нагрузку на ссылку и необязательный прямоугольник обрезки.
///
/// Если после `#xywh=` меньше четырёх чисел, ссылка сохраняется, а обрезка отбрасывается.
pub fn parse_image_spec(payload: &str) -> (&str, Option<CropRect>) {
    let payload = payload.trim();
    let Some(idx) = payload.find(XYWH_MARKER) else {
        return (payload, None);
    };

    let reference = &payload[..idx];
    let numbers: Vec<u32> = DIGITS
        .find_iter(&payload[idx + XYWH_MARKER.len()..])
        .take(4)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    if numbers.len() < 4 {
        log::debug!("Malformed sprite fragment in '{}', crop dropped", payload);
        return (reference, None);
    }

    let crop = CropRect {
        x: numbers[0],
        y: numbers[1],
        width: numbers[2],
        height: numbers[3],
    };
    (reference, Some(crop))
}
