//! Разбор временных меток вида `[[HH:]MM:]SS[.mmm]`

use crate::config::MillisecondScale;
use crate::error::{Result, ThumbnailError};

/// Конвертирует временную метку в секунды.
///
/// Функция тотальная: отсутствующие или нечисловые компоненты считаются нулём.
/// Компоненты берутся справа налево как секунды, минуты, часы.
pub fn parse_timestamp(text: &str) -> f64 {
    parse_timestamp_with_scale(text, MillisecondScale::Standard)
}

/// То же, что [`parse_timestamp`], но с явным выбором пересчёта миллисекунд.
pub fn parse_timestamp_with_scale(text: &str, scale: MillisecondScale) -> f64 {
    let text = text.trim();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text, ""),
    };

    let mut parts = whole.rsplit(':');
    let seconds = leading_number(parts.next().unwrap_or(""));
    let minutes = leading_number(parts.next().unwrap_or(""));
    let hours = leading_number(parts.next().unwrap_or(""));

    hours as f64 * 3600.0
        + minutes as f64 * 60.0
        + seconds as f64
        + fraction_seconds(fraction, scale)
}

/// Строгий вариант: возвращает ошибку вместо подстановки нулей.
pub fn parse_timestamp_strict(text: &str, scale: MillisecondScale) -> Result<f64> {
    let trimmed = text.trim();
    let invalid = || ThumbnailError::InvalidTimestamp(text.to_string());

    if trimmed.is_empty() || trimmed.matches('.').count() > 1 {
        return Err(invalid());
    }

    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let components: Vec<&str> = whole.split(':').collect();
    if components.len() > 3 {
        return Err(invalid());
    }

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !components.iter().all(|c| is_digits(c)) {
        return Err(invalid());
    }
    if trimmed.contains('.') && !is_digits(fraction) {
        return Err(invalid());
    }

    Ok(parse_timestamp_with_scale(trimmed, scale))
}

/// Ведущая последовательность цифр как число; иначе 0.
fn leading_number(component: &str) -> u64 {
    let component = component.trim();
    let end = component
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(component.len());
    component[..end].parse().unwrap_or(0)
}

fn fraction_seconds(fraction: &str, scale: MillisecondScale) -> f64 {
    let end = fraction
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(fraction.len());
    let digits = &fraction[..end];
    if digits.is_empty() {
        return 0.0;
    }

    match scale {
        MillisecondScale::Standard => {
            // "5" означает 0.5 с, "500" тоже 0.5 с
            format!("0.{}", digits).parse().unwrap_or(0.0)
        }
        MillisecondScale::Legacy => digits
            .parse::<u64>()
            .map(|ms| ms as f64 * 1000.0)
            .unwrap_or(0.0),
    }
}
