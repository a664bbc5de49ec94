//! Пересчёт позиции указателя над таймлайном во время

/// Время, соответствующее позиции `x` над таймлайном ширины `width`.
///
/// Отношение ограничивается диапазоном `[0, 1]`. Для неположительной ширины
/// или длительности (метаданные ещё не загружены) возвращает `None`.
pub fn time_at_position(x: f64, width: f64, duration: f64) -> Option<f64> {
    if !(width > 0.0) || !(duration > 0.0) || x.is_nan() {
        return None;
    }
    let ratio = (x / width).clamp(0.0, 1.0);
    Some(ratio * duration)
}
