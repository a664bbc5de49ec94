//! Модуль конфигурации библиотеки vtt-thumbnails
//!
//! Этот модуль содержит структуры и перечисления для настройки резолвера.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThumbnailError};

/// Способ пересчёта дробной части временной метки
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MillisecondScale {
    /// Дробная часть делится на 1000 (`00:01.500` = 1.5 с)
    Standard,
    /// Совместимость со старыми треками: миллисекунды умножаются на 1000
    Legacy,
}

impl Default for MillisecondScale {
    fn default() -> Self {
        Self::Standard
    }
}

/// Стратегия поиска реплики по времени
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LookupStrategy {
    /// Бинарный поиск, если трек отсортирован и без пересечений, иначе линейный
    Auto,
    /// Всегда линейный проход
    Linear,
}

impl Default for LookupStrategy {
    fn default() -> Self {
        Self::Auto
    }
}

/// Конфигурация резолвера миниатюр
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    /// Адрес страницы, относительно которого квалифицируется URL трека
    pub page_location: String,
    /// Пересчёт миллисекунд
    pub millisecond_scale: MillisecondScale,
    /// Стратегия поиска
    pub lookup: LookupStrategy,
    /// Таймаут загрузки трека в секундах
    pub fetch_timeout_secs: u64,
    /// User-Agent для HTTP запросов
    pub user_agent: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            page_location: String::new(),
            millisecond_scale: MillisecondScale::default(),
            lookup: LookupStrategy::default(),
            fetch_timeout_secs: 10,
            user_agent: format!("vtt-thumbnails/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl PreviewConfig {
    /// Загрузить конфигурацию из JSON файла. Отсутствующие поля берутся по умолчанию.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        log::debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Проверить значения конфигурации
    pub fn validate(&self) -> Result<()> {
        if self.fetch_timeout_secs == 0 {
            return Err(ThumbnailError::Configuration(
                "fetch_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
