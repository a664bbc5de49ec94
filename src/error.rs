//! Модуль обработки ошибок библиотеки vtt-thumbnails
//!
//! Ядро (парсинг трека и поиск миниатюры) никогда не возвращает ошибок.
//! Эти типы используются только на границах: загрузка трека, конфигурация,
//! строгий разбор временных меток.

use thiserror::Error;

/// Ошибки библиотеки vtt-thumbnails
#[derive(Debug, Error)]
pub enum ThumbnailError {
    /// Ошибка HTTP запроса
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Ошибка ввода-вывода
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Не удалось получить файл трека
    #[error("Track fetch error: {0}")]
    Fetch(String),

    /// Некорректная временная метка (только строгий режим)
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Ошибка конфигурации
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Другая ошибка
    #[error("Other error: {0}")]
    Other(String),
}

impl From<&str> for ThumbnailError {
    fn from(s: &str) -> Self {
        ThumbnailError::Other(s.to_string())
    }
}

impl From<String> for ThumbnailError {
    fn from(s: String) -> Self {
        ThumbnailError::Other(s)
    }
}

/// Тип Result для библиотеки vtt-thumbnails
pub type Result<T> = std::result::Result<T, ThumbnailError>;
