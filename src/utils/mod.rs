//! Вспомогательные модули

pub mod logger;
pub mod url;
