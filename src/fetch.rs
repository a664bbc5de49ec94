//! Модуль для загрузки текста трека
//!
//! Загрузка является единственной асинхронной границей. Резолвер превращает любую
//! ошибку отсюда в пустой трек.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::PreviewConfig;
use crate::error::{Result, ThumbnailError};

/// Источник текста трека
#[async_trait]
pub trait TrackFetcher: Send + Sync {
    /// Получить текст трека по квалифицированному URL
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Загрузка по HTTP(S)
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Создать HTTP-загрузчик с таймаутом и User-Agent из конфигурации
    pub fn new(config: &PreviewConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TrackFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        // Протокол-относительный адрес без страницы: предполагаем https
        let url = if url.starts_with("//") {
            format!("https:{}", url)
        } else {
            url.to_string()
        };

        log::debug!("Fetching thumbnail track {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ThumbnailError::Fetch(format!(
                "HTTP {} for {}",
                status, url
            )));
        }

        Ok(response.text().await?)
    }
}

/// Загрузка из локального файла; префикс `file://` отбрасывается
#[derive(Debug, Default, Clone, Copy)]
pub struct FileFetcher;

#[async_trait]
impl TrackFetcher for FileFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let path = PathBuf::from(url.strip_prefix("file://").unwrap_or(url));
        log::debug!("Reading thumbnail track {}", path.display());
        Ok(tokio::fs::read_to_string(&path).await?)
    }
}

/// Подобрать загрузчик по виду адреса
pub fn fetcher_for(url: &str, config: &PreviewConfig) -> Result<Box<dyn TrackFetcher>> {
    if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//") {
        Ok(Box::new(HttpFetcher::new(config)?))
    } else {
        Ok(Box::new(FileFetcher))
    }
}
