//! Резолвер миниатюр
//!
//! Владеет текущим треком и отвечает на запросы по времени. Новый трек
//! полностью строится до публикации, а затем подменяется целиком, поэтому
//! запрос видит либо старый трек, либо новый, но никогда не смесь.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::{LookupStrategy, PreviewConfig};
use crate::fetch::TrackFetcher;
use crate::track::{parse_track_with_scale, ImageDescriptor, Track};
use crate::utils::url::{base_directory, qualify_track_url};

/// Опубликованное состояние: трек и URL, из которого он построен
struct Published {
    track: Arc<Track>,
    source: Option<String>,
}

/// Резолвер миниатюр для одного плеера
pub struct ThumbnailResolver {
    /// Конфигурация
    config: PreviewConfig,
    state: RwLock<Published>,
}

impl ThumbnailResolver {
    /// Создать резолвер с пустым треком
    pub fn new(config: PreviewConfig) -> Self {
        Self {
            config,
            state: RwLock::new(Published {
                track: Arc::new(Track::empty()),
                source: None,
            }),
        }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Установить источник по уже полученному тексту трека.
    ///
    /// `src` квалифицируется относительно `page_location` из конфигурации,
    /// ссылки на картинки относительно каталога трека. Возвращает число
    /// опубликованных реплик.
    pub fn set_source(&self, raw_text: &str, src: &str) -> usize {
        let track_url = qualify_track_url(src, &self.config.page_location);
        let track = parse_track_with_scale(
            raw_text,
            &base_directory(&track_url),
            self.config.millisecond_scale,
        );

        log::debug!("Publishing track {} with {} cues", track_url, track.len());
        let count = track.len();
        self.publish(track, Some(track_url));
        count
    }

    /// Загрузить трек через `fetcher` и опубликовать его.
    ///
    /// Ошибка загрузки не пробрасывается: публикуется пустой трек, и
    /// миниатюры просто не показываются.
    pub async fn load(&self, fetcher: &dyn TrackFetcher, src: &str) -> usize {
        let track_url = qualify_track_url(src, &self.config.page_location);

        match fetcher.fetch(&track_url).await {
            Ok(raw_text) => self.set_source(&raw_text, src),
            Err(e) => {
                log::warn!("Failed to fetch thumbnail track {}: {}", track_url, e);
                self.publish(Track::empty(), Some(track_url));
                0
            }
        }
    }

    /// Опубликовать готовый трек
    pub fn publish(&self, track: Track, source: Option<String>) {
        let published = Published {
            track: Arc::new(track),
            source,
        };
        // Старый трек освобождается, когда завершатся все запросы, которые его держат
        *self.state.write() = published;
    }

    /// Отсоединить резолвер: трек сбрасывается, запросы возвращают `None`
    pub fn detach(&self) {
        self.publish(Track::empty(), None);
    }

    /// Текущий трек
    pub fn snapshot(&self) -> Arc<Track> {
        self.state.read().track.clone()
    }

    /// URL текущего трека
    pub fn source(&self) -> Option<String> {
        self.state.read().source.clone()
    }

    /// Найти миниатюру для момента времени
    pub fn resolve(&self, time: f64) -> Option<ImageDescriptor> {
        let track = self.snapshot();
        let image = match self.config.lookup {
            LookupStrategy::Auto => track.resolve(time),
            LookupStrategy::Linear => track.resolve_linear(time),
        };
        image.cloned()
    }
}

impl Default for ThumbnailResolver {
    fn default() -> Self {
        Self::new(PreviewConfig::default())
    }
}
