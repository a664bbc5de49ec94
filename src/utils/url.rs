//! Квалификация относительных ссылок
//!
//! Схема двухшаговая: URL трека квалифицируется относительно адреса страницы,
//! а каждая ссылка на картинку внутри трека относительно каталога трека.

/// Квалифицирует `reference` относительно `base`.
///
/// Ссылка, содержащая `//`, считается полной и возвращается без изменений.
/// Если `base` не похож на URL (нет `//`), ссылка тоже возвращается как есть.
pub fn resolve_url(reference: &str, base: &str) -> String {
    if reference.contains("//") {
        return reference.to_string();
    }

    let base = base.trim();
    // Протокол-относительная база ("//cdn...") и полный URL склеиваются одинаково
    if base.contains("//") {
        return format!(
            "{}/{}",
            base.trim_end_matches('/'),
            reference.trim().trim_matches('/')
        );
    }

    reference.to_string()
}

/// Каталог URL: путь до последнего `/` включительно.
///
/// Query и fragment отбрасываются, `/` ищется только в пути после
/// `scheme://host`. URL без пути даёт `scheme://host/`.
pub fn base_directory(url: &str) -> String {
    let end = url.find(|c| c == '?' || c == '#').unwrap_or(url.len());
    let url = &url[..end];

    let path_start = match url.find("//") {
        Some(idx) => match url[idx + 2..].find('/') {
            Some(slash) => idx + 2 + slash,
            None => return format!("{}/", url),
        },
        None => 0,
    };

    match url[path_start..].rfind('/') {
        Some(idx) => url[..=path_start + idx].to_string(),
        None => String::new(),
    }
}

/// Первый шаг квалификации: URL трека относительно страницы.
pub fn qualify_track_url(src: &str, page_location: &str) -> String {
    resolve_url(src, &base_directory(page_location))
}
