//! Resolution of media paths returned by the API

/// Joins a relative media path onto the backend origin. Absolute and data
/// URLs are returned unchanged.
pub fn resolve_media_url(base_url: &str, path: &str) -> String {
    let path = path.trim();
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_media_url() {
        let base = "https://back.ifly.com.uz";
        assert_eq!(
            resolve_media_url(base, "uploads/shirt.png"),
            "https://back.ifly.com.uz/uploads/shirt.png"
        );
        assert_eq!(
            resolve_media_url("https://back.ifly.com.uz/", "/uploads/shirt.png"),
            "https://back.ifly.com.uz/uploads/shirt.png"
        );
        assert_eq!(
            resolve_media_url(base, "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }
}
