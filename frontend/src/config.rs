use web_sys::window;

/// Resolves a gift image path against the current origin, so the page works
/// the same from a local dev server and from wherever it is hosted.
pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }

    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            let protocol = window
                .location()
                .protocol()
                .unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}{}", protocol, host, path);
        }
    }

    path.to_string()
}
