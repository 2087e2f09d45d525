/// Whether `path` is the site's landing page, the only place the welcome
/// popup appears.
///
/// The site is served both from a domain root and from a `…/website/`
/// sub-directory, with or without an explicit `index.html`.
pub fn is_home_path(path: &str) -> bool {
    let path = path.to_lowercase();
    path.is_empty()
        || path.ends_with('/')
        || path.contains("index.html")
        || (path.contains("website/") && !path.contains(".html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_paths() {
        for path in [
            "",
            "/",
            "/index.html",
            "/INDEX.HTML",
            "/dataprice.website/",
            "/dataprice.website/index.html",
            "/website/index.html",
            "/website/landing",
        ] {
            assert!(is_home_path(path), "{:?}", path);
        }
    }

    #[test]
    fn other_pages() {
        for path in [
            "/about.html",
            "/contact.html",
            "/auth/login.html",
            "/website/pricing.html",
            "/dashboard",
        ] {
            assert!(!is_home_path(path), "{:?}", path);
        }
    }
}
