//! Episode URLs
//!
//!     Indie Hackers episode pages live at `https://www.indiehackers.com/podcast/<slug>`, where the
//!     slug is `<number>-<guest words...>`, e.g. `086-lynne-tye-of-key-values`. The guest name
//!     taken from the slug is only a hint (it is lowercase and may carry company names); the
//!     transcript's own speaker names are authoritative.

use url::Url;

const SITE_DOMAIN: &str = "indiehackers.com";
const PODCAST_PATH: &str = "/podcast/";

/// Number and slug-derived guest of an episode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeInfo {
    pub episode_number: String,
    pub guest_name: String,
}

/// Host is `indiehackers.com` or one of its subdomains
pub fn is_indie_hackers_url(url: &str) -> bool {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(is_site_host))
        .unwrap_or(false)
}

fn is_site_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    host == SITE_DOMAIN
        || host
            .strip_suffix(SITE_DOMAIN)
            .map(|prefix| prefix.ends_with('.'))
            .unwrap_or(false)
}

pub fn is_podcast_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => is_indie_hackers_url(url) && parsed.path().contains(PODCAST_PATH),
        Err(_) => false,
    }
}

pub fn extract_episode_info(url: &str) -> Option<EpisodeInfo> {
    if !is_podcast_url(url) {
        return None;
    }
    let parsed = Url::parse(url).ok()?;
    let slug = parsed.path().split(PODCAST_PATH).nth(1)?;
    if slug.is_empty() {
        return None;
    }

    let mut parts = slug.split('-');
    let episode_number = parts.next()?.to_string();
    let guest_name = parts.collect::<Vec<_>>().join(" ");
    Some(EpisodeInfo {
        episode_number,
        guest_name,
    })
}

/// Loose check applied before extracting from a tab: the raw address mentions the site and a
/// podcast path. Unlike [is_podcast_url] it does not require a parseable URL.
pub fn looks_like_episode_tab(url: &str) -> bool {
    !url.is_empty() && url.contains(SITE_DOMAIN) && url.contains(PODCAST_PATH)
}
