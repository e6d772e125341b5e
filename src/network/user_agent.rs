//! User agent generation

use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a random but realistic user agent string
pub fn generate_user_agent() -> String {
    let mut rng = rand::thread_rng();

    // Chrome versions (recent)
    let chrome_versions = [
        "122.0.0.0",
        "123.0.0.0",
        "124.0.0.0",
        "125.0.0.0",
        "126.0.0.0",
    ];

    // Firefox versions (recent)
    let firefox_versions = ["123.0", "124.0", "125.0", "126.0"];

    // Operating systems
    let os_strings = [
        "Windows NT 10.0; Win64; x64",
        "Macintosh; Intel Mac OS X 10_15_7",
        "X11; Linux x86_64",
        "X11; Ubuntu; Linux x86_64",
    ];

    let os = os_strings
        .choose(&mut rng)
        .copied()
        .unwrap_or(os_strings[0]);

    // Chrome 70% of the time, Firefox otherwise
    if rng.gen_range(0..10) < 7 {
        let chrome = chrome_versions
            .choose(&mut rng)
            .copied()
            .unwrap_or(chrome_versions[0]);
        format!(
            "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
            os, chrome
        )
    } else {
        let firefox = firefox_versions
            .choose(&mut rng)
            .copied()
            .unwrap_or(firefox_versions[0]);
        format!(
            "Mozilla/5.0 ({}; rv:{}) Gecko/20100101 Firefox/{}",
            os, firefox, firefox
        )
    }
}

/// Standard accept header for HTML requests
pub fn accept_html() -> &'static str {
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8"
}

/// Standard accept-language header
pub fn accept_language() -> &'static str {
    "en-US,en;q=0.9"
}
