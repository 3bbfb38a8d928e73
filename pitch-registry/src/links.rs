use url::Url;

const TRACKING_PREFIXES: [&str; 3] = ["utm_", "fbclid", "gclid"];

/// Splits the free-text links field for display. Nothing is validated.
pub fn split_links(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Keeps only http(s) links, without fragments or tracking parameters,
/// de-duplicated in first-seen order.
pub fn clean_links(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    for part in split_links(&raw.replace('\r', "")) {
        let Ok(mut url) = Url::parse(&part) else {
            continue;
        };
        if !matches!(url.scheme(), "http" | "https") {
            continue;
        }

        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| {
                let key = k.to_lowercase();
                !TRACKING_PREFIXES.iter().any(|p| key.starts_with(p))
            })
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        url.set_fragment(None);
        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(kept);
        }

        let clean = url.to_string();
        if !out.contains(&clean) {
            out.push(clean);
        }
    }

    out
}
