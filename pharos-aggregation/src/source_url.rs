//! Page-URL reconstruction from CDN-log object keys.
//!
//! Log objects are keyed `{encoded-host}/{page path…}` where the host has
//! its dots replaced by underscores at ingest time.

/// Reconstruct the page URL encoded in a CDN-log object key.
///
/// Returns `None` for keys with no host segment. The current mapping keeps
/// only the last two labels of the encoded host, so subdomains are dropped
/// and multi-part TLDs collapse (`news_example_co_uk` → `https://co.uk/…`).
/// Existing report URLs depend on this mapping.
// TODO: reconstructing full hosts needs a public-suffix lookup plus a
// migration for stored report URLs.
pub fn reconstruct_url_from_s3_key(key: &str) -> Option<String> {
    let mut segments = key.split('/').filter(|s| !s.is_empty());
    let encoded_host = segments.next()?;

    let labels: Vec<&str> = encoded_host.split('_').filter(|s| !s.is_empty()).collect();
    if labels.is_empty() {
        return None;
    }
    let tail_start = labels.len().saturating_sub(2);
    let host = labels[tail_start..].join(".");

    let path = segments.collect::<Vec<_>>().join("/");
    if path.is_empty() {
        Some(format!("https://{host}/"))
    } else {
        Some(format!("https://{host}/{path}"))
    }
}
