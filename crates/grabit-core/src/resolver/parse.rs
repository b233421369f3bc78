//! Parse the probe's flat-playlist JSON into targets.

use serde::Deserialize;

use crate::target::DownloadTarget;

use super::ResolveError;

#[derive(Debug, Deserialize)]
struct FlatListing {
    #[serde(default)]
    entries: Option<Vec<FlatEntry>>,
}

#[derive(Debug, Deserialize)]
struct FlatEntry {
    #[serde(default)]
    id: Option<String>,
}

/// Targets for every entry with an id, in probe order.
///
/// `Ok(empty)` means "not a collection" (no `entries`, or none with an id);
/// the caller falls back to the input itself. Malformed JSON is an error.
pub fn targets_from_listing(
    json: &[u8],
    watch_url_template: &str,
) -> Result<Vec<DownloadTarget>, ResolveError> {
    let listing: FlatListing = serde_json::from_slice(json).map_err(ResolveError::Malformed)?;
    Ok(listing
        .entries
        .unwrap_or_default()
        .into_iter()
        .filter_map(|e| e.id)
        .filter(|id| !id.trim().is_empty())
        .map(|id| watch_url(watch_url_template, &id))
        .collect())
}

/// Fill `{id}` in the template; a template without `{id}` gets the id appended.
pub fn watch_url(template: &str, id: &str) -> DownloadTarget {
    if template.contains("{id}") {
        DownloadTarget::new(template.replace("{id}", id))
    } else {
        DownloadTarget::new(format!("{}{}", template, id))
    }
}
