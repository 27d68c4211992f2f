//! # Share Link Module
//!
//! Encodes the three selected ids into a preview URL and back.
//!
//! ## Link Format
//! ```text
//! https://shop.example/bag-preview?config=%7B%22fabric%22%3A%22red-grid%22...
//!                                         └──────────────┬──────────────┘
//!                      percent-encoded {"fabric":..,"strap":..,"strapColor":..}
//! ```
//!
//! Only ids travel; a decoded link is checked against the catalogs when it is
//! applied to a [`SelectionStore`].

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreError, CoreResult};
use crate::selection::{Configuration, SelectionIds, SelectionStore};

/// Query parameter carrying the configuration.
pub const SHARE_QUERY_PARAM: &str = "config";

/// A shareable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLink {
    pub ids: SelectionIds,
}

impl ShareLink {
    pub fn from_configuration(config: &Configuration) -> Self {
        ShareLink { ids: config.ids() }
    }

    /// Appends the configuration to `preview_url` as `?config=<json>`.
    ///
    /// Existing query parameters other than `config` are kept.
    ///
    /// ## Example
    /// ```rust
    /// use sling_core::{SelectionStore, ShareLink};
    ///
    /// let store = SelectionStore::with_builtin_catalog().unwrap();
    /// let link = ShareLink::from_configuration(store.configuration());
    /// let url = link.to_url("https://shop.example/bag-preview").unwrap();
    /// assert!(url.starts_with("https://shop.example/bag-preview?config="));
    /// assert_eq!(ShareLink::from_url(&url).unwrap(), link);
    /// ```
    pub fn to_url(&self, preview_url: &str) -> CoreResult<String> {
        let mut url = Url::parse(preview_url)
            .map_err(|e| CoreError::InvalidShareLink(format!("bad preview URL: {}", e)))?;
        let payload = serde_json::to_string(&self.ids)
            .map_err(|e| CoreError::InvalidShareLink(e.to_string()))?;

        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != SHARE_QUERY_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair(SHARE_QUERY_PARAM, &payload);

        Ok(url.into())
    }

    /// Reads the configuration back out of a share URL.
    pub fn from_url(link: &str) -> CoreResult<Self> {
        let url = Url::parse(link).map_err(|e| CoreError::InvalidShareLink(e.to_string()))?;
        let payload = url
            .query_pairs()
            .find(|(key, _)| key == SHARE_QUERY_PARAM)
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| {
                CoreError::InvalidShareLink(format!("missing '{}' parameter", SHARE_QUERY_PARAM))
            })?;

        let ids: SelectionIds = serde_json::from_str(&payload)
            .map_err(|e| CoreError::InvalidShareLink(e.to_string()))?;
        Ok(ShareLink { ids })
    }
}

/// Restores a shared configuration into `store`.
///
/// All three ids are checked first; on `InvalidSelection` the store keeps
/// its current configuration.
pub fn apply_share_link<'a>(
    store: &'a mut SelectionStore,
    link: &ShareLink,
) -> CoreResult<&'a Configuration> {
    store.apply(&link.ids)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Axis;

    const PREVIEW: &str = "http://localhost:8080/bag-preview";

    #[test]
    fn test_url_carries_json_payload() {
        let mut store = SelectionStore::with_builtin_catalog().unwrap();
        store.select_strap_color("gray").unwrap();

        let url = ShareLink::from_configuration(store.configuration())
            .to_url(PREVIEW)
            .unwrap();
        let parsed = Url::parse(&url).unwrap();
        let (_, payload) = parsed.query_pairs().next().unwrap();
        assert_eq!(
            payload,
            r#"{"fabric":"red-grid","strap":"flat-black","strapColor":"gray"}"#
        );
    }

    #[test]
    fn test_existing_query_is_kept() {
        let link = ShareLink {
            ids: SelectionIds::default(),
        };
        let url = link
            .to_url("https://shop.example/preview?ref=mail&config=old")
            .unwrap();
        let parsed = Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("ref".to_string(), "mail".to_string()));
        assert_eq!(ShareLink::from_url(&url).unwrap(), link);
    }

    #[test]
    fn test_from_url_errors() {
        assert!(matches!(
            ShareLink::from_url("not a url"),
            Err(CoreError::InvalidShareLink(_))
        ));
        assert!(matches!(
            ShareLink::from_url("https://shop.example/preview"),
            Err(CoreError::InvalidShareLink(_))
        ));
        assert!(matches!(
            ShareLink::from_url("https://shop.example/preview?config=%7Bnope"),
            Err(CoreError::InvalidShareLink(_))
        ));
    }

    #[test]
    fn test_apply_restores_configuration() {
        let mut source = SelectionStore::with_builtin_catalog().unwrap();
        source.select_fabric("brown-leather").unwrap();
        source.select_strap_style("padded-orange").unwrap();
        let url = ShareLink::from_configuration(source.configuration())
            .to_url(PREVIEW)
            .unwrap();

        let mut target = SelectionStore::with_builtin_catalog().unwrap();
        let link = ShareLink::from_url(&url).unwrap();
        apply_share_link(&mut target, &link).unwrap();
        assert_eq!(target.current_configuration(), source.current_configuration());
        assert_eq!(target.total_price(), source.total_price());
    }

    #[test]
    fn test_apply_foreign_link_changes_nothing() {
        let mut store = SelectionStore::with_builtin_catalog().unwrap();
        let before = store.current_configuration();
        let link = ShareLink {
            ids: SelectionIds {
                fabric: "red-grid".to_string(),
                strap: "chain".to_string(),
                strap_color: "gray".to_string(),
            },
        };

        let err = apply_share_link(&mut store, &link).unwrap_err();
        assert_eq!(err, CoreError::invalid_selection(Axis::Strap, "chain"));
        assert_eq!(store.current_configuration(), before);
    }
}
