use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::api::def::{RemoteVersionSource, SourceError, SourceResult};
use crate::api::http_failure::handle_response_fail;
use crate::config::PortalConfig;
use crate::http_client::new_http_client;

/// Lists installable versions from the Adoptium release-listing endpoint.
pub struct AdoptiumVersionSource {
    client: ureq::Agent,
    base_url: String,
}

impl AdoptiumVersionSource {
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            client: new_http_client(),
            base_url: config.base_url.clone(),
        }
    }

    // Grabs a page of the most recent GA release names, newest first.
    fn release_names_url(&self) -> SourceResult<Url> {
        Url::parse_with_params(
            &format!("{}/info/release_names", self.base_url),
            &[
                ("release_type", "ga"),
                ("sort_order", "DESC"),
                ("page", "0"),
                ("page_size", "20"),
            ],
        )
        .map_err(|error| SourceError::Generic {
            message: format!("invalid base URL {:?}: {}", self.base_url, error),
        })
    }
}

impl RemoteVersionSource for AdoptiumVersionSource {
    fn fetch_available(&self) -> SourceResult<Vec<String>> {
        let url = self.release_names_url()?;
        debug!("fetching release names from {}", url);
        let response = self.client.get(url.as_str()).call()?;
        if !response.status().is_success() {
            return Err(handle_response_fail(
                response,
                "Failed to list available versions",
            ));
        }
        let page: ReleaseNamesPage = response
            .into_body()
            .read_json()
            .map_err(|error| SourceError::Decode {
                message: error.to_string(),
            })?;
        if page.releases.is_empty() {
            return Err(SourceError::Decode {
                message: "no releases returned from the Adoptium API".to_string(),
            });
        }
        Ok(page.releases)
    }
}

#[derive(Debug, Deserialize)]
struct ReleaseNamesPage {
    releases: Vec<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    fn source_with_base(base_url: &str) -> AdoptiumVersionSource {
        AdoptiumVersionSource {
            client: new_http_client(),
            base_url: base_url.to_string(),
        }
    }

    #[test]
    fn release_names_url_targets_ga_releases() {
        let url = source_with_base("https://api.adoptium.net/v3")
            .release_names_url()
            .unwrap();
        assert_eq!(url.path(), "/v3/info/release_names");
        let params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(params.contains(&("release_type".to_string(), "ga".to_string())));
        assert!(params.contains(&("sort_order".to_string(), "DESC".to_string())));
    }

    #[test]
    fn release_names_url_rejects_garbage_base() {
        let result = source_with_base("not a url").release_names_url();
        assert!(matches!(result, Err(SourceError::Generic { .. })));
    }
}
