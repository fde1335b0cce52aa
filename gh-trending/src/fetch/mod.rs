//! Trending page download.
//!
//! Builds the listing URL for a [`TrendingQuery`] and fetches its markup.
//! There is deliberately no retry here.

mod error;

pub use error::FetchError;

use crate::config::TrendingQuery;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, info_span, Instrument};
use url::Url;

/// Default HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("gh-trending/", env!("CARGO_PKG_VERSION"));

/// Builds the trending page URL for a query.
///
/// Format: `{origin}trending[/{language}]?since={period}&spoken_language_code={code}`
///
/// The language is lower-cased; both query keys are always present.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] if `origin` cannot be a base URL.
pub fn trending_url(origin: &Url, query: &TrendingQuery) -> Result<Url, FetchError> {
    let mut url = origin.join("trending")?;

    if let Some(language) = query.language.as_deref().filter(|l| !l.is_empty()) {
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(&language.to_lowercase());
    }

    url.query_pairs_mut()
        .append_pair("since", query.period.as_str())
        .append_pair(
            "spoken_language_code",
            query.spoken_language.as_deref().unwrap_or_default(),
        );

    Ok(url)
}

/// Builds the HTTP client used for fetching.
///
/// # Errors
///
/// Returns [`FetchError::Client`] if the TLS backend cannot be initialised.
pub fn build_client(timeout: Duration) -> Result<Client, FetchError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(FetchError::Client)
}

/// Downloads a page and returns its body.
///
/// # Errors
///
/// Returns [`FetchError::Request`] on transport failure and
/// [`FetchError::Status`] on a non-success response.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, FetchError> {
    let span = info_span!("fetch", url = %url);

    async {
        debug!("Sending request");

        let request_error = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(request_error)?;
        info!(bytes = body.len(), "Fetched page");
        Ok(body)
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Period;
    use crate::repository::GITHUB_ORIGIN;

    fn github() -> Url {
        Url::parse(GITHUB_ORIGIN).unwrap()
    }

    #[test]
    fn default_query_url() {
        let url = trending_url(&github(), &TrendingQuery::default()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://github.com/trending?since=daily&spoken_language_code="
        );
    }

    #[test]
    fn language_is_lowercased_path_segment() {
        let query = TrendingQuery::new(Period::Weekly)
            .with_language("TypeScript")
            .with_spoken_language("ja");
        let url = trending_url(&github(), &query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://github.com/trending/typescript?since=weekly&spoken_language_code=ja"
        );
    }

    #[test]
    fn language_special_characters_are_encoded() {
        let query = TrendingQuery::default().with_language("C#");
        let url = trending_url(&github(), &query).unwrap();
        assert_eq!(url.path(), "/trending/c%23");
    }

    #[test]
    fn empty_language_is_ignored() {
        let query = TrendingQuery::default().with_language("");
        let url = trending_url(&github(), &query).unwrap();
        assert_eq!(url.path(), "/trending");
    }

    #[test]
    fn custom_origin_is_respected() {
        let origin = Url::parse("http://127.0.0.1:8080/").unwrap();
        let url = trending_url(&origin, &TrendingQuery::new(Period::Monthly)).unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/trending?since=monthly&spoken_language_code="
        );
    }

    #[test]
    fn rejects_non_base_origin() {
        let origin = Url::parse("mailto:someone@example.com").unwrap();
        let query = TrendingQuery::default().with_language("rust");
        assert!(matches!(
            trending_url(&origin, &query),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
