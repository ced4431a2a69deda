use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;

use catalog::{DatasetPage, ProductPage, ProductSelection};

use crate::error::ApiError;
use crate::geojson::{PointFeature, point_feature};

/// Crop mask applied when the selection does not name one.
pub const DEFAULT_CROPMASK: &str = "no-mask";

/// Page size for dataset listings; large enough to fetch a product's full
/// date history in one request.
const DATASET_PAGE_LIMIT: u32 = 10_000;

#[derive(Debug, Serialize)]
struct QueryPayload<'a> {
    product_id: &'a str,
    date: String,
    geom: PointFeature,
    cropmask_id: &'a str,
}

/// Client for the remote agricultural data API.
///
/// Use [`DataApiClient::with_base_url`] to point at the production API or a
/// mock server in tests. The client holds no session state and performs no
/// retries.
#[derive(Debug)]
pub struct DataApiClient {
    client: Client,
    base_url: Url,
}

impl DataApiClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ApiError::InvalidBaseUrl`] if the URL
    /// does not parse.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        // Ensure exactly one trailing slash so joins append to the path
        // instead of replacing the last segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalized).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_owned()))?;

        Ok(Self { client, base_url })
    }

    /// Fetches the product catalog. `lang` picks the localization of
    /// display names.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure or non-2xx status.
    /// - [`ApiError::Deserialize`] if the response shape is unexpected.
    pub async fn products(&self, lang: &str) -> Result<ProductPage, ApiError> {
        let mut url = self.join("products")?;
        url.query_pairs_mut().append_pair("i18n", lang);

        let body = self.get_json(url).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Deserialize {
            context: format!("products(lang={lang})"),
            source: e,
        })
    }

    /// Lists the dated datasets available for a product.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure or non-2xx status.
    /// - [`ApiError::Deserialize`] if the response shape is unexpected.
    pub async fn dataset_entries(&self, product_id: &str) -> Result<DatasetPage, ApiError> {
        let mut url = self.join("datasets/")?;
        url.query_pairs_mut()
            .append_pair("product_id", product_id)
            .append_pair("limit", &DATASET_PAGE_LIMIT.to_string());

        let body = self.get_json(url).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Deserialize {
            context: format!("datasets(product_id={product_id})"),
            source: e,
        })
    }

    /// Queries the selected product's value at a point.
    ///
    /// The date is normalized to `YYYY-MM-DD`; `cropmask_id` falls back to
    /// [`DEFAULT_CROPMASK`] when `None`. The response is the raw JSON value
    /// the backend returns (a number, a structured result, or null).
    ///
    /// # Errors
    ///
    /// - [`ApiError::MissingProductId`] / [`ApiError::MissingDate`] before
    ///   any request is built.
    /// - [`ApiError::Http`] on network failure or non-2xx status.
    pub async fn query_point_value(
        &self,
        selection: &ProductSelection,
        lon: f64,
        lat: f64,
        cropmask_id: Option<&str>,
    ) -> Result<serde_json::Value, ApiError> {
        if selection.product_id.is_empty() {
            return Err(ApiError::MissingProductId);
        }
        if selection.date.is_empty() {
            return Err(ApiError::MissingDate);
        }

        let payload = QueryPayload {
            product_id: &selection.product_id,
            date: selection.normalized_date(),
            geom: point_feature(lon, lat),
            cropmask_id: cropmask_id.unwrap_or(DEFAULT_CROPMASK),
        };

        tracing::debug!(
            product_id = %payload.product_id,
            date = %payload.date,
            lon,
            lat,
            "sending point query"
        );

        let url = self.join("query/")?;
        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        let value = response.json().await?;
        Ok(value)
    }

    fn join(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))
    }

    async fn get_json(&self, url: Url) -> Result<serde_json::Value, ApiError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.json().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::DataApiClient;
    use crate::error::ApiError;

    #[test]
    fn base_url_gets_exactly_one_trailing_slash() {
        let a = DataApiClient::with_base_url("https://api.example.org", 30).unwrap();
        let b = DataApiClient::with_base_url("https://api.example.org///", 30).unwrap();
        assert_eq!(a.base_url.as_str(), "https://api.example.org/");
        assert_eq!(b.base_url.as_str(), "https://api.example.org/");
    }

    #[test]
    fn joined_paths_extend_the_base_path() {
        let client = DataApiClient::with_base_url("https://api.example.org/glam/v1", 30).unwrap();
        let url = client.join("datasets/").unwrap();
        assert_eq!(url.as_str(), "https://api.example.org/glam/v1/datasets/");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = DataApiClient::with_base_url("not a url", 30).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }
}
