use anyhow::{Result, anyhow};
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION},
    Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use shared_config::AppConfig;

use crate::query::Query;

pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    fn get_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        // The public site only ever talks to the store with the anon key.
        headers.insert("apikey", HeaderValue::from_str(&self.anon_key)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.anon_key))?,
        );

        Ok(headers)
    }

    pub async fn request<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T>
    where T: DeserializeOwned {
        self.request_with_headers(method, path, body, None).await
    }

    pub async fn request_with_headers<T>(&self, method: Method, path: &str,
                                         body: Option<Value>, extra_headers: Option<HeaderMap>)
                                         -> Result<T>
    where T: DeserializeOwned {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut headers = self.get_headers()?;
        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }

        let mut req = self.client.request(method, &url)
            .headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Authentication error: {}", error_text),
                404 => anyhow!("Resource not found: {}", error_text),
                _ => anyhow!("API error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Reads every row the query matches.
    pub async fn select<T>(&self, query: &Query) -> Result<Vec<T>>
    where T: DeserializeOwned {
        self.request(Method::GET, &query.to_path(), None).await
    }

    /// Reads the first matching row, `None` when nothing matches.
    pub async fn select_one<T>(&self, query: &Query) -> Result<Option<T>>
    where T: DeserializeOwned {
        let rows: Vec<T> = self.select(query).await?;
        Ok(rows.into_iter().next())
    }

    /// Reads with the query's ordering, retrying once without it when the
    /// sorted read fails (missing sort columns on older tables).
    pub async fn select_sorted<T>(&self, query: &Query) -> Result<Vec<T>>
    where T: DeserializeOwned {
        match self.select(query).await {
            Ok(rows) => Ok(rows),
            Err(e) => {
                warn!("Sorting {} failed, fallback to unordered read: {}", query.table_name(), e);
                self.select(&query.unordered()).await
            }
        }
    }

    /// Inserts rows and returns the stored representation.
    pub async fn insert(&self, table: &str, rows: Value) -> Result<Vec<Value>> {
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));

        self.request_with_headers(
            Method::POST,
            &format!("/rest/v1/{}", table),
            Some(rows),
            Some(headers),
        ).await
    }

    /// Public URL of an object in a storage bucket.
    pub fn get_public_url(&self, bucket: &str, object: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.base_url, bucket, object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared_config::MatchingMode;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::query::{Direction, Nulls};

    fn config(url: &str) -> AppConfig {
        AppConfig {
            supabase_url: url.to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
            port: 3000,
            matching_mode: MatchingMode::Strict,
            checkout_redirect_delay_ms: 3000,
        }
    }

    #[tokio::test]
    async fn sorted_read_falls_back_to_unordered() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/clinics"))
            .and(query_param("order", "sort_order.asc.nullslast,clinic_number.asc"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "message": "column clinics.sort_order does not exist"
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/clinics"))
            .and(header("apikey", "test-anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "name": "عيادة القلب" }
            ])))
            .mount(&mock_server)
            .await;

        let client = SupabaseClient::new(&config(&mock_server.uri()));
        let query = Query::table("clinics")
            .order_nulls("sort_order", Direction::Asc, Nulls::Last)
            .order("clinic_number", Direction::Asc);

        let rows: Vec<Value> = client.select_sorted(&query).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "عيادة القلب");
    }

    #[tokio::test]
    async fn insert_surfaces_store_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/appointments"))
            .and(header("Prefer", "return=representation"))
            .respond_with(ResponseTemplate::new(400).set_body_string("null value in column"))
            .mount(&mock_server)
            .await;

        let client = SupabaseClient::new(&config(&mock_server.uri()));
        let err = client.insert("appointments", json!([{ "patient_name": "x" }])).await.unwrap_err();
        assert!(err.to_string().contains("null value in column"));
    }

    #[test]
    fn public_url_joins_bucket_and_object() {
        let client = SupabaseClient::new(&config("https://store.example.co/"));
        assert_eq!(
            client.get_public_url("equipment-images", "ct-scan.jpg.png"),
            "https://store.example.co/storage/v1/object/public/equipment-images/ct-scan.jpg.png"
        );
    }
}
