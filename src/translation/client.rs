use anyhow::{Context, Result};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use super::error::TranslationError;

/// Google Translate v2 REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/language/translate/v2";

/// One phrase to translate. Built per entry and dropped after the call.
#[derive(Debug, Clone, Copy)]
pub struct TranslationRequest<'a> {
    pub api_key: &'a str,
    pub phrase: &'a str,
    pub source: &'a str,
    pub target: &'a str,
}

/// Translates a single phrase between two language codes.
pub trait Translator {
    fn translate(
        &self,
        request: &TranslationRequest<'_>,
    ) -> impl Future<Output = Result<String, TranslationError>> + Send;
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslationData,
}

#[derive(Debug, Deserialize)]
struct TranslationData {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

/// [`Translator`] backed by the Google Translate v2 API (or anything that
/// speaks the same GET + JSON protocol).
pub struct GoogleTranslateClient {
    client: Client,
    endpoint: Url,
}

impl GoogleTranslateClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid translation endpoint URL: {endpoint}"))?;

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    fn request_url(&self, request: &TranslationRequest<'_>) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("key", request.api_key)
            .append_pair("q", request.phrase)
            .append_pair("source", request.source)
            .append_pair("target", request.target);
        url
    }
}

impl Translator for GoogleTranslateClient {
    async fn translate(&self, request: &TranslationRequest<'_>) -> Result<String, TranslationError> {
        let response = self
            .client
            .get(self.request_url(request))
            .send()
            .await
            .map_err(TranslationError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TranslationError::Status {
                status: status.as_u16(),
            });
        }

        let body: TranslateResponse = response.json().await.map_err(TranslationError::Decode)?;

        body.data
            .translations
            .into_iter()
            .next()
            .map(|translation| translation.translated_text)
            .ok_or(TranslationError::EmptyResult)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn create_test_request() -> TranslationRequest<'static> {
        TranslationRequest {
            api_key: "abc",
            phrase: "The cat jumped over the hat",
            source: "en",
            target: "es",
        }
    }

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let result = GoogleTranslateClient::new("not a url");
        assert!(result.is_err());
        assert!(
            result
                .err()
                .unwrap()
                .to_string()
                .contains("Invalid translation endpoint")
        );
    }

    #[test]
    fn test_request_url_carries_query_parameters() {
        let client = GoogleTranslateClient::new(DEFAULT_ENDPOINT).unwrap();
        let url = client.request_url(&create_test_request());

        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(url.path(), "/language/translate/v2");
        assert_eq!(params["key"], "abc");
        assert_eq!(params["q"], "The cat jumped over the hat");
        assert_eq!(params["source"], "en");
        assert_eq!(params["target"], "es");
    }

    #[test]
    fn test_request_url_keeps_existing_query() {
        let client = GoogleTranslateClient::new("http://localhost:8080/v2?format=text").unwrap();
        let url = client.request_url(&create_test_request());

        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(params["format"], "text");
        assert_eq!(params["target"], "es");
    }

    #[test]
    fn test_request_url_encodes_non_ascii_phrase() {
        let client = GoogleTranslateClient::new(DEFAULT_ENDPOINT).unwrap();
        let request = TranslationRequest {
            phrase: "猫 & 帽子",
            ..create_test_request()
        };
        let url = client.request_url(&request);

        assert!(url.as_str().is_ascii());
        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(params["q"], "猫 & 帽子");
    }

    #[test]
    fn test_parse_response() {
        let json = r#"{"data":{"translations":[{"translatedText":"El gato saltó sobre el sombrero"}]}}"#;
        let response: TranslateResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.data.translations.len(), 1);
        assert_eq!(
            response.data.translations[0].translated_text,
            "El gato saltó sobre el sombrero"
        );
    }

    #[test]
    fn test_parse_response_without_translations() {
        let response: TranslateResponse = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(response.data.translations.is_empty());
    }
}
