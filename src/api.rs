//! Client for the sensitivity conversion backend.
//!
//! Two endpoints are consumed:
//! - `GET {base}/games` returning `{ "games": [...] }`
//! - `POST {base}/convert_sensitivity` returning `{ target_sensitivity, cm_360 }`,
//!   or an error body carrying a `detail` message.

use gloo_net::http::{Request, Response};
use tracing::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GENERIC_NETWORK_ERROR: &str = "A network error occurred. Check server logs.";
pub const CATALOG_LOAD_ERROR: &str =
    "Failed to fetch game list. Please check the backend connection.";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GamesResponse {
    pub games: Vec<String>,
}

/// Body of a conversion request. Game names are sent lower-cased.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRequest {
    pub source_game: String,
    pub target_game: String,
    pub source_sensitivity: f64,
    pub source_mouse_dpi: u32,
    pub target_mouse_dpi: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub target_sensitivity: f64,
    pub cm_360: f64,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("server responded with {status}")]
    Status { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Message suitable for the inline error text.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => GENERIC_NETWORK_ERROR.to_string(),
        }
    }
}

/// Pull a human readable `detail` string out of an error body.
/// Non-string details (e.g. validation error lists) are ignored.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = response.text().await.ok().and_then(|body| extract_detail(&body));
    warn!("Backend returned {} ({:?})", status, detail);
    Err(ApiError::Status { status, detail })
}

/// Fetch the list of supported games.
pub async fn fetch_games(base_url: &str) -> Result<Vec<String>, ApiError> {
    let url = format!("{}/games", base_url);
    debug!("GET {}", url);
    let response = check_status(Request::get(&url).send().await?).await?;
    let body: GamesResponse = response.json().await?;
    Ok(body.games)
}

/// Ask the backend to convert a sensitivity between two games.
pub async fn convert_sensitivity(
    base_url: &str,
    request: &ConversionRequest,
) -> Result<ConversionResult, ApiError> {
    let url = format!("{}/convert_sensitivity", base_url);
    debug!("POST {} {:?}", url, request);
    let response = check_status(Request::post(&url).json(request)?.send().await?).await?;
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_backend_schema() {
        let request = ConversionRequest {
            source_game: "valorant".into(),
            target_game: "csgo".into(),
            source_sensitivity: 1.0,
            source_mouse_dpi: 800,
            target_mouse_dpi: 800,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "source_game": "valorant",
                "target_game": "csgo",
                "source_sensitivity": 1.0,
                "source_mouse_dpi": 800,
                "target_mouse_dpi": 800,
            })
        );
    }

    #[test]
    fn responses_decode() {
        let games: GamesResponse =
            serde_json::from_str(r#"{"games":["Valorant","CSGO"]}"#).unwrap();
        assert_eq!(games.games, vec!["Valorant", "CSGO"]);

        let result: ConversionResult =
            serde_json::from_str(r#"{"target_sensitivity":1.23,"cm_360":30}"#).unwrap();
        assert_eq!(
            result,
            ConversionResult {
                target_sensitivity: 1.23,
                cm_360: 30.0
            }
        );
    }

    #[test]
    fn detail_extraction() {
        assert_eq!(
            extract_detail(r#"{"detail":"Game 'quake' not found"}"#).as_deref(),
            Some("Game 'quake' not found")
        );
        assert_eq!(extract_detail(r#"{"detail":[{"loc":["body"]}]}"#), None);
        assert_eq!(extract_detail(r#"{"detail":""}"#), None);
        assert_eq!(extract_detail("<html>502</html>"), None);
    }

    #[test]
    fn user_message_prefers_server_detail() {
        let with_detail = ApiError::Status {
            status: 404,
            detail: Some("Game 'quake' not found".into()),
        };
        assert_eq!(with_detail.user_message(), "Game 'quake' not found");

        let without = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(without.user_message(), GENERIC_NETWORK_ERROR);
        assert_eq!(without.to_string(), "server responded with 500");
    }
}
