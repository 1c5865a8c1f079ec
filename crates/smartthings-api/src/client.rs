// Async HTTP client for the SmartThings REST API.
//
// Base URL: https://api.smartthings.com
// Auth: `Authorization: Bearer <token>`, media type pinned via `Accept`.

use secrecy::SecretString;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::transport::TransportConfig;
use crate::types::{DeviceCommand, DeviceItem, Items, LocationItem, SceneItem};

/// Fixed cloud endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.smartthings.com";

/// The two verbs the API surface needs. Anything else is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the SmartThings REST API.
///
/// Every request carries the bearer token and the versioned `Accept`
/// header. Collection reads return the parsed `items`; commands return
/// `()` on any 2xx status.
#[derive(Debug, Clone)]
pub struct SmartThingsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SmartThingsClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a bearer token against `base_url`.
    ///
    /// The token is not validated; a bad token only surfaces as a 401
    /// from the first call.
    pub fn from_token(
        base_url: &str,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client(token)?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Ensure the base path ends with `/` so path segments append cleanly.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(raw.to_owned()));
        }

        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        url.set_query(None);

        Ok(url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append path segments to the base URL, percent-encoding each one.
    ///
    /// Raw ids go through here, so an id containing `/` stays a single
    /// segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // normalize_base_url rejected cannot-be-a-base URLs.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    // ── Request helper ───────────────────────────────────────────────

    /// Send one request and return the raw response.
    ///
    /// Status codes are not interpreted here; callers decide whether to
    /// parse the body or fail on status.
    pub(crate) async fn request<B: Serialize + Sync + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<reqwest::Response, Error> {
        let url = self.url(segments);

        let mut builder = match method {
            Method::Get => {
                debug!("GET {url}");
                self.http.get(url)
            }
            Method::Post => {
                debug!("POST {url}");
                self.http.post(url)
            }
        };

        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        Ok(builder.send().await?)
    }

    async fn get_items<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, Error> {
        let resp = self
            .request::<()>(Method::Get, segments, query, None)
            .await?;
        let page: Items<T> = Self::handle_response(resp).await?;
        Ok(page.items)
    }

    async fn post_no_response<B: Serialize + Sync + ?Sized>(
        &self,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<(), Error> {
        let resp = self.request(Method::Post, segments, &[], body).await?;
        Self::handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            let head = preview(&body);
            Error::UnexpectedResponse {
                message: format!("{e} (body preview: {head:?})"),
                body,
            }
        })
    }

    async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::RemoteCommand {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            })
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Locations ────────────────────────────────────────────────────

    pub async fn list_locations(&self) -> Result<Vec<LocationItem>, Error> {
        self.get_items(&["locations"], &[]).await
    }

    // ── Devices ──────────────────────────────────────────────────────

    pub async fn list_devices(&self, location_id: &str) -> Result<Vec<DeviceItem>, Error> {
        self.get_items(&["devices"], &[("locationId", location_id)])
            .await
    }

    pub async fn send_device_command(
        &self,
        device_id: &str,
        command: &DeviceCommand,
    ) -> Result<(), Error> {
        self.post_no_response(&["devices", device_id, "commands"], Some(command))
            .await
    }

    // ── Scenes ───────────────────────────────────────────────────────

    pub async fn list_scenes(&self, location_id: &str) -> Result<Vec<SceneItem>, Error> {
        self.get_items(&["scenes"], &[("locationId", location_id)])
            .await
    }

    pub async fn execute_scene(&self, scene_id: &str) -> Result<(), Error> {
        self.post_no_response::<()>(&["scenes", scene_id, "execute"], None)
            .await
    }
}

/// First 200 bytes of a body, cut on a char boundary.
fn preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
