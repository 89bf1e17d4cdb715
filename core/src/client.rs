//! Read-only client for the public Mastodon REST endpoints.
//!
//! # Design
//! Every endpoint runs the same pipeline: join the server address and a fixed
//! path, build a GET request carrying the configured User-Agent, execute it
//! through the `Transport`, require status 200, and decode the body as JSON.
//! The steps are public (`endpoint_url`, `build_request`, `send_request`,
//! `parse_response`) so callers that do their own I/O can reuse the parts
//! they need; the endpoint methods are one-line compositions of them.
//!
//! `MastodonClient` holds no mutable state. Sharing one across threads is
//! fine as long as the transport is, which the default `UreqTransport` is.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::types::{
    DomainsBlocked, Emojis, Instance, InstanceActivity, InstancePeers, InstanceRules,
    LegacyInstance, TrendLinks, TrendTags,
};

pub const CUSTOM_EMOJIS_PATH: &str = "/api/v1/custom_emojis";
pub const INSTANCE_PATH: &str = "/api/v2/instance";
pub const INSTANCE_V1_PATH: &str = "/api/v1/instance";
pub const INSTANCE_PEERS_PATH: &str = "/api/v1/instance/peers";
pub const INSTANCE_ACTIVITY_PATH: &str = "/api/v1/instance/activity";
pub const INSTANCE_RULES_PATH: &str = "/api/v1/instance/rules";
pub const DOMAINS_BLOCKED_PATH: &str = "/api/v1/instance/domain_block";
pub const TRENDING_LINKS_PATH: &str = "/api/v1/trends/links";
pub const TRENDING_TAGS_PATH: &str = "/api/v1/trends/tags";

/// Client bound to a single Mastodon server.
#[derive(Debug, Clone)]
pub struct MastodonClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl MastodonClient<UreqTransport> {
    /// Client for `server` with the default user agent and timeout.
    ///
    /// `server` must include the scheme, e.g. `https://mastodon.social`.
    pub fn new(server: &str) -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::new(server))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = UreqTransport::new(config.timeout());
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> MastodonClient<T> {
    /// Client that executes requests through `transport`. The timeout in
    /// `config` is informational here; enforcing it is up to the transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn server(&self) -> &str {
        self.config.server()
    }

    pub fn user_agent(&self) -> &str {
        self.config.user_agent()
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{path}", self.config.server())
    }

    pub fn build_request(&self, url: &str) -> HttpRequest {
        HttpRequest {
            url: url.to_string(),
            headers: vec![("User-Agent".to_string(), self.config.user_agent().to_string())],
        }
    }

    /// GET `url` and return the body of a 200 response unaltered.
    pub fn send_request(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        self.fetch(url).map(|response| response.body)
    }

    /// Require a 200 response and decode its body as `D`.
    pub fn parse_response<D: DeserializeOwned>(
        &self,
        response: HttpResponse,
    ) -> Result<D, ApiError> {
        let response = check_status(response)?;
        decode(&response)
    }

    #[instrument(level = "debug", skip(self))]
    fn fetch(&self, url: &str) -> Result<HttpResponse, ApiError> {
        debug!("sending request");
        let response = self.transport.execute(&self.build_request(url))?;
        check_status(response)
    }

    fn get<D: DeserializeOwned>(&self, path: &str) -> Result<D, ApiError> {
        let response = self.fetch(&self.endpoint_url(path))?;
        decode(&response)
    }

    /// Custom emojis available on the server.
    pub fn custom_emojis(&self) -> Result<Emojis, ApiError> {
        self.get(CUSTOM_EMOJIS_PATH)
    }

    /// General information about the server (v2 profile).
    pub fn instance(&self) -> Result<Instance, ApiError> {
        self.get(INSTANCE_PATH)
    }

    /// General information about the server, from the v1 endpoint that
    /// servers older than Mastodon 4.0 still use.
    pub fn instance_v1(&self) -> Result<LegacyInstance, ApiError> {
        self.get(INSTANCE_V1_PATH)
    }

    /// Domains this server is aware of.
    pub fn instance_peers(&self) -> Result<InstancePeers, ApiError> {
        self.get(INSTANCE_PEERS_PATH)
    }

    /// Activity over the last three months, binned weekly.
    pub fn instance_activity(&self) -> Result<InstanceActivity, ApiError> {
        self.get(INSTANCE_ACTIVITY_PATH)
    }

    /// Rules that users of this server should follow.
    pub fn instance_rules(&self) -> Result<InstanceRules, ApiError> {
        self.get(INSTANCE_RULES_PATH)
    }

    /// Domains the server has blocked, when it chooses to publish them.
    pub fn domains_blocked(&self) -> Result<DomainsBlocked, ApiError> {
        self.get(DOMAINS_BLOCKED_PATH)
    }

    /// Links that have been shared more than others.
    pub fn trending_links(&self) -> Result<TrendLinks, ApiError> {
        self.get(TRENDING_LINKS_PATH)
    }

    /// Tags that are being used more frequently within the past week.
    pub fn trending_tags(&self) -> Result<TrendTags, ApiError> {
        self.get(TRENDING_TAGS_PATH)
    }
}

/// Map anything but 200 to `RequestFailed`, keeping the body for diagnostics.
fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.status == 200 {
        debug!(bytes = response.body.len(), "received response");
        return Ok(response);
    }
    warn!(status = response.status, "request failed");
    Err(ApiError::RequestFailed {
        status: response.status,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    })
}

fn decode<D: DeserializeOwned>(response: &HttpResponse) -> Result<D, ApiError> {
    serde_json::from_slice(&response.body).map_err(|e| {
        warn!(
            content_type = response.header("content-type").unwrap_or("<none>"),
            error = %e,
            "response body does not match the expected shape"
        );
        ApiError::Decode(e)
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Transport that records requests and replays a canned response.
    struct CannedTransport {
        status: u16,
        body: &'static str,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl Transport for CannedTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(HttpResponse {
                status: self.status,
                headers: Vec::new(),
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    struct TimingOutTransport;

    impl Transport for TimingOutTransport {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            Err(ApiError::Timeout)
        }
    }

    fn canned(status: u16, body: &'static str) -> MastodonClient<CannedTransport> {
        MastodonClient::with_transport(
            ClientConfig::new("https://mastodon.social"),
            CannedTransport::new(status, body),
        )
        .unwrap()
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn new_client_uses_defaults() {
        let client = MastodonClient::new("https://infosec.exchange").unwrap();
        assert_eq!(client.server(), "https://infosec.exchange");
        assert_eq!(client.timeout(), Duration::from_secs(5));
        assert_eq!(client.user_agent(), "mastodon-public-api");
    }

    #[test]
    fn new_client_rejects_schemeless_server() {
        let err = MastodonClient::new("infosec.exchange").unwrap_err();
        assert!(matches!(err, ApiError::InvalidServer(_)));
    }

    #[test]
    fn with_transport_validates_too() {
        let result = MastodonClient::with_transport(
            ClientConfig::new("mastodon.social"),
            CannedTransport::new(200, "[]"),
        );
        assert!(matches!(result, Err(ApiError::InvalidServer(_))));
    }

    #[test]
    fn endpoint_url_joins_server_and_path() {
        let client = canned(200, "[]");
        assert_eq!(
            client.endpoint_url(INSTANCE_PEERS_PATH),
            "https://mastodon.social/api/v1/instance/peers"
        );
    }

    #[test]
    fn build_request_sets_user_agent() {
        let client = MastodonClient::with_transport(
            ClientConfig::new("https://mastodon.social").with_user_agent("fedi-census/0.3"),
            CannedTransport::new(200, "[]"),
        )
        .unwrap();
        let req = client.build_request("https://mastodon.social/api/v1/custom_emojis");
        assert_eq!(req.url, "https://mastodon.social/api/v1/custom_emojis");
        assert_eq!(
            req.headers,
            vec![("User-Agent".to_string(), "fedi-census/0.3".to_string())]
        );
    }

    #[test]
    fn send_request_returns_body_unaltered() {
        let client = canned(200, "{\"status\": \"success\"}\n");
        let body = client.send_request("https://mastodon.social/").unwrap();
        assert_eq!(body, b"{\"status\": \"success\"}\n");
    }

    #[test]
    fn endpoints_hit_their_paths() {
        let client = canned(200, "[]");
        client.custom_emojis().unwrap();
        client.instance_peers().unwrap();
        client.instance_activity().unwrap();
        client.instance_rules().unwrap();
        client.domains_blocked().unwrap();
        client.trending_links().unwrap();
        client.trending_tags().unwrap();

        let urls: Vec<String> = client
            .transport
            .seen
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.url.clone())
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://mastodon.social/api/v1/custom_emojis",
                "https://mastodon.social/api/v1/instance/peers",
                "https://mastodon.social/api/v1/instance/activity",
                "https://mastodon.social/api/v1/instance/rules",
                "https://mastodon.social/api/v1/instance/domain_block",
                "https://mastodon.social/api/v1/trends/links",
                "https://mastodon.social/api/v1/trends/tags",
            ]
        );
    }

    #[test]
    fn instance_endpoints_use_versioned_paths() {
        let client = canned(200, "{}");
        client.instance().unwrap();
        client.instance_v1().unwrap();
        let seen = client.transport.seen.lock().unwrap();
        assert_eq!(seen[0].url, "https://mastodon.social/api/v2/instance");
        assert_eq!(seen[1].url, "https://mastodon.social/api/v1/instance");
    }

    #[test]
    fn non_200_is_request_failed() {
        let client = canned(404, "Not Found");
        let err = client.instance_peers().unwrap_err();
        assert!(matches!(
            err,
            ApiError::RequestFailed { status: 404, ref body } if body == "Not Found"
        ));
    }

    #[test]
    fn other_success_codes_are_still_failures() {
        let client = canned(204, "");
        let err = client.send_request("https://mastodon.social/").unwrap_err();
        assert!(matches!(err, ApiError::RequestFailed { status: 204, .. }));
    }

    #[test]
    fn unauthorized_surfaces_as_request_failed() {
        let client = canned(401, r#"{"error": "This API requires an authenticated user"}"#);
        let err = client.instance_activity().unwrap_err();
        assert!(matches!(err, ApiError::RequestFailed { status: 401, .. }));
    }

    #[test]
    fn shape_mismatch_is_decode_error() {
        let client = canned(200, r#"{"peers": []}"#);
        let err = client.instance_peers().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let client = canned(200, "not json");
        assert!(matches!(client.instance_rules().unwrap_err(), ApiError::Decode(_)));
    }

    #[test]
    fn transport_errors_propagate_untouched() {
        let client = MastodonClient::with_transport(
            ClientConfig::new("https://mastodon.social"),
            TimingOutTransport,
        )
        .unwrap();
        assert!(matches!(client.trending_tags().unwrap_err(), ApiError::Timeout));
    }

    #[test]
    fn parse_response_decodes_200() {
        let client = canned(200, "[]");
        let peers: InstancePeers = client
            .parse_response(response(200, r#"["tilde.zone","mspsocial.net","conf.tube"]"#))
            .unwrap();
        assert_eq!(peers, vec!["tilde.zone", "mspsocial.net", "conf.tube"]);
    }

    #[test]
    fn html_maintenance_page_is_decode_error() {
        let client = canned(200, "[]");
        let maintenance = HttpResponse {
            status: 200,
            headers: vec![("Content-Type".to_string(), "text/html".to_string())],
            body: b"<html>down for maintenance</html>".to_vec(),
        };
        assert_eq!(maintenance.header("content-type"), Some("text/html"));
        let err = client.parse_response::<InstanceRules>(maintenance).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn parse_response_rejects_non_200() {
        let client = canned(200, "[]");
        let err = client
            .parse_response::<InstancePeers>(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::RequestFailed { status: 500, .. }));
    }

    #[test]
    fn client_is_shareable_across_threads() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<MastodonClient>();
    }
}
