//! Document store endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where the document store lives and how its URL space is laid out.
///
/// The store exposes PUT/GET/DELETE/PATCH and subscription semantics over
/// hierarchical paths; everything the client touches hangs off
/// `{host}{path}`, and authentication is a separate endpoint at
/// `{host}{auth_path}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Store host, e.g. `http://localhost:4318`.
    #[serde(default)]
    pub host: String,

    /// Root path of the client's database on that host, e.g. `/v1/p2group61/`.
    #[serde(default)]
    pub path: String,

    /// Path of the token endpoint, e.g. `/auth`.
    #[serde(default)]
    pub auth_path: String,
}

impl DatabaseConfig {
    /// Check if the minimum required fields for reaching the store are set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.host.is_empty() && !self.path.is_empty()
    }

    /// Root URL of the client's database.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}{}", self.host, self.path)
    }

    /// URL of the token endpoint.
    #[must_use]
    pub fn auth_url(&self) -> String {
        format!("{}{}", self.host, self.auth_path)
    }

    /// URL of a document, given its hierarchical store path
    /// (e.g. `/workspaces/general/channels/random`).
    ///
    /// At most one leading slash is dropped, then the rest is
    /// percent-encoded as one segment, matching how the store addresses
    /// nested documents. Encoding follows the RFC 3986 unreserved set,
    /// which additionally escapes `! * ' ( )` relative to a browser's
    /// `encodeURIComponent`; the store decodes both forms identically.
    #[must_use]
    pub fn document_url(&self, document_path: &str) -> String {
        let relative = document_path.strip_prefix('/').unwrap_or(document_path);
        format!("{}{}{}", self.host, self.path, urlencoding::encode(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config() -> DatabaseConfig {
        DatabaseConfig {
            host: "http://localhost:4318".into(),
            path: "/v1/p2group61/".into(),
            auth_path: "/auth".into(),
        }
    }

    #[test]
    fn default_is_not_configured() {
        assert!(!DatabaseConfig::default().is_configured());
    }

    #[test]
    fn configured_when_host_and_path_set() {
        assert!(config().is_configured());
    }

    #[test]
    fn base_and_auth_urls() {
        let config = config();
        assert_eq!(config.base_url(), "http://localhost:4318/v1/p2group61/");
        assert_eq!(config.auth_url(), "http://localhost:4318/auth");
    }

    #[test]
    fn document_url_encodes_the_store_path() {
        let url = config().document_url("/workspaces/general/channels/random");
        assert_eq!(
            url,
            "http://localhost:4318/v1/p2group61/workspaces%2Fgeneral%2Fchannels%2Frandom"
        );
    }

    #[test]
    fn document_url_strips_at_most_one_leading_slash() {
        let url = config().document_url("//workspaces/general");
        assert_eq!(
            url,
            "http://localhost:4318/v1/p2group61/%2Fworkspaces%2Fgeneral"
        );
    }

    #[test]
    fn document_url_escapes_sub_delimiters() {
        let url = config().document_url("/workspaces/don't(*)!");
        assert_eq!(
            url,
            "http://localhost:4318/v1/p2group61/workspaces%2Fdon%27t%28%2A%29%21"
        );
    }

    #[test]
    fn document_url_without_leading_slash() {
        let url = config().document_url("workspaces/general");
        assert_eq!(
            url,
            "http://localhost:4318/v1/p2group61/workspaces%2Fgeneral"
        );
    }
}
