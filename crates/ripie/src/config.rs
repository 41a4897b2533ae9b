//! Configuration constants for the rip.ie client

/// Upstream GraphQL API
pub mod api {
    /// The single GraphQL endpoint every operation is posted to
    pub const GRAPHQL_URL: &str = "https://rip.ie/api/graphql";

    /// User agent matching the browser fingerprint in [`HEADERS`]
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                                  (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36";

    /// Static request headers sent with every call.
    ///
    /// The API rejects requests that don't look like they came from the
    /// rip.ie site itself, so origin, referer and client hints are pinned.
    pub const HEADERS: &[(&str, &str)] = &[
        ("accept", "*/*"),
        ("accept-language", "en-GB,en-US;q=0.9,en;q=0.8"),
        ("content-type", "application/json"),
        ("origin", "https://rip.ie"),
        ("priority", "u=1, i"),
        ("referer", "https://rip.ie/death-notice/recent"),
        (
            "sec-ch-ua",
            "\"Google Chrome\";v=\"137\", \"Chromium\";v=\"137\", \"Not/A)Brand\";v=\"24\"",
        ),
        ("sec-ch-ua-mobile", "?0"),
        ("sec-ch-ua-platform", "\"Windows\""),
        ("sec-fetch-dest", "empty"),
        ("sec-fetch-mode", "cors"),
        ("sec-fetch-site", "same-origin"),
    ];
}

/// Network-related configuration
pub mod network {
    /// Whole-request timeout in seconds (same as reqwest's blocking default)
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// Logging configuration
pub mod log {
    /// Filter used when neither `RUST_LOG` nor `--log-level` is given.
    ///
    /// Only bad input lines are reported at `error`.
    pub const DEFAULT_FILTER: &str = "error";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_names_are_lowercase() {
        for (name, _) in api::HEADERS {
            assert_eq!(*name, name.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_headers_pin_origin_and_referer() {
        let get = |key: &str| {
            api::HEADERS
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| *value)
        };
        assert_eq!(get("origin"), Some("https://rip.ie"));
        assert_eq!(get("referer"), Some("https://rip.ie/death-notice/recent"));
        assert_eq!(get("content-type"), Some("application/json"));
    }

    #[test]
    fn test_read_timeout_matches_client_default() {
        assert_eq!(network::READ_TIMEOUT_SECS, 30);
    }

    #[test]
    fn test_default_filter_reports_errors_only() {
        assert_eq!(log::DEFAULT_FILTER, "error");
    }

    #[test]
    fn test_user_agent_is_single_line() {
        assert!(api::USER_AGENT.starts_with("Mozilla/5.0 (Windows NT 10.0"));
        assert!(api::USER_AGENT.contains("(KHTML, like Gecko) Chrome/137.0.0.0"));
        assert!(!api::USER_AGENT.contains('\n'));
        assert!(!api::USER_AGENT.contains("  "));
    }
}
