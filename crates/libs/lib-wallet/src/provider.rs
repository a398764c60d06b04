//! Known wallet providers.

/// A wallet provider the user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderChoice {
    pub name: &'static str,
    pub url: &'static str,
}

pub const WALLET_PROVIDERS: [ProviderChoice; 2] = [
    ProviderChoice {
        name: "sollet.io",
        url: "https://www.sollet.io",
    },
    ProviderChoice {
        name: "Bonfida Wallet",
        url: "https://www.bonfida.com/wallet",
    },
];

/// Provider used when nothing has been persisted yet.
pub const DEFAULT_PROVIDER_URL: &str = WALLET_PROVIDERS[0].url;

pub fn find_provider(url: &str) -> Option<&'static ProviderChoice> {
    WALLET_PROVIDERS.iter().find(|p| p.url == url)
}

/// Display name for `url`; unknown URLs are shown as-is.
pub fn provider_name(url: &str) -> String {
    find_provider(url)
        .map(|p| p.name.to_string())
        .unwrap_or_else(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_provider_names() {
        assert_eq!(provider_name("https://www.sollet.io"), "sollet.io");
        assert_eq!(provider_name("https://www.bonfida.com/wallet"), "Bonfida Wallet");
    }

    #[test]
    fn test_unknown_provider_falls_back_to_url() {
        assert_eq!(provider_name("https://example.com"), "https://example.com");
        assert!(find_provider("https://www.sollet.io/").is_none());
    }

    #[test]
    fn test_default_is_sollet() {
        assert_eq!(DEFAULT_PROVIDER_URL, "https://www.sollet.io");
    }
}
