//! Retrieval gateway templates. Each URL is the gateway prefix with the
//! content identifier substituted; no other parameters exist.

/// Moorage's own retrieval gateway.
pub const MOORAGE_GATEWAY: &str = "https://gateway.moorage.dev/gw/ipfs/";
/// Decentralized fallback gateway.
pub const DWEB_GATEWAY: &str = "https://dweb.link/ipfs/";
/// Saturn CDN gateway.
pub const SATURN_GATEWAY: &str = "https://strn.pl/ipfs/";

/// Gateway choices offered by the files table selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Gateway {
    /// The primary Moorage gateway.
    #[default]
    Moorage,
    /// The dweb.link public gateway.
    Dweb,
    /// The Saturn CDN gateway.
    Saturn,
}

impl Gateway {
    /// All selectable gateways, in menu order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Moorage, Self::Dweb, Self::Saturn]
    }

    /// URL prefix for this gateway.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Moorage => MOORAGE_GATEWAY,
            Self::Dweb => DWEB_GATEWAY,
            Self::Saturn => SATURN_GATEWAY,
        }
    }

    /// Menu label for this gateway.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Moorage => "Moorage",
            Self::Dweb => "Dweb",
            Self::Saturn => "Saturn",
        }
    }

    /// Look a gateway up by its URL prefix, as submitted by the selector.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::all().into_iter().find(|gw| gw.prefix() == prefix)
    }
}

/// Build a retrieval URL against an arbitrary gateway prefix. An absent
/// identifier leaves the URL unset.
#[must_use]
pub fn retrieval_url(prefix: &str, cid: Option<&str>) -> Option<String> {
    cid.map(|cid| format!("{prefix}{cid}"))
}

/// Retrieval URL on the primary Moorage gateway.
#[must_use]
pub fn moorage_retrieval_url(cid: Option<&str>) -> Option<String> {
    retrieval_url(MOORAGE_GATEWAY, cid)
}

/// Retrieval URL on the decentralized fallback gateway.
#[must_use]
pub fn dweb_retrieval_url(cid: Option<&str>) -> Option<String> {
    retrieval_url(DWEB_GATEWAY, cid)
}
