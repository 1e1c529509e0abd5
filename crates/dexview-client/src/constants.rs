//! Constants shared by every request the client makes.

/// Version string sent in the user agent.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent for upstream requests.
pub fn user_agent() -> String {
    format!("dexview/{CLIENT_VERSION}")
}

/// Collection resource holding entity records.
pub const ENTITY_RESOURCE: &str = "pokemon";

/// Query used by reachability checks: the smallest possible list page.
pub const PING_QUERY: &str = "limit=1";
