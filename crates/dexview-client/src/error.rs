//! Fetch error taxonomy.
//!
//! Every failure is reported by kind so callers can decide how to degrade:
//! a list failure blocks the whole catalog, a detail failure fails the batch
//! it belongs to, and an evolution failure only hides the evolution view.

use dexview_core::CoreError;
use thiserror::Error;

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch list {url}: http status {status}")]
    ListFetch { url: String, status: u16 },

    /// Entity or species detail request answered with a non-success status.
    #[error("failed to fetch detail {url}: http status {status}")]
    DetailFetch { url: String, status: u16 },

    #[error("failed to fetch evolution chain {url}: {reason}")]
    EvolutionFetch { url: String, reason: String },

    #[error("malformed list response from {url}: {reason}")]
    MalformedListResponse { url: String, reason: String },

    #[error("malformed detail response from {url}: {reason}")]
    MalformedDetailResponse { url: String, reason: String },

    #[error("malformed species response from {url}: {reason}")]
    MalformedSpeciesResponse { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid client configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FetchError {
    /// Stable short code for the error kind. Core errors report their own code.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ListFetch { .. } => "list_fetch",
            Self::DetailFetch { .. } => "detail_fetch",
            Self::EvolutionFetch { .. } => "evolution_fetch",
            Self::MalformedListResponse { .. } => "malformed_list",
            Self::MalformedDetailResponse { .. } => "malformed_detail",
            Self::MalformedSpeciesResponse { .. } => "malformed_species",
            Self::Transport { .. } => "transport",
            Self::Config(_) => "config",
            Self::Core(e) => e.code(),
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ListFetch { status, .. } | Self::DetailFetch { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Which upstream resource a request targets. Decides how a bad status or
/// an unexpected body is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resource {
    List,
    Detail,
    Species,
    EvolutionChain,
}

impl Resource {
    pub(crate) fn status_error(self, url: &str, status: u16) -> FetchError {
        let url = url.to_string();
        match self {
            Self::List => FetchError::ListFetch { url, status },
            Self::Detail | Self::Species => FetchError::DetailFetch { url, status },
            Self::EvolutionChain => FetchError::EvolutionFetch {
                url,
                reason: format!("http status {status}"),
            },
        }
    }

    /// A request that never got a response. Evolution chain requests keep
    /// their own kind so callers can isolate them.
    pub(crate) fn transport_error(self, url: &str, source: reqwest::Error) -> FetchError {
        let url = url.to_string();
        match self {
            Self::EvolutionChain => FetchError::EvolutionFetch {
                url,
                reason: source.to_string(),
            },
            _ => FetchError::Transport { url, source },
        }
    }

    pub(crate) fn malformed_error(self, url: &str, reason: impl Into<String>) -> FetchError {
        let url = url.to_string();
        let reason = reason.into();
        match self {
            Self::List => FetchError::MalformedListResponse { url, reason },
            Self::Detail => FetchError::MalformedDetailResponse { url, reason },
            Self::Species => FetchError::MalformedSpeciesResponse { url, reason },
            Self::EvolutionChain => FetchError::EvolutionFetch { url, reason },
        }
    }
}
