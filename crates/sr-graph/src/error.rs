//! Graph and ingestion error type.
//!
//! Every variant here is a fail-fast data-quality defect: the access and
//! route vocabularies are closed on purpose, so unexpected upstream values
//! surface immediately instead of being silently misclassified.

use thiserror::Error;

/// Errors produced while ingesting the feed into a [`RouteGraph`](crate::RouteGraph).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("way {way}: access tag {key}={value:?} outside the known vocabulary")]
    UnknownAccessValue { way: i64, key: String, value: String },

    #[error("way {way}: route type {value:?} is not one of \"ferry\", \"cruise\"")]
    UnknownRouteType { way: i64, value: String },

    #[error("way {way} references undeclared node {node}")]
    UndeclaredNode { way: i64, node: i64 },

    #[error("way {way} ended with no node references")]
    EmptyWay { way: i64 },

    #[error("way {second} started while way {first} is still open")]
    NestedWay { first: i64, second: i64 },

    #[error("{0} event outside a way definition")]
    OutsideWay(&'static str),

    #[error("feed ended while way {way} is still open")]
    TruncatedFeed { way: i64 },
}

pub type GraphResult<T> = Result<T, GraphError>;
