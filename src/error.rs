//! Error types for the storefront debug toolbar

use thiserror::Error;

/// Result type alias for toolbar operations
pub type ToolbarResult<T> = Result<T, ToolbarError>;

/// Failure conditions of the shopper context boundary
///
/// Each resolution method of [`ShopperContext`](crate::ShopperContext)
/// fails with the matching variant when the current request has no
/// resolvable channel, currency, or locale. All three are expected
/// empty-state conditions rather than faults: the collector swallows them
/// and keeps its previous snapshot values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShopperContextError {
	/// No sales channel could be resolved for the current request
	#[error("no channel could be resolved for the current request")]
	ChannelNotFound,

	/// No currency code could be resolved for the current request
	#[error("no currency code could be resolved for the current request")]
	CurrencyNotFound,

	/// No locale code could be resolved for the current request
	#[error("no locale code could be resolved for the current request")]
	LocaleNotFound,
}

/// Errors raised by the toolbar surface itself
///
/// These never originate from the collect path, which is infallible by
/// contract; they cover registry lookups and panel payload serialization.
#[derive(Debug, Error)]
pub enum ToolbarError {
	/// No collector is registered under the requested name
	#[error("no collector registered under '{0}'")]
	CollectorNotFound(String),

	/// A collector payload failed to serialize
	#[error("failed to serialize collector payload: {0}")]
	Serialization(#[from] serde_json::Error),
}
