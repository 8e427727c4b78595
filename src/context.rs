//! Shopper context boundary
//!
//! The shopper context is the per-request facade resolving the active
//! channel, currency, and locale for the current visitor. Resolution logic
//! lives in the surrounding framework; the toolbar only consumes results
//! through the [`ShopperContext`] trait.

use crate::channel::Channel;
use crate::error::ShopperContextError;

/// Per-request resolution facade for channel, currency, and locale
///
/// Each method fails with the matching not-found variant when the current
/// request carries no resolvable value. Implementations are expected to be
/// cheap, in-memory reads; the collector calls them once per collection.
pub trait ShopperContext: Send + Sync {
	/// Resolves the active sales channel
	fn channel(&self) -> Result<Channel, ShopperContextError>;

	/// Resolves the currency code for the current request
	fn currency_code(&self) -> Result<String, ShopperContextError>;

	/// Resolves the locale code for the current request
	fn locale_code(&self) -> Result<String, ShopperContextError>;
}

/// Fixed-value [`ShopperContext`]
///
/// Answers every resolution from its configured fields; an unset field
/// fails with the matching not-found error. Suits single-channel setups
/// and doubles as the standard test context.
///
/// # Examples
///
/// ```
/// use storefront_debug_toolbar::{Channel, ShopperContext, StaticShopperContext};
///
/// let context = StaticShopperContext::new()
/// 	.with_channel(Channel::new("web", "Web Store"))
/// 	.with_currency_code("USD")
/// 	.with_locale_code("en_US");
///
/// assert_eq!(context.currency_code().as_deref(), Ok("USD"));
/// assert_eq!(context.locale_code().as_deref(), Ok("en_US"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticShopperContext {
	channel: Option<Channel>,
	currency_code: Option<String>,
	locale_code: Option<String>,
}

impl StaticShopperContext {
	/// Creates a context with nothing resolvable
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the channel to resolve
	pub fn with_channel(mut self, channel: Channel) -> Self {
		self.channel = Some(channel);
		self
	}

	/// Sets the currency code to resolve
	pub fn with_currency_code(mut self, code: impl Into<String>) -> Self {
		self.currency_code = Some(code.into());
		self
	}

	/// Sets the locale code to resolve
	pub fn with_locale_code(mut self, code: impl Into<String>) -> Self {
		self.locale_code = Some(code.into());
		self
	}
}

impl ShopperContext for StaticShopperContext {
	fn channel(&self) -> Result<Channel, ShopperContextError> {
		self.channel.clone().ok_or(ShopperContextError::ChannelNotFound)
	}

	fn currency_code(&self) -> Result<String, ShopperContextError> {
		self.currency_code
			.clone()
			.ok_or(ShopperContextError::CurrencyNotFound)
	}

	fn locale_code(&self) -> Result<String, ShopperContextError> {
		self.locale_code
			.clone()
			.ok_or(ShopperContextError::LocaleNotFound)
	}
}
