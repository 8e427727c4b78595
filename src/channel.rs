//! Sales channel model
//!
//! A channel is the sales-channel configuration entity the shopper context
//! resolves per request. The toolbar only needs its code, display name, and
//! optional base currency.

/// Sentinel currency code standing in for "no currency applicable"
///
/// Both snapshot currency fields carry this value while catalog mode is
/// active, and a channel that declares no base currency reports it as its
/// default currency.
pub const NO_CURRENCY_CODE: &str = "NONE";

/// A currency, identified by its ISO 4217 code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
	/// ISO 4217 currency code, e.g. `USD`
	pub code: String,
}

impl Currency {
	/// Creates a currency from its code
	pub fn new(code: impl Into<String>) -> Self {
		Self { code: code.into() }
	}
}

/// A sales channel owning an optional base currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
	/// Unique channel code
	pub code: String,
	/// Human-readable channel name
	pub name: String,
	/// Base currency the channel trades in, if any
	pub base_currency: Option<Currency>,
}

impl Channel {
	/// Creates a channel without a base currency
	///
	/// # Examples
	///
	/// ```
	/// use storefront_debug_toolbar::Channel;
	///
	/// let channel = Channel::new("web", "Web Store");
	/// assert!(channel.base_currency.is_none());
	/// ```
	pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			code: code.into(),
			name: name.into(),
			base_currency: None,
		}
	}

	/// Sets the channel's base currency
	///
	/// # Examples
	///
	/// ```
	/// use storefront_debug_toolbar::{Channel, Currency};
	///
	/// let channel = Channel::new("web", "Web Store").with_base_currency(Currency::new("EUR"));
	/// assert_eq!(channel.base_currency_code(), Some("EUR"));
	/// ```
	pub fn with_base_currency(mut self, currency: Currency) -> Self {
		self.base_currency = Some(currency);
		self
	}

	/// Returns the base currency code, if the channel has one
	pub fn base_currency_code(&self) -> Option<&str> {
		self.base_currency.as_ref().map(|currency| currency.code.as_str())
	}
}
