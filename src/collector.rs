//! Request diagnostics collection
//!
//! The storefront collector gathers, once per request, the active currency,
//! locale, and catalog mode state into a [`DiagnosticsSnapshot`] that the
//! debug panel reads back through accessors. Collection happens after the
//! response is generated and must never disturb the host's response path:
//! every expected resolution failure degrades to "no value available".

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::channel::NO_CURRENCY_CODE;
use crate::context::ShopperContext;
use crate::error::ToolbarResult;
use crate::features::FeaturesProvider;
use crate::http::{HandlerError, Request, Response};
use crate::modules::{
	ADMIN_MODULE, API_MODULE, CATALOG_MODE_MODULE, ExtensionFlag, InstalledModules, SHOP_MODULE,
};

/// Suffix appended to the version label while catalog mode is active
const CATALOG_VERSION_SUFFIX: &str = " Catalog";

/// One request's diagnostic state
///
/// Held as mutable state inside the collector; `default_locale_code` and
/// `version` are fixed at construction, the other fields move with
/// `collect` and `reset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsSnapshot {
	/// Host framework version label, suffixed while catalog mode is active
	pub version: String,
	/// Channel's base currency code, or the sentinel
	pub default_currency_code: Option<String>,
	/// Resolved currency code for the current request, or the sentinel
	pub currency_code: Option<String>,
	/// Fallback locale configured at construction
	pub default_locale_code: String,
	/// Resolved locale code for the current request
	pub locale_code: Option<String>,
	/// Optional storefront modules and their active state, insertion order
	pub extensions: Vec<ExtensionFlag>,
}

/// A debug toolbar data collector
///
/// Collectors observe each finished request, keep their own state between
/// lifecycle calls, and answer with a panel payload on demand. `collect`
/// is infallible by contract: a collector degrades to empty values rather
/// than disrupting the host's response path.
pub trait Collector: Send + Sync {
	/// Fixed identifying name used to route the UI panel
	fn name(&self) -> &'static str;

	/// Observes a finished request
	fn collect(&self, request: &Request, response: &Response, failure: Option<&HandlerError>);

	/// Clears per-request state so the instance can be reused
	fn reset(&self);

	/// Produces the panel payload for the collected state
	fn stats(&self) -> ToolbarResult<CollectorStats>;
}

/// Panel payload produced by a collector
#[derive(Debug, Clone, Serialize)]
pub struct CollectorStats {
	/// Name of the producing collector
	pub collector: String,
	/// One-line human summary
	pub summary: String,
	/// Full payload for the panel
	pub data: serde_json::Value,
}

/// Collects currency, locale, and catalog mode state per request
///
/// The collector reads the shopper context once per `collect` call and
/// keeps the results in its snapshot. While catalog mode is active both
/// currency fields are pinned to [`NO_CURRENCY_CODE`] and `collect` leaves
/// them untouched.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use storefront_debug_toolbar::{
/// 	InstalledModules, StaticFeaturesProvider, StaticShopperContext, StorefrontCollector,
/// };
///
/// let collector = StorefrontCollector::new(
/// 	"2.0.1",
/// 	Arc::new(StaticShopperContext::new()),
/// 	&InstalledModules::new(),
/// 	"en_US",
/// 	Arc::new(StaticFeaturesProvider::default()),
/// );
///
/// assert_eq!(collector.version(), "2.0.1");
/// assert_eq!(collector.currency_code(), None);
/// assert_eq!(collector.default_locale_code(), "en_US");
/// ```
pub struct StorefrontCollector {
	data: Mutex<DiagnosticsSnapshot>,
	shopper: Arc<dyn ShopperContext>,
	features: Arc<dyn FeaturesProvider>,
}

impl StorefrontCollector {
	/// Fixed collector name routing the storefront panel
	pub const NAME: &'static str = "storefront_core";

	/// Creates a collector and seeds construction-time defaults
	///
	/// `version` is the host framework's version label, passed explicitly
	/// rather than read from process-global state. `modules` is probed here
	/// for the built-in extension entries and not retained. When catalog
	/// mode is active the version label gains its suffix, both currency
	/// fields start at the sentinel, and the dynamic catalog entry is
	/// inserted ahead of the built-in ones with `enabled: true`; the
	/// built-in merge never replaces an id that is already present, and the
	/// module probe can only enable entries, never disable them.
	pub fn new(
		version: impl Into<String>,
		shopper: Arc<dyn ShopperContext>,
		modules: &InstalledModules,
		default_locale_code: impl Into<String>,
		features: Arc<dyn FeaturesProvider>,
	) -> Self {
		let catalog_mode = features.is_catalog_mode_enabled();

		let mut version = version.into();
		if catalog_mode {
			version.push_str(CATALOG_VERSION_SUFFIX);
		}

		let currency_seed = catalog_mode.then(|| NO_CURRENCY_CODE.to_string());

		let mut extensions = Vec::new();
		if catalog_mode {
			extensions.push(ExtensionFlag::new(CATALOG_MODE_MODULE, "Catalog", true));
		}
		for (id, name) in [
			(API_MODULE, "API"),
			(ADMIN_MODULE, "Admin"),
			(SHOP_MODULE, "Shop"),
		] {
			if extensions.iter().all(|flag| flag.id != id) {
				extensions.push(ExtensionFlag::new(id, name, false));
			}
		}
		for flag in &mut extensions {
			if modules.is_installed(&flag.id) {
				flag.enabled = true;
			}
		}

		Self {
			data: Mutex::new(DiagnosticsSnapshot {
				version,
				default_currency_code: currency_seed.clone(),
				currency_code: currency_seed,
				default_locale_code: default_locale_code.into(),
				locale_code: None,
				extensions,
			}),
			shopper,
			features,
		}
	}

	fn data(&self) -> MutexGuard<'_, DiagnosticsSnapshot> {
		self.data.lock().unwrap_or_else(PoisonError::into_inner)
	}

	/// Version label, including the catalog mode suffix when active
	pub fn version(&self) -> String {
		self.data().version.clone()
	}

	/// Extension entries in insertion order
	pub fn extensions(&self) -> Vec<ExtensionFlag> {
		self.data().extensions.clone()
	}

	/// Looks up an extension entry by module id
	pub fn extension(&self, id: &str) -> Option<ExtensionFlag> {
		self.data()
			.extensions
			.iter()
			.find(|flag| flag.id == id)
			.cloned()
	}

	/// Currency code resolved for the current request, or the sentinel
	pub fn currency_code(&self) -> Option<String> {
		self.data().currency_code.clone()
	}

	/// Locale code resolved for the current request
	pub fn locale_code(&self) -> Option<String> {
		self.data().locale_code.clone()
	}

	/// Channel's base currency code, or the sentinel
	pub fn default_currency_code(&self) -> Option<String> {
		self.data().default_currency_code.clone()
	}

	/// Fallback locale configured at construction
	pub fn default_locale_code(&self) -> String {
		self.data().default_locale_code.clone()
	}

	/// Full copy of the current snapshot
	pub fn snapshot(&self) -> DiagnosticsSnapshot {
		self.data().clone()
	}
}

impl Collector for StorefrontCollector {
	fn name(&self) -> &'static str {
		Self::NAME
	}

	fn collect(&self, _request: &Request, _response: &Response, _failure: Option<&HandlerError>) {
		let mut data = self.data();

		// Channel and currency share one failure path; locale resolves on
		// its own, with no early return between the two blocks.
		if let Ok(channel) = self.shopper.channel()
			&& !self.features.is_catalog_mode_enabled()
		{
			data.default_currency_code = Some(match channel.base_currency {
				Some(currency) => currency.code,
				None => NO_CURRENCY_CODE.to_string(),
			});
			if let Ok(code) = self.shopper.currency_code() {
				data.currency_code = Some(code);
			}
		}

		if let Ok(code) = self.shopper.locale_code() {
			data.locale_code = Some(code);
		}
	}

	fn reset(&self) {
		let mut data = self.data();
		data.default_currency_code = Some(NO_CURRENCY_CODE.to_string());
		data.currency_code = Some(NO_CURRENCY_CODE.to_string());
		data.locale_code = None;
	}

	fn stats(&self) -> ToolbarResult<CollectorStats> {
		let data = self.snapshot();
		let summary = format!(
			"currency {}, locale {}",
			data.currency_code.as_deref().unwrap_or("-"),
			data.locale_code.as_deref().unwrap_or("-"),
		);

		Ok(CollectorStats {
			collector: Self::NAME.to_string(),
			summary,
			data: serde_json::to_value(&data)?,
		})
	}
}
