//! Catalog mode feature gate
//!
//! Catalog mode turns a channel into a browse-only storefront: monetary
//! transactions are disabled and currency resolution is suspended. The
//! toolbar reads the gate through the [`FeaturesProvider`] trait.

/// Reports whether catalog mode is active for the current channel
pub trait FeaturesProvider: Send + Sync {
	/// Returns `true` when catalog mode is enabled for the current channel
	fn is_catalog_mode_enabled(&self) -> bool;
}

/// Fixed-value [`FeaturesProvider`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticFeaturesProvider {
	catalog_mode: bool,
}

impl StaticFeaturesProvider {
	/// Creates a provider with the given catalog mode state
	pub fn new(catalog_mode: bool) -> Self {
		Self { catalog_mode }
	}
}

impl FeaturesProvider for StaticFeaturesProvider {
	fn is_catalog_mode_enabled(&self) -> bool {
		self.catalog_mode
	}
}
