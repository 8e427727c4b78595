//! Optional storefront modules
//!
//! The host stack ships optional modules (API, admin, shop front, plus the
//! dynamic catalog mode entry). The toolbar never introspects the host's
//! module registry; it receives an [`InstalledModules`] probe and tests
//! names for membership.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Module id of the storefront API
pub const API_MODULE: &str = "storefront_api";

/// Module id of the storefront admin
pub const ADMIN_MODULE: &str = "storefront_admin";

/// Module id of the shop front
pub const SHOP_MODULE: &str = "storefront_shop";

/// Module id of the dynamic catalog mode entry
pub const CATALOG_MODE_MODULE: &str = "catalog_mode";

/// One extension entry of the diagnostics snapshot
///
/// `id` is the module identifier used for membership probing; `name` is the
/// display label shown by the debug panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionFlag {
	/// Module identifier
	pub id: String,
	/// Display label
	pub name: String,
	/// Whether the module is active
	pub enabled: bool,
}

impl ExtensionFlag {
	/// Creates a flag entry
	pub fn new(id: impl Into<String>, name: impl Into<String>, enabled: bool) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			enabled,
		}
	}
}

/// Capability probe over the host's installed modules
///
/// A set of module ids; only membership is ever checked. Hosts populate it
/// from their own registry mechanism at startup.
///
/// # Examples
///
/// ```
/// use storefront_debug_toolbar::{ADMIN_MODULE, InstalledModules, SHOP_MODULE};
///
/// let modules: InstalledModules = [ADMIN_MODULE].into_iter().collect();
/// assert!(modules.is_installed(ADMIN_MODULE));
/// assert!(!modules.is_installed(SHOP_MODULE));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstalledModules {
	names: HashSet<String>,
}

impl InstalledModules {
	/// Creates an empty probe
	pub fn new() -> Self {
		Self::default()
	}

	/// Marks a module as installed
	pub fn install(&mut self, name: impl Into<String>) {
		self.names.insert(name.into());
	}

	/// Returns `true` when the named module is installed
	pub fn is_installed(&self, name: &str) -> bool {
		self.names.contains(name)
	}

	/// Number of installed modules
	pub fn len(&self) -> usize {
		self.names.len()
	}

	/// Returns `true` when no module is installed
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Iterates installed module names in no particular order
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.names.iter().map(String::as_str)
	}
}

impl<S: Into<String>> FromIterator<S> for InstalledModules {
	fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
		Self {
			names: iter.into_iter().map(Into::into).collect(),
		}
	}
}
