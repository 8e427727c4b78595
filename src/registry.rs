//! Collector registry
//!
//! Hosts register their collectors once at startup and fan lifecycle calls
//! out through the registry. Registration order is preserved; the debug
//! panel looks collectors up by name.

use crate::collector::{Collector, CollectorStats};
use crate::error::{ToolbarError, ToolbarResult};
use crate::http::{HandlerError, Request, Response};

/// Ordered registry of toolbar collectors
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use storefront_debug_toolbar::{
/// 	CollectorRegistry, InstalledModules, StaticFeaturesProvider, StaticShopperContext,
/// 	StorefrontCollector,
/// };
///
/// let mut registry = CollectorRegistry::new();
/// registry.register(Box::new(StorefrontCollector::new(
/// 	"2.0.1",
/// 	Arc::new(StaticShopperContext::new()),
/// 	&InstalledModules::new(),
/// 	"en_US",
/// 	Arc::new(StaticFeaturesProvider::default()),
/// )));
///
/// assert_eq!(registry.names(), vec!["storefront_core"]);
/// ```
#[derive(Default)]
pub struct CollectorRegistry {
	collectors: Vec<Box<dyn Collector>>,
}

impl CollectorRegistry {
	/// Creates an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a collector at the end of the run order
	pub fn register(&mut self, collector: Box<dyn Collector>) {
		self.collectors.push(collector);
	}

	/// Looks up the first collector registered under `name`
	pub fn get(&self, name: &str) -> Option<&dyn Collector> {
		self.collectors
			.iter()
			.find(|collector| collector.name() == name)
			.map(|collector| &**collector)
	}

	/// Iterates collectors in registration order
	pub fn iter(&self) -> impl Iterator<Item = &dyn Collector> {
		self.collectors.iter().map(|collector| &**collector)
	}

	/// Registered collector names in registration order
	pub fn names(&self) -> Vec<&'static str> {
		self.collectors
			.iter()
			.map(|collector| collector.name())
			.collect()
	}

	/// Number of registered collectors
	pub fn len(&self) -> usize {
		self.collectors.len()
	}

	/// Returns `true` when no collector is registered
	pub fn is_empty(&self) -> bool {
		self.collectors.is_empty()
	}

	/// Runs `collect` on every collector in registration order
	pub fn collect_all(
		&self,
		request: &Request,
		response: &Response,
		failure: Option<&HandlerError>,
	) {
		for collector in self.iter() {
			collector.collect(request, response, failure);
		}
	}

	/// Resets every collector
	pub fn reset_all(&self) {
		for collector in self.iter() {
			collector.reset();
		}
	}

	/// Panel payload of the named collector
	pub fn stats_for(&self, name: &str) -> ToolbarResult<CollectorStats> {
		self.get(name)
			.ok_or_else(|| ToolbarError::CollectorNotFound(name.to_string()))?
			.stats()
	}

	/// Panel payloads of all collectors, in registration order
	///
	/// A collector whose payload fails to build is logged and skipped so
	/// one broken payload cannot hide the others.
	pub fn stats(&self) -> Vec<CollectorStats> {
		let mut all = Vec::with_capacity(self.collectors.len());
		for collector in self.iter() {
			match collector.stats() {
				Ok(stats) => all.push(stats),
				Err(e) => {
					tracing::warn!("collector '{}' stats failed: {}", collector.name(), e);
				}
			}
		}
		all
	}
}
