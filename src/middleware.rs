//! Toolbar middleware
//!
//! The host-facing hook: wraps the inner handler, lets registered
//! collectors observe the finished exchange, and marks processed responses
//! with the [`TOOLBAR_HEADER`]. Collection is gated by an enabled flag, a
//! client-address allowlist, and an optional per-collector allowlist.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use async_trait::async_trait;

use crate::http::{Handler, HandlerError, Middleware, Request, Response};
use crate::registry::CollectorRegistry;

/// Response header marking a toolbar-processed exchange
///
/// Carries the number of collectors that observed the request.
pub const TOOLBAR_HEADER: &str = "X-Storefront-Toolbar";

/// Toolbar middleware configuration
#[derive(Debug, Clone)]
pub struct ToolbarConfig {
	/// Enable the toolbar middleware
	pub enabled: bool,
	/// Client addresses allowed to trigger collection. An empty list
	/// disables the gate; a request without a peer address (in-process
	/// traffic) always qualifies.
	pub internal_ips: Vec<IpAddr>,
	/// Collector names allowed to run; empty means all registered ones
	pub enabled_collectors: Vec<String>,
}

impl ToolbarConfig {
	/// Creates an enabled configuration with the localhost gate
	///
	/// # Examples
	///
	/// ```
	/// use storefront_debug_toolbar::ToolbarConfig;
	///
	/// let config = ToolbarConfig::new();
	/// assert!(config.enabled);
	/// ```
	pub fn new() -> Self {
		Self {
			enabled: true,
			..Default::default()
		}
	}

	/// Creates a disabled configuration
	pub fn disabled() -> Self {
		Self {
			enabled: false,
			..Default::default()
		}
	}

	/// Whether the toolbar applies to a request from `remote_addr`
	pub fn applies_to(&self, remote_addr: Option<IpAddr>) -> bool {
		if !self.enabled {
			return false;
		}
		match remote_addr {
			Some(ip) => self.internal_ips.is_empty() || self.internal_ips.contains(&ip),
			None => true,
		}
	}

	/// Whether the named collector should run
	pub fn collector_enabled(&self, name: &str) -> bool {
		self.enabled_collectors.is_empty()
			|| self.enabled_collectors.iter().any(|enabled| enabled == name)
	}
}

impl Default for ToolbarConfig {
	fn default() -> Self {
		Self {
			enabled: cfg!(debug_assertions),
			internal_ips: vec![
				IpAddr::V4(Ipv4Addr::LOCALHOST),
				IpAddr::V6(Ipv6Addr::LOCALHOST),
			],
			enabled_collectors: Vec::new(),
		}
	}
}

/// Middleware running registered collectors after response generation
///
/// Successful responses are observed as-is and gain the marker header.
/// When the inner handler fails, collectors observe a synthesized 500
/// response with the failure attached, and the error propagates unchanged.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use async_trait::async_trait;
/// use storefront_debug_toolbar::{
/// 	CollectorRegistry, Handler, HandlerError, InstalledModules, Middleware, Request, Response,
/// 	StaticFeaturesProvider, StaticShopperContext, StorefrontCollector, TOOLBAR_HEADER,
/// 	ToolbarConfig, ToolbarMiddleware,
/// };
///
/// struct Hello;
///
/// #[async_trait]
/// impl Handler for Hello {
/// 	async fn handle(&self, _request: Request) -> Result<Response, HandlerError> {
/// 		Ok(Response::ok())
/// 	}
/// }
///
/// # tokio_test::block_on(async {
/// let mut registry = CollectorRegistry::new();
/// registry.register(Box::new(StorefrontCollector::new(
/// 	"2.0.1",
/// 	Arc::new(StaticShopperContext::new().with_locale_code("en_US")),
/// 	&InstalledModules::new(),
/// 	"en_US",
/// 	Arc::new(StaticFeaturesProvider::default()),
/// )));
///
/// let toolbar = ToolbarMiddleware::new(ToolbarConfig::new(), Arc::new(registry));
/// let request = Request::builder().uri("/catalog").build().unwrap();
/// let response = toolbar.process(request, Arc::new(Hello)).await.unwrap();
///
/// assert_eq!(response.header(TOOLBAR_HEADER), Some("1"));
/// # })
/// ```
pub struct ToolbarMiddleware {
	config: Arc<ToolbarConfig>,
	registry: Arc<CollectorRegistry>,
}

impl ToolbarMiddleware {
	/// Creates the middleware from a configuration and collector registry
	pub fn new(config: ToolbarConfig, registry: Arc<CollectorRegistry>) -> Self {
		Self {
			config: Arc::new(config),
			registry,
		}
	}

	/// The wrapped collector registry
	pub fn registry(&self) -> &CollectorRegistry {
		&self.registry
	}

	fn run_collectors(
		&self,
		request: &Request,
		response: &Response,
		failure: Option<&HandlerError>,
	) -> usize {
		let mut ran = 0;
		for collector in self.registry.iter() {
			if self.config.collector_enabled(collector.name()) {
				collector.collect(request, response, failure);
				ran += 1;
			}
		}
		ran
	}
}

#[async_trait]
impl Middleware for ToolbarMiddleware {
	async fn process(
		&self,
		request: Request,
		next: Arc<dyn Handler>,
	) -> Result<Response, HandlerError> {
		// Skip if the toolbar does not apply to this request
		if !self.config.applies_to(request.client_ip()) {
			tracing::trace!("toolbar skipped for {}", request.path());
			return next.handle(request).await;
		}

		// Keep a copy for post-response inspection; body bytes are shared
		let inspected = request.clone();

		match next.handle(request).await {
			Ok(response) => {
				let ran = self.run_collectors(&inspected, &response, None);
				tracing::debug!("toolbar ran {} collector(s) for {}", ran, inspected.path());
				Ok(response.with_header(TOOLBAR_HEADER, &ran.to_string()))
			}
			Err(e) => {
				// Collectors still observe failed requests; the error then
				// propagates unchanged
				let placeholder = Response::internal_server_error();
				let ran = self.run_collectors(&inspected, &placeholder, Some(&e));
				tracing::debug!(
					"toolbar ran {} collector(s) for failed {}: {}",
					ran,
					inspected.path(),
					e
				);
				Err(e)
			}
		}
	}
}
