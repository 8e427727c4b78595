//! # Storefront Debug Toolbar
//!
//! Debug toolbar collectors for a storefront web stack. The crate gathers,
//! at the end of each request, the active currency, locale, and catalog
//! mode state of the current sales channel, and exposes them as a
//! read-only snapshot for a developer-facing debug panel.
//!
//! The toolbar renders nothing itself: collectors produce snapshots and
//! JSON payloads; routing, dependency wiring, and panel HTML belong to the
//! host application.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use storefront_debug_toolbar::{
//! 	Channel, Collector, Currency, InstalledModules, Request, Response, SHOP_MODULE,
//! 	StaticFeaturesProvider, StaticShopperContext, StorefrontCollector,
//! };
//!
//! let context = StaticShopperContext::new()
//! 	.with_channel(Channel::new("web", "Web Store").with_base_currency(Currency::new("USD")))
//! 	.with_currency_code("USD")
//! 	.with_locale_code("en_US");
//!
//! let modules: InstalledModules = [SHOP_MODULE].into_iter().collect();
//!
//! let collector = StorefrontCollector::new(
//! 	"2.0.1",
//! 	Arc::new(context),
//! 	&modules,
//! 	"en_US",
//! 	Arc::new(StaticFeaturesProvider::default()),
//! );
//!
//! let request = Request::builder().uri("/catalog").build().unwrap();
//! collector.collect(&request, &Response::ok(), None);
//!
//! assert_eq!(collector.currency_code(), Some("USD".to_string()));
//! assert_eq!(collector.locale_code(), Some("en_US".to_string()));
//! ```
//!
//! ## Architecture
//!
//! 1. **Boundary traits**: [`ShopperContext`] and [`FeaturesProvider`]
//!    adapt the host's per-request resolution; [`InstalledModules`] probes
//!    optional modules.
//! 2. **Collection**: [`StorefrontCollector`] snapshots the request state;
//!    [`CollectorRegistry`] fans lifecycle calls out to collectors.
//! 3. **Pipeline hook**: [`ToolbarMiddleware`] runs collectors after the
//!    inner handler and marks processed responses.

#![warn(missing_docs)]

// Module declarations following Rust 2024 module system (no mod.rs)
pub mod channel;
pub mod collector;
pub mod context;
pub mod error;
pub mod features;
pub mod http;
pub mod middleware;
pub mod modules;
pub mod registry;

// Re-export main types
pub use channel::{Channel, Currency, NO_CURRENCY_CODE};
pub use collector::{Collector, CollectorStats, DiagnosticsSnapshot, StorefrontCollector};
pub use context::{ShopperContext, StaticShopperContext};
pub use error::{ShopperContextError, ToolbarError, ToolbarResult};
pub use features::{FeaturesProvider, StaticFeaturesProvider};
pub use http::{Handler, HandlerError, Middleware, Request, RequestBuilder, Response};
pub use middleware::{TOOLBAR_HEADER, ToolbarConfig, ToolbarMiddleware};
pub use modules::{
	ADMIN_MODULE, API_MODULE, CATALOG_MODE_MODULE, ExtensionFlag, InstalledModules, SHOP_MODULE,
};
pub use registry::CollectorRegistry;
