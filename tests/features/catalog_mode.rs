//! Catalog mode feature tests
//!
//! A catalog mode storefront is browse-only: no prices, no checkout. The
//! collector pins both currency fields to the sentinel for the whole
//! lifecycle and advertises the mode through the version label and a
//! dynamic extension entry.

use rstest::rstest;
use storefront_debug_toolbar::{
	CATALOG_MODE_MODULE, Channel, Collector, Currency, NO_CURRENCY_CODE, Request, Response,
	StorefrontCollector,
};

use crate::CollectorBuilder;
use crate::common::fixtures::test_request;

fn catalog_collector() -> StorefrontCollector {
	CollectorBuilder::new()
		.catalog_mode()
		.channel(Channel::new("web", "Web Store").with_base_currency(Currency::new("USD")))
		.currency("USD")
		.locale("en_US")
		.build()
}

#[test]
fn test_sentinel_spans_whole_lifecycle() {
	let collector = catalog_collector();
	let sentinel = Some(NO_CURRENCY_CODE.to_string());

	assert_eq!(collector.currency_code(), sentinel);
	assert_eq!(collector.default_currency_code(), sentinel);

	collector.collect(
		&Request::builder().uri("/catalog").build().unwrap(),
		&Response::ok(),
		None,
	);
	assert_eq!(collector.currency_code(), sentinel);
	assert_eq!(collector.default_currency_code(), sentinel);

	collector.reset();
	assert_eq!(collector.currency_code(), sentinel);
	assert_eq!(collector.default_currency_code(), sentinel);
}

#[rstest]
fn test_locale_resolution_unaffected_by_catalog_mode(test_request: Request) {
	let collector = catalog_collector();

	collector.collect(&test_request, &Response::ok(), None);

	assert_eq!(collector.locale_code(), Some("en_US".to_string()));
}

#[test]
fn test_version_label_advertises_catalog_mode() {
	let collector = CollectorBuilder::new()
		.version("2.0.1")
		.catalog_mode()
		.build();

	assert_eq!(collector.version(), "2.0.1 Catalog");
}

#[test]
fn test_dynamic_entry_leads_the_extension_list() {
	let collector = catalog_collector();

	let extensions = collector.extensions();
	assert_eq!(extensions[0].id, CATALOG_MODE_MODULE);
	assert!(extensions[0].enabled);
	assert_eq!(extensions.len(), 4);
}

#[test]
fn test_module_probe_cannot_disable_dynamic_entry() {
	// The probe list does not contain catalog_mode; probing only ever
	// enables entries.
	let collector = CollectorBuilder::new()
		.catalog_mode()
		.module("storefront_shop")
		.build();

	assert!(collector.extension(CATALOG_MODE_MODULE).unwrap().enabled);
}

#[rstest]
fn test_stats_payload_carries_sentinels(test_request: Request) {
	let collector = catalog_collector();
	collector.collect(&test_request, &Response::ok(), None);

	let stats = collector.stats().unwrap();

	assert_eq!(stats.summary, "currency NONE, locale en_US");
	assert_eq!(stats.data["version"], "2.0.1 Catalog");
	assert_eq!(stats.data["default_currency_code"], NO_CURRENCY_CODE);
	assert_eq!(stats.data["currency_code"], NO_CURRENCY_CODE);
	assert_eq!(stats.data["extensions"][0]["id"], CATALOG_MODE_MODULE);
	assert_eq!(stats.data["extensions"][0]["enabled"], true);
}
