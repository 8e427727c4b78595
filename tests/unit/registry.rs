//! Unit tests for the collector registry
//!
//! The registry preserves registration order, routes lookups by name, and
//! keeps one broken payload from hiding the others.

use rstest::rstest;
use storefront_debug_toolbar::{
	CollectorRegistry, CollectorStats, HandlerError, Request, Response, ToolbarError,
};

use crate::MockCollector;
use crate::common::fixtures::{default_registry, empty_registry, test_request};

#[rstest]
fn test_empty_registry(empty_registry: CollectorRegistry) {
	assert!(empty_registry.is_empty());
	assert_eq!(empty_registry.len(), 0);
	assert!(empty_registry.names().is_empty());
	assert!(empty_registry.get("storefront_core").is_none());
}

#[test]
fn test_register_preserves_order() {
	let mut registry = CollectorRegistry::new();
	registry.register(Box::new(MockCollector::new("first")));
	registry.register(Box::new(MockCollector::new("second")));
	registry.register(Box::new(MockCollector::new("third")));

	assert_eq!(registry.names(), vec!["first", "second", "third"]);
	assert_eq!(registry.len(), 3);
}

#[test]
fn test_get_finds_collector_by_name() {
	let mut registry = CollectorRegistry::new();
	registry.register(Box::new(MockCollector::new("timer")));
	registry.register(Box::new(MockCollector::new("queries")));

	assert_eq!(
		registry.get("queries").map(|collector| collector.name()),
		Some("queries")
	);
	assert!(registry.get("missing").is_none());
}

#[test]
fn test_get_returns_first_registered_under_duplicate_name() {
	let first = MockCollector::new("dup");
	let second = MockCollector::new("dup");
	let mut registry = CollectorRegistry::new();
	registry.register(Box::new(first.clone()));
	registry.register(Box::new(second.clone()));

	registry.get("dup").unwrap().stats().unwrap();

	assert_eq!(first.stats_count(), 1);
	assert_eq!(second.stats_count(), 0);
}

#[rstest]
fn test_collect_all_reaches_every_collector(test_request: Request) {
	let first = MockCollector::new("first");
	let second = MockCollector::new("second");
	let mut registry = CollectorRegistry::new();
	registry.register(Box::new(first.clone()));
	registry.register(Box::new(second.clone()));

	registry.collect_all(&test_request, &Response::ok(), None);

	assert_eq!(first.collect_count(), 1);
	assert_eq!(second.collect_count(), 1);
	assert_eq!(first.last_path(), Some("/catalog".to_string()));
	assert_eq!(second.last_failure(), None);
}

#[rstest]
fn test_collect_all_passes_handler_failure(test_request: Request) {
	let mock = MockCollector::new("observer");
	let mut registry = CollectorRegistry::new();
	registry.register(Box::new(mock.clone()));
	let failure = HandlerError::new("boom");

	registry.collect_all(
		&test_request,
		&Response::internal_server_error(),
		Some(&failure),
	);

	assert_eq!(mock.last_failure(), Some("boom".to_string()));
}

#[test]
fn test_reset_all_reaches_every_collector() {
	let first = MockCollector::new("first");
	let second = MockCollector::new("second");
	let mut registry = CollectorRegistry::new();
	registry.register(Box::new(first.clone()));
	registry.register(Box::new(second.clone()));

	registry.reset_all();
	registry.reset_all();

	assert_eq!(first.reset_count(), 2);
	assert_eq!(second.reset_count(), 2);
}

#[test]
fn test_stats_for_routes_to_named_collector() {
	let custom = CollectorStats {
		collector: "timer".to_string(),
		summary: "12ms".to_string(),
		data: serde_json::json!({ "elapsed_ms": 12 }),
	};
	let mut registry = CollectorRegistry::new();
	registry.register(Box::new(
		MockCollector::new("timer").with_custom_stats(custom),
	));

	let stats = registry.stats_for("timer").unwrap();

	assert_eq!(stats.summary, "12ms");
	assert_eq!(stats.data["elapsed_ms"], 12);
}

#[test]
fn test_stats_for_unknown_name_errors() {
	let registry = CollectorRegistry::new();

	let error = registry.stats_for("missing").unwrap_err();

	assert!(matches!(
		error,
		ToolbarError::CollectorNotFound(name) if name == "missing"
	));
}

#[test]
fn test_stats_skips_failing_collector() {
	let mut registry = CollectorRegistry::new();
	registry.register(Box::new(MockCollector::new("first")));
	registry.register(Box::new(MockCollector::new("broken").with_stats_failure()));
	registry.register(Box::new(MockCollector::new("third")));

	let all = registry.stats();

	let names: Vec<&str> = all.iter().map(|stats| stats.collector.as_str()).collect();
	assert_eq!(names, vec!["first", "third"]);
}

#[rstest]
fn test_registry_with_storefront_collector(
	default_registry: CollectorRegistry,
	test_request: Request,
) {
	assert_eq!(default_registry.names(), vec!["storefront_core"]);

	default_registry.collect_all(&test_request, &Response::ok(), None);
	let stats = default_registry.stats_for("storefront_core").unwrap();

	assert_eq!(stats.summary, "currency USD, locale en_US");
}
