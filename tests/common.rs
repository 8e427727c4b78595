//! Common test utilities shared across the suite
