//! Shared constants for end-to-end tests

/// Generator seed used by every test server
pub const TEST_SEED: u64 = 1234;

/// Pages reported before `hasMore` turns false, smaller than the default to
/// keep full scrolls short
pub const TEST_MAX_PAGES: u32 = 3;

/// Default page size of the test server
pub const TEST_PAGE_SIZE: u32 = 12;

/// Upper bound for `limit` on the test server
pub const TEST_MAX_PAGE_SIZE: u32 = 50;

/// Image host used in generated URLs
pub const TEST_IMAGE_BASE_URL: &str = "http://images.test";

/// Sign-in data accepted by the mock authenticator
pub const TEST_EMAIL: &str = "tester@example.com";
pub const TEST_PASSWORD: &str = "secret123";

// ============================================================================
// Timeouts
// ============================================================================

/// Request timeout for the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// How long to wait for a freshly spawned server
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Polling interval while waiting for the server
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
