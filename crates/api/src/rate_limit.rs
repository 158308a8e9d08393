//! Rate Limiting Middleware using GCRA Algorithm
//!
//! Per-IP rate limiting via tower_governor. The Generic Cell Rate Algorithm
//! enforces limits without background bookkeeping. Requires the service to be
//! started with `into_make_service_with_connect_info::<SocketAddr>()` so the
//! key extractor can see peer addresses.

use std::sync::Arc;

use governor::middleware::StateInformationMiddleware;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;

use crate::config::RateLimitConfig;

/// Governor config keyed by peer IP.
/// StateInformationMiddleware comes with use_headers() and adds
/// X-RateLimit-* headers to responses for quota visibility.
pub type ApiGovernorConfig =
    tower_governor::governor::GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

/// Builds the shared governor config from the configured limits.
pub fn governor_config(config: &RateLimitConfig) -> Arc<ApiGovernorConfig> {
    Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.per_second)
            .burst_size(config.burst_size)
            .use_headers()
            .finish()
            .unwrap(),
    )
}
