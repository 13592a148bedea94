//! Platform timer used for simulated latency.

use std::time::Duration;

/// Wait for `duration` on the browser event loop.
///
/// Non-browser builds never run login submissions, so they return at once.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = duration;
}
