use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

static AUDIT_SUCCESS: AtomicU64 = AtomicU64::new(0);
static AUDIT_FAILURE: AtomicU64 = AtomicU64::new(0);

pub fn record_audit_success() {
    AUDIT_SUCCESS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_audit_failure() {
    AUDIT_FAILURE.fetch_add(1, Ordering::Relaxed);
}

pub fn start_timer() -> Instant {
    Instant::now()
}

pub fn elapsed_ms(start: Instant) -> u128 {
    start.elapsed().as_millis()
}

pub fn snapshot() -> (u64, u64) {
    (
        AUDIT_SUCCESS.load(Ordering::Relaxed),
        AUDIT_FAILURE.load(Ordering::Relaxed),
    )
}
