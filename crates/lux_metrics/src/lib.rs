//! Lux Metrics - call counters for engine instrumentation
//!
//! Engines count the calls they receive so that tooling and tests can verify
//! which writes actually reached them.
//!
//! # Feature Flags
//!
//! - `metrics` - Enable counting (default: disabled)
//!
//! # Usage
//!
//! ```ignore
//! use lux_metrics::Counter;
//!
//! let mut calls = Counter::new();
//! calls.increment("scene.set_skybox", 1);
//! assert_eq!(calls.get("scene.set_skybox"), 1);
//! ```
//!
//! Without the `metrics` feature, `Counter` is a no-op stub that always
//! reports zero.

#[cfg(feature = "metrics")]
mod counter;

#[cfg(feature = "metrics")]
pub use counter::Counter;

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
#[derive(Debug, Default, Clone)]
pub struct Counter;

#[cfg(not(feature = "metrics"))]
impl Counter {
    pub fn new() -> Self { Self }
    pub fn increment(&mut self, _name: &str, _value: usize) {}
    pub fn get(&self, _name: &str) -> usize { 0 }
    pub fn reset(&mut self, _name: &str) {}
    pub fn reset_all(&mut self) {}
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_compiles_with_or_without_metrics() {
        let mut counter = super::Counter::new();
        counter.increment("calls", 1);
        counter.reset_all();
        assert_eq!(counter.get("calls"), 0);
    }
}
