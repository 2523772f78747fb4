//! Zero-cost timing instrumentation for the wrap engine.
//!
//! When the `timing` feature is enabled, the engine collects coarse phase
//! timings and reports them to stderr. When disabled, all types become
//! zero-sized and all methods compile away.

#[cfg(feature = "timing")]
mod real {
    use std::time::Duration;

    /// Timer that tracks elapsed time when timing is enabled.
    pub struct Timer(std::time::Instant);

    impl Timer {
        #[inline]
        pub fn start() -> Self {
            Self(std::time::Instant::now())
        }

        #[inline]
        pub fn elapsed(&self) -> Duration {
            self.0.elapsed()
        }
    }

    /// Coarse phase timings for one hull computation.
    #[derive(Debug, Default)]
    pub struct WrapTimings {
        pub setup: Duration,
        pub wrap: Duration,
    }

    impl WrapTimings {
        pub fn report(&self, workers: usize, vertices: usize) {
            let total = self.setup + self.wrap;
            eprintln!(
                "wrap timing: {} workers, {} vertices | setup {:.3}ms, wrap {:.3}ms, total {:.3}ms",
                workers,
                vertices,
                self.setup.as_secs_f64() * 1e3,
                self.wrap.as_secs_f64() * 1e3,
                total.as_secs_f64() * 1e3,
            );
        }
    }
}

#[cfg(not(feature = "timing"))]
mod stub {
    use std::time::Duration;

    /// Dummy timer when `timing` is disabled (zero-sized).
    pub struct Timer;

    impl Timer {
        #[inline(always)]
        pub fn start() -> Self {
            Self
        }

        #[inline(always)]
        pub fn elapsed(&self) -> Duration {
            Duration::ZERO
        }
    }

    /// Dummy timings when `timing` is disabled (zero-sized).
    #[derive(Debug, Default)]
    pub struct WrapTimings {
        pub setup: Duration,
        pub wrap: Duration,
    }

    impl WrapTimings {
        #[inline(always)]
        pub fn report(&self, _workers: usize, _vertices: usize) {}
    }
}

#[cfg(feature = "timing")]
pub(crate) use real::{Timer, WrapTimings};
#[cfg(not(feature = "timing"))]
pub(crate) use stub::{Timer, WrapTimings};
