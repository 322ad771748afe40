//! Platform facade for switching between real, custom and fake implementations.

use crate::pal::abstractions::Platform;
use crate::pal::custom::CustomPlatform;
#[cfg(test)]
use crate::pal::fake::FakePlatform;
use crate::pal::real::RealPlatform;

/// Facade that allows switching between platform implementations.
///
/// This enum provides a unified interface to the real monotonic clock, a clock source
/// provided by the caller, or a fake clock (for testing).
#[derive(Clone, Debug)]
pub(crate) enum PlatformFacade {
    /// Real platform implementation using the monotonic clock.
    Real(RealPlatform),

    /// Clock source supplied by the caller.
    Custom(CustomPlatform),

    /// Fake platform implementation for testing.
    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    /// Creates a new platform facade using the real implementation.
    pub(crate) fn real() -> Self {
        Self::Real(RealPlatform)
    }

    /// Creates a new platform facade that reads from the given clock source.
    pub(crate) fn custom<F>(source: F) -> Self
    where
        F: Fn() -> f64 + Send + Sync + 'static,
    {
        Self::Custom(CustomPlatform::new(source))
    }

    /// Creates a new platform facade using the fake implementation.
    #[cfg(test)]
    pub(crate) fn fake(fake_platform: FakePlatform) -> Self {
        Self::Fake(fake_platform)
    }
}

impl Default for PlatformFacade {
    fn default() -> Self {
        Self::real()
    }
}

impl Platform for PlatformFacade {
    fn now(&self) -> f64 {
        match self {
            Self::Real(platform) => platform.now(),
            Self::Custom(platform) => platform.now(),
            #[cfg(test)]
            Self::Fake(platform) => platform.now(),
        }
    }
}
