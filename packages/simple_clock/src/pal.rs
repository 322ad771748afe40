//! Platform abstraction layer for reading the clock source.
//!
//! This module allows switching between the real monotonic clock, a clock source
//! supplied by the caller and fake implementations for testing purposes.

mod abstractions;
mod custom;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
