//! Rendering of durations as text.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::{Error, Result};

/// Number of digits after the decimal point when rendering a duration in seconds.
///
/// The default precision is 2, which renders 2.824 seconds as `2.82s`.
///
/// A precision can be created infallibly from a `u16` via [`Precision::new()`] or converted
/// from loosely typed input (strings, signed integers, floats), in which case any value that
/// is not an integer between 0 and [`Precision::MAX`] is rejected with
/// [`Error::InvalidArgument`].
///
/// # Examples
///
/// ```
/// use simple_clock::Precision;
///
/// let precision: Precision = "3".parse().unwrap();
/// assert_eq!(precision.digits(), 3);
///
/// assert!(Precision::try_from("abc").is_err());
/// assert!(Precision::try_from(-1_i64).is_err());
/// assert!(Precision::try_from("70000").is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Precision(u16);

impl Precision {
    /// The precision used when none is configured.
    pub const DEFAULT: Self = Self(2);

    /// The largest precision that can be rendered.
    pub const MAX: Self = Self(u16::MAX);

    /// Creates a precision with the given number of fractional digits.
    #[must_use]
    pub const fn new(digits: u16) -> Self {
        Self(digits)
    }

    /// The number of fractional digits.
    #[must_use]
    pub fn digits(self) -> usize {
        usize::from(self.0)
    }

    fn checked(digits: i64, invalid_value: impl ToString) -> Result<Self> {
        if digits < 0 {
            return Err(Error::invalid_argument(
                invalid_value,
                "precision must not be negative",
            ));
        }

        u16::try_from(digits).map(Self).map_err(|_ignored| {
            Error::invalid_argument(
                invalid_value,
                format!("precision must be at most {}", u16::MAX),
            )
        })
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Precision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().parse::<i64>().map_err(|e| {
            Error::invalid_argument(s, format!("precision must be a non-negative integer ({e})"))
        })?;

        Self::checked(digits, s)
    }
}

impl TryFrom<&str> for Precision {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<String> for Precision {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<i64> for Precision {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::checked(value, value)
    }
}

impl TryFrom<f64> for Precision {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(Error::invalid_argument(value, "precision must be a whole number"));
        }

        if value < 0.0 {
            return Err(Error::invalid_argument(value, "precision must not be negative"));
        }

        if value > f64::from(u16::MAX) {
            return Err(Error::invalid_argument(
                value,
                format!("precision must be at most {}", u16::MAX),
            ));
        }

        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "checked to be a whole number within the u16 range above"
        )]
        let digits = value as u16;

        Ok(Self(digits))
    }
}

/// How the numeric part of a duration is rendered.
///
/// The `s` unit suffix is appended in all cases, so `2.824` seconds rendered with
/// `Fixed(Precision::new(2))` becomes `2.82s`.
#[derive(Clone)]
#[non_exhaustive]
pub enum TimeFormat {
    /// Fixed-point notation with the given number of fractional digits.
    Fixed(Precision),

    /// A caller-supplied function that renders the number of seconds.
    ///
    /// The output is used verbatim, without any validation.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl TimeFormat {
    /// Creates a format that renders the number of seconds via the given function.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_clock::TimeFormat;
    ///
    /// let format = TimeFormat::custom(|seconds| format!("{seconds:08.3}"));
    /// assert_eq!(format.render(1.5), "0001.500s");
    /// ```
    #[must_use]
    pub fn custom<F>(render: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(render))
    }

    /// Renders a number of seconds, including the `s` suffix.
    #[must_use]
    pub fn render(&self, seconds: f64) -> String {
        match self {
            Self::Fixed(precision) => format!("{seconds:.prec$}s", prec = precision.digits()),
            Self::Custom(render) => format!("{}s", render(seconds)),
        }
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self::Fixed(Precision::DEFAULT)
    }
}

impl From<Precision> for TimeFormat {
    fn from(precision: Precision) -> Self {
        Self::Fixed(precision)
    }
}

impl fmt::Debug for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(precision) => f.debug_tuple("Fixed").field(precision).finish(),
            Self::Custom(_) => f.debug_tuple("Custom").finish_non_exhaustive(),
        }
    }
}

/// Renders a labeled measurement line, without line terminator: `"{label}: {value}s"`.
///
/// # Examples
///
/// ```
/// use simple_clock::{Precision, TimeFormat, format_line};
///
/// let format = TimeFormat::from(Precision::new(2));
/// assert_eq!(format_line("X", 2.824, &format), "X: 2.82s");
/// ```
#[must_use]
pub fn format_line(label: &str, seconds: f64, format: &TimeFormat) -> String {
    format!("{label}: {}", format.render(seconds))
}
