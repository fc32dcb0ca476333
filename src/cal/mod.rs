//! Gregorian calendar calculations on year, month, and day fields.

pub(crate) mod date;
pub(crate) mod fmt;
#[cfg(feature = "parse")] pub(crate) mod parse;
pub(crate) mod week;
