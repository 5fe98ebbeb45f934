#![forbid(unsafe_code)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_assignments, unused_variables))
))]
#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

//! Two small Fibonacci calculators.
//!
//! * [`memo`] computes the first `n` terms with memoized recursion over a
//!   fixed-capacity [`Cache`].
//! * [`state`] advances a `(current, next)` pair of 32-bit integers with
//!   simultaneous updates, with an explicit [`Overflow`] policy.
//!
//! ## Example
//!
//! ```rust
//! use fibseq::{Cache, Fibonacci, Overflow};
//!
//! let mut cache = Cache::new();
//! assert_eq!(cache.series(10)?, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
//!
//! let mut fib = Fibonacci::new();
//! fib.advance(10, Overflow::Wrap)?;
//! assert_eq!((fib.current, fib.next), (55, 89));
//! # Ok::<(), fibseq::Error>(())
//! ```

// log for logging (optional).
#[cfg(feature = "log")]
pub(crate) use ::log;

#[cfg(not(feature = "log"))]
#[allow(unused_imports, unused_macros)]
pub(crate) mod log {
    macro_rules! debug    ( ($($tt:tt)*) => {{}} );
    macro_rules! info     ( ($($tt:tt)*) => {{}} );
    macro_rules! trace    ( ($($tt:tt)*) => {{}} );
    pub(crate) use debug;
    pub(crate) use info;
    pub(crate) use trace;
}

mod error;
pub use error::*;

pub mod input;
pub mod memo;
pub mod state;

pub use memo::{series, Cache};
pub use state::{Advanced, Fibonacci, Overflow};
