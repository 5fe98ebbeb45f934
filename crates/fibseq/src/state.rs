//! A `(current, next)` pair advanced with simultaneous updates.

use core::fmt::Display;
use core::str::FromStr;

use crate::log;
use crate::{Error, Result};

/// The number of steps `fib-iter` runs by default
pub const MAX_STEPS_DEFAULT: u64 = 100_000_000_000_000;

/// What to do when a step does not fit into an `i32`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Wrap around in two's complement
    #[default]
    Wrap,

    /// Stop before the overflowing step, keeping the last pair that fits
    Stop,

    /// Fail with [`Error::Overflow`]
    Error,
}

impl FromStr for Overflow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wrap" => Ok(Self::Wrap),
            "stop" => Ok(Self::Stop),
            "error" => Ok(Self::Error),
            _ => Err(format!("unknown overflow policy: {}", s)),
        }
    }
}

/// The outcome of [`Fibonacci::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advanced {
    /// The number of steps that were applied
    pub steps: u64,

    /// Whether [`Overflow::Stop`] ended the loop before all steps ran
    pub stopped_early: bool,
}

/// Two consecutive terms of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fibonacci {
    pub current: i32,
    pub next: i32,
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Fibonacci {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.current, self.next)
    }
}

impl Fibonacci {
    /// `(0, 1)`, the first two terms
    pub const fn new() -> Self {
        Self { current: 0, next: 1 }
    }

    /// The pair after one step, wrapping on overflow
    #[inline]
    pub const fn wrapping_step(self) -> Self {
        Self { current: self.next, next: self.current.wrapping_add(self.next) }
    }

    /// The pair after one step, or `None` if the new term does not fit
    #[inline]
    pub const fn checked_step(self) -> Option<Self> {
        match self.current.checked_add(self.next) {
            Some(next) => Some(Self { current: self.next, next }),
            None => None,
        }
    }

    /// Apply a single step. Returns `false` if [`Overflow::Stop`] kept the pair unchanged.
    pub fn step(&mut self, overflow: Overflow) -> Result<bool> {
        self.advance(1, overflow).map(|advanced| !advanced.stopped_early)
    }

    /// Apply `steps` steps one at a time.
    ///
    /// Both fields are computed from the values before the step and
    /// committed together. With [`Overflow::Error`] the reported index is
    /// the failing step counted from the start of this call, starting at 1.
    pub fn advance(&mut self, steps: u64, overflow: Overflow) -> Result<Advanced> {
        log::debug!("advancing {} by {steps} steps ({overflow:?})", self);

        for step in 0..steps {
            *self = match overflow {
                Overflow::Wrap => self.wrapping_step(),
                Overflow::Stop => match self.checked_step() {
                    Some(next) => next,
                    None => {
                        log::info!("stopping after {step} steps, next term does not fit into i32");
                        return Ok(Advanced { steps: step, stopped_early: true });
                    }
                },
                Overflow::Error => self.checked_step().ok_or(Error::Overflow { index: step + 1 })?,
            };
        }

        Ok(Advanced { steps, stopped_early: false })
    }

    /// The pair after `steps` wrapping steps, computed by fast doubling.
    ///
    /// Equal to `advance(steps, Overflow::Wrap)` but takes `O(log steps)`.
    pub fn jump(self, steps: u64) -> Self {
        // (F(k), F(k+1)) mod 2^32
        let (mut a, mut b) = (0i32, 1i32);
        for bit in (0..u64::BITS - steps.leading_zeros()).rev() {
            let c = a.wrapping_mul(b.wrapping_mul(2).wrapping_sub(a));
            let d = a.wrapping_mul(a).wrapping_add(b.wrapping_mul(b));
            (a, b) = match (steps >> bit) & 1 {
                0 => (c, d),
                _ => (d, c.wrapping_add(d)),
            };
        }

        // G(k) = current * F(k-1) + next * F(k)
        let prev = b.wrapping_sub(a);
        Self {
            current: self.current.wrapping_mul(prev).wrapping_add(self.next.wrapping_mul(a)),
            next: self.current.wrapping_mul(a).wrapping_add(self.next.wrapping_mul(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const F45: i32 = 1_134_903_170;
    const F46: i32 = 1_836_311_903;

    #[test]
    fn starts_at_zero_one() {
        assert_eq!(Fibonacci::default(), Fibonacci { current: 0, next: 1 });
        assert_eq!(Fibonacci::new().to_string(), "0 1");
    }

    #[test]
    fn simultaneous_update() -> Result<()> {
        let mut fib = Fibonacci::new();
        let mut expected = vec![(0, 1)];
        for _ in 0..10 {
            assert!(fib.step(Overflow::Wrap)?);
            expected.push((fib.current, fib.next));
        }
        assert_eq!(
            expected,
            vec![(0, 1), (1, 1), (1, 2), (2, 3), (3, 5), (5, 8), (8, 13), (13, 21), (21, 34), (34, 55), (55, 89)]
        );
        Ok(())
    }

    #[test]
    fn policies_agree_before_overflow() -> Result<()> {
        for policy in [Overflow::Wrap, Overflow::Stop, Overflow::Error] {
            let mut fib = Fibonacci::new();
            let advanced = fib.advance(45, policy)?;
            assert_eq!(advanced, Advanced { steps: 45, stopped_early: false });
            assert_eq!(fib, Fibonacci { current: F45, next: F46 });
        }
        Ok(())
    }

    #[test]
    fn wrap_keeps_going() -> Result<()> {
        let mut fib = Fibonacci::new();
        fib.advance(47, Overflow::Wrap)?;
        assert_eq!(fib.current, -1_323_752_223);
        assert_eq!(fib.current, (2_971_215_073u64 as u32) as i32);
        Ok(())
    }

    #[test]
    fn stop_keeps_last_pair_that_fits() -> Result<()> {
        let mut fib = Fibonacci::new();
        let advanced = fib.advance(MAX_STEPS_DEFAULT, Overflow::Stop)?;
        assert_eq!(advanced, Advanced { steps: 45, stopped_early: true });
        assert_eq!(fib, Fibonacci { current: F45, next: F46 });

        assert!(!fib.step(Overflow::Stop)?);
        assert_eq!(fib, Fibonacci { current: F45, next: F46 });
        Ok(())
    }

    #[test]
    fn error_names_the_step() {
        let mut fib = Fibonacci::new();
        let err = fib.advance(MAX_STEPS_DEFAULT, Overflow::Error).unwrap_err();
        assert!(matches!(err, Error::Overflow { index: 46 }));
        assert_eq!(fib, Fibonacci { current: F45, next: F46 });
    }

    #[test]
    fn error_index_counts_from_the_call() -> Result<()> {
        let mut fib = Fibonacci::new();
        fib.advance(40, Overflow::Error)?;
        let err = fib.advance(10, Overflow::Error).unwrap_err();
        assert!(matches!(err, Error::Overflow { index: 6 }));
        assert_eq!(fib, Fibonacci { current: F45, next: F46 });
        Ok(())
    }

    #[test]
    fn jump_matches_loop() -> Result<()> {
        let starts = [Fibonacci::new(), Fibonacci { current: 3, next: -7 }, Fibonacci { current: i32::MAX, next: 1 }];
        for start in starts {
            let mut fib = start;
            for k in 0..200u64 {
                assert_eq!(start.jump(k), fib, "k={k} start={start}");
                fib.step(Overflow::Wrap)?;
            }

            let mut fib = start;
            fib.advance(1_000_003, Overflow::Wrap)?;
            assert_eq!(start.jump(1_000_003), fib);
        }
        Ok(())
    }

    #[test]
    fn jump_composes() {
        let fib = Fibonacci::new();
        assert_eq!(fib.jump(123_456_789).jump(987_654_321), fib.jump(123_456_789 + 987_654_321));
        assert_eq!(fib.jump(u64::MAX / 2).jump(u64::MAX / 2 + 1), fib.jump(u64::MAX));
    }

    #[test]
    fn jump_period() {
        // Pisano period of 2^32
        let period = 3 * (1u64 << 31);
        assert_eq!(Fibonacci::new().jump(period), Fibonacci::new());
        assert_eq!(Fibonacci::new().jump(MAX_STEPS_DEFAULT), Fibonacci::new().jump(MAX_STEPS_DEFAULT % period));
    }

    #[test]
    fn parses_policies() {
        assert_eq!("wrap".parse::<Overflow>(), Ok(Overflow::Wrap));
        assert_eq!("stop".parse::<Overflow>(), Ok(Overflow::Stop));
        assert_eq!("error".parse::<Overflow>(), Ok(Overflow::Error));
        assert!("saturate".parse::<Overflow>().is_err());
    }
}
