//! Memoized recursion over a fixed-capacity cache.

use crate::log;
use crate::{Error, Result};

/// The largest term index whose value fits into an `i64`.
///
/// `F(92) = 7_540_113_804_746_346_429`, `F(93)` does not fit.
pub const LAST_I64_TERM: usize = 92;

/// A fixed-capacity cache of Fibonacci terms, indexed by term number.
///
/// Every slot starts out as "not yet computed". Once a slot is written it
/// holds the value of that term and is never written again.
///
/// Only the first `LAST_I64_TERM + 1` slots are ever stored, since no later
/// term fits into an `i64`; `capacity` still bounds which indices are valid.
#[derive(Debug, Clone)]
pub struct Cache {
    slots: Box<[Option<i64>]>,
    capacity: usize,
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

impl Cache {
    /// The number of slots in a cache created with [`Cache::new`]
    pub const CAPACITY_DEFAULT: usize = 100;

    /// Create a cache with [`Cache::CAPACITY_DEFAULT`] slots
    pub fn new() -> Self {
        Self::with_capacity(Self::CAPACITY_DEFAULT)
    }

    /// Create a cache that accepts term indices below `capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        let stored = capacity.min(LAST_I64_TERM + 1);
        Self { slots: vec![None; stored].into_boxed_slice(), capacity }
    }

    /// One more than the largest term index the cache accepts
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of slots that hold a computed term
    pub fn computed(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Peek at a slot without computing anything
    pub fn get(&self, n: usize) -> Option<i64> {
        self.slots.get(n).copied().flatten()
    }

    /// Compute term `n`, filling in every slot it depends on.
    ///
    /// Terms 0 and 1 are returned directly. Any other term is served from
    /// the cache if present, otherwise it is computed from the two terms
    /// before it and stored.
    pub fn fibonacci(&mut self, n: usize) -> Result<i64> {
        if n >= self.capacity() {
            return Err(Error::CapacityExceeded { requested: n.saturating_add(1), capacity: self.capacity() });
        }

        if n > LAST_I64_TERM {
            return Err(Error::Overflow { index: (LAST_I64_TERM + 1) as u64 });
        }

        if n <= 1 {
            return Ok(n as i64);
        }

        if let Some(value) = self.slots[n] {
            log::trace!("cache hit: F({n}) = {value}");
            return Ok(value);
        }

        let value = self.fibonacci(n - 1)? + self.fibonacci(n - 2)?;
        log::trace!("cache miss: F({n}) = {value}");
        self.slots[n] = Some(value);
        Ok(value)
    }

    /// The first `count` terms, in order.
    ///
    /// Fails before computing anything if `count` is larger than the cache.
    pub fn series(&mut self, count: usize) -> Result<Vec<i64>> {
        if count > self.capacity() {
            return Err(Error::CapacityExceeded { requested: count, capacity: self.capacity() });
        }

        log::debug!("computing {count} terms with a cache of {} slots", self.capacity());
        (0..count).map(|n| self.fibonacci(n)).collect()
    }
}

/// The first `count` terms, computed with a fresh [`Cache`] of default capacity
pub fn series(count: usize) -> Result<Vec<i64>> {
    Cache::new().series(count)
}
