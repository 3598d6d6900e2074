//! Collection type aliases for the triangulation.
//!
//! The edge store is keyed by vertex coordinates the library produces itself,
//! so the non-cryptographic `FxHasher` is used throughout. Short-lived work
//! lists (the dig stack, boundary edge scans) live in `SmallVec` buffers that
//! stay on the stack for typical cavity sizes.

use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// Optimized `HashMap` type for performance-critical operations.
///
/// # Security Warning
///
/// ⚠️ **Not DoS-resistant**: Do not use with attacker-controlled keys.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::collections::FastHashMap;
///
/// let mut map: FastHashMap<u64, usize> = FastHashMap::default();
/// map.insert(123, 456);
/// ```
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// Optimized `HashSet` type, the set counterpart of [`FastHashMap`].
pub type FastHashSet<T> = FxHashSet<T>;

/// Build hasher used by [`FastHashMap`] and [`FastHashSet`].
pub type FastBuildHasher = FxBuildHasher;

/// Stack-first buffer for small, short-lived collections.
///
/// Spills to the heap only when more than `N` items are pushed.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::collections::SmallBuffer;
///
/// let mut stack: SmallBuffer<(u32, u32), 16> = SmallBuffer::new();
/// stack.push((1, 2));
/// assert!(!stack.spilled());
/// ```
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;

/// Inline capacity of the cavity-digging work stack.
pub const DIG_STACK_CAPACITY: usize = 16;

/// Inline capacity for per-insertion boundary edge scans.
pub const BOUNDARY_BUFFER_CAPACITY: usize = 8;

/// Creates a `FastHashMap` with pre-allocated capacity.
#[inline]
#[must_use]
pub fn fast_hash_map_with_capacity<K, V>(capacity: usize) -> FastHashMap<K, V> {
    FastHashMap::with_capacity_and_hasher(capacity, FastBuildHasher::default())
}

/// Creates a `FastHashSet` with pre-allocated capacity.
#[inline]
#[must_use]
pub fn fast_hash_set_with_capacity<T>(capacity: usize) -> FastHashSet<T> {
    FastHashSet::with_capacity_and_hasher(capacity, FastBuildHasher::default())
}
