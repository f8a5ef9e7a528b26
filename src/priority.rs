//! Priority trait for ranking keys.
//!
//! The [`Priority`] trait abstracts over the key types a priority queue can
//! rank by. Implementations must provide a *total* order over the key
//! domain; the heap engine has no defined behavior under a partial one.

use core::cmp::Ordering;

/// Trait for priority key types.
///
/// The provided implementations cover the primitive integers (via [`Ord`])
/// and `f32`/`f64` (via `total_cmp`, which places NaN at a defined position
/// instead of poisoning the order).
///
/// # Example
///
/// ```
/// use lanes::Priority;
/// use std::cmp::Ordering;
///
/// assert_eq!(3.0_f64.rank(&7.0), Ordering::Less);
/// assert_eq!(42_u32.rank(&42), Ordering::Equal);
/// ```
///
/// # Custom key types
///
/// ```
/// use lanes::Priority;
/// use std::cmp::Ordering;
///
/// #[derive(Copy, Clone)]
/// struct Deadline(u64);
///
/// impl Priority for Deadline {
///     fn rank(&self, other: &Self) -> Ordering {
///         self.0.cmp(&other.0)
///     }
/// }
/// ```
pub trait Priority: Copy {
    /// Compares two keys under the total order.
    fn rank(&self, other: &Self) -> Ordering;
}

macro_rules! ord_priority {
    ($($ty:ty),*) => {
        $(
            impl Priority for $ty {
                #[inline]
                fn rank(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

ord_priority!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Priority for f32 {
    #[inline]
    fn rank(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Priority for f64 {
    #[inline]
    fn rank(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}
