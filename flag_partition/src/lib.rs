//! Dutch national flag three-way partition.
//!
//! Reorders a slice whose elements fall into three classes into three contiguous blocks,
//! `Less` then `Equal` then `Greater`, with a single left-to-right pass and no scratch memory.
use core::cmp::Ordering;
use core::ptr;

mod color;

pub use color::{Color, InvalidColor};

/// Elements with a fixed position in the three-valued domain.
///
/// `Less` is the lowest domain value, `Equal` the middle one and `Greater` the highest.
pub trait ThreeValued {
    fn class(&self) -> Ordering;
}

macro_rules! impl_three_valued_int {
    ($($t:ty),*) => {
        $(
            // 0, 1 and 2 map to Less, Equal and Greater. Anything else is outside the domain and
            // lands wherever its comparison with 1 puts it.
            impl ThreeValued for $t {
                #[inline(always)]
                fn class(&self) -> Ordering {
                    (*self).cmp(&1)
                }
            }
        )*
    };
}

impl_three_valued_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: ThreeValued + ?Sized> ThreeValued for &T {
    #[inline(always)]
    fn class(&self) -> Ordering {
        (**self).class()
    }
}

/// Sorts `v` in place, assuming every element is one of the three domain values.
///
/// Runs in *O*(*n*) time, does not allocate and never compares two elements with each other.
/// Out-of-domain values are not detected, see [`ThreeValued`].
///
/// # Examples
///
/// ```
/// let mut v = [2, 0, 2, 1, 1, 0];
/// flag_partition::partition(&mut v);
/// assert_eq!(v, [0, 0, 1, 1, 2, 2]);
/// ```
#[inline]
pub fn partition<T: ThreeValued>(v: &mut [T]) {
    partition_by(v, |elem| elem.class());
}

/// Sorts a slice of color codes `0`, `1` and `2`.
#[inline]
pub fn sort_colors(nums: &mut [i32]) {
    partition(nums);
}

/// Partitions `v` by the class `classify` assigns to each element.
///
/// Returns `(num_lt, num_le)`: `v[..num_lt]` holds the `Less` elements, `v[num_lt..num_le]` the
/// `Equal` ones and `v[num_le..]` the `Greater` ones. The relative order inside a block is
/// unspecified.
///
/// `classify` is called exactly once per element. If it panics, `v` holds a permutation of its
/// original elements.
pub fn partition_by<T, F>(v: &mut [T], mut classify: F) -> (usize, usize)
where
    F: FnMut(&T) -> Ordering,
{
    partition_dutch_flag(v, &mut classify)
}

/// Partitions `v` into elements less than, equal to and greater than `pivot`.
///
/// Returns the same bounds as [`partition_by`].
pub fn partition_around<T: Ord>(v: &mut [T], pivot: &T) -> (usize, usize) {
    partition_by(v, |elem| elem.cmp(pivot))
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition_dutch_flag<T, F>(v: &mut [T], classify: &mut F) -> (usize, usize)
where
    F: FnMut(&T) -> Ordering,
{
    let len = v.len();

    // [0, low) is Less, [low, mid) is Equal, [mid, high) is unclassified, [high, len) is Greater.
    // The textbook form keeps `high` inclusive and loops while `mid <= high`; an exclusive bound
    // visits the same elements without underflowing on an empty slice.
    let mut low = 0;
    let mut mid = 0;
    let mut high = len;

    // SAFETY: `low <= mid < high <= len` holds whenever an element is accessed, so every pointer
    // is in-bounds. `ptr::swap` permits `low == mid`. Each swap completes before `classify` runs
    // again, so a panic in `classify` leaves `v` as a permutation of its original elements.
    unsafe {
        let v_base = v.as_mut_ptr();

        while mid < high {
            let mid_ptr = v_base.add(mid);

            match classify(&*mid_ptr) {
                Ordering::Less => {
                    ptr::swap(v_base.add(low), mid_ptr);
                    low += 1;
                    mid += 1;
                }
                Ordering::Equal => {
                    mid += 1;
                }
                Ordering::Greater => {
                    high -= 1;
                    // The element swapped in from `high` is unclassified, `mid` must stay put.
                    ptr::swap(mid_ptr, v_base.add(high));
                }
            }
        }
    }

    (low, mid)
}
