use std::cmp::Ordering;

pub trait Partition {
    fn name() -> String;

    /// Partitions `arr` into the elements `classify` maps to `Less`, then `Equal`, then
    /// `Greater`. Returns `(num_lt, num_le)`, the end of the first and second block.
    fn partition_by<T, F>(arr: &mut [T], classify: F) -> (usize, usize)
    where
        F: FnMut(&T) -> Ordering;

    fn partition_around<T>(arr: &mut [T], pivot: &T) -> (usize, usize)
    where
        T: Ord,
    {
        Self::partition_by(arr, |elem| elem.cmp(pivot))
    }
}

pub mod patterns;

#[doc(hidden)]
pub use paste;
