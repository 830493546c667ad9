pub use partition_test_tools::Partition;

macro_rules! partition_impl {
    ($name:expr) => {
        pub struct PartitionImpl;

        impl partition_test_tools::Partition for PartitionImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn partition_by<T, F>(arr: &mut [T], classify: F) -> (usize, usize)
            where
                F: FnMut(&T) -> std::cmp::Ordering,
            {
                partition_by(arr, classify)
            }
        }
    };
}

pub mod cli;
pub mod three_way;
