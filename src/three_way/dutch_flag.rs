use std::cmp::Ordering;

partition_impl!("dutch_flag");

pub fn partition_by<T, F: FnMut(&T) -> Ordering>(data: &mut [T], classify: F) -> (usize, usize) {
    flag_partition::partition_by(data, classify)
}
