use std::cmp::Ordering;

partition_impl!("rust_std_unstable");

pub fn partition_by<T, F: FnMut(&T) -> Ordering>(
    data: &mut [T],
    mut classify: F,
) -> (usize, usize) {
    data.sort_unstable_by(|a, b| classify(a).cmp(&classify(b)));

    let num_lt = data.partition_point(|elem| classify(elem) == Ordering::Less);
    let num_le = num_lt + data[num_lt..].partition_point(|elem| classify(elem) == Ordering::Equal);

    (num_lt, num_le)
}
