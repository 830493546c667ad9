use core::cmp::Ordering;

partition_impl!("two_pass_lomuto");

pub fn partition_by<T, F: FnMut(&T) -> Ordering>(
    data: &mut [T],
    mut classify: F,
) -> (usize, usize) {
    let num_lt = partition_lomuto(data, &mut |elem: &T| classify(elem) == Ordering::Less);
    let num_eq = partition_lomuto(&mut data[num_lt..], &mut |elem: &T| {
        classify(elem) == Ordering::Equal
    });

    (num_lt, num_lt + num_eq)
}

/// Moves every element for which `pred` returns true to the front of `v` and returns how many
/// there are.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition_lomuto<T, F>(v: &mut [T], pred: &mut F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let len = v.len();
    let mut left = 0;

    // Indices instead of pointer differences, zero-sized `T` would never advance a pointer.
    for right in 0..len {
        if pred(&v[right]) {
            v.swap(left, right);
            left += 1;
        }
    }

    left
}
