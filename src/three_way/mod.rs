pub mod dutch_flag;

// Comparison sort on the class, the baseline every single pass variant has to beat.
pub mod rust_std;

// Lomuto partition run twice, first splitting off Less then Equal.
#[cfg(feature = "two_pass_partition")]
pub mod two_pass;
