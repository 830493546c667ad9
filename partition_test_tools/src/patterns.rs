use std::env;

use once_cell::sync::Lazy;
use rand::distributions::Distribution;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Seed for every generated pattern. Set `OVERRIDE_SEED` to reproduce a failing run.
pub static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);

    // Shows up in the output of failing tests.
    println!("Seed: {seed}");

    seed
});

fn new_rng(len: usize) -> StdRng {
    StdRng::seed_from_u64(*SEED ^ (len as u64))
}

// --- Flag patterns, every value in {0, 1, 2} ---

/// Uniformly distributed colors.
pub fn random_flag(len: usize) -> Vec<i32> {
    let mut rng = new_rng(len);

    (0..len).map(|_| rng.gen_range(0..3)).collect()
}

/// Colors drawn from a zipf distribution, `0` is the most common one.
pub fn random_zipf_flag(len: usize, exponent: f64) -> Vec<i32> {
    let mut rng = new_rng(len);
    let dist = ZipfDistribution::new(3, exponent).expect("valid zipf parameters");

    // Zipf samples are 1-based.
    (0..len).map(|_| dist.sample(&mut rng) as i32 - 1).collect()
}

pub fn random_zipf_flag_default(len: usize) -> Vec<i32> {
    random_zipf_flag(len, 1.0)
}

/// Mostly `1` with a sprinkle of `0` and `2`, about one in sixteen each.
pub fn mostly_equal_flag(len: usize) -> Vec<i32> {
    let mut rng = new_rng(len);

    (0..len)
        .map(|_| match rng.gen_range(0..32) {
            0 => 0,
            1 => 2,
            _ => 1,
        })
        .collect()
}

pub fn ascending_flag(len: usize) -> Vec<i32> {
    let mut v = random_flag(len);
    v.sort_unstable();
    v
}

pub fn descending_flag(len: usize) -> Vec<i32> {
    let mut v = random_flag(len);
    v.sort_unstable_by(|a, b| b.cmp(a));
    v
}

/// `2, 0, 2, 0, ...`, every element has to travel.
pub fn alternating_flag(len: usize) -> Vec<i32> {
    (0..len).map(|i| if i % 2 == 0 { 2 } else { 0 }).collect()
}

/// Cycles `2, 1, 0`.
pub fn sawtooth_flag(len: usize) -> Vec<i32> {
    (0..len).map(|i| 2 - (i % 3) as i32).collect()
}

pub fn single_class(len: usize, value: i32) -> Vec<i32> {
    vec![value; len]
}

/// Every flag pattern by name, for table driven tests and benchmarks.
pub fn flag_patterns() -> Vec<(&'static str, fn(usize) -> Vec<i32>)> {
    vec![
        ("random", random_flag),
        ("random_zipf", random_zipf_flag_default),
        ("mostly_equal", mostly_equal_flag),
        ("ascending", ascending_flag),
        ("descending", descending_flag),
        ("alternating", alternating_flag),
        ("sawtooth", sawtooth_flag),
    ]
}

// --- Full range patterns ---

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng(len);

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Values in `0..range`, lots of duplicates when `range` is small compared to `len`.
pub fn random_uniform(len: usize, range: i32) -> Vec<i32> {
    let mut rng = new_rng(len);

    (0..len).map(|_| rng.gen_range(0..range)).collect()
}
