use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Printable ASCII plus a few multi-byte characters, so hashing sees
/// non-ASCII UTF-8 too.
const PASSWORD_CHARS: &[char] = &[
    'a', 'b', 'c', 'x', 'y', 'z', 'A', 'M', 'Z', '0', '1', '5', '9', '!', '@', '#', '$', '%', ' ',
    '_', '-', 'é', 'ß', 'ü', '€',
];

/// Seeded so every bench run hashes and registers the same passwords.
pub fn generate_random_passwords(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| {
            let length = rng.gen_range(6..=32);
            (0..length).filter_map(|_| PASSWORD_CHARS.choose(&mut rng)).collect()
        })
        .collect()
}
