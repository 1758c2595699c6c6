use rand::seq::index;
use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Prepend one random lowercase letter or digit to `name`.
pub fn corrupt<R: Rng + ?Sized>(name: &str, rng: &mut R) -> String {
    let prefix = ALPHABET[rng.gen_range(0..ALPHABET.len())] as char;
    format!("{}{}", prefix, name)
}

/// Corrupt each name independently, keeping their order.
pub fn corrupt_all<I, S, R>(names: I, rng: &mut R) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    names
        .into_iter()
        .map(|name| corrupt(name.as_ref(), rng))
        .collect()
}

/// One random combination of every size from `start` (capped at
/// `items.len()`) up to `items.len()`.
///
/// Elements are drawn without replacement and keep their relative order
/// from `items`.
pub fn random_combinations<T, R>(items: &[T], start: usize, rng: &mut R) -> Vec<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let start = start.min(items.len());
    (start..=items.len())
        .map(|size| random_combination(items, size, rng))
        .collect()
}

fn random_combination<T, R>(items: &[T], size: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if size == 0 {
        return Vec::new();
    }
    let mut positions = index::sample(rng, items.len(), size).into_vec();
    positions.sort_unstable();
    positions.into_iter().map(|i| items[i].clone()).collect()
}
