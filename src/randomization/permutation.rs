use rand::Rng;

/// Shuffles `items` in place with the Fisher-Yates algorithm: walking `i`
/// from the last index down to 1, swap `items[i]` with `items[j]` for `j`
/// drawn uniformly from `[0, i]`. Every permutation is equally likely.
pub fn fisher_yates_shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
