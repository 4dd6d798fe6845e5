use rand::Rng;

/// Draws a single code of `length` characters, each picked uniformly from `alphabet`.
/// Characters may repeat within a code.
pub(crate) fn draw<R: Rng + ?Sized>(rng: &mut R, alphabet: &[char], length: usize) -> String {
    let mut code = String::with_capacity(length);
    for _ in 0..length {
        code.push(alphabet[rng.random_range(0..alphabet.len())]);
    }
    code
}

/// Number of distinct codes of `length` characters over an alphabet of `size` characters.
/// `None` when it does not fit in a `u128`.
pub(crate) fn capacity(size: usize, length: usize) -> Option<u128> {
    let exp = u32::try_from(length).ok()?;
    (size as u128).checked_pow(exp)
}
