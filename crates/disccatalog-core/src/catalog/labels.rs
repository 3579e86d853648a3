/// Section labels: `A`…`Z`, then `AA`, `AB`, … (spreadsheet-column style).
///
/// Bijective base-26 has no zero digit, so every index maps to exactly one
/// label and the sequence never wraps or repeats.

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Label for the section at zero-based `index`.
///
/// `0 → A`, `25 → Z`, `26 → AA`, `701 → ZZ`, `702 → AAA`.
pub fn section_label(index: usize) -> String {
    let mut digits: Vec<u8> = Vec::with_capacity(2);
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % ALPHABET.len();
        digits.push(ALPHABET[rem]);
        n = (n - 1) / ALPHABET.len();
    }
    digits.reverse();
    // The alphabet is ASCII.
    digits.into_iter().map(char::from).collect()
}
