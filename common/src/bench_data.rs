//! Generated inputs shared by the benchmarks of all crates.

/// skewed, text like input. deterministic so runs are comparable
pub fn gen_text(len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"eeeeeeeeetttttaaaaooooiiinnnsssrrhhldcumfpgwybvkxjqz  ,.\n";
    let mut state: u32 = 0x9E37_79B9;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            ALPHABET[state as usize % ALPHABET.len()]
        })
        .collect()
}
