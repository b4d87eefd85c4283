use byteorder::{ByteOrder, NativeEndian};

/// Seed a fresh PRNG from OS entropy.
pub fn generate_rng() -> Result<randomize::PCG32, getrandom::Error> {
    generate_seed().map(Into::into)
}

/// Generate a pseudorandom seed for the PRNG.
pub fn generate_seed() -> Result<(u64, u64), getrandom::Error> {
    let mut seed = [0_u8; 16];

    getrandom::getrandom(&mut seed)?;

    Ok((
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    ))
}
