//! Vehicle id and license plate generation.
//!
//! Free functions over any [`rand::Rng`]; they never touch registry state.
//! Pass a seeded `StdRng` for reproducible output.

use rand::Rng;

/// Length of a generated vehicle id.
pub const VEHICLE_ID_LENGTH: usize = 12;

/// Random sequence of `length` uppercase ASCII letters.
pub fn generate_vehicle_id<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length).map(|_| uppercase_letter(rng)).collect()
}

/// License plate `AA-99-BB` where `AA` are the first two characters of `id`.
pub fn generate_vehicle_license<R: Rng + ?Sized>(rng: &mut R, id: &str) -> String {
    let prefix: String = id.chars().take(2).collect();
    let digits: String = (0..2).map(|_| digit(rng)).collect();
    let letters: String = (0..2).map(|_| uppercase_letter(rng)).collect();
    format!("{prefix}-{digits}-{letters}")
}

fn uppercase_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(rng.random_range(b'A'..=b'Z'))
}

fn digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(rng.random_range(b'0'..=b'9'))
}
