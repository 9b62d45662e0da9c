use rand::distr::{Alphanumeric, SampleString};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("identifier length must be at least 1")]
pub struct InvalidLengthError;

/// Generates a random identifier of exactly `length` characters drawn
/// from `[0-9A-Za-z]`. The thread-local RNG is cryptographically secure,
/// so identifiers are unpredictable and collide only with probability
/// 62^-length per pair.
pub fn generate_user_id(length: usize) -> Result<String, InvalidLengthError> {
    if length == 0 {
        return Err(InvalidLengthError);
    }

    let mut rng = rand::rng();
    Ok(Alphanumeric.sample_string(&mut rng, length))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generate_user_id_length() {
        for length in [1, 8, 30, 64] {
            assert_eq!(generate_user_id(length).unwrap().len(), length);
        }
    }

    #[test]
    fn generate_user_id_alphabet() {
        let id = generate_user_id(256).unwrap();
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn generate_user_id_distinct() {
        // Not a proof, but a collision here is a 62^-30 event.
        let a = generate_user_id(30).unwrap();
        let b = generate_user_id(30).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn generate_user_id_zero_length() {
        assert_eq!(generate_user_id(0).unwrap_err(), InvalidLengthError);
    }
}
