//! Dec Int \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision signed integers, stored in ordinary decimal digit form.
//! - [`Sign`]: The two-value sign of a [`BigInt`]; zero is always positive.
//! - [`ParseBigIntError`]: The error returned when construction from text fails.

mod big_int;
mod big_int_cache;

pub use big_int::{BigInt, ParseBigIntError, Sign};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), format!("9{}", "0".repeat(24)));
        assert_eq!((-&a).to_string(), "-10000000000000");
        assert!(-&a < b);
    }
}
