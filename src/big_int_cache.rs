use lazy_static::*;

use crate::big_int::Sign;
use crate::BigInt;

/// Largest magnitude kept in the instance caches.
pub const MAX_CONSTANT: usize = 16;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_parts(Sign::Positive, "0"),
        BigInt::from_parts(Sign::Positive, "1"),
        BigInt::from_parts(Sign::Positive, "2"),
        BigInt::from_parts(Sign::Positive, "3"),
        BigInt::from_parts(Sign::Positive, "4"),
        BigInt::from_parts(Sign::Positive, "5"),
        BigInt::from_parts(Sign::Positive, "6"),
        BigInt::from_parts(Sign::Positive, "7"),
        BigInt::from_parts(Sign::Positive, "8"),
        BigInt::from_parts(Sign::Positive, "9"),
        BigInt::from_parts(Sign::Positive, "10"),
        BigInt::from_parts(Sign::Positive, "11"),
        BigInt::from_parts(Sign::Positive, "12"),
        BigInt::from_parts(Sign::Positive, "13"),
        BigInt::from_parts(Sign::Positive, "14"),
        BigInt::from_parts(Sign::Positive, "15"),
        BigInt::from_parts(Sign::Positive, "16"),
    ];
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_parts(Sign::Positive, "0"),
        BigInt::from_parts(Sign::Negative, "1"),
        BigInt::from_parts(Sign::Negative, "2"),
        BigInt::from_parts(Sign::Negative, "3"),
        BigInt::from_parts(Sign::Negative, "4"),
        BigInt::from_parts(Sign::Negative, "5"),
        BigInt::from_parts(Sign::Negative, "6"),
        BigInt::from_parts(Sign::Negative, "7"),
        BigInt::from_parts(Sign::Negative, "8"),
        BigInt::from_parts(Sign::Negative, "9"),
        BigInt::from_parts(Sign::Negative, "10"),
        BigInt::from_parts(Sign::Negative, "11"),
        BigInt::from_parts(Sign::Negative, "12"),
        BigInt::from_parts(Sign::Negative, "13"),
        BigInt::from_parts(Sign::Negative, "14"),
        BigInt::from_parts(Sign::Negative, "15"),
        BigInt::from_parts(Sign::Negative, "16"),
    ];
}
