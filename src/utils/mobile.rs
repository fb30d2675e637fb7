/// Number of digits in an accepted mobile number.
pub const MOBILE_NUMBER_DIGITS: usize = 10;

/// Exactly ten ASCII digits, nothing else.
///
/// No trimming, no country code, no separators: `" 9876543210"`,
/// `"+919876543210"` and `"98765-43210"` are all rejected.
pub fn is_valid_mobile_number(candidate: &str) -> bool {
    candidate.len() == MOBILE_NUMBER_DIGITS && candidate.bytes().all(|b| b.is_ascii_digit())
}
