use num_bigint::BigUint;

/// Encodes a string as the concatenation of its characters' decimal
/// code points, read as one base-10 integer.
///
/// `encode("Zeus")` is `90101117115` (Z=90, e=101, u=117, s=115). The
/// original casing is encoded as-is; only the aggregation filter is
/// case-insensitive.
///
/// Undefined for the empty string; callers filter empty items out
/// before encoding.
pub fn encode(item: &str) -> BigUint {
    debug_assert!(!item.is_empty(), "encode is undefined for empty strings");
    let mut value = BigUint::from(0u32);
    for ch in item.chars() {
        let code = ch as u32;
        // Shift left by the decimal width of `code`, then append it.
        let width = code.checked_ilog10().unwrap_or(0) + 1;
        value = value * 10u32.pow(width) + code;
    }
    value
}
