use num_bigint::BigUint;

use crate::encode;

/// True when the item's first character equals `letter`, ignoring case.
/// Empty items never match, which also keeps them away from `encode`.
pub fn first_letter_matches(item: &str, letter: char) -> bool {
    item.chars()
        .next()
        .is_some_and(|first| first.to_lowercase().eq(letter.to_lowercase()))
}

/// Filters items by first letter and sums their encodings.
///
/// The reduction is commutative and associative, so the item order is
/// irrelevant; zero survivors yield zero.
pub fn sum_matching<I, S>(items: I, letter: char) -> BigUint
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .filter(|item| first_letter_matches(item.as_ref(), letter))
        .fold(BigUint::from(0u32), |acc, item| acc + encode(item.as_ref()))
}
