//! String hash functions accepted by the maps in this crate

/// Signature of a hash function a map is constructed with.
///
/// It must be pure and deterministic; nothing else is assumed about its distribution.
pub type HashFunction = fn(&str) -> u64;

/// Sums the code points of every character in `key`.
///
/// Anagrams collide, which makes it handy for exercising collision paths.
#[must_use]
pub fn hash_function_1(key: &str) -> u64 {
    key.chars().fold(0_u64, |hash, letter| hash.wrapping_add(u64::from(u32::from(letter))))
}

/// Sums the code points of every character in `key`, each weighted by its 1-based position.
#[must_use]
pub fn hash_function_2(key: &str) -> u64 {
    key.chars().zip(1_u64..).fold(0_u64, |hash, (letter, position)| {
        hash.wrapping_add(position.wrapping_mul(u64::from(u32::from(letter))))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_function_1_sums_code_points() {
        assert_eq!(hash_function_1(""), 0);
        assert_eq!(hash_function_1("a"), 97);
        assert_eq!(hash_function_1("key1"), 378);
        assert_eq!(hash_function_1("ab"), hash_function_1("ba"));
    }

    #[test]
    fn test_hash_function_2_weights_by_position() {
        assert_eq!(hash_function_2(""), 0);
        assert_eq!(hash_function_2("1"), 49);
        // 1 * '2' + 2 * '0'
        assert_eq!(hash_function_2("20"), 146);
        assert_ne!(hash_function_2("ab"), hash_function_2("ba"));
    }
}
