// Tests for Alphabet
// - every symbol maps to a distinct index and back
// - characters outside the set are rejected

use super::*;

#[test]
fn test_mapping_is_a_bijection() {
    let alphabet = Alphabet;
    let mut seen = [false; ALPHABET_SIZE];
    for index in 0..ALPHABET_SIZE {
        let ch = alphabet.symbol(index).unwrap();
        let back = alphabet.index_of(ch).unwrap();
        assert_eq!(back, index);
        assert!(!seen[back]);
        seen[back] = true;
    }
    assert!(seen.iter().all(|&s| s));
    assert_eq!(alphabet.symbol(ALPHABET_SIZE), None);
}

#[test]
fn test_fixed_order() {
    let alphabet = Alphabet;
    assert_eq!(alphabet.index_of('a'), Ok(0));
    assert_eq!(alphabet.index_of('z'), Ok(25));
    assert_eq!(alphabet.index_of('-'), Ok(26));
    assert_eq!(alphabet.index_of(' '), Ok(27));
    assert_eq!(alphabet.index_of('.'), Ok(28));
    assert_eq!(alphabet.index_of('\''), Ok(29));
}

#[test]
fn test_rejects_characters_outside_the_set() {
    let alphabet = Alphabet;
    for ch in ['A', '7', '\t', '\n', '_', 'é', '\\'] {
        assert_eq!(alphabet.index_of(ch), Err(TrieError::InvalidCharacter(ch)));
        assert!(!alphabet.contains(ch));
    }
}

#[test]
fn test_indices_stops_at_first_invalid() {
    let alphabet = Alphabet;
    assert_eq!(alphabet.indices("ice-cream"), Ok(vec![8, 2, 4, 26, 2, 17, 4, 0, 12]));
    assert_eq!(alphabet.indices("ca7x"), Err(TrieError::InvalidCharacter('7')));
    assert_eq!(alphabet.indices(""), Ok(Vec::new()));
}
