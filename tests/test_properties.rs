//! Property-based tests for BitSequence invariants.

use bitseq::BitSequence;
use proptest::prelude::*;
use std::cmp::Ordering;

// Strategy for generating sequences of arbitrary length, spanning several words
prop_compose! {
    fn arb_seq(max_bits: usize)
        (bits in prop::collection::vec(any::<bool>(), 0..max_bits))
        -> BitSequence
    {
        bits.into_iter().collect()
    }
}

prop_compose! {
    fn arb_nonempty_seq(max_bits: usize)
        (bits in prop::collection::vec(any::<bool>(), 1..max_bits))
        -> BitSequence
    {
        bits.into_iter().collect()
    }
}

prop_compose! {
    fn arb_bit_string(max_bits: usize)
        (chars in prop::collection::vec(prop::sample::select(vec!['0', '1']), 0..max_bits))
        -> String
    {
        chars.into_iter().collect()
    }
}

proptest! {
    #[test]
    fn prop_with_len_is_all_zero(n in 0..500usize) {
        let s = BitSequence::with_len(n);
        prop_assert_eq!(s.len(), n);
        prop_assert!((0..n).all(|i| !s.get(i).unwrap()));
    }

    #[test]
    fn prop_text_round_trip(text in arb_bit_string(300)) {
        let s: BitSequence = text.parse().unwrap();
        prop_assert_eq!(s.to_string(), text);
    }

    #[test]
    fn prop_insert_erase_inverse(s in arb_seq(200), pos_seed in any::<usize>(), bit in any::<bool>()) {
        let pos = pos_seed % (s.len() + 1);
        let mut t = s.clone();
        t.insert(pos, bit).unwrap();
        prop_assert_eq!(t.len(), s.len() + 1);
        prop_assert_eq!(t.get(pos).unwrap(), bit);
        t.erase(pos, 1).unwrap();
        prop_assert_eq!(t, s);
    }

    #[test]
    fn prop_insert_matches_vec_model(bits in prop::collection::vec(any::<bool>(), 0..150), pos_seed in any::<usize>(), bit in any::<bool>()) {
        let pos = pos_seed % (bits.len() + 1);
        let mut model = bits.clone();
        model.insert(pos, bit);

        let mut s: BitSequence = bits.into_iter().collect();
        s.insert(pos, bit).unwrap();
        prop_assert_eq!(s.iter().collect::<Vec<_>>(), model);
    }

    #[test]
    fn prop_erase_matches_vec_model(bits in prop::collection::vec(any::<bool>(), 0..150), a in any::<usize>(), b in any::<usize>()) {
        let pos = a % (bits.len() + 1);
        let nbits = b % (bits.len() - pos + 1);
        let mut model = bits.clone();
        model.drain(pos..pos + nbits);

        let mut s: BitSequence = bits.into_iter().collect();
        s.erase(pos, nbits).unwrap();
        prop_assert_eq!(s.iter().collect::<Vec<_>>(), model);
        prop_assert!(s.capacity() >= s.len());
    }

    #[test]
    fn prop_double_complement(s in arb_seq(300)) {
        prop_assert_eq!(!!&s, s);
    }

    #[test]
    fn prop_complement_count(s in arb_seq(300)) {
        prop_assert_eq!(s.count_ones() + (!&s).count_ones(), s.len());
    }

    #[test]
    fn prop_any_iff_count(s in arb_seq(300)) {
        prop_assert_eq!(s.any(), s.count_ones() > 0);
    }

    #[test]
    fn prop_append_then_slice(x in arb_seq(150), y in arb_seq(150)) {
        let mut joined = x.clone();
        joined.append(&y);
        prop_assert_eq!(joined.slice(0, x.len()).unwrap(), x.clone());
        prop_assert_eq!(joined.slice(x.len(), y.len()).unwrap(), y);
    }

    #[test]
    fn prop_equality_reflexive_symmetric(x in arb_seq(100), y in arb_seq(100)) {
        prop_assert_eq!(&x, &x.clone());
        prop_assert_eq!(x == y, y == x);
    }

    #[test]
    fn prop_ordering_is_strict_weak(x in arb_nonempty_seq(80), y in arb_nonempty_seq(80)) {
        prop_assert!(!x.try_lt(&x).unwrap());
        let lt = x.try_lt(&y).unwrap();
        let gt = y.try_lt(&x).unwrap();
        let eq = x == y;
        prop_assert_eq!([lt, gt, eq].iter().filter(|&&v| v).count(), 1);

        let model = x.iter().cmp(y.iter());
        prop_assert_eq!(x.compare(&y).unwrap(), model);
        prop_assert_eq!(x.try_ge(&y).unwrap(), model != Ordering::Less);
    }

    #[test]
    fn prop_ordering_transitive(x in arb_nonempty_seq(40), y in arb_nonempty_seq(40), z in arb_nonempty_seq(40)) {
        if x.try_le(&y).unwrap() && y.try_le(&z).unwrap() {
            prop_assert!(x.try_le(&z).unwrap());
        }
    }

    #[test]
    fn prop_shifts_match_index_model(bits in prop::collection::vec(any::<bool>(), 1..200), offset in 0..260usize) {
        let s: BitSequence = bits.iter().copied().collect();
        let n = bits.len();

        let down = s.shifted_toward_index_zero(offset).unwrap();
        let up = s.shifted_toward_high_index(offset).unwrap();
        for i in 0..n {
            prop_assert_eq!(down[i], i + offset < n && bits[i + offset]);
            prop_assert_eq!(up[i], i >= offset && bits[i - offset]);
        }
    }

    #[test]
    fn prop_small_words_agree_with_default(bits in prop::collection::vec(any::<bool>(), 0..100), pos_seed in any::<usize>()) {
        let pos = pos_seed % (bits.len() + 1);
        let mut wide: BitSequence = bits.iter().copied().collect();
        let mut narrow: BitSequence<u8> = bits.iter().copied().collect();
        wide.insert(pos, true).unwrap();
        narrow.insert(pos, true).unwrap();
        prop_assert_eq!(wide.to_string(), narrow.to_string());
    }
}
