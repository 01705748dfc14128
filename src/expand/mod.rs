//! Candidate multiset expansion
//!
//! Enumerates every distinct letter bag of a target size reachable from a
//! rack: a sub-multiset of the rack's fixed letters, topped up with blank
//! substitutions drawn from the full alphabet.
//!
//! Two properties keep the enumeration polynomial in distinct letters rather
//! than exponential in tiles:
//! - sub-multisets are generated directly, walking sorted letter indices with
//!   bounded multiplicities, so `{A, A, B}` from a rack with two A's comes out
//!   exactly once — never as permutations collapsed afterwards;
//! - blank fills are combinations with repetition over the alphabet
//!   (non-decreasing letter index), so `b` blanks cost C(26+b-1, b) fills
//!   instead of the 26^b ordered tuples a cartesian product would produce.
//!
//! The worst case is still steep: a rack with 3+ blanks multiplies every
//! sub-multiset by thousands of fills. The shared candidate budget bounds
//! that instead of letting it hang; exhaustion is reported, never silent.

use crate::core::{ALPHABET_LEN, LetterBag, Rack};

/// Whether an enumeration pass ran to completion or hit the candidate budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// Every reachable bag of the requested size was emitted
    Complete,
    /// The budget ran out; some reachable bags were never emitted
    Truncated,
}

/// Emit every distinct candidate bag of size `len` reachable from `rack`
///
/// For each blank-usage count `b` in `0..=min(blanks, len)`, picks `len - b`
/// fixed letters from the rack as a multiset combination and fills the rest
/// from the alphabet. The same final bag can still arise from different `b`
/// splits (a fixed A versus a blank played as A); callers dedup across those
/// with a set keyed on the bag.
///
/// `budget` is decremented once per emitted bag and is shared across calls so
/// a whole generation run has one global bound. Returns
/// [`Expansion::Truncated`] as soon as it reaches zero.
pub fn for_each_candidate<F>(rack: &Rack, len: usize, budget: &mut usize, emit: &mut F) -> Expansion
where
    F: FnMut(LetterBag),
{
    let max_blanks = rack.wildcards().min(len);
    for blanks in 0..=max_blanks {
        let fixed = len - blanks;
        if fixed > rack.fixed_count() {
            continue;
        }
        let mut bag = LetterBag::default();
        if !sub_multisets(rack.counts(), 0, fixed, blanks, &mut bag, budget, emit) {
            return Expansion::Truncated;
        }
    }
    Expansion::Complete
}

/// Walk every distinct `need`-element sub-multiset of `counts[letter..]`,
/// then hand off to the blank fill. Returns false once the budget is spent.
fn sub_multisets<F>(
    counts: &[u8; ALPHABET_LEN],
    letter: usize,
    need: usize,
    blanks: usize,
    bag: &mut LetterBag,
    budget: &mut usize,
    emit: &mut F,
) -> bool
where
    F: FnMut(LetterBag),
{
    if need == 0 {
        return if blanks == 0 {
            emit_bag(bag, budget, emit)
        } else {
            blank_fills(0, blanks, bag, budget, emit)
        };
    }
    if letter == ALPHABET_LEN {
        // Ran out of letters before filling the selection; dead branch.
        return true;
    }

    let available = counts[letter] as usize;
    for take in 0..=available.min(need) {
        for _ in 0..take {
            bag.push(letter as u8);
        }
        let keep_going = sub_multisets(counts, letter + 1, need - take, blanks, bag, budget, emit);
        for _ in 0..take {
            bag.pop(letter as u8);
        }
        if !keep_going {
            return false;
        }
    }
    true
}

/// Fill `blanks` slots with alphabet letters as a combination with
/// repetition: letter indices never decrease, so each fill multiset appears
/// exactly once per base selection.
fn blank_fills<F>(
    start: usize,
    blanks: usize,
    bag: &mut LetterBag,
    budget: &mut usize,
    emit: &mut F,
) -> bool
where
    F: FnMut(LetterBag),
{
    if blanks == 0 {
        return emit_bag(bag, budget, emit);
    }
    for letter in start..ALPHABET_LEN {
        bag.push(letter as u8);
        let keep_going = blank_fills(letter, blanks - 1, bag, budget, emit);
        bag.pop(letter as u8);
        if !keep_going {
            return false;
        }
    }
    true
}

fn emit_bag<F>(bag: &LetterBag, budget: &mut usize, emit: &mut F) -> bool
where
    F: FnMut(LetterBag),
{
    if *budget == 0 {
        return false;
    }
    *budget -= 1;
    emit(bag.clone());
    true
}
