use proptest::prelude::*;

#[allow(dead_code)]
pub(super) type SmallIntPairs = Vec<(u16, u16)>;

#[allow(dead_code)]
pub(super) fn small_int_pairs() -> impl Strategy<Value = SmallIntPairs> {
    prop::collection::vec((0u16..1024u16, 0u16..1024u16), 0..512)
}

#[allow(dead_code)]
pub(super) fn small_int_seq() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(0u16..64u16, 0..512)
}

// A stream of signed operations over a small key space: positive opens an
// insert, negative a removal, so runs mix hits and misses.
#[allow(dead_code)]
pub(super) fn signed_ops() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-64i32..64i32, 0..512)
}

// The height bound every AVL tree of the given size satisfies.
pub(super) fn height_bound(len: usize) -> usize {
    (1.44 * ((len + 2) as f64).log2()).ceil() as usize
}
