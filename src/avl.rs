#![warn(missing_docs)]
use std::borrow::Borrow;
use std::cmp::Ordering::*;
use std::fmt::{self, Debug, Formatter};

pub mod multiset;

type Link<K, V> = Option<Box<Node<K, V>>>;
struct IsShorter(bool);
struct IsTaller(bool);

// What a removal attempt did to the target key.
enum Removal {
    // the key is not in the tree
    NotFound,
    // the payload was updated but the node stays
    Retained,
    // the node was unlinked and destroyed
    Unlinked,
}

struct Node<K, V> {
    key: K,
    val: V,
    // height(right subtree) - height(left subtree); always in {-1, 0, +1}
    bal: i8,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, val: V) -> Self {
        Node {
            key,
            val,
            bal: 0,
            left: None,
            right: None,
        }
    }

    fn height(&self) -> usize {
        let lf_ht = self.left.as_ref().map_or(0, |n| n.height());
        let rt_ht = self.right.as_ref().map_or(0, |n| n.height());
        lf_ht.max(rt_ht) + 1
    }

    fn append_keys(&self, out: &mut Vec<K>)
    where
        K: Clone,
    {
        if let Some(lf) = self.left.as_ref() {
            lf.append_keys(out);
        }
        out.push(self.key.clone());
        if let Some(rt) = self.right.as_ref() {
            rt.append_keys(out);
        }
    }

    // Renders the subtree with the root at the left margin and the leaves
    // indented furthest, right subtree first, so the printout reads as the
    // tree rotated a quarter-turn counterclockwise.
    fn write_tree<W: fmt::Write>(&self, w: &mut W, depth: usize) -> fmt::Result
    where
        K: Debug,
    {
        if let Some(rt) = self.right.as_ref() {
            rt.write_tree(w, depth + 1)?;
        }
        writeln!(w, "{:indent$}{:?}", "", self.key, indent = 4 * depth)?;
        if let Some(lf) = self.left.as_ref() {
            lf.write_tree(w, depth + 1)?;
        }
        Ok(())
    }
}

impl<K: Ord, V> Node<K, V> {
    #[cfg(test)]
    fn chk(&self, greatest: Option<&K>) -> (usize, usize, Option<&K>) {
        // is our node in order with left-side ancestors?
        assert!(greatest.iter().all(|&k| k < &self.key));

        // are our left descendents okay, and all less than us?
        let (lf_len, lf_ht, greatest) = chk(&self.left, greatest);
        assert!(greatest.iter().all(|&k| k < &self.key));

        // are our right descendents okay?
        let (rt_len, rt_ht, greatest) = chk(&self.right, Some(&self.key));

        // does the stored balance factor match the actual heights?
        assert!((-1..=1).contains(&self.bal));
        assert_eq!(self.bal as isize, rt_ht as isize - lf_ht as isize);

        (lf_len + rt_len + 1, lf_ht.max(rt_ht) + 1, greatest)
    }
}

impl<K: Clone, V: Clone> Clone for Node<K, V> {
    fn clone(&self) -> Self {
        Node {
            key: self.key.clone(),
            val: self.val.clone(),
            bal: self.bal,
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<K: Debug, V: Debug> Debug for Node<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "(bal: {} {{{:?}: {:?}}} ",
            self.bal, self.key, self.val
        ))?;

        match &self.left {
            None => f.write_str(".")?,
            Some(lf) => lf.fmt(f)?,
        }

        f.write_str(" ")?;

        match &self.right {
            None => f.write_str(".")?,
            Some(rt) => rt.fmt(f)?,
        }

        f.write_str(")")
    }
}

#[cfg(test)]
fn chk<'a, K: Ord, V>(
    link: &'a Link<K, V>,
    greatest: Option<&'a K>,
) -> (usize, usize, Option<&'a K>) {
    match link.as_ref() {
        None => (0, 0, greatest),
        Some(n) => n.chk(greatest),
    }
}

/// Rotations applied on one rebalancing path, tallied by the shape of the
/// imbalance each one corrected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotationTallies {
    /// Single rotations correcting a left-left imbalance.
    pub ll: u64,
    /// Double rotations correcting a left-right imbalance.
    pub lr: u64,
    /// Double rotations correcting a right-left imbalance.
    pub rl: u64,
    /// Single rotations correcting a right-right imbalance.
    pub rr: u64,
}

/// Monotonic counts of every rotation the tree has performed, split by
/// whether an insertion or a removal triggered the rebalance.
///
/// The counters are never reset; construct a fresh container to start a new
/// measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotationStats {
    /// Rotations applied while rebalancing after insertions.
    pub inserts: RotationTallies,
    /// Rotations applied while rebalancing after removals.
    pub removes: RotationTallies,
}

fn rot_lf<K, V>(root: &mut Link<K, V>) -> IsShorter {
    // We want the following transformation:
    //    a(x, b(y, z))   =>   b(a(x, y), z)
    // x and z retain the same parents.

    let mut a = root.take().unwrap();
    let mut b = a.right.take().unwrap();

    // if b carried equal subtrees, the rotation does not shorten the tree
    let b_was_level = b.bal == 0;

    // move y from b to a
    a.right = b.left.take();

    if b_was_level {
        a.bal = 1;
        b.bal = -1;
    } else {
        a.bal = 0;
        b.bal = 0;
    }

    // make a be b's left child and install b as the new root
    b.left = Some(a);
    *root = Some(b);

    IsShorter(!b_was_level)
}

fn rot_rt<K, V>(root: &mut Link<K, V>) -> IsShorter {
    // We want the following transformation:
    //    a(b(x, y), z)   =>   b(x, a(y, z))
    // x and z retain the same parents.

    let mut a = root.take().unwrap();
    let mut b = a.left.take().unwrap();

    let b_was_level = b.bal == 0;

    // move y from b to a
    a.left = b.right.take();

    if b_was_level {
        a.bal = -1;
        b.bal = 1;
    } else {
        a.bal = 0;
        b.bal = 0;
    }

    // make a be b's right child and install b as the new root
    b.right = Some(a);
    *root = Some(b);

    IsShorter(!b_was_level)
}

fn rot_rt_lf<K, V>(root: &mut Link<K, V>) -> IsShorter {
    // We want the following transformation:
    //    a(x, b(c(y, z), w))   =>   c(a(x, y), b(z, w))
    // x and w retain the same parents.

    let mut a = root.take().unwrap();
    let mut b = a.right.take().unwrap();
    let mut c = b.left.take().unwrap();

    // move c's children to a and b
    a.right = c.left.take();
    b.left = c.right.take();

    // the pre-rotation balance of c decides which side comes up light
    a.bal = if c.bal == 1 { -1 } else { 0 };
    b.bal = if c.bal == -1 { 1 } else { 0 };
    c.bal = 0;

    // move a and b into c and install c as the new root
    c.left = Some(a);
    c.right = Some(b);
    *root = Some(c);

    // this rebalance always makes the tree shorter
    IsShorter(true)
}

fn rot_lf_rt<K, V>(root: &mut Link<K, V>) -> IsShorter {
    // We want the following transformation:
    //    a(b(x, c(y, z)), w)   =>   c(b(x, y), a(z, w))
    // x and w retain the same parents.

    let mut a = root.take().unwrap();
    let mut b = a.left.take().unwrap();
    let mut c = b.right.take().unwrap();

    b.right = c.left.take(); // => b(x, y), c(None, z)
    a.left = c.right.take(); // => a(z, w), c(None, None)

    a.bal = if c.bal == -1 { 1 } else { 0 };
    b.bal = if c.bal == 1 { -1 } else { 0 };
    c.bal = 0;

    c.left = Some(b); // => c(b(x, y), None)
    c.right = Some(a); // => c(b(x, y), a(z, w))
    *root = Some(c);

    IsShorter(true)
}

// rebalance by "shifting height" from left to right
fn rebal_lf_to_rt<K, V>(
    root: &mut Link<K, V>,
    tally: &mut RotationTallies,
) -> IsShorter {
    let n = root.as_ref().unwrap();

    if n.left.as_ref().unwrap().bal <= 0 {
        tally.ll += 1;
        rot_rt(root)
    } else {
        tally.lr += 1;
        rot_lf_rt(root)
    }
}

// rebalance by "shifting height" from right to left
fn rebal_rt_to_lf<K, V>(
    root: &mut Link<K, V>,
    tally: &mut RotationTallies,
) -> IsShorter {
    let n = root.as_ref().unwrap();

    if n.right.as_ref().unwrap().bal >= 0 {
        tally.rr += 1;
        rot_lf(root)
    } else {
        tally.rl += 1;
        rot_rt_lf(root)
    }
}

// Restores the balance of *root after its left subtree lost one level of
// height and reports whether *root is shorter as a result.
fn balance_left<K, V>(
    root: &mut Link<K, V>,
    tally: &mut RotationTallies,
) -> IsShorter {
    let n = root.as_mut().unwrap();

    match n.bal {
        -1 => {
            // balance restored, but the subtree shrank with its left side
            n.bal = 0;
            IsShorter(true)
        }
        0 => {
            n.bal = 1;
            IsShorter(false)
        }
        1 => rebal_rt_to_lf(root, tally),
        _ => unreachable!("balance factor out of range"),
    }
}

// Mirror of balance_left for a right subtree that lost one level of height.
fn balance_right<K, V>(
    root: &mut Link<K, V>,
    tally: &mut RotationTallies,
) -> IsShorter {
    let n = root.as_mut().unwrap();

    match n.bal {
        1 => {
            n.bal = 0;
            IsShorter(true)
        }
        0 => {
            n.bal = -1;
            IsShorter(false)
        }
        -1 => rebal_lf_to_rt(root, tally),
        _ => unreachable!("balance factor out of range"),
    }
}

// Inserts (key, val) into the tree rooted at root and returns whether the key
// was already present and whether the updated tree is taller as a result.
// When the key is present, on_present reconciles the stored payload with the
// new one and no node is created.
fn ins<K, V, F>(
    root: &mut Link<K, V>,
    key: K,
    val: V,
    on_present: F,
    tally: &mut RotationTallies,
) -> (bool, IsTaller)
where
    K: Ord,
    F: FnOnce(&mut V, V),
{
    let n = match root.as_mut() {
        None => {
            // the fresh leaf is the first and only side effect, so a failed
            // allocation aborts before the tree is touched
            *root = Some(Box::new(Node::new(key, val)));
            return (false, IsTaller(true)); // *** EARLY RETURN ***
        }

        Some(n) => n,
    };

    match key.cmp(&n.key) {
        Equal => {
            on_present(&mut n.val, val);
            (true, IsTaller(false))
        }

        Less => {
            let (found, grew) = ins(&mut n.left, key, val, on_present, tally);
            if !grew.0 {
                return (found, IsTaller(false)); // *** EARLY RETURN ***
            }

            // the left branch has grown higher
            match n.bal {
                1 => {
                    n.bal = 0;
                    (found, IsTaller(false))
                }
                0 => {
                    n.bal = -1;
                    (found, IsTaller(true))
                }
                -1 => {
                    rebal_lf_to_rt(root, tally);
                    (found, IsTaller(false))
                }
                _ => unreachable!("balance factor out of range"),
            }
        }

        Greater => {
            let (found, grew) = ins(&mut n.right, key, val, on_present, tally);
            if !grew.0 {
                return (found, IsTaller(false)); // *** EARLY RETURN ***
            }

            // the right branch has grown higher
            match n.bal {
                -1 => {
                    n.bal = 0;
                    (found, IsTaller(false))
                }
                0 => {
                    n.bal = 1;
                    (found, IsTaller(true))
                }
                1 => {
                    rebal_rt_to_lf(root, tally);
                    (found, IsTaller(false))
                }
                _ => unreachable!("balance factor out of range"),
            }
        }
    }
}

// Unlinks the leftmost node of the non-empty subtree at root, rebalancing on
// the way back up, and hands back the unlinked entry so the caller can
// overwrite the slot it is actually deleting.
fn rm_leftmost<K, V>(
    root: &mut Link<K, V>,
    tally: &mut RotationTallies,
) -> ((K, V), IsShorter) {
    let n = root.as_mut().unwrap();

    if n.left.is_some() {
        let (kv, shrank) = rm_leftmost(&mut n.left, tally);
        if shrank.0 {
            (kv, balance_left(root, tally))
        } else {
            (kv, IsShorter(false))
        }
    } else {
        let old = *root.take().unwrap();
        *root = old.right;
        ((old.key, old.val), IsShorter(true))
    }
}

// Mirror of rm_leftmost: unlinks the rightmost node of a non-empty subtree.
fn rm_rightmost<K, V>(
    root: &mut Link<K, V>,
    tally: &mut RotationTallies,
) -> ((K, V), IsShorter) {
    let n = root.as_mut().unwrap();

    if n.right.is_some() {
        let (kv, shrank) = rm_rightmost(&mut n.right, tally);
        if shrank.0 {
            (kv, balance_right(root, tally))
        } else {
            (kv, IsShorter(false))
        }
    } else {
        let old = *root.take().unwrap();
        *root = old.left;
        ((old.key, old.val), IsShorter(true))
    }
}

// Removes key from the tree rooted at root and returns what happened to the
// target node and whether the tree is shorter as a result.  When the key is
// found, decide inspects the payload and rules whether the node is actually
// unlinked; a multiset uses this to decrement its copy count instead of
// removing a node that still represents other insertions.
fn rm<K, V, Q, F>(
    root: &mut Link<K, V>,
    key: &Q,
    decide: F,
    tally: &mut RotationTallies,
) -> (Removal, IsShorter)
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
    F: FnOnce(&mut V) -> bool,
{
    let n = match root.as_mut() {
        None => return (Removal::NotFound, IsShorter(false)),
        Some(n) => n,
    };

    match key.cmp(n.key.borrow()) {
        Less => {
            let (outcome, shrank) = rm(&mut n.left, key, decide, tally);
            if shrank.0 {
                (outcome, balance_left(root, tally))
            } else {
                (outcome, IsShorter(false))
            }
        }

        Greater => {
            let (outcome, shrank) = rm(&mut n.right, key, decide, tally);
            if shrank.0 {
                (outcome, balance_right(root, tally))
            } else {
                (outcome, IsShorter(false))
            }
        }

        Equal => {
            if !decide(&mut n.val) {
                return (Removal::Retained, IsShorter(false)); // *** EARLY RETURN ***
            }

            match (&n.left, &n.right) {
                (None, None) => {
                    root.take();
                    (Removal::Unlinked, IsShorter(true))
                }

                (None, Some(_)) => {
                    let old = *root.take().unwrap();
                    *root = old.right;
                    (Removal::Unlinked, IsShorter(true))
                }

                (Some(_), None) => {
                    let old = *root.take().unwrap();
                    *root = old.left;
                    (Removal::Unlinked, IsShorter(true))
                }

                _ => {
                    // Both children are populated.  The replacement entry is
                    // drawn from the deeper subtree, where unlinking the
                    // extremum cannot drop that side below its sibling.
                    if n.bal == 1 {
                        let ((k, v), shrank) = rm_leftmost(&mut n.right, tally);
                        n.key = k;
                        n.val = v;
                        if shrank.0 {
                            (Removal::Unlinked, balance_right(root, tally))
                        } else {
                            (Removal::Unlinked, IsShorter(false))
                        }
                    } else {
                        let ((k, v), shrank) = rm_rightmost(&mut n.left, tally);
                        n.key = k;
                        n.val = v;
                        if shrank.0 {
                            (Removal::Unlinked, balance_left(root, tally))
                        } else {
                            (Removal::Unlinked, IsShorter(false))
                        }
                    }
                }
            }
        }
    }
}

/// A map from keys to values sorted by key.
///
/// Internally, the map is an [AVL
/// tree](https://en.wikipedia.org/wiki/AVL_tree): a binary search tree in
/// which the heights of every node's subtrees differ by at most one.  Each
/// node stores only the signed difference of those heights, and the
/// insertion and removal engines rebalance on the way back out of the
/// recursion, steered by a single height-changed signal per frame.
///
/// When a node with two children is removed, its replacement is drawn from
/// the deeper of its subtrees, which on average saves rebalancing work
/// compared to always drawing from the same side.  The map tallies every
/// rotation it performs; see [`rotation_stats`](#method.rotation_stats).
pub struct AvlMap<K, V> {
    len: usize,
    root: Link<K, V>,
    stats: RotationStats,
}

impl<K: Debug, V: Debug> Debug for AvlMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            None => f.write_str("AvlMap(EMPTY)"),
            Some(n) => {
                // use Node's Debug formatter
                f.write_fmt(format_args!("AvlMap(#{} {:?})", self.len, n))
            }
        }
    }
}

impl<K: Clone, V: Clone> Clone for AvlMap<K, V> {
    fn clone(&self) -> Self {
        AvlMap {
            len: self.len,
            root: self.root.clone(),
            stats: self.stats,
        }
    }
}

impl<K: Ord, V> AvlMap<K, V> {
    /// Creates a new, empty map.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::AvlMap;
    /// let m: AvlMap<usize, usize> = AvlMap::new();
    /// assert!(m.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlMap {
            len: 0,
            root: None,
            stats: RotationStats::default(),
        }
    }

    /// Drops all entries from the map.
    ///
    /// The rotation counters are not reset; they account for everything the
    /// map has done since it was constructed.
    pub fn clear(&mut self) {
        self.len = 0;
        self.root = None;
    }

    /// Inserts a key-value pair in the map.
    ///
    /// Returns true iff the key was already present, in which case its value
    /// is overwritten and no node is created.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::AvlMap;
    ///
    /// let mut m = AvlMap::new();
    /// assert!(!m.insert(0, "a"));
    /// assert!(m.insert(0, "b"));
    /// assert_eq!(m.get(&0), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, val: V) -> bool {
        let (updated, _) = ins(
            &mut self.root,
            key,
            val,
            |slot, new| *slot = new,
            &mut self.stats.inserts,
        );
        if !updated {
            self.len += 1;
        }
        updated
    }

    /// Removes a key from the map.
    ///
    /// Returns true iff the key was present; removing an absent key leaves
    /// the map untouched.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::AvlMap;
    ///
    /// let mut m = AvlMap::new();
    /// m.insert(1, 2);
    /// assert!(m.remove(&1));
    /// assert!(!m.remove(&1));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (outcome, _) =
            rm(&mut self.root, key, |_| true, &mut self.stats.removes);
        match outcome {
            Removal::Unlinked => {
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Tests if the map contains an entry for the given key.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns a reference to the value associated with key.
    ///
    /// The descent is iterative and touches none of the rebalancing
    /// machinery.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::AvlMap;
    ///
    /// let mut m = AvlMap::new();
    /// m.insert(0, 100);
    /// assert_eq!(m.get(&0), Some(&100));
    /// assert_eq!(m.get(&1), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = &self.root;
        while let Some(n) = curr {
            match key.cmp(n.key.borrow()) {
                Less => curr = &n.left,
                Equal => return Some(&n.val),
                Greater => curr = &n.right,
            }
        }

        None
    }

    /// Returns a mutable reference to the value associated with key.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::AvlMap;
    ///
    /// let mut m = AvlMap::new();
    /// m.insert(1, 7);
    /// *m.get_mut(&1).unwrap() = 2;
    /// assert_eq!(m.get(&1), Some(&2));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = &mut self.root;
        while let Some(n) = curr {
            match key.cmp(n.key.borrow()) {
                Less => curr = &mut n.left,
                Equal => return Some(&mut n.val),
                Greater => curr = &mut n.right,
            }
        }

        None
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map contains no entries, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Collects the keys of the map in ascending order.
    ///
    /// The returned vector has exactly [`len`](#method.len) elements.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::AvlMap;
    ///
    /// let m = AvlMap::from([(2, 'b'), (0, 'a'), (1, 'c')]);
    /// assert_eq!(m.keys(), vec![0, 1, 2]);
    /// ```
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        if let Some(n) = self.root.as_ref() {
            n.append_keys(&mut out);
        }
        out
    }

    /// Returns the height of the tree: the number of nodes on the longest
    /// root-to-leaf path, 0 for an empty map.
    ///
    /// Computed by walking the tree, so this costs O(len).  The height never
    /// exceeds 1.44·log₂(len + 2).
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.height())
    }

    /// Writes an indented rendering of the tree with the root at the left
    /// margin and the right subtree printed first.
    pub fn write_tree<W: fmt::Write>(&self, w: &mut W) -> fmt::Result
    where
        K: Debug,
    {
        if let Some(n) = self.root.as_ref() {
            n.write_tree(w, 0)?;
        }
        Ok(())
    }

    /// Prints the tree to stdout; see [`write_tree`](#method.write_tree).
    pub fn print_tree(&self)
    where
        K: Debug,
    {
        let mut out = String::new();
        let _ = self.write_tree(&mut out);
        print!("{}", out);
    }

    /// Returns the rotation counters accumulated over the lifetime of the
    /// map.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::AvlMap;
    ///
    /// // ascending insertions lean right, so only single right-right
    /// // rotations occur
    /// let m: AvlMap<_, _> = (0..32).map(|x| (x, ())).collect();
    /// let stats = m.rotation_stats();
    /// assert!(stats.inserts.rr > 0);
    /// assert_eq!(stats.inserts.ll + stats.inserts.lr + stats.inserts.rl, 0);
    /// ```
    pub fn rotation_stats(&self) -> RotationStats {
        self.stats
    }

    #[cfg(test)]
    fn chk(&self) {
        let (len, ht, _) = chk(&self.root, None);
        assert_eq!(len, self.len);
        let bound = (1.44 * ((self.len + 2) as f64).log2()).ceil() as usize;
        assert!(ht <= bound);
    }
}

impl<K: Ord, V> Default for AvlMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for AvlMap<K, V> {
    fn from(vs: [(K, V); N]) -> Self {
        AvlMap::from_iter(vs)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = AvlMap::new();
        map.extend(iter);
        map
    }
}
