//! Deduplicated thread lists.

use sprig_bytecode::StepAddr;

/// Ordered set of thread positions.
///
/// Sparse-set layout: `dense` keeps insertion order, `sparse[addr]` indexes
/// into it. Insertion, lookup and clearing are O(1); appending while
/// iterating by index is supported, which is how ε-closures grow.
#[derive(Clone, Debug, Default)]
pub struct ThreadList {
    dense: Vec<StepAddr>,
    sparse: Vec<usize>,
}

impl ThreadList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Room for positions `0..program_len` without reallocating.
    pub fn with_capacity(program_len: usize) -> Self {
        Self {
            dense: Vec::with_capacity(program_len),
            sparse: vec![0; program_len],
        }
    }

    /// List holding only the entry position.
    pub fn start(program_len: usize) -> Self {
        let mut list = Self::with_capacity(program_len.max(1));
        list.insert(0);
        list
    }

    pub fn contains(&self, addr: StepAddr) -> bool {
        self.sparse
            .get(addr)
            .is_some_and(|&slot| self.dense.get(slot) == Some(&addr))
    }

    /// Add `addr` unless present. Returns whether it was added.
    pub fn insert(&mut self, addr: StepAddr) -> bool {
        if self.contains(addr) {
            return false;
        }
        if addr >= self.sparse.len() {
            self.sparse.resize(addr + 1, 0);
        }
        self.sparse[addr] = self.dense.len();
        self.dense.push(addr);
        true
    }

    /// Position at index `i` in insertion order.
    pub fn get(&self, i: usize) -> Option<StepAddr> {
        self.dense.get(i).copied()
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    pub fn clear(&mut self) {
        self.dense.clear();
    }

    pub fn as_slice(&self) -> &[StepAddr] {
        &self.dense
    }

    pub fn iter(&self) -> impl Iterator<Item = StepAddr> + '_ {
        self.dense.iter().copied()
    }
}

impl PartialEq for ThreadList {
    fn eq(&self, other: &Self) -> bool {
        self.dense == other.dense
    }
}

impl Eq for ThreadList {}

impl FromIterator<StepAddr> for ThreadList {
    fn from_iter<I: IntoIterator<Item = StepAddr>>(iter: I) -> Self {
        let mut list = Self::new();
        for addr in iter {
            list.insert(addr);
        }
        list
    }
}
