//! Frontier and settled-set bookkeeping for one search.
//!
//! The frontier is a binary heap with lazy deletion: improving a cell pushes
//! a fresh entry and bumps the cell's stamp, and stale entries are skipped
//! when popped. Membership is tracked per linear index, alongside the list
//! of every index whose cell state the search wrote, so a reset only visits
//! those.

use std::collections::BinaryHeap;

use tilepath_core::{Cell, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Membership {
    #[default]
    None,
    Frontier,
    Settled,
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    membership: Membership,
    stamp: u64,
    touched: bool,
}

/// Heap entry. Ordered so the max-heap pops the lowest `f`, then the lowest
/// `h`, then the most recent push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    idx: usize,
    f: i32,
    h: i32,
    stamp: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| self.stamp.cmp(&other.stamp))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SearchSets {
    slots: Vec<Slot>,
    heap: BinaryHeap<Entry>,
    next_stamp: u64,
    frontier_len: usize,
    settled: Vec<usize>,
    touched: Vec<usize>,
}

impl SearchSets {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            slots: vec![Slot::default(); len],
            ..Self::default()
        }
    }

    /// Number of indices tracked.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Record that the cell at `idx` holds search state.
    pub(crate) fn touch(&mut self, idx: usize) {
        let slot = &mut self.slots[idx];
        if !slot.touched {
            slot.touched = true;
            self.touched.push(idx);
        }
    }

    /// Insert `idx` into the frontier, or reprioritize it if already there.
    pub(crate) fn push(&mut self, idx: usize, f: i32, h: i32) {
        self.next_stamp += 1;
        let stamp = self.next_stamp;
        let slot = &mut self.slots[idx];
        slot.stamp = stamp;
        if slot.membership != Membership::Frontier {
            slot.membership = Membership::Frontier;
            self.frontier_len += 1;
        }
        self.touch(idx);
        self.heap.push(Entry { idx, f, h, stamp });
    }

    /// Move the best frontier entry to the settled set and return it.
    pub(crate) fn pop_min(&mut self) -> Option<usize> {
        while let Some(e) = self.heap.pop() {
            let slot = &mut self.slots[e.idx];
            if slot.membership != Membership::Frontier || slot.stamp != e.stamp {
                continue;
            }
            slot.membership = Membership::Settled;
            self.frontier_len -= 1;
            self.settled.push(e.idx);
            return Some(e.idx);
        }
        None
    }

    #[inline]
    pub(crate) fn membership(&self, idx: usize) -> Membership {
        self.slots.get(idx).map_or(Membership::None, |s| s.membership)
    }

    pub(crate) fn frontier_len(&self) -> usize {
        self.frontier_len
    }

    pub(crate) fn settled_len(&self) -> usize {
        self.settled.len()
    }

    pub(crate) fn touched(&self) -> &[usize] {
        &self.touched
    }

    pub(crate) fn settled(&self) -> &[usize] {
        &self.settled
    }

    /// Reset every touched cell in `grid` and empty both sets.
    pub(crate) fn clear(&mut self, grid: &mut Grid) {
        for &idx in &self.touched {
            if idx < grid.len() {
                grid.cell_mut(idx).clear();
            }
            self.slots[idx] = Slot::default();
        }
        self.touched.clear();
        self.settled.clear();
        self.heap.clear();
        self.frontier_len = 0;
    }
}

/// Iterator over the cells of one of the search sets.
#[derive(Debug, Clone)]
pub struct SetCells<'a> {
    grid: &'a Grid,
    sets: &'a SearchSets,
    indices: std::slice::Iter<'a, usize>,
    filter: Membership,
}

impl<'a> SetCells<'a> {
    pub(crate) fn frontier(grid: &'a Grid, sets: &'a SearchSets) -> Self {
        Self {
            grid,
            sets,
            indices: sets.touched().iter(),
            filter: Membership::Frontier,
        }
    }

    pub(crate) fn settled(grid: &'a Grid, sets: &'a SearchSets) -> Self {
        Self {
            grid,
            sets,
            indices: sets.settled().iter(),
            filter: Membership::Settled,
        }
    }
}

impl<'a> Iterator for SetCells<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let (grid, sets, filter) = (self.grid, self.sets, self.filter);
        self.indices
            .by_ref()
            .find(|&&idx| sets.membership(idx) == filter && idx < grid.len())
            .map(|&idx| grid.cell(idx))
    }
}
