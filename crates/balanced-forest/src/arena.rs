//! Slot arena holding the nodes of a single tree.
//!
//! Nodes address each other with `u32` slot indices instead of pointers, so a
//! parent link never extends a node's lifetime: dropping a slot drops the node,
//! and whatever still holds its index simply finds the slot vacant (or owned by
//! a later allocation with a different generation).

use std::mem;
use std::ops::{Index, IndexMut};

enum Slot<N> {
    Occupied { generation: u64, node: N },
    Vacant { next_free: Option<u32> },
}

/// Free-list backed storage for tree nodes.
///
/// Every allocation is stamped with a generation taken from a counter that
/// only ever grows (also across [`Arena::clear`]), so an `(index, generation)`
/// pair identifies one node for the whole life of the arena.
pub struct Arena<N> {
    slots: Vec<Slot<N>>,
    head: Option<u32>,
    len: usize,
    next_generation: u64,
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            len: 0,
            next_generation: 0,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `node` and returns its slot index.
    pub fn insert(&mut self, node: N) -> u32 {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.len += 1;

        match self.head {
            None => {
                self.slots.push(Slot::Occupied { generation, node });
                (self.slots.len() - 1) as u32
            }
            Some(idx) => {
                let vacant = mem::replace(
                    &mut self.slots[idx as usize],
                    Slot::Occupied { generation, node },
                );
                match vacant {
                    Slot::Vacant { next_free } => self.head = next_free,
                    Slot::Occupied { .. } => panic!("free list points at an occupied slot {idx}"),
                }
                idx
            }
        }
    }

    /// Takes the node out of slot `idx`, recycling the slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot is out of range or vacant.
    pub fn remove(&mut self, idx: u32) -> N {
        let next_free = self.head;
        let slot = self
            .slots
            .get_mut(idx as usize)
            .unwrap_or_else(|| panic!("arena index {idx} out of range"));
        match mem::replace(slot, Slot::Vacant { next_free }) {
            Slot::Occupied { node, .. } => {
                self.head = Some(idx);
                self.len -= 1;
                node
            }
            Slot::Vacant { next_free } => {
                *slot = Slot::Vacant { next_free };
                panic!("attempt to remove vacant arena slot {idx}");
            }
        }
    }

    pub fn get(&self, idx: u32) -> Option<&N> {
        match self.slots.get(idx as usize) {
            Some(Slot::Occupied { node, .. }) => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, idx: u32) -> Option<&mut N> {
        match self.slots.get_mut(idx as usize) {
            Some(Slot::Occupied { node, .. }) => Some(node),
            _ => None,
        }
    }

    /// Generation stamp of the node in slot `idx`, if the slot is occupied.
    pub fn generation(&self, idx: u32) -> Option<u64> {
        match self.slots.get(idx as usize) {
            Some(Slot::Occupied { generation, .. }) => Some(*generation),
            _ => None,
        }
    }

    /// Whether slot `idx` still holds the allocation stamped `generation`.
    pub fn is_live(&self, idx: u32, generation: u64) -> bool {
        self.generation(idx) == Some(generation)
    }

    /// Mutable access to two distinct slots at once.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` or either slot is vacant.
    pub fn pair_mut(&mut self, a: u32, b: u32) -> (&mut N, &mut N) {
        assert_ne!(a, b, "pair_mut requires two distinct slots");
        let (lo, hi, swapped) = if a < b { (a, b, false) } else { (b, a, true) };
        let (head, tail) = self.slots.split_at_mut(hi as usize);
        let first = match &mut head[lo as usize] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => panic!("vacant arena slot {lo}"),
        };
        let second = match &mut tail[0] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => panic!("vacant arena slot {hi}"),
        };
        if swapped {
            (second, first)
        } else {
            (first, second)
        }
    }

    /// Drops every node. Generations keep counting, so handles taken before
    /// the clear never match a node allocated after it.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    fn index(&self, idx: u32) -> &N {
        self.get(idx).unwrap_or_else(|| panic!("vacant arena slot {idx}"))
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    fn index_mut(&mut self, idx: u32) -> &mut N {
        self.get_mut(idx).unwrap_or_else(|| panic!("vacant arena slot {idx}"))
    }
}
