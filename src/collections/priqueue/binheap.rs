// Copyright (c) 2016, 2017, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Binary heap implementation

use crate::collections::ItemPriQueue;

/// Simple binary min-heap.
///
/// In contrast to `std::collections::BinaryHeap` the values only need to be
/// `PartialOrd`, so floating point weights can be used directly.
pub struct BinHeap<K, V> {
    /// The heap elements, `heap[i].1 <= heap[2i+1].1, heap[2i+2].1`.
    heap: Vec<(K, V)>,
}

impl<K, V> BinHeap<K, V> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Create an empty heap with space for at least `n` elements.
    pub fn with_capacity(n: usize) -> Self {
        BinHeap {
            heap: Vec::with_capacity(n),
        }
    }
}

impl<K, V> Default for BinHeap<K, V> {
    fn default() -> Self {
        BinHeap { heap: vec![] }
    }
}

impl<K, V> ItemPriQueue<K, V> for BinHeap<K, V>
where
    V: PartialOrd,
{
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }

    fn push(&mut self, key: K, value: V) {
        self.heap.push((key, value));
        self.upheap(self.heap.len() - 1);
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.downheap(0);
        }
        Some(min)
    }
}

impl<K, V> BinHeap<K, V>
where
    V: PartialOrd,
{
    /// Move the element at position `pos` up in the heap until its parent
    /// does not have a larger value or the root node is reached.
    fn upheap(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            // We could have used >=, too, but using > moves the item up the
            // heap as far as possible. Among elements with the same value the
            // most recently pushed tends to be popped first.
            if self.heap[pos].1 > self.heap[parent].1 {
                break;
            }
            self.heap.swap(pos, parent);
            pos = parent;
        }
    }

    /// Move the element at position `pos` down in the heap until both
    /// children have a larger value.
    fn downheap(&mut self, mut pos: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let next = if left >= n {
                break;
            } else if right >= n || self.heap[left].1 < self.heap[right].1 {
                left
            } else {
                right
            };

            if self.heap[pos].1 <= self.heap[next].1 {
                break;
            }
            self.heap.swap(pos, next);
            pos = next;
        }
    }
}
