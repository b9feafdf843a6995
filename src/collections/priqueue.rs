/*
 * Copyright (c) 2018, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

mod binheap;
pub use self::binheap::BinHeap;

/// A min-priority queue of `(key, value)` pairs ordered by `value`.
///
/// There is no way to change the value of an element that is already in the
/// queue. Algorithms push the same key again with the better value and skip
/// the outdated entries when they are popped (lazy deletion).
pub trait ItemPriQueue<K, V> {
    /// Return `true` iff the queue contains no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of elements in the queue.
    ///
    /// This includes outdated entries that have not been popped, yet.
    fn len(&self) -> usize;

    /// Remove all elements from the queue.
    fn clear(&mut self);

    /// Push the element with given `key` and `value` onto the queue.
    fn push(&mut self, key: K, value: V);

    /// Remove and return the element with the smallest value from the queue or `None` if
    /// the queue is empty.
    fn pop_min(&mut self) -> Option<(K, V)>;
}

impl<'a, P, K, V> ItemPriQueue<K, V> for &'a mut P
where
    P: ItemPriQueue<K, V>,
{
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn push(&mut self, key: K, value: V) {
        (**self).push(key, value)
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        (**self).pop_min()
    }
}
