//! Growable, order-preserving collection that owns its records
//!
//! `OwnedCollection<T>` is the storage underneath both the book catalog and
//! the member registry. It owns every element it holds: elements are moved in
//! by [`OwnedCollection::add`], dropped by [`OwnedCollection::remove`], and
//! handed out only as borrows. A borrow returned by a lookup is tied to the
//! collection, so the compiler rejects any use of it after a later `add` or
//! `remove`.
//!
//! Capacity is tracked explicitly. A new collection has
//! [`DEFAULT_INITIAL_CAPACITY`] slots and grows to
//! `max(2 * capacity, required)` whenever an insert would overflow it. A
//! failed growth leaves the collection untouched and returns the item to the
//! caller inside an [`InsertError`].

use crate::defaults::DEFAULT_INITIAL_CAPACITY;
use crate::error::{Error, Result};
use crate::record::Record;
use log::{debug, warn};
use std::fmt;

/// An item that could not be inserted, together with the reason.
///
/// The collection never drops a rejected item. Use [`InsertError::into_inner`]
/// to take it back.
pub struct InsertError<T> {
    item: T,
    error: Error,
}

impl<T> InsertError<T> {
    /// The failure that prevented the insert
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Take back ownership of the rejected item
    pub fn into_inner(self) -> T {
        self.item
    }

    /// Split into the rejected item and the failure
    pub fn into_parts(self) -> (T, Error) {
        (self.item, self.error)
    }
}

impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item was not inserted: {}", self.error)
    }
}

impl<T> std::error::Error for InsertError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Growable array of owned records with stable, order-preserving removal
#[derive(Debug, Clone)]
pub struct OwnedCollection<T> {
    items: Vec<T>,
    /// Logical capacity; `items.len() <= capacity` always holds
    capacity: usize,
    /// Growth past this many slots is reported as an allocation failure
    capacity_limit: Option<usize>,
}

impl<T> OwnedCollection<T> {
    /// Create an empty collection with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty collection with room for `capacity` elements.
    ///
    /// A capacity of zero falls back to the default. Storage is allocated on
    /// the first insert, so an oversized capacity surfaces as a failed `add`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_INITIAL_CAPACITY
        } else {
            capacity
        };
        Self {
            items: Vec::new(),
            capacity,
            capacity_limit: None,
        }
    }

    /// Like [`with_capacity`](Self::with_capacity), but allocates the slots
    /// up front and reports an allocation failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut collection = Self::with_capacity(capacity);
        collection.allocate(collection.capacity)?;
        Ok(collection)
    }

    /// Refuse to grow beyond `limit` slots.
    ///
    /// Growth that would need more slots fails exactly like an allocator
    /// failure would. A current capacity above `limit` is lowered to it.
    pub fn with_capacity_limit(mut self, limit: usize) -> Self {
        self.capacity_limit = Some(limit);
        self.capacity = self.capacity.min(limit).max(self.items.len());
        self
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of slots available before the next growth
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Ensure there is room for at least `min_capacity` elements.
    ///
    /// Grows to `max(2 * capacity, min_capacity)`, clamped to the capacity
    /// limit when one is set. On failure nothing changes.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<()> {
        if self.capacity >= min_capacity {
            return Ok(());
        }

        let mut new_capacity = self.capacity.saturating_mul(2).max(min_capacity);
        if let Some(limit) = self.capacity_limit {
            if min_capacity > limit {
                warn!(
                    "Cannot grow collection to {} slots: capacity limit of {} reached",
                    min_capacity, limit
                );
                return Err(Error::Allocation {
                    requested: min_capacity,
                    message: format!("capacity limit of {} reached", limit),
                });
            }
            new_capacity = new_capacity.min(limit);
        }

        self.allocate(new_capacity)?;

        debug!(
            "Grew collection from {} to {} slots",
            self.capacity, new_capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Make the backing storage hold at least `slots` elements
    fn allocate(&mut self, slots: usize) -> Result<()> {
        let additional = slots.saturating_sub(self.items.len());
        if let Err(e) = self.items.try_reserve_exact(additional) {
            warn!("Cannot grow collection to {} slots: {}", slots, e);
            return Err(Error::Allocation {
                requested: slots,
                message: e.to_string(),
            });
        }
        Ok(())
    }

    /// Append an item, growing the storage first if it is full.
    ///
    /// Returns a borrow of the stored item. If growth fails the item is
    /// handed back untouched inside the error.
    pub fn add(&mut self, item: T) -> std::result::Result<&mut T, InsertError<T>> {
        if let Err(error) = self.reserve(self.items.len() + 1) {
            return Err(InsertError { item, error });
        }
        if self.items.len() == self.items.capacity() {
            if let Err(error) = self.allocate(self.capacity) {
                return Err(InsertError { item, error });
            }
        }
        let index = self.items.len();
        self.items.push(item);
        debug!("Inserted element at position {}", index);
        Ok(&mut self.items[index])
    }

    /// Index of the first element matching `predicate`
    pub fn position<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(|item| predicate(item))
    }

    /// First element matching `predicate`
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    /// First element matching `predicate`, mutably
    pub fn find_mut<P>(&mut self, mut predicate: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter_mut().find(|item| predicate(item))
    }

    /// Remove the first element matching `predicate` and return it.
    ///
    /// Later elements shift down by one, keeping their relative order.
    pub fn take<P>(&mut self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let index = self.position(predicate)?;
        debug!("Removing element at position {}", index);
        Some(self.items.remove(index))
    }

    /// Remove and drop the first element matching `predicate`.
    ///
    /// Returns whether anything was removed.
    pub fn remove<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.take(predicate).is_some()
    }

    /// Exchange the elements at positions `i` and `j`.
    ///
    /// Positions outside `0..len()` are ignored.
    pub fn swap(&mut self, i: usize, j: usize) {
        if i >= self.items.len() || j >= self.items.len() {
            return;
        }
        self.items.swap(i, j);
    }

    /// Element at `index`, in insertion order
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate over all elements in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// All elements as a slice, in insertion order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Drop every element; the capacity is kept
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Record> OwnedCollection<T> {
    /// Overwrite the first element matching `predicate` with `new_values`.
    ///
    /// The element keeps its position. Returns `false` without touching
    /// anything when no element matches.
    pub fn update<P>(&mut self, predicate: P, new_values: &T) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self.find_mut(predicate) {
            Some(item) => {
                item.assign_from(new_values);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for OwnedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a OwnedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
