mod error;
mod iter;

pub use error::QueueError;
pub use iter::{IntoIter, Iter};

use log::trace;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::cell::RefCell;
use std::fmt;

/// The `RandomizedQueue` struct is a container whose removals pick a uniformly random item.
/// Items go in at the back of a growable array and come out from any position, so it is
/// neither FIFO nor LIFO: every present item is equally likely to be dequeued or sampled.
///
/// # Fields
///
/// * `items`: The occupied prefix of the backing storage. Its length is the item count.
/// * `capacity`: The logical slot count. It doubles when full and halves at quarter occupancy.
/// * `rng`: The random source behind every index draw and every iteration order.
pub struct RandomizedQueue<T, R = Pcg64Mcg> {
    items: Vec<T>,
    capacity: usize,
    rng: RefCell<R>,
}

impl<T> RandomizedQueue<T> {
    /// Creates an empty queue whose random source is seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(Pcg64Mcg::from_entropy())
    }

    /// Creates an empty queue with a deterministic random source.
    ///
    /// # Arguments
    ///
    /// * `seed`: The seed for the `Pcg64Mcg` generator. Equal seeds and equal operation
    ///   sequences produce equal results.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Pcg64Mcg::seed_from_u64(seed))
    }
}

impl<T, R: Rng> RandomizedQueue<T, R> {
    /// Creates an empty queue with capacity 1 that draws randomness from `rng`.
    pub fn with_rng(rng: R) -> Self {
        RandomizedQueue {
            items: Vec::with_capacity(1),
            capacity: 1,
            rng: RefCell::new(rng),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of slots currently allocated. Always within `[len, max(1, 4 * len)]`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Adds an item, doubling the capacity first if every slot is taken.
    pub fn enqueue(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.resize(self.capacity * 2);
        }
        self.items.push(item);
    }

    /// Adds an item that may be absent.
    ///
    /// # Returns
    ///
    /// `QueueError::InvalidArgument` for `None`, in which case the queue is left untouched.
    pub fn try_enqueue(&mut self, item: Option<T>) -> Result<(), QueueError> {
        let item = item.ok_or(QueueError::InvalidArgument)?;
        self.enqueue(item);
        Ok(())
    }

    /// Removes and returns a uniformly random item.
    ///
    /// The last item is moved into the vacated slot so the occupied slots stay contiguous.
    /// When the count falls to a quarter of the capacity, the capacity halves.
    ///
    /// # Returns
    ///
    /// The removed item, or `QueueError::Empty` if there is nothing to remove.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        let index = self.random_index()?;
        let item = self.items.swap_remove(index);

        if self.capacity > 1 && self.items.len() == self.capacity / 4 {
            self.resize(self.capacity / 2);
        }

        Ok(item)
    }

    /// Returns a uniformly random item without removing it. Calls are independent,
    /// so the same item may come back repeatedly.
    pub fn sample(&self) -> Result<&T, QueueError> {
        let index = self.random_index()?;
        Ok(&self.items[index])
    }

    /// Returns an iterator over every item in a freshly shuffled order.
    ///
    /// Each call draws its own permutation, so iterators that are alive at the same time
    /// visit the items in independent orders.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.shuffle(&mut *self.rng.borrow_mut());
        Iter::new(&self.items, order)
    }

    // Draws from the rng only once the queue is known to be non-empty
    fn random_index(&self) -> Result<usize, QueueError> {
        if self.items.is_empty() {
            return Err(QueueError::Empty);
        }
        let len = self.items.len();
        Ok(self.rng.borrow_mut().gen_range(0..len))
    }

    fn resize(&mut self, capacity: usize) {
        trace!(
            "Resizing queue from {} to {} slots ({} items)",
            self.capacity,
            capacity,
            self.items.len()
        );
        let mut resized = Vec::with_capacity(capacity);
        resized.append(&mut self.items);
        self.items = resized;
        self.capacity = capacity;
    }
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> fmt::Debug for RandomizedQueue<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomizedQueue")
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T, R: Rng> Extend<T> for RandomizedQueue<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T, R: Rng> IntoIterator for &'a RandomizedQueue<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, R: Rng> IntoIterator for RandomizedQueue<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    // Consumes the queue, so shuffling the storage in place is enough
    fn into_iter(mut self) -> Self::IntoIter {
        self.items.shuffle(self.rng.get_mut());
        IntoIter::new(self.items)
    }
}
