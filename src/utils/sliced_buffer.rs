/*!
# CSR-based Sliced Buffers

This module provides a **Compressed Sparse Row (CSR)**-like data structure for storing
variable-length slices efficiently.

The key idea:

- A contiguous `buffer: Vec<T>` stores all elements.
- A non-decreasing `offsets: Vec<I>` stores slice boundaries, where slice `i` is `buffer[offsets[i]..offsets[i+1]]`.

Positions inside `buffer` are stable after construction, so they can be used as global ids
of the stored entries (the matching solver identifies arcs by their buffer position).

### Invariants
All constructions verify the following invariants:

1. `offsets.len() >= 2`
2. `offsets` is non-decreasing
3. `offsets` entries are within `buffer` bounds

These invariants allow **unchecked access** in methods for performance.
*/

use std::ops::{Index, Range};

use num::{NumCast, PrimInt, ToPrimitive};

/// CSR-like structure storing slices of elements.
///
/// - `buffer`: all elements contiguously
/// - `offsets`: start indices of each slice
#[derive(Debug, Clone)]
pub struct SlicedBuffer<T, I>
where
    I: PrimInt,
{
    buffer: Vec<T>,
    offsets: Vec<I>,
}

impl<T, I: PrimInt> Default for SlicedBuffer<T, I> {
    fn default() -> Self {
        Self {
            buffer: Vec::new(),
            offsets: vec![I::zero(), I::zero()],
        }
    }
}

#[inline(always)]
fn to_usize<I: ToPrimitive>(i: I) -> usize {
    // All indices are verified to fit into `usize` on construction
    i.to_usize().unwrap_or(usize::MAX)
}

impl<T, I> SlicedBuffer<T, I>
where
    I: PrimInt,
{
    /// Constructs a new `SlicedBuffer`.
    ///
    /// # Panics
    /// Panics if:
    /// - `offsets.len() < 2`
    /// - `offsets` is not sorted
    /// - `offsets` exceed `buffer` length
    pub fn new(buffer: Vec<T>, offsets: Vec<I>) -> Self {
        assert!(offsets.len() > 1);
        assert!(offsets.is_sorted());
        assert!(offsets.iter().all(|o| o.to_usize().is_some()));
        assert!(to_usize(offsets[offsets.len() - 1]) <= buffer.len());

        Self { buffer, offsets }
    }

    /// Builds a `SlicedBuffer` with `num_slices` slices from `(slice, value)`-pairs.
    ///
    /// Entries of the same slice keep the order in which they appear in `entries`
    /// (a stable counting sort).
    ///
    /// # Panics
    /// Panics if a slice index is `>= num_slices` or the number of entries does not fit into `I`.
    ///
    /// # Examples
    /// ```
    /// use wmatching::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::<char, u32>::from_keyed_entries(3, vec![(2, 'a'), (0, 'b'), (2, 'c')]);
    /// assert_eq!(&sb[0u32], &['b']);
    /// assert!(sb[1u32].is_empty());
    /// assert_eq!(&sb[2u32], &['a', 'c']);
    /// ```
    pub fn from_keyed_entries(num_slices: usize, entries: Vec<(usize, T)>) -> Self
    where
        T: Clone,
    {
        let mut counts = vec![0usize; num_slices + 1];
        for (slice, _) in &entries {
            assert!(*slice < num_slices);
            counts[*slice + 1] += 1;
        }
        for i in 1..counts.len() {
            counts[i] += counts[i - 1];
        }

        let offsets = counts
            .iter()
            .map(|&o| <I as NumCast>::from(o).expect("number of entries exceeds index type"))
            .collect();

        let mut slots: Vec<Option<T>> = vec![None; entries.len()];
        for (slice, value) in entries {
            slots[counts[slice]] = Some(value);
            counts[slice] += 1;
        }

        Self::new(slots.into_iter().flatten().collect(), offsets)
    }

    /// Returns the number of slices as `usize`.
    ///
    /// # Examples
    /// ```
    /// use wmatching::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0u32, 2, 4, 7]);
    /// assert_eq!(sb.len(), 3);
    /// ```
    #[allow(clippy::len_without_is_empty)]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the total number of entries in the buffer.
    #[inline(always)]
    pub fn number_of_entries(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the range of buffer positions occupied by slice `u`.
    ///
    /// # Examples
    /// ```
    /// use wmatching::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0u32, 2, 4, 7]);
    /// assert_eq!(sb.range_of(2), 4..7);
    /// ```
    #[inline(always)]
    pub fn range_of(&self, u: usize) -> Range<usize> {
        to_usize(self.offsets[u])..to_usize(self.offsets[u + 1])
    }

    /// Returns the length of slice `u`.
    #[inline(always)]
    pub fn size_of(&self, u: usize) -> usize {
        self.range_of(u).len()
    }

    /// Returns the entry stored at buffer position `pos`.
    #[inline(always)]
    pub fn entry(&self, pos: usize) -> &T {
        &self.buffer[pos]
    }

    /// Returns a reference to the complete buffer.
    #[inline(always)]
    pub fn raw_buffer_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Returns a reference to the offsets array.
    #[inline(always)]
    pub fn raw_offset_slice(&self) -> &[I] {
        &self.offsets
    }
}

impl<T, I, Idx> Index<Idx> for SlicedBuffer<T, I>
where
    I: PrimInt,
    Idx: PrimInt,
{
    type Output = [T];

    #[inline(always)]
    fn index(&self, idx: Idx) -> &Self::Output {
        let range = self.range_of(to_usize(idx));

        // using unchecked here is safe, since we established in the
        // constructor that all entries within `self.offsets` are
        //  (i) non-decreasing (i.e. produce a valid range) and
        //  (ii) are within bounds of `self.buffer`
        unsafe { self.buffer.get_unchecked(range) }
    }
}
