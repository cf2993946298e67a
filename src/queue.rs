use heapless::Vec;

use crate::color::Rgb;
use crate::layout::LED_COUNT;

/// A pending color for one physical LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedWrite {
    pub index: usize,
    pub color: Rgb,
}

impl LedWrite {
    pub const fn new(index: usize, color: Rgb) -> Self {
        Self { index, color }
    }
}

/// Writes collected during one refresh cycle
///
/// Holds at most one entry per LED: enqueuing an index that is already
/// pending replaces its color in place, keeping the position of the first
/// enqueue. N is the number of addressable LEDs, so the queue can never
/// overflow.
#[derive(Debug, Clone)]
pub struct UpdateQueue<const N: usize = LED_COUNT> {
    colors: [Option<Rgb>; N],
    order: Vec<usize, N>,
}

impl<const N: usize> Default for UpdateQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> UpdateQueue<N> {
    pub const fn new() -> Self {
        Self {
            colors: [None; N],
            order: Vec::new(),
        }
    }

    /// Queue `color` for `index`, replacing any pending color for it
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below N.
    pub fn enqueue(&mut self, index: usize, color: Rgb) {
        assert!(index < N, "LED index {} out of range", index);
        if self.colors[index].replace(color).is_none() {
            // Each index is listed once, so there is always room
            let _ = self.order.push(index);
        }
    }

    /// Queue the same color for every LED
    pub fn enqueue_all(&mut self, color: Rgb) {
        for index in 0..N {
            self.enqueue(index, color);
        }
    }

    /// Pending color for `index`
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Pending writes in first-enqueue order
    pub fn iter(&self) -> impl Iterator<Item = LedWrite> + '_ {
        self.order
            .iter()
            .filter_map(|&index| self.colors[index].map(|color| LedWrite::new(index, color)))
    }

    /// Drop every pending write
    pub fn clear(&mut self) {
        for &index in &self.order {
            self.colors[index] = None;
        }
        self.order.clear();
    }
}
