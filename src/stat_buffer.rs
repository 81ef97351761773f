use crate::circular_buffer::CircularBuffer;
use crate::constants::DEFAULT_CAPACITY_SLOTS;
use crate::OutOfRange;
use serde::{Deserialize, Serialize};

/// Snapshot of the statistics over a buffer's live contents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Statistics {
    pub std: f32,
    pub mean: f32,
    pub min: f32,
    pub max: f32,
}

impl Statistics {
    const EMPTY: Statistics = Statistics {
        std: 0.0,
        mean: 0.0,
        min: f32::MAX,
        max: f32::MIN,
    };
}

/// Wrapper around a circular buffer that keeps basic statistics over the
/// live window: population standard deviation, mean, min, and max. Once the
/// buffer is full, pushing slides the window and the statistics follow.
pub struct StatisticsBuffer<T, const SLOTS: usize = DEFAULT_CAPACITY_SLOTS> {
    buffer: CircularBuffer<T, SLOTS>,
    stats: Statistics,
}

impl<T: Copy + Into<f32>, const SLOTS: usize> StatisticsBuffer<T, SLOTS> {
    pub fn new() -> Self {
        StatisticsBuffer {
            buffer: CircularBuffer::new(),
            stats: Statistics::EMPTY,
        }
    }

    /// Pushes a sample (evicting the oldest if the window is full) and
    /// refreshes the statistics.
    pub fn push(&mut self, item: T) {
        self.buffer.push_back(item);
        self.recompute();
    }

    fn recompute(&mut self) {
        let count = self.buffer.len();
        if count == 0 {
            self.stats = Statistics::EMPTY;
            return;
        }

        let mut sum = 0.0_f32;
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for &sample in self.buffer.iter() {
            let value: f32 = sample.into();
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }
        let mean = sum / count as f32;

        let variance = self
            .buffer
            .iter()
            .map(|&sample| {
                let diff = mean - sample.into();
                diff * diff
            })
            .sum::<f32>()
            / count as f32;

        self.stats = Statistics {
            std: variance.sqrt(),
            mean,
            min,
            max,
        };
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Borrows the sample at `pos`, counted from the oldest in the window.
    pub fn at(&self, pos: usize) -> Result<&T, OutOfRange> {
        self.buffer.at(pos)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.stats = Statistics::EMPTY;
    }
}

impl<T: Copy + Into<f32>, const SLOTS: usize> Default for StatisticsBuffer<T, SLOTS> {
    fn default() -> Self {
        Self::new()
    }
}
