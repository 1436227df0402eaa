//! Capacity schedule: the fixed, ascending bucket counts a table steps through.

use crate::error::ScheduleError;

/// Near-prime bucket counts, each roughly double the previous.
pub const DEFAULT_BUCKET_COUNTS: &[usize] = &[509, 1021, 2039, 4093, 8191, 16381, 32749, 65521];

/// Ordered list of bucket counts. A table starts at step 0 and only ever
/// moves forward; once the last step is reached it keeps that capacity and
/// absorbs further inserts by chaining.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CapacitySchedule {
    steps: &'static [usize],
}

impl CapacitySchedule {
    pub const DEFAULT: CapacitySchedule = CapacitySchedule {
        steps: DEFAULT_BUCKET_COUNTS,
    };

    /// Validate and wrap `steps`: non-empty, no zero, strictly ascending.
    pub fn new(steps: &'static [usize]) -> Result<Self, ScheduleError> {
        if steps.is_empty() {
            return Err(ScheduleError::Empty);
        }
        for (step, &got) in steps.iter().enumerate() {
            if got == 0 {
                return Err(ScheduleError::ZeroBuckets { step });
            }
            if step > 0 && steps[step - 1] >= got {
                return Err(ScheduleError::NotAscending {
                    step,
                    prev: steps[step - 1],
                    got,
                });
            }
        }
        Ok(Self { steps })
    }

    #[inline]
    pub fn initial(&self) -> usize {
        self.steps[0]
    }

    /// Bucket count at `step`, or `None` past the end.
    #[inline]
    pub fn get(&self, step: usize) -> Option<usize> {
        self.steps.get(step).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &'static [usize] {
        self.steps
    }
}

impl Default for CapacitySchedule {
    fn default() -> Self {
        Self::DEFAULT
    }
}
