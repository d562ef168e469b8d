//! Frame timestamps for one playback run.

/// Iterator over the movie-time positions (in seconds) at which frames are shown.
///
/// Starts at `interval`, steps by `interval`, and stops once the position
/// passes `runtime`. A movie shorter than one interval yields nothing; a zero
/// interval yields nothing instead of looping forever.
#[derive(Debug, Clone)]
pub struct FrameSchedule {
    next: Option<u64>,
    interval: u64,
    runtime: u64,
}

impl FrameSchedule {
    pub fn new(runtime: u64, interval: u64) -> Self {
        Self {
            next: (interval > 0).then_some(interval),
            interval,
            runtime,
        }
    }

    /// Total number of frames the schedule produces.
    pub fn frame_count(&self) -> u64 {
        if self.interval == 0 {
            0
        } else {
            self.runtime / self.interval
        }
    }
}

impl Iterator for FrameSchedule {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next.filter(|&t| t <= self.runtime)?;
        self.next = current.checked_add(self.interval);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_schedule() {
        let frames: Vec<u64> = FrameSchedule::new(130, 10).collect();
        assert_eq!(frames, (1..=13).map(|i| i * 10).collect::<Vec<_>>());
        assert_eq!(FrameSchedule::new(130, 10).frame_count(), 13);
    }

    #[test]
    fn test_runtime_on_boundary_is_included() {
        let frames: Vec<u64> = FrameSchedule::new(30, 10).collect();
        assert_eq!(frames, vec![10, 20, 30]);
    }

    #[test]
    fn test_one_second_interval() {
        let frames: Vec<u64> = FrameSchedule::new(3, 1).collect();
        assert_eq!(frames, vec![1, 2, 3]);
    }

    #[test]
    fn test_runtime_shorter_than_interval() {
        assert_eq!(FrameSchedule::new(9, 10).count(), 0);
        assert_eq!(FrameSchedule::new(0, 1).count(), 0);
        assert_eq!(FrameSchedule::new(9, 10).frame_count(), 0);
    }

    #[test]
    fn test_zero_interval_is_empty() {
        assert_eq!(FrameSchedule::new(100, 0).count(), 0);
        assert_eq!(FrameSchedule::new(100, 0).frame_count(), 0);
    }

    #[test]
    fn test_no_overflow_near_max() {
        let frames: Vec<u64> = FrameSchedule::new(u64::MAX, u64::MAX / 2 + 1).collect();
        assert_eq!(frames, vec![u64::MAX / 2 + 1]);
    }

    #[test]
    fn test_count_matches_frame_count() {
        for (runtime, interval) in [(0, 1), (59, 60), (60, 60), (7261, 7), (100, 3)] {
            let schedule = FrameSchedule::new(runtime, interval);
            assert_eq!(schedule.clone().count() as u64, schedule.frame_count());
        }
    }
}
