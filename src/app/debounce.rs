/// Quiet period after the last keystroke before the preview re-renders.
pub const QUIET_PERIOD_SECS: f64 = 0.3;

/// Collapses bursts of edit events into a single render trigger.
///
/// Each edit bumps the generation counter and schedules a timer carrying
/// the new generation. When a timer fires, only the tick whose generation
/// still matches the counter is acted on; earlier ticks were superseded by
/// later edits and are dropped. This gives "reset on new arrival"
/// semantics without ever cancelling an FLTK timeout, and only one render
/// can result from any burst because generations are strictly increasing.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self { generation: 0 }
    }

    /// Record an edit. Returns the generation the caller should schedule
    /// a timer for.
    pub fn bump(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// True if a timer tick for `generation` is still the latest one.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a Debouncer like the event loop does and count renders.
    fn renders_for(edits_per_burst: &[usize]) -> usize {
        let mut debouncer = Debouncer::new();
        let mut renders = 0;
        for &edits in edits_per_burst {
            // All edits in a burst land before any of their timers fire.
            let generations: Vec<u64> = (0..edits).map(|_| debouncer.bump()).collect();
            for generation in generations {
                if debouncer.is_current(generation) {
                    renders += 1;
                }
            }
        }
        renders
    }

    #[test]
    fn test_burst_renders_once() {
        assert_eq!(renders_for(&[5]), 1);
        assert_eq!(renders_for(&[100]), 1);
    }

    #[test]
    fn test_spaced_edits_render_each() {
        // Three bursts of one edit each, separated by quiet periods.
        assert_eq!(renders_for(&[1, 1, 1]), 3);
    }

    #[test]
    fn test_mixed_bursts() {
        assert_eq!(renders_for(&[3, 1, 7]), 3);
    }

    #[test]
    fn test_overlapping_timers_only_latest_acts() {
        // Two messages shown in quick succession each arm a timer. The
        // first timer fires while the second message is up; only the
        // second message's own timer may clear it.
        let mut epoch = Debouncer::new();
        let first = epoch.bump();
        let second = epoch.bump();
        assert!(!epoch.is_current(first));
        assert!(epoch.is_current(second));

        // An explicit clear invalidates the still-pending second timer.
        epoch.bump();
        assert!(!epoch.is_current(second));
    }

    #[test]
    fn test_stale_tick_ignored() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.bump();
        let second = debouncer.bump();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }
}
