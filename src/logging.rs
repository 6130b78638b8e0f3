use std::cell::Cell;

thread_local! {
    static LEVEL_CHOSEN: Cell<bool> = const { Cell::new(false) };
}

#[inline]
pub fn level_for(debug_overlay: bool) -> log::LevelFilter {
    if debug_overlay {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Set the global log level from the first widget's options.
///
/// Later widgets never change it; returns the level only when this call set it.
pub fn choose_level_once(debug_overlay: bool) -> Option<log::LevelFilter> {
    if LEVEL_CHOSEN.with(|chosen| chosen.replace(true)) {
        return None;
    }
    let level = level_for(debug_overlay);
    log::set_max_level(level);
    Some(level)
}

/// Lets the first of a run of identical failures through, then every `every`th.
pub struct RepeatLimiter {
    every: u32,
    count: u32,
}

impl RepeatLimiter {
    pub fn new(every: u32) -> Self {
        Self {
            every: every.max(1),
            count: 0,
        }
    }

    /// Record one failure; `true` when it should be logged.
    pub fn hit(&mut self) -> bool {
        let report = self.count % self.every == 0;
        self.count = self.count.wrapping_add(1);
        report
    }

    /// Failures in the current run.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
