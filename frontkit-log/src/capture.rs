//! In-process record capture.
//!
//! Lets callers (mostly tests) observe diagnostics without scraping
//! stderr. Capture is per thread and nests.

use crate::Level;
use std::cell::RefCell;

/// A captured log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Level the line was logged at
    pub level: Level,
    /// Log target (module path unless overridden)
    pub target: String,
    /// Formatted message
    pub message: String,
}

thread_local! {
    static STACK: RefCell<Vec<Vec<Record>>> = const { RefCell::new(Vec::new()) };
}

/// Run `f`, collecting every record logged on this thread instead of
/// writing it out.
///
/// ```rust
/// let (value, records) = frontkit_log::capture(|| {
///     frontkit_log::warn!("careful");
///     42
/// });
/// assert_eq!(value, 42);
/// assert_eq!(records[0].message, "careful");
/// ```
pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<Record>) {
    STACK.with(|stack| stack.borrow_mut().push(Vec::new()));
    let guard = Guard;
    let value = f();
    let records = guard.finish();
    (value, records)
}

pub(crate) fn is_active() -> bool {
    STACK.with(|stack| !stack.borrow().is_empty())
}

/// Returns `true` when the record was captured.
pub(crate) fn record(level: Level, target: &str, message: &str) -> bool {
    STACK.with(|stack| match stack.borrow_mut().last_mut() {
        Some(records) => {
            records.push(Record {
                level,
                target: target.to_string(),
                message: message.to_string(),
            });
            true
        }
        None => false,
    })
}

// Pops the capture frame even if `f` panics.
struct Guard;

impl Guard {
    fn finish(self) -> Vec<Record> {
        let records = STACK.with(|stack| stack.borrow_mut().pop()).unwrap_or_default();
        std::mem::forget(self);
        records
    }
}

impl Drop for Guard {
    fn drop(&mut self) {
        STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_is_inactive_outside() {
        assert!(!is_active());
        assert!(!record(Level::Warn, "t", "m"));
    }

    #[test]
    fn test_nested_capture_keeps_inner_records() {
        let (inner, outer) = capture(|| {
            crate::log(Level::Warn, "outer", "first");
            let (_, inner) = capture(|| crate::log(Level::Warn, "inner", "second"));
            inner
        });

        assert_eq!(outer.len(), 1);
        assert_eq!(outer[0].message, "first");
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].target, "inner");
    }

    #[test]
    fn test_capture_unwinds_on_panic() {
        let result = std::panic::catch_unwind(|| {
            capture(|| panic!("boom"));
        });
        assert!(result.is_err());
        assert!(!is_active());
    }
}
