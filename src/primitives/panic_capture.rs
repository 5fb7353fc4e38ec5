//! Panic capture for error boundaries.
//!
//! A process-wide panic hook, installed once, checks whether the panicking
//! thread is inside a boundary render. If so the panic is recorded for that
//! boundary (message and `file:line:column`) and nothing is printed. Panics
//! outside a boundary go to the previously installed hook unchanged.

use std::cell::{Cell, RefCell};
use std::panic::{self, PanicHookInfo};
use std::sync::Once;

static PANIC_HOOK_INSTALLED: Once = Once::new();

thread_local! {
    /// Number of boundary renders active on this thread.
    static CAPTURE_DEPTH: Cell<usize> = const { Cell::new(0) };

    /// Location of the last panic captured on this thread.
    static LAST_LOCATION: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Install the capturing hook (idempotent).
pub(crate) fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CAPTURE_DEPTH.with(Cell::get) > 0 {
                record(info);
            } else {
                previous(info);
            }
        }));
    });
}

fn record(info: &PanicHookInfo<'_>) {
    let location = info
        .location()
        .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
    LAST_LOCATION.with(|slot| *slot.borrow_mut() = location);
}

/// Active while a boundary renders. Panics on this thread are captured until
/// the guard drops.
pub(crate) struct CaptureGuard(());

impl CaptureGuard {
    pub(crate) fn enter() -> Self {
        install_panic_hook();
        CAPTURE_DEPTH.with(|depth| depth.set(depth.get() + 1));
        LAST_LOCATION.with(|slot| slot.borrow_mut().take());
        CaptureGuard(())
    }

    /// Take the location of the panic captured under this guard, if any.
    pub(crate) fn take_location(&self) -> Option<String> {
        LAST_LOCATION.with(|slot| slot.borrow_mut().take())
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        CAPTURE_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_tracks_depth() {
        assert_eq!(CAPTURE_DEPTH.with(Cell::get), 0);
        {
            let _outer = CaptureGuard::enter();
            let _inner = CaptureGuard::enter();
            assert_eq!(CAPTURE_DEPTH.with(Cell::get), 2);
        }
        assert_eq!(CAPTURE_DEPTH.with(Cell::get), 0, "guards restore the depth on drop");
    }

    #[test]
    fn test_captured_panic_records_location() {
        let guard = CaptureGuard::enter();
        let result: std::thread::Result<()> = panic::catch_unwind(|| panic!("captured"));
        assert!(result.is_err());

        let location = guard.take_location().expect("location recorded");
        assert!(location.contains("panic_capture.rs"), "got {location}");
        assert_eq!(guard.take_location(), None, "location is taken once");
    }
}
