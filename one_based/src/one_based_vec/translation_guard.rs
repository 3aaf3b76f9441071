// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DEBUG_ONE_BASED_INTERCEPT, Operation};
use std::cell::Cell;

/// Scoped change of a sequence's "translation suspended" flag.
///
/// While an intercepted [`Operation`] runs its native algorithm, the algorithm addresses
/// the backing sequence with raw 0-based indices, so key translation must be off. While
/// a user callback runs inside that algorithm, the caller is back in 1-based land, so
/// translation must be on again.
///
/// ```text
/// seq.find(cb) ──► suspend ──► native find ──► resume ──► cb(value, pos, seq)
///                     │                           │
///                     │                           └─ drop: suspended again
///                     └─ drop: previous value restored
/// ```
///
/// The previous value is restored on [`Drop`], so nested operations, early returns and
/// unwinding panics inside a callback all leave the flag as they found it.
#[must_use = "the previous flag value is restored when the guard is dropped"]
#[derive(Debug)]
pub struct TranslationGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl<'a> TranslationGuard<'a> {
    /// Turn translation off for the duration of `operation`.
    pub fn suspend(flag: &'a Cell<bool>, operation: Operation) -> Self {
        DEBUG_ONE_BASED_INTERCEPT.then(|| log_intercept(operation, flag.get()));
        Self {
            flag,
            previous: flag.replace(true),
        }
    }

    /// Turn translation back on, eg: while a user callback runs.
    pub fn resume(flag: &'a Cell<bool>) -> Self {
        Self {
            flag,
            previous: flag.replace(false),
        }
    }
}

impl Drop for TranslationGuard<'_> {
    fn drop(&mut self) { self.flag.set(self.previous); }
}

fn log_intercept(operation: Operation, nested: bool) {
    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🔢 intercept",
        operation = %operation,
        args = ?operation.arg_transform(),
        result = ?operation.result_transform(),
        nested = nested,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io::Write,
              panic::{AssertUnwindSafe, catch_unwind},
              sync::{Arc, Mutex}};
    use tracing::subscriber::set_default;
    use tracing_subscriber::fmt::SubscriberBuilder;

    /// Collects everything the subscriber writes.
    #[derive(Clone, Default)]
    struct CapturedOutput {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl CapturedOutput {
        fn get_copy_of_buffer_as_string(&self) -> String {
            String::from_utf8(self.buffer.lock().unwrap().clone()).expect("utf8")
        }
    }

    impl Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
    }

    #[test]
    fn test_suspend_restores_on_drop() {
        let flag = Cell::new(false);
        {
            let _guard = TranslationGuard::suspend(&flag, Operation::Slice);
            assert!(flag.get());
        }
        assert!(!flag.get());
    }

    #[test]
    fn test_nested_suspend_and_resume() {
        let flag = Cell::new(false);
        let _outer = TranslationGuard::suspend(&flag, Operation::Map);
        {
            let _resumed = TranslationGuard::resume(&flag);
            assert!(!flag.get());
            {
                let _inner = TranslationGuard::suspend(&flag, Operation::IndexOf);
                assert!(flag.get());
            }
            assert!(!flag.get());
        }
        assert!(flag.get());
    }

    #[test]
    fn test_restored_after_panic() {
        let flag = Cell::new(false);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = TranslationGuard::suspend(&flag, Operation::ForEach);
            panic!("callback failed");
        }));
        assert!(result.is_err());
        assert!(!flag.get());
    }

    #[test]
    fn test_intercept_event() {
        let output = CapturedOutput::default();
        let subscriber = SubscriberBuilder::default()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(output.clone()))
            .finish();

        // Tests should NOT call `subscriber::set_global_default()`.
        let _drop_guard = set_default(subscriber);

        log_intercept(Operation::LastIndexOf, true);

        let it = output.get_copy_of_buffer_as_string();
        assert!(it.contains("DEBUG"));
        assert!(it.contains("🔢 intercept"));
        assert!(it.contains("operation=lastIndexOf"));
        assert!(it.contains("args=SearchFrom { default: None }"));
        assert!(it.contains("result=FoundPosition"));
        assert!(it.contains("nested=true"));
    }
}
