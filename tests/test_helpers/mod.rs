//! Scoped environment overrides for integration tests.

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Sets or clears one environment variable until dropped, holding a
/// process-wide lock so concurrent tests never observe each other's values.
pub struct EnvVarGuard {
    key: OsString,
    previous: Option<OsString>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Applies `value` to `key`; `None` removes the variable.
    pub fn set(key: &str, value: Option<&str>) -> Self {
        let lock = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let previous = env::var_os(key);
        apply(key.as_ref(), value.map(OsString::from));

        Self {
            key: key.into(),
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let key = self.key.clone();
        apply(&key, self.previous.take());
    }
}

fn apply(key: &std::ffi::OsStr, value: Option<OsString>) {
    // SAFETY: ENV_MUTEX serializes environment mutations in tests.
    unsafe {
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }
}
