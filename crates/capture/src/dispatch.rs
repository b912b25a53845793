// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook dispatch with a single interception point.
//!
//! A [`HookDispatcher`] routes named hook calls to registered listeners. One
//! observer may be installed per dispatcher; it sees every call before the
//! listeners run and cannot alter their results.

use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use thiserror::Error;
use tracing::debug;

const DISPATCH_TARGET: &str = "hookprobe::dispatch";

/// Keyword arguments passed to a hook call
pub type Payload = Map<String, Value>;

/// A hook implementation
pub type Listener = Arc<dyn Fn(&Payload) -> Result<Option<Value>, ListenerError> + Send + Sync>;

/// Error raised by a hook listener, propagated unchanged to the dispatcher's caller
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ListenerError {
    pub message: String,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors from installing or removing an interceptor
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("dispatcher already has an interceptor installed")]
    AlreadyIntercepted,

    #[error("interceptor is not installed")]
    NotInstalled,
}

/// Observer that sees every hook call before its listeners run
pub trait Interceptor: Send + Sync {
    fn before_call(&self, hook: &str, payload: &Payload);
}

struct InstalledInterceptor {
    id: u64,
    observer: Arc<dyn Interceptor>,
}

type InterceptorSlot = Arc<Mutex<Option<InstalledInterceptor>>>;

static NEXT_INTERCEPTOR_ID: AtomicU64 = AtomicU64::new(0);

/// Routes hook calls to listeners
#[derive(Default)]
pub struct HookDispatcher {
    listeners: HashMap<String, Vec<Listener>>,
    interceptor: InterceptorSlot,
}

impl HookDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `hook`. Listeners run in registration order.
    pub fn register<F>(&mut self, hook: impl Into<String>, listener: F)
    where
        F: Fn(&Payload) -> Result<Option<Value>, ListenerError> + Send + Sync + 'static,
    {
        self.listeners
            .entry(hook.into())
            .or_default()
            .push(Arc::new(listener));
    }

    /// Check if any listeners are registered for a hook
    pub fn has_listeners(&self, hook: &str) -> bool {
        self.listeners.get(hook).is_some_and(|l| !l.is_empty())
    }

    /// Names of all hooks with at least one listener, sorted
    pub fn hook_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .listeners
            .iter()
            .filter(|(_, l)| !l.is_empty())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Call every listener of `hook`, returning their non-`None` results.
    ///
    /// The installed interceptor, if any, observes the call first. The first
    /// listener error stops the call and is returned as is.
    pub fn dispatch(&self, hook: &str, payload: Payload) -> Result<Vec<Value>, ListenerError> {
        // Clone out of the lock so listeners may dispatch re-entrantly.
        let observer = self
            .interceptor
            .lock()
            .as_ref()
            .map(|installed| Arc::clone(&installed.observer));
        if let Some(observer) = observer {
            observer.before_call(hook, &payload);
        }

        let listeners = self.listeners.get(hook).cloned().unwrap_or_default();
        debug!(
            target: DISPATCH_TARGET,
            hook,
            listeners = listeners.len(),
            "dispatching hook"
        );

        let mut results = Vec::new();
        for listener in listeners {
            if let Some(value) = listener(&payload)? {
                results.push(value);
            }
        }
        Ok(results)
    }

    /// Install `observer` as this dispatcher's interceptor.
    ///
    /// Only one interceptor may be installed at a time.
    pub fn install_interceptor(
        &self,
        observer: Arc<dyn Interceptor>,
    ) -> Result<InterceptorHandle, DispatchError> {
        let mut slot = self.interceptor.lock();
        if slot.is_some() {
            return Err(DispatchError::AlreadyIntercepted);
        }
        let id = NEXT_INTERCEPTOR_ID.fetch_add(1, Ordering::Relaxed);
        *slot = Some(InstalledInterceptor { id, observer });
        debug!(target: DISPATCH_TARGET, id, "interceptor installed");

        Ok(InterceptorHandle {
            slot: Arc::downgrade(&self.interceptor),
            id,
            installed: true,
        })
    }

    /// Check if an interceptor is currently installed
    pub fn is_intercepted(&self) -> bool {
        self.interceptor.lock().is_some()
    }
}

impl fmt::Debug for HookDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookDispatcher")
            .field("hooks", &self.hook_names())
            .field("intercepted", &self.is_intercepted())
            .finish()
    }
}

/// Ownership of an installed interceptor.
///
/// Dropping a handle that is still installed uninstalls it.
#[derive(Debug)]
pub struct InterceptorHandle {
    slot: Weak<Mutex<Option<InstalledInterceptor>>>,
    id: u64,
    installed: bool,
}

impl InterceptorHandle {
    /// Restore plain dispatch. Fails if this handle was already uninstalled.
    pub fn uninstall(&mut self) -> Result<(), DispatchError> {
        if !self.installed {
            return Err(DispatchError::NotInstalled);
        }
        self.installed = false;

        // The dispatcher may already be gone, which leaves nothing to restore.
        if let Some(slot) = self.slot.upgrade() {
            let mut slot = slot.lock();
            if slot.as_ref().is_some_and(|installed| installed.id == self.id) {
                *slot = None;
                debug!(target: DISPATCH_TARGET, id = self.id, "interceptor uninstalled");
            }
        }
        Ok(())
    }

    /// Check if this handle's interceptor is still installed
    pub fn is_installed(&self) -> bool {
        self.installed
    }
}

impl Drop for InterceptorHandle {
    fn drop(&mut self) {
        if self.installed {
            let _ = self.uninstall();
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
