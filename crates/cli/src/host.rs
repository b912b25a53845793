// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide host executable registration.
//!
//! The harness runs one host executable for the whole test process. It must
//! be registered once with [`init`] during startup, before any
//! [`run_host`](crate::run_host) call; it cannot be changed afterwards.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

static HOST_EXECUTABLE: OnceLock<PathBuf> = OnceLock::new();

/// Errors from registering the host executable
#[derive(Debug, Error)]
pub enum HostError {
    #[error("host executable already initialized as '{}'", .existing.display())]
    AlreadyInitialized { existing: PathBuf },

    #[error("failed to resolve host executable '{}': {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Register the host executable, stored as an absolute path.
///
/// Fails if an executable was already registered, even the same one.
pub fn init(path: impl AsRef<Path>) -> Result<(), HostError> {
    let path = path.as_ref();
    let absolute = std::path::absolute(path).map_err(|source| HostError::Resolve {
        path: path.to_path_buf(),
        source,
    })?;

    HOST_EXECUTABLE
        .set(absolute)
        .map_err(|_| HostError::AlreadyInitialized {
            existing: HOST_EXECUTABLE.get().cloned().unwrap_or_default(),
        })
}

/// The registered host executable, if [`init`] has run
pub fn executable() -> Option<&'static Path> {
    HOST_EXECUTABLE.get().map(PathBuf::as_path)
}
