// src/exit.rs
//! Standardized process exit codes for `lcom`.
//!
//! Provides a stable contract for scripts and CI pipelines.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LcomExit {
    /// Scan completed with no findings.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Invalid command-line input (e.g. a path that does not exist).
    InvalidInput = 2,
    /// At least one finding was reported.
    FindingsReported = 6,
}

impl LcomExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for LcomExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
