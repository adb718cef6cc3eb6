//! Process exit codes for the orchctl application.
//!
//! Defined so scripts wrapping the CLI can tell error classes apart.

/// Exit codes reported on failure.
///
/// The 64-78 range follows BSD sysexits.h; 100+ are orchctl-specific.
/// Success is the process default of 0 and needs no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchExitCode {
    /// Bad command line input (64)
    UsageError = 64,

    /// Malformed input or output data (65)
    DataError = 65,

    /// An input file could not be opened (66)
    NoInput = 66,

    /// Unexpected internal error (70)
    SoftwareError = 70,

    /// Broken or incomplete environment configuration (78)
    ConfigError = 78,

    /// Login or token failure against the orchestrator (100)
    AuthError = 100,

    /// Connection or transport failure (101)
    NetworkError = 101,

    /// The remote API rejected the request (102)
    ApiError = 102,
}

impl OrchExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_sysexits_ranges() {
        assert_eq!(OrchExitCode::UsageError.code(), 64);
        assert_eq!(OrchExitCode::NoInput.code(), 66);
        assert_eq!(OrchExitCode::ConfigError.code(), 78);
        assert_eq!(OrchExitCode::AuthError.code(), 100);
        assert_eq!(OrchExitCode::ApiError.code(), 102);
    }
}
