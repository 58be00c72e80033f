/// How a command ended, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The input was read but did not pass validation.
    Invalid,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Invalid => 2,
        }
    }
}

/// Exit code for runtime failures (unreadable input, bad standards file).
pub const RUNTIME_ERROR_EXIT: i32 = 1;
