use std::{fmt, time::Duration};

/// Transient message for the user, shown for `duration` and then dismissed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    /// How long the notice stays up. Front ends that print notices inline
    /// (like the terminal shell) have nothing to dismiss and ignore it.
    pub duration: Duration,
}

impl Notice {
    pub const SHORT: Duration = Duration::from_millis(1500);
    pub const LONG: Duration = Duration::from_millis(3000);

    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            duration,
        }
    }

    pub fn short(message: impl Into<String>) -> Self {
        Self::new(message, Self::SHORT)
    }

    pub fn long(message: impl Into<String>) -> Self {
        Self::new(message, Self::LONG)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
