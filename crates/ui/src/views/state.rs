#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidConfig,
    StartFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::InvalidConfig => "That practice setup doesn't exist. Pick one from the menu.",
            ViewError::StartFailed => "Could not start the session. Please try again.",
        }
    }
}
