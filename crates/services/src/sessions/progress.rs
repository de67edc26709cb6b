/// Aggregated view of queue progress, useful for UI.
///
/// `total` counts the live queue including appended retries, so it can grow
/// while a session is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub is_complete: bool,
}
