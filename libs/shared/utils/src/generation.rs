use std::sync::atomic::{AtomicU64, Ordering};

/// Marks which fetch a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Counter that lets the most recent fetch win.
///
/// Each `begin` supersedes every earlier ticket, so a slow response to an
/// abandoned request can be recognised and dropped.
#[derive(Debug, Default)]
pub struct FetchGeneration {
    current: AtomicU64,
}

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }
}
