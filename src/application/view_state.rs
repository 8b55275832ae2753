//! Per-screen view state with stale-fetch discard.
//!
//! A screen owns one `ViewState<T>` per fetched resource. Every load
//! takes a ticket first; when the result arrives it is applied with
//! that ticket. A ticket goes stale if the screen unmounted or a newer
//! load started in the meantime, and a stale result is dropped on the
//! floor instead of clobbering state that no longer wants it.
//!
//! Failures keep whatever was last displayed: the user sees the old
//! data plus an error banner, never a half-updated screen.

use crate::ports::ApiError;

/// Ticket identifying one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Display state for one fetched resource.
#[derive(Debug, Clone)]
pub struct ViewState<T> {
    data: Option<T>,
    error: Option<String>,
    loading: bool,
    mounted: bool,
    generation: u64,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
            mounted: true,
            generation: 0,
        }
    }
}

impl<T> ViewState<T> {
    /// Fresh state for a screen that just mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a load: shows the spinner and returns the ticket the
    /// result must be applied with.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Applies a fetch result.
    ///
    /// Returns `false` without touching state when the ticket is stale:
    /// the screen unmounted, or a newer fetch superseded this one.
    /// On failure the previous data stays; only the error changes.
    pub fn apply(&mut self, ticket: FetchTicket, result: Result<T, ApiError>) -> bool {
        if !self.mounted || ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                mounted = self.mounted,
                "Discarding stale fetch result"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.display_message());
            }
        }
        true
    }

    /// Marks the screen unmounted; every outstanding ticket goes stale.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Currently displayed data, if any.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Error banner text, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_fetch_replaces_data_and_clears_error() {
        let mut state = ViewState::new();
        let ticket = state.begin_fetch();
        assert!(state.is_loading());

        assert!(state.apply(ticket, Ok(42)));
        assert_eq!(state.data(), Some(&42));
        assert!(state.error().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn failed_fetch_keeps_previous_data() {
        let mut state = ViewState::new();
        let ticket = state.begin_fetch();
        state.apply(ticket, Ok(vec!["Basic", "Prime"]));

        let ticket = state.begin_fetch();
        assert!(state.apply(ticket, Err(ApiError::network("socket closed"))));

        assert_eq!(state.data(), Some(&vec!["Basic", "Prime"]));
        assert!(state.error().is_some());
    }

    #[test]
    fn result_after_unmount_is_discarded() {
        let mut state = ViewState::new();
        let ticket = state.begin_fetch();
        state.unmount();

        assert!(!state.apply(ticket, Ok(1)));
        assert!(state.data().is_none());
    }

    #[test]
    fn superseded_fetch_is_discarded() {
        let mut state = ViewState::new();
        let stale = state.begin_fetch();
        let fresh = state.begin_fetch();

        // The old request resolves after the new one started.
        assert!(!state.apply(stale, Ok(1)));
        assert!(state.data().is_none());

        assert!(state.apply(fresh, Ok(2)));
        assert_eq!(state.data(), Some(&2));
    }

    #[test]
    fn later_fetch_overwrites_with_latest_view() {
        let mut state = ViewState::new();
        let first = state.begin_fetch();
        state.apply(first, Ok("old"));

        let second = state.begin_fetch();
        state.apply(second, Ok("new"));
        assert_eq!(state.data(), Some(&"new"));
    }

    #[test]
    fn error_banner_uses_display_message() {
        let mut state: ViewState<u8> = ViewState::new();
        let ticket = state.begin_fetch();
        state.apply(
            ticket,
            Err(ApiError::server(503).with_server_message("Maintenance window")),
        );
        assert_eq!(state.error(), Some("Maintenance window"));
    }
}
