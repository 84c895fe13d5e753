//! Fetch-on-mount state shared by the events, overview, participants, and
//! users pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page calls [`PageLoader::start`] before issuing its request and feeds
//! the result back through [`PageLoader::settle`] with the generation it was
//! given. Retry and remount start a new generation; a settlement carrying an
//! older one is dropped, so a slow response can never overwrite a newer one.
//!
//! DESIGN
//! ======
//! `Success` with `null` data, or with a collection that is empty, is the
//! "no data" view rather than an error. A `401` sets the error state and
//! asks the caller to signal the session gate, once per request.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use crate::net::outcome::ApiOutcome;
use crate::net::types::Event;

/// Payloads that can be "present but empty".
pub trait PageData {
    fn has_content(&self) -> bool {
        true
    }
}

impl<T> PageData for Vec<T> {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl PageData for Event {}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(T),
    Empty,
    Failed(String),
}

/// What the caller must do after a settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// Apply, and tell the session gate the admin is no longer authorized.
    Unauthorized,
    /// A newer request has started; nothing changed.
    Stale,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLoader<T> {
    state: LoadState<T>,
    generation: u64,
    settled: bool,
}

impl<T> Default for PageLoader<T> {
    fn default() -> Self {
        Self { state: LoadState::Loading, generation: 0, settled: false }
    }
}

impl<T: PageData> PageLoader<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin a new request, superseding any in flight.
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.settled = false;
        self.state = LoadState::Loading;
        self.generation
    }

    pub fn settle(&mut self, generation: u64, outcome: ApiOutcome<Option<T>>) -> Settled {
        if generation != self.generation || self.settled {
            return Settled::Stale;
        }
        self.settled = true;
        match outcome {
            ApiOutcome::Success(Some(data)) if data.has_content() => {
                self.state = LoadState::Loaded(data);
                Settled::Applied
            }
            ApiOutcome::Success(_) => {
                self.state = LoadState::Empty;
                Settled::Applied
            }
            other => {
                let unauthorized = other.is_unauthorized();
                self.state = LoadState::Failed(other.message().unwrap_or_default().to_owned());
                if unauthorized { Settled::Unauthorized } else { Settled::Applied }
            }
        }
    }
}
