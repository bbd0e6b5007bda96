//! Driven ports for entity storage.
//!
//! Repositories are synchronous and infallible: absence is reported through
//! `Option`/`bool`, never as an error. Callers validate every record before
//! it reaches a repository.

use pagination::{Page, PageRequest};
use uuid::Uuid;

use crate::domain::{Brew, BrewFilter, Steep, Tea, TeaFilter, Teapot, TeapotFilter};

/// Storage for teapots.
#[cfg_attr(test, mockall::automock)]
pub trait TeapotRepository: Send + Sync {
    /// Insert a teapot, overwriting any record with the same id.
    fn create(&self, teapot: Teapot);

    /// Fetch a teapot by id.
    fn find(&self, id: Uuid) -> Option<Teapot>;

    /// Overwrite the stored teapot with the same id.
    fn update(&self, teapot: Teapot);

    /// Remove a teapot, reporting whether it existed.
    fn delete(&self, id: Uuid) -> bool;

    /// Matching teapots, newest first, windowed by `page`.
    fn list(&self, filter: &TeapotFilter, page: &PageRequest) -> Page<Teapot>;
}

/// Storage for teas.
#[cfg_attr(test, mockall::automock)]
pub trait TeaRepository: Send + Sync {
    /// Insert a tea, overwriting any record with the same id.
    fn create(&self, tea: Tea);

    /// Fetch a tea by id.
    fn find(&self, id: Uuid) -> Option<Tea>;

    /// Overwrite the stored tea with the same id.
    fn update(&self, tea: Tea);

    /// Remove a tea, reporting whether it existed.
    fn delete(&self, id: Uuid) -> bool;

    /// Matching teas, newest first, windowed by `page`.
    fn list(&self, filter: &TeaFilter, page: &PageRequest) -> Page<Tea>;
}

/// Storage for brews.
#[cfg_attr(test, mockall::automock)]
pub trait BrewRepository: Send + Sync {
    /// Insert a brew, overwriting any record with the same id.
    fn create(&self, brew: Brew);

    /// Fetch a brew by id.
    fn find(&self, id: Uuid) -> Option<Brew>;

    /// Overwrite the stored brew with the same id.
    fn update(&self, brew: Brew);

    /// Remove a brew, reporting whether it existed.
    fn delete(&self, id: Uuid) -> bool;

    /// Matching brews, newest first, windowed by `page`.
    fn list(&self, filter: &BrewFilter, page: &PageRequest) -> Page<Brew>;
}

/// Storage for steeps.
///
/// Steeps are append-only.
#[cfg_attr(test, mockall::automock)]
pub trait SteepRepository: Send + Sync {
    /// Number `steep` after the brew's existing steeps and store it.
    ///
    /// Counting and inserting happen under one write, so concurrent appends
    /// to the same brew never share a number.
    fn append(&self, steep: Steep) -> Steep;

    /// Fetch a steep by id.
    fn find(&self, id: Uuid) -> Option<Steep>;

    /// Steeps of `brew_id` in ascending steep order, windowed by `page`.
    fn list_for_brew(&self, brew_id: Uuid, page: &PageRequest) -> Page<Steep>;
}
