//! Driving ports for brews and their steeps.

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use uuid::Uuid;

use crate::domain::{Brew, BrewFilter, BrewInput, BrewPatchInput, Error, Steep, SteepInput};

/// Brew and steep mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrewCommand: Send + Sync {
    /// Start a brew.
    ///
    /// Unknown teapot or tea references are validation failures, not
    /// missing resources.
    async fn create(&self, input: BrewInput) -> Result<Brew, Error>;

    /// Update the supplied attributes of an existing brew.
    async fn patch(&self, id: Uuid, input: BrewPatchInput) -> Result<Brew, Error>;

    /// Delete a brew.
    async fn delete(&self, id: Uuid) -> Result<(), Error>;

    /// Record the next steep of an existing brew.
    async fn add_steep(&self, brew_id: Uuid, input: SteepInput) -> Result<Steep, Error>;
}

/// Brew and steep lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrewQuery: Send + Sync {
    /// Fetch one brew.
    async fn get(&self, id: Uuid) -> Result<Brew, Error>;

    /// Page through brews matching `filter`.
    async fn list(&self, filter: BrewFilter, page: PageRequest) -> Result<Page<Brew>, Error>;

    /// Page through the brews made in an existing teapot.
    async fn list_for_teapot(
        &self,
        teapot_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<Brew>, Error>;

    /// Page through the steeps of an existing brew.
    async fn list_steeps(&self, brew_id: Uuid, page: PageRequest) -> Result<Page<Steep>, Error>;
}
