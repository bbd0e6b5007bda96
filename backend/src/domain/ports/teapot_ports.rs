//! Driving ports for teapot use cases.
//!
//! Commands and queries accept raw client input; implementations check
//! existence before validating payloads so a missing teapot is reported
//! ahead of a malformed body.

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use uuid::Uuid;

use crate::domain::{Error, Teapot, TeapotFilter, TeapotInput};

/// Teapot mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeapotCommand: Send + Sync {
    /// Create a teapot.
    async fn create(&self, input: TeapotInput) -> Result<Teapot, Error>;

    /// Replace every attribute of an existing teapot.
    async fn replace(&self, id: Uuid, input: TeapotInput) -> Result<Teapot, Error>;

    /// Update the supplied attributes of an existing teapot.
    async fn patch(&self, id: Uuid, input: TeapotInput) -> Result<Teapot, Error>;

    /// Delete a teapot.
    async fn delete(&self, id: Uuid) -> Result<(), Error>;
}

/// Teapot lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeapotQuery: Send + Sync {
    /// Fetch one teapot.
    async fn get(&self, id: Uuid) -> Result<Teapot, Error>;

    /// Page through teapots matching `filter`.
    async fn list(&self, filter: TeapotFilter, page: PageRequest) -> Result<Page<Teapot>, Error>;
}
