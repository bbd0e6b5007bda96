//! Driving ports for tea use cases.

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use uuid::Uuid;

use crate::domain::{Error, Tea, TeaFilter, TeaInput};

/// Tea mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeaCommand: Send + Sync {
    /// Create a tea.
    async fn create(&self, input: TeaInput) -> Result<Tea, Error>;

    /// Replace every attribute of an existing tea.
    async fn replace(&self, id: Uuid, input: TeaInput) -> Result<Tea, Error>;

    /// Update the supplied attributes of an existing tea.
    async fn patch(&self, id: Uuid, input: TeaInput) -> Result<Tea, Error>;

    /// Delete a tea.
    async fn delete(&self, id: Uuid) -> Result<(), Error>;
}

/// Tea lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeaQuery: Send + Sync {
    /// Fetch one tea.
    async fn get(&self, id: Uuid) -> Result<Tea, Error>;

    /// Page through teas matching `filter`.
    async fn list(&self, filter: TeaFilter, page: PageRequest) -> Result<Page<Tea>, Error>;
}
