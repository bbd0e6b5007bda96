//! Tea domain service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::{Page, PageRequest};
use tracing::info;
use uuid::Uuid;

use crate::domain::ports::{TeaCommand, TeaQuery, TeaRepository};
use crate::domain::{Error, Tea, TeaDraft, TeaFilter, TeaInput, TeaPatch};

pub(crate) fn tea_not_found() -> Error {
    Error::not_found("Tea not found")
}

/// Tea service implementing the command and query ports.
#[derive(Clone)]
pub struct TeaService<R> {
    teas: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> TeaService<R> {
    /// Create a service over `teas`, stamping records with `clock`.
    pub fn new(teas: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { teas, clock }
    }
}

impl<R> TeaService<R>
where
    R: TeaRepository,
{
    fn existing(&self, id: Uuid) -> Result<Tea, Error> {
        self.teas.find(id).ok_or_else(tea_not_found)
    }
}

#[async_trait]
impl<R> TeaCommand for TeaService<R>
where
    R: TeaRepository,
{
    async fn create(&self, input: TeaInput) -> Result<Tea, Error> {
        let draft = TeaDraft::for_create(input)?;
        let tea = Tea::create(Uuid::new_v4(), draft, self.clock.utc());
        self.teas.create(tea.clone());
        info!(tea_id = %tea.id, tea_type = %tea.tea_type, "tea created");
        Ok(tea)
    }

    async fn replace(&self, id: Uuid, input: TeaInput) -> Result<Tea, Error> {
        let mut tea = self.existing(id)?;
        tea.replace(TeaDraft::for_replace(input)?, self.clock.utc());
        self.teas.update(tea.clone());
        Ok(tea)
    }

    async fn patch(&self, id: Uuid, input: TeaInput) -> Result<Tea, Error> {
        let mut tea = self.existing(id)?;
        tea.apply(TeaPatch::parse(input)?, self.clock.utc());
        self.teas.update(tea.clone());
        Ok(tea)
    }

    async fn delete(&self, id: Uuid) -> Result<(), Error> {
        if !self.teas.delete(id) {
            return Err(tea_not_found());
        }
        info!(tea_id = %id, "tea deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> TeaQuery for TeaService<R>
where
    R: TeaRepository,
{
    async fn get(&self, id: Uuid) -> Result<Tea, Error> {
        self.existing(id)
    }

    async fn list(&self, filter: TeaFilter, page: PageRequest) -> Result<Page<Tea>, Error> {
        Ok(self.teas.list(&filter, &page))
    }
}

#[cfg(test)]
#[path = "tea_service_tests.rs"]
mod tests;
