//! Teapot domain service.
//!
//! Implements the teapot driving ports over a [`TeapotRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::{Page, PageRequest};
use tracing::info;
use uuid::Uuid;

use crate::domain::ports::{TeapotCommand, TeapotQuery, TeapotRepository};
use crate::domain::{Error, Teapot, TeapotDraft, TeapotFilter, TeapotInput, TeapotPatch};

pub(crate) fn teapot_not_found() -> Error {
    Error::not_found("Teapot not found")
}

/// Teapot service implementing the command and query ports.
#[derive(Clone)]
pub struct TeapotService<R> {
    teapots: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> TeapotService<R> {
    /// Create a service over `teapots`, stamping records with `clock`.
    pub fn new(teapots: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { teapots, clock }
    }
}

impl<R> TeapotService<R>
where
    R: TeapotRepository,
{
    fn existing(&self, id: Uuid) -> Result<Teapot, Error> {
        self.teapots.find(id).ok_or_else(teapot_not_found)
    }
}

#[async_trait]
impl<R> TeapotCommand for TeapotService<R>
where
    R: TeapotRepository,
{
    async fn create(&self, input: TeapotInput) -> Result<Teapot, Error> {
        let draft = TeapotDraft::for_create(input)?;
        let teapot = Teapot::create(Uuid::new_v4(), draft, self.clock.utc());
        self.teapots.create(teapot.clone());
        info!(teapot_id = %teapot.id, "teapot created");
        Ok(teapot)
    }

    async fn replace(&self, id: Uuid, input: TeapotInput) -> Result<Teapot, Error> {
        let mut teapot = self.existing(id)?;
        let draft = TeapotDraft::for_replace(input)?;
        teapot.replace(draft, self.clock.utc());
        self.teapots.update(teapot.clone());
        Ok(teapot)
    }

    async fn patch(&self, id: Uuid, input: TeapotInput) -> Result<Teapot, Error> {
        let mut teapot = self.existing(id)?;
        let patch = TeapotPatch::parse(input)?;
        teapot.apply(patch, self.clock.utc());
        self.teapots.update(teapot.clone());
        Ok(teapot)
    }

    async fn delete(&self, id: Uuid) -> Result<(), Error> {
        if !self.teapots.delete(id) {
            return Err(teapot_not_found());
        }
        info!(teapot_id = %id, "teapot deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> TeapotQuery for TeapotService<R>
where
    R: TeapotRepository,
{
    async fn get(&self, id: Uuid) -> Result<Teapot, Error> {
        self.existing(id)
    }

    async fn list(&self, filter: TeapotFilter, page: PageRequest) -> Result<Page<Teapot>, Error> {
        Ok(self.teapots.list(&filter, &page))
    }
}

#[cfg(test)]
#[path = "teapot_service_tests.rs"]
mod tests;
