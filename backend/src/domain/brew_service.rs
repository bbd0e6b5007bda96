//! Brew domain service.
//!
//! Brews reach across aggregates: creation checks the referenced teapot and
//! tea, borrows the tea's steeping temperature, and steeps hang off an
//! existing brew.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::{Page, PageRequest};
use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::ports::{
    BrewCommand, BrewQuery, BrewRepository, SteepRepository, TeaRepository, TeapotRepository,
};
use crate::domain::teapot_service::teapot_not_found;
use crate::domain::{
    Brew, BrewDraft, BrewFilter, BrewInput, BrewPatch, BrewPatchInput, Error, Steep, SteepDraft,
    SteepInput,
};

fn brew_not_found() -> Error {
    Error::not_found("Brew not found")
}

fn missing_reference(message: &str, field: &str) -> Error {
    Error::invalid_request(message).with_details(json!({ "field": field, "code": "not_found" }))
}

/// Repositories the brew service reads and writes.
pub struct BrewServicePorts<P, T, B, S> {
    pub teapots: Arc<P>,
    pub teas: Arc<T>,
    pub brews: Arc<B>,
    pub steeps: Arc<S>,
}

/// Brew service implementing the command and query ports.
pub struct BrewService<P, T, B, S> {
    teapots: Arc<P>,
    teas: Arc<T>,
    brews: Arc<B>,
    steeps: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<P, T, B, S> BrewService<P, T, B, S> {
    /// Create a service over `ports`, stamping records with `clock`.
    pub fn new(ports: BrewServicePorts<P, T, B, S>, clock: Arc<dyn Clock>) -> Self {
        let BrewServicePorts {
            teapots,
            teas,
            brews,
            steeps,
        } = ports;
        Self {
            teapots,
            teas,
            brews,
            steeps,
            clock,
        }
    }
}

impl<P, T, B, S> BrewService<P, T, B, S>
where
    B: BrewRepository,
{
    fn existing(&self, id: Uuid) -> Result<Brew, Error> {
        self.brews.find(id).ok_or_else(brew_not_found)
    }
}

#[async_trait]
impl<P, T, B, S> BrewCommand for BrewService<P, T, B, S>
where
    P: TeapotRepository,
    T: TeaRepository,
    B: BrewRepository,
    S: SteepRepository,
{
    async fn create(&self, input: BrewInput) -> Result<Brew, Error> {
        let draft = BrewDraft::parse(input)?;
        if self.teapots.find(draft.teapot_id).is_none() {
            return Err(missing_reference("Teapot not found", "teapotId"));
        }
        let tea = self
            .teas
            .find(draft.tea_id)
            .ok_or_else(|| missing_reference("Tea not found", "teaId"))?;

        let brew = Brew::start(
            Uuid::new_v4(),
            draft,
            tea.steep_temp_celsius,
            self.clock.utc(),
        );
        self.brews.create(brew.clone());
        info!(
            brew_id = %brew.id,
            teapot_id = %brew.teapot_id,
            tea_id = %brew.tea_id,
            "brew started"
        );
        Ok(brew)
    }

    async fn patch(&self, id: Uuid, input: BrewPatchInput) -> Result<Brew, Error> {
        let mut brew = self.existing(id)?;
        brew.apply(BrewPatch::parse(input)?, self.clock.utc());
        self.brews.update(brew.clone());
        debug!(brew_id = %brew.id, status = %brew.status, "brew updated");
        Ok(brew)
    }

    async fn delete(&self, id: Uuid) -> Result<(), Error> {
        if !self.brews.delete(id) {
            return Err(brew_not_found());
        }
        info!(brew_id = %id, "brew deleted");
        Ok(())
    }

    async fn add_steep(&self, brew_id: Uuid, input: SteepInput) -> Result<Steep, Error> {
        self.existing(brew_id)?;
        let draft = SteepDraft::parse(input)?;
        let steep = self.steeps.append(Steep::new(
            Uuid::new_v4(),
            brew_id,
            draft,
            self.clock.utc(),
        ));
        info!(
            brew_id = %brew_id,
            steep_number = steep.steep_number,
            "steep recorded"
        );
        Ok(steep)
    }
}

#[async_trait]
impl<P, T, B, S> BrewQuery for BrewService<P, T, B, S>
where
    P: TeapotRepository,
    T: TeaRepository,
    B: BrewRepository,
    S: SteepRepository,
{
    async fn get(&self, id: Uuid) -> Result<Brew, Error> {
        self.existing(id)
    }

    async fn list(&self, filter: BrewFilter, page: PageRequest) -> Result<Page<Brew>, Error> {
        Ok(self.brews.list(&filter, &page))
    }

    async fn list_for_teapot(
        &self,
        teapot_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<Brew>, Error> {
        if self.teapots.find(teapot_id).is_none() {
            return Err(teapot_not_found());
        }
        Ok(self.brews.list(&BrewFilter::for_teapot(teapot_id), &page))
    }

    async fn list_steeps(&self, brew_id: Uuid, page: PageRequest) -> Result<Page<Steep>, Error> {
        self.existing(brew_id)?;
        Ok(self.steeps.list_for_brew(brew_id, &page))
    }
}

#[cfg(test)]
#[path = "brew_service_tests.rs"]
mod tests;
