//! In-memory store backing every repository port.
//!
//! One [`RwLock`] guards all four entity tables: reads share the lock,
//! writes take it exclusively, and no operation performs I/O or calls back
//! into the store while holding it. A panic while the lock is held poisons
//! it; later callers recover the guard and carry on, and the poisoned flag is
//! surfaced through [`InMemoryStore::is_healthy`] for readiness probes.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use pagination::{Page, PageRequest, paginate};
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{
    BrewRepository, ReadinessCheck, SteepRepository, TeaRepository, TeapotRepository,
};
use crate::domain::{Brew, BrewFilter, Steep, Tea, TeaFilter, Teapot, TeapotFilter};

#[derive(Debug, Default)]
struct Tables {
    teapots: HashMap<Uuid, Teapot>,
    teas: HashMap<Uuid, Tea>,
    brews: HashMap<Uuid, Brew>,
    steeps: HashMap<Uuid, Steep>,
}

/// Records listed newest first.
trait Chronological {
    fn id(&self) -> Uuid;
    fn created_at(&self) -> DateTime<Utc>;
}

macro_rules! chronological {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl Chronological for $entity {
                fn id(&self) -> Uuid {
                    self.id
                }

                fn created_at(&self) -> DateTime<Utc> {
                    self.created_at
                }
            }
        )+
    };
}

chronological!(Teapot, Tea, Brew);

/// Newest first; equal timestamps fall back to id so the order is total.
fn newest_first<T: Chronological>(left: &&T, right: &&T) -> Ordering {
    right
        .created_at()
        .cmp(&left.created_at())
        .then_with(|| left.id().cmp(&right.id()))
}

fn select<'a, T, F, O>(
    table: &'a HashMap<Uuid, T>,
    keep: F,
    order: O,
    request: &PageRequest,
) -> Page<T>
where
    T: Clone + 'a,
    F: Fn(&T) -> bool,
    O: FnMut(&&'a T, &&'a T) -> Ordering,
{
    let mut matches: Vec<&T> = table.values().filter(|record| keep(record)).collect();
    matches.sort_by(order);
    paginate(matches, request).map(Clone::clone)
}

/// Shared in-memory tables for teapots, teas, brews and steeps.
///
/// Construct one per server (or per test) and hand clones of an `Arc` to the
/// services; there is no global instance.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every write so far completed without panicking.
    pub fn is_healthy(&self) -> bool {
        !self.tables.is_poisoned()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned store lock for read");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned store lock for write");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl ReadinessCheck for InMemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn is_ok(&self) -> bool {
        self.is_healthy()
    }
}

impl TeapotRepository for InMemoryStore {
    fn create(&self, teapot: Teapot) {
        self.write().teapots.insert(teapot.id, teapot);
    }

    fn find(&self, id: Uuid) -> Option<Teapot> {
        self.read().teapots.get(&id).cloned()
    }

    fn update(&self, teapot: Teapot) {
        self.write().teapots.insert(teapot.id, teapot);
    }

    fn delete(&self, id: Uuid) -> bool {
        self.write().teapots.remove(&id).is_some()
    }

    fn list(&self, filter: &TeapotFilter, page: &PageRequest) -> Page<Teapot> {
        let tables = self.read();
        select(&tables.teapots, |teapot| filter.matches(teapot), newest_first, page)
    }
}

impl TeaRepository for InMemoryStore {
    fn create(&self, tea: Tea) {
        self.write().teas.insert(tea.id, tea);
    }

    fn find(&self, id: Uuid) -> Option<Tea> {
        self.read().teas.get(&id).cloned()
    }

    fn update(&self, tea: Tea) {
        self.write().teas.insert(tea.id, tea);
    }

    fn delete(&self, id: Uuid) -> bool {
        self.write().teas.remove(&id).is_some()
    }

    fn list(&self, filter: &TeaFilter, page: &PageRequest) -> Page<Tea> {
        let tables = self.read();
        select(&tables.teas, |tea| filter.matches(tea), newest_first, page)
    }
}

impl BrewRepository for InMemoryStore {
    fn create(&self, brew: Brew) {
        self.write().brews.insert(brew.id, brew);
    }

    fn find(&self, id: Uuid) -> Option<Brew> {
        self.read().brews.get(&id).cloned()
    }

    fn update(&self, brew: Brew) {
        self.write().brews.insert(brew.id, brew);
    }

    fn delete(&self, id: Uuid) -> bool {
        self.write().brews.remove(&id).is_some()
    }

    fn list(&self, filter: &BrewFilter, page: &PageRequest) -> Page<Brew> {
        let tables = self.read();
        select(&tables.brews, |brew| filter.matches(brew), newest_first, page)
    }
}

impl SteepRepository for InMemoryStore {
    fn append(&self, mut steep: Steep) -> Steep {
        let mut tables = self.write();
        let existing = tables
            .steeps
            .values()
            .filter(|stored| stored.brew_id == steep.brew_id)
            .count();
        steep.steep_number = u32::try_from(existing)
            .unwrap_or(u32::MAX)
            .saturating_add(1);
        tables.steeps.insert(steep.id, steep.clone());
        steep
    }

    fn find(&self, id: Uuid) -> Option<Steep> {
        self.read().steeps.get(&id).cloned()
    }

    fn list_for_brew(&self, brew_id: Uuid, page: &PageRequest) -> Page<Steep> {
        let tables = self.read();
        select(
            &tables.steeps,
            |steep| steep.brew_id == brew_id,
            |left, right| {
                left.steep_number
                    .cmp(&right.steep_number)
                    .then_with(|| left.id.cmp(&right.id))
            },
            page,
        )
    }
}
