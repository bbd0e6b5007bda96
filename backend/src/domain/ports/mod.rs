//! Domain ports and supporting types for the hexagonal boundary.

mod brew_ports;
mod readiness_check;
mod repositories;
mod tea_ports;
mod teapot_ports;

#[cfg(test)]
pub use brew_ports::{MockBrewCommand, MockBrewQuery};
pub use brew_ports::{BrewCommand, BrewQuery};
#[cfg(test)]
pub use readiness_check::MockReadinessCheck;
pub use readiness_check::ReadinessCheck;
#[cfg(test)]
pub use repositories::{
    MockBrewRepository, MockSteepRepository, MockTeaRepository, MockTeapotRepository,
};
pub use repositories::{BrewRepository, SteepRepository, TeaRepository, TeapotRepository};
#[cfg(test)]
pub use tea_ports::{MockTeaCommand, MockTeaQuery};
pub use tea_ports::{TeaCommand, TeaQuery};
#[cfg(test)]
pub use teapot_ports::{MockTeapotCommand, MockTeapotQuery};
pub use teapot_ports::{TeapotCommand, TeapotQuery};
