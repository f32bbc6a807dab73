#![deny(unused_variables)]

use proxia::{methods, Maybe, Value};
use std::{error, rc::Rc, result::Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Ship {
    name: String,
    pilot: Option<Rc<Pilot>>,
}

struct Pilot {
    name: String,
    bounty: u32,
    ship: Option<Rc<Ship>>,
}

#[methods]
impl Ship {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pilot(&self) -> Option<Rc<Pilot>> {
        self.pilot.clone()
    }
}

#[methods]
impl Pilot {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounty(&self) -> u32 {
        self.bounty
    }

    pub fn raise(&self, amount: u32) -> u32 {
        self.bounty.saturating_add(amount)
    }

    pub fn ship(&self) -> Option<Rc<Ship>> {
        self.ship.clone()
    }
}

/// Used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn main() -> Result<(), Box<dyn error::Error>> {
    tracing_subscriber::fmt().with_env_filter(filter()).init();

    let boba = Rc::new(Pilot {
        name: "Boba".into(),
        bounty: 100_000,
        ship: Some(Rc::new(Ship {
            name: "Slave I".into(),
            pilot: None,
        })),
    });
    let derelict = Ship {
        name: "Derelict".into(),
        pilot: None,
    };

    let ship = Maybe::new(boba.clone()).invoke("ship", ())?.invoke("name", ())?;
    info!(ship = ?ship.get::<String>(), "piloted by boba");

    let bounty = Maybe::new(boba).invoke("raise", (25_000u32,))?;
    info!(bounty = ?bounty.get::<u32>(), "raised");

    // Nobody flies the derelict, so the chain stops at 'pilot'.
    let silent = Maybe::new(Ship {
        name: "Derelict".into(),
        pilot: None,
    });
    let name = silent.invoke("pilot", ())?.invoke("name", ())?;
    info!(absent = name.is_absent(), "derelict pilot");

    let loud = Maybe::with(derelict, |name: &str, arguments: &[Value]| {
        Some(Value::from(format!("no pilot to call '{}' on with {} arguments", name, arguments.len())))
    });
    let bounty = loud.invoke("pilot", ())?.invoke("raise", (1u32,))?;
    info!(reply = ?bounty.get::<String>(), "derelict bounty");
    Ok(())
}
