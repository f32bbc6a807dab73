#![deny(unused_variables)]

use crate::methods;
use std::rc::Rc;

pub mod chain;
pub mod unwrap;

pub struct Person {
    name: String,
    age: u32,
    employer: Option<Rc<Company>>,
}

pub struct Company {
    name: String,
    address: Option<Address>,
}

#[derive(Clone)]
pub struct Address {
    city: String,
}

pub struct Calculator;

pub struct Holder(i32);

pub struct Child {
    pub value: i32,
}

#[methods]
impl Person {
    pub fn new(name: &str, age: u32, employer: Option<Rc<Company>>) -> Self {
        Self {
            name: name.into(),
            age,
            employer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn employer(&self) -> Option<Rc<Company>> {
        self.employer.clone()
    }

    pub fn greet(&self, other: &str) -> String {
        format!("{} greets {}", self.name, other)
    }

    pub fn older(&self, years: u32) -> u32 {
        self.age.wrapping_add(years)
    }

    pub fn colleague(&self, other: &Person) -> bool {
        match (&self.employer, &other.employer) {
            (Some(left), Some(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

#[methods]
impl Company {
    pub fn name(&self) -> String {
        self.name.clone()
    }

    pub fn address(&self) -> Option<Address> {
        self.address.clone()
    }
}

#[methods]
impl Address {
    pub fn city(&self) -> &str {
        &self.city
    }
}

#[methods]
impl Calculator {
    pub fn add(&self, left: i32, right: i32) -> i32 {
        left.wrapping_add(right)
    }

    pub fn halve(&self, value: f64) -> f64 {
        value / 2.
    }

    pub fn clear(&self) {}

    pub fn reset(self) -> i32 {
        0
    }

    pub fn share(self: Rc<Self>) -> Rc<Self> {
        self
    }
}

#[methods]
impl Holder {
    pub fn child(&self) -> Child {
        Child { value: self.0 }
    }
}

#[methods]
impl Child {
    pub fn double(&self) -> i32 {
        self.value.wrapping_mul(2)
    }
}

pub fn company(city: Option<&str>) -> Rc<Company> {
    Rc::new(Company {
        name: "Kamino".into(),
        address: city.map(|city| Address { city: city.into() }),
    })
}
