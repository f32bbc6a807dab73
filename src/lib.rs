extern crate self as proxia;

pub mod maybe;
pub mod reply;

pub use self::{
    maybe::{Handler, Maybe},
    reply::Reply,
};
pub use proxia_meta as meta;
pub use proxia_meta::{Error, FromValue, IntoArguments, IntoValue, Value};
pub use proxia_meta_macro::methods;

#[cfg(test)]
mod tests;
