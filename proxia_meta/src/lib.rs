pub mod error;
pub mod function;
pub mod meta;
pub mod primitive;
pub mod structure;
pub mod value;

pub use self::{
    error::{Error, Result},
    function::{Arguments, Function, IntoArguments, Parameter},
    meta::{Data, Index, Meta, Object},
    primitive::Primitive,
    structure::Structure,
    value::{FromValue, IntoValue, Value},
};
