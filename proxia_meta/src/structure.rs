use crate::{function::Function, meta::Index};
use std::any::TypeId;

pub struct Structure {
    pub name: &'static str,
    pub identifier: fn() -> TypeId,
    pub functions: Index<Function>,
}

impl Structure {
    #[inline]
    pub fn identifier(&self) -> TypeId {
        (self.identifier)()
    }
}
