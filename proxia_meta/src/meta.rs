use crate::{function::Function, primitive::Primitive, structure::Structure};
use std::{any::TypeId, ops::Deref};

/// Types that can describe themselves at runtime.
pub trait Meta: 'static {
    fn meta() -> Data;
}

/// Reflected user types. Their values travel as [`Value::Structure`](crate::Value::Structure)
/// and are the only values considered object-like.
pub trait Object: Meta {
    fn structure() -> &'static Structure;
}

#[derive(Clone, Copy)]
pub enum Data {
    Primitive(&'static Primitive),
    Structure(&'static Structure),
}

/// A table of named items. The function maps a name to its position in the slice.
pub struct Index<T: 'static>(pub &'static [T], pub fn(&str) -> Option<usize>);

impl Data {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Data::Primitive(primitive) => primitive.name,
            Data::Structure(structure) => structure.name,
        }
    }

    #[inline]
    pub fn identifier(&self) -> TypeId {
        match self {
            Data::Primitive(primitive) => primitive.identifier(),
            Data::Structure(structure) => structure.identifier(),
        }
    }

    #[inline]
    pub fn functions(&self) -> &'static Index<Function> {
        match self {
            Data::Primitive(primitive) => &primitive.functions,
            Data::Structure(structure) => &structure.functions,
        }
    }

    #[inline]
    pub fn function(&self, name: &str) -> Option<&'static Function> {
        self.functions().get(name)
    }
}

impl PartialEq for Data {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
    }
}

impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Data::Primitive(primitive) => f.debug_tuple("Primitive").field(&primitive.name).finish(),
            Data::Structure(structure) => f.debug_tuple("Structure").field(&structure.name).finish(),
        }
    }
}

impl<T: 'static> Index<T> {
    pub const EMPTY: Self = Index(&[], |_| None);

    #[inline]
    pub fn index(&self, name: &str) -> Option<usize> {
        (self.1)(name)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.0.get(self.index(name)?)
    }
}

impl<T: 'static> Deref for Index<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.0
    }
}
