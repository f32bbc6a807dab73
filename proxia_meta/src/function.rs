use crate::{
    error::{Error, Result},
    meta::Data,
    value::{FromValue, Value},
};
use std::{any::type_name, vec};

pub struct Function {
    pub name: &'static str,
    pub parameters: &'static [Parameter],
    pub invoke: fn(&Value, &mut Arguments) -> Result<Option<Value>>,
}

pub struct Parameter {
    pub name: &'static str,
    pub meta: fn() -> Option<Data>,
}

/// Positional arguments of a single invocation, consumed in declaration order.
pub struct Arguments {
    name: &'static str,
    index: usize,
    values: vec::IntoIter<Value>,
}

pub trait IntoArguments {
    fn into_arguments(self) -> Vec<Value>;
}

impl Function {
    pub fn invoke(&self, instance: &Value, arguments: Vec<Value>) -> Result<Option<Value>> {
        if arguments.len() != self.parameters.len() {
            return Err(Error::WrongArgumentCount {
                name: self.name,
                expected: self.parameters.len(),
                actual: arguments.len(),
            });
        }

        let mut arguments = Arguments {
            name: self.name,
            index: 0,
            values: arguments.into_iter(),
        };
        (self.invoke)(instance, &mut arguments)
    }
}

impl Parameter {
    #[inline]
    pub fn meta(&self) -> Option<Data> {
        (self.meta)()
    }
}

impl Arguments {
    pub fn next<T: FromValue>(&mut self) -> Result<T> {
        let index = self.index;
        let value = self.values.next().ok_or(Error::WrongArgumentCount {
            name: self.name,
            expected: index + 1,
            actual: index,
        })?;
        self.index += 1;
        T::from_value(value).map_err(|value| Error::WrongArgument {
            name: self.name,
            index,
            expected: T::meta().map_or_else(type_name::<T>, |meta| meta.name()),
            actual: value.type_name(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IntoArguments for Vec<Value> {
    #[inline]
    fn into_arguments(self) -> Vec<Value> {
        self
    }
}

impl IntoArguments for &[Value] {
    #[inline]
    fn into_arguments(self) -> Vec<Value> {
        self.to_vec()
    }
}

impl<const N: usize> IntoArguments for [Value; N] {
    #[inline]
    fn into_arguments(self) -> Vec<Value> {
        self.into()
    }
}

macro_rules! tuple {
    ($($p:ident, $t:ident),*) => {
        impl<$($t: Into<Value>,)*> IntoArguments for ($($t,)*) {
            #[inline]
            #[allow(unused_mut)]
            fn into_arguments(self) -> Vec<Value> {
                let ($($p,)*) = self;
                let mut values = Vec::with_capacity(proxia_macro::count!($($p),*));
                $(values.push($p.into());)*
                values
            }
        }
    };
}

proxia_macro::recurse_8!(tuple);
