use crate::{
    error::Error,
    function::Function,
    meta::{Data, Index, Meta},
    value::{FromValue, IntoValue, Value},
};
use std::any::TypeId;

pub struct Primitive {
    pub name: &'static str,
    pub identifier: fn() -> TypeId,
    pub functions: Index<Function>,
}

impl Primitive {
    #[inline]
    pub fn identifier(&self) -> TypeId {
        (self.identifier)()
    }
}

macro_rules! primitive {
    ($t:ty, $k:ident, $f:expr) => {
        impl Meta for $t {
            #[inline]
            fn meta() -> Data {
                static META: Primitive = Primitive {
                    name: stringify!($t),
                    identifier: TypeId::of::<$t>,
                    functions: $f,
                };
                Data::Primitive(&META)
            }
        }

        impl From<$t> for Value {
            #[inline]
            fn from(value: $t) -> Self {
                Value::$k(value)
            }
        }

        impl IntoValue for $t {
            #[inline]
            fn into_value(self) -> Option<Value> {
                Some(Value::$k(self))
            }
        }
    };
}

macro_rules! exact {
    ($t:ty, $k:ident) => {
        impl FromValue for $t {
            #[inline]
            fn from_value(value: Value) -> Result<Self, Value> {
                match value {
                    Value::$k(value) => Ok(value),
                    value => Err(value),
                }
            }

            #[inline]
            fn meta() -> Option<Data> {
                Some(<$t as Meta>::meta())
            }
        }
    };
}

// Numbers convert between each other with 'as' semantics.
macro_rules! number {
    ($($t:ident, $k:ident),*) => {
        $(
            primitive!($t, $k, Index::EMPTY);

            impl FromValue for $t {
                fn from_value(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::U8(value) => Ok(value as $t),
                        Value::U16(value) => Ok(value as $t),
                        Value::U32(value) => Ok(value as $t),
                        Value::U64(value) => Ok(value as $t),
                        Value::Usize(value) => Ok(value as $t),
                        Value::U128(value) => Ok(value as $t),
                        Value::I8(value) => Ok(value as $t),
                        Value::I16(value) => Ok(value as $t),
                        Value::I32(value) => Ok(value as $t),
                        Value::I64(value) => Ok(value as $t),
                        Value::Isize(value) => Ok(value as $t),
                        Value::I128(value) => Ok(value as $t),
                        Value::F32(value) => Ok(value as $t),
                        Value::F64(value) => Ok(value as $t),
                        value => Err(value),
                    }
                }

                #[inline]
                fn meta() -> Option<Data> {
                    Some(<$t as Meta>::meta())
                }
            }
        )*
    };
}

number!(
    u8, U8, u16, U16, u32, U32, u64, U64, usize, Usize, u128, U128, i8, I8, i16, I16, i32, I32,
    i64, I64, isize, Isize, i128, I128, f32, F32, f64, F64
);

primitive!((), Unit, Index::EMPTY);
primitive!(bool, Bool, Index::EMPTY);
primitive!(char, Char, Index::EMPTY);
primitive!(
    String,
    String,
    Index(
        &[
            Function {
                name: "len",
                parameters: &[],
                invoke: |instance, _| Ok(Some(Value::Usize(string(instance)?.len()))),
            },
            Function {
                name: "is_empty",
                parameters: &[],
                invoke: |instance, _| Ok(Some(Value::Bool(string(instance)?.is_empty()))),
            },
        ],
        |name| match name {
            "len" => Some(0),
            "is_empty" => Some(1),
            _ => None,
        },
    )
);

exact!((), Unit);
exact!(bool, Bool);
exact!(char, Char);
exact!(String, String);

impl<'a> From<&'a str> for Value {
    #[inline]
    fn from(value: &'a str) -> Self {
        Value::String(value.into())
    }
}

impl<'a> IntoValue for &'a str {
    #[inline]
    fn into_value(self) -> Option<Value> {
        Some(self.into())
    }
}

fn string(instance: &Value) -> Result<&String, Error> {
    instance.cast_ref().ok_or(Error::WrongInstance {
        expected: "String",
        actual: instance.type_name(),
    })
}
