use crate::{
    error::{Error, Result},
    meta::{Data, Meta, Object},
    structure::Structure,
};
use std::{any::Any, fmt, ops::Deref, rc::Rc};
use tracing::trace;

#[derive(Clone)]
pub enum Value {
    Unit(()),
    Bool(bool),
    Char(char),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    U128(u128),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    I128(i128),
    F32(f32),
    F64(f64),
    String(String),
    Structure(Rc<dyn Any>, &'static Structure),
}

/// Conversion into a dynamic value. `None` stands for an absent value.
pub trait IntoValue {
    fn into_value(self) -> Option<Value>;
}

/// Conversion out of a dynamic value. On mismatch, the value is handed back untouched.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> std::result::Result<Self, Value>;

    #[inline]
    fn meta() -> Option<Data> {
        None
    }
}

impl Value {
    #[inline]
    pub fn object<T: Object>(value: T) -> Self {
        Self::Structure(Rc::new(value), T::structure())
    }

    pub fn meta(&self) -> Data {
        match self {
            Self::Unit(_) => <() as Meta>::meta(),
            Self::Bool(_) => <bool as Meta>::meta(),
            Self::Char(_) => <char as Meta>::meta(),
            Self::U8(_) => <u8 as Meta>::meta(),
            Self::U16(_) => <u16 as Meta>::meta(),
            Self::U32(_) => <u32 as Meta>::meta(),
            Self::U64(_) => <u64 as Meta>::meta(),
            Self::Usize(_) => <usize as Meta>::meta(),
            Self::U128(_) => <u128 as Meta>::meta(),
            Self::I8(_) => <i8 as Meta>::meta(),
            Self::I16(_) => <i16 as Meta>::meta(),
            Self::I32(_) => <i32 as Meta>::meta(),
            Self::I64(_) => <i64 as Meta>::meta(),
            Self::Isize(_) => <isize as Meta>::meta(),
            Self::I128(_) => <i128 as Meta>::meta(),
            Self::F32(_) => <f32 as Meta>::meta(),
            Self::F64(_) => <f64 as Meta>::meta(),
            Self::String(_) => <String as Meta>::meta(),
            Self::Structure(_, structure) => Data::Structure(*structure),
        }
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.meta().name()
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Structure(..))
    }

    #[inline]
    pub fn downcast<T: FromValue>(self) -> std::result::Result<T, Self> {
        T::from_value(self)
    }

    #[inline]
    pub fn cast_ref<T: 'static>(&self) -> Option<&T> {
        (**self).downcast_ref()
    }

    /// Identity for objects, equality for everything else.
    #[inline]
    pub fn same(&self, other: &Self) -> bool {
        self == other
    }

    /// Looks `name` up in this value's method table and calls it.
    pub fn invoke(&self, name: &str, arguments: Vec<Value>) -> Result<Option<Value>> {
        let meta = self.meta();
        let function = meta.function(name).ok_or_else(|| Error::MissingMethod {
            type_name: meta.name(),
            name: name.into(),
        })?;
        trace!(
            type_name = meta.name(),
            method = name,
            arguments = arguments.len(),
            "invoking method"
        );
        function.invoke(self, arguments)
    }
}

impl Deref for Value {
    type Target = dyn Any;

    #[inline]
    fn deref(&self) -> &Self::Target {
        match self {
            Value::Unit(value) => value,
            Value::Bool(value) => value,
            Value::Char(value) => value,
            Value::U8(value) => value,
            Value::U16(value) => value,
            Value::U32(value) => value,
            Value::U64(value) => value,
            Value::Usize(value) => value,
            Value::U128(value) => value,
            Value::I8(value) => value,
            Value::I16(value) => value,
            Value::I32(value) => value,
            Value::I64(value) => value,
            Value::Isize(value) => value,
            Value::I128(value) => value,
            Value::F32(value) => value,
            Value::F64(value) => value,
            Value::String(value) => value,
            Value::Structure(value, _) => &**value,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit(_), Value::Unit(_)) => true,
            (Value::Bool(left), Value::Bool(right)) => left == right,
            (Value::Char(left), Value::Char(right)) => left == right,
            (Value::U8(left), Value::U8(right)) => left == right,
            (Value::U16(left), Value::U16(right)) => left == right,
            (Value::U32(left), Value::U32(right)) => left == right,
            (Value::U64(left), Value::U64(right)) => left == right,
            (Value::Usize(left), Value::Usize(right)) => left == right,
            (Value::U128(left), Value::U128(right)) => left == right,
            (Value::I8(left), Value::I8(right)) => left == right,
            (Value::I16(left), Value::I16(right)) => left == right,
            (Value::I32(left), Value::I32(right)) => left == right,
            (Value::I64(left), Value::I64(right)) => left == right,
            (Value::Isize(left), Value::Isize(right)) => left == right,
            (Value::I128(left), Value::I128(right)) => left == right,
            (Value::F32(left), Value::F32(right)) => left == right,
            (Value::F64(left), Value::F64(right)) => left == right,
            (Value::String(left), Value::String(right)) => left == right,
            // Data pointers only.
            (Value::Structure(left, _), Value::Structure(right, _)) => {
                Rc::as_ptr(left) as *const () == Rc::as_ptr(right) as *const ()
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit(value) => f.debug_tuple("Unit").field(value).finish(),
            Value::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Value::Char(value) => f.debug_tuple("Char").field(value).finish(),
            Value::U8(value) => f.debug_tuple("U8").field(value).finish(),
            Value::U16(value) => f.debug_tuple("U16").field(value).finish(),
            Value::U32(value) => f.debug_tuple("U32").field(value).finish(),
            Value::U64(value) => f.debug_tuple("U64").field(value).finish(),
            Value::Usize(value) => f.debug_tuple("Usize").field(value).finish(),
            Value::U128(value) => f.debug_tuple("U128").field(value).finish(),
            Value::I8(value) => f.debug_tuple("I8").field(value).finish(),
            Value::I16(value) => f.debug_tuple("I16").field(value).finish(),
            Value::I32(value) => f.debug_tuple("I32").field(value).finish(),
            Value::I64(value) => f.debug_tuple("I64").field(value).finish(),
            Value::Isize(value) => f.debug_tuple("Isize").field(value).finish(),
            Value::I128(value) => f.debug_tuple("I128").field(value).finish(),
            Value::F32(value) => f.debug_tuple("F32").field(value).finish(),
            Value::F64(value) => f.debug_tuple("F64").field(value).finish(),
            Value::String(value) => f.debug_tuple("String").field(value).finish(),
            Value::Structure(value, structure) => f
                .debug_tuple("Structure")
                .field(&structure.name)
                .field(&Rc::as_ptr(value))
                .finish(),
        }
    }
}

impl IntoValue for Value {
    #[inline]
    fn into_value(self) -> Option<Value> {
        Some(self)
    }
}

impl FromValue for Value {
    #[inline]
    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        Ok(value)
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    #[inline]
    fn into_value(self) -> Option<Value> {
        self.and_then(IntoValue::into_value)
    }
}

impl<T: Object> Meta for Rc<T> {
    #[inline]
    fn meta() -> Data {
        T::meta()
    }
}

impl<T: Object> From<Rc<T>> for Value {
    #[inline]
    fn from(value: Rc<T>) -> Self {
        Value::Structure(value, T::structure())
    }
}

impl<T: Object> IntoValue for Rc<T> {
    #[inline]
    fn into_value(self) -> Option<Value> {
        Some(self.into())
    }
}

impl<T: Object> FromValue for Rc<T> {
    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Structure(instance, structure) => instance
                .downcast()
                .map_err(|instance| Value::Structure(instance, structure)),
            value => Err(value),
        }
    }

    #[inline]
    fn meta() -> Option<Data> {
        Some(T::meta())
    }
}
