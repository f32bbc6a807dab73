use crate::reply::Reply;
use proxia_meta::{FromValue, IntoArguments, IntoValue, Result, Value};
use std::{fmt, rc::Rc};
use tracing::{debug, trace};

/// Called with the method name and its arguments when a method is invoked on an absent value.
pub type Handler = Rc<dyn Fn(&str, &[Value]) -> Option<Value>>;

/// A possibly absent value whose methods can be invoked without checking for presence first.
///
/// When the value is present, calls are forwarded by name and object results come back wrapped
/// so that chains stay safe. When it is absent, calls short-circuit to the absent handler, or to
/// nothing if there is none.
#[derive(Clone, Default)]
pub struct Maybe {
    inner: Option<Value>,
    on_absent: Option<Handler>,
}

impl Maybe {
    #[inline]
    pub fn new(value: impl IntoValue) -> Self {
        Self {
            inner: value.into_value(),
            on_absent: None,
        }
    }

    #[inline]
    pub fn with<F: Fn(&str, &[Value]) -> Option<Value> + 'static>(
        value: impl IntoValue,
        on_absent: F,
    ) -> Self {
        Self::new(value).on_absent(on_absent)
    }

    #[inline]
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn invoke(&self, name: &str, arguments: impl IntoArguments) -> Result<Reply> {
        let value = match &self.inner {
            Some(value) => value,
            None => {
                return Ok(match &self.on_absent {
                    Some(on_absent) => {
                        let arguments = arguments.into_arguments();
                        debug!(method = name, arguments = arguments.len(), "handling absent value");
                        Reply::Handled(on_absent(name, &arguments[..]))
                    }
                    None => {
                        trace!(method = name, "skipping absent value");
                        Reply::Absent
                    }
                })
            }
        };

        Ok(match value.invoke(name, arguments.into_arguments())? {
            Some(result) if result.is_object() => Reply::Wrapped(self.wrap(Some(result))),
            Some(result) => Reply::Value(result),
            None => Reply::Wrapped(self.wrap(None)),
        })
    }

    /// The wrapped value, or the absent sentinel.
    #[inline]
    pub fn unwrap(self) -> Option<Value> {
        self.inner
    }

    /// The wrapped value, or what `fallback` produces when it is absent.
    #[inline]
    pub fn unwrap_or_else<F: FnOnce() -> Option<Value>>(self, fallback: F) -> Option<Value> {
        match self.inner {
            Some(value) => Some(value),
            None => fallback(),
        }
    }

    #[inline]
    pub fn value(&self) -> Option<&Value> {
        self.inner.as_ref()
    }

    #[inline]
    pub fn get<T: FromValue>(&self) -> Option<T> {
        self.inner.clone()?.downcast().ok()
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        self.inner.is_none()
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.inner.is_some()
    }

    /// Replaces the handler used by subsequent calls on this wrapper. Wrappers it has already
    /// produced keep the handler they were created with.
    #[inline]
    pub fn set_on_absent<F: Fn(&str, &[Value]) -> Option<Value> + 'static>(&mut self, on_absent: F) {
        self.on_absent = Some(Rc::new(on_absent));
    }

    #[inline]
    pub fn on_absent<F: Fn(&str, &[Value]) -> Option<Value> + 'static>(mut self, on_absent: F) -> Self {
        self.set_on_absent(on_absent);
        self
    }

    #[inline]
    pub fn clear_on_absent(&mut self) {
        self.on_absent = None;
    }

    #[inline]
    pub fn has_on_absent(&self) -> bool {
        self.on_absent.is_some()
    }

    #[inline]
    fn wrap(&self, inner: Option<Value>) -> Self {
        Self {
            inner,
            on_absent: self.on_absent.clone(),
        }
    }
}

impl From<Option<Value>> for Maybe {
    #[inline]
    fn from(inner: Option<Value>) -> Self {
        Self {
            inner,
            on_absent: None,
        }
    }
}

impl fmt::Debug for Maybe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Maybe")
            .field("inner", &self.inner)
            .field("on_absent", &self.on_absent.is_some())
            .finish()
    }
}
