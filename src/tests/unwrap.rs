use super::*;
use crate::{meta::Result, Maybe, Reply, Value};
use proxia_check::{FullGenerator, Generator};

#[test]
fn unwrap_returns_the_same_instance() {
    let employer = company(Some("Kamino City"));
    let maybe = Maybe::new(employer.clone());
    let value = maybe.unwrap().unwrap();
    assert!(value.same(&Value::from(employer.clone())));
    let back = value.downcast::<Rc<Company>>().ok().unwrap();
    assert!(Rc::ptr_eq(&employer, &back));
}

#[test]
fn unwrap_returns_raw_values() {
    for value in <(i64, String)>::generator().sample(100) {
        assert_eq!(Maybe::new(value.0).unwrap(), Some(Value::I64(value.0)));
        assert_eq!(Maybe::new(value.1.clone()).get::<String>(), Some(value.1));
    }
}

#[test]
fn absent_unwraps_to_nothing() {
    assert_eq!(Maybe::absent().unwrap(), None);
    assert_eq!(Maybe::new(None::<i32>).unwrap(), None);
    assert_eq!(Maybe::from(None).unwrap(), None);
}

#[test]
fn unwrap_or_else_only_falls_back_when_absent() {
    let fallback = Maybe::absent().unwrap_or_else(|| Some(Value::from("fallback")));
    assert_eq!(fallback, Some(Value::from("fallback")));

    let present = Maybe::new(7u8).unwrap_or_else(|| unreachable!());
    assert_eq!(present, Some(Value::U8(7)));
}

#[test]
fn presence_follows_construction() {
    for (present, value) in <(bool, i16)>::generator().sample(200) {
        let value = if present { Some(value) } else { None };
        let maybe = Maybe::new(value);
        assert_eq!(maybe.is_absent(), value.is_none());
        assert_eq!(maybe.is_present(), value.is_some());
        assert_eq!(maybe.get::<i16>(), value);
    }
}

#[test]
fn typed_access_rejects_other_types() {
    let maybe = Maybe::new(Person::new("Boba", 32, None));
    assert!(maybe.get::<Rc<Person>>().is_some());
    assert!(maybe.get::<Rc<Company>>().is_none());
    assert!(maybe.get::<String>().is_none());
    assert!(maybe.value().map_or(false, Value::is_object));
}

#[test]
fn replies_unwrap_to_their_value() -> Result {
    let person = Maybe::new(Person::new("Boba", 32, None));
    assert_eq!(person.invoke("age", ())?.unwrap(), Some(Value::U32(32)));
    assert_eq!(person.invoke("employer", ())?.unwrap(), None);
    assert_eq!(Reply::Absent.unwrap(), None);
    assert_eq!(Reply::Handled(Some(Value::Bool(true))).get::<bool>(), Some(true));

    let maybe = Reply::Value(Value::from("fett")).into_maybe();
    assert!(maybe.is_present());
    assert!(!maybe.has_on_absent());
    assert!(Reply::Absent.into_maybe().is_absent());
    Ok(())
}
