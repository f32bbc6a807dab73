use super::*;
use crate::{
    meta::{Meta, Result},
    Error, Maybe, Reply, Value,
};
use proxia_check::{FullGenerator, Generator};

#[test]
fn chain_matches_direct_calls() -> Result {
    let person = Rc::new(Person::new("Boba", 32, Some(company(Some("Kamino City")))));
    let direct = person
        .employer()
        .and_then(|employer| employer.address())
        .map(|address| address.city().to_string());

    let city = Maybe::new(person.clone())
        .invoke("employer", ())?
        .invoke("address", ())?
        .invoke("city", ())?;
    assert!(matches!(city, Reply::Value(Value::String(_))));
    assert_eq!(city.get::<String>(), direct);
    Ok(())
}

#[test]
fn object_results_are_wrapped_again() -> Result {
    let employer = company(None);
    let person = Person::new("Jango", 40, Some(employer.clone()));
    let reply = Maybe::new(person).invoke("employer", ())?;
    assert!(matches!(reply, Reply::Wrapped(_)));
    let back = reply.into_maybe().get::<Rc<Company>>().unwrap();
    assert!(Rc::ptr_eq(&employer, &back));
    Ok(())
}

#[test]
fn raw_results_are_returned_as_is() -> Result {
    for (age, years) in (u32::generator(), 0u32..1000).sample(100) {
        let person = Person::new("Boba", age, None);
        let direct = person.older(years);
        let reply = Maybe::new(person).invoke("older", (years,))?;
        assert!(matches!(reply, Reply::Value(Value::U32(value)) if value == direct));
    }
    Ok(())
}

#[test]
fn arguments_reach_the_method() -> Result {
    for (left, right) in <(i32, i32)>::generator().sample(100) {
        let reply = Maybe::new(Calculator).invoke("add", (left, right))?;
        assert_eq!(reply.unwrap(), Some(Value::I32(Calculator.add(left, right))));
    }
    for other in String::generator().sample(25) {
        let person = Person::new("Boba", 1, None);
        let direct = person.greet(&other);
        let reply = Maybe::new(person).invoke("greet", (other.as_str(),))?;
        assert_eq!(reply.get::<String>(), Some(direct));
    }
    Ok(())
}

#[test]
fn object_arguments_are_shared() -> Result {
    let employer = company(Some("Tipoca"));
    let boba = Rc::new(Person::new("Boba", 10, Some(employer.clone())));
    let jango = Rc::new(Person::new("Jango", 40, Some(employer)));
    let stranger = Rc::new(Person::new("Zam", 30, None));

    let reply = Maybe::new(boba.clone()).invoke("colleague", (jango,))?;
    assert_eq!(reply.get::<bool>(), Some(true));
    let reply = Maybe::new(boba).invoke("colleague", (stranger,))?;
    assert_eq!(reply.get::<bool>(), Some(false));
    Ok(())
}

#[test]
fn absent_results_short_circuit() -> Result {
    let unemployed = Maybe::new(Person::new("Zam", 30, None));
    let employer = unemployed.invoke("employer", ())?;
    assert!(matches!(&employer, Reply::Wrapped(maybe) if maybe.is_absent()));

    let city = employer.invoke("address", ())?.invoke("city", ())?;
    assert!(matches!(city, Reply::Absent));

    let homeless = Maybe::new(Person::new("Boba", 32, Some(company(None))));
    let city = homeless
        .invoke("employer", ())?
        .invoke("address", ())?
        .invoke("city", ())?;
    assert!(city.is_absent());
    assert_eq!(city.unwrap(), None);
    Ok(())
}

#[test]
fn unit_results_are_values() -> Result {
    let reply = Maybe::new(Calculator).invoke("clear", ())?;
    assert!(matches!(reply, Reply::Value(Value::Unit(()))));
    Ok(())
}

#[test]
fn string_results_keep_their_methods() -> Result {
    let person = Maybe::new(Person::new("Boba", 32, None));
    let length = person.invoke("name", ())?.invoke("len", ())?;
    assert_eq!(length.get::<usize>(), Some(4));
    Ok(())
}

#[test]
fn fields_are_not_methods() -> Result {
    let child = Maybe::new(Holder(21)).invoke("child", ())?;
    assert!(matches!(child, Reply::Wrapped(_)));
    assert_eq!(child.invoke("double", ())?.get::<i32>(), Some(42));
    assert_eq!(
        child.invoke("value", ()).err(),
        Some(Error::MissingMethod {
            type_name: "Child",
            name: "value".into()
        })
    );
    Ok(())
}

#[test]
fn raw_values_without_the_method_fail() {
    let reply = Reply::Value(Value::I32(1));
    assert_eq!(
        reply.invoke("len", ()).err(),
        Some(Error::MissingMethod {
            type_name: "i32",
            name: "len".into()
        })
    );
}

#[test]
fn dispatch_errors_propagate() {
    let calculator = Maybe::new(Calculator);
    assert_eq!(
        calculator.invoke("subtract", (1, 2)).err(),
        Some(Error::MissingMethod {
            type_name: "Calculator",
            name: "subtract".into()
        })
    );
    assert_eq!(
        calculator.invoke("add", (1,)).err(),
        Some(Error::WrongArgumentCount {
            name: "add",
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(
        calculator.invoke("add", (1, "two")).err(),
        Some(Error::WrongArgument {
            name: "add",
            index: 1,
            expected: "i32",
            actual: "String"
        })
    );
    assert_eq!(
        calculator.invoke("halve", (true,)).err(),
        Some(Error::WrongArgument {
            name: "halve",
            index: 0,
            expected: "f64",
            actual: "bool"
        })
    );
}

#[test]
fn numbers_convert_between_kinds() -> Result {
    let reply = Maybe::new(Calculator).invoke("halve", (9u8,))?;
    assert_eq!(reply.get::<f64>(), Some(4.5));
    Ok(())
}

#[test]
fn consuming_receivers_are_not_published() {
    assert_eq!(Calculator.reset(), 0);
    let shared = Rc::new(Calculator);
    assert!(Rc::ptr_eq(&shared.clone().share(), &shared));

    let calculator = Maybe::new(shared);
    for name in ["reset", "share"] {
        assert_eq!(
            calculator.invoke(name, ()).err(),
            Some(Error::MissingMethod {
                type_name: "Calculator",
                name: name.into()
            })
        );
    }
}

#[test]
fn parameters_are_described() {
    let add = Calculator::meta().function("add").unwrap();
    let names: Vec<_> = add.parameters.iter().map(|parameter| parameter.name).collect();
    assert_eq!(names, ["left", "right"]);
    for parameter in add.parameters {
        assert_eq!(parameter.meta(), Some(<i32 as Meta>::meta()));
    }

    let colleague = Person::meta().function("colleague").unwrap();
    assert_eq!(colleague.parameters[0].meta(), Some(Person::meta()));
    let greet = Person::meta().function("greet").unwrap();
    assert_eq!(greet.parameters[0].meta().map(|meta| meta.name()), Some("String"));
}
