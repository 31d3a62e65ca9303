//! Failures travel with `?` into the caller's error type.

use tripwire::{are_not_null, expensive_is_true, is_true, AssertionFailure, CheckError};

struct Inventory {
    slots: Vec<Option<&'static str>>,
    capacity: usize,
}

impl Inventory {
    fn add(&mut self, item: Option<&'static str>) -> Result<(), AssertionFailure> {
        is_true!(self.slots.len() < self.capacity, "inventory full", context = self.capacity)?;
        are_not_null!([item], "cannot store nothing")?;
        self.slots.push(item);
        Ok(())
    }

    fn audit(&self) -> Result<(), CheckError> {
        expensive_is_true!(|| self.slots.iter().all(Option::is_some), "inventory holds a hole")?;
        Ok(())
    }
}

fn load(inventory: &mut Inventory, items: &[&'static str]) -> anyhow::Result<usize> {
    for item in items {
        inventory.add(Some(*item))?;
    }
    inventory.audit()?;
    Ok(inventory.slots.len())
}

#[test]
fn question_mark_stops_the_checked_path() {
    let mut inventory = Inventory {
        slots: Vec::new(),
        capacity: 1,
    };

    assert!(inventory.add(Some("sword")).is_ok());
    let err = inventory.add(Some("shield")).unwrap_err();
    assert_eq!(err.to_string(), "Context object: 1inventory full");
    assert_eq!(inventory.slots.len(), 1);
}

#[test]
fn failure_converts_into_anyhow() {
    let mut inventory = Inventory {
        slots: Vec::new(),
        capacity: 2,
    };

    assert_eq!(load(&mut inventory, &["a", "b"]).ok(), Some(2));

    let err = load(&mut inventory, &["c"]).unwrap_err();
    let failure = err
        .downcast_ref::<AssertionFailure>()
        .expect("the assertion failure survives the conversion");
    assert_eq!(failure.message(), "inventory full");
}

#[test]
fn audit_failure_is_a_check_error() {
    let inventory = Inventory {
        slots: vec![Some("a"), None],
        capacity: 4,
    };
    let err = inventory.audit().unwrap_err();
    assert!(err.is_failure());
}
