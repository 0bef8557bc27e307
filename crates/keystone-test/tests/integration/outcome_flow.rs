//! Outcomes returned through a small call chain.

use std::collections::HashMap;

use keystone_test::component::error::{CoreError, CoreResult};
use keystone_test::component::{Error, Outcome, enumeration, try_outcome};

enumeration! {
    pub struct Role {
        READER = (1, "Reader"),
        WRITER = (2, "Writer"),
    }
}

fn not_found(id: u32) -> CoreResult<Error> {
    Error::with_extensions(
        "Not Found",
        404,
        "The requested account does not exist.",
        [("account_id", id.to_string())],
    )
}

fn find_role(account_id: u32) -> CoreResult<Outcome<Role>> {
    let roles: HashMap<u32, Role> = [(1, Role::READER), (2, Role::WRITER)].into();
    Ok(match roles.get(&account_id) {
        Some(role) => Outcome::with_value(role.clone()),
        None => not_found(account_id)?.into(),
    })
}

fn is_writer(role: Outcome<Role>) -> Outcome<bool> {
    let role = try_outcome!(role);
    Outcome::with_value(role == Role::WRITER)
}

fn can_write(account_id: u32) -> CoreResult<Outcome<bool>> {
    Ok(is_writer(find_role(account_id)?))
}

#[test]
fn success_flows_through() -> Result<(), CoreError> {
    assert_eq!(can_write(2)?.into_value(), Some(true));
    assert_eq!(can_write(1)?.into_value(), Some(false));
    Ok(())
}

#[test]
fn failure_flows_through_unchanged() -> Result<(), CoreError> {
    let outcome = can_write(7)?;
    assert!(outcome.is_failure());
    assert!(outcome.value().is_none());

    let error = outcome.into_error().unwrap();
    assert_eq!(error, not_found(7)?);
    assert_eq!(error.extension("account_id"), Some("7"));
    Ok(())
}

#[test]
fn outcome_bridges_to_question_mark() {
    fn double(value: Outcome<i32>) -> Result<i32, Error> {
        Ok(value.into_result()? * 2)
    }

    assert_eq!(double(Outcome::with_value(4)), Ok(8));
    let error = Error::new("Bad Request", 400, "Odd input.").unwrap();
    assert_eq!(double(error.clone().into()), Err(error));
}
