//! `LSS`/`GTR`/`EQU`/`NEQ`: two-operand numeric comparisons.
//!
//! Comparisons are contacts, not actions: they always run and always
//! update `current`, even when `current` entered false (ANDing with
//! false just stays false).

use crate::error::Error;
use crate::instr::fixed_params;
use crate::tag::{round_to_two_decimals, TagStore, TagValue};

fn compare(
    opcode: &'static str,
    a: TagValue,
    b: TagValue,
    int_cmp: impl Fn(i64, i64) -> bool,
    real_cmp: impl Fn(f64, f64) -> bool,
) -> Result<bool, Error> {
    match (a, b) {
        (TagValue::Int(x), TagValue::Int(y)) => Ok(int_cmp(x, y)),
        (TagValue::Real(x), TagValue::Real(y)) => Ok(real_cmp(x, y)),
        _ => Err(Error::TypeMismatch {
            name: format!("{opcode} operands"),
            expected: a.tag_type(),
            found: b.tag_type(),
        }),
    }
}

/// `LSS a,b`: `current := current AND (a < b)`.
pub fn lss(params: &str, current: &mut bool, tags: &TagStore) -> Result<(), Error> {
    let [a, b] = fixed_params::<2>("LSS", params)?;
    let result = compare("LSS", tags.get_numeric(a)?, tags.get_numeric(b)?, |x, y| x < y, |x, y| x < y)?;
    *current = *current && result;
    Ok(())
}

/// `GTR a,b`: `current := current AND (a > b)`.
pub fn gtr(params: &str, current: &mut bool, tags: &TagStore) -> Result<(), Error> {
    let [a, b] = fixed_params::<2>("GTR", params)?;
    let result = compare("GTR", tags.get_numeric(a)?, tags.get_numeric(b)?, |x, y| x > y, |x, y| x > y)?;
    *current = *current && result;
    Ok(())
}

/// `EQU a,b`: `current := current AND (a == b)`. Reals are compared
/// after rounding both sides to two decimal places.
pub fn equ(params: &str, current: &mut bool, tags: &TagStore) -> Result<(), Error> {
    let [a, b] = fixed_params::<2>("EQU", params)?;
    let result = compare(
        "EQU",
        tags.get_numeric(a)?,
        tags.get_numeric(b)?,
        |x, y| x == y,
        |x, y| round_to_two_decimals(x) == round_to_two_decimals(y),
    )?;
    *current = *current && result;
    Ok(())
}

/// `NEQ a,b`: `current := current AND (a != b)`, with the same
/// rounded-real comparison as `EQU`.
pub fn neq(params: &str, current: &mut bool, tags: &TagStore) -> Result<(), Error> {
    let [a, b] = fixed_params::<2>("NEQ", params)?;
    let result = compare(
        "NEQ",
        tags.get_numeric(a)?,
        tags.get_numeric(b)?,
        |x, y| x != y,
        |x, y| round_to_two_decimals(x) != round_to_two_decimals(y),
    )?;
    *current = *current && result;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lss_compares_ints() {
        let mut tags = TagStore::new();
        tags.set("A", TagValue::Int(3)).unwrap();
        tags.set("B", TagValue::Int(4)).unwrap();
        let mut current = true;
        lss("A,B", &mut current, &tags).unwrap();
        assert!(current);
    }

    #[test]
    fn gtr_false_stays_anded() {
        let mut tags = TagStore::new();
        tags.set("A", TagValue::Int(3)).unwrap();
        tags.set("B", TagValue::Int(4)).unwrap();
        let mut current = true;
        gtr("A,B", &mut current, &tags).unwrap();
        assert!(!current);
    }

    #[test]
    fn equ_rounds_reals_to_two_decimals() {
        let mut tags = TagStore::new();
        tags.set("A", TagValue::Real(1.001)).unwrap();
        tags.set("B", TagValue::Real(1.004)).unwrap();
        let mut current = true;
        equ("A,B", &mut current, &tags).unwrap();
        assert!(current);
    }

    #[test]
    fn neq_ints() {
        let mut tags = TagStore::new();
        tags.set("A", TagValue::Int(1)).unwrap();
        tags.set("B", TagValue::Int(2)).unwrap();
        let mut current = true;
        neq("A,B", &mut current, &tags).unwrap();
        assert!(current);
    }

    #[test]
    fn comparison_on_false_current_stays_false() {
        let mut tags = TagStore::new();
        tags.set("A", TagValue::Int(3)).unwrap();
        tags.set("B", TagValue::Int(4)).unwrap();
        let mut current = false;
        lss("A,B", &mut current, &tags).unwrap();
        assert!(!current);
    }
}
