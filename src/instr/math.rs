//! `ADD`/`SUB`: two-operand arithmetic, gated by `current`.
//!
//! Neither instruction promotes between `Int` and `Real`; a mixed-type
//! operand pair is a `TypeMismatch`, not a silent coercion — the spec is
//! explicit that this would break `EQU`'s rounded-real equality.

use crate::error::Error;
use crate::instr::fixed_params;
use crate::tag::{TagStore, TagValue};

fn numeric_op(
    opcode: &'static str,
    a: TagValue,
    b: TagValue,
    int_op: impl Fn(i64, i64) -> i64,
    real_op: impl Fn(f64, f64) -> f64,
) -> Result<TagValue, Error> {
    match (a, b) {
        (TagValue::Int(x), TagValue::Int(y)) => Ok(TagValue::Int(int_op(x, y))),
        (TagValue::Real(x), TagValue::Real(y)) => Ok(TagValue::Real(real_op(x, y))),
        _ => Err(Error::TypeMismatch {
            name: format!("{opcode} operands"),
            expected: a.tag_type(),
            found: b.tag_type(),
        }),
    }
}

/// `ADD a,b,c`: if `current`, `c := a + b`.
pub fn add(params: &str, current: bool, tags: &mut TagStore) -> Result<(), Error> {
    let [a, b, c] = fixed_params::<3>("ADD", params)?;
    if !current {
        return Ok(());
    }
    let result = numeric_op("ADD", tags.get_numeric(a)?, tags.get_numeric(b)?, |x, y| x + y, |x, y| x + y)?;
    tags.set(c, result)
}

/// `SUB a,b,c`: if `current`, `c := a - b`.
pub fn sub(params: &str, current: bool, tags: &mut TagStore) -> Result<(), Error> {
    let [a, b, c] = fixed_params::<3>("SUB", params)?;
    if !current {
        return Ok(());
    }
    let result = numeric_op("SUB", tags.get_numeric(a)?, tags.get_numeric(b)?, |x, y| x - y, |x, y| x - y)?;
    tags.set(c, result)
}
