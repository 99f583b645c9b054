//! Per-opcode instruction handlers.
//!
//! Every handler shares one shape: `(params, &mut current, &mut tags,
//! scan_time_us) -> Result<(), Error>`. The evaluator ([`crate::eval`])
//! calls the handler matching a token's opcode, and treats any `Err` as
//! a local failure — the instruction's side effects (including any
//! change to `current`) are discarded, a diagnostic is recorded, and
//! the next token runs with `current` unchanged. Only branch-stack
//! underflow and `END` are handled by the evaluator directly; every
//! opcode here always "succeeds" at the power-flow level even when it
//! reports an error, because the caller rolls `current` back itself.

pub mod coils;
pub mod compare;
pub mod contacts;
pub mod counters;
pub mod edge;
pub mod math;
pub mod timers;

use crate::error::Error;

/// Split `params` on commas into exactly `N` trimmed fields, erroring
/// with `MalformedParams` if the count doesn't match or any field is
/// empty.
pub(crate) fn fixed_params<'a, const N: usize>(
    opcode: &'static str,
    params: &'a str,
) -> Result<[&'a str; N], Error> {
    let fields: Vec<&str> = if params.is_empty() {
        Vec::new()
    } else {
        params.split(',').map(str::trim).collect()
    };
    if fields.len() != N || fields.iter().any(|f| f.is_empty()) {
        return Err(Error::MalformedParams {
            opcode: opcode.to_string(),
            params: params.to_string(),
            reason: "wrong number of arguments, or an empty argument",
        });
    }
    let mut out = [""; N];
    out.copy_from_slice(&fields);
    Ok(out)
}
