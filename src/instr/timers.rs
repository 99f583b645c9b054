//! `TON`/`TOF`: on-delay and off-delay timers.
//!
//! Timer state lives entirely in the four tags named by the program
//! (§3 I4); `scan_time_us` — the previous scan's measured duration — is
//! the only value the engine itself supplies.

use crate::error::Error;
use crate::instr::fixed_params;
use crate::tag::{TagStore, TagValue};

/// `TON DN,TT,PRE,ACC`: accumulates while `current`, clamps at `PRE`.
pub fn ton(params: &str, current: bool, tags: &mut TagStore, scan_time_us: u64) -> Result<(), Error> {
    let [dn, tt, pre, acc] = fixed_params::<4>("TON", params)?;
    let pre_value = tags.get_int(pre)?;
    let mut acc_value = tags.get_int(acc)?;

    if current {
        tags.set(tt, TagValue::Bool(true))?;
        acc_value += scan_time_us as i64;
        if acc_value >= pre_value {
            acc_value = pre_value;
            tags.set(dn, TagValue::Bool(true))?;
            tags.set(tt, TagValue::Bool(false))?;
        } else {
            tags.set(dn, TagValue::Bool(false))?;
        }
    } else {
        acc_value = 0;
        tags.set(tt, TagValue::Bool(false))?;
        tags.set(dn, TagValue::Bool(false))?;
    }

    tags.set(acc, TagValue::Int(acc_value))
}

/// `TOF DN,TT,PRE,ACC`: accumulates while `NOT current`, clamps at `PRE`.
pub fn tof(params: &str, current: bool, tags: &mut TagStore, scan_time_us: u64) -> Result<(), Error> {
    let [dn, tt, pre, acc] = fixed_params::<4>("TOF", params)?;
    let pre_value = tags.get_int(pre)?;
    let mut acc_value = tags.get_int(acc)?;

    if !current {
        tags.set(tt, TagValue::Bool(true))?;
        acc_value += scan_time_us as i64;
        if acc_value >= pre_value {
            acc_value = pre_value;
            tags.set(dn, TagValue::Bool(false))?;
            tags.set(tt, TagValue::Bool(false))?;
        } else {
            tags.set(dn, TagValue::Bool(true))?;
        }
    } else {
        acc_value = 0;
        tags.set(tt, TagValue::Bool(false))?;
        tags.set(dn, TagValue::Bool(true))?;
    }

    tags.set(acc, TagValue::Int(acc_value))
}
