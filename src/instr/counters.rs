//! `CTU`/`CTD`: up/down counters.
//!
//! Counters have no engine-owned state (§3 I4): the rising/falling edge
//! they detect is recovered from the control bit `CT`, which the
//! instruction itself maintains as a one-scan memory of `current`.

use crate::error::Error;
use crate::instr::fixed_params;
use crate::tag::{TagStore, TagValue};

/// `CTU PRE,ACC,CT,DN`: counts up on each rising edge of `current`.
pub fn ctu(params: &str, current: bool, tags: &mut TagStore) -> Result<(), Error> {
    let [pre, acc, ct, dn] = fixed_params::<4>("CTU", params)?;
    let pre_value = tags.get_int(pre)?;
    let mut acc_value = tags.get_int(acc)?;
    let ct_value = tags.get_bool(ct)?;

    if current && !ct_value {
        acc_value += 1;
        tags.set(ct, TagValue::Bool(true))?;
    } else if !current {
        tags.set(ct, TagValue::Bool(false))?;
    }

    tags.set(acc, TagValue::Int(acc_value))?;
    tags.set(dn, TagValue::Bool(acc_value >= pre_value))
}

/// `CTD PRE,ACC,CT,DN`: counts down on each falling edge of `current`.
pub fn ctd(params: &str, current: bool, tags: &mut TagStore) -> Result<(), Error> {
    let [pre, acc, ct, dn] = fixed_params::<4>("CTD", params)?;
    let _pre_value = tags.get_int(pre)?;
    let mut acc_value = tags.get_int(acc)?;
    let ct_value = tags.get_bool(ct)?;

    if !current && ct_value {
        acc_value -= 1;
        tags.set(ct, TagValue::Bool(false))?;
    } else if current {
        tags.set(ct, TagValue::Bool(true))?;
    }

    tags.set(acc, TagValue::Int(acc_value))?;
    tags.set(dn, TagValue::Bool(acc_value <= 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter_tags(pre: i64, acc: i64) -> TagStore {
        let mut tags = TagStore::new();
        tags.set("PRE", TagValue::Int(pre)).unwrap();
        tags.set("ACC", TagValue::Int(acc)).unwrap();
        tags.set("CT", TagValue::Bool(false)).unwrap();
        tags.set("DN", TagValue::Bool(false)).unwrap();
        tags
    }

    #[test]
    fn ctu_rising_edge_sequence_does_not_double_count() {
        // Scenario 5: In toggles F,T,T,F,T -> ACC progression 0,1,1,1,2.
        let mut tags = counter_tags(2, 0);
        let sequence = [false, true, true, false, true];
        let expected_acc = [0, 1, 1, 1, 2];
        for (input, expected) in sequence.iter().zip(expected_acc.iter()) {
            ctu("PRE,ACC,CT,DN", *input, &mut tags).unwrap();
            assert_eq!(tags.get_int("ACC").unwrap(), *expected);
        }
        assert!(tags.get_bool("DN").unwrap());
    }

    #[test]
    fn ctu_dn_set_when_acc_reaches_pre() {
        let mut tags = counter_tags(1, 0);
        ctu("PRE,ACC,CT,DN", true, &mut tags).unwrap();
        assert_eq!(tags.get_int("ACC").unwrap(), 1);
        assert!(tags.get_bool("DN").unwrap());
    }

    #[test]
    fn ctd_falling_edge_decrements() {
        let mut tags = counter_tags(0, 2);
        tags.set("CT", TagValue::Bool(true)).unwrap();
        ctd("PRE,ACC,CT,DN", false, &mut tags).unwrap();
        assert_eq!(tags.get_int("ACC").unwrap(), 1);
        assert!(!tags.get_bool("DN").unwrap());
        ctd("PRE,ACC,CT,DN", true, &mut tags).unwrap();
        ctd("PRE,ACC,CT,DN", false, &mut tags).unwrap();
        assert_eq!(tags.get_int("ACC").unwrap(), 0);
        assert!(tags.get_bool("DN").unwrap());
    }
}
