//! `OTE`/`OTL`/`AFI`: coil and latch output instructions.
//!
//! Coils never gate `current` on the way out (they're the end of a power
//! path, not a link in it) — except `AFI`, which unconditionally forces
//! the rung dead from that point on.

use crate::error::Error;
use crate::instr::fixed_params;
use crate::tag::{TagStore, TagValue};

/// `OTE a`: `a := current`, written every scan regardless of `current`'s
/// value — this is what distinguishes a coil from a latch.
pub fn ote(params: &str, current: bool, tags: &mut TagStore) -> Result<(), Error> {
    let [name] = fixed_params::<1>("OTE", params)?;
    tags.set(name, TagValue::Bool(current))
}

/// `OTL a`: set `a` true when `current`; never clears it. Only an
/// external write (outside the engine) can reset a latched coil.
pub fn otl(params: &str, current: bool, tags: &mut TagStore) -> Result<(), Error> {
    let [name] = fixed_params::<1>("OTL", params)?;
    if current {
        tags.set(name, TagValue::Bool(true))?;
    }
    Ok(())
}

/// `AFI`: unconditionally clears `current`. Takes no parameters.
pub fn afi(params: &str, current: &mut bool) -> Result<(), Error> {
    fixed_params::<0>("AFI", params)?;
    *current = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ote_always_writes_current() {
        let mut tags = TagStore::new();
        ote("Y", true, &mut tags).unwrap();
        assert_eq!(tags.get_bool("Y").unwrap(), true);
        ote("Y", false, &mut tags).unwrap();
        assert_eq!(tags.get_bool("Y").unwrap(), false);
    }

    #[test]
    fn otl_sets_but_never_clears() {
        let mut tags = TagStore::new();
        tags.set("L", TagValue::Bool(false)).unwrap();
        otl("L", true, &mut tags).unwrap();
        assert_eq!(tags.get_bool("L").unwrap(), true);
        otl("L", false, &mut tags).unwrap();
        assert_eq!(tags.get_bool("L").unwrap(), true);
    }

    #[test]
    fn afi_forces_current_false() {
        let mut current = true;
        afi("", &mut current).unwrap();
        assert!(!current);
    }
}
