//! `XIC`/`XIO`: power-gating contact instructions.
//!
//! Both read a bool tag and AND it (or its negation) into `current`.
//! Neither writes to the tag store.

use crate::error::Error;
use crate::instr::fixed_params;
use crate::tag::TagStore;

/// `XIC a`: `current := current AND a`.
pub fn xic(params: &str, current: &mut bool, tags: &TagStore) -> Result<(), Error> {
    let [name] = fixed_params::<1>("XIC", params)?;
    let value = tags.get_bool(name)?;
    *current = *current && value;
    Ok(())
}

/// `XIO a`: `current := current AND NOT a`.
pub fn xio(params: &str, current: &mut bool, tags: &TagStore) -> Result<(), Error> {
    let [name] = fixed_params::<1>("XIO", params)?;
    let value = tags.get_bool(name)?;
    *current = *current && !value;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagValue;

    #[test]
    fn xic_ands_stored_value() {
        let mut tags = TagStore::new();
        tags.set("A", TagValue::Bool(true)).unwrap();
        let mut current = true;
        xic("A", &mut current, &tags).unwrap();
        assert!(current);

        tags.set("A", TagValue::Bool(false)).unwrap();
        let mut current = true;
        xic("A", &mut current, &tags).unwrap();
        assert!(!current);
    }

    #[test]
    fn xio_ands_negated_value() {
        let mut tags = TagStore::new();
        tags.set("A", TagValue::Bool(false)).unwrap();
        let mut current = true;
        xio("A", &mut current, &tags).unwrap();
        assert!(current);
    }

    #[test]
    fn missing_tag_is_not_found() {
        let tags = TagStore::new();
        let mut current = true;
        let err = xic("Nope", &mut current, &tags).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }
}
