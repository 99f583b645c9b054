//! Collaborator contracts (§4.F, §6).
//!
//! The engine does not read program text, read or write the tag file,
//! or otherwise touch storage — that's explicitly out of scope (§1).
//! These traits are the seam a host application implements; the engine
//! only consumes what they produce (`Program::from_lines`, a populated
//! [`TagStore`]) and only produces what a `TagSink` serializes
//! (`TagStore::iter`).

use crate::error::Error;
use crate::tag::{TagStore, TagType, TagValue};

/// Yields program source lines, file ordering preserved. Rung order in
/// the resulting [`crate::scan::Program`] follows the order lines come
/// back in here.
pub trait ProgramSource {
    fn read_lines(&self) -> Result<Vec<String>, Error>;
}

/// Yields `(name, type, literal)` triples to populate a [`TagStore`]
/// before the first scan. Order is insignificant (§6).
pub trait TagSource {
    fn read_tags(&self) -> Result<Vec<(String, TagType, String)>, Error>;
}

/// Consumes a snapshot of the tag store for persistence. Serialization
/// format is unspecified at this layer (§4.F) — a host picks one and
/// implements accordingly.
pub trait TagSink {
    fn write_tags(&self, tags: &TagStore) -> Result<(), Error>;
}

/// Parse one tag-file literal (`NAME TYPE LITERAL`, §6) into a typed
/// value. Booleans accept `0`/`1` (the reference loader's grammar) or
/// `true`/`false` (a saver may choose to write words instead of
/// digits — the format is saver-defined, so both are accepted here).
pub fn parse_tag_literal(ty: TagType, literal: &str) -> Result<TagValue, Error> {
    let literal = literal.trim();
    match ty {
        TagType::Bool => match literal {
            "1" | "true" => Ok(TagValue::Bool(true)),
            "0" | "false" => Ok(TagValue::Bool(false)),
            _ => Err(Error::MalformedParams {
                opcode: "tag-literal".to_string(),
                params: literal.to_string(),
                reason: "bool literal must be 0, 1, true, or false",
            }),
        },
        TagType::Int => literal.parse::<i64>().map(TagValue::Int).map_err(|_| {
            Error::MalformedParams {
                opcode: "tag-literal".to_string(),
                params: literal.to_string(),
                reason: "int literal failed to parse",
            }
        }),
        TagType::Real => literal.parse::<f64>().map(TagValue::Real).map_err(|_| {
            Error::MalformedParams {
                opcode: "tag-literal".to_string(),
                params: literal.to_string(),
                reason: "real literal failed to parse",
            }
        }),
    }
}

/// Populate a fresh [`TagStore`] from a [`TagSource`]'s triples.
pub fn load_tags<S: TagSource>(source: &S) -> Result<TagStore, Error> {
    let mut store = TagStore::new();
    for (name, ty, literal) in source.read_tags()? {
        let value = parse_tag_literal(ty, &literal)?;
        store.set(&name, value)?;
    }
    Ok(store)
}
