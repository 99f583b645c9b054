//! Turns a line of rung text into raw tokens.
//!
//! A rung line looks like `12 XIC[Start] XIC[Run] OTE[Motor]`: a leading
//! rung number, then whitespace-separated instructions of the form
//! `OOO[params]` — a three-letter opcode followed by its parameters
//! inside a single bracket pair. Lines that don't start with a digit
//! (blank lines, comments) are not rungs and are skipped by the caller.

use crate::error::Error;

/// One instruction as lexed from a rung, before any semantic checking.
#[derive(Debug, Clone, PartialEq)]
pub struct RawToken {
    pub opcode: String,
    pub params: String,
}

/// Split a rung's parameter list on commas. Ladder instructions never
/// nest brackets inside their params, so this is all the splitting
/// `ADD[A,B,C]`-style opcodes need.
pub fn split_params(params: &str) -> Vec<&str> {
    if params.is_empty() {
        Vec::new()
    } else {
        params.split(',').collect()
    }
}

/// Lex one field of the form `OOO` or `OOO[params]` into a [`RawToken`].
///
/// The opcode is always the first three characters. A bare three-letter
/// field (no brackets at all) is a valid token with empty params — the
/// shape the no-argument opcodes (`END`, `BST`, `NXB`, `BND`, `AFI`) take
/// in the wild, alongside the equally valid `END[]` spelling. Anything
/// else shorter than `OOO[]` (5 characters) is malformed.
fn lex_field(field: &str) -> Result<RawToken, Error> {
    let chars: Vec<char> = field.chars().collect();
    if chars.len() == 3 {
        return Ok(RawToken {
            opcode: chars.into_iter().collect(),
            params: String::new(),
        });
    }
    if chars.len() < 5 {
        return Err(Error::MalformedToken {
            token: field.to_string(),
            reason: "too short to be OPC[params]",
        });
    }
    if chars[3] != '[' || chars[chars.len() - 1] != ']' {
        return Err(Error::MalformedToken {
            token: field.to_string(),
            reason: "missing '[' at position 3 or trailing ']'",
        });
    }
    let opcode: String = chars[0..3].iter().collect();
    let params: String = chars[4..chars.len() - 1].iter().collect();
    Ok(RawToken { opcode, params })
}

/// Outcome of tokenizing one instruction field: either a good token, or
/// a field that failed to lex (carried along so the caller can turn it
/// into a diagnostic rather than losing it silently).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    Ok(RawToken),
    Err { field: String, source: Error },
}

/// Tokenize one line of rung text.
///
/// Returns `None` if the line doesn't start with an ASCII digit — such
/// lines are not rungs (blank lines, comments) and the caller should
/// skip them. The rung number itself is parsed only for diagnostic
/// display; it plays no role in execution order, which follows the
/// order rungs appear in the program.
pub fn tokenize_rung(line: &str) -> Option<(u32, Vec<FieldOutcome>)> {
    let trimmed = line.trim();
    let first = trimmed.chars().next()?;
    if !first.is_ascii_digit() {
        return None;
    }

    let mut fields = trimmed.split_whitespace();
    let rung_number = fields.next()?.parse::<u32>().unwrap_or(0);

    let outcomes = fields
        .map(|field| match lex_field(field) {
            Ok(token) => FieldOutcome::Ok(token),
            Err(source) => FieldOutcome::Err {
                field: field.to_string(),
                source,
            },
        })
        .collect();

    Some((rung_number, outcomes))
}
