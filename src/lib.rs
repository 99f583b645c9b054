//! A soft PLC scan engine for a textual, Allen-Bradley-style ladder
//! logic instruction list.
//!
//! Each call to [`Engine::execute_one_scan`] evaluates every rung of a
//! [`Program`] once against a [`TagStore`], in program order. A rung is
//! a series-with-branches power-flow circuit: contacts (`XIC`/`XIO`)
//! gate power, coils (`OTE`/`OTL`) consume it, and everything else —
//! math, comparisons, counters, timers, edge detectors — both reads and
//! contributes to it under the rules of §4 of the design spec this
//! crate implements.
//!
//! ```
//! use ladderscan::scan::{Engine, Program};
//! use ladderscan::tag::{TagStore, TagValue};
//!
//! let mut tags = TagStore::new();
//! tags.set("Start", TagValue::Bool(true)).unwrap();
//! tags.set("Motor", TagValue::Bool(false)).unwrap();
//!
//! let program = Program::from_lines(["1 XIC[Start] OTE[Motor]"]);
//! let mut engine = Engine::new(program, tags);
//! engine.execute_one_scan();
//! assert_eq!(engine.tags().get_bool("Motor").unwrap(), true);
//! ```
//!
//! Reading program text, reading/writing the tag file, command-line
//! parsing, and scheduling the scan loop are all collaborator concerns
//! (see [`persistence`]) — this crate only evaluates rungs.

pub mod diagnostic;
pub mod error;
pub mod eval;
pub mod instr;
pub mod persistence;
pub mod scan;
pub mod tag;
pub mod token;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use error::{Error, Result};
pub use scan::{Engine, Program, Rung};
pub use tag::{TagStore, TagType, TagValue};
