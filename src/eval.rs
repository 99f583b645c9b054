//! The power-flow evaluator: walks one rung's tokens and turns them into
//! tag-store side effects under series/parallel ("ladder") semantics.
//!
//! `BST`/`NXB`/`BND` are branch primitives handled directly here; every
//! other opcode is dispatched to a handler in [`crate::instr`]. A
//! handler's `Err` is recovered locally — a [`Diagnostic`] is recorded
//! and `current` is left exactly as it was before the token ran.

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::Error;
use crate::instr::{coils, compare, contacts, counters, edge, math, timers};
use crate::instr::fixed_params;
use crate::tag::TagStore;
use crate::token::{FieldOutcome, RawToken};

/// A saved branch frame: the enclosing branch's accumulated OR-result
/// and the series power it had on entry to the branch (§3).
#[derive(Debug, Clone, Copy)]
struct BranchFrame {
    outer_result: bool,
    outer_current: bool,
}

/// Per-rung evaluator state. Constructed fresh for every rung; does not
/// survive past the rung it was built for.
pub struct RungEvaluator {
    current: bool,
    branch_result: bool,
    stack: Vec<BranchFrame>,
}

/// What happened after walking a rung's tokens.
pub struct RungOutcome {
    /// `true` if an `END` token was reached — the caller must stop the
    /// entire scan, not just this rung.
    pub end_hit: bool,
}

impl RungEvaluator {
    pub fn new() -> Self {
        Self {
            current: true,
            branch_result: false,
            stack: Vec::new(),
        }
    }

    fn enter_branch(&mut self) {
        self.stack.push(BranchFrame {
            outer_result: self.branch_result,
            outer_current: self.current,
        });
        self.branch_result = false;
        self.current = true;
    }

    /// `NXB`: closes one parallel path and opens the next. `Err` if
    /// there is no open `BST` (§7 `StackUnderflow`).
    fn next_branch(&mut self) -> Result<(), ()> {
        if self.stack.is_empty() {
            return Err(());
        }
        self.branch_result = self.branch_result || self.current;
        self.current = true;
        Ok(())
    }

    /// `BND`: closes the innermost branch, ANDing its OR'd paths back
    /// into the enclosing series path. `Err` if there is no open `BST`.
    fn exit_branch(&mut self) -> Result<(), ()> {
        let frame = self.stack.pop().ok_or(())?;
        self.branch_result = self.branch_result || self.current;
        self.current = frame.outer_current && self.branch_result;
        self.branch_result = frame.outer_result;
        Ok(())
    }

    /// Dispatch one non-branch opcode. Returns `Ok(true)` if `END` was
    /// hit (the caller stops the whole scan), `Ok(false)` otherwise, or
    /// an `Err` the caller turns into a diagnostic without touching
    /// `current`.
    fn dispatch(&mut self, opcode: &str, params: &str, tags: &mut TagStore, scan_time_us: u64) -> Result<bool, Error> {
        match opcode {
            "END" => return Ok(true),
            "XIC" => contacts::xic(params, &mut self.current, tags)?,
            "XIO" => contacts::xio(params, &mut self.current, tags)?,
            "OTE" => coils::ote(params, self.current, tags)?,
            "OTL" => coils::otl(params, self.current, tags)?,
            "AFI" => coils::afi(params, &mut self.current)?,
            "ADD" => math::add(params, self.current, tags)?,
            "SUB" => math::sub(params, self.current, tags)?,
            "LSS" => compare::lss(params, &mut self.current, tags)?,
            "GTR" => compare::gtr(params, &mut self.current, tags)?,
            "EQU" => compare::equ(params, &mut self.current, tags)?,
            "NEQ" => compare::neq(params, &mut self.current, tags)?,
            "CTU" => counters::ctu(params, self.current, tags)?,
            "CTD" => counters::ctd(params, self.current, tags)?,
            "TON" => timers::ton(params, self.current, tags, scan_time_us)?,
            "TOF" => timers::tof(params, self.current, tags, scan_time_us)?,
            "ONR" => edge::onr(params, &mut self.current, tags)?,
            "ONF" => edge::onf(params, &mut self.current, tags)?,
            _ => unreachable!("unknown opcodes are filtered before dispatch"),
        }
        Ok(false)
    }

    /// Evaluate one rung's already-tokenized fields. `rung_number` is the
    /// rung's source-declared number, carried into `StackUnderflow`
    /// diagnostics; `rung_index` stamps every diagnostic's position.
    pub fn evaluate(
        mut self,
        rung_number: u32,
        rung_index: usize,
        tokens: &[FieldOutcome],
        tags: &mut TagStore,
        scan_time_us: u64,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> RungOutcome {
        const KNOWN_OPCODES: &[&str] = &[
            "END", "BST", "NXB", "BND", "XIC", "XIO", "OTE", "OTL", "AFI", "ADD", "SUB", "LSS",
            "GTR", "EQU", "NEQ", "CTU", "CTD", "TON", "TOF", "ONR", "ONF",
        ];

        for (token_index, outcome) in tokens.iter().enumerate() {
            let RawToken { opcode, params } = match outcome {
                FieldOutcome::Ok(token) => token,
                FieldOutcome::Err { field, source } => {
                    diagnostics.push(Diagnostic::warning(
                        DiagnosticKind::InstructionFailed {
                            opcode: field.clone(),
                            source: source.clone(),
                        },
                        rung_index,
                        token_index,
                    ));
                    continue;
                }
            };

            if !KNOWN_OPCODES.contains(&opcode.as_str()) {
                diagnostics.push(Diagnostic::warning(
                    DiagnosticKind::UnknownOpcode { opcode: opcode.clone() },
                    rung_index,
                    token_index,
                ));
                continue;
            }

            match opcode.as_str() {
                "BST" => {
                    if let Err(source) = fixed_params::<0>("BST", params) {
                        diagnostics.push(Diagnostic::warning(
                            DiagnosticKind::InstructionFailed { opcode: opcode.clone(), source },
                            rung_index,
                            token_index,
                        ));
                        continue;
                    }
                    self.enter_branch();
                }
                "NXB" => {
                    if let Err(source) = fixed_params::<0>("NXB", params) {
                        diagnostics.push(Diagnostic::warning(
                            DiagnosticKind::InstructionFailed { opcode: opcode.clone(), source },
                            rung_index,
                            token_index,
                        ));
                        continue;
                    }
                    if self.next_branch().is_err() {
                        diagnostics.push(Diagnostic::error(
                            DiagnosticKind::UnbalancedBranch {
                                source: Error::StackUnderflow { opcode: "NXB", rung: rung_number },
                            },
                            rung_index,
                            token_index,
                        ));
                        return RungOutcome { end_hit: false };
                    }
                }
                "BND" => {
                    if let Err(source) = fixed_params::<0>("BND", params) {
                        diagnostics.push(Diagnostic::warning(
                            DiagnosticKind::InstructionFailed { opcode: opcode.clone(), source },
                            rung_index,
                            token_index,
                        ));
                        continue;
                    }
                    if self.exit_branch().is_err() {
                        diagnostics.push(Diagnostic::error(
                            DiagnosticKind::UnbalancedBranch {
                                source: Error::StackUnderflow { opcode: "BND", rung: rung_number },
                            },
                            rung_index,
                            token_index,
                        ));
                        return RungOutcome { end_hit: false };
                    }
                }
                _ => match self.dispatch(opcode, params, tags, scan_time_us) {
                    Ok(true) => return RungOutcome { end_hit: true },
                    Ok(false) => {}
                    Err(source) => {
                        diagnostics.push(Diagnostic::warning(
                            DiagnosticKind::InstructionFailed { opcode: opcode.clone(), source },
                            rung_index,
                            token_index,
                        ));
                    }
                },
            }
        }

        RungOutcome { end_hit: false }
    }
}

impl Default for RungEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
