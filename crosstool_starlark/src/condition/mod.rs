//! Predicate minimization and branch synthesis.
//!
//! Turns the ordered equivalence classes of one field into an
//! [`Assignment`]: a bare assignment when every key agrees, otherwise an
//! `if`/`elif` chain whose predicates use the fewest `cpu`/`compiler`
//! comparisons that still separate the class from the rest of its universe.

use std::collections::BTreeMap;

use tracing::trace;

use crate::model::ToolchainKey;
use crate::partition::EquivalenceClass;
use crate::starlark::{Expr, INDENT, push_indent, quote};

/// The set of keys a merge must cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe<'a> {
    keys: Vec<ToolchainKey<'a>>,
}

impl<'a> Universe<'a> {
    /// Creates a universe from the keys it contains.
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = ToolchainKey<'a>>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Number of keys in the universe sharing `cpu`.
    #[must_use]
    pub fn count_for_cpu(&self, cpu: &str) -> usize {
        self.keys.iter().filter(|key| key.cpu == cpu).count()
    }

    /// Keys in input order.
    #[must_use]
    pub fn keys(&self) -> &[ToolchainKey<'a>] {
        &self.keys
    }
}

/// One disjunct of a branch predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term<'a> {
    /// `ctx.attr.cpu == cpu`.
    Cpu(&'a str),
    /// `ctx.attr.cpu == key.cpu and ctx.attr.compiler == key.compiler`.
    CpuCompiler(ToolchainKey<'a>),
}

impl Term<'_> {
    fn sort_key(&self) -> (&str, &str) {
        match self {
            Self::Cpu(cpu) => (*cpu, ""),
            Self::CpuCompiler(key) => (key.cpu, key.compiler),
        }
    }

    /// Renders the term as a Starlark boolean expression.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Cpu(cpu) => format!("ctx.attr.cpu == {}", quote(cpu)),
            Self::CpuCompiler(key) => format!(
                "ctx.attr.cpu == {} and ctx.attr.compiler == {}",
                quote(key.cpu),
                quote(key.compiler)
            ),
        }
    }
}

/// A disjunction of terms selecting the members of one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate<'a> {
    /// Terms joined with `or`, ordered by `(cpu, compiler)`.
    pub terms: Vec<Term<'a>>,
}

impl<'a> Predicate<'a> {
    /// Builds the minimal predicate for `keys` within `universe`.
    ///
    /// A cpu whose every universe key is a member collapses to a cpu-only
    /// term; otherwise each member key gets a `cpu and compiler` term.
    #[must_use]
    pub fn for_class(keys: &[ToolchainKey<'a>], universe: &Universe<'a>) -> Self {
        let mut by_cpu: BTreeMap<&'a str, Vec<ToolchainKey<'a>>> = BTreeMap::new();
        for key in keys {
            by_cpu.entry(key.cpu).or_default().push(*key);
        }

        let mut terms = Vec::new();
        for (cpu, members) in by_cpu {
            if members.len() == universe.count_for_cpu(cpu) {
                terms.push(Term::Cpu(cpu));
            } else {
                terms.extend(members.into_iter().map(Term::CpuCompiler));
            }
        }
        terms.sort_by(|left, right| left.sort_key().cmp(&right.sort_key()));
        Self { terms }
    }

    fn write(&self, out: &mut String, indent: usize) {
        out.push('(');
        for (position, term) in self.terms.iter().enumerate() {
            if position > 0 {
                out.push('\n');
                push_indent(out, indent + INDENT);
                out.push_str("or ");
            }
            out.push_str(&term.render());
        }
        out.push(')');
    }
}

/// Whether a merge covers its whole universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Every key of the universe defines the value; chains end in
    /// `fail("Unreachable")`.
    Total,
    /// Only some records define the value; chains have no `else`.
    Partial,
}

/// A guarded alternative of a conditional assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch<'a> {
    /// Condition selecting the branch.
    pub predicate: Predicate<'a>,
    /// Value assigned when the condition holds.
    pub value: Expr,
}

/// Right-hand side of a synthesized assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body<'a> {
    /// Every key shares one value.
    Unconditional(Expr),
    /// One branch per equivalence class.
    Conditional {
        /// Branches in partition order.
        branches: Vec<Branch<'a>>,
        /// Whether a `fail("Unreachable")` fallback closes the chain.
        coverage: Coverage,
    },
}

/// A field or declaration assignment inside the generated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<'a> {
    /// Variable being assigned.
    pub target: String,
    /// Value or branch structure.
    pub body: Body<'a>,
}

impl<'a> Assignment<'a> {
    /// Returns `true` when the assignment needs no conditional.
    #[must_use]
    pub const fn is_unconditional(&self) -> bool {
        matches!(self.body, Body::Unconditional(_))
    }

    /// Returns `true` when the chain ends in `fail("Unreachable")`.
    #[must_use]
    pub const fn has_unreachable_fallback(&self) -> bool {
        matches!(
            self.body,
            Body::Conditional {
                coverage: Coverage::Total,
                ..
            }
        )
    }

    /// Branches of a conditional assignment; empty when unconditional.
    #[must_use]
    pub fn branches(&self) -> &[Branch<'a>] {
        match &self.body {
            Body::Unconditional(_) => &[],
            Body::Conditional { branches, .. } => branches,
        }
    }

    /// Renders the statement with its first line indented by `indent`.
    ///
    /// The result ends with a newline.
    #[must_use]
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        match &self.body {
            Body::Unconditional(value) => {
                self.write_line(&mut out, value, indent);
            }
            Body::Conditional { branches, coverage } => {
                for (position, branch) in branches.iter().enumerate() {
                    push_indent(&mut out, indent);
                    out.push_str(if position == 0 { "if " } else { "elif " });
                    branch.predicate.write(&mut out, indent);
                    out.push_str(":\n");
                    self.write_line(&mut out, &branch.value, indent + INDENT);
                }
                if *coverage == Coverage::Total {
                    push_indent(&mut out, indent);
                    out.push_str("else:\n");
                    push_indent(&mut out, indent + INDENT);
                    out.push_str("fail(\"Unreachable\")\n");
                }
            }
        }
        out
    }

    fn write_line(&self, out: &mut String, value: &Expr, indent: usize) {
        push_indent(out, indent);
        out.push_str(&self.target);
        out.push_str(" = ");
        out.push_str(&value.render(indent));
        out.push('\n');
    }
}

/// Synthesizes the assignment of `target` from its equivalence classes.
///
/// A single class yields an unconditional assignment. Otherwise each class
/// becomes a branch in partition order, guarded by its minimal predicate
/// within `universe`.
#[must_use]
pub fn synthesize<'a>(
    target: &str,
    classes: Vec<EquivalenceClass<'a, Expr>>,
    universe: &Universe<'a>,
    coverage: Coverage,
) -> Assignment<'a> {
    let body = match <[EquivalenceClass<'a, Expr>; 1]>::try_from(classes) {
        Ok([only]) => Body::Unconditional(only.value),
        Err(classes) => {
            let branches = classes
                .into_iter()
                .map(|class| {
                    let predicate = Predicate::for_class(&class.keys, universe);
                    trace!(field = target, terms = predicate.terms.len(), "synthesized branch");
                    Branch {
                        predicate,
                        value: class.value,
                    }
                })
                .collect();
            Body::Conditional { branches, coverage }
        }
    };
    Assignment {
        target: target.to_owned(),
        body,
    }
}

#[cfg(test)]
mod tests;
