//! Starlark expression tree and its layout rules.
//!
//! Generated values are built as [`Expr`] trees and rendered on demand. The
//! layout is driven by value counts rather than line width for calls, so
//! the output stays stable when strings change length:
//!
//! - A keyword call stays on one line while its argument weight is at most
//!   two (a scalar weighs one, a list or nested call weighs two) and no
//!   argument spans lines.
//! - A list of composite values stays inline only when it holds one element
//!   that itself fits on one line.
//! - A list of scalars stays inline while it fits in
//!   [`INLINE_LIST_WIDTH`] columns.

pub mod actions;
pub mod convert;
mod escape;

pub use actions::{action_name_expr, standard_action_identifier};
pub use convert::ToStarlark;
pub use escape::quote;

/// Spaces per indentation level in generated code.
pub const INDENT: usize = 4;

/// Widest inline rendering, brackets included, for a list of scalars.
pub const INLINE_LIST_WIDTH: usize = 80;

/// A Starlark expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A string literal.
    Str(String),
    /// `True` or `False`.
    Bool(bool),
    /// `None`.
    None,
    /// A bare identifier or attribute path such as `ACTION_NAMES.c_compile`.
    Ident(String),
    /// A list literal.
    List(Vec<Expr>),
    /// A keyword-argument call.
    Call(Call),
}

impl Expr {
    /// Creates a string literal.
    #[must_use]
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Creates an identifier reference.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Creates `None` for an absent value or a string literal otherwise.
    #[must_use]
    pub fn optional_str(value: Option<&str>) -> Self {
        value.map_or(Self::None, Self::str)
    }

    /// Creates a list of string literals.
    #[must_use]
    pub fn str_list<S: AsRef<str>>(values: &[S]) -> Self {
        Self::List(values.iter().map(|value| Self::str(value.as_ref())).collect())
    }

    /// Returns `true` for values that never span lines on their own.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Str(_) | Self::Bool(_) | Self::None | Self::Ident(_))
    }

    /// Returns `true` for an empty list.
    #[must_use]
    pub const fn is_empty_list(&self) -> bool {
        matches!(self, Self::List(items) if items.is_empty())
    }

    const fn weight(&self) -> usize {
        if self.is_scalar() { 1 } else { 2 }
    }

    /// Renders the expression as if it started on a line indented by
    /// `indent` spaces. Continuation lines are indented relative to it.
    #[must_use]
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write(&mut out, indent);
        out
    }

    fn write(&self, out: &mut String, indent: usize) {
        match self {
            Self::Str(value) => out.push_str(&quote(value)),
            Self::Bool(true) => out.push_str("True"),
            Self::Bool(false) => out.push_str("False"),
            Self::None => out.push_str("None"),
            Self::Ident(name) => out.push_str(name),
            Self::List(items) => write_list(out, items, indent),
            Self::Call(call) => call.write(out, indent),
        }
    }
}

impl From<Call> for Expr {
    fn from(call: Call) -> Self {
        Self::Call(call)
    }
}

/// A call with keyword arguments in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Call {
    /// Callee name.
    pub name: String,
    /// Keyword arguments, rendered in this order.
    pub args: Vec<(String, Expr)>,
}

impl Call {
    /// Starts a call to `name` with no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Appends a keyword argument.
    #[must_use]
    pub fn arg(mut self, keyword: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.args.push((keyword.into(), value.into()));
        self
    }

    /// Appends a string argument.
    #[must_use]
    pub fn str_arg(self, keyword: &str, value: &str) -> Self {
        self.arg(keyword, Expr::str(value))
    }

    /// Appends a string argument when the value is present.
    #[must_use]
    pub fn opt_str_arg(self, keyword: &str, value: Option<&str>) -> Self {
        match value {
            Some(present) => self.str_arg(keyword, present),
            None => self,
        }
    }

    /// Appends `keyword = True` when `enabled` is set; `False` is the default
    /// and is omitted.
    #[must_use]
    pub fn flag_arg(self, keyword: &str, enabled: bool) -> Self {
        if enabled {
            self.arg(keyword, Expr::Bool(true))
        } else {
            self
        }
    }

    /// Appends a list argument unless the list is empty.
    #[must_use]
    pub fn list_arg(self, keyword: &str, items: Vec<Expr>) -> Self {
        if items.is_empty() {
            self
        } else {
            self.arg(keyword, Expr::List(items))
        }
    }

    /// Looks up an argument by keyword.
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<&Expr> {
        self.args
            .iter()
            .find(|(name, _)| name == keyword)
            .map(|(_, value)| value)
    }

    fn write(&self, out: &mut String, indent: usize) {
        let weight: usize = self.args.iter().map(|(_, value)| value.weight()).sum();
        if weight <= 2 {
            let parts: Vec<String> = self
                .args
                .iter()
                .map(|(keyword, value)| format!("{keyword} = {}", value.render(indent)))
                .collect();
            if parts.iter().all(|part| !part.contains('\n')) {
                out.push_str(&self.name);
                out.push('(');
                out.push_str(&parts.join(", "));
                out.push(')');
                return;
            }
        }

        let inner = indent + INDENT;
        out.push_str(&self.name);
        out.push_str("(\n");
        for (keyword, value) in &self.args {
            push_indent(out, inner);
            out.push_str(keyword);
            out.push_str(" = ");
            value.write(out, inner);
            out.push_str(",\n");
        }
        push_indent(out, indent);
        out.push(')');
    }
}

fn write_list(out: &mut String, items: &[Expr], indent: usize) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }

    if items.iter().all(Expr::is_scalar) {
        let inline: Vec<String> = items.iter().map(|item| item.render(indent)).collect();
        let joined = inline.join(", ");
        if joined.chars().count() + 2 <= INLINE_LIST_WIDTH {
            out.push('[');
            out.push_str(&joined);
            out.push(']');
            return;
        }
    } else if let [only] = items {
        let single = only.render(indent);
        if !single.contains('\n') {
            out.push('[');
            out.push_str(&single);
            out.push(']');
            return;
        }
    }

    let inner = indent + INDENT;
    out.push_str("[\n");
    for item in items {
        push_indent(out, inner);
        item.write(out, inner);
        out.push_str(",\n");
    }
    push_indent(out, indent);
    out.push(']');
}

/// Appends `width` spaces.
pub(crate) fn push_indent(out: &mut String, width: usize) {
    out.extend(std::iter::repeat_n(' ', width));
}

#[cfg(test)]
mod tests;
