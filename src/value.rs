//! Typed-value emission: numbers, booleans, chars, strings, types,
//! references and the per-shape scope helpers.
//!
//! Each helper opens the relevant element, emits escaped content and closes
//! it. Number formatting is culture-invariant and round-trip exact: `f64`
//! gets a fixed 17-significant-digit rendering, `f32` the shortest
//! round-trip form, alle anderen numerischen Typen die direkte
//! Dezimaldarstellung. Nur diese zwei Gleitkomma-Typen erhalten die
//! Spezialbehandlung; das ist Kontrakt, nicht Optimierungsspielraum.

use crate::attr::{self, BinaryOperator, SpecialCast, VariableKind, NO_ATTRS};
use crate::names;
use crate::writer::{ElementScope, MarkupWriter};

/// A resolved type as far as emission needs it: either a named (optionally
/// module-qualified) type or an array of an element type with a
/// per-dimension-group rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named {
        name: String,
        /// Display name of the owning module; appended as `, module` when
        /// present (assembly qualification).
        module: Option<String>,
    },
    Array {
        rank: u32,
        element: Box<TypeRef>,
    },
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            module: None,
        }
    }

    pub fn qualified(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            module: Some(module.into()),
        }
    }

    pub fn array(rank: u32, element: TypeRef) -> Self {
        Self::Array {
            rank,
            element: Box::new(element),
        }
    }
}

/// A numeric literal with its kind. The kind name becomes the `type`
/// attribute of the emitted `<Number>` element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl Number {
    /// Canonical kind name for the `type` attribute.
    pub fn kind_name(self) -> &'static str {
        match self {
            Self::I8(_) => "i8",
            Self::U8(_) => "u8",
            Self::I16(_) => "i16",
            Self::U16(_) => "u16",
            Self::I32(_) => "i32",
            Self::U32(_) => "u32",
            Self::I64(_) => "i64",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
        }
    }

    /// Round-trip-exact text rendering, per kind.
    fn render(self) -> String {
        match self {
            Self::I8(v) => v.to_string(),
            Self::U8(v) => v.to_string(),
            Self::I16(v) => v.to_string(),
            Self::U16(v) => v.to_string(),
            Self::I32(v) => v.to_string(),
            Self::U32(v) => v.to_string(),
            Self::I64(v) => v.to_string(),
            Self::U64(v) => v.to_string(),
            // f32: Rusts Display ist die kuerzeste round-trip-exakte Form.
            Self::F32(v) => v.to_string(),
            Self::F64(v) => format_f64_g17(v),
        }
    }
}

/// Formats an `f64` with 17 significant digits, plain decimal for small
/// exponents and scientific form otherwise.
///
/// 17 digits are the minimum that guarantees a bit-exact re-parse for every
/// double; the default shortest rendering would also round-trip, but the
/// fixed-width form is the wire contract here. Trailing zeros are trimmed.
fn format_f64_g17(value: f64) -> String {
    if !value.is_finite() {
        // "NaN", "inf", "-inf" — parse back via str::parse::<f64>.
        return value.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // "{:.16e}" liefert genau 17 signifikante Stellen: d.dddddddddddddddde±x
    let sci = format!("{value:.16e}");
    let (mantissa, exp) = sci
        .split_once('e')
        .expect("{:.16e} always contains an exponent");
    let exp: i32 = exp.parse().expect("{:.16e} exponent is an integer");

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    // 17 Ziffern ohne Dezimalpunkt.
    let mut digits = String::with_capacity(17);
    digits.extend(mantissa.chars().filter(|c| *c != '.'));
    let trimmed = digits.trim_end_matches('0');

    let mut out = String::with_capacity(24);
    out.push_str(sign);

    if (0..17).contains(&exp) {
        let exp = exp as usize;
        if trimmed.len() <= exp + 1 {
            // Reiner Integer-Anteil, ggf. mit Nullen aufgefuellt.
            out.push_str(trimmed);
            for _ in trimmed.len()..=exp {
                out.push('0');
            }
        } else {
            out.push_str(&trimmed[..exp + 1]);
            out.push('.');
            out.push_str(&trimmed[exp + 1..]);
        }
    } else if (-5..0).contains(&exp) {
        out.push_str("0.");
        for _ in exp..-1 {
            out.push('0');
        }
        out.push_str(trimmed);
    } else {
        // Wissenschaftliche Form fuer extreme Exponenten.
        out.push_str(&trimmed[..1]);
        if trimmed.len() > 1 {
            out.push('.');
            out.push_str(&trimmed[1..]);
        }
        out.push('e');
        out.push_str(&exp.to_string());
    }
    out
}

impl MarkupWriter {
    // ========================================================================
    // Typisierte Werte
    // ========================================================================

    /// Emits a type. Arrays recurse: a 2-D array of a scalar produces two
    /// nested rank-tagged wrappers around the scalar leaf (rank is reported
    /// per dimension group, never flattened further). Named types emit their
    /// name, module-qualified when the module display name is known.
    pub fn emit_type(&mut self, ty: &TypeRef, implicit: Option<bool>) {
        match ty {
            TypeRef::Array { rank, element } => {
                let mut scope = self.element(names::ARRAY_TYPE, [attr::rank(*rank)]);
                scope.emit_type(element, implicit);
            }
            TypeRef::Named { name, module } => {
                let mut scope = self.element(names::TYPE, [attr::implicit(implicit)]);
                scope.text(name);
                if let Some(module) = module {
                    scope.text(", ");
                    scope.text(module);
                }
            }
        }
    }

    /// Emits `<Number type="kind">text</Number>` with round-trip-exact text.
    pub fn emit_number(&mut self, value: Number) {
        let rendered = value.render();
        let mut scope = self.element(names::NUMBER, [attr::type_name(value.kind_name())]);
        scope.text(&rendered);
    }

    /// Emits `<Boolean>true|false</Boolean>` (lower-case text).
    pub fn emit_boolean(&mut self, value: bool) {
        let mut scope = self.element(names::BOOLEAN, NO_ATTRS);
        scope.text(if value { "true" } else { "false" });
    }

    /// Emits `<Char>c</Char>` with escaped content.
    pub fn emit_char(&mut self, value: char) {
        let mut utf8 = [0u8; 4];
        let mut scope = self.element(names::CHAR, NO_ATTRS);
        scope.text(value.encode_utf8(&mut utf8));
    }

    /// Emits `<String>escaped</String>`.
    pub fn emit_string(&mut self, value: &str) {
        let mut scope = self.element(names::STRING, NO_ATTRS);
        scope.text(value);
    }

    /// Emits `<Literal><Null/></Literal>` — two nested elements, no
    /// attributes, no text.
    pub fn emit_null_literal(&mut self) {
        let mut scope = self.element(names::LITERAL, NO_ATTRS);
        scope.leaf_tag(names::NULL, NO_ATTRS);
    }

    /// Emits the bare `<ThisReference/>` leaf.
    pub fn emit_this_reference(&mut self) {
        self.leaf_tag(names::THIS_REFERENCE, NO_ATTRS);
    }

    /// Emits the bare `<BaseReference/>` leaf.
    pub fn emit_base_reference(&mut self) {
        self.leaf_tag(names::BASE_REFERENCE, NO_ATTRS);
    }

    /// Emits `<Name>escaped</Name>`.
    pub fn emit_name(&mut self, value: &str) {
        let mut scope = self.element(names::NAME, NO_ATTRS);
        scope.text(value);
    }

    /// Emits `<NameRef variablekind=… name=… fullname=…/>`; every absent or
    /// empty piece of metadata is omitted, not written empty.
    pub fn emit_name_ref(
        &mut self,
        kind: Option<VariableKind>,
        name: &str,
        full_name: Option<&str>,
    ) {
        self.leaf_tag(
            names::NAME_REF,
            [
                attr::variable_kind(kind),
                attr::name(name),
                attr::full_name(full_name),
            ],
        );
    }

    /// Fallback for constructs the visitor does not model: the node's
    /// verbatim source text, escaped, inside a line-tagged `<Quote>`.
    pub fn emit_quote(&mut self, source_text: &str, line: u32) {
        let mut scope = self.element(names::QUOTE, [attr::line(line)]);
        scope.text(source_text);
    }

    /// Emits `<Comment line="n">escaped</Comment>`.
    pub fn emit_comment(&mut self, text: &str, line: u32) {
        let mut scope = self.element(names::COMMENT, [attr::line(line)]);
        scope.text(text);
    }

    // ========================================================================
    // Scope-Helfer pro Knotenform
    // ========================================================================

    pub fn argument(&mut self) -> ElementScope<'_> {
        self.element(names::ARGUMENT, NO_ATTRS)
    }

    pub fn array(&mut self) -> ElementScope<'_> {
        self.element(names::ARRAY, NO_ATTRS)
    }

    pub fn array_element_access(&mut self) -> ElementScope<'_> {
        self.element(names::ARRAY_ELEMENT_ACCESS, NO_ATTRS)
    }

    pub fn assignment(&mut self, op: Option<BinaryOperator>) -> ElementScope<'_> {
        self.element(names::ASSIGNMENT, [attr::binary_operator(op)])
    }

    pub fn binary_operation(&mut self, op: BinaryOperator) -> ElementScope<'_> {
        self.element(names::BINARY_OPERATION, [attr::binary_operator(Some(op))])
    }

    pub fn block(&mut self) -> ElementScope<'_> {
        self.element(names::BLOCK, NO_ATTRS)
    }

    pub fn bound(&mut self) -> ElementScope<'_> {
        self.element(names::BOUND, NO_ATTRS)
    }

    pub fn cast(&mut self, cast: Option<SpecialCast>) -> ElementScope<'_> {
        self.element(names::CAST, [attr::special_cast(cast)])
    }

    pub fn expression(&mut self) -> ElementScope<'_> {
        self.element(names::EXPRESSION, NO_ATTRS)
    }

    pub fn expression_statement(&mut self, line: u32) -> ElementScope<'_> {
        self.element(names::EXPRESSION_STATEMENT, [attr::line(line)])
    }

    pub fn literal(&mut self) -> ElementScope<'_> {
        self.element(names::LITERAL, NO_ATTRS)
    }

    pub fn local(&mut self, line: u32) -> ElementScope<'_> {
        self.element(names::LOCAL, [attr::line(line)])
    }

    pub fn method_call(&mut self) -> ElementScope<'_> {
        self.element(names::METHOD_CALL, NO_ATTRS)
    }

    pub fn new_array(&mut self) -> ElementScope<'_> {
        self.element(names::NEW_ARRAY, NO_ATTRS)
    }

    pub fn new_class(&mut self) -> ElementScope<'_> {
        self.element(names::NEW_CLASS, NO_ATTRS)
    }

    pub fn new_delegate(&mut self, name: &str) -> ElementScope<'_> {
        self.element(names::NEW_DELEGATE, [attr::name(name)])
    }

    pub fn parentheses(&mut self) -> ElementScope<'_> {
        self.element(names::PARENTHESES, NO_ATTRS)
    }
}
