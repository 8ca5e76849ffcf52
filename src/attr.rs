//! Attribute construction and domain-value classification.
//!
//! Every constructor follows the same two-branch shape: a designated
//! "no information" input (`None`, empty string) yields `None` — the
//! attribute is omitted from the output entirely — otherwise a concrete
//! [`Attr`] with a canonical token as value. `None` ist bewusst verschieden
//! von einem Attribut mit leerem String-Wert: Letzteres wuerde `name=""`
//! erzeugen, Ersteres gar nichts.
//!
//! The classification enums are closed; the maps over them are exhaustive
//! `match`es, so an unmapped variant cannot exist at runtime — adding a
//! variant without extending its map is a compile error.

use std::borrow::Cow;

use crate::names;

/// A (name, value) attribute pair. The value is escaped at emission time,
/// not at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: &'static str,
    pub value: Cow<'static, str>,
}

impl Attr {
    pub(crate) fn new(name: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Empty attribute list for tags without metadata.
pub const NO_ATTRS: [Option<Attr>; 0] = [];

/// Binary operators that carry a `binaryoperator` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    BitOr,
    BitAnd,
    Concatenate,
    AddDelegate,
}

impl BinaryOperator {
    /// Canonical attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::BitOr => "bitor",
            Self::BitAnd => "bitand",
            Self::Concatenate => "concatenate",
            Self::AddDelegate => "adddelegate",
        }
    }
}

/// Classification of what a name reference resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Property,
    Method,
    Field,
    Local,
    Unknown,
}

impl VariableKind {
    /// Canonical attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Method => "method",
            Self::Field => "field",
            Self::Local => "local",
            Self::Unknown => "unknown",
        }
    }
}

/// Cast flavors that carry their own boolean-valued attribute. A plain cast
/// carries neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialCast {
    Direct,
    Try,
}

/// `binaryoperator="token"`, or omitted when no operator applies.
pub fn binary_operator(op: Option<BinaryOperator>) -> Option<Attr> {
    op.map(|op| Attr::new(names::ATTR_BINARY_OPERATOR, op.token()))
}

/// `variablekind="token"`, or omitted when the kind is not known at all.
pub fn variable_kind(kind: Option<VariableKind>) -> Option<Attr> {
    kind.map(|kind| Attr::new(names::ATTR_VARIABLE_KIND, kind.token()))
}

/// `directcast="yes"` / `trycast="yes"`, or omitted for a plain cast.
pub fn special_cast(cast: Option<SpecialCast>) -> Option<Attr> {
    cast.map(|cast| match cast {
        SpecialCast::Direct => Attr::new(names::ATTR_DIRECT_CAST, "yes"),
        SpecialCast::Try => Attr::new(names::ATTR_TRY_CAST, "yes"),
    })
}

/// Tri-state `implicit` attribute: absent, `"yes"` or `"no"`.
pub fn implicit(value: Option<bool>) -> Option<Attr> {
    value.map(|value| Attr::new(names::ATTR_IMPLICIT, if value { "yes" } else { "no" }))
}

/// `name="…"`, omitted for an empty name.
pub fn name(value: &str) -> Option<Attr> {
    (!value.is_empty()).then(|| Attr::new(names::ATTR_NAME, value.to_owned()))
}

/// `fullname="…"`, omitted when absent or empty.
pub fn full_name(value: Option<&str>) -> Option<Attr> {
    value
        .filter(|value| !value.is_empty())
        .map(|value| Attr::new(names::ATTR_FULL_NAME, value.to_owned()))
}

/// `rank="n"` for array types. Rank is per dimension group, always concrete
/// where the attribute appears.
pub fn rank(value: u32) -> Option<Attr> {
    Some(Attr::new(names::ATTR_RANK, value.to_string()))
}

/// `line="n"` source line attribute.
pub fn line(value: u32) -> Option<Attr> {
    Some(Attr::new(names::ATTR_LINE, value.to_string()))
}

/// `type="…"`, omitted for an empty type name.
pub fn type_name(value: &str) -> Option<Attr> {
    (!value.is_empty()).then(|| Attr::new(names::ATTR_TYPE, value.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_operator_tokens() {
        let cases = [
            (BinaryOperator::Add, "plus"),
            (BinaryOperator::BitOr, "bitor"),
            (BinaryOperator::BitAnd, "bitand"),
            (BinaryOperator::Concatenate, "concatenate"),
            (BinaryOperator::AddDelegate, "adddelegate"),
        ];
        for (op, token) in cases {
            let attr = binary_operator(Some(op)).unwrap();
            assert_eq!(attr.name, "binaryoperator");
            assert_eq!(attr.value, token);
        }
    }

    #[test]
    fn binary_operator_none_entfaellt() {
        assert_eq!(binary_operator(None), None);
    }

    #[test]
    fn variable_kind_tokens() {
        let cases = [
            (VariableKind::Property, "property"),
            (VariableKind::Method, "method"),
            (VariableKind::Field, "field"),
            (VariableKind::Local, "local"),
            (VariableKind::Unknown, "unknown"),
        ];
        for (kind, token) in cases {
            let attr = variable_kind(Some(kind)).unwrap();
            assert_eq!(attr.name, "variablekind");
            assert_eq!(attr.value, token);
        }
        assert_eq!(variable_kind(None), None);
    }

    #[test]
    fn special_cast_zwei_attributnamen() {
        let direct = special_cast(Some(SpecialCast::Direct)).unwrap();
        assert_eq!((direct.name, &*direct.value), ("directcast", "yes"));
        let tried = special_cast(Some(SpecialCast::Try)).unwrap();
        assert_eq!((tried.name, &*tried.value), ("trycast", "yes"));
        assert_eq!(special_cast(None), None);
    }

    #[test]
    fn implicit_tri_state() {
        assert_eq!(implicit(None), None);
        assert_eq!(implicit(Some(true)).unwrap().value, "yes");
        assert_eq!(implicit(Some(false)).unwrap().value, "no");
    }

    #[test]
    fn name_leer_entfaellt() {
        assert_eq!(name(""), None);
        assert_eq!(name("x").unwrap().value, "x");
    }

    #[test]
    fn full_name_leer_oder_absent_entfaellt() {
        assert_eq!(full_name(None), None);
        assert_eq!(full_name(Some("")), None);
        assert_eq!(full_name(Some("A.B.x")).unwrap().value, "A.B.x");
    }

    #[test]
    fn rank_und_line_konkrete_werte() {
        assert_eq!(rank(2).unwrap().value, "2");
        assert_eq!(line(17).unwrap().value, "17");
    }
}
