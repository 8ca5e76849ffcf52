//! mbxml – MethodXML markup encoder
//!
//! Renders an in-memory description of a method body (expressions,
//! statements, literals, types, references) as nested, tagged markup for
//! external tooling. The crate is the emission substrate only: which
//! semantic node produces which tag is the calling visitor's business.
//!
//! Elements open through a scoped guard whose release writes the matching
//! close tag, so nesting is well-formed even on early-exit paths. A
//! checkpoint/rewind pair over the output buffer supports speculative
//! emission: write a subtree, and discard it cleanly if it turns out not to
//! apply.
//!
//! # Beispiel
//!
//! ```
//! use mbxml::{MarkupWriter, Number, VariableKind};
//!
//! let mut writer = MarkupWriter::new();
//! {
//!     let mut block = writer.block();
//!     let mut stmt = block.expression_statement(3);
//!     let mut expr = stmt.expression();
//!     let mut assign = expr.assignment(None);
//!     assign.emit_name_ref(Some(VariableKind::Local), "x", None);
//!     assign.emit_number(Number::I32(42));
//! }
//! assert_eq!(
//!     writer.finish(),
//!     "<Block><ExpressionStatement line=\"3\"><Expression>\
//!      <Assignment><NameRef variablekind=\"local\" name=\"x\"/>\
//!      <Number type=\"i32\">42</Number></Assignment>\
//!      </Expression></ExpressionStatement></Block>"
//! );
//! ```
//!
//! Speculative emission:
//!
//! ```
//! use mbxml::{MarkupWriter, SpecialCast, TypeRef};
//!
//! let mut writer = MarkupWriter::new();
//! let checkpoint = writer.mark();
//! {
//!     let mut cast = writer.cast(Some(SpecialCast::Try));
//!     cast.emit_type(&TypeRef::named("T"), None);
//! }
//! // Downstream-Bedingung disqualifiziert den Subtree: verwerfen.
//! writer.rewind(checkpoint);
//! assert_eq!(writer.finish(), "");
//! ```

pub mod attr;
pub mod cache;
pub mod error;
pub mod escape;
pub mod names;
pub mod spans;
pub mod value;
pub mod writer;

pub use attr::{Attr, BinaryOperator, SpecialCast, VariableKind};
pub use error::{Error, Result};
pub use value::{Number, TypeRef};
pub use writer::{Checkpoint, ElementScope, MarkupWriter};
