//! Element and attribute names of the produced markup.
//!
//! Downstream consumers match on these exact strings, so they are fixed
//! vocabulary, not configuration. Alles weitere (welcher Knoten welches
//! Element erzeugt) entscheidet der Besucher, nicht dieser Crate.

// ============================================================================
// Elemente
// ============================================================================

pub const ARGUMENT: &str = "Argument";
pub const ARRAY: &str = "Array";
pub const ARRAY_ELEMENT_ACCESS: &str = "ArrayElementAccess";
pub const ARRAY_TYPE: &str = "ArrayType";
pub const ASSIGNMENT: &str = "Assignment";
pub const BASE_REFERENCE: &str = "BaseReference";
pub const BINARY_OPERATION: &str = "BinaryOperation";
pub const BLOCK: &str = "Block";
pub const BOOLEAN: &str = "Boolean";
pub const BOUND: &str = "Bound";
pub const CAST: &str = "Cast";
pub const CHAR: &str = "Char";
pub const COMMENT: &str = "Comment";
pub const EXPRESSION: &str = "Expression";
pub const EXPRESSION_STATEMENT: &str = "ExpressionStatement";
pub const LITERAL: &str = "Literal";
pub const LOCAL: &str = "Local";
pub const METHOD_CALL: &str = "MethodCall";
pub const NAME: &str = "Name";
pub const NAME_REF: &str = "NameRef";
pub const NEW_ARRAY: &str = "NewArray";
pub const NEW_CLASS: &str = "NewClass";
pub const NEW_DELEGATE: &str = "NewDelegate";
pub const NULL: &str = "Null";
pub const NUMBER: &str = "Number";
pub const PARENTHESES: &str = "Parentheses";
pub const QUOTE: &str = "Quote";
pub const STRING: &str = "String";
pub const THIS_REFERENCE: &str = "ThisReference";
pub const TYPE: &str = "Type";

// ============================================================================
// Attribute
// ============================================================================

pub const ATTR_BINARY_OPERATOR: &str = "binaryoperator";
pub const ATTR_DIRECT_CAST: &str = "directcast";
pub const ATTR_FULL_NAME: &str = "fullname";
pub const ATTR_IMPLICIT: &str = "implicit";
pub const ATTR_LINE: &str = "line";
pub const ATTR_NAME: &str = "name";
pub const ATTR_RANK: &str = "rank";
pub const ATTR_TRY_CAST: &str = "trycast";
pub const ATTR_TYPE: &str = "type";
pub const ATTR_VARIABLE_KIND: &str = "variablekind";
