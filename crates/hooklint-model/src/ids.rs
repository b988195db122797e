//! Arena identifiers for the program model.
//!
//! Plain `u32` newtypes: cheap to copy, cheap to hash, and stable for the
//! lifetime of one model snapshot. Ids from different snapshots must never
//! be mixed; nothing guards against it.

/// Identifier of a type definition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

/// Identifier of a method.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId(pub u32);

/// Identifier of a declared parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(pub u32);

/// Identifier of a method-local variable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalId(pub u32);

/// Identifier of a field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

/// Identifier of an expression node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(pub u32);

/// Identity of a value symbol, as used by provenance visited sets.
///
/// Two expressions reference "the same symbol" exactly when their
/// `SymbolRef`s are equal; this is the recursion guard key for the
/// literal-provenance resolver.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolRef {
    Param(ParamId),
    Local(LocalId),
    Field(FieldId),
}
