//! Program-model entities and the read-only query surface.
//!
//! The arenas are plain `Vec`s indexed by the id newtypes; enumeration
//! order is insertion order, which makes every whole-model sweep
//! deterministic. Invocations and assignments are additionally indexed at
//! build time so the provenance resolver and the sink sweep can enumerate
//! them without walking every expression.

use hooklint_common::SourceLocation;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::ids::{ExprId, FieldId, LocalId, MethodId, ParamId, SymbolRef, TypeId};

/// Built-in value types with a fixed canonical alias.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Object,
    Bool,
    Char,
    SByte,
    Byte,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    Decimal,
    Float,
    Double,
    String,
}

impl Builtin {
    /// The canonical alias used in type descriptors.
    pub const fn alias(self) -> &'static str {
        match self {
            Builtin::Object => "object",
            Builtin::Bool => "bool",
            Builtin::Char => "char",
            Builtin::SByte => "sbyte",
            Builtin::Byte => "byte",
            Builtin::Short => "short",
            Builtin::UShort => "ushort",
            Builtin::Int => "int",
            Builtin::UInt => "uint",
            Builtin::Long => "long",
            Builtin::ULong => "ulong",
            Builtin::Decimal => "decimal",
            Builtin::Float => "float",
            Builtin::Double => "double",
            Builtin::String => "string",
        }
    }
}

/// A type definition: name, inheritance edges, and the shape information
/// canonical naming needs (builtin alias, generic instantiation, array
/// element).
#[derive(Clone, Debug)]
pub struct TypeDef {
    /// Short name, e.g. `BasePlayer` or `Dictionary`.
    pub name: String,
    /// Fully-qualified display name, e.g. `Oxide.Plugins.BasePlayer`.
    pub display_name: String,
    pub base: Option<TypeId>,
    /// Directly implemented interfaces. Transitive closure is computed by
    /// [`ProgramModel::interfaces`].
    pub interfaces: Vec<TypeId>,
    pub builtin: Option<Builtin>,
    /// Generic instantiation: ordered type arguments. The `name` field
    /// holds the open type's name with any arity marker already stripped.
    pub generic_args: Vec<TypeId>,
    /// Array types carry their element here.
    pub array_elem: Option<TypeId>,
}

/// A method: identity, declared parameters, and the body expressions the
/// sink sweep enumerates.
#[derive(Clone, Debug)]
pub struct Method {
    pub name: String,
    pub containing_type: TypeId,
    pub params: SmallVec<[ParamId; 4]>,
    pub is_override: bool,
    pub location: SourceLocation,
    /// Top-level body expressions in declaration order. Host methods with
    /// no available source have an empty body.
    pub body: Vec<ExprId>,
}

#[derive(Clone, Debug)]
pub struct Param {
    pub name: String,
    pub ty: TypeId,
    pub ordinal: usize,
    pub owner: MethodId,
}

#[derive(Clone, Debug)]
pub struct Local {
    pub name: String,
    pub owner: MethodId,
}

#[derive(Clone, Debug)]
pub struct Field {
    pub name: String,
    pub owner: TypeId,
}

/// The expression shapes the analysis distinguishes. Everything else the
/// host sees is flattened to `Opaque` before the model is built.
#[derive(Clone, Debug)]
pub enum Expr {
    Literal {
        value: String,
        location: SourceLocation,
    },
    /// A resolved reference to a parameter, local, or field.
    Symbol { symbol: SymbolRef },
    /// `receiver.Member`. The receiver's type is resolved at build time;
    /// `None` means the host could not bind it.
    MemberAccess {
        receiver_type: Option<TypeId>,
        member: String,
        location: SourceLocation,
    },
    /// `target = value` where the target resolved to a symbol.
    Assignment { target: SymbolRef, value: ExprId },
    /// A call. `target` is `None` for dynamic or unresolvable callees.
    Invocation {
        target: Option<MethodId>,
        args: Vec<ExprId>,
        location: SourceLocation,
    },
    /// An equality comparison between two expressions.
    Comparison { left: ExprId, right: ExprId },
    /// Computed value, unresolvable symbol, external result.
    Opaque,
}

/// One immutable snapshot of the program under analysis.
pub struct ProgramModel {
    pub(crate) types: Vec<TypeDef>,
    pub(crate) methods: Vec<Method>,
    pub(crate) params: Vec<Param>,
    pub(crate) locals: Vec<Local>,
    pub(crate) fields: Vec<Field>,
    pub(crate) exprs: Vec<Expr>,
    /// All invocation expressions, in insertion order.
    pub(crate) invocation_ids: Vec<ExprId>,
    /// All assignment expressions, in insertion order.
    pub(crate) assignment_ids: Vec<ExprId>,
}

impl ProgramModel {
    pub fn type_def(&self, id: TypeId) -> &TypeDef {
        &self.types[id.0 as usize]
    }

    pub fn method(&self, id: MethodId) -> &Method {
        &self.methods[id.0 as usize]
    }

    pub fn param(&self, id: ParamId) -> &Param {
        &self.params[id.0 as usize]
    }

    pub fn local(&self, id: LocalId) -> &Local {
        &self.locals[id.0 as usize]
    }

    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.0 as usize]
    }

    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.0 as usize]
    }

    /// Enumerates every method in the snapshot.
    pub fn methods(&self) -> impl Iterator<Item = (MethodId, &Method)> {
        self.methods
            .iter()
            .enumerate()
            .map(|(i, m)| (MethodId(i as u32), m))
    }

    /// Enumerates every invocation expression in the snapshot.
    pub fn invocations(&self) -> impl Iterator<Item = (ExprId, &Expr)> {
        self.invocation_ids.iter().map(|&id| (id, self.expr(id)))
    }

    /// Enumerates every assignment expression in the snapshot.
    pub fn assignments(&self) -> impl Iterator<Item = (ExprId, &Expr)> {
        self.assignment_ids.iter().map(|&id| (id, self.expr(id)))
    }

    /// Resolves an expression to the value symbol it references, if any.
    pub fn resolve_symbol(&self, id: ExprId) -> Option<SymbolRef> {
        match self.expr(id) {
            Expr::Symbol { symbol } => Some(*symbol),
            _ => None,
        }
    }

    pub fn base_type(&self, id: TypeId) -> Option<TypeId> {
        self.type_def(id).base
    }

    pub fn display_name(&self, id: TypeId) -> &str {
        &self.type_def(id).display_name
    }

    /// Transitive interface set of a type: its own interfaces, interfaces
    /// of those interfaces, and everything implemented along the base
    /// chain. Cycle-guarded; order is deterministic (discovery order).
    pub fn interfaces(&self, id: TypeId) -> Vec<TypeId> {
        let mut seen: FxHashSet<TypeId> = FxHashSet::default();
        let mut out = Vec::new();
        let mut type_stack = vec![id];
        let mut visited_types: FxHashSet<TypeId> = FxHashSet::default();
        while let Some(ty) = type_stack.pop() {
            if !visited_types.insert(ty) {
                continue;
            }
            let def = self.type_def(ty);
            for &iface in &def.interfaces {
                if seen.insert(iface) {
                    out.push(iface);
                    type_stack.push(iface);
                }
            }
            if let Some(base) = def.base {
                type_stack.push(base);
            }
        }
        out
    }

    /// Declared parameters of a method, in ordinal order.
    pub fn params_of(&self, id: MethodId) -> impl Iterator<Item = &Param> {
        self.method(id).params.iter().map(|&p| self.param(p))
    }
}
