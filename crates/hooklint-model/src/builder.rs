//! Construction of immutable program-model snapshots.
//!
//! The host front end (or a test) allocates types, methods, and
//! expressions through [`ProgramModelBuilder`], then freezes the snapshot
//! with [`ProgramModelBuilder::build`]. Invocation and assignment indexes
//! are collected as expressions are allocated, so the finished model can
//! enumerate them without a scan.

use hooklint_common::SourceLocation;
use smallvec::SmallVec;
use tracing::debug;

use crate::ids::{ExprId, FieldId, LocalId, MethodId, ParamId, SymbolRef, TypeId};
use crate::model::{Builtin, Expr, Field, Local, Method, Param, ProgramModel, TypeDef};

#[derive(Default)]
pub struct ProgramModelBuilder {
    types: Vec<TypeDef>,
    methods: Vec<Method>,
    params: Vec<Param>,
    locals: Vec<Local>,
    fields: Vec<Field>,
    exprs: Vec<Expr>,
    invocation_ids: Vec<ExprId>,
    assignment_ids: Vec<ExprId>,
}

impl ProgramModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// Declares a type whose display name equals its short name.
    pub fn ty(&mut self, name: &str) -> TypeId {
        self.ty_full(name, name)
    }

    /// Declares a type with distinct short and fully-qualified names.
    pub fn ty_full(&mut self, name: &str, display_name: &str) -> TypeId {
        self.push_type(TypeDef {
            name: name.to_string(),
            display_name: display_name.to_string(),
            base: None,
            interfaces: Vec::new(),
            builtin: None,
            generic_args: Vec::new(),
            array_elem: None,
        })
    }

    /// Declares a built-in value type under its canonical alias.
    pub fn builtin(&mut self, builtin: Builtin) -> TypeId {
        self.push_type(TypeDef {
            name: builtin.alias().to_string(),
            display_name: builtin.alias().to_string(),
            base: None,
            interfaces: Vec::new(),
            builtin: Some(builtin),
            generic_args: Vec::new(),
            array_elem: None,
        })
    }

    /// Declares an instantiated generic type. `name` is the open type's
    /// name; any arity marker (`` List`1 ``) is stripped here.
    pub fn generic(&mut self, name: &str, args: &[TypeId]) -> TypeId {
        let stripped = name.split('`').next().unwrap_or(name);
        self.push_type(TypeDef {
            name: stripped.to_string(),
            display_name: stripped.to_string(),
            base: None,
            interfaces: Vec::new(),
            builtin: None,
            generic_args: args.to_vec(),
            array_elem: None,
        })
    }

    /// Declares an array type over `elem`.
    pub fn array(&mut self, elem: TypeId) -> TypeId {
        let name = format!("{}[]", self.types[elem.0 as usize].name);
        self.push_type(TypeDef {
            name: name.clone(),
            display_name: name,
            base: None,
            interfaces: Vec::new(),
            builtin: None,
            generic_args: Vec::new(),
            array_elem: Some(elem),
        })
    }

    pub fn set_base(&mut self, ty: TypeId, base: TypeId) {
        self.types[ty.0 as usize].base = Some(base);
    }

    pub fn add_interface(&mut self, ty: TypeId, iface: TypeId) {
        self.types[ty.0 as usize].interfaces.push(iface);
    }

    // =========================================================================
    // Methods and symbols
    // =========================================================================

    /// Declares a method with `(name, type)` parameters at a default
    /// location.
    pub fn method(&mut self, owner: TypeId, name: &str, params: &[(&str, TypeId)]) -> MethodId {
        let start = self.methods.len() as u32 * 100;
        self.method_at(owner, name, params, SourceLocation::new("model.cs", start, name.len() as u32))
    }

    /// Declares a method at an explicit source location.
    pub fn method_at(
        &mut self,
        owner: TypeId,
        name: &str,
        params: &[(&str, TypeId)],
        location: SourceLocation,
    ) -> MethodId {
        let id = MethodId(self.methods.len() as u32);
        let mut param_ids: SmallVec<[ParamId; 4]> = SmallVec::new();
        for (ordinal, (pname, pty)) in params.iter().enumerate() {
            let pid = ParamId(self.params.len() as u32);
            self.params.push(Param {
                name: (*pname).to_string(),
                ty: *pty,
                ordinal,
                owner: id,
            });
            param_ids.push(pid);
        }
        self.methods.push(Method {
            name: name.to_string(),
            containing_type: owner,
            params: param_ids,
            is_override: false,
            location,
            body: Vec::new(),
        });
        id
    }

    pub fn set_override(&mut self, method: MethodId) {
        self.methods[method.0 as usize].is_override = true;
    }

    pub fn param_id(&self, method: MethodId, ordinal: usize) -> ParamId {
        self.methods[method.0 as usize].params[ordinal]
    }

    pub fn local(&mut self, owner: MethodId, name: &str) -> LocalId {
        let id = LocalId(self.locals.len() as u32);
        self.locals.push(Local {
            name: name.to_string(),
            owner,
        });
        id
    }

    pub fn field(&mut self, owner: TypeId, name: &str) -> FieldId {
        let id = FieldId(self.fields.len() as u32);
        self.fields.push(Field {
            name: name.to_string(),
            owner,
        });
        id
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn lit(&mut self, value: &str, location: SourceLocation) -> ExprId {
        self.push_expr(Expr::Literal {
            value: value.to_string(),
            location,
        })
    }

    pub fn symbol(&mut self, symbol: SymbolRef) -> ExprId {
        self.push_expr(Expr::Symbol { symbol })
    }

    pub fn member_access(
        &mut self,
        receiver_type: Option<TypeId>,
        member: &str,
        location: SourceLocation,
    ) -> ExprId {
        self.push_expr(Expr::MemberAccess {
            receiver_type,
            member: member.to_string(),
            location,
        })
    }

    pub fn assign(&mut self, target: SymbolRef, value: ExprId) -> ExprId {
        let id = self.push_expr(Expr::Assignment { target, value });
        self.assignment_ids.push(id);
        id
    }

    pub fn invoke(
        &mut self,
        target: Option<MethodId>,
        args: Vec<ExprId>,
        location: SourceLocation,
    ) -> ExprId {
        let id = self.push_expr(Expr::Invocation {
            target,
            args,
            location,
        });
        self.invocation_ids.push(id);
        id
    }

    pub fn compare(&mut self, left: ExprId, right: ExprId) -> ExprId {
        self.push_expr(Expr::Comparison { left, right })
    }

    pub fn opaque(&mut self) -> ExprId {
        self.push_expr(Expr::Opaque)
    }

    /// Appends an expression to a method's body, in statement order.
    pub fn stmt(&mut self, method: MethodId, expr: ExprId) {
        self.methods[method.0 as usize].body.push(expr);
    }

    // =========================================================================
    // Freeze
    // =========================================================================

    pub fn build(self) -> ProgramModel {
        debug!(
            types = self.types.len(),
            methods = self.methods.len(),
            exprs = self.exprs.len(),
            "froze program model"
        );
        ProgramModel {
            types: self.types,
            methods: self.methods,
            params: self.params,
            locals: self.locals,
            fields: self.fields,
            exprs: self.exprs,
            invocation_ids: self.invocation_ids,
            assignment_ids: self.assignment_ids,
        }
    }

    fn push_type(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(def);
        id
    }

    fn push_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }
}
