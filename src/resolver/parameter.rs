use std::any::{Any, TypeId};
use std::fmt;

use crate::security::{Principal, User};

/// 引数に付与される宣言的なマーカー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Annotation {
    /// 「現在のログインユーザーを注入する」マーカー
    LoginUser,
    Other(&'static str),
}

/// 引数の宣言型
///
/// `T: ?Sized` なので `dyn Principal` のような上位型も表現できる。
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ParamType {
    id: TypeId,
    name: &'static str,
}

impl ParamType {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// User の値をこの宣言型の引数に渡せるか (同一型、または上位型)
    pub fn is_assignable_from_user(&self) -> bool {
        let assignable = [
            TypeId::of::<User>(),
            TypeId::of::<dyn Principal>(),
            TypeId::of::<dyn Any>(),
            TypeId::of::<dyn Any + Send>(),
            TypeId::of::<dyn Any + Send + Sync>(),
        ];
        assignable.contains(&self.id)
    }
}

impl fmt::Debug for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParamType").field(&self.name).finish()
    }
}

/// handler 引数のメタデータ
#[derive(Debug, Clone)]
pub struct MethodParameter {
    name: &'static str,
    annotations: Vec<Annotation>,
    param_type: ParamType,
}

impl MethodParameter {
    pub fn new(name: &'static str, param_type: ParamType) -> Self {
        Self {
            name,
            annotations: Vec::new(),
            param_type,
        }
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn param_type(&self) -> ParamType {
        self.param_type
    }

    pub fn has_annotation(&self, annotation: &Annotation) -> bool {
        self.annotations.contains(annotation)
    }
}

/// LoginUser を注入してよい引数か
///
/// マーカーがあり、かつ宣言型が User (またはその上位型) の場合のみ true。
pub fn supports_login_user(param: &MethodParameter) -> bool {
    param.has_annotation(&Annotation::LoginUser) && param.param_type().is_assignable_from_user()
}
