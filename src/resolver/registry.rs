use std::fmt;
use std::sync::Arc;

use super::{MethodParameter, ResolveError};

/// handler 引数の値を供給する拡張ポイント
///
/// `C` は実行単位のコンテキスト (HTTP なら request parts、STOMP なら message)。
/// `supports_parameter` は純粋関数であること。
pub trait ArgumentResolver<C: ?Sized>: Send + Sync {
    type Output;

    fn supports_parameter(&self, param: &MethodParameter) -> bool;

    fn resolve_argument(
        &self,
        param: &MethodParameter,
        ctx: &C,
    ) -> Result<Self::Output, ResolveError>;
}

/// host が参照する resolver の順序付きリスト
///
/// 登録順に問い合わせ、最初に `supports_parameter` が true になったものを使う。
pub struct ArgumentResolvers<C: ?Sized, T> {
    resolvers: Vec<Arc<dyn ArgumentResolver<C, Output = T>>>,
}

impl<C: ?Sized, T> ArgumentResolvers<C, T> {
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    pub fn with<R>(mut self, resolver: R) -> Self
    where
        R: ArgumentResolver<C, Output = T> + 'static,
    {
        self.add(resolver);
        self
    }

    pub fn add<R>(&mut self, resolver: R)
    where
        R: ArgumentResolver<C, Output = T> + 'static,
    {
        self.resolvers.push(Arc::new(resolver));
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    pub fn supports_parameter(&self, param: &MethodParameter) -> bool {
        self.resolvers.iter().any(|r| r.supports_parameter(param))
    }

    pub fn resolve_argument(&self, param: &MethodParameter, ctx: &C) -> Result<T, ResolveError> {
        let resolver = self
            .resolvers
            .iter()
            .find(|r| r.supports_parameter(param))
            .ok_or(ResolveError::UnsupportedParameter { name: param.name() })?;

        resolver.resolve_argument(param, ctx)
    }
}

impl<C: ?Sized, T> Default for ArgumentResolvers<C, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized, T> Clone for ArgumentResolvers<C, T> {
    fn clone(&self) -> Self {
        Self {
            resolvers: self.resolvers.clone(),
        }
    }
}

impl<C: ?Sized, T> fmt::Debug for ArgumentResolvers<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentResolvers")
            .field("len", &self.resolvers.len())
            .finish()
    }
}
