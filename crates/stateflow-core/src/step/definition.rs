use std::future::Future;

use async_trait::async_trait;

use super::run_result::StepRunResult;
use crate::errors::StepError;
use crate::model::StepContext;

/// Trait que define un Step: una unidad de trabajo con nombre que transforma
/// el estado del workflow.
///
/// `run` recibe el estado por valor y devuelve el siguiente estado; el engine
/// decide si hubo cambio comparando por igualdad. Los colaboradores externos
/// se obtienen del `StepContext`, nunca de forma global.
#[async_trait]
pub trait StepDefinition<S: Send + 'static>: Send + Sync {
    /// Nombre estable y único dentro del engine. Es la clave con la que se
    /// emparejan los registros persistidos.
    fn name(&self) -> &str;

    async fn run(&self, state: S, ctx: StepContext) -> StepRunResult<S>;
}

/// Adaptador de closures async a `StepDefinition`.
pub struct FnStep<F> {
    name: String,
    func: F,
}

impl<F> FnStep<F> {
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self { name: name.into(), func }
    }
}

impl<F> std::fmt::Debug for FnStep<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnStep").field("name", &self.name).finish_non_exhaustive()
    }
}

#[async_trait]
impl<S, F, Fut> StepDefinition<S> for FnStep<F>
    where S: Send + 'static,
          F: Fn(S, StepContext) -> Fut + Send + Sync,
          Fut: Future<Output = Result<S, StepError>> + Send
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, state: S, ctx: StepContext) -> StepRunResult<S> {
        (self.func)(state, ctx).await.into()
    }
}
