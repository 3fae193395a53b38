use crate::errors::StepError;

/// Resultado abstracto de ejecutar un step.
pub enum StepRunResult<S> {
    /// El step produjo un estado (igual o distinto al de entrada).
    Success { state: S },
    /// El step no produjo estado. El engine lo trata como violación de
    /// invariante y aborta la corrida.
    Empty,
    Failure { error: StepError },
}

impl<S> From<Result<S, StepError>> for StepRunResult<S> {
    fn from(res: Result<S, StepError>) -> Self {
        match res {
            Ok(state) => StepRunResult::Success { state },
            Err(error) => StepRunResult::Failure { error },
        }
    }
}
