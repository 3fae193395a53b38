use crate::errors::StepError;
use crate::step::StepStatus;

/// Qué le pasó a un step durante una corrida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Ejecutado con éxito; `state_changed` indica si hubo snapshot nuevo.
    Executed { state_changed: bool },
    /// Ejecutado con fallo de negocio (persistido como `Error`).
    Failed { error: StepError },
    /// No ejecutado por su estado persistido.
    Skipped { status: StepStatus },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub name: String,
    pub outcome: StepOutcome,
}

/// Resultado completo de `FlowEngine::run_detailed`.
#[derive(Debug, Clone)]
pub struct RunSummary<S> {
    pub state: S,
    /// Un reporte por step registrado, en orden de registro.
    pub reports: Vec<StepReport>,
}

impl<S> RunSummary<S> {
    pub fn outcome(&self, step_name: &str) -> Option<&StepOutcome> {
        self.reports.iter().find(|r| r.name == step_name).map(|r| &r.outcome)
    }

    pub fn executed_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, StepOutcome::Executed { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, StepOutcome::Failed { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, StepOutcome::Skipped { .. }))
            .count()
    }

    pub fn into_state(self) -> S {
        self.state
    }
}
