use serde::{Deserialize, Serialize};

/// Último resultado conocido de un Step.
///
/// El código numérico es sólo una conveniencia de codificación (así se
/// serializa); no define un orden entre estados. `NotStarted` es el único
/// estado que provoca la ejecución del step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum StepStatus {
    /// El step fue marcado para no ejecutarse.
    Skipped,
    /// La última ejecución del step falló.
    Error,
    /// El step aún no se ejecutó (o debe re-ejecutarse).
    #[default]
    NotStarted,
    /// El step finalizó correctamente.
    Success,
}

impl StepStatus {
    pub const fn code(self) -> i8 {
        match self {
            StepStatus::Skipped => -2,
            StepStatus::Error => -1,
            StepStatus::NotStarted => 0,
            StepStatus::Success => 1,
        }
    }

    /// `true` si el engine debe ejecutar un step con este estado.
    pub const fn is_runnable(self) -> bool {
        matches!(self, StepStatus::NotStarted)
    }
}

/// Código numérico desconocido al decodificar un `StepStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown step status code {0}")]
pub struct UnknownStatusCode(pub i8);

impl TryFrom<i8> for StepStatus {
    type Error = UnknownStatusCode;

    fn try_from(code: i8) -> Result<Self, UnknownStatusCode> {
        match code {
            -2 => Ok(StepStatus::Skipped),
            -1 => Ok(StepStatus::Error),
            0 => Ok(StepStatus::NotStarted),
            1 => Ok(StepStatus::Success),
            other => Err(UnknownStatusCode(other)),
        }
    }
}

impl From<StepStatus> for i8 {
    fn from(status: StepStatus) -> Self {
        status.code()
    }
}
