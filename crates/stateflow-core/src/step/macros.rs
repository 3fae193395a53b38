//! Macros utilitarias exportadas en la raíz del crate:
//!   use stateflow_core::ensure_set;

/// Valida que una expresión esté seteada usando su propio texto como nombre de
/// propiedad. Devuelve `Result<(), StepError>` para usar con `?`.
///
/// ```ignore
/// ensure_set!(state.step1_single.value1, "Step1SingleState")?;
/// // Err: "Property state.step1_single.value1 not set, set or rerun Step1SingleState"
/// ```
#[macro_export]
macro_rules! ensure_set {
    ($value:expr, $step:expr) => {
        $crate::step::ensure_set(&$value, stringify!($value), $step)
    };
}

#[cfg(test)]
mod tests {
    use crate::errors::StepError;

    struct Single {
        value1: String,
    }

    #[test]
    fn ensure_set_macro_uses_expression_text() {
        let s = Single { value1: String::new() };
        let err = crate::ensure_set!(s.value1, "Step1SingleState").unwrap_err();
        assert_eq!(err, StepError::property_not_set("s.value1", "Step1SingleState"));
    }
}
