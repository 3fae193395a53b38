//! Superposición de registros persistidos sobre los steps registrados.

use crate::step::{StepDescriptor, StepRecord};

/// Devuelve descriptores nuevos, en orden de registro, con el estado y el
/// error del primer registro cuyo nombre coincide exactamente. Los steps sin
/// registro quedan como estaban (`NotStarted` al registrarse).
///
/// El orden de `records` no influye; registros sin step asociado se ignoran.
pub fn merge_with_records<S: Send + 'static>(descriptors: &[StepDescriptor<S>],
                                             records: &[StepRecord])
                                             -> Vec<StepDescriptor<S>> {
    descriptors.iter()
               .map(|d| match records.iter().find(|r| r.name == d.name) {
                   Some(record) => d.with_record(record),
                   None => d.clone(),
               })
               .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::errors::StepError;
    use crate::model::StepContext;
    use crate::step::{FnStep, StepStatus};

    async fn identity(state: u8, _ctx: StepContext) -> Result<u8, StepError> {
        Ok(state)
    }

    fn descriptor(name: &str) -> StepDescriptor<u8> {
        StepDescriptor::new(Arc::new(FnStep::new(name, identity)))
    }

    #[test]
    fn matches_by_name_not_position() {
        let descriptors = vec![descriptor("a"), descriptor("b"), descriptor("c")];
        let records = vec![StepRecord::failed("c", "boom"), StepRecord::success("a")];

        let merged = merge_with_records(&descriptors, &records);

        let names: Vec<_> = merged.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(merged[0].status, StepStatus::Success);
        assert_eq!(merged[1].status, StepStatus::NotStarted);
        assert_eq!(merged[2].status, StepStatus::Error);
        assert_eq!(merged[2].last_error, "boom");
    }

    #[test]
    fn first_matching_record_wins() {
        let descriptors = vec![descriptor("a")];
        let records = vec![StepRecord::skipped("a"), StepRecord::success("a")];
        let merged = merge_with_records(&descriptors, &records);
        assert_eq!(merged[0].status, StepStatus::Skipped);
    }

    #[test]
    fn input_descriptors_are_left_untouched() {
        let descriptors = vec![descriptor("a")];
        let _ = merge_with_records(&descriptors, &[StepRecord::success("a")]);
        assert_eq!(descriptors[0].status, StepStatus::NotStarted);
    }

    #[test]
    fn exact_name_equality_only() {
        let descriptors = vec![descriptor("Step1")];
        let merged = merge_with_records(&descriptors, &[StepRecord::success("step1")]);
        assert_eq!(merged[0].status, StepStatus::NotStarted);
    }
}
