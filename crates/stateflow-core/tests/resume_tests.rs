//! Reanudación: registros previos deciden qué se ejecuta.

mod support;

use std::sync::Arc;

use stateflow_core::{ensure_set, FlowEngine, InMemoryPersistor, StepContext, StepError, StepRecord};
use support::{build_state, test_workflow, FakeClient, TestState, STEP1, STEP2};
use uuid::Uuid;

#[tokio::test]
async fn completed_steps_are_not_re_executed() {
    let run_id = Uuid::new_v4();
    let store = Arc::new(InMemoryPersistor::new());
    store.seed(run_id, vec![StepRecord::success(STEP1)], build_state("value1", 0));
    let client = FakeClient::returning("value1", 2);
    let engine = test_workflow(run_id, Arc::clone(&store), Arc::clone(&client), "param1");

    let resumed = engine.run(TestState::default()).await.unwrap();

    assert_eq!(client.call1_count(), 0);
    assert_eq!(client.call2_count(), 1);

    // mismo resultado que una corrida desde cero
    let fresh_id = Uuid::new_v4();
    let fresh = test_workflow(fresh_id, Arc::new(InMemoryPersistor::new()), FakeClient::returning("value1", 2), "param1");
    assert_eq!(resumed, fresh.run(TestState::default()).await.unwrap());
}

#[tokio::test]
async fn a_second_run_on_the_same_store_resumes_after_a_failure() {
    let run_id = Uuid::new_v4();
    let store = Arc::new(InMemoryPersistor::new());

    let failing = FakeClient::returning("value1", 2);
    failing.fail_call1_with("timeout");
    let first = test_workflow(run_id, Arc::clone(&store), failing, "param1");
    assert_eq!(first.run(TestState::default()).await.unwrap(), build_state("", 2));

    // Un step en Error no se reintenta: sólo NotStarted se ejecuta.
    let healthy = FakeClient::returning("value1", 2);
    let second = test_workflow(run_id, Arc::clone(&store), Arc::clone(&healthy), "param1");
    let state = second.run(TestState::default()).await.unwrap();
    assert_eq!(state, build_state("", 2));
    assert_eq!((healthy.call1_count(), healthy.call2_count()), (0, 0));

    // Reabrir el step (NotStarted) permite re-ejecutarlo sobre el último snapshot.
    store.seed(run_id,
               vec![StepRecord::not_started(STEP1), StepRecord::success(STEP2)],
               state);
    let third = test_workflow(run_id, Arc::clone(&store), Arc::clone(&healthy), "param1");
    assert_eq!(third.run(TestState::default()).await.unwrap(), build_state("value1", 2));
    assert_eq!((healthy.call1_count(), healthy.call2_count()), (1, 0));
}

#[tokio::test]
async fn persisted_record_order_does_not_matter() {
    let run_id = Uuid::new_v4();
    let store = Arc::new(InMemoryPersistor::new());
    store.seed(run_id,
               vec![StepRecord::success(STEP2), StepRecord::not_started(STEP1)],
               build_state("", 7));
    let client = FakeClient::returning("value1", 2);
    let engine = test_workflow(run_id, Arc::clone(&store), Arc::clone(&client), "param1");

    let state = engine.run(TestState::default()).await.unwrap();

    assert_eq!(state, build_state("value1", 7));
    assert_eq!((client.call1_count(), client.call2_count()), (1, 0));
}

#[tokio::test]
async fn independent_runs_share_a_store_without_interference() {
    let store = Arc::new(InMemoryPersistor::new());
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    store.seed(b, vec![StepRecord::skipped(STEP1), StepRecord::skipped(STEP2)], build_state("b", 1));

    let engine_a = test_workflow(a, Arc::clone(&store), FakeClient::returning("a", 10), "pa");
    let engine_b = test_workflow(b, Arc::clone(&store), FakeClient::returning("x", 99), "pb");
    let (ra, rb) = tokio::join!(engine_a.run(TestState::default()), engine_b.run(TestState::default()));

    assert_eq!(ra.unwrap(), build_state("a", 10));
    assert_eq!(rb.unwrap(), build_state("b", 1));
    assert!(store.calls(b).is_empty());
    assert_eq!(store.successes(a).len(), 2);
}

async fn require_step1_output(state: TestState, _ctx: StepContext) -> Result<TestState, StepError> {
    ensure_set!(state.step1_single.value1, STEP1)?;
    Ok(state)
}

#[tokio::test]
async fn unset_property_is_reported_as_a_step_failure() {
    let run_id = Uuid::new_v4();
    let store = Arc::new(InMemoryPersistor::<TestState>::new());
    let mut engine = FlowEngine::new(run_id, Arc::clone(&store));
    engine.add("Summary", require_step1_output).unwrap();

    engine.run(TestState::default()).await.unwrap();

    assert_eq!(store.errors(run_id),
               vec![("Summary".to_string(),
                     "Property state.step1_single.value1 not set, set or rerun Step1SingleState".to_string())]);
}
