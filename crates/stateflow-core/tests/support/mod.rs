//! Fixture compartida: estado de prueba, cliente falso y workflow de dos steps.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use stateflow_core::{FlowEngine, InMemoryPersistor, StepContext, StepError};
use uuid::Uuid;

pub const STEP1: &str = "Step1SingleState";
pub const STEP2: &str = "Step2SingleState";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Step1SingleState {
    pub value1: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Step2SingleState {
    pub value2: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TestState {
    pub step1_single: Step1SingleState,
    pub step2_single: Step2SingleState,
}

pub fn build_state(value1: &str, value2: i64) -> TestState {
    TestState { step1_single: Step1SingleState { value1: value1.to_string() },
                step2_single: Step2SingleState { value2 } }
}

/// Cliente externo simulado: respuestas configurables y contadores de llamadas.
#[derive(Default)]
pub struct FakeClient {
    value1: Mutex<Option<String>>,
    value2: Mutex<Option<i64>>,
    fail_call1: Mutex<Option<String>>,
    call1_params: Mutex<Vec<String>>,
    call2_count: AtomicUsize,
}

impl FakeClient {
    pub fn returning(value1: &str, value2: i64) -> Arc<Self> {
        let client = Self::default();
        *client.value1.lock().unwrap() = Some(value1.to_string());
        *client.value2.lock().unwrap() = Some(value2);
        Arc::new(client)
    }

    pub fn fail_call1_with(&self, message: &str) {
        *self.fail_call1.lock().unwrap() = Some(message.to_string());
    }

    pub fn call1_count(&self) -> usize {
        self.call1_params.lock().unwrap().len()
    }

    pub fn call1_params(&self) -> Vec<String> {
        self.call1_params.lock().unwrap().clone()
    }

    pub fn call2_count(&self) -> usize {
        self.call2_count.load(Ordering::SeqCst)
    }

    pub async fn call1(&self, parameter1: &str) -> Result<String, StepError> {
        self.call1_params.lock().unwrap().push(parameter1.to_string());
        if let Some(message) = self.fail_call1.lock().unwrap().clone() {
            return Err(StepError::Failed(message));
        }
        tokio::task::yield_now().await;
        Ok(self.value1.lock().unwrap().clone().unwrap_or_default())
    }

    pub async fn call2(&self) -> Result<i64, StepError> {
        self.call2_count.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        Ok(self.value2.lock().unwrap().unwrap_or_default())
    }
}

pub async fn step1(state: TestState, ctx: StepContext, parameter1: String) -> Result<TestState, StepError> {
    let client = ctx.require::<FakeClient>()?;
    let value1 = client.call1(&parameter1).await?;
    Ok(TestState { step1_single: Step1SingleState { value1 },
                   ..state })
}

pub async fn step2(state: TestState, ctx: StepContext) -> Result<TestState, StepError> {
    let client = ctx.require::<FakeClient>()?;
    let value2 = client.call2().await?;
    Ok(TestState { step2_single: Step2SingleState { value2 },
                   ..state })
}

pub type TestPersistor = Arc<InMemoryPersistor<TestState>>;

/// Workflow de referencia: `Step1SingleState` y luego `Step2SingleState`.
pub fn test_workflow(run_id: Uuid,
                     persistor: TestPersistor,
                     client: Arc<FakeClient>,
                     parameter1: &str)
                     -> FlowEngine<TestState, TestPersistor> {
    let parameter1 = parameter1.to_string();
    FlowEngine::builder(run_id, persistor).shared_capability(client)
                                          .step(STEP1, move |state, ctx| step1(state, ctx, parameter1.clone()))
                                          .step(STEP2, step2)
                                          .build()
                                          .expect("reference workflow registers cleanly")
}
