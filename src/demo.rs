//! Workflow de referencia de dos steps.
//!
//! `Step1SingleState` obtiene `value1` de una llamada externa y
//! `Step2SingleState` obtiene `value2` de una segunda llamada. Ambos resuelven
//! el cliente desde las capacidades del engine.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use stateflow_core::{CoreEngineError, FlowEngine, StatePersistor, StepContext, StepError};
use uuid::Uuid;

pub const STEP1: &str = "Step1SingleState";
pub const STEP2: &str = "Step2SingleState";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Step1SingleState {
    pub value1: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Step2SingleState {
    pub value2: i64,
}

/// Estado del workflow de referencia.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DemoState {
    pub step1_single: Step1SingleState,
    pub step2_single: Step2SingleState,
}

impl DemoState {
    pub fn new(value1: impl Into<String>, value2: i64) -> Self {
        Self { step1_single: Step1SingleState { value1: value1.into() },
               step2_single: Step2SingleState { value2 } }
    }
}

/// Cliente externo que consumen los steps del workflow.
#[async_trait]
pub trait DemoClient: Send + Sync {
    async fn call1(&self, parameter1: &str) -> Result<String, StepError>;
    async fn call2(&self) -> Result<i64, StepError>;
}

/// Cliente con respuestas fijas, usado por el binario.
#[derive(Debug, Clone)]
pub struct StaticDemoClient {
    pub value1: String,
    pub value2: i64,
}

#[async_trait]
impl DemoClient for StaticDemoClient {
    async fn call1(&self, parameter1: &str) -> Result<String, StepError> {
        Ok(format!("{}:{parameter1}", self.value1))
    }

    async fn call2(&self) -> Result<i64, StepError> {
        Ok(self.value2)
    }
}

async fn step1(state: DemoState, ctx: StepContext, parameter1: String) -> Result<DemoState, StepError> {
    let client = ctx.require::<Arc<dyn DemoClient>>()?;
    let value1 = client.call1(&parameter1).await?;
    debug!("demo:step1 run_id={} value1={}", ctx.run_id(), value1);
    Ok(DemoState { step1_single: Step1SingleState { value1 },
                   ..state })
}

async fn step2(state: DemoState, ctx: StepContext) -> Result<DemoState, StepError> {
    let client = ctx.require::<Arc<dyn DemoClient>>()?;
    let value2 = client.call2().await?;
    Ok(DemoState { step2_single: Step2SingleState { value2 },
                   ..state })
}

/// Construye el engine del workflow de referencia para `run_id`.
pub fn demo_engine<P>(run_id: Uuid,
                      persistor: P,
                      client: Arc<dyn DemoClient>,
                      parameter1: &str)
                      -> Result<FlowEngine<DemoState, P>, CoreEngineError>
    where P: StatePersistor<DemoState> + 'static
{
    let parameter1 = parameter1.to_string();
    FlowEngine::builder(run_id, persistor).capability(client)
                                          .step(STEP1, move |state, ctx| step1(state, ctx, parameter1.clone()))
                                          .step(STEP2, step2)
                                          .build()
}
