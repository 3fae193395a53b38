//! main-core: ejecuta el workflow de referencia sobre el backend de archivos.
//!
//! Uso: `main-core [RUN_ID] [PARAMETER1]`
//! - sin `RUN_ID` se crea una corrida nueva;
//! - con un `RUN_ID` existente se reanuda desde el primer step pendiente.

use std::sync::Arc;

use stateflow_persistence::{init_dotenv, JsonFilePersistor};
use stateflow_rust::demo::{demo_engine, DemoClient, DemoState, StaticDemoClient};
use stateflow_rust::errors::AppError;
use uuid::Uuid;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    init_dotenv();
    let mut args = std::env::args().skip(1);
    let run_id = match args.next() {
        Some(raw) => Uuid::parse_str(&raw).map_err(|e| AppError::InvalidArgument(format!("run id '{raw}': {e}")))?,
        None => Uuid::new_v4(),
    };
    let parameter1 = args.next().unwrap_or_else(|| "param1".to_string());

    let persistor = JsonFilePersistor::from_env();
    println!("Directorio de estado: {}", persistor.dir().display());

    let client: Arc<dyn DemoClient> = Arc::new(StaticDemoClient { value1: "value1".into(),
                                                                  value2: 2 });
    let engine = demo_engine(run_id, persistor, client, &parameter1)?;
    let summary = engine.run_detailed(DemoState::default()).await?;

    for report in &summary.reports {
        println!("{:<20} {:?}", report.name, report.outcome);
    }
    println!("{}", serde_json::to_string_pretty(&summary.state)?);
    println!("run_id: {run_id}");
    Ok(())
}
