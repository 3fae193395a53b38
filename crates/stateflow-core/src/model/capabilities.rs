//! Registro de capacidades: colaboradores (clientes externos, relojes, etc.)
//! que los steps obtienen por tipo.
//!
//! El engine nunca inspecciona lo que se resuelve aquí; sólo lo entrega.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::StepError;

#[derive(Default, Clone)]
pub struct Capabilities {
    inner: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra `value` bajo su tipo. Un registro previo del mismo tipo se
    /// reemplaza.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) -> &mut Self {
        self.insert_shared(Arc::new(value))
    }

    /// Igual que `insert` pero con un `Arc` ya existente; útil cuando el
    /// llamador necesita conservar su propio handle.
    pub fn insert_shared<T: Any + Send + Sync>(&mut self, value: Arc<T>) -> &mut Self {
        self.inner.insert(TypeId::of::<T>(), value);
        self
    }

    /// Variante encadenable de `insert`.
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.inner
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|v| v.downcast::<T>().ok())
    }

    pub fn require<T: Any + Send + Sync>(&self) -> Result<Arc<T>, StepError> {
        self.get::<T>()
            .ok_or_else(|| StepError::MissingCapability(type_name::<T>().to_string()))
    }

    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.inner.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities").field("len", &self.inner.len()).finish()
    }
}
