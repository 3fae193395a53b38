//! Validación de propiedades requeridas dentro de los steps.
//!
//! Un valor "no seteado" es el default del tipo: cadena vacía, cero,
//! colección vacía o `None`. Los steps lo usan para validar su entrada antes de
//! llamar a colaboradores externos; el engine no lo invoca por su cuenta.

use crate::errors::StepError;

/// Tipos cuyo valor por defecto significa "no seteado".
pub trait Settable {
    fn is_set(&self) -> bool;
}

impl Settable for str {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl Settable for String {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Settable + ?Sized> Settable for &T {
    fn is_set(&self) -> bool {
        (**self).is_set()
    }
}

impl<T> Settable for Option<T> {
    fn is_set(&self) -> bool {
        self.is_some()
    }
}

impl<T> Settable for Vec<T> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Settable for [T] {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! settable_numeric {
    ($($t:ty),+) => {
        $(impl Settable for $t {
            fn is_set(&self) -> bool { *self != 0 }
        })+
    };
}

settable_numeric!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// Devuelve `StepError::PropertyNotSet` si `value` no está seteado.
pub fn ensure_set<T: Settable + ?Sized>(value: &T, property: &str, step: &str) -> Result<(), StepError> {
    if value.is_set() {
        Ok(())
    } else {
        Err(StepError::property_not_set(property, step))
    }
}
