//! Каталог импортёров
//!
//! Единственное место регистрации; вызывается один раз на старте, до
//! монтирования приложения. Новая сущность — одна строка здесь плюс
//! дескриптор в её модуле.

use super::registry;

pub fn register_all() {
    registry::register(crate::domain::a001_client::import::descriptor());
    registry::register(crate::domain::a002_bank::import::descriptor());
    registry::register(crate::domain::a003_currency::import::descriptor());
}
