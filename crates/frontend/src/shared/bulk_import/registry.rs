//! Реестр импортёров
//!
//! Глобальная таблица "ключ сущности → контракт загрузки". Заполняется
//! один раз на старте (`catalog::register_all`), дальше только читается.

use contracts::shared::bulk_import::ImportResult;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::RwLock;

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<ImportResult, String>>>>;

/// Контракт массовой загрузки одной сущности
///
/// `submit` — обычный указатель на функцию: дескриптор остаётся `Send +
/// Sync` и спокойно живёт в глобальной таблице.
#[derive(Clone)]
pub struct ImportJobDescriptor {
    /// Уникальный ключ сущности ("a001_client")
    pub entity_key: &'static str,
    /// Ожидаемые колонки CSV, в порядке шаблона
    pub expected_headers: &'static [&'static str],
    /// Имя скачиваемого файла-шаблона
    pub template_file_name: &'static str,
    /// Название для селектора импортёров
    pub description: &'static str,
    /// Отправка файла на сервер
    pub submit: fn(web_sys::File) -> SubmitFuture,
}

static REGISTRY: Lazy<RwLock<HashMap<&'static str, ImportJobDescriptor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Зарегистрировать импортёр
///
/// Повторная регистрация ключа отклоняется — выигрывает первая запись,
/// дубль уходит в лог. Так неверно сконфигурированный дубликат не
/// подменит боевой импортёр молча.
pub fn register(descriptor: ImportJobDescriptor) -> bool {
    let mut map = REGISTRY.write().unwrap_or_else(|e| e.into_inner());
    if map.contains_key(descriptor.entity_key) {
        log::warn!(
            "Реестр импортёров: дубликат ключа '{}' отклонён",
            descriptor.entity_key
        );
        return false;
    }
    map.insert(descriptor.entity_key, descriptor);
    true
}

/// Найти импортёр по ключу сущности
pub fn lookup(entity_key: &str) -> Option<ImportJobDescriptor> {
    let map = REGISTRY.read().unwrap_or_else(|e| e.into_inner());
    map.get(entity_key).cloned()
}

/// (ключ, название) всех зарегистрированных импортёров, по ключу
pub fn registered_keys() -> Vec<(&'static str, &'static str)> {
    let map = REGISTRY.read().unwrap_or_else(|e| e.into_inner());
    let mut keys: Vec<_> = map
        .values()
        .map(|d| (d.entity_key, d.description))
        .collect();
    keys.sort_by_key(|(key, _)| *key);
    keys
}

/// Содержимое файла-шаблона: одна строка с заголовками через запятую
///
/// Порядок колонок — ровно тот, который ждёт обработчик отправки.
pub fn generate_template(descriptor: &ImportJobDescriptor) -> String {
    descriptor.expected_headers.join(",")
}
