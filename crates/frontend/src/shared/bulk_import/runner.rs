//! Запуск одной загрузки
//!
//! Одна загрузка на сущность одновременно: повторная отправка того же
//! импортёра до завершения первой отклоняется синхронно, ещё до сети.
//! Вторая загрузка — независимая операция, её нельзя гонять параллельно
//! с первой поверх частично записанных строк на сервере.

use super::registry::ImportJobDescriptor;
use contracts::shared::bulk_import::ImportResult;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Mutex;

/// Ошибка загрузки
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Для этой сущности уже идёт загрузка
    AlreadyInProgress,
    /// Сама отправка отклонена (сеть, валидация до обработки строк)
    Transport(String),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::AlreadyInProgress => write!(f, "Импорт уже выполняется"),
            ImportError::Transport(message) => write!(f, "{}", message),
        }
    }
}

static IN_FLIGHT: Lazy<Mutex<HashSet<&'static str>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Занять слот загрузки сущности; `false` — слот уже занят
fn try_acquire(entity_key: &'static str) -> bool {
    let mut slots = IN_FLIGHT.lock().unwrap_or_else(|e| e.into_inner());
    slots.insert(entity_key)
}

/// Освободить слот
fn release(entity_key: &'static str) {
    let mut slots = IN_FLIGHT.lock().unwrap_or_else(|e| e.into_inner());
    slots.remove(entity_key);
}

/// Выполнить загрузку файла через обработчик дескриптора
///
/// Повторов нет: перезаливка исправленного CSV — новое явное действие
/// пользователя, а не retry тех же байтов. Частичный успех (созданы
/// записи и есть построчные ошибки) — это `Ok`, а не ошибка.
pub async fn run_import(
    descriptor: &ImportJobDescriptor,
    file: web_sys::File,
) -> Result<ImportResult, ImportError> {
    if !try_acquire(descriptor.entity_key) {
        return Err(ImportError::AlreadyInProgress);
    }

    let outcome = (descriptor.submit)(file).await;
    release(descriptor.entity_key);

    match outcome {
        Ok(result) => Ok(result),
        Err(raw) => Err(ImportError::Transport(extract_error_message(&raw))),
    }
}

/// Достать человекочитаемое сообщение из тела ошибки
///
/// Сервер может вернуть JSON с полем message/detail/error — тогда наружу
/// идёт оно; иначе сырой текст как есть, на пустом теле — общий фолбэк.
pub fn extract_error_message(raw: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) {
        for key in ["message", "detail", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }

    if raw.trim().is_empty() {
        "Не удалось загрузить файл".to_string()
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_is_exclusive() {
        assert!(try_acquire("test_slot_a"));
        // Повторный захват того же слота отклоняется
        assert!(!try_acquire("test_slot_a"));
        // Чужой слот свободен
        assert!(try_acquire("test_slot_b"));

        release("test_slot_a");
        assert!(try_acquire("test_slot_a"));

        release("test_slot_a");
        release("test_slot_b");
    }

    #[test]
    fn test_extract_message_from_json() {
        assert_eq!(
            extract_error_message(r#"{"message":"has dependent records"}"#),
            "has dependent records"
        );
        assert_eq!(
            extract_error_message(r#"{"detail":"файл пуст"}"#),
            "файл пуст"
        );
        assert_eq!(
            extract_error_message(r#"{"error":"bad header"}"#),
            "bad header"
        );
    }

    #[test]
    fn test_extract_message_fallbacks() {
        // Не-JSON уходит как есть
        assert_eq!(extract_error_message("HTTP 502"), "HTTP 502");
        // JSON без известных полей — тоже как есть
        assert_eq!(extract_error_message(r#"{"code":42}"#), r#"{"code":42}"#);
        // Пустое тело — общий фолбэк
        assert_eq!(extract_error_message("  "), "Не удалось загрузить файл");
    }
}
