//! Результат массовой загрузки CSV
//!
//! Форма ответа серверного обработчика импорта. Ядро трактует её как
//! непрозрачную, различая только наличие построчных ошибок.

use serde::{Deserialize, Serialize};

/// Итог одной загрузки CSV
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImportResult {
    /// Человекочитаемое резюме ("Загружено 8 записей")
    pub message: String,
    /// Создано записей
    pub created: u32,
    /// Обновлено записей
    pub updated: u32,
    /// Построчные ошибки ("строка 4: нет email")
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ImportResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Частичный успех: что-то записано, но есть отклонённые строки.
    /// Это терминальный успех, а не ошибка — вызывающая сторона обязана
    /// показать и счётчики, и список ошибок.
    pub fn is_partial(&self) -> bool {
        self.has_errors() && (self.created > 0 || self.updated > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_default_to_empty() {
        let json = r#"{"message":"ok","created":8,"updated":2}"#;
        let result: ImportResult = serde_json::from_str(json).unwrap();
        assert!(!result.has_errors());
        assert!(!result.is_partial());
    }

    #[test]
    fn test_partial_success() {
        let json = r#"{"message":"ok","created":8,"updated":2,"errors":["строка 4: нет email"]}"#;
        let result: ImportResult = serde_json::from_str(json).unwrap();
        assert!(result.has_errors());
        assert!(result.is_partial());
        assert_eq!(result.created, 8);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_all_rows_rejected_is_not_partial() {
        let result = ImportResult {
            message: "нет валидных строк".into(),
            created: 0,
            updated: 0,
            errors: vec!["строка 1: пусто".into()],
        };
        assert!(result.has_errors());
        assert!(!result.is_partial());
    }
}
