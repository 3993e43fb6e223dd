//! Фазы одной интерактивной загрузки
//!
//! `Idle → FileSelected → Uploading → {Success | Error}`; выбор нового
//! файла из терминальной фазы возвращает в `FileSelected`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportPhase {
    Idle,
    FileSelected,
    Uploading,
    Success,
    Error,
}

impl ImportPhase {
    /// Фаза после выбора файла
    ///
    /// Во время загрузки выбор файла заблокирован, поэтому из `Uploading`
    /// перехода нет.
    pub fn on_file_selected(self) -> ImportPhase {
        match self {
            ImportPhase::Uploading => ImportPhase::Uploading,
            _ => ImportPhase::FileSelected,
        }
    }

    /// Можно ли запускать отправку
    pub fn can_start_upload(self) -> bool {
        self == ImportPhase::FileSelected
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ImportPhase::Success | ImportPhase::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_only_from_file_selected() {
        assert!(!ImportPhase::Idle.can_start_upload());
        assert!(ImportPhase::FileSelected.can_start_upload());
        assert!(!ImportPhase::Uploading.can_start_upload());
        assert!(!ImportPhase::Success.can_start_upload());
        assert!(!ImportPhase::Error.can_start_upload());
    }

    #[test]
    fn test_new_file_from_terminal_phases() {
        assert_eq!(
            ImportPhase::Success.on_file_selected(),
            ImportPhase::FileSelected
        );
        assert_eq!(
            ImportPhase::Error.on_file_selected(),
            ImportPhase::FileSelected
        );
        assert_eq!(
            ImportPhase::Idle.on_file_selected(),
            ImportPhase::FileSelected
        );
        // Во время загрузки выбор файла не меняет фазу
        assert_eq!(
            ImportPhase::Uploading.on_file_selected(),
            ImportPhase::Uploading
        );
    }
}
