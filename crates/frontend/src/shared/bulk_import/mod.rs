//! Массовая загрузка справочников из CSV
//!
//! Новая сущность получает bulk-загрузку одной декларативной записью в
//! реестре: ожидаемые колонки, имя файла-шаблона, обработчик отправки.
//! Управляющий код один на всех — generic-виджет, реестр и state machine
//! одной загрузки.

pub mod catalog;
pub mod phase;
pub mod registry;
pub mod runner;
pub mod widget;

pub use phase::ImportPhase;
pub use registry::{generate_template, ImportJobDescriptor};
pub use runner::{run_import, ImportError};
pub use widget::BulkImportWidget;
