use crate::shared::bulk_import::registry::{ImportJobDescriptor, SubmitFuture};

fn submit(file: web_sys::File) -> SubmitFuture {
    Box::pin(super::api::import_csv(file))
}

/// Контракт массовой загрузки банков (выгрузка справочника БИК)
pub fn descriptor() -> ImportJobDescriptor {
    ImportJobDescriptor {
        entity_key: "a002_bank",
        expected_headers: &["code", "description", "bic", "corr_account", "city"],
        template_file_name: "banks_import.csv",
        description: "Банки",
        submit,
    }
}
