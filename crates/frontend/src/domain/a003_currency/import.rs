use crate::shared::bulk_import::registry::{ImportJobDescriptor, SubmitFuture};

fn submit(file: web_sys::File) -> SubmitFuture {
    Box::pin(super::api::import_csv(file))
}

/// Контракт массовой загрузки валют
pub fn descriptor() -> ImportJobDescriptor {
    ImportJobDescriptor {
        entity_key: "a003_currency",
        expected_headers: &["code", "description", "num_code", "symbol"],
        template_file_name: "currencies_import.csv",
        description: "Валюты",
        submit,
    }
}
