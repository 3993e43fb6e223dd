use crate::shared::bulk_import::registry::{ImportJobDescriptor, SubmitFuture};

fn submit(file: web_sys::File) -> SubmitFuture {
    Box::pin(super::api::import_csv(file))
}

/// Контракт массовой загрузки клиентов
pub fn descriptor() -> ImportJobDescriptor {
    ImportJobDescriptor {
        entity_key: "a001_client",
        expected_headers: &[
            "code",
            "description",
            "full_name",
            "inn",
            "email",
            "phone",
            "status",
        ],
        template_file_name: "clients_import.csv",
        description: "Клиенты",
        submit,
    }
}
