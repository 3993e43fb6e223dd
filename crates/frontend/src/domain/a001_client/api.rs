//! API client для справочника клиентов

use crate::shared::api_helpers::{api_base, list_params};
use contracts::shared::bulk_import::ImportResult;
use contracts::shared::paging::{ListPayload, ListQuery};
use gloo_net::http::Request;

use contracts::domain::a001_client::aggregate::Client;

fn collection_url() -> String {
    format!("{}/api/client", api_base())
}

/// Страница списка клиентов
pub async fn fetch_page(
    page: u32,
    page_size: u32,
    query: ListQuery,
) -> Result<ListPayload<Client>, String> {
    let url = format!("{}?{}", collection_url(), list_params(page, page_size, &query));
    Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// Удалить клиента
///
/// Текст отказа сервера (например, про зависимые записи) уходит наверх
/// как есть.
pub async fn delete_item(id: String) -> Result<(), String> {
    let resp = Request::delete(&format!("{}/{}", collection_url(), id))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if resp.ok() {
        return Ok(());
    }

    let body = resp.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Err(crate::shared::bulk_import::runner::extract_error_message(
        &body,
    ))
}

/// Отправить CSV на серверный импорт
pub async fn import_csv(file: web_sys::File) -> Result<ImportResult, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| format!("{e:?}"))?;

    let resp = Request::post(&format!("{}/import", collection_url()))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        // Сырое тело: сообщение достаёт runner
        return Err(resp
            .text()
            .await
            .unwrap_or_else(|_| format!("HTTP {}", resp.status())));
    }

    resp.json().await.map_err(|e| e.to_string())
}
