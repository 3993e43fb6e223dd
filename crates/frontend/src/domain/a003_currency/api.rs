//! API client для справочника валют
//!
//! Эндпоинт валют отдаёт весь справочник голым массивом, без пагинации —
//! нормализация контроллера превращает его в одну страницу.

use crate::shared::api_helpers::{api_base, list_params};
use contracts::shared::bulk_import::ImportResult;
use contracts::shared::paging::{ListPayload, ListQuery};
use gloo_net::http::Request;

use contracts::domain::a003_currency::aggregate::Currency;

fn collection_url() -> String {
    format!("{}/api/currency", api_base())
}

/// Весь справочник валют
pub async fn fetch_page(
    page: u32,
    page_size: u32,
    query: ListQuery,
) -> Result<ListPayload<Currency>, String> {
    let url = format!("{}?{}", collection_url(), list_params(page, page_size, &query));
    Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
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
        return Err(resp
            .text()
            .await
            .unwrap_or_else(|_| format!("HTTP {}", resp.status())));
    }

    resp.json().await.map_err(|e| e.to_string())
}
