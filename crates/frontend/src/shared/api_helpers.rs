//! Общая обвязка HTTP-клиентов сущностей

use contracts::shared::paging::ListQuery;
use serde_json::Value;

/// Базовый адрес API (dev-сервер слушает :3000 на том же хосте)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Query string спискового запроса
///
/// Порядок детерминирован: page, page_size, search, затем фильтры по
/// алфавиту ключей. Null-фильтры в строку не попадают (для страницы это
/// "фильтр сброшен").
pub fn list_params(page: u32, page_size: u32, query: &ListQuery) -> String {
    let mut params = format!("page={}&page_size={}", page, page_size);

    if !query.search.trim().is_empty() {
        params += &format!("&search={}", urlencoding::encode(query.search.trim()));
    }

    for (key, value) in &query.filters {
        let rendered = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        params += &format!("&{}={}", key, urlencoding::encode(&rendered));
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_params_without_search_and_filters() {
        let query = ListQuery::default();
        assert_eq!(list_params(1, 10, &query), "page=1&page_size=10");
    }

    #[test]
    fn test_params_encode_search() {
        let query = ListQuery {
            search: "иван иванов".to_string(),
            filters: BTreeMap::new(),
        };
        assert_eq!(
            list_params(2, 20, &query),
            "page=2&page_size=20&search=%D0%B8%D0%B2%D0%B0%D0%BD%20%D0%B8%D0%B2%D0%B0%D0%BD%D0%BE%D0%B2"
        );
    }

    #[test]
    fn test_params_render_filters_in_key_order() {
        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), Value::from("active"));
        filters.insert("city".to_string(), Value::from("Москва"));
        filters.insert("archived".to_string(), Value::from(false));
        let query = ListQuery {
            search: String::new(),
            filters,
        };

        assert_eq!(
            list_params(1, 10, &query),
            "page=1&page_size=10&archived=false&city=%D0%9C%D0%BE%D1%81%D0%BA%D0%B2%D0%B0&status=active"
        );
    }

    #[test]
    fn test_null_filter_is_skipped() {
        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), Value::Null);
        let query = ListQuery {
            search: String::new(),
            filters,
        };

        assert_eq!(list_params(1, 10, &query), "page=1&page_size=10");
    }
}
