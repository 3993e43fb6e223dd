//! Единый формат страничных ответов списковых API
//!
//! Бэкенды отдают списки в трёх формах: полная страница, `{count, results}`
//! или голый массив. Нормализация в `PageResult` выполняется один раз,
//! на границе контроллера списка — дальше все работают с единой формой.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Единая форма страницы списка
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    /// Элементы страницы (порядок = порядок сервера)
    pub items: Vec<T>,
    /// Всего записей по текущему запросу
    pub total_count: u64,
    /// Номер страницы (с 1)
    pub page_index: u32,
    /// Размер страницы
    pub page_size: u32,
}

impl<T> PageResult<T> {
    pub fn empty(page_index: u32, page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page_index,
            page_size,
        }
    }
}

/// Ответ спискового API в одной из трёх допустимых форм
///
/// Порядок вариантов важен: untagged-десериализация пробует их сверху вниз,
/// от самой специфичной формы к самой общей.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// Полная страница `{items, totalCount, pageIndex, pageSize}`
    Page(PageResult<T>),
    /// Django-стиль `{count, results}`
    CountResults { count: u64, results: Vec<T> },
    /// Голый массив — одна непагинированная страница
    Items(Vec<T>),
}

impl<T> ListPayload<T> {
    /// Нормализовать ответ в `PageResult`
    ///
    /// `page_index`/`page_size` — параметры исходного запроса; формы без
    /// собственной страничной информации наследуют их. Голый массив
    /// трактуется как единственная страница целиком.
    pub fn into_page(self, page_index: u32, page_size: u32) -> PageResult<T> {
        match self {
            ListPayload::Page(page) => page,
            ListPayload::CountResults { count, results } => PageResult {
                items: results,
                total_count: count,
                page_index,
                page_size,
            },
            ListPayload::Items(items) => {
                let len = items.len() as u64;
                PageResult {
                    total_count: len,
                    page_index: 1,
                    page_size: page_size.max(len as u32),
                    items,
                }
            }
        }
    }
}

/// Параметры спискового запроса: строка поиска плюс дискретные фильтры
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub search: String,
    pub filters: BTreeMap<String, serde_json::Value>,
}

impl ListQuery {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.filters.is_empty()
    }
}

/// Количество страниц: `ceil(total / page_size)`, 0 при пустом списке
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size as u64) as u32
}
