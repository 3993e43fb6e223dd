use contracts::shared::paging::{total_pages, ListQuery, PageResult};
use serde_json::Value;
use std::collections::BTreeMap;

/// Состояние спискового контроллера, видимое презентации
///
/// `loading` — самая первая загрузка конфигурации (до появления данных),
/// полноэкранный спиннер. `paginating` — дозагрузка при уже показанных
/// данных, лёгкий оверлей. Одновременно оба флага не взводятся.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceListState<T> {
    pub data: Vec<T>,
    pub loading: bool,
    pub paginating: bool,
    /// Номер страницы, с 1
    pub page: u32,
    pub page_size: u32,
    /// Всего записей по текущему запросу
    pub total: u64,
    pub search: String,
    pub filters: BTreeMap<String, Value>,
    /// Была ли хоть одна успешная загрузка текущей конфигурации
    pub is_loaded: bool,
}

impl<T: Clone> ResourceListState<T> {
    pub fn new(page_size: u32, filters: BTreeMap<String, Value>) -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            paginating: false,
            page: 1,
            page_size,
            total: 0,
            search: String::new(),
            filters,
            is_loaded: false,
        }
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.page_size)
    }

    /// Допустим ли переход на страницу `page` при текущем `total`
    pub fn page_in_bounds(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages()
    }

    /// Снимок поисковых параметров для передачи в fetch
    pub fn query(&self) -> ListQuery {
        ListQuery {
            search: self.search.clone(),
            filters: self.filters.clone(),
        }
    }

    /// Отметить начало запроса, выбрав вид индикации
    pub fn begin_fetch(&mut self) {
        if self.is_loaded {
            self.loading = false;
            self.paginating = true;
        } else {
            self.loading = true;
            self.paginating = false;
        }
    }

    /// Применить успешно загруженную страницу
    pub fn apply_page(&mut self, page: PageResult<T>) {
        self.data = page.items;
        self.total = page.total_count;
        self.loading = false;
        self.paginating = false;
        self.is_loaded = true;
    }

    /// Сбросить состояние после ошибки загрузки
    ///
    /// Данных больше нет, поэтому следующая загрузка снова пойдёт как
    /// первая (полноэкранная).
    pub fn apply_error(&mut self) {
        self.data.clear();
        self.total = 0;
        self.loading = false;
        self.paginating = false;
        self.is_loaded = false;
    }

    /// Новая строка поиска: любая смена конфигурации возвращает на 1-ю страницу
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    /// Дослить фильтры к текущим; смена конфигурации возвращает на 1-ю страницу
    pub fn merge_filters(&mut self, partial: BTreeMap<String, Value>) {
        self.filters.extend(partial);
        self.page = 1;
    }
}

/// Счётчик версий запросов: применять можно только результат последнего
///
/// Ответ более раннего запроса, пришедший после более позднего, обязан
/// быть отброшен — иначе медленный старый ответ затрёт новое состояние.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestVersion(u64);

impl RequestVersion {
    /// Выдать билет очередного запроса, сделав все предыдущие устаревшими
    pub fn issue(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<i32>, total: u64) -> PageResult<i32> {
        PageResult {
            items,
            total_count: total,
            page_index: 1,
            page_size: 10,
        }
    }

    #[test]
    fn test_first_fetch_is_loading() {
        let mut state = ResourceListState::<i32>::new(10, BTreeMap::new());
        state.begin_fetch();
        assert!(state.loading);
        assert!(!state.paginating);
    }

    #[test]
    fn test_fetch_with_data_is_paginating() {
        let mut state = ResourceListState::new(10, BTreeMap::new());
        state.begin_fetch();
        state.apply_page(page(vec![1, 2, 3], 23));
        assert!(!state.loading);
        assert!(!state.paginating);

        state.begin_fetch();
        assert!(!state.loading);
        assert!(state.paginating);
    }

    #[test]
    fn test_error_resets_to_empty_page() {
        let mut state = ResourceListState::new(10, BTreeMap::new());
        state.begin_fetch();
        state.apply_page(page(vec![1, 2, 3], 23));

        state.begin_fetch();
        state.apply_error();
        assert!(state.data.is_empty());
        assert_eq!(state.total, 0);
        assert!(!state.loading);
        assert!(!state.paginating);

        // После ошибки данных нет — следующая загрузка снова полноэкранная
        state.begin_fetch();
        assert!(state.loading);
    }

    #[test]
    fn test_page_bounds() {
        let mut state = ResourceListState::<i32>::new(10, BTreeMap::new());
        state.apply_page(page(vec![0; 10], 23));

        assert_eq!(state.total_pages(), 3);
        assert!(!state.page_in_bounds(0));
        assert!(state.page_in_bounds(1));
        assert!(state.page_in_bounds(3));
        assert!(!state.page_in_bounds(4));
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = ResourceListState::<i32>::new(10, BTreeMap::new());
        state.page = 3;
        state.set_search("иван".to_string());
        assert_eq!(state.page, 1);
        assert_eq!(state.search, "иван");
    }

    #[test]
    fn test_merge_filters_resets_page() {
        let mut state = ResourceListState::<i32>::new(10, BTreeMap::new());
        state.filters.insert("city".into(), "Москва".into());
        state.page = 3;

        let mut partial = BTreeMap::new();
        partial.insert("status".to_string(), Value::from("active"));
        state.merge_filters(partial);

        assert_eq!(state.page, 1);
        assert_eq!(state.filters["status"], Value::from("active"));
        // Прежние фильтры сохраняются
        assert_eq!(state.filters["city"], Value::from("Москва"));
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut versions = RequestVersion::default();
        let mut state = ResourceListState::new(10, BTreeMap::new());

        // Запрос A ушёл первым, запрос B — вторым
        let ticket_a = versions.issue();
        let ticket_b = versions.issue();

        // B вернулся раньше и применился
        assert!(versions.is_current(ticket_b));
        state.apply_page(page(vec![2], 1));

        // Ответ A пришёл последним — устарел, применять нельзя
        assert!(!versions.is_current(ticket_a));

        assert_eq!(state.data, vec![2]);
    }
}
