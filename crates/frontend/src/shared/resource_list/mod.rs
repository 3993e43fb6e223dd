//! Универсальный контроллер списковых страниц
//!
//! Прячет за одним фасадом всю бухгалтерию каталога: пагинацию, поиск с
//! debounce, дискретные фильтры, удаление записи, защиту от устаревших
//! ответов. Контроллер сам в сеть не ходит — fetch и delete внедряются
//! страницей, поэтому один и тот же код обслуживает любой справочник.

pub mod state;

pub use state::{RequestVersion, ResourceListState};

use contracts::shared::paging::{ListPayload, ListQuery};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Окно debounce для поиска по умолчанию, мс
pub const DEFAULT_DEBOUNCE_MS: u32 = 500;

/// Размер страницы по умолчанию
pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<ListPayload<T>, String>>>>;
pub type FetchFn<T> = Rc<dyn Fn(u32, u32, ListQuery) -> FetchFuture<T>>;
pub type DeleteFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;
pub type DeleteFn = Rc<dyn Fn(String) -> DeleteFuture>;

/// Канал диагностики: (сообщение для пользователя, техническая причина)
pub type ReportFn = Rc<dyn Fn(&str, Option<&str>)>;

/// Конфигурация контроллера
pub struct ResourceListOptions {
    page_size: u32,
    initial_filters: BTreeMap<String, Value>,
    auto_load: bool,
    resource_name: String,
    debounce_ms: u32,
    on_error: Option<ReportFn>,
}

impl ResourceListOptions {
    /// `resource_name` используется только в диагностических сообщениях
    pub fn new(resource_name: impl Into<String>) -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            initial_filters: BTreeMap::new(),
            auto_load: true,
            resource_name: resource_name.into(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            on_error: None,
        }
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn initial_filters(mut self, filters: BTreeMap<String, Value>) -> Self {
        self.initial_filters = filters;
        self
    }

    /// При `false` первый запрос уйдёт только после явного `reload()`
    pub fn auto_load(mut self, auto_load: bool) -> Self {
        self.auto_load = auto_load;
        self
    }

    pub fn debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Подписка страницы на ошибки (баннер и т.п.); лог пишется всегда
    pub fn on_error(mut self, on_error: impl Fn(&str, Option<&str>) + 'static) -> Self {
        self.on_error = Some(Rc::new(on_error));
        self
    }
}

impl Default for ResourceListOptions {
    fn default() -> Self {
        Self::new("list")
    }
}

/// Хэндл контроллера; дешёвый Copy, можно свободно раздавать замыканиям view
pub struct ResourceListController<T: 'static> {
    state: RwSignal<ResourceListState<T>>,
    fetcher: StoredValue<FetchFn<T>, LocalStorage>,
    deleter: StoredValue<Option<DeleteFn>, LocalStorage>,
    reporter: StoredValue<ReportFn, LocalStorage>,
    versions: StoredValue<RequestVersion>,
    debounce: StoredValue<RequestVersion>,
    resource_name: StoredValue<String>,
    debounce_ms: u32,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Clone for ResourceListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Copy for ResourceListController<T> {}

/// Создать списковый контроллер без операции удаления
pub fn use_resource_list<T, F, Fut>(
    fetch: F,
    options: ResourceListOptions,
) -> ResourceListController<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(u32, u32, ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<ListPayload<T>, String>> + 'static,
{
    let fetcher: FetchFn<T> =
        Rc::new(move |page, page_size, query| Box::pin(fetch(page, page_size, query)));
    ResourceListController::create(fetcher, None, options)
}

/// Создать списковый контроллер с операцией удаления
pub fn use_resource_list_with_delete<T, F, Fut, D, DFut>(
    fetch: F,
    delete: D,
    options: ResourceListOptions,
) -> ResourceListController<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(u32, u32, ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<ListPayload<T>, String>> + 'static,
    D: Fn(String) -> DFut + 'static,
    DFut: Future<Output = Result<(), String>> + 'static,
{
    let fetcher: FetchFn<T> =
        Rc::new(move |page, page_size, query| Box::pin(fetch(page, page_size, query)));
    let deleter: DeleteFn = Rc::new(move |id| Box::pin(delete(id)));
    ResourceListController::create(fetcher, Some(deleter), options)
}

impl<T: Clone + PartialEq + Send + Sync + 'static> ResourceListController<T> {
    fn create(
        fetcher: FetchFn<T>,
        deleter: Option<DeleteFn>,
        options: ResourceListOptions,
    ) -> Self {
        let reporter: ReportFn = options.on_error.unwrap_or_else(|| Rc::new(|_, _| {}));

        let controller = Self {
            state: RwSignal::new(ResourceListState::new(
                options.page_size,
                options.initial_filters,
            )),
            fetcher: StoredValue::new_local(fetcher),
            deleter: StoredValue::new_local(deleter),
            reporter: StoredValue::new_local(reporter),
            versions: StoredValue::new(RequestVersion::default()),
            debounce: StoredValue::new(RequestVersion::default()),
            resource_name: StoredValue::new(options.resource_name),
            debounce_ms: options.debounce_ms,
        };

        if options.auto_load {
            controller.spawn_fetch();
        }

        controller
    }

    /// Сигнал состояния для view
    pub fn state(&self) -> RwSignal<ResourceListState<T>> {
        self.state
    }

    /// Принудительно перечитать текущую страницу
    pub fn reload(&self) {
        self.spawn_fetch();
    }

    /// Перейти на страницу `page`
    ///
    /// Выход за границы `[1, total_pages]` и переход на текущую страницу —
    /// no-op без запроса.
    pub fn set_page(&self, page: u32) {
        let accepted = self
            .state
            .with_untracked(|s| page != s.page && s.page_in_bounds(page));
        if !accepted {
            return;
        }
        self.commit(move |s| s.page = page);
        self.spawn_fetch();
    }

    /// Новая строка поиска
    ///
    /// Строка и сброс на 1-ю страницу применяются сразу, запрос уходит
    /// после окна тишины: каждый новый ввод перезапускает таймер, серия
    /// нажатий схлопывается в один запрос. Уже улетевший запрос не
    /// отменяется — его добьёт проверка версий.
    pub fn search(&self, query: impl Into<String>) {
        let query = query.into();
        self.commit(move |s| s.set_search(query));

        let ticket = {
            let mut debounce = self.debounce.get_value();
            let ticket = debounce.issue();
            self.debounce.set_value(debounce);
            ticket
        };
        let controller = *self;
        let delay = self.debounce_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if !controller.debounce.get_value().is_current(ticket) {
                // Окно перезапущено новым вводом
                return;
            }
            controller.spawn_fetch();
        });
    }

    /// Дослить фильтры; фильтры — дискретные действия UI, запрос сразу
    pub fn apply_filters(&self, partial: BTreeMap<String, Value>) {
        self.commit(move |s| s.merge_filters(partial));
        self.spawn_fetch();
    }

    /// Удалить запись и перечитать список
    ///
    /// Никакого оптимистичного удаления строки: сервер может отказать по
    /// ссылочным ограничениям, поэтому список меняется только после
    /// подтверждённого удаления.
    pub fn remove(&self, id: impl Into<String>) {
        let Some(deleter) = self.deleter.get_value() else {
            log::warn!(
                "[{}] remove() без внедрённой операции удаления",
                self.resource_name.with_value(|n| n.clone())
            );
            return;
        };
        let id = id.into();
        let controller = *self;
        spawn_local(async move {
            match deleter(id).await {
                Ok(()) => controller.reload(),
                Err(err) => controller.report(&err, None),
            }
        });
    }

    // ------------------------------------------------------------------
    // Внутренности
    // ------------------------------------------------------------------

    fn spawn_fetch(&self) {
        let ticket = {
            let mut versions = self.versions.get_value();
            let ticket = versions.issue();
            self.versions.set_value(versions);
            ticket
        };

        let (page, page_size, query) = self
            .state
            .with_untracked(|s| (s.page, s.page_size, s.query()));
        self.commit(|s| s.begin_fetch());

        let fetcher = self.fetcher.get_value();
        let controller = *self;
        spawn_local(async move {
            let outcome = fetcher(page, page_size, query).await;
            if !controller.versions.get_value().is_current(ticket) {
                // Устаревший ответ: после нас уже ушёл более новый запрос
                return;
            }
            match outcome {
                Ok(payload) => {
                    let page_result = payload.into_page(page, page_size);
                    controller.commit(move |s| s.apply_page(page_result));
                }
                Err(err) => {
                    controller.report("Не удалось загрузить список", Some(&err));
                    controller.commit(|s| s.apply_error());
                }
            }
        });
    }

    /// Записать изменение состояния, уведомив подписчиков только если
    /// наружное состояние действительно изменилось
    fn commit(&self, mutate: impl FnOnce(&mut ResourceListState<T>)) {
        let mut next = self.state.get_untracked();
        mutate(&mut next);
        if self.state.with_untracked(|current| *current != next) {
            self.state.set(next);
        }
    }

    fn report(&self, message: &str, cause: Option<&str>) {
        let name = self.resource_name.with_value(|n| n.clone());
        match cause {
            Some(cause) => log::error!("[{}] {}: {}", name, message, cause),
            None => log::error!("[{}] {}", name, message),
        }
        self.reporter.with_value(|reporter| reporter(message, cause));
    }
}
