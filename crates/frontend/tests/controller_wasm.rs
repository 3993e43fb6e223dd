//! Браузерные тесты асинхронного поведения контроллера и импортёра:
//! debounce, отбрасывание устаревших ответов, single-flight загрузки.
//! Запуск: `wasm-pack test --headless --firefox crates/frontend`

#![cfg(target_arch = "wasm32")]

use contracts::shared::bulk_import::ImportResult;
use contracts::shared::paging::{ListPayload, ListQuery};
use frontend::shared::bulk_import::registry::{ImportJobDescriptor, SubmitFuture};
use frontend::shared::bulk_import::runner::{run_import, ImportError};
use frontend::shared::resource_list::{
    use_resource_list, use_resource_list_with_delete, ResourceListOptions,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn reactive_root() -> Owner {
    let owner = Owner::new();
    owner.set();
    owner
}

#[wasm_bindgen_test]
async fn debounce_collapses_keystrokes() {
    let _owner = reactive_root();

    let calls = Rc::new(RefCell::new(Vec::<String>::new()));
    let fetch_calls = calls.clone();

    let controller = use_resource_list(
        move |_page, _page_size, query: ListQuery| {
            let calls = fetch_calls.clone();
            async move {
                calls.borrow_mut().push(query.search.clone());
                Ok::<_, String>(ListPayload::Items(vec![1, 2, 3]))
            }
        },
        ResourceListOptions::new("test")
            .auto_load(false)
            .debounce_ms(50),
    );

    // Серия нажатий внутри окна тишины
    controller.search("a");
    controller.search("ab");
    controller.search("abc");

    // Строка и сброс страницы видны сразу, до истечения окна
    let state = controller.state().get_untracked();
    assert_eq!(state.search, "abc");
    assert_eq!(state.page, 1);
    assert!(calls.borrow().is_empty());

    TimeoutFuture::new(200).await;

    // Ровно один запрос, с последней строкой
    assert_eq!(calls.borrow().len(), 1);
    assert_eq!(calls.borrow()[0], "abc");
    assert_eq!(controller.state().get_untracked().data, vec![1, 2, 3]);
}

#[wasm_bindgen_test]
async fn stale_result_is_discarded() {
    let _owner = reactive_root();

    let issued = Rc::new(Cell::new(0u32));
    let fetch_issued = issued.clone();

    let controller = use_resource_list(
        move |_page, _page_size, _query: ListQuery| {
            let n = fetch_issued.get() + 1;
            fetch_issued.set(n);
            async move {
                if n == 1 {
                    // Первый запрос медленный — вернётся после второго
                    TimeoutFuture::new(150).await;
                    Ok::<_, String>(ListPayload::Items(vec![1]))
                } else {
                    TimeoutFuture::new(20).await;
                    Ok(ListPayload::Items(vec![2]))
                }
            }
        },
        ResourceListOptions::new("test").auto_load(false),
    );

    controller.reload();
    controller.reload();

    TimeoutFuture::new(300).await;

    // Применён результат последнего запроса, медленный первый отброшен
    assert_eq!(issued.get(), 2);
    assert_eq!(controller.state().get_untracked().data, vec![2]);
}

#[wasm_bindgen_test]
async fn loading_then_paginating() {
    let _owner = reactive_root();

    let pages = Rc::new(RefCell::new(Vec::<u32>::new()));
    let fetch_pages = pages.clone();

    let controller = use_resource_list(
        move |page, _page_size, _query: ListQuery| {
            fetch_pages.borrow_mut().push(page);
            async move {
                TimeoutFuture::new(10).await;
                Ok::<ListPayload<i32>, String>(ListPayload::CountResults {
                    count: 23,
                    results: vec![0; 10],
                })
            }
        },
        ResourceListOptions::new("test").auto_load(false),
    );

    // Самая первая загрузка — полноэкранная
    controller.reload();
    let state = controller.state().get_untracked();
    assert!(state.loading);
    assert!(!state.paginating);

    TimeoutFuture::new(50).await;
    let state = controller.state().get_untracked();
    assert!(state.is_loaded);
    assert_eq!(state.total, 23);
    assert_eq!(state.total_pages(), 3);

    // Смена страницы при имеющихся данных — лёгкий оверлей
    controller.set_page(3);
    let state = controller.state().get_untracked();
    assert!(!state.loading);
    assert!(state.paginating);
    assert_eq!(state.page, 3);

    TimeoutFuture::new(50).await;

    // За границами — no-op без запроса; та же страница — тоже
    controller.set_page(4);
    controller.set_page(3);
    TimeoutFuture::new(50).await;
    let state = controller.state().get_untracked();
    assert_eq!(state.page, 3);
    assert_eq!(*pages.borrow(), vec![1, 3]);
}

#[wasm_bindgen_test]
async fn filters_reset_page_and_refetch() {
    let _owner = reactive_root();

    let calls = Rc::new(RefCell::new(Vec::<(u32, ListQuery)>::new()));
    let fetch_calls = calls.clone();

    let controller = use_resource_list(
        move |page, _page_size, query: ListQuery| {
            fetch_calls.borrow_mut().push((page, query));
            async move {
                Ok::<ListPayload<i32>, String>(ListPayload::CountResults {
                    count: 23,
                    results: vec![0; 10],
                })
            }
        },
        ResourceListOptions::new("test").auto_load(false),
    );

    controller.reload();
    TimeoutFuture::new(20).await;
    controller.set_page(3);
    TimeoutFuture::new(20).await;

    let mut partial = BTreeMap::new();
    partial.insert("status".to_string(), serde_json::Value::from("X"));
    controller.apply_filters(partial);

    let state = controller.state().get_untracked();
    assert_eq!(state.page, 1);

    TimeoutFuture::new(20).await;
    let calls = calls.borrow();
    let (page, query) = calls.last().unwrap();
    assert_eq!(*page, 1);
    assert_eq!(query.filters["status"], serde_json::Value::from("X"));
}

#[wasm_bindgen_test]
async fn failed_delete_reports_and_keeps_state() {
    let _owner = reactive_root();

    let fetches = Rc::new(Cell::new(0u32));
    let fetch_count = fetches.clone();
    let reported = Rc::new(RefCell::new(Vec::<String>::new()));
    let reports = reported.clone();

    let controller = use_resource_list_with_delete(
        move |_page, _page_size, _query: ListQuery| {
            fetch_count.set(fetch_count.get() + 1);
            async move { Ok::<_, String>(ListPayload::Items(vec![5, 6])) }
        },
        |_id: String| async move { Err::<(), String>("has dependent records".to_string()) },
        ResourceListOptions::new("test").on_error(move |message, _cause| {
            reports.borrow_mut().push(message.to_string());
        }),
    );

    TimeoutFuture::new(20).await;
    assert_eq!(fetches.get(), 1);

    controller.remove("5");
    TimeoutFuture::new(20).await;

    // Сообщение сервера ушло в канал диагностики как есть
    assert_eq!(*reported.borrow(), vec!["has dependent records".to_string()]);
    // Список не перечитан и не изменён
    assert_eq!(fetches.get(), 1);
    assert_eq!(controller.state().get_untracked().data, vec![5, 6]);
}

// ----------------------------------------------------------------------
// Импорт
// ----------------------------------------------------------------------

thread_local! {
    static SUBMIT_CALLS: Cell<u32> = const { Cell::new(0) };
}

fn slow_partial_submit(_file: web_sys::File) -> SubmitFuture {
    Box::pin(async {
        SUBMIT_CALLS.with(|calls| calls.set(calls.get() + 1));
        TimeoutFuture::new(100).await;
        Ok(ImportResult {
            message: "ok".to_string(),
            created: 8,
            updated: 2,
            errors: vec!["строка 4: нет email".to_string()],
        })
    })
}

fn test_descriptor() -> ImportJobDescriptor {
    ImportJobDescriptor {
        entity_key: "wasm_test_import",
        expected_headers: &["code", "description"],
        template_file_name: "wasm_test.csv",
        description: "Тестовый импортёр",
        submit: slow_partial_submit,
    }
}

fn test_file() -> web_sys::File {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str("code,description\n1,тест"));
    web_sys::File::new_with_str_sequence(&parts, "test.csv").expect("test file")
}

#[wasm_bindgen_test]
async fn import_is_single_flight_and_partial_success_is_success() {
    let descriptor = test_descriptor();

    let background = descriptor.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let _ = run_import(&background, test_file()).await;
    });

    // Дать фоновой загрузке занять слот
    TimeoutFuture::new(10).await;

    // Повторная отправка того же импортёра отклоняется до сети
    let second = run_import(&descriptor, test_file()).await;
    assert_eq!(second, Err(ImportError::AlreadyInProgress));
    assert_eq!(SUBMIT_CALLS.with(|calls| calls.get()), 1);

    // После завершения первой слот свободен; частичный успех — это Ok
    TimeoutFuture::new(200).await;
    let third = run_import(&descriptor, test_file())
        .await
        .expect("import after release");
    assert_eq!(SUBMIT_CALLS.with(|calls| calls.get()), 2);
    assert_eq!(third.created, 8);
    assert_eq!(third.updated, 2);
    assert!(third.is_partial());
    assert_eq!(third.errors, vec!["строка 4: нет email".to_string()]);
}
