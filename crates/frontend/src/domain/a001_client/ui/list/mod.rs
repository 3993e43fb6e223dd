use crate::shared::list_utils::{Paginator, SearchInput};
use crate::shared::resource_list::{use_resource_list_with_delete, ResourceListOptions};
use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use serde_json::Value;
use std::collections::BTreeMap;

use super::super::api;

#[component]
#[allow(non_snake_case)]
pub fn ClientList() -> impl IntoView {
    let (error, set_error) = signal(None::<String>);

    let controller = use_resource_list_with_delete(
        api::fetch_page,
        api::delete_item,
        ResourceListOptions::new("Клиенты")
            .page_size(10)
            .on_error(move |message, _cause| set_error.set(Some(message.to_string()))),
    );
    let state = controller.state();

    // Успешная загрузка снимает баннер ошибки
    Effect::new(move || {
        let s = state.get();
        if s.is_loaded && !s.loading && !s.paginating {
            set_error.set(None);
        }
    });

    let on_status_filter = move |ev: web_sys::Event| {
        let val = event_target_value(&ev);
        let mut partial = BTreeMap::new();
        partial.insert(
            "status".to_string(),
            if val.is_empty() {
                Value::Null
            } else {
                Value::from(val)
            },
        );
        controller.apply_filters(partial);
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Клиенты"}</h2>
                <div class="header-actions">
                    <SearchInput
                        value=Signal::derive(move || state.get().search)
                        on_change=Callback::new(move |val: String| controller.search(val))
                        placeholder="Поиск по клиентам...".to_string()
                    />
                    <select class="doc-filter__select" on:change=on_status_filter>
                        <option value="">{"Все статусы"}</option>
                        <option value="active">{"Действующие"}</option>
                        <option value="archived">{"Архив"}</option>
                    </select>
                    <button class="btn btn-secondary" on:click=move |_| controller.reload()>
                        {"Обновить"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                let s = state.get();
                if s.loading {
                    view! { <div class="loading">{"Загрузка..."}</div> }.into_any()
                } else {
                    let rows = s.data.clone();
                    view! {
                        <div
                            class="table-container"
                            style=if s.paginating { "opacity:0.6;pointer-events:none;" } else { "" }
                        >
                            <table>
                                <thead>
                                    <tr>
                                        <th>{"Код"}</th>
                                        <th>{"Наименование"}</th>
                                        <th>{"ИНН"}</th>
                                        <th>{"Email"}</th>
                                        <th>{"Телефон"}</th>
                                        <th>{"Статус"}</th>
                                        <th>{"Изменён"}</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows.into_iter().map(|client: Client| {
                                        let id = client.base.id.as_string();
                                        view! {
                                            <tr>
                                                <td>{client.base.code.clone()}</td>
                                                <td>{client.base.description.clone()}</td>
                                                <td>{client.inn.clone()}</td>
                                                <td>{client.email.clone()}</td>
                                                <td>{client.phone.clone()}</td>
                                                <td>{if client.status == "archived" { "Архив" } else { "Действующий" }}</td>
                                                <td>{format!("{}", client.base.updated_at.format("%Y-%m-%d"))}</td>
                                                <td>
                                                    <button
                                                        class="btn btn-secondary"
                                                        title="Удалить"
                                                        on:click=move |_| controller.remove(id.clone())
                                                    >
                                                        {"Удалить"}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }
            }}

            <Paginator
                page=Signal::derive(move || state.get().page)
                total_pages=Signal::derive(move || state.get().total_pages())
                total=Signal::derive(move || state.get().total)
                on_page=Callback::new(move |n: u32| controller.set_page(n))
            />
        </div>
    }
}
