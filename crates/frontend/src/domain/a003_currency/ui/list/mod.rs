use crate::shared::list_utils::SearchInput;
use crate::shared::resource_list::{use_resource_list, ResourceListOptions};
use contracts::domain::a003_currency::aggregate::Currency;
use leptos::prelude::*;

use super::super::api;

/// Компактный вариант каталога: весь справочник одной страницей,
/// без пагинации и удаления
#[component]
#[allow(non_snake_case)]
pub fn CurrencyList() -> impl IntoView {
    let (error, set_error) = signal(None::<String>);

    let controller = use_resource_list(
        api::fetch_page,
        ResourceListOptions::new("Валюты")
            .on_error(move |message, _cause| set_error.set(Some(message.to_string()))),
    );
    let state = controller.state();

    Effect::new(move || {
        let s = state.get();
        if s.is_loaded && !s.loading && !s.paginating {
            set_error.set(None);
        }
    });

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Валюты"}</h2>
                <div class="header-actions">
                    <SearchInput
                        value=Signal::derive(move || state.get().search)
                        on_change=Callback::new(move |val: String| controller.search(val))
                        placeholder="Поиск по валютам...".to_string()
                    />
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
                        <div class="table-container">
                            <table>
                                <thead>
                                    <tr>
                                        <th>{"Код"}</th>
                                        <th>{"Наименование"}</th>
                                        <th>{"Числовой код"}</th>
                                        <th>{"Символ"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows.into_iter().map(|currency: Currency| view! {
                                        <tr>
                                            <td>{currency.base.code.clone()}</td>
                                            <td>{currency.base.description.clone()}</td>
                                            <td>{currency.num_code.clone()}</td>
                                            <td>{currency.symbol.clone()}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
