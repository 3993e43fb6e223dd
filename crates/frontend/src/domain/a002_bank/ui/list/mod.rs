use crate::shared::list_utils::{Paginator, SearchInput};
use crate::shared::resource_list::{use_resource_list_with_delete, ResourceListOptions};
use contracts::domain::a002_bank::aggregate::Bank;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

use super::super::api;

#[component]
#[allow(non_snake_case)]
pub fn BankList() -> impl IntoView {
    let (error, set_error) = signal(None::<String>);

    let controller = use_resource_list_with_delete(
        api::fetch_page,
        api::delete_item,
        ResourceListOptions::new("Банки")
            .page_size(20)
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
                <h2>{"Банки"}</h2>
                <div class="header-actions">
                    <SearchInput
                        value=Signal::derive(move || state.get().search)
                        on_change=Callback::new(move |val: String| controller.search(val))
                        placeholder="Поиск по БИК или названию...".to_string()
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
                        <div
                            class="table-container"
                            style=if s.paginating { "opacity:0.6;pointer-events:none;" } else { "" }
                        >
                            <table>
                                <thead>
                                    <tr>
                                        <th>{"Код"}</th>
                                        <th>{"Наименование"}</th>
                                        <th>{"БИК"}</th>
                                        <th>{"Корр. счёт"}</th>
                                        <th>{"Город"}</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows.into_iter().map(|bank: Bank| {
                                        let id = bank.base.id.as_string();
                                        view! {
                                            <tr>
                                                <td>{bank.base.code.clone()}</td>
                                                <td>{bank.base.description.clone()}</td>
                                                <td>{bank.bic.clone()}</td>
                                                <td>{bank.corr_account.clone()}</td>
                                                <td>{bank.city.clone()}</td>
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
