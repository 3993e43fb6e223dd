use crate::shared::bulk_import::registry;
use crate::shared::bulk_import::widget::BulkImportWidget;
use leptos::prelude::*;
use thaw::*;

/// Страница массовой загрузки: селектор сущности + generic-виджет
///
/// Никакого кода под конкретную сущность — страница целиком строится по
/// реестру импортёров.
#[component]
#[allow(non_snake_case)]
pub fn BulkCsvImportPage() -> impl IntoView {
    let importers = registry::registered_keys();
    let first_key = importers
        .first()
        .map(|(key, _)| key.to_string())
        .unwrap_or_default();
    let (selected, set_selected) = signal(first_key);

    view! {
        <div class="content">
            <div class="header">
                <h2>{"u601: Импорт из CSV"}</h2>
            </div>

            <div style="display:flex;flex-direction:column;gap:16px;margin-top:16px;">
                <Flex vertical=false gap=FlexGap::Large align=FlexAlign::Center>
                    <label class="form__label">{"Сущность"}</label>
                    <select
                        class="doc-filter__select"
                        style="width:100%;max-width:400px;"
                        on:change=move |ev| set_selected.set(event_target_value(&ev))
                    >
                        {importers.iter().map(|(key, description)| {
                            let key = key.to_string();
                            let selected_now = {
                                let key = key.clone();
                                move || key == selected.get()
                            };
                            view! {
                                <option selected=selected_now value={key.clone()}>
                                    {format!("{} ({})", description, key)}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </Flex>

                {move || {
                    let key = selected.get();
                    if key.is_empty() {
                        view! {
                            <div class="error">{"Нет зарегистрированных импортёров"}</div>
                        }.into_any()
                    } else {
                        view! { <BulkImportWidget entity_key=key /> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
