/// Универсальные UI-компоненты списковых страниц (поиск, пагинация)
use leptos::prelude::*;

/// Строка поиска с кнопкой очистки
///
/// Каждый ввод сразу уходит в `on_change` — окно debounce держит
/// списковый контроллер, а не поле ввода.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    set_input_value.set(val.clone());
                    on_change.run(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Очистить"
                    >
                        {"×"}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Подвал пагинации: назад/вперёд и позиция
#[component]
pub fn Paginator(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] total: Signal<u64>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <div style="display:flex;align-items:center;gap:10px;padding:8px 0;">
            <button
                class="btn btn-secondary"
                disabled=move || page.get() <= 1
                on:click=move |_| on_page.run(page.get().saturating_sub(1))
            >
                {"‹"}
            </button>
            <span style="font-size:var(--font-size-sm);color:var(--color-text-secondary);">
                {move || format!("Стр. {} из {} · {} записей", page.get(), total_pages.get().max(1), total.get())}
            </span>
            <button
                class="btn btn-secondary"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| on_page.run(page.get() + 1)
            >
                {"›"}
            </button>
        </div>
    }
}
