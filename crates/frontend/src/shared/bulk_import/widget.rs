//! Generic-виджет загрузки CSV
//!
//! Инстанцируется по ключу сущности; весь поток (выбор файла, шаблон,
//! отправка, отчёт) одинаков для любого импортёра из реестра.

use super::phase::ImportPhase;
use super::registry::{self, generate_template};
use super::runner::{run_import, ImportError};
use crate::shared::download::download_text_file;
use contracts::shared::bulk_import::ImportResult;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn BulkImportWidget(#[prop(into)] entity_key: String) -> impl IntoView {
    let Some(descriptor) = registry::lookup(&entity_key) else {
        return view! {
            <div class="error">
                {format!("Импортёр '{}' не зарегистрирован", entity_key)}
            </div>
        }
        .into_any();
    };

    let (phase, set_phase) = signal(ImportPhase::Idle);
    let (result, set_result) = signal(None::<ImportResult>);
    let (error_msg, set_error_msg) = signal(String::new());
    let file = StoredValue::new_local(None::<web_sys::File>);

    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let picked = input.files().and_then(|files| files.get(0));
        if picked.is_some() {
            file.set_value(picked);
            set_result.set(None);
            set_error_msg.set(String::new());
            set_phase.set(phase.get_untracked().on_file_selected());
        }
    };

    let template_descriptor = descriptor.clone();
    let on_template = move |_| {
        let content = generate_template(&template_descriptor);
        if let Err(e) = download_text_file(template_descriptor.template_file_name, &content) {
            log::error!("Не удалось сформировать шаблон: {}", e);
            set_error_msg.set("Не удалось сформировать шаблон".to_string());
        }
    };

    let upload_descriptor = descriptor.clone();
    let on_upload = move |_| {
        if !phase.get_untracked().can_start_upload() {
            return;
        }
        let Some(selected) = file.get_value() else {
            return;
        };

        set_phase.set(ImportPhase::Uploading);
        set_error_msg.set(String::new());
        set_result.set(None);

        let descriptor = upload_descriptor.clone();
        spawn_local(async move {
            match run_import(&descriptor, selected).await {
                Ok(outcome) => {
                    // Частичный успех — тоже успех: показываем и счётчики,
                    // и список отклонённых строк
                    set_result.set(Some(outcome));
                    set_phase.set(ImportPhase::Success);
                }
                Err(ImportError::AlreadyInProgress) => {
                    set_error_msg.set("Импорт уже выполняется".to_string());
                    set_phase.set(ImportPhase::FileSelected);
                }
                Err(ImportError::Transport(message)) => {
                    set_error_msg.set(message);
                    set_phase.set(ImportPhase::Error);
                }
            }
        });
    };

    let headers_caption = descriptor.expected_headers.join(", ");
    let description = descriptor.description;

    view! {
        <Card>
            <div style="display:flex;flex-direction:column;gap:12px;">
                <div style="display:flex;flex-direction:column;gap:2px;">
                    <span style="font-weight:600;">{description}</span>
                    <span style="font-size:var(--font-size-sm);color:var(--color-text-secondary);">
                        {format!("Колонки: {}", headers_caption)}
                    </span>
                </div>

                <div style="display:flex;gap:10px;align-items:center;">
                    <input
                        type="file"
                        accept=".csv"
                        disabled=move || phase.get() == ImportPhase::Uploading
                        on:change=on_file_change
                    />

                    <Button on_click=on_template>
                        {"Скачать шаблон"}
                    </Button>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_upload
                        disabled=move || !phase.get().can_start_upload()
                    >
                        {move || if phase.get() == ImportPhase::Uploading {
                            "Загрузка..."
                        } else {
                            "Загрузить"
                        }}
                    </Button>
                </div>

                {move || {
                    let err = error_msg.get();
                    if !err.is_empty() {
                        view! {
                            <div style="padding:8px 12px;border-radius:var(--radius-md);border-left:3px solid var(--color-error);background:var(--color-error-50);font-size:var(--font-size-sm);">
                                {err}
                            </div>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}

                {move || {
                    if let Some(outcome) = result.get() {
                        view! {
                            <div style="display:flex;flex-direction:column;gap:6px;">
                                <span style="font-size:var(--font-size-sm);">
                                    {outcome.message.clone()}
                                </span>
                                <span style="font-size:var(--font-size-sm);color:var(--color-text-secondary);">
                                    {format!("создано: {}  обновлено: {}  ошибок: {}",
                                        outcome.created, outcome.updated, outcome.errors.len())}
                                </span>
                                {if outcome.has_errors() {
                                    view! {
                                        <div style="padding:8px 12px;border-radius:var(--radius-md);border-left:3px solid var(--color-error);background:var(--color-error-50);font-size:var(--font-size-sm);max-height:120px;overflow-y:auto;">
                                            {outcome.errors.iter().map(|e| view! {
                                                <div>{e.clone()}</div>
                                            }).collect_view()}
                                        </div>
                                    }.into_any()
                                } else {
                                    view! { <></> }.into_any()
                                }}
                            </div>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>
        </Card>
    }
    .into_any()
}
