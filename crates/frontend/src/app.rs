use crate::domain::a001_client::ui::list::ClientList;
use crate::domain::a002_bank::ui::list::BankList;
use crate::domain::a003_currency::ui::list::CurrencyList;
use crate::usecases::u601_bulk_csv_import::BulkCsvImportPage;
use leptos::prelude::*;

/// Разделы приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Clients,
    Banks,
    Currencies,
    Import,
}

impl Section {
    fn title(self) -> &'static str {
        match self {
            Section::Clients => "Клиенты",
            Section::Banks => "Банки",
            Section::Currencies => "Валюты",
            Section::Import => "Импорт CSV",
        }
    }
}

const SECTIONS: [Section; 4] = [
    Section::Clients,
    Section::Banks,
    Section::Currencies,
    Section::Import,
];

#[component]
pub fn App() -> impl IntoView {
    let (section, set_section) = signal(Section::Clients);

    view! {
        <div class="app">
            <nav class="sidebar" style="display:flex;gap:8px;padding:10px 16px;border-bottom:1px solid #ddd;">
                {SECTIONS.iter().map(|&item| view! {
                    <button
                        class="btn"
                        style=move || format!(
                            "padding:6px 12px;border:none;border-radius:4px;cursor:pointer;background:{};",
                            if section.get() == item { "#e3ecfa" } else { "transparent" }
                        )
                        on:click=move |_| set_section.set(item)
                    >
                        {item.title()}
                    </button>
                }).collect_view()}
            </nav>

            <main style="padding:16px;">
                {move || match section.get() {
                    Section::Clients => view! { <ClientList /> }.into_any(),
                    Section::Banks => view! { <BankList /> }.into_any(),
                    Section::Currencies => view! { <CurrencyList /> }.into_any(),
                    Section::Import => view! { <BulkCsvImportPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
