use log::{error, info, warn};
use shared::export::{CSV_MIME_TYPE, JSON_MIME_TYPE};
use shared::{export_csv, export_json, EntryFilter, Summary, TrackerConfig};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{CategoryChart, EntryForm, EntryList, Header, SummaryPanel};
use hooks::{use_entries, use_entry_form};
use services::{config, dialogs, download, logging};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: TrackerConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let entries = use_entries(&config.storage_key);
    let form = use_entry_form(entries.store.clone(), entries.actions.refresh.clone());
    let filter = use_state(EntryFilter::default);

    let on_export_json = {
        let items = entries.state.entries.clone();
        let file_name = config.export_file_name.clone();
        Callback::from(move |_: MouseEvent| {
            let result = export_json(&items)
                .map_err(anyhow::Error::from)
                .and_then(|json| download::download_text(&file_name, JSON_MIME_TYPE, &json));
            if let Err(e) = result {
                error!("JSON export failed: {}", e);
                dialogs::alert("Export failed");
            }
        })
    };

    let on_export_csv = {
        let items = entries.state.entries.clone();
        let file_name = config.csv_export_file_name.clone();
        Callback::from(move |_: MouseEvent| {
            let result = export_csv(&items)
                .map_err(anyhow::Error::from)
                .and_then(|csv| download::download_text(&file_name, CSV_MIME_TYPE, &csv));
            if let Err(e) = result {
                error!("CSV export failed: {}", e);
                dialogs::alert("Export failed");
            }
        })
    };

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: EntryFilter| filter.set(next))
    };

    let summary = Summary::from_entries(&entries.state.entries);
    let visible: Vec<_> = filter.apply(&entries.state.entries).into_iter().cloned().collect();

    html! {
        <div class="container">
            <Header {on_export_json} {on_export_csv} />

            <div class="layout">
                <div>
                    <div class="card">
                        <EntryForm form={form.form.clone()} actions={form.actions.clone()} />
                    </div>

                    <SummaryPanel
                        {summary}
                        currency_symbol={config.currency_symbol.clone()}
                        filter={(*filter).clone()}
                        {on_filter_change}
                        on_clear_all={entries.actions.clear_all.clone()}
                        save_warning={entries.state.save_warning.clone()}
                    />

                    <EntryList
                        entries={visible}
                        currency_symbol={config.currency_symbol.clone()}
                        on_edit={form.actions.on_edit.clone()}
                        on_delete={entries.actions.delete.clone()}
                    />
                </div>

                <div>
                    <CategoryChart
                        entries={entries.state.entries.clone()}
                        currency_symbol={config.currency_symbol.clone()}
                    />
                </div>
            </div>
        </div>
    }
}

fn main() {
    let (config, config_error) = match config::load_from_page() {
        Ok(Some(config)) => (config, None),
        Ok(None) => (TrackerConfig::default(), None),
        Err(e) => (TrackerConfig::default(), Some(e)),
    };

    let level = config.log_level_filter().unwrap_or(log::LevelFilter::Info);
    logging::init(level);

    if let Some(e) = config_error {
        warn!("{}; using defaults", e);
    }
    if !services::BrowserStorage::local().is_available() {
        warn!("localStorage is not available, entries will not persist");
    }
    info!("Starting expense tracker with storage key '{}'", config.storage_key);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
