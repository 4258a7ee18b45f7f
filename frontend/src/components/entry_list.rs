use shared::{format_signed, Entry};
use yew::prelude::*;

use crate::services::date_utils::format_entry_date;

#[derive(Properties, PartialEq)]
pub struct EntryListProps {
    /// Already filtered, in display order
    pub entries: Vec<Entry>,
    pub currency_symbol: String,
    pub on_edit: Callback<Entry>,
    pub on_delete: Callback<String>,
}

#[function_component(EntryList)]
pub fn entry_list(props: &EntryListProps) -> Html {
    html! {
        <div class="card">
            <strong>{"Transactions"}</strong>
            if props.entries.is_empty() {
                <div class="empty">{"No records found"}</div>
            } else {
                <ul class="expenses">
                    {for props.entries.iter().map(|entry| {
                        let on_edit = {
                            let entry = entry.clone();
                            props.on_edit.reform(move |_: MouseEvent| entry.clone())
                        };
                        let on_delete = {
                            let id = entry.id.clone();
                            props.on_delete.reform(move |_: MouseEvent| id.clone())
                        };
                        let amount_class = if entry.is_income() { "green" } else { "red" };

                        html! {
                            <li class="row" key={entry.id.clone()}>
                                <div>
                                    <strong>{entry.title.clone()}</strong>
                                    <div class="small">
                                        {format!("{} • {}", entry.category, format_entry_date(&entry.date))}
                                    </div>
                                </div>
                                <div class="row-right">
                                    <div class={amount_class}>
                                        {format_signed(entry, &props.currency_symbol)}
                                    </div>
                                    <div class="actions">
                                        <button class="muted-btn" onclick={on_edit}>{"Edit"}</button>
                                        <button class="muted-btn" onclick={on_delete}>{"Delete"}</button>
                                    </div>
                                </div>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
