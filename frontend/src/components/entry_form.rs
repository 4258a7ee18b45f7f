use shared::{Category, EntryType, FormController};
use yew::prelude::*;

use crate::hooks::use_entry_form::UseEntryFormActions;

#[derive(Properties, PartialEq)]
pub struct EntryFormProps {
    pub form: FormController,
    pub actions: UseEntryFormActions,
}

#[function_component(EntryForm)]
pub fn entry_form(props: &EntryFormProps) -> Html {
    let draft = props.form.draft();
    let editing = props.form.is_editing();
    let actions = &props.actions;

    html! {
        <form class="entry-form" onsubmit={actions.on_submit.clone()}>
            <strong>{if editing { "Edit Entry" } else { "Add Entry" }}</strong>

            <label for="entry-title">{"Title"}</label>
            <input
                id="entry-title"
                type="text"
                value={draft.title.clone()}
                oninput={actions.on_title_input.clone()}
            />

            <label for="entry-amount">{"Amount"}</label>
            <input
                id="entry-amount"
                type="number"
                step="any"
                value={draft.amount.clone()}
                oninput={actions.on_amount_input.clone()}
            />

            <label for="entry-category">{"Category"}</label>
            <select id="entry-category" onchange={actions.on_category_change.clone()}>
                {for Category::ALL.iter().map(|category| html! {
                    <option value={category.as_str()} selected={*category == draft.category}>
                        {category.as_str()}
                    </option>
                })}
            </select>

            <label for="entry-type">{"Type"}</label>
            <select id="entry-type" onchange={actions.on_type_change.clone()}>
                {for [EntryType::Expense, EntryType::Income].iter().map(|entry_type| html! {
                    <option value={entry_type.as_str()} selected={*entry_type == draft.entry_type}>
                        {entry_type.label()}
                    </option>
                })}
            </select>

            <label for="entry-date">{"Date"}</label>
            <input
                id="entry-date"
                type="date"
                value={draft.date.clone()}
                onchange={actions.on_date_change.clone()}
            />

            <div class="form-actions">
                <button class="btn" type="submit">
                    {if editing { "Save Changes" } else { "Add Entry" }}
                </button>
                if editing {
                    <button type="button" class="muted-btn" onclick={actions.on_cancel.reform(|_: MouseEvent| ())}>
                        {"Cancel"}
                    </button>
                }
            </div>
        </form>
    }
}
