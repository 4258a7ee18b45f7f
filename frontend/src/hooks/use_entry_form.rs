use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use shared::{Category, Entry, EntryType, FormController};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::use_entries::BrowserEntryStore;
use crate::services::{date_utils, dialogs};

#[derive(Clone, PartialEq)]
pub struct UseEntryFormActions {
    pub on_title_input: Callback<InputEvent>,
    pub on_amount_input: Callback<InputEvent>,
    pub on_category_change: Callback<Event>,
    pub on_type_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_submit: Callback<SubmitEvent>,
    pub on_edit: Callback<Entry>,
    pub on_cancel: Callback<()>,
}

pub struct UseEntryFormResult {
    pub form: FormController,
    pub actions: UseEntryFormActions,
}

fn update_form(form: &UseStateHandle<FormController>, change: impl FnOnce(&mut FormController)) {
    let mut next = (**form).clone();
    change(&mut next);
    form.set(next);
}

/// Form state for adding and editing entries.
///
/// Callbacks are rebuilt on every render so they always act on the current
/// draft. `on_saved` fires after the store accepted a submission.
#[hook]
pub fn use_entry_form(store: Rc<RefCell<BrowserEntryStore>>, on_saved: Callback<()>) -> UseEntryFormResult {
    let form = use_state(|| FormController::new(date_utils::today()));

    let on_title_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_form(&form, |f| f.set_title(input.value()));
        })
    };

    let on_amount_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_form(&form, |f| f.set_amount(input.value()));
        })
    };

    let on_category_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<Category>() {
                Ok(category) => update_form(&form, |f| f.set_category(category)),
                Err(err) => warn!("Ignoring category selection: {}", err),
            }
        })
    };

    let on_type_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<EntryType>() {
                Ok(entry_type) => update_form(&form, |f| f.set_entry_type(entry_type)),
                Err(err) => warn!("Ignoring type selection: {}", err),
            }
        })
    };

    let on_date_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_form(&form, |f| f.set_date(input.value()));
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*form).clone();
            let result = next.submit(&mut *store.borrow_mut(), date_utils::today());
            match result {
                Ok(submitted) => {
                    debug!("Form submitted: {:?}", submitted);
                    form.set(next);
                    on_saved.emit(());
                }
                Err(err) => {
                    // Draft stays as typed so the user can fix it
                    warn!("Form rejected: {}", err);
                    dialogs::alert(&err.to_string());
                }
            }
        })
    };

    let on_edit = {
        let form = form.clone();
        Callback::from(move |entry: Entry| {
            update_form(&form, |f| f.begin_edit(&entry));
        })
    };

    let on_cancel = {
        let form = form.clone();
        Callback::from(move |_: ()| {
            update_form(&form, |f| f.cancel(date_utils::today()));
        })
    };

    UseEntryFormResult {
        form: (*form).clone(),
        actions: UseEntryFormActions {
            on_title_input,
            on_amount_input,
            on_category_change,
            on_type_change,
            on_date_change,
            on_submit,
            on_edit,
            on_cancel,
        },
    }
}
