use shared::{format_money, CategoryFilter, EntryFilter, Summary};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub summary: Summary,
    pub currency_symbol: String,
    pub filter: EntryFilter,
    pub on_filter_change: Callback<EntryFilter>,
    pub on_clear_all: Callback<()>,
    #[prop_or_default]
    pub save_warning: Option<String>,
}

/// Totals, list filters and the clear-all control
#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    let symbol = props.currency_symbol.as_str();

    let on_category_change = {
        let filter = props.filter.clone();
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(category) = select.value().parse::<CategoryFilter>() {
                on_filter_change.emit(EntryFilter {
                    category,
                    ..filter.clone()
                });
            }
        })
    };

    let on_search_input = {
        let filter = props.filter.clone();
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_filter_change.emit(EntryFilter {
                search: input.value(),
                ..filter.clone()
            });
        })
    };

    let on_reset = {
        let filter = props.filter.clone();
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = filter.clone();
            next.reset();
            on_filter_change.emit(next);
        })
    };

    let on_clear_all = props.on_clear_all.reform(|_: MouseEvent| ());

    html! {
        <div class="card">
            <strong>{"Summary"}</strong>
            <div class="summary">
                <div class="item card">
                    <div class="small">{"Income"}</div>
                    <div class="green">{format_money(props.summary.total_income, symbol)}</div>
                </div>
                <div class="item card">
                    <div class="small">{"Expense"}</div>
                    <div class="red">{format_money(props.summary.total_expense, symbol)}</div>
                </div>
                <div class="item card">
                    <div class="small">{"Balance"}</div>
                    <div>{format_money(props.summary.balance, symbol)}</div>
                </div>
            </div>

            if let Some(warning) = &props.save_warning {
                <div class="save-warning">{warning.clone()}</div>
            }

            <div class="filters">
                <select onchange={on_category_change}>
                    {for CategoryFilter::options().map(|option| html! {
                        <option value={option.as_str()} selected={option == props.filter.category}>
                            {option.as_str()}
                        </option>
                    })}
                </select>
                <input
                    placeholder="Search..."
                    value={props.filter.search.clone()}
                    oninput={on_search_input}
                />
                <button class="muted-btn" onclick={on_reset} disabled={!props.filter.is_active()}>{"Reset"}</button>
                <button class="muted-btn" onclick={on_clear_all}>{"Clear All"}</button>
            </div>
        </div>
    }
}
