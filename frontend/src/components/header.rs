use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_export_json: Callback<MouseEvent>,
    pub on_export_csv: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <h1>{"Personal Expense Tracker"}</h1>
            <div class="header-actions">
                <button class="muted-btn" onclick={props.on_export_json.clone()}>{"Export"}</button>
                <button class="muted-btn" onclick={props.on_export_csv.clone()}>{"Export CSV"}</button>
            </div>
        </header>
    }
}
