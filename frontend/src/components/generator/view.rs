//! View rendering for the generator component.
//!
//! Sections, top to bottom: header, input card (description, row count,
//! Generate button), error panel, data preview, download card, footer.
//! Which sections appear is derived from the form's `Phase` alone.

use common::model::generation::RowCount;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::form::{GenerationResult, GeneratorForm, Phase, PREVIEW_ROWS};
use super::messages::Msg;
use super::state::GeneratorComponent;

/// Main view function for the generator component.
pub fn view(component: &GeneratorComponent, ctx: &Context<GeneratorComponent>) -> Html {
    let link = ctx.link();
    let form = &component.form;

    let results = match form.phase() {
        Phase::Succeeded(result) => html! {
            <>
                { build_preview(result, link) }
                { build_download(form, result, link) }
            </>
        },
        _ => html! {},
    };

    html! {
        <div class="generator-root">
            <div class="generator-header">
                <h1>{"Synthetic Data"}</h1>
                <p>{"Craft Perfect Synthetic Datasets"}</p>
            </div>
            { build_input_card(component, link) }
            { build_error_panel(form) }
            { results }
            { build_footer(form) }
        </div>
    }
}

/// Description field, row-count select and the Generate button.
/// The button is inert while a request is outstanding or the description is blank.
fn build_input_card(component: &GeneratorComponent, link: &Scope<GeneratorComponent>) -> Html {
    let form = &component.form;
    let selected = form.row_count();
    let options = RowCount::ALL
        .iter()
        .map(|count| {
            html! {
                <option value={count.to_string()} selected={*count == selected}>
                    { format!("{} rows", count) }
                </option>
            }
        })
        .collect::<Html>();

    let label = if form.is_in_flight() {
        "Forging Data..."
    } else {
        "Generate"
    };

    html! {
        <div class="card">
            <h2>{"Generate Your Dataset"}</h2>
            <div class="field">
                <label>{"Dataset Description"}</label>
                <input
                    type="text"
                    id="description"
                    ref={component.description_ref.clone()}
                    value={form.description().to_string()}
                    placeholder="Describe your perfect dataset..."
                    oninput={link.callback(|e: InputEvent| {
                        Msg::UpdateDescription(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
            <div class="row">
                <div class="field">
                    <label>{"Dataset Size"}</label>
                    <select
                        id="rowCount"
                        ref={component.row_count_ref.clone()}
                        onchange={link.callback(|e: Event| {
                            Msg::SelectRowCount(e.target_unchecked_into::<HtmlSelectElement>().value())
                        })}
                    >
                        { options }
                    </select>
                </div>
                <button
                    class="generate-btn"
                    onclick={link.callback(|_| Msg::Generate)}
                    disabled={!form.can_submit()}
                >
                    { label }
                </button>
            </div>
        </div>
    }
}

fn build_error_panel(form: &GeneratorForm) -> Html {
    match form.error() {
        Some(message) => html! {
            <div class="card error">
                <h3>{"Error"}</h3>
                <p>{ message }</p>
            </div>
        },
        None => html! {},
    }
}

/// Column headers come from the first record; only the first `PREVIEW_ROWS`
/// records are rendered.
fn build_preview(result: &GenerationResult, link: &Scope<GeneratorComponent>) -> Html {
    if result.rows.is_empty() {
        return html! {};
    }

    let headers = result
        .columns
        .iter()
        .map(|column| html! { <th>{ column }</th> })
        .collect::<Html>();

    let rows = result
        .preview_rows()
        .iter()
        .map(|row| {
            let cells = result
                .cells(row)
                .map(|cell| html! { <td>{ cell }</td> })
                .collect::<Html>();
            html! { <tr>{ cells }</tr> }
        })
        .collect::<Html>();

    html! {
        <div class="card">
            <div class="row">
                <h2>{"Data Preview"}</h2>
                <span>{ format!("Showing first {} rows", PREVIEW_ROWS) }</span>
                <button class="link-btn" onclick={link.callback(|_| Msg::Reset)}>
                    {"Generate New"}
                </button>
            </div>
            <div class="table-wrap">
                <table>
                    <thead><tr>{ headers }</tr></thead>
                    <tbody>{ rows }</tbody>
                </table>
            </div>
        </div>
    }
}

fn build_download(
    form: &GeneratorForm,
    result: &GenerationResult,
    link: &Scope<GeneratorComponent>,
) -> Html {
    if form.export().is_none() {
        return html! {};
    }

    html! {
        <div class="card download">
            <div>
                <h3>{"Ready for Download"}</h3>
                <p>{ format!("Your synthetic dataset is ready • {} rows • CSV format", result.requested) }</p>
            </div>
            <button onclick={link.callback(|_| Msg::DownloadCsv)}>{"Download CSV"}</button>
        </div>
    }
}

fn build_footer(form: &GeneratorForm) -> Html {
    if form.result().is_some() {
        return html! {};
    }

    html! {
        <div class="footer">
            <p>{"Transform your ideas into data • Powered by AI"}</p>
        </div>
    }
}
