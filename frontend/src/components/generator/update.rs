//! Update function for the generator component.
//!
//! Elm-style: receives the current state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Form edits go straight into `GeneratorForm`.
//! - `Generate` asks the form for a `PendingRequest`; when it refuses (blank
//!   description, request already outstanding) nothing is sent.
//! - The request runs in `spawn_local` and reports back with `Completed`,
//!   tagged with its ticket so superseded replies are dropped.

use common::model::generation::RowCount;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::form::Completion;
use super::helpers::{download_csv, request_generation, show_toast};
use super::messages::Msg;
use super::state::GeneratorComponent;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` once the request finishes.
/// - Returns `true` to re-render the view, `false` when only side effects occur.
pub fn update(
    component: &mut GeneratorComponent,
    ctx: &Context<GeneratorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateDescription(description) => {
            component.form.set_description(description);
            true
        }
        Msg::SelectRowCount(value) => match value.parse::<RowCount>() {
            Ok(row_count) => {
                component.form.set_row_count(row_count);
                true
            }
            Err(err) => {
                gloo_console::error!(err.to_string());
                false
            }
        },
        Msg::Generate => {
            let Some(pending) = component.form.begin_submit() else {
                return false;
            };

            gloo_console::log!(format!(
                "Requesting {} rows from {}",
                pending.request.row,
                ctx.props().endpoint
            ));

            let endpoint = ctx.props().endpoint.to_string();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = request_generation(&endpoint, &pending.request).await;
                link.send_message(Msg::Completed {
                    ticket: pending.ticket,
                    outcome,
                });
            });
            true
        }
        Msg::Completed { ticket, outcome } => {
            if let Err(err) = &outcome {
                gloo_console::error!(format!("Generation failed: {:?}", err));
            }
            match component.form.complete(ticket, outcome) {
                Completion::Applied => true,
                Completion::Stale => {
                    gloo_console::log!("Discarding reply from a superseded request");
                    false
                }
            }
        }
        Msg::DownloadCsv => {
            if let Some(export) = component.form.export() {
                match download_csv(&export) {
                    Ok(()) => show_toast(&format!("Downloading {}", export.file_name)),
                    Err(err) => {
                        gloo_console::error!(err);
                        show_toast("Could not start the download.");
                    }
                }
            }
            false
        }
        Msg::Reset => {
            component.form.reset();
            component.focus_description();
            true
        }
    }
}
