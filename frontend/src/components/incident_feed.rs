use shared::{IncidentRecord, RowCells, display_order};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::utils::format_timestamp;
use crate::api;

pub enum Msg {
    Loaded(Vec<IncidentRecord>),
    FetchFailed(String),
}

/// Read-only table of previously submitted incidents. Fetches the full
/// list exactly once on first mount; a failed fetch logs, drops the
/// loading indicator, and leaves the table empty. Each row derives its
/// cells through the shared decode-or-default path, so one malformed
/// fragment never takes out the rest of the row.
pub struct IncidentFeed {
    records: Vec<IncidentRecord>,
    loading: bool,
}

impl Component for IncidentFeed {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_incidents().await {
                Ok(records) => link.send_message(Msg::Loaded(records)),
                Err(err) => link.send_message(Msg::FetchFailed(err.to_string())),
            }
        });

        Self {
            records: Vec::new(),
            loading: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(records) => {
                self.records = display_order(records);
                self.loading = false;
                true
            }
            Msg::FetchFailed(err) => {
                log::error!("failed to load incident list: {err}");
                self.loading = false;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! {
                <div class="feed-loading">
                    <div class="spinner" role="status">
                        <span class="visually-hidden"></span>
                    </div>
                </div>
            };
        }

        html! {
            <div class="incident-feed">
                <table class="incident-table">
                    <thead>
                        <tr>
                            <th scope="col">{"Severity"}</th>
                            <th scope="col">{"Emergency"}</th>
                            <th scope="col">{"Responders"}</th>
                            <th scope="col">{"Location"}</th>
                            <th scope="col">{"Confidence"}</th>
                            <th scope="col">{"Date and Time"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for self.records.iter().map(render_row) }
                    </tbody>
                </table>
            </div>
        }
    }
}

fn render_row(record: &IncidentRecord) -> Html {
    let cells = RowCells::from_record(record);

    html! {
        <tr>
            <td>{ &cells.severity }</td>
            <td>{ &cells.emergency }</td>
            <td>
                {
                    if cells.responders.is_empty() {
                        html! { {"No responders"} }
                    } else {
                        html! {
                            { for cells.responders.iter().map(|responder| html! {
                                <div>{ responder }</div>
                            })}
                        }
                    }
                }
            </td>
            <td>{ &cells.location }</td>
            <td>{ &cells.confidence }</td>
            <td>{ format_timestamp(record.created_at.as_deref()) }</td>
        </tr>
    }
}
