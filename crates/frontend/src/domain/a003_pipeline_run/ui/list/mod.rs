use super::super::api::use_pipeline_runs;
use crate::shared::date_utils::{format_duration, format_timestamp};
use crate::shared::icons::icon;
use crate::system::workspace::use_workspace;
use contracts::domain::a003_pipeline_run::aggregate::{PipelineRun, PipelineRunStatus};
use leptos::prelude::*;
use thaw::*;

fn status_color(status: PipelineRunStatus) -> BadgeColor {
    match status {
        PipelineRunStatus::Succeeded => BadgeColor::Success,
        PipelineRunStatus::Failed => BadgeColor::Danger,
        PipelineRunStatus::Cancelled => BadgeColor::Warning,
        PipelineRunStatus::Running => BadgeColor::Brand,
        PipelineRunStatus::Pending | PipelineRunStatus::Unknown => BadgeColor::Informative,
    }
}

#[derive(Clone, Debug, PartialEq)]
struct PipelineRunRow {
    name: String,
    status: PipelineRunStatus,
    pipeline_type: String,
    started: String,
    duration: String,
}

impl From<&PipelineRun> for PipelineRunRow {
    fn from(run: &PipelineRun) -> Self {
        Self {
            name: run.metadata.name.clone(),
            status: run.status(),
            pipeline_type: run.pipeline_type().unwrap_or("-").to_string(),
            started: format_timestamp(run.start_time()),
            duration: format_duration(run.duration_seconds()),
        }
    }
}

#[component]
pub fn PipelineRunsList(application: Memo<String>, component: Memo<String>) -> impl IntoView {
    let workspace = use_workspace();
    let runs = use_pipeline_runs(workspace, application, component);
    let rows = Memo::new(move |_| {
        runs.value
            .with(|runs| runs.iter().map(PipelineRunRow::from).collect::<Vec<_>>())
    });

    view! {
        <div class="pipeline-runs">
            {move || runs.error.get().map(|e| view! { <div class="error-box">{e}</div> })}
            <Show
                when=move || runs.loaded.get() || !rows.with(|r| r.is_empty())
                fallback=|| view! { <Spinner /> }
            >
                <Show
                    when=move || !rows.with(|r| r.is_empty())
                    fallback=|| view! {
                        <div class="empty-state">"No pipeline runs found"</div>
                    }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=250.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Type"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Started"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Duration"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|row| (row.name.clone(), row.status, row.duration.clone())
                                children=|row| view! {
                                    <TableRow>
                                        <TableCell>
                                            {icon("play")}
                                            " "
                                            {row.name}
                                        </TableCell>
                                        <TableCell>
                                            <Badge appearance=BadgeAppearance::Tint color=status_color(row.status)>
                                                {row.status.label()}
                                            </Badge>
                                        </TableCell>
                                        <TableCell>{row.pipeline_type}</TableCell>
                                        <TableCell>{row.started}</TableCell>
                                        <TableCell>{row.duration}</TableCell>
                                    </TableRow>
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </Show>
        </div>
    }
}
