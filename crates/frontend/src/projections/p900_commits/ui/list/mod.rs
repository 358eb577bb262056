use super::super::api::use_commits;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::system::workspace::use_workspace;
use contracts::projections::p900_commits::dto::Commit;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
struct CommitRow {
    sha: String,
    short_sha: String,
    sha_url: Option<String>,
    title: String,
    branch: String,
    components: String,
    user: String,
    created: String,
    pull_request: Option<String>,
}

impl From<&Commit> for CommitRow {
    fn from(c: &Commit) -> Self {
        Self {
            sha: c.sha.clone(),
            short_sha: c.short_sha().to_string(),
            sha_url: c.sha_url.clone(),
            title: c.sha_title.clone(),
            branch: c.branch.clone(),
            components: c.components.join(", "),
            user: c.user.clone().unwrap_or_else(|| "-".to_string()),
            created: format_timestamp(c.creation_time),
            pull_request: c
                .is_pull_request
                .then(|| c.pull_request_number.clone())
                .flatten(),
        }
    }
}

#[component]
pub fn CommitsList(application: Memo<String>, component: Memo<String>) -> impl IntoView {
    let workspace = use_workspace();
    let commits = use_commits(workspace, application, component);
    let rows = Memo::new(move |_| {
        commits
            .value
            .with(|list| list.iter().map(CommitRow::from).collect::<Vec<_>>())
    });

    view! {
        <div class="commits">
            {move || commits.error.get().map(|e| view! { <div class="error-box">{e}</div> })}
            <Show
                when=move || commits.loaded.get() || !rows.with(|r| r.is_empty())
                fallback=|| view! { <Spinner /> }
            >
                <Show
                    when=move || !rows.with(|r| r.is_empty())
                    fallback=|| view! { <div class="empty-state">"No commits found"</div> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=100.0>"Commit"</TableHeaderCell>
                                <TableHeaderCell min_width=250.0>"Title"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Branch"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Components"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"By"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Created"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|row| row.sha.clone()
                                children=|row| {
                                    let sha = match row.sha_url {
                                        Some(url) => view! {
                                            <a href=url target="_blank" rel="noopener noreferrer">{row.short_sha}</a>
                                        }.into_any(),
                                        None => view! { <span>{row.short_sha}</span> }.into_any(),
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>{icon("git-commit")}" "{sha}</TableCell>
                                            <TableCell>
                                                {row.title}
                                                {row.pull_request.map(|pr| view! {
                                                    " "
                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                                        {format!("PR #{}", pr)}
                                                    </Badge>
                                                })}
                                            </TableCell>
                                            <TableCell>{row.branch}</TableCell>
                                            <TableCell>{row.components}</TableCell>
                                            <TableCell>{row.user}</TableCell>
                                            <TableCell>{row.created}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </Show>
        </div>
    }
}
