//! Derives the commit list from build pipeline runs

use super::dto::Commit;
use crate::domain::a003_pipeline_run::aggregate::PipelineRun;
use crate::domain::a003_pipeline_run::labels;
use std::collections::HashMap;

const PULL_REQUEST_EVENT: &str = "pull_request";

/// Groups build pipeline runs by commit sha.
///
/// Commit metadata comes from the newest run of the group; runs without a sha
/// label and non-build runs are skipped. Result is newest first.
pub fn derive_commits(runs: &[PipelineRun]) -> Vec<Commit> {
    let mut builds: Vec<&PipelineRun> = runs
        .iter()
        .filter(|r| r.pipeline_type() == Some(labels::PIPELINE_TYPE_BUILD))
        .collect();
    builds.sort_by(|a, b| {
        b.metadata
            .creation_timestamp
            .cmp(&a.metadata.creation_timestamp)
    });

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut commits: Vec<Commit> = Vec::new();

    for run in builds {
        let Some(sha) = run.metadata.label(labels::COMMIT_SHA) else {
            continue;
        };

        if let Some(&pos) = index.get(sha) {
            let commit = &mut commits[pos];
            if let Some(component) = run.component() {
                if !commit.includes_component(component) {
                    commit.components.push(component.to_string());
                }
            }
            commit.pipeline_runs.push(run.metadata.name.clone());
            continue;
        }

        index.insert(sha.to_string(), commits.len());
        commits.push(commit_from_run(sha, run));
    }

    commits
}

fn commit_from_run(sha: &str, run: &PipelineRun) -> Commit {
    let meta = &run.metadata;
    let pull_request_number = meta.label(labels::PULL_REQUEST).map(str::to_string);
    let is_pull_request = pull_request_number.is_some()
        || meta.label(labels::EVENT_TYPE) == Some(PULL_REQUEST_EVENT);

    Commit {
        sha: sha.to_string(),
        sha_title: meta
            .label_or_annotation(labels::COMMIT_SHA_TITLE)
            .unwrap_or_default()
            .to_string(),
        branch: meta
            .label_or_annotation(labels::COMMIT_BRANCH)
            .unwrap_or_default()
            .to_string(),
        application: run.application().unwrap_or_default().to_string(),
        components: run.component().map(str::to_string).into_iter().collect(),
        user: meta.label(labels::COMMIT_USER).map(str::to_string),
        creation_time: meta.creation_timestamp,
        pull_request_number,
        is_pull_request,
        git_provider: meta.label(labels::GIT_PROVIDER).map(str::to_string),
        sha_url: meta
            .label_or_annotation(labels::COMMIT_SHA_URL)
            .map(str::to_string),
        pipeline_runs: vec![meta.name.clone()],
    }
}

/// Keeps commits that built the given component
pub fn filter_by_component(commits: Vec<Commit>, component: &str) -> Vec<Commit> {
    commits
        .into_iter()
        .filter(|c| c.includes_component(component))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn build_run(name: &str, sha: Option<&str>, component: &str, day: u32) -> PipelineRun {
        let mut run = PipelineRun::new(name, "w1-tenant");
        let meta = &mut run.metadata;
        meta.creation_timestamp = Some(Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap());
        meta.labels
            .insert(labels::PIPELINE_TYPE.into(), labels::PIPELINE_TYPE_BUILD.into());
        meta.labels.insert(labels::APPLICATION.into(), "app1".into());
        meta.labels.insert(labels::COMPONENT.into(), component.into());
        if let Some(sha) = sha {
            meta.labels.insert(labels::COMMIT_SHA.into(), sha.into());
        }
        meta.annotations
            .insert(labels::COMMIT_SHA_TITLE.into(), format!("title of {name}"));
        meta.annotations
            .insert(labels::COMMIT_BRANCH.into(), "main".into());
        run
    }

    #[test]
    fn test_groups_runs_by_sha() {
        let runs = vec![
            build_run("c1-build-a", Some("aaaaaaaaaa"), "c1", 1),
            build_run("c2-build-a", Some("aaaaaaaaaa"), "c2", 2),
            build_run("c1-build-b", Some("bbbbbbbbbb"), "c1", 3),
        ];

        let commits = derive_commits(&runs);
        assert_eq!(commits.len(), 2);

        assert_eq!(commits[0].sha, "bbbbbbbbbb");
        assert_eq!(commits[0].components, vec!["c1"]);

        assert_eq!(commits[1].sha, "aaaaaaaaaa");
        assert_eq!(commits[1].components, vec!["c2", "c1"]);
        assert_eq!(commits[1].pipeline_runs, vec!["c2-build-a", "c1-build-a"]);
        // metadata taken from the newest run
        assert_eq!(commits[1].sha_title, "title of c2-build-a");
        assert_eq!(commits[1].branch, "main");
        assert_eq!(commits[1].short_sha(), "aaaaaaa");
    }

    #[test]
    fn test_skips_runs_without_sha_and_non_build_runs() {
        let mut test_run = build_run("c1-test", Some("cccccccccc"), "c1", 4);
        test_run
            .metadata
            .labels
            .insert(labels::PIPELINE_TYPE.into(), labels::PIPELINE_TYPE_TEST.into());
        let runs = vec![build_run("c1-build", None, "c1", 1), test_run];

        assert!(derive_commits(&runs).is_empty());
    }

    #[test]
    fn test_pull_request_detection() {
        let mut run = build_run("c1-pr", Some("dddddddddd"), "c1", 5);
        run.metadata
            .labels
            .insert(labels::PULL_REQUEST.into(), "42".into());

        let commits = derive_commits(&[run]);
        assert!(commits[0].is_pull_request);
        assert_eq!(commits[0].pull_request_number.as_deref(), Some("42"));
    }

    #[test]
    fn test_filter_by_component() {
        let runs = vec![
            build_run("c1-build", Some("aaaaaaaaaa"), "c1", 1),
            build_run("c2-build", Some("bbbbbbbbbb"), "c2", 2),
        ];
        let commits = filter_by_component(derive_commits(&runs), "c2");
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].sha, "bbbbbbbbbb");
    }
}
