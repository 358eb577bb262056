//! Well-known labels and annotations on pipeline runs

pub const APPLICATION: &str = "appstudio.openshift.io/application";
pub const COMPONENT: &str = "appstudio.openshift.io/component";
pub const PIPELINE_TYPE: &str = "pipelines.appstudio.openshift.io/type";

pub const COMMIT_SHA: &str = "pipelinesascode.tekton.dev/sha";
pub const COMMIT_SHA_TITLE: &str = "pipelinesascode.tekton.dev/sha-title";
pub const COMMIT_SHA_URL: &str = "pipelinesascode.tekton.dev/sha-url";
pub const COMMIT_BRANCH: &str = "pipelinesascode.tekton.dev/branch";
pub const COMMIT_USER: &str = "pipelinesascode.tekton.dev/sender";
pub const PULL_REQUEST: &str = "pipelinesascode.tekton.dev/pull-request";
pub const EVENT_TYPE: &str = "pipelinesascode.tekton.dev/event-type";
pub const GIT_PROVIDER: &str = "pipelinesascode.tekton.dev/git-provider";

pub const PIPELINE_TYPE_BUILD: &str = "build";
pub const PIPELINE_TYPE_TEST: &str = "test";
pub const PIPELINE_TYPE_RELEASE: &str = "release";

pub const SNAPSHOT_PARAM: &str = "SNAPSHOT";
