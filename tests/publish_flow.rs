//! Integration tests for the GitOps publish flow
//!
//! Drives the publish step machine against stateful fakes: the git fake
//! converges like a real repository (a second publish of identical
//! content stages no diff), and the host fake records every opened pull
//! request.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use switchyard::application::PublishManifestUseCase;
use switchyard::domain::ports::{
    CodeHostGateway, FileSystem, GatewayError, GatewayResult, PullRequestSpec,
    VersionControlGateway,
};
use switchyard::infrastructure::fs::MemoryFs;
use switchyard::{DeploymentTarget, GitOpsRequest, SwitchyardError};

/// Shared handle over the in-memory filesystem so the test can inspect
/// what the use case wrote.
#[derive(Clone)]
struct SharedFs(Arc<MemoryFs>);

impl FileSystem for SharedFs {
    fn read(&self, path: &Path) -> switchyard::domain::ports::FsResult<String> {
        self.0.read(path)
    }
    fn write(&self, path: &Path, content: &str) -> switchyard::domain::ports::FsResult<()> {
        self.0.write(path, content)
    }
    fn exists(&self, path: &Path) -> bool {
        self.0.exists(path)
    }
    fn is_dir(&self, path: &Path) -> bool {
        self.0.is_dir(path)
    }
    fn create_dir_all(&self, path: &Path) -> switchyard::domain::ports::FsResult<()> {
        self.0.create_dir_all(path)
    }
}

#[derive(Default)]
struct GitState {
    /// Content committed per path, the fake's HEAD.
    committed: std::collections::HashMap<PathBuf, String>,
    staged: std::collections::HashMap<PathBuf, String>,
    commits: u32,
    pushes: u32,
    branches: Vec<String>,
}

/// Git fake that behaves like a converging repository: staging identical
/// content twice yields no diff the second time.
#[derive(Clone)]
struct ConvergingGit {
    fs: Arc<MemoryFs>,
    workdir: PathBuf,
    state: Arc<Mutex<GitState>>,
}

impl ConvergingGit {
    fn new(fs: Arc<MemoryFs>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            workdir: workdir.into(),
            state: Arc::new(Mutex::new(GitState::default())),
        }
    }

    fn commits(&self) -> u32 {
        self.state.lock().unwrap().commits
    }

    fn pushes(&self) -> u32 {
        self.state.lock().unwrap().pushes
    }

    fn branches(&self) -> Vec<String> {
        self.state.lock().unwrap().branches.clone()
    }
}

impl VersionControlGateway for ConvergingGit {
    fn configure_identity(&self, _name: &str, _email: &str) -> GatewayResult<()> {
        Ok(())
    }

    fn checkout_branch(&self, branch: &str) -> GatewayResult<()> {
        let mut state = self.state.lock().unwrap();
        if !state.branches.iter().any(|b| b == branch) {
            state.branches.push(branch.to_string());
        }
        Ok(())
    }

    fn stage(&self, path: &Path) -> GatewayResult<()> {
        let absolute = self.workdir.join(path);
        let content = self
            .fs
            .read(&absolute)
            .map_err(|e| GatewayError::CommandFailed(e.to_string()))?;
        self.state
            .lock()
            .unwrap()
            .staged
            .insert(path.to_path_buf(), content);
        Ok(())
    }

    fn has_staged_changes(&self) -> GatewayResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state
            .staged
            .iter()
            .any(|(path, content)| state.committed.get(path) != Some(content)))
    }

    fn commit(&self, _message: &str) -> GatewayResult<()> {
        let mut state = self.state.lock().unwrap();
        let staged: Vec<(PathBuf, String)> = state.staged.drain().collect();
        for (path, content) in staged {
            state.committed.insert(path, content);
        }
        state.commits += 1;
        Ok(())
    }

    fn push(&self, _branch: &str) -> GatewayResult<()> {
        self.state.lock().unwrap().pushes += 1;
        Ok(())
    }
}

#[derive(Clone, Default)]
struct RecordingHost {
    opened: Arc<Mutex<Vec<PullRequestSpec>>>,
    merged: Arc<Mutex<Vec<String>>>,
}

impl CodeHostGateway for RecordingHost {
    fn open_pull_request(&self, spec: &PullRequestSpec) -> GatewayResult<String> {
        let mut opened = self.opened.lock().unwrap();
        opened.push(spec.clone());
        Ok(format!(
            "https://github.com/{}/pull/{}",
            spec.repository,
            opened.len()
        ))
    }

    fn enable_auto_merge(&self, url: &str) -> GatewayResult<()> {
        self.merged.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

fn kubernetes_target() -> DeploymentTarget {
    DeploymentTarget {
        service: "auth".to_string(),
        environment: "staging".to_string(),
        stack: "kubernetes".to_string(),
        iam_role_plan: String::new(),
        iam_role_apply: String::new(),
        aws_region: "ap-northeast-1".to_string(),
        working_directory: PathBuf::from("/repo/auth/kubernetes/overlays/staging"),
        terraform_version: "1.9.8".to_string(),
        terragrunt_version: "0.68.4".to_string(),
    }
}

fn request() -> GitOpsRequest {
    GitOpsRequest::from_deployment_target(
        &kubernetes_target(),
        "/build/auth-staging.yaml",
        "acme/gitops",
        "main",
        "abc1234def5678",
        "acme/platform",
        Some(421),
    )
    .with_workflow_run_url("https://github.com/acme/platform/actions/runs/991")
}

struct Harness {
    fs: Arc<MemoryFs>,
    git: ConvergingGit,
    host: RecordingHost,
    use_case: PublishManifestUseCase<SharedFs, ConvergingGit, RecordingHost>,
}

fn harness() -> Harness {
    let fs = Arc::new(MemoryFs::new());
    fs.add_file("/build/auth-staging.yaml", "kind: Deployment\nreplicas: 2\n");
    fs.add_dir("/gitops");

    let git = ConvergingGit::new(fs.clone(), "/gitops");
    let host = RecordingHost::default();
    let use_case = PublishManifestUseCase::new(
        SharedFs(fs.clone()),
        git.clone(),
        host.clone(),
        "/gitops",
    );

    Harness {
        fs,
        git,
        host,
        use_case,
    }
}

#[test]
fn first_publish_commits_pushes_and_opens_pr() {
    let h = harness();
    let result = h.use_case.execute(&request()).unwrap();

    assert!(result.has_changes);
    assert_eq!(result.feature_branch, "auto-update/auth-staging-pr421");
    assert_eq!(h.git.commits(), 1);
    assert_eq!(h.git.pushes(), 1);

    // The manifest landed at <environment>/<service>.yaml
    assert_eq!(
        h.fs.content("/gitops/staging/auth.yaml"),
        Some("kind: Deployment\nreplicas: 2\n".to_string())
    );

    let opened = h.host.opened.lock().unwrap();
    assert_eq!(opened.len(), 1);
    assert_eq!(
        opened[0].title,
        "[Auto] Update auth manifests for staging environment"
    );
    assert!(opened[0].body.contains("**Service**: auth"));
    assert!(opened[0].body.contains("abc1234def5678"));
    assert!(opened[0]
        .body
        .contains("https://github.com/acme/platform/actions/runs/991"));
    assert_eq!(
        opened[0].labels,
        vec!["environment:staging", "service:auth", "auto-generated"]
    );

    // Auto-merge was enabled on the opened PR
    let merged = h.host.merged.lock().unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0], result.pull_request_url.unwrap());
}

#[test]
fn republishing_unchanged_content_is_a_no_op() {
    let h = harness();

    let first = h.use_case.execute(&request()).unwrap();
    assert!(first.has_changes);

    let second = h.use_case.execute(&request()).unwrap();
    assert!(!second.has_changes);
    assert!(second.pull_request_url.is_none());

    // Exactly one commit, one push, one PR across both runs
    assert_eq!(h.git.commits(), 1);
    assert_eq!(h.git.pushes(), 1);
    assert_eq!(h.host.opened.lock().unwrap().len(), 1);

    // Both runs converged onto the same feature branch
    assert_eq!(h.git.branches(), vec!["auto-update/auth-staging-pr421"]);
}

#[test]
fn changed_manifest_publishes_again_on_the_same_branch() {
    let h = harness();
    h.use_case.execute(&request()).unwrap();

    h.fs
        .add_file("/build/auth-staging.yaml", "kind: Deployment\nreplicas: 3\n");
    let second = h.use_case.execute(&request()).unwrap();

    assert!(second.has_changes);
    assert_eq!(h.git.commits(), 2);
    assert_eq!(h.git.branches().len(), 1);
}

#[test]
fn missing_manifest_fails_with_read_component() {
    let h = harness();
    let mut req = request();
    req.manifest_file_path = PathBuf::from("/build/absent.yaml");

    let err = h.use_case.execute(&req).unwrap_err();
    assert!(matches!(
        &err,
        SwitchyardError::ExternalOperation { component, .. } if component == "read_manifest"
    ));
    assert_eq!(h.git.commits(), 0);
    assert!(h.host.opened.lock().unwrap().is_empty());
}
