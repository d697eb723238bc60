use actionfile::core::manifest::schema::{Manifest, RunsConfig, Step};
use actionfile::core::manifest::{load_from_str, Validator};

fn validate_str(yaml: &str) -> Vec<actionfile::core::manifest::Violation> {
    let manifest = load_from_str(yaml).unwrap();
    Validator::new().validate(&manifest)
}

fn fields(violations: &[actionfile::core::manifest::Violation]) -> Vec<&str> {
    violations.iter().map(|v| v.field.as_str()).collect()
}

#[test]
fn valid_composite_action_has_no_violations() {
    let violations = validate_str(
        "name: Example\ndescription: d\nruns:\n  using: composite\n  steps:\n    - name: s\n      run: echo hi\n",
    );
    assert!(violations.is_empty());
}

#[test]
fn empty_action_reports_name_description_and_steps() {
    // Force the action branch with a bare composite `runs`.
    let manifest = Manifest {
        runs: Some(RunsConfig {
            using: Some("composite".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let violations = Validator::new().validate(&manifest);
    assert_eq!(violations.len(), 3);
    let tags = fields(&violations);
    assert!(tags.contains(&"name"));
    assert!(tags.contains(&"description"));
    assert!(tags.contains(&"runs.steps"));
}

#[test]
fn javascript_actions_require_a_main_entry_point() {
    let manifest = Manifest {
        name: Some("JavaScript Action".to_string()),
        description: Some("A JavaScript action".to_string()),
        runs: Some(RunsConfig {
            using: Some("node16".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let mut validator = Validator::new();
    let violations = validator.validate(&manifest);
    assert_eq!(fields(&violations), vec!["runs.main"]);

    let fixed = Manifest {
        runs: Some(RunsConfig {
            using: Some("node16".to_string()),
            main: Some("index.js".to_string()),
            ..Default::default()
        }),
        ..manifest
    };
    assert!(validator.validate(&fixed).is_empty());
    assert!(validator.is_valid());
}

#[test]
fn node20_actions_follow_the_same_rule() {
    let violations = validate_str(
        "name: Node Action\ndescription: d\nruns:\n  using: node20\n  main: dist/index.js\n",
    );
    assert!(violations.is_empty());

    let violations =
        validate_str("name: Node Action\ndescription: d\nruns:\n  using: node20\n");
    assert_eq!(fields(&violations), vec!["runs.main"]);
}

#[test]
fn docker_actions_require_an_image() {
    let manifest = Manifest {
        name: Some("Docker Action".to_string()),
        description: Some("A Docker action".to_string()),
        runs: Some(RunsConfig {
            using: Some("docker".to_string()),
            image: Some(String::new()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let mut validator = Validator::new();
    let violations = validator.validate(&manifest);
    assert_eq!(fields(&violations), vec!["runs.image"]);

    let mut fixed = manifest;
    fixed.runs.as_mut().unwrap().image = Some("Dockerfile".to_string());
    assert!(validator.validate(&fixed).is_empty());
}

#[test]
fn unsupported_action_type_is_reported_with_the_value() {
    let violations =
        validate_str("name: x\ndescription: y\nruns:\n  using: unsupported-type\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "runs.using");
    assert!(violations[0].message.contains("unsupported-type"));
}

#[test]
fn workflow_with_empty_jobs_reports_trigger_and_jobs() {
    let violations = validate_str("name: Invalid Workflow\njobs: {}\n");
    assert_eq!(violations.len(), 2);
    let tags = fields(&violations);
    assert!(tags.contains(&"on"));
    assert!(tags.contains(&"jobs"));
}

#[test]
fn job_needs_a_runner_or_a_reusable_call() {
    let violations = validate_str(
        "on: push\njobs:\n  test:\n    name: Test Job\n    steps: []\n",
    );
    assert_eq!(violations.len(), 2);
    let tags = fields(&violations);
    assert!(tags.contains(&"jobs.test"));
    assert!(tags.contains(&"jobs.test.steps"));

    let fixed = validate_str(
        "on: push\njobs:\n  test:\n    runs-on: ubuntu-latest\n    steps:\n      - name: Test Step\n        run: echo hello\n",
    );
    assert!(fixed.is_empty());
}

#[test]
fn step_without_uses_or_run_is_tagged_by_index() {
    let violations = validate_str(
        "on: push\njobs:\n  test:\n    runs-on: ubuntu-latest\n    steps:\n      - run: echo ok\n      - name: Invalid Step\n",
    );
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "jobs.test.steps[1]");
}

#[test]
fn reusable_call_jobs_need_no_steps() {
    let violations = validate_str(
        "on: push\njobs:\n  release:\n    uses: octo/shared/.github/workflows/release.yml@v2\n    with:\n      channel: stable\n",
    );
    assert!(violations.is_empty());
}

#[test]
fn dual_kind_manifest_unions_both_rule_sets() {
    // Non-empty `runs.using` and non-nil `jobs` at once: both rule sets
    // run independently and the findings are concatenated.
    let manifest = Manifest {
        runs: Some(RunsConfig {
            using: Some("composite".to_string()),
            ..Default::default()
        }),
        jobs: Some(Default::default()),
        ..Default::default()
    };

    let violations = Validator::new().validate(&manifest);
    let tags = fields(&violations);
    assert!(tags.contains(&"name"));
    assert!(tags.contains(&"description"));
    assert!(tags.contains(&"runs.steps"));
    assert!(tags.contains(&"on"));
    assert!(tags.contains(&"jobs"));
    assert_eq!(violations.len(), 5);

    let action_only = Manifest {
        runs: Some(RunsConfig {
            using: Some("composite".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let workflow_only = Manifest {
        jobs: Some(Default::default()),
        ..Default::default()
    };
    let mut validator = Validator::new();
    let split: usize = validator.validate(&action_only).len() + validator.validate(&workflow_only).len();
    assert_eq!(violations.len(), split);
}

#[test]
fn validator_totality_over_an_empty_manifest() {
    let mut validator = Validator::new();
    let violations = validator.validate(&Manifest::default());
    assert!(violations.is_empty());
    assert!(validator.is_valid());
}

#[test]
fn validator_resets_between_runs() {
    let mut validator = Validator::new();

    let broken = Manifest {
        jobs: Some(Default::default()),
        ..Default::default()
    };
    assert!(!validator.validate(&broken).is_empty());
    assert!(!validator.is_valid());

    let fine = load_from_str(
        "name: ok\ndescription: d\nruns:\n  using: docker\n  image: Dockerfile\n",
    )
    .unwrap();
    assert!(validator.validate(&fine).is_empty());
    assert!(validator.is_valid());
}

#[test]
fn steps_inside_composite_runs_do_not_trip_workflow_rules() {
    let manifest = Manifest {
        name: Some("n".to_string()),
        description: Some("d".to_string()),
        runs: Some(RunsConfig {
            using: Some("composite".to_string()),
            steps: Some(vec![Step {
                name: Some("s".to_string()),
                run: Some("echo hi".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert!(Validator::new().validate(&manifest).is_empty());
}
