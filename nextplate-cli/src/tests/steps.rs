//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::DataFiles;
use super::*;
use crate::report::run_recommend;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

/// Aggregates recommend CLI scenario state so each step only needs a single
/// world argument.
#[derive(Debug)]
struct RecommendWorld {
    data_files: DataFiles,
    cli_args: RefCell<Vec<String>>,
    cli_result: RefCell<Option<Result<Value, CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            data_files: DataFiles::new(),
            cli_args: RefCell::new(Vec::new()),
            cli_result: RefCell::new(None),
        }
    }

    fn push_args<const N: usize>(&self, args: [String; N]) {
        self.cli_args.borrow_mut().extend(args);
    }

    fn output(&self) -> Value {
        let borrowed = self.cli_result.borrow();
        borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect("expected success")
            .clone()
    }

    fn with_error(&self, check: impl FnOnce(&CliError)) {
        let borrowed = self.cli_result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error);
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("a data directory with three clusters")]
fn data_directory_exists(#[from(world)] world: &RecommendWorld) {
    assert!(
        world.data_files.file("restaurants.csv").is_file(),
        "expected the restaurant table on disk",
    );
}

#[given("I pass the data directory with the CLI flag")]
fn cli_provides_data_dir(#[from(world)] world: &RecommendWorld) {
    world.push_args([
        format!("--{ARG_DATA_DIR}"),
        world.data_files.root().as_str().to_owned(),
    ]);
}

#[given("I select the district Champel")]
fn select_champel(#[from(world)] world: &RecommendWorld) {
    world.push_args([format!("--{ARG_DISTRICT}"), "Champel".to_owned()]);
}

#[given("I ask for extreme competition")]
fn extreme_competition(#[from(world)] world: &RecommendWorld) {
    world.push_args([format!("--{ARG_COMPETITORS}"), "extreme".to_owned()]);
}

#[given("I omit the data directory")]
fn omit_data_dir(#[from(world)] world: &RecommendWorld) {
    world.cli_args.borrow_mut().clear();
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let mut invocation = vec!["nextplate".to_owned(), "recommend".to_owned()];
    invocation.extend(world.cli_args.borrow().iter().cloned());
    let outcome = Cli::try_parse_from(invocation)
        .map_err(CliError::ArgumentParsing)
        .and_then(|cli| match cli.command {
            Command::Recommend(args) => {
                let mut buffer = Vec::new();
                run_recommend(args, &mut buffer)?;
                Ok(serde_json::from_slice::<Value>(&buffer).expect("valid JSON output"))
            }
            Command::Overlays(_) => panic!("unexpected overlays command"),
        });
    world.cli_result.replace(Some(outcome));
}

fn first_cluster(list: &Value) -> Option<&str> {
    list.get(0)?.get("key")?.get("cluster")?.as_str()
}

#[then("the best cluster is c2")]
fn best_is_c2(#[from(world)] world: &RecommendWorld) {
    let output = world.output();
    assert_eq!(first_cluster(&output["best"]), Some("c2"));
}

#[then("the worst cluster is c1")]
fn worst_is_c1(#[from(world)] world: &RecommendWorld) {
    let output = world.output();
    assert_eq!(first_cluster(&output["worst"]), Some("c1"));
}

#[then("the CLI reports that the \"data-dir\" flag is missing")]
fn reports_missing_data_dir(#[from(world)] world: &RecommendWorld) {
    world.with_error(|error| match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_DATA_DIR),
        other => panic!("unexpected error {other:?}"),
    });
}

#[then("the CLI reports an invalid competitors level")]
fn reports_invalid_competitors(#[from(world)] world: &RecommendWorld) {
    world.with_error(|error| match error {
        CliError::InvalidPreference { field, .. } => assert_eq!(*field, ARG_COMPETITORS),
        other => panic!("unexpected error {other:?}"),
    });
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(district_ranking, "ranking clusters for a single district");
register_recommend_scenario!(rejecting_missing_data_dir, "rejecting a missing data directory");
register_recommend_scenario!(
    rejecting_unknown_preference,
    "rejecting an unknown preference level"
);
