//! Purge and sanitize properties of compiled pipelines.

use ci_pipeline::{Build, Container, ContainerSlice, RuleData, Rules, Ruleset, Stage, StageSlice};
use proptest::prelude::*;

const BRANCHES: [&str; 3] = ["main", "dev", "release"];

fn arb_container() -> impl Strategy<Value = Container> {
    (
        "[a-z][a-z _.]{0,10}",
        prop::collection::vec(prop::sample::select(BRANCHES.to_vec()), 0..3),
    )
        .prop_map(|(name, branches)| Container {
            id: format!("step_github_octocat_1_{name}"),
            name,
            image: "alpine:latest".into(),
            ruleset: Ruleset {
                r#if: Rules {
                    branch: branches.into_iter().collect(),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        })
}

fn arb_steps() -> impl Strategy<Value = ContainerSlice> {
    prop::collection::vec(arb_container(), 0..8).prop_map(ContainerSlice)
}

fn arb_stages() -> impl Strategy<Value = StageSlice> {
    prop::collection::vec(("[a-z]{1,8}", arb_steps()), 0..5).prop_map(|stages| {
        stages
            .into_iter()
            .map(|(name, steps)| Stage {
                name,
                steps,
                ..Default::default()
            })
            .collect()
    })
}

fn arb_data() -> impl Strategy<Value = RuleData> {
    prop::sample::select(BRANCHES.to_vec()).prop_map(|branch| RuleData {
        branch: branch.into(),
        event: "push".into(),
        ..Default::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn purged_steps_are_numbered_contiguously(steps in arb_steps(), data in arb_data()) {
        let purged = steps.purge(&data).unwrap();
        let numbers: Vec<i32> = purged.iter().map(|c| c.number).collect();
        let expected: Vec<i32> = (1..=purged.len() as i32).collect();
        prop_assert_eq!(numbers, expected);

        for container in purged.iter() {
            prop_assert!(container.ruleset.matches(&data).unwrap());
        }
    }

    #[test]
    fn purged_stages_are_never_empty(stages in arb_stages(), data in arb_data()) {
        let purged = stages.purge(&data).unwrap();
        prop_assert!(purged.iter().all(|stage| !stage.steps.is_empty()));

        let numbers: Vec<i32> = purged
            .iter()
            .flat_map(|stage| stage.steps.iter().map(|c| c.number))
            .collect();
        let expected: Vec<i32> = (1..=numbers.len() as i32).collect();
        prop_assert_eq!(numbers, expected);
    }

    #[test]
    fn purge_is_idempotent_on_membership(steps in arb_steps(), data in arb_data()) {
        let once = steps.purge(&data).unwrap();
        let twice = once.purge(&data).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn build_sanitize_is_idempotent(
        steps in arb_steps(),
        services in arb_steps(),
        driver in prop::sample::select(vec!["docker", "kubernetes"]),
    ) {
        let build = Build {
            id: "github octocat_1.".into(),
            services,
            steps,
            ..Default::default()
        };
        let once = build.sanitize(driver).unwrap();
        prop_assert_eq!(once.sanitize(driver), Some(once.clone()));
        prop_assert!(once.steps.iter().all(|c| !c.id.contains(' ')));
        if driver == "kubernetes" {
            prop_assert!(once
                .steps
                .iter()
                .chain(once.services.iter())
                .all(|c| !c.id.contains(['_', '.'])));
        }
    }
}
