//! Property tests for plan resolution and commit.

use std::collections::BTreeSet;

use proptest::prelude::*;
use serde_json::Value;

use solbundle::domain::services::{lock_updates, resolve};
use solbundle::{
    ConstructorArgs, ContractAddress, ContractDeclaration, DeployAction, DeploymentLock,
    DeploymentResult, Environment, NetworkName,
};

fn unique_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[A-Z][a-zA-Z0-9]{0,8}", 0..8)
        .prop_map(|set: BTreeSet<String>| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn declarations(names: &[String], seed: i64) -> Vec<ContractDeclaration> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            ContractDeclaration::new(name.clone())
                .with_args(ConstructorArgs::Positional(vec![Value::from(seed + i as i64)]))
        })
        .collect()
}

fn address(i: usize) -> ContractAddress {
    ContractAddress::parse(&format!("0x{:040x}", i + 1)).unwrap()
}

fn deploy_all(
    env: &Environment,
    decls: &[ContractDeclaration],
    lock: &mut DeploymentLock,
) {
    let plan = resolve(env, decls, Some(lock)).unwrap();
    let results: Vec<DeploymentResult> = plan
        .pending()
        .enumerate()
        .map(|(i, step)| DeploymentResult::new(step.contract.clone(), address(i)))
        .collect();
    lock_updates(&plan, &results).unwrap().apply_to(lock);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Without a lock, every declaration is deployed in declaration order.
    #[test]
    fn property_no_lock_plans_all_deploy_in_order(names in unique_names(), seed in any::<i32>()) {
        let env = Environment::new(NetworkName::Localhost);
        let decls = declarations(&names, seed as i64);

        let plan = resolve(&env, &decls, None).unwrap();

        let planned: Vec<&str> = plan.steps.iter().map(|s| s.contract.as_str()).collect();
        let declared: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
        prop_assert_eq!(planned, declared);
        prop_assert!(plan.steps.iter().all(|s| s.action == DeployAction::Deploy));
    }

    /// PROPERTY: resolve, commit, resolve yields an all-skip plan.
    #[test]
    fn property_commit_makes_plan_idempotent(names in unique_names(), seed in any::<i32>()) {
        let env = Environment::new(NetworkName::Localhost).with_chain_id(31337);
        let decls = declarations(&names, seed as i64);
        let mut lock = DeploymentLock::new();

        deploy_all(&env, &decls, &mut lock);

        let again = resolve(&env, &decls, Some(&lock)).unwrap();
        prop_assert!(again.is_up_to_date());
        prop_assert_eq!(again.len(), names.len());
    }

    /// PROPERTY: Changing one contract's arguments redeploys exactly that contract.
    #[test]
    fn property_changed_args_redeploy_only_that_contract(
        names in unique_names().prop_filter("need a contract", |n| !n.is_empty()),
        seed in any::<i32>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let env = Environment::new(NetworkName::Localhost);
        let decls = declarations(&names, seed as i64);
        let mut lock = DeploymentLock::new();
        deploy_all(&env, &decls, &mut lock);

        let changed = pick.index(names.len());
        let mut edited = decls.clone();
        edited[changed] = ContractDeclaration::new(names[changed].clone())
            .with_args(ConstructorArgs::Positional(vec![Value::from("changed")]));

        let plan = resolve(&env, &edited, Some(&lock)).unwrap();
        for (i, step) in plan.steps.iter().enumerate() {
            let expected = if i == changed { DeployAction::Redeploy } else { DeployAction::Skip };
            prop_assert_eq!(step.action, expected);
        }
    }

    /// PROPERTY: A lock recorded on another chain never yields a skip.
    #[test]
    fn property_chain_change_redeploys_everything(names in unique_names(), seed in any::<i32>()) {
        let local = Environment::new(NetworkName::Localhost).with_chain_id(31337);
        let decls = declarations(&names, seed as i64);
        let mut lock = DeploymentLock::new();
        deploy_all(&local, &decls, &mut lock);

        let forked = Environment::new(NetworkName::Localhost).with_chain_id(1337);
        let plan = resolve(&forked, &decls, Some(&lock)).unwrap();
        prop_assert!(plan.steps.iter().all(|s| s.action == DeployAction::Redeploy));
    }
}
