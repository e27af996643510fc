//! End-to-end scenarios against the balancer boundary.

use provider_balancer::{BalancerConfig, BalancerError, LoadBalancer, StrategyKind};

mod common;

fn select_id(balancer: &LoadBalancer) -> String {
    balancer.select().unwrap().identifier().to_owned()
}

#[tokio::test]
async fn construction_succeeds_for_all_valid_pool_sizes() {
    common::init_tracing();
    for size in 1..=10 {
        let ids: Vec<String> = (0..size).map(|i| format!("provider-{i}")).collect();
        let balancer = LoadBalancer::new(BalancerConfig::new(ids, StrategyKind::Random)).unwrap();
        assert_eq!(balancer.alive_providers().len(), size);
        balancer.shutdown().await;
    }
}

#[tokio::test]
async fn construction_rejects_out_of_range_pools() {
    let err = LoadBalancer::new(BalancerConfig::new(Vec::<String>::new(), StrategyKind::Random))
        .unwrap_err();
    assert_eq!(err, BalancerError::InvalidPoolSize(0));

    let ids: Vec<String> = (0..11).map(|i| format!("provider-{i}")).collect();
    let err = LoadBalancer::new(BalancerConfig::new(ids, StrategyKind::RoundRobin)).unwrap_err();
    assert_eq!(err, BalancerError::InvalidPoolSize(11));
}

#[tokio::test]
async fn round_robin_cycles_and_wraps() {
    let balancer =
        LoadBalancer::new(common::config(["A", "B", "C"], StrategyKind::RoundRobin)).unwrap();

    assert_eq!(select_id(&balancer), "A");
    assert_eq!(select_id(&balancer), "B");
    assert_eq!(select_id(&balancer), "C");
    assert_eq!(select_id(&balancer), "A");

    balancer.shutdown().await;
}

#[tokio::test]
async fn excluded_provider_never_selected() {
    let balancer =
        LoadBalancer::new(common::config(["A", "B", "C"], StrategyKind::RoundRobin)).unwrap();
    balancer.exclude("B");

    assert_eq!(select_id(&balancer), "A");
    assert_eq!(select_id(&balancer), "C");
    assert_eq!(select_id(&balancer), "A");

    balancer.shutdown().await;
}

#[tokio::test]
async fn selection_fails_once_the_whole_pool_is_excluded() {
    let balancer = LoadBalancer::new(common::config(["A"], StrategyKind::RoundRobin)).unwrap();
    balancer.exclude("A");

    assert_eq!(balancer.select().unwrap_err(), BalancerError::NoAliveProviders);

    balancer.shutdown().await;
}

#[tokio::test]
async fn unknown_identifiers_are_silently_ignored() {
    let balancer = LoadBalancer::new(common::config(["A"], StrategyKind::RoundRobin)).unwrap();

    balancer.exclude("ghost");
    balancer.include("ghost");

    assert_eq!(balancer.capacity(), 50);
    assert_eq!(select_id(&balancer), "A");

    balancer.shutdown().await;
}

#[tokio::test]
async fn include_on_an_alive_provider_changes_nothing_observable() {
    let balancer =
        LoadBalancer::new(common::config(["A", "B"], StrategyKind::RoundRobin)).unwrap();

    assert_eq!(select_id(&balancer), "A");
    balancer.include("A");
    balancer.include("B");

    assert_eq!(balancer.capacity(), 100);
    assert_eq!(select_id(&balancer), "B");

    balancer.shutdown().await;
}

#[tokio::test]
async fn capacity_follows_every_exclude_and_include() {
    let balancer =
        LoadBalancer::new(common::config(["A", "B", "C"], StrategyKind::Random)).unwrap();
    assert_eq!(balancer.capacity(), 150);

    balancer.exclude("B");
    assert_eq!(balancer.capacity(), 100);

    balancer.exclude("A");
    balancer.exclude("C");
    assert_eq!(balancer.capacity(), 0);

    balancer.include("B");
    assert_eq!(balancer.capacity(), 50);

    balancer.shutdown().await;
}

#[tokio::test]
async fn random_strategy_only_returns_alive_providers() {
    let balancer =
        LoadBalancer::new(common::config(["A", "B", "C"], StrategyKind::Random)).unwrap();
    balancer.exclude("C");

    for _ in 0..100 {
        let picked = balancer.select().unwrap();
        assert_ne!(picked.identifier(), "C");
    }

    balancer.shutdown().await;
}
