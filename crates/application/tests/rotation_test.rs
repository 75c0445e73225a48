use rrdns_application::services::reconcile;

fn ips(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_reconcile_is_cyclic_with_period_n() {
    for n in 2..=7 {
        let original: Vec<String> = (1..=n).map(|i| format!("10.0.0.{}", i)).collect();
        let mut order = original.clone();
        for step in 1..=n {
            order = reconcile(&order, &original);
            if step < n {
                assert_ne!(order, original, "n={} returned early at step {}", n, step);
            }
        }
        assert_eq!(order, original, "n={} did not cycle back", n);
    }
}

#[test]
fn test_reconcile_every_address_leads_once_per_cycle() {
    let current = ips(&["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4"]);
    let mut order = Vec::new();
    let mut leaders = Vec::new();
    for _ in 0..current.len() {
        order = reconcile(&order, &current);
        leaders.push(order[0].clone());
    }
    leaders.sort();
    assert_eq!(leaders, current);
}

#[test]
fn test_reconcile_is_idempotent_for_short_lists() {
    assert!(reconcile(&[], &[]).is_empty());

    let single = ips(&["10.0.0.1"]);
    assert_eq!(reconcile(&single, &single), single);
    assert_eq!(reconcile(&[], &single), single);
}

#[test]
fn test_reconcile_output_is_permutation_of_current() {
    let previous = ips(&["10.0.0.9", "10.0.0.3", "10.0.0.1", "10.0.0.3"]);
    let current = ips(&["10.0.0.1", "10.0.0.2", "10.0.0.3"]);

    let mut order = reconcile(&previous, &current);
    assert_eq!(order.len(), current.len());
    order.sort();
    assert_eq!(order, current);
}

#[test]
fn test_reconcile_drops_vanished_and_appends_new_in_response_order() {
    let previous = ips(&["10.0.0.3", "10.0.0.4", "10.0.0.1", "10.0.0.2"]);
    let current = ips(&["10.0.0.1", "10.0.0.3", "10.0.0.4", "10.0.0.5"]);

    // filter: [.3 .4 .1], append: [.3 .4 .1 .5], rotate once
    assert_eq!(
        reconcile(&previous, &current),
        ips(&["10.0.0.4", "10.0.0.1", "10.0.0.5", "10.0.0.3"])
    );
}

#[test]
fn test_reconcile_several_new_addresses_keep_response_order() {
    let previous = ips(&["10.0.0.2"]);
    let current = ips(&["10.0.0.9", "10.0.0.2", "10.0.0.7", "10.0.0.8"]);

    assert_eq!(
        reconcile(&previous, &current),
        ips(&["10.0.0.9", "10.0.0.7", "10.0.0.8", "10.0.0.2"])
    );
}

#[test]
fn test_reconcile_empty_current_clears_order() {
    let previous = ips(&["10.0.0.1", "10.0.0.2"]);
    assert!(reconcile(&previous, &[]).is_empty());
}
