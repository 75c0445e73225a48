use rustc_hash::FxHashSet;

/// Reconciles a stored address order against the addresses of a fresh
/// answer and advances the cursor by one.
///
/// 1. Addresses of `previous` that are still in `current` keep their
///    relative order.
/// 2. Addresses of `current` not seen yet are appended in `current` order.
/// 3. The result is rotated left once.
///
/// Membership changes never move the cursor of the addresses that stayed,
/// and with a stable set of `n` addresses every address leads exactly once
/// per `n` calls.
pub fn reconcile(previous: &[String], current: &[String]) -> Vec<String> {
    let live: FxHashSet<&str> = current.iter().map(String::as_str).collect();
    let mut placed: FxHashSet<&str> = FxHashSet::default();
    let mut order = Vec::with_capacity(current.len());

    for address in previous {
        if live.contains(address.as_str()) && placed.insert(address.as_str()) {
            order.push(address.clone());
        }
    }

    for address in current {
        if placed.insert(address.as_str()) {
            order.push(address.clone());
        }
    }

    rotate_left_once(&mut order);
    order
}

#[inline]
pub fn rotate_left_once<T>(order: &mut [T]) {
    if order.len() > 1 {
        order.rotate_left(1);
    }
}
