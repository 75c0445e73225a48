use rrdns_domain::{AddressFamily, AddressRecord};
use rustc_hash::FxHashMap;

/// Answer section split into the address records of one family and
/// everything else.
#[derive(Debug)]
pub struct Partition<R> {
    /// Address records keyed by their textual address; a repeated address
    /// keeps the last record that carried it.
    pub by_address: FxHashMap<String, R>,
    /// Distinct addresses in first-seen order.
    pub addresses: Vec<String>,
    /// Records of any other type (including the other address family), in
    /// their original order.
    pub others: Vec<R>,
}

pub fn partition<R: AddressRecord>(records: Vec<R>, family: AddressFamily) -> Partition<R> {
    let mut by_address = FxHashMap::default();
    let mut addresses = Vec::new();
    let mut others = Vec::new();

    for record in records {
        match record.address(family) {
            Some(address) => {
                if !by_address.contains_key(&address) {
                    addresses.push(address.clone());
                }
                by_address.insert(address, record);
            }
            None => others.push(record),
        }
    }

    Partition {
        by_address,
        addresses,
        others,
    }
}

impl<R> Partition<R> {
    /// Rebuilds the answer: address records in `order`, then the other
    /// records in their original order.
    pub fn assemble(mut self, order: &[String]) -> Vec<R> {
        let mut answer = Vec::with_capacity(order.len() + self.others.len());
        for address in order {
            if let Some(record) = self.by_address.remove(address) {
                answer.push(record);
            }
        }
        answer.append(&mut self.others);
        answer
    }
}
