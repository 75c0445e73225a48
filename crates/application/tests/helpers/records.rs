use rrdns_domain::{AddressFamily, AddressRecord};

/// Minimal answer record: a type mnemonic and its presentation value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    pub kind: &'static str,
    pub value: String,
}

impl AddressRecord for TestRecord {
    fn address(&self, family: AddressFamily) -> Option<String> {
        (self.kind == family.as_str()).then(|| self.value.clone())
    }
}

pub fn a(ip: &str) -> TestRecord {
    TestRecord {
        kind: "A",
        value: ip.to_string(),
    }
}

pub fn aaaa(ip: &str) -> TestRecord {
    TestRecord {
        kind: "AAAA",
        value: ip.to_string(),
    }
}

pub fn cname(target: &str) -> TestRecord {
    TestRecord {
        kind: "CNAME",
        value: target.to_string(),
    }
}

pub fn mx(exchange: &str) -> TestRecord {
    TestRecord {
        kind: "MX",
        value: exchange.to_string(),
    }
}

/// Values of the answer in order, for compact assertions.
pub fn addresses(answer: &[TestRecord]) -> Vec<&str> {
    answer.iter().map(|r| r.value.as_str()).collect()
}
