use crate::address_family::AddressFamily;
use crate::client_key::SubnetSignal;
use crate::dns_record::RecordType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub query_type: RecordType,
}

impl Question {
    pub fn new(name: impl Into<String>, query_type: RecordType) -> Self {
        Self {
            name: name.into(),
            query_type,
        }
    }

    pub fn family(&self) -> AddressFamily {
        AddressFamily::for_query_type(self.query_type)
    }
}

/// The parts of an inbound query the rotation engine reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShuffleRequest {
    pub question: Option<Question>,
    pub subnet: SubnetSignal,
    /// Raw payload of the rotation option echoed by the client, if any.
    pub rotation_token: Option<String>,
}

impl ShuffleRequest {
    pub fn new(name: impl Into<String>, query_type: RecordType) -> Self {
        Self {
            question: Some(Question::new(name, query_type)),
            ..Self::default()
        }
    }

    pub fn without_question() -> Self {
        Self::default()
    }

    pub fn with_subnet(mut self, subnet: SubnetSignal) -> Self {
        self.subnet = subnet;
        self
    }

    pub fn with_rotation_token(mut self, token: impl Into<String>) -> Self {
        self.rotation_token = Some(token.into());
        self
    }
}

/// Answer section produced by a shuffler, plus the rotation token to hand
/// back to the client when the strategy keeps its state client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleOutcome<R> {
    pub answer: Vec<R>,
    pub rotation_token: Option<String>,
}

impl<R> ShuffleOutcome<R> {
    pub fn new(answer: Vec<R>) -> Self {
        Self {
            answer,
            rotation_token: None,
        }
    }

    pub fn with_rotation_token(mut self, token: String) -> Self {
        self.rotation_token = Some(token);
        self
    }
}
