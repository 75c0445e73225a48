use crate::dns::edns;
use crate::dns::response_rotator::ResponseRotator;
use crate::dns::zone::LocalZone;
use hickory_proto::op::{Edns, Header, ResponseCode};
use hickory_proto::rr::{Record, RecordType as HickoryRecordType};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error};

const MIN_UDP_PAYLOAD: u16 = 512;

/// Authoritative handler for the locally declared zone. Every answer goes
/// through the rotation engine before it is written.
#[derive(Clone)]
pub struct RotationDnsHandler {
    zone: Arc<LocalZone>,
    rotator: ResponseRotator,
}

impl RotationDnsHandler {
    pub fn new(zone: Arc<LocalZone>, rotator: ResponseRotator) -> Self {
        Self { zone, rotator }
    }

    /// Answer and response code for a question, before rotation.
    pub fn resolve(&self, name: &str, query_type: HickoryRecordType) -> (ResponseCode, Vec<Record>) {
        let answers = self.zone.lookup(name, query_type);
        if answers.is_empty() && !self.zone.contains_name(name) {
            return (ResponseCode::NXDomain, answers);
        }
        (ResponseCode::NoError, answers)
    }
}

/// EDNS section of the response: present when the client spoke EDNS or when
/// a rotation token has to travel back.
pub fn response_edns(request_edns: Option<&Edns>, rotation_token: Option<&str>) -> Option<Edns> {
    if request_edns.is_none() && rotation_token.is_none() {
        return None;
    }

    let mut response = Edns::new();
    if let Some(request_edns) = request_edns {
        response.set_max_payload(request_edns.max_payload().max(MIN_UDP_PAYLOAD));
    }
    if let Some(token) = rotation_token {
        response.options_mut().insert(edns::rotation_option(token));
    }
    Some(response)
}

#[async_trait::async_trait]
impl RequestHandler for RotationDnsHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let name = query.original().name().to_string();
        let query_type = query.query_type();
        let request_edns = request.edns();

        debug!(name = %name, record_type = ?query_type, client = %request.src().ip(), "DNS query received");

        let shuffle_request = edns::shuffle_request(&name, query_type, request_edns);
        let (response_code, answers) = self.resolve(&name, query_type);
        let outcome = self.rotator.rotate(&shuffle_request, response_code, answers);

        let mut builder = MessageResponseBuilder::from_message_request(request);
        if let Some(edns) = response_edns(request_edns, outcome.rotation_token.as_deref()) {
            builder.edns(edns);
        }

        let mut header = Header::response_from_request(request.header());
        header.set_response_code(response_code);
        header.set_authoritative(true);

        debug!(
            name = %name,
            answers = outcome.answer.len(),
            strategy = self.rotator.strategy_name(),
            "Sending response"
        );

        let response = builder.build(header, outcome.answer.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
