//! Reading and writing the EDNS options the rotation engine cares about:
//! the client subnet (ECS) of the request and the rotation token option.

use crate::dns::record_type_map::RecordTypeMapper;
use hickory_proto::op::Edns;
use hickory_proto::rr::rdata::opt::{ClientSubnet, EdnsCode, EdnsOption};
use hickory_proto::rr::RecordType as HickoryRecordType;
use ipnetwork::IpNetwork;
use rrdns_domain::{ShuffleRequest, SubnetSignal};
use tracing::debug;

/// First code of the EDNS local/experimental range.
pub const ROTATION_OPTION_CODE: u16 = 65001;

/// Client subnet declared in the request, as a cursor partition signal.
pub fn read_subnet(edns: Option<&Edns>) -> SubnetSignal {
    match edns.and_then(|edns| edns.option(EdnsCode::Subnet)) {
        Some(EdnsOption::Subnet(subnet)) => subnet_signal(subnet),
        _ => SubnetSignal::Missing,
    }
}

fn subnet_signal(subnet: &ClientSubnet) -> SubnetSignal {
    let prefix = subnet.source_prefix();
    if prefix == 0 {
        return SubnetSignal::Empty;
    }

    let declared = match IpNetwork::new(subnet.addr(), prefix) {
        Ok(network) => network.to_string(),
        Err(e) => {
            debug!(error = %e, addr = %subnet.addr(), prefix, "Client subnet prefix out of range");
            subnet.addr().to_string()
        }
    };
    SubnetSignal::Subnet(declared)
}

/// Payload of the rotation option echoed by the client, if any.
pub fn read_rotation_token(edns: Option<&Edns>) -> Option<String> {
    let option = edns?.option(EdnsCode::from(ROTATION_OPTION_CODE))?;
    let EdnsOption::Unknown(_, data) = option else {
        return None;
    };

    match String::from_utf8(data.clone()) {
        Ok(token) => Some(token),
        Err(_) => {
            debug!(len = data.len(), "Rotation option is not valid UTF-8, ignoring");
            None
        }
    }
}

/// Rotation option carrying `token` back to the client.
pub fn rotation_option(token: &str) -> EdnsOption {
    EdnsOption::Unknown(ROTATION_OPTION_CODE, token.as_bytes().to_vec())
}

/// Builds the engine's view of a query from its question and EDNS section.
pub fn shuffle_request(
    name: &str,
    query_type: HickoryRecordType,
    edns: Option<&Edns>,
) -> ShuffleRequest {
    let mut request = ShuffleRequest::new(name, RecordTypeMapper::from_hickory(query_type))
        .with_subnet(read_subnet(edns));
    request.rotation_token = read_rotation_token(edns);
    request
}
