use url::form_urlencoded;

use crate::domain::model::MagnetFields;
use crate::domain::ports::MagnetCodec;

/// Writes `magnet:?xt=urn:btih:<hash>&dn=<name>&tr=<tracker>...`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagnetUriCodec;

fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

impl MagnetCodec for MagnetUriCodec {
    fn encode(&self, magnet: &MagnetFields) -> String {
        let mut uri = format!("magnet:?xt=urn:btih:{}", magnet.info_hash);
        if let Some(name) = &magnet.name {
            uri.push_str("&dn=");
            uri.push_str(&encode_component(name));
        }
        for tracker in &magnet.announce {
            uri.push_str("&tr=");
            uri.push_str(&encode_component(tracker));
        }
        uri
    }
}
