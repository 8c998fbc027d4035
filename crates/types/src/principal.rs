use crate::hexid::{decode_id, encode_id, hex_id_type, IdError, ID_BYTES};
use serde::{Deserialize, Serialize};

hex_id_type! {
    /// Opaque authenticated caller identity.
    ///
    /// Principals are managed by the execution substrate (e.g. account
    /// addresses); the registry only compares them. The zero principal
    /// means "no owner" and is never a valid caller.
    Principal
}

impl Principal {
    /// The zero principal: a node owned by it is unclaimed.
    pub const ZERO: Principal = Principal([0u8; ID_BYTES]);

    /// Whether this is the zero principal.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
