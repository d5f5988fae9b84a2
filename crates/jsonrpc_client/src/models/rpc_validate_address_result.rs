// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_validate_address_result.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Result of `validateaddress`.
///
/// Legacy nodes answer an unparseable address with `isvalid: false` and echo
/// the input back, so `address` is not necessarily a well-formed address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcValidateAddressResult {
    pub address: String,

    #[serde(rename = "isvalid")]
    pub is_valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn uses_node_field_names() {
        let result: RpcValidateAddressResult = serde_json::from_value(json!({
            "address": "AQVh2pG732YvtNaxEGkQUei3YA4cvo7d2i",
            "isvalid": true
        }))
        .unwrap();
        assert!(result.is_valid);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"address": "AQVh2pG732YvtNaxEGkQUei3YA4cvo7d2i", "isvalid": true})
        );
    }

    #[test]
    fn both_fields_are_required() {
        assert!(serde_json::from_value::<RpcValidateAddressResult>(json!({"address": "x"})).is_err());
        assert!(serde_json::from_value::<RpcValidateAddressResult>(json!({"isvalid": false})).is_err());
    }
}
