// Copyright (C) 2015-2025 The Neo Project.
//
// utility/mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Contract parameter encoding and invocation result decoding.

mod params;
mod stack;

pub use params::{classify, encode_invocation_params, encode_param, is_hash160, is_hash256};
pub use stack::{decode_invocation_result, decode_stack};
