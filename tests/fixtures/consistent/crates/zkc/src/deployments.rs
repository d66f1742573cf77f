use alloy_primitives::{address, Address};

pub const SEPOLIA: Deployment = Deployment {
    chain_id: Some(1),
    zkc_address: address!("0xb4FC69A452D09D2662BD8C3B5BB756902260aE28"),
    vezkc_address: address!("0xc23340732038ca6C5765763180E81B395d2e9cCA"),
};

pub const MAINNET: Deployment = Deployment {
    chain_id: Some(1),
    zkc_address: address!("0x000006c2A22ff4A44ff1f5d0F2ed65F781F55555"),
    vezkc_address: address!("0xe8ae8ee8ffa57f6a79b6cbe06bafc0b05f3ffbf4"),
};
