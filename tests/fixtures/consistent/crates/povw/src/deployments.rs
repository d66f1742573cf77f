use alloy_primitives::{address, Address};

pub const SEPOLIA: Deployment = Deployment {
    chain_id: Some(1),
    povw_accounting_address: address!("0xC5E956732F4B59B3fC9E6E4D3ed9c2A3C4E9A1B2"),
    povw_mint_address: address!("0x3aB8Db0f6a0f1e7cA2B9c6dE5f4A3b2C1d0E9f8A"),
    zkc_address: address!("0xb4FC69A452D09D2662BD8C3B5BB756902260aE28"),
    vezkc_address: address!("0xc23340732038ca6C5765763180E81B395d2e9cCA"),
};

pub const MAINNET: Deployment = Deployment {
    chain_id: Some(1),
    povw_accounting_address: address!("0x319bd4050b2170a7aD3Ead3E6b3e30a6e0aF4e42"),
    povw_mint_address: address!("0xa6AC7D3Ef6ccE0c11B4D0bA06C5dF0E0AD3Ae1F8"),
    zkc_address: address!("0x000006c2A22ff4A44ff1f5d0F2ed65F781F55555"),
    vezkc_address: address!("0xe8ae8ee8ffa57f6a79b6cbe06bafc0b05f3ffbf4"),
};
