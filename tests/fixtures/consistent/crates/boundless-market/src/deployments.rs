use alloy_primitives::{address, Address};

/// [Deployment] for ethereum-sepolia.
pub const SEPOLIA: Deployment = Deployment {
    chain_id: Some(1),
    boundless_market_address: address!("0xc211b581cb62e3a6d396a592bab34979e1bbba7d"),
    verifier_router_address: Some(address!("0x925d8331ddc0a1F0d96E68CF073DFE1d92b69187")),
    set_verifier_address: address!("0xcb9D14347b1e816831ECeE46EC199144F360B55c"),
    collateral_token_address: Some(address!("0xb4FC69A452D09D2662BD8C3B5BB756902260aE28")),
    order_stream_url: Some(Cow::Borrowed("https://ethereum-sepolia.example.network")),
};

/// [Deployment] for base-mainnet.
pub const BASE: Deployment = Deployment {
    chain_id: Some(1),
    boundless_market_address: address!("0xFD152dadc5183870710fe54f939eae3ab9f0fe82"),
    verifier_router_address: Some(address!("0x0b144e07a0826182b6b59788c34b32bfa86fb711")),
    set_verifier_address: address!("0x1Ab08498CfF17b9723ED67143A050c8E8c2e3104"),
    collateral_token_address: Some(address!("0xAA61bB7777bD01B684347961918f1E07fBbCe7CF")),
    order_stream_url: Some(Cow::Borrowed("https://base-mainnet.example.network")),
};

/// [Deployment] for base-sepolia.
pub const BASE_SEPOLIA: Deployment = Deployment {
    chain_id: Some(1),
    boundless_market_address: address!("0x56da3786061c82214d18e634d2817e86ad42d7ce"),
    verifier_router_address: Some(address!("0x0b144e07a0826182b6b59788c34b32bfa86fb711")),
    set_verifier_address: address!("0x1Ab08498CfF17b9723ED67143A050c8E8c2e3104"),
    collateral_token_address: Some(address!("0x8d4dA4b7938471A919B08F941461b2ed1679d7bb")),
    order_stream_url: Some(Cow::Borrowed("https://base-sepolia.example.network")),
};
