//! Browser implementations of the wallet session seams plus the NFT catalog.

pub mod adapter;
pub mod nfts;
pub mod rpc;
pub mod storage;
