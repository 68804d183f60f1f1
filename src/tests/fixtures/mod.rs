pub mod nfts;
