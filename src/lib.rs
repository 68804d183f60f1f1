pub mod shared {
    pub mod core {
        pub mod context;
    }
    pub mod infrastructure {
        pub mod change_feed;
    }
}

pub mod modules {
    pub mod nfts {
        pub mod api_port;
        pub mod core {
            pub mod changes;
            pub mod nft;
        }
        pub mod use_cases {
            pub mod query_nfts {
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod upsert_nft {
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod watch_nft_changes {
                pub mod inbound {
                    pub mod graphql;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory_api;
                pub mod seed_file;
            }
        }
    }
}

pub mod shell;
