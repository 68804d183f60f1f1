use crate::modules::nfts::adapters::outbound::in_memory_api::InMemoryMetaplexApi;
use crate::modules::nfts::api_port::{MetaplexApi, SharedApi};
use crate::shared::core::context::RequestContext;
use crate::shell::graphql::build_schema;
use crate::tests::fixtures::nfts::NftBuilder;
use async_graphql::Request;
use futures_util::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn lists_nfts_by_owner_in_address_order() {
    let api = Arc::new(InMemoryMetaplexApi::new("devnet"));
    for address in ["nft-3", "nft-1", "nft-2"] {
        api.put_nft(NftBuilder::new().address(address).owner("owner-a").build())
            .await
            .unwrap();
    }
    let schema = build_schema(api, true);

    let response = schema
        .execute(r#"{ nftsByOwner(owner: "owner-a", offset: 1, limit: 5) { address } }"#)
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["nftsByOwner"],
        serde_json::json!([{ "address": "nft-2" }, { "address": "nft-3" }])
    );
}

#[tokio::test]
async fn session_requires_an_initialised_request_context() {
    let api: SharedApi = Arc::new(InMemoryMetaplexApi::new("devnet"));
    let schema = build_schema(api.clone(), true);

    let without_context = schema.execute("{ session { cluster } }").await;
    assert_eq!(without_context.errors.len(), 1);

    let mut context = RequestContext::over_websocket(serde_json::json!({}));
    api.init_context(&mut context);
    let with_context = schema
        .execute(Request::new("{ session { transport cluster } }").data(context))
        .await;

    let data = with_context.data.into_json().unwrap();
    assert_eq!(data["session"]["transport"], "WEB_SOCKET");
    assert_eq!(data["session"]["cluster"], "devnet");
}

#[tokio::test]
async fn rejects_introspection_when_disabled() {
    let api: SharedApi = Arc::new(InMemoryMetaplexApi::new("devnet"));

    let enabled = build_schema(api.clone(), true)
        .execute("{ __schema { queryType { name } } }")
        .await;
    assert_eq!(
        enabled.data.into_json().unwrap()["__schema"]["queryType"]["name"],
        "QueryRoot"
    );

    let disabled = build_schema(api, false)
        .execute("{ __schema { queryType { name } } }")
        .await;
    assert!(
        disabled
            .data
            .into_json()
            .unwrap()
            .get("__schema")
            .is_none_or(|v| v.is_null())
    );
}

#[tokio::test]
async fn streams_matching_changes_to_subscribers() {
    let api = Arc::new(InMemoryMetaplexApi::new("devnet"));
    let schema = build_schema(api.clone(), true);

    let mut stream = schema.execute_stream(
        r#"subscription { nftChanged(owner: "owner-b") { kind slot nft { address owner } } }"#,
    );
    let next = tokio::spawn(async move { stream.next().await });

    while api.subscriber_count() == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    api.put_nft(NftBuilder::new().address("nft-a").owner("owner-a").build())
        .await
        .unwrap();
    api.put_nft(NftBuilder::new().address("nft-b").owner("owner-b").build())
        .await
        .unwrap();

    let response = timeout(Duration::from_secs(1), next)
        .await
        .expect("no change delivered")
        .unwrap()
        .expect("stream ended");

    let data = response.data.into_json().unwrap();
    assert_eq!(data["nftChanged"]["kind"], "CREATED");
    assert_eq!(data["nftChanged"]["slot"], 2);
    assert_eq!(data["nftChanged"]["nft"]["address"], "nft-b");
}
