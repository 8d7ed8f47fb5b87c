use cheirinho::config::AdminConfig;
use cheirinho::store::SupabaseStore;
use cheirinho::{AdminGate, CheirinhoError, RecipeDraft, WeatherBucket};
use mockito::{Matcher, Server};
use serde_json::json;

const TABLE_PATH: &str = "/rest/v1/receitas_cafe";

fn store_for(server: &Server) -> SupabaseStore {
    SupabaseStore::with_base_url(
        server.url(),
        "anon-key".to_string(),
        "receitas_cafe".to_string(),
    )
}

fn gate() -> AdminGate {
    AdminGate::from_config(&AdminConfig {
        password: Some("segredo".to_string()),
    })
}

fn sample_draft() -> RecipeDraft {
    let mut draft = RecipeDraft {
        name: "Café Tropeiro".to_string(),
        prep_time: "10 min".to_string(),
        ..Default::default()
    };
    draft.add_ingredient("Café Moído", "2 colheres");
    draft.add_ingredient("Rapadura", "1 pedaço");
    draft.add_step("Ferver", "Ferva a água com a rapadura.");
    draft.toggle_weather(WeatherBucket::Cold);
    draft
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let server = Server::new_async().await;
    let store = store_for(&server);

    let result = gate().login("senha errada", &store);
    assert!(matches!(result, Err(CheirinhoError::Unauthorized)));
}

#[tokio::test]
async fn test_admin_disabled_without_password() {
    let server = Server::new_async().await;
    let store = store_for(&server);
    let gate = AdminGate::from_config(&AdminConfig::default());

    assert!(matches!(
        gate.login("", &store),
        Err(CheirinhoError::AdminDisabled)
    ));
}

#[tokio::test]
async fn test_create_posts_row_and_refreshes_catalog() {
    let mut server = Server::new_async().await;
    let insert = server
        .mock("POST", TABLE_PATH)
        .match_header("prefer", "return=representation")
        .match_body(Matcher::Json(json!([{
            "nome": "Café Tropeiro",
            "pais": "Brasil",
            "descricao": "",
            "imagem": "",
            "categoria": "Espresso",
            "dificuldade": "Easy",
            "tempo_preparo": "10 min",
            "ingredientes": [
                {"name": "Café Moído", "amount": "2 colheres"},
                {"name": "Rapadura", "amount": "1 pedaço"}
            ],
            "modo_preparo": [
                {"title": "Ferver", "description": "Ferva a água com a rapadura."}
            ],
            "equipamentos": [],
            "clima_adequado": ["neutral", "cold"]
        }])))
        .with_status(201)
        .with_body(r#"[{"id": 10, "nome": "Café Tropeiro"}]"#)
        .create_async()
        .await;
    let fetch = server
        .mock("GET", TABLE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"[{"id": 10, "nome": "Café Tropeiro", "clima_adequado": ["neutral", "cold"]}]"#,
        )
        .create_async()
        .await;

    let store = store_for(&server);
    let session = gate().login("segredo", &store).unwrap();
    let recipes = session.create(&sample_draft()).await.unwrap();

    assert_eq!(recipes.len(), 6);
    assert_eq!(recipes.last().unwrap().id, "10");
    insert.assert_async().await;
    fetch.assert_async().await;
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
    let server = Server::new_async().await;
    let store = store_for(&server);
    let session = gate().login("segredo", &store).unwrap();

    let result = session.create(&RecipeDraft::default()).await;
    assert!(matches!(result, Err(CheirinhoError::InvalidRecipe(_))));
}

#[tokio::test]
async fn test_update_patches_every_field() {
    let mut server = Server::new_async().await;
    let update = server
        .mock("PATCH", TABLE_PATH)
        .match_query(Matcher::UrlEncoded("id".into(), "eq.10".into()))
        .match_body(Matcher::PartialJson(json!({
            "nome": "Café Tropeiro",
            "tempo_preparo": "10 min",
            "equipamentos": []
        })))
        .with_status(200)
        .with_body(r#"[{"id": 10, "nome": "Café Tropeiro"}]"#)
        .create_async()
        .await;
    let _fetch = server
        .mock("GET", TABLE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"id": 10, "nome": "Café Tropeiro"}]"#)
        .create_async()
        .await;

    let store = store_for(&server);
    let session = gate().login("segredo", &store).unwrap();
    session.update("10", &sample_draft()).await.unwrap();

    update.assert_async().await;
}

#[tokio::test]
async fn test_delete_then_refresh_failure_is_reported() {
    let mut server = Server::new_async().await;
    let delete = server
        .mock("DELETE", TABLE_PATH)
        .match_query(Matcher::UrlEncoded("id".into(), "eq.10".into()))
        .with_status(204)
        .create_async()
        .await;
    let _fetch = server
        .mock("GET", TABLE_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let store = store_for(&server);
    let session = gate().login("segredo", &store).unwrap();
    let result = session.delete("10").await;

    assert!(matches!(result, Err(CheirinhoError::StoreError(msg)) if msg.contains("500")));
    delete.assert_async().await;
}
