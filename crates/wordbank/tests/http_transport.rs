use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordbank::{Endpoints, WordBank, WordBankError};

fn bank_for(server: &MockServer) -> WordBank {
    WordBank::new(Endpoints {
        random_words: format!("{}/api", server.uri()),
        catalog: format!("{}/api/words", server.uri()),
        dictionary: format!("{}/api/v2/entries/en", server.uri()),
    })
}

#[tokio::test]
async fn random_words_are_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("words", "3"))
        .and(query_param("length", "5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!(["crisp", "lemon", "vivid"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let words = bank_for(&server).fetch_random_words(3, 5).await.unwrap();
    assert_eq!(words, vec!["crisp", "lemon", "vivid"]);
}

#[tokio::test]
async fn non_ok_status_is_a_network_error_with_the_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = bank_for(&server).fetch_random_words(3, 5).await.unwrap_err();
    match error {
        WordBankError::Network(message) => assert!(message.contains("500"), "{message}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn catalog_request_carries_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/words"))
        .and(header("authorization", "Bearer player-token"))
        .and(query_param("minLevel", "8"))
        .and(query_param("maxLevel", "8"))
        .and(query_param("count", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "minLevel": 8,
            "maxLevel": 8,
            "count": 3,
            "words": [
                {"word": "quixotic", "level": 8, "audioUrl": "q.mp3"},
                {
                    "word": "ephemeral",
                    "level": 8,
                    "audioUrl": "e.mp3",
                    "example": "An ephemeral glow."
                },
                {"word": "sesquipedalian", "level": 8}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let words = bank_for(&server)
        .fetch_hard_words_with_details(2, Some("player-token"), 8)
        .await
        .unwrap();
    let names: Vec<_> = words.iter().map(|word| word.word.as_str()).collect();
    assert_eq!(names, vec!["quixotic", "ephemeral"]);
}

#[tokio::test]
async fn dictionary_lookup_and_missing_words() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/entries/en/garden"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "word": "garden",
            "phonetics": [
                {"text": "/ˈɡɑː.dən/", "audio": ""},
                {"audio": "https://audio.test/garden.mp3"}
            ],
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [
                    {"definition": "A plot of land for growing plants."},
                    {"definition": "A park.", "example": "They walked through the gardens."}
                ]
            }]
        }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/entries/en/zzzx"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"title": "No Definitions Found"})),
        )
        .mount(&server)
        .await;

    let bank = bank_for(&server);
    let garden = bank.fetch_single_word_details("garden").await.unwrap();
    assert_eq!(
        garden.audio_url.as_deref(),
        Some("https://audio.test/garden.mp3")
    );
    assert_eq!(
        garden.definition.as_deref(),
        Some("A plot of land for growing plants.")
    );
    assert_eq!(
        garden.example_sentence.as_deref(),
        Some("They walked through the gardens.")
    );

    assert!(bank.fetch_single_word_details("zzzx").await.is_none());
    assert!(matches!(
        bank.fetch_word_details("zzzx").await,
        Err(WordBankError::Network(message)) if message.contains("404")
    ));
}
