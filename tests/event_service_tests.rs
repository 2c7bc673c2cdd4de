use eventhub::{
    services::event_service::{CreateEventRequest, EventServiceError},
    test_utils::test_helpers::{self, TEST_CREATOR_ID},
};

fn conf_request() -> CreateEventRequest {
    CreateEventRequest {
        title: "Conf".to_string(),
        description: "Tech talk".to_string(),
        price: 9.99,
        date: "2019-03-01".to_string(),
    }
}

#[tokio::test]
async fn test_list_events_empty() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let (events, _) = test_helpers::create_test_services(&pool, TEST_CREATOR_ID);

    let listed = events.list_events().await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_create_event_read_after_write() {
    let pool = test_helpers::create_test_db().await.unwrap();
    test_helpers::insert_test_user(&pool, TEST_CREATOR_ID, "creator@x.com", "pw")
        .await
        .unwrap();
    let (events, _) = test_helpers::create_test_services(&pool, TEST_CREATOR_ID);

    let created = events.create_event(conf_request()).await.unwrap();
    assert_eq!(created.title, "Conf");
    assert_eq!(created.description, "Tech talk");
    assert_eq!(created.price, 9.99);
    assert_eq!(created.formatted_date(), "2019-03-01T00:00:00.000Z");
    assert_eq!(created.creator, TEST_CREATOR_ID);

    let listed = events.list_events().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let by_creator = events.list_events_by_creator(TEST_CREATOR_ID).await.unwrap();
    assert_eq!(by_creator, vec![created.clone()]);

    let found = events.find_event_by_id(&created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn test_create_event_without_creator_is_rolled_back() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let (events, _) = test_helpers::create_test_services(&pool, "does-not-exist");

    let result = events.create_event(conf_request()).await;
    assert!(matches!(result, Err(EventServiceError::CreatorNotFound)));
    assert_eq!(result.unwrap_err().to_string(), "User not found.");

    assert_eq!(test_helpers::count_events(&pool).await.unwrap(), 0);
    assert!(events.list_events().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_events_both_recorded_on_creator() {
    let (pool, _file) = test_helpers::create_test_db_file().await.unwrap();
    test_helpers::insert_test_user(&pool, TEST_CREATOR_ID, "creator@x.com", "pw")
        .await
        .unwrap();
    let (events, _) = test_helpers::create_test_services(&pool, TEST_CREATOR_ID);

    let handles: Vec<_> = ["one", "two"]
        .into_iter()
        .map(|title| {
            let events = events.clone();
            tokio::spawn(async move {
                events
                    .create_event(CreateEventRequest {
                        title: title.to_string(),
                        ..conf_request()
                    })
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let mut titles: Vec<String> = events
        .list_events_by_creator(TEST_CREATOR_ID)
        .await
        .unwrap()
        .into_iter()
        .map(|event| event.title)
        .collect();
    titles.sort();
    assert_eq!(titles, vec!["one", "two"]);
}
