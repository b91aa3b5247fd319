use std::sync::Arc;

use notice_board::cache::MemorySessionCache;
use notice_board::latency::NoLatency;
use notice_board::models::notice::{Category, Notice, NoticeDraft, NoticeFilter, Priority};
use notice_board::seed;
use notice_board::stores::notice::NoticeStore;
use notice_board::stores::session::{AdminSeed, SessionStore};
use notice_board::validation::notice::validate_notice_form;
use notice_board::AppError;

fn session_store() -> Arc<SessionStore> {
    Arc::new(SessionStore::new(
        AdminSeed {
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            secret: "admin123".to_string(),
        },
        Arc::new(MemorySessionCache::new()),
        Arc::new(NoLatency),
    ))
}

async fn authenticated_board(seeded: Vec<Notice>) -> (Arc<SessionStore>, NoticeStore) {
    let session = session_store();
    assert!(session.login("admin@example.com", "admin123").await);
    let store = NoticeStore::new(seeded, session.clone(), Arc::new(NoLatency));
    (session, store)
}

fn draft(title: &str, content: &str, category: Category) -> NoticeDraft {
    NoticeDraft {
        title: title.to_string(),
        content: content.to_string(),
        category,
        priority: Priority::Medium,
        expires_at: None,
    }
}

#[tokio::test]
async fn create_stamps_author_and_timestamps() {
    let (session, store) = authenticated_board(vec![]).await;

    let created = store
        .create(draft(
            "Campus parking changes",
            "Lot B will be closed for resurfacing during the first week of term.",
            Category::General,
        ))
        .await
        .expect("create succeeds");

    let fetched = store.get_by_id(created.id).expect("notice retrievable");
    let current = session.current_user().expect("session user");
    assert_eq!(fetched.author.id, current.id);
    assert_eq!(fetched.author.name, current.name);
    assert_eq!(fetched.created_at, fetched.updated_at);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_without_session_is_unauthorized() {
    let session = session_store();
    let store = NoticeStore::new(vec![], session, Arc::new(NoLatency));

    let result = store
        .create(draft(
            "Orphan notice",
            "This write should be rejected before touching the collection.",
            Category::General,
        ))
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized)));
    assert!(store.snapshot().notices.is_empty());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn update_replaces_fields_and_preserves_identity() {
    let (_, store) = authenticated_board(vec![]).await;
    let created = store
        .create(draft(
            "Cafeteria menu update",
            "The cafeteria introduces a new vegetarian menu starting next Monday.",
            Category::General,
        ))
        .await
        .expect("create succeeds");

    let updated = store
        .update(
            created.id,
            NoticeDraft {
                title: "Cafeteria menu update (revised)".to_string(),
                content: "The new vegetarian menu now starts the Monday after next instead."
                    .to_string(),
                category: Category::Urgent,
                priority: Priority::High,
                expires_at: None,
            },
        )
        .await
        .expect("notice exists");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.author, created.author);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= updated.created_at);
    assert_eq!(updated.title, "Cafeteria menu update (revised)");
    assert_eq!(updated.category, Category::Urgent);
    assert_eq!(updated.priority, Priority::High);
}

#[tokio::test]
async fn update_unknown_id_leaves_collection_unchanged() {
    let (_, store) = authenticated_board(seed::demo_notices()).await;
    let before = store.snapshot().notices;

    assert!(store.update(9999, draft("x", "y", Category::General)).await.is_none());

    assert_eq!(store.snapshot().notices, before);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (_, store) = authenticated_board(vec![]).await;
    let created = store
        .create(draft(
            "Old sports fixture",
            "This announcement is obsolete and scheduled for removal shortly.",
            Category::Event,
        ))
        .await
        .expect("create succeeds");
    assert_eq!(store.stats().total, 1);

    assert!(store.delete(created.id).await);
    assert_eq!(store.stats().total, 0);

    assert!(!store.delete(created.id).await);
    assert_eq!(store.stats().total, 0);
}

#[tokio::test]
async fn list_filters_by_search_category_and_priority() {
    let (_, store) = authenticated_board(vec![]).await;
    store
        .create(draft(
            "Exam Schedule",
            "The end of semester examination timetable has been published online.",
            Category::Academic,
        ))
        .await
        .expect("create succeeds");
    store
        .create(NoticeDraft {
            title: "Fest".to_string(),
            content: "The annual festival takes place on the main lawn this weekend.".to_string(),
            category: Category::Event,
            priority: Priority::High,
            expires_at: None,
        })
        .await
        .expect("create succeeds");

    let hits = store.list(&NoticeFilter {
        search: "exam".to_string(),
        ..NoticeFilter::default()
    });
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Exam Schedule");

    let hits = store.list(&NoticeFilter {
        category: Some(Category::Event),
        ..NoticeFilter::default()
    });
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Fest");

    let hits = store.list(&NoticeFilter {
        priority: Some(Priority::High),
        ..NoticeFilter::default()
    });
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Fest");

    assert!(store
        .list(&NoticeFilter {
            search: "zzz".to_string(),
            ..NoticeFilter::default()
        })
        .is_empty());

    // An empty filter matches everything, newest first.
    let all = store.list(&NoticeFilter::default());
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "Fest");
}

#[tokio::test]
async fn search_matches_content_case_insensitively() {
    let (_, store) = authenticated_board(vec![]).await;
    store
        .create(draft(
            "General reminder",
            "Please return all borrowed LIBRARY books before the holidays.",
            Category::General,
        ))
        .await
        .expect("create succeeds");

    let hits = store.list(&NoticeFilter {
        search: "library".to_string(),
        ..NoticeFilter::default()
    });
    assert_eq!(hits.len(), 1);
}

#[tokio::test]
async fn stats_reflect_the_seeded_collection() {
    let (_, store) = authenticated_board(seed::demo_notices()).await;

    let stats = store.stats();
    assert_eq!(stats.total, 4);
    // Two of the four are urgent-category or high-priority.
    assert_eq!(stats.urgent, 2);
    assert_eq!(stats.this_week, 4);
    assert_eq!(stats.authors, 1);
}

#[tokio::test]
async fn stats_count_distinct_authors() {
    let session = session_store();
    assert!(session.register("Jane Doe", "jane@example.com", "Secret123").await);
    let store = NoticeStore::new(seed::demo_notices(), session.clone(), Arc::new(NoLatency));

    // Jane authors a fifth notice next to the four seeded admin ones.
    store
        .create(draft(
            "Study group forming",
            "A weekly study group for first-year students is forming in room 204.",
            Category::Academic,
        ))
        .await
        .expect("create succeeds");

    assert_eq!(store.stats().authors, 2);
    assert_eq!(store.stats().total, 5);
}

#[tokio::test]
async fn new_notices_are_prepended_with_increasing_ids() {
    let (_, store) = authenticated_board(seed::demo_notices()).await;

    let first = store
        .create(draft(
            "First fresh notice",
            "The earlier of the two notices created by this test case.",
            Category::General,
        ))
        .await
        .expect("create succeeds");
    let second = store
        .create(draft(
            "Second fresh notice",
            "The later of the two notices created by this test case.",
            Category::General,
        ))
        .await
        .expect("create succeeds");

    assert!(second.id > first.id);
    let notices = store.snapshot().notices;
    assert_eq!(notices[0].id, second.id);
    assert_eq!(notices[1].id, first.id);
}

#[tokio::test]
async fn subscribers_observe_collection_changes() {
    let (_, store) = authenticated_board(vec![]).await;
    let mut rx = store.subscribe();

    store
        .create(draft(
            "Subscriber smoke test",
            "Confirms that mutations are broadcast to watch subscribers.",
            Category::General,
        ))
        .await
        .expect("create succeeds");

    assert!(rx.has_changed().expect("sender alive"));
    let snapshot = rx.borrow_and_update();
    assert_eq!(snapshot.notices.len(), 1);
    assert!(!snapshot.is_loading);
}

#[test]
fn seeded_fixtures_satisfy_form_validation() {
    for notice in seed::demo_notices() {
        let errors = validate_notice_form(&NoticeDraft {
            title: notice.title.clone(),
            content: notice.content.clone(),
            category: notice.category,
            priority: notice.priority,
            expires_at: notice.expires_at,
        });
        assert!(errors.is_empty(), "seed notice {} invalid", notice.id);
    }
}
