use chrono::{Duration, Utc};

use crate::models::notice::{Category, Notice, Priority};
use crate::models::user::Author;

/// The demo notices the board starts with, newest first.
///
/// All four are attributed to the seeded administrator (id 1).
pub fn demo_notices() -> Vec<Notice> {
    let now = Utc::now();
    let admin = Author {
        id: 1,
        name: "Admin User".to_string(),
    };

    vec![
        Notice {
            id: 4,
            title: "Library Closure Notice".to_string(),
            content: "The central library will remain closed on February 1st for maintenance \
                      work. Digital resources will continue to be accessible online."
                .to_string(),
            category: Category::Urgent,
            priority: Priority::High,
            author: admin.clone(),
            created_at: now - Duration::hours(12),
            updated_at: now - Duration::hours(12),
            expires_at: None,
        },
        Notice {
            id: 1,
            title: "Welcome to Digital Notice Board".to_string(),
            content: "This is the official digital notice board for our institution. Stay \
                      updated with the latest announcements, events, and important information."
                .to_string(),
            category: Category::General,
            priority: Priority::Medium,
            author: admin.clone(),
            created_at: now - Duration::days(1),
            updated_at: now - Duration::days(1),
            expires_at: None,
        },
        Notice {
            id: 2,
            title: "Semester Examination Schedule".to_string(),
            content: "The end semester examinations will commence from March 15, 2025. Students \
                      are advised to check the detailed schedule on the academic portal."
                .to_string(),
            category: Category::Academic,
            priority: Priority::High,
            author: admin.clone(),
            created_at: now - Duration::days(2),
            updated_at: now - Duration::days(2),
            expires_at: Some(now + Duration::days(7)),
        },
        Notice {
            id: 3,
            title: "Annual Tech Fest 2025".to_string(),
            content: "Join us for the Annual Tech Fest on April 5-7, 2025. Register now to \
                      participate in coding competitions, hackathons, and workshops."
                .to_string(),
            category: Category::Event,
            priority: Priority::Medium,
            author: admin,
            created_at: now - Duration::days(3),
            updated_at: now - Duration::days(3),
            expires_at: None,
        },
    ]
}
