use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notice_board::config::Config;
use notice_board::models::forms::LoginForm;
use notice_board::models::notice::{Category, NoticeDraft, NoticeFilter, Priority};
use notice_board::state::AppState;
use notice_board::validation::auth::validate_login;
use notice_board::validation::notice::validate_notice_form;

/// Walks the command surface once, standing in for the browsing/authoring
/// UI this core was built for.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing::info!("✅ Configuration loaded successfully");

    let state = AppState::new(&config);
    state.session.restore_session();

    if !state.session.is_authenticated() {
        let form = LoginForm {
            email: config.admin_email.clone(),
            password: config.admin_secret.clone(),
        };
        let errors = validate_login(&form);
        if !errors.is_empty() {
            anyhow::bail!("Seed admin credentials fail validation: {:?}", errors);
        }
        if !state.session.login(&form.email, &form.password).await {
            anyhow::bail!("Seed admin login rejected");
        }
    }

    let draft = NoticeDraft {
        title: "Board core demo run".to_string(),
        content: "This notice was created by the demo binary to exercise the \
                  command surface end to end."
            .to_string(),
        category: Category::General,
        priority: Priority::Low,
        expires_at: None,
    };
    let errors = validate_notice_form(&draft);
    if !errors.is_empty() {
        anyhow::bail!("Demo draft fails validation: {:?}", errors);
    }
    let notice = state.notices.create(draft).await?;

    let filter = NoticeFilter {
        search: "demo".to_string(),
        ..NoticeFilter::default()
    };
    let hits = state.notices.list(&filter);
    tracing::info!("🔎 {} notice(s) match search 'demo'", hits.len());

    let stats = state.notices.stats();
    tracing::info!(
        "📊 Board stats: {} total, {} urgent, {} this week, {} author(s)",
        stats.total,
        stats.urgent,
        stats.this_week,
        stats.authors
    );

    state.notices.delete(notice.id).await;
    state.session.logout();
    tracing::info!("✅ Demo walkthrough complete");

    Ok(())
}
