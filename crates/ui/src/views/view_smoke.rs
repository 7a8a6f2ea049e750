use super::test_harness::{
    ViewKind, setup_full_app_harness, setup_view_harness,
};

#[tokio::test(flavor = "current_thread")]
async fn prompt_view_smoke_renders_headline_and_examples() {
    let mut harness = setup_view_harness(ViewKind::Prompt);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Planforge"), "missing headline in {html}");
    assert!(
        html.contains("Describe your product idea in detail..."),
        "missing prompt placeholder in {html}"
    );
    assert!(
        html.contains("task management app with real-time collaboration"),
        "missing example idea in {html}"
    );
    assert!(html.contains("Generate Design"), "missing CTA in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn planning_view_smoke_renders_collapsed_sections() {
    let mut harness = setup_view_harness(ViewKind::Planning);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Project Planning"), "missing title in {html}");
    assert!(
        html.contains("Feasibility Analysis"),
        "missing section in {html}"
    );
    // Sections start collapsed: titles render, bodies do not.
    assert!(
        !html.contains("Technical and business feasibility assessment"),
        "section body should be collapsed in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn requirements_view_smoke_renders_seed_message() {
    let mut harness = setup_view_harness(ViewKind::Requirements);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("What specific features do you need?"),
        "missing seed message in {html}"
    );
    assert!(
        html.contains("Proceed to System Design"),
        "missing next CTA in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn overview_view_smoke_reveals_cards_then_arrows() {
    let mut harness = setup_view_harness(ViewKind::Overview);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("API Gateway"), "missing backend card in {html}");
    assert!(
        !html.contains("overview-card--visible"),
        "no card should be revealed before the first tick in {html}"
    );

    // Connector sets are the tail of the sequence, so waiting on them
    // covers the cards as well.
    for _ in 0..80 {
        harness.drive_async().await;
        if harness.render().matches("overview-arrow--visible").count() == 15 {
            break;
        }
    }

    let html = harness.render();
    assert_eq!(
        html.matches("overview-card--visible").count(),
        8,
        "all 8 cards should be revealed in {html}"
    );
    assert_eq!(
        html.matches("overview-arrow--visible").count(),
        15,
        "all 3 connector sets (5 lines each) should be revealed in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn evaluate_modal_smoke_completes_and_signals_once() {
    let mut harness = setup_view_harness(ViewKind::Evaluate);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("System Evaluation"), "missing title in {html}");
    assert!(
        html.contains("completions: 0"),
        "completion must not fire before the run in {html}"
    );
    assert!(
        html.contains("Response Time (Latency)"),
        "missing first metric in {html}"
    );
    assert!(html.contains("Cancel"), "missing cancel label in {html}");

    assert!(
        harness.drive_until("Evaluation Complete!").await,
        "evaluation never completed"
    );
    assert!(
        harness.drive_until("completions: 1").await,
        "completion callback never fired"
    );

    let html = harness.render();
    assert!(
        html.contains("All 20 metrics have been successfully evaluated."),
        "missing completion note in {html}"
    );
    assert!(html.contains("Close"), "missing close label in {html}");

    // Keep driving: the callback must not fire a second time.
    for _ in 0..10 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(
        html.contains("completions: 1"),
        "completion fired more than once in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_loads_then_renders_grid() {
    let mut harness = setup_view_harness(ViewKind::Results);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Loading evaluation results..."),
        "missing loader in {html}"
    );

    assert!(
        harness.drive_until("Evaluation Results").await,
        "loader never finished"
    );
    let html = harness.render();
    assert!(
        html.contains("Backend 2, Frontend 5"),
        "missing first result header in {html}"
    );
    assert!(html.contains("96.9"), "missing score in {html}");
    assert!(html.contains("Download"), "missing download action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn suggester_view_smoke_renders_a_six_card_page() {
    let mut harness = setup_view_harness(ViewKind::Suggester);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Strategic Recommendations"),
        "missing title in {html}"
    );
    assert_eq!(
        html.matches("class=\"suggestion-card\"").count(),
        6,
        "expected a six-card page in {html}"
    );
    assert!(html.contains("HIGH IMPACT"), "missing impact tag in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn full_router_smoke_renders_layout_chrome() {
    let mut harness = setup_full_app_harness();
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("theme-light"), "missing theme class in {html}");
    assert!(html.contains("theme-toggle"), "missing toggle in {html}");
    assert!(
        html.contains("All analysis on these screens is simulated"),
        "missing footer note in {html}"
    );
}
