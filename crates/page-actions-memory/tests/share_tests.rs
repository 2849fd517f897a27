//! Share fallback chain tests over the in-memory host page.
//!
//! Covers: native share success and dismissal, the clipboard path with its
//! blocking acknowledgement, and the manual-copy prompt fallback.

use std::sync::Arc;

use page_actions::{PageActions, PageActionsOptions, ShareOutcome};
use page_actions_memory::{ClipboardBehavior, MemoryHostPage, ShareBehavior};

fn actions_over(host: &MemoryHostPage) -> PageActions {
    PageActions::new(Arc::new(host.clone()))
}

// ── Native share path ───────────────────────────────────────────

#[tokio::test]
async fn share_success_triggers_no_fallback() {
    let host = MemoryHostPage::new()
        .with_share_sheet(ShareBehavior::Resolve)
        .with_clipboard(ClipboardBehavior::Succeed);
    let actions = actions_over(&host);

    let outcome = actions
        .share_or_copy_link("https://example.com/a", "Article A")
        .await;

    assert_eq!(outcome, ShareOutcome::Shared);
    assert!(host.clipboard_writes().is_empty());
    assert!(host.alerts().is_empty());
    assert!(host.prompts().is_empty());
}

#[tokio::test]
async fn share_passes_url_and_title_through() {
    let host = MemoryHostPage::new().with_share_sheet(ShareBehavior::Resolve);
    let actions = actions_over(&host);

    actions
        .share_or_copy_link("https://example.com/a?id=1&lang=ko", "Article A")
        .await;

    let shares = host.shares();
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].url, "https://example.com/a?id=1&lang=ko");
    assert_eq!(shares[0].title, "Article A");
}

#[tokio::test]
async fn share_dismissal_is_terminal() {
    // A clipboard is available, but a dismissed share sheet must not
    // escalate to it.
    let host = MemoryHostPage::new()
        .with_share_sheet(ShareBehavior::Dismiss)
        .with_clipboard(ClipboardBehavior::Succeed);
    let actions = actions_over(&host);

    let outcome = actions
        .share_or_copy_link("https://example.com/a", "Article A")
        .await;

    assert_eq!(outcome, ShareOutcome::ShareDismissed);
    assert!(host.clipboard_writes().is_empty());
    assert!(host.alerts().is_empty());
    assert!(host.prompts().is_empty());
}

// ── Clipboard path ──────────────────────────────────────────────

#[tokio::test]
async fn clipboard_copy_acknowledges_with_url() {
    let host = MemoryHostPage::new().with_clipboard(ClipboardBehavior::Succeed);
    let actions = actions_over(&host);

    let outcome = actions
        .share_or_copy_link("https://example.com/a", "Article A")
        .await;

    assert_eq!(outcome, ShareOutcome::Copied);
    assert_eq!(host.clipboard_writes(), vec!["https://example.com/a".to_string()]);

    let alerts = host.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("https://example.com/a"));
    assert!(host.prompts().is_empty());
}

#[tokio::test]
async fn clipboard_failure_falls_back_to_prompt() {
    let host = MemoryHostPage::new().with_clipboard(ClipboardBehavior::Fail);
    let actions = actions_over(&host);

    let outcome = actions
        .share_or_copy_link("https://example.com/a", "Article A")
        .await;

    assert_eq!(outcome, ShareOutcome::PromptShown);
    assert!(host.alerts().is_empty());

    let prompts = host.prompts();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].1, "https://example.com/a");
}

#[tokio::test]
async fn no_capabilities_goes_straight_to_prompt() {
    let host = MemoryHostPage::new();
    let actions = actions_over(&host);

    let outcome = actions
        .share_or_copy_link("https://example.com/a", "Article A")
        .await;

    assert_eq!(outcome, ShareOutcome::PromptShown);
    assert!(host.clipboard_writes().is_empty());
    assert!(host.alerts().is_empty());
    assert_eq!(host.prompts().len(), 1);
}

// ── Options ─────────────────────────────────────────────────────

#[tokio::test]
async fn custom_messages_are_used() {
    let host = MemoryHostPage::new().with_clipboard(ClipboardBehavior::Succeed);
    let actions = PageActions::with_options(
        Arc::new(host.clone()),
        PageActionsOptions {
            copied_notice: "Copied!".into(),
            ..Default::default()
        },
    );

    actions
        .share_or_copy_link("https://example.com/a", "Article A")
        .await;

    let alerts = host.alerts();
    assert!(alerts[0].starts_with("Copied!"));
    assert!(alerts[0].ends_with("https://example.com/a"));
}

#[test]
fn options_round_trip() {
    let host = MemoryHostPage::new();
    let actions = PageActions::with_options(
        Arc::new(host),
        PageActionsOptions {
            copied_notice: "Copied!".into(),
            legacy_navigation_fallback: false,
            ..Default::default()
        },
    );

    assert_eq!(actions.options().copied_notice, "Copied!");
    assert!(!actions.options().legacy_navigation_fallback);
    assert_eq!(actions.options().manual_copy_prompt, "Copy this link:");
}

#[tokio::test]
async fn custom_prompt_message_is_used() {
    let host = MemoryHostPage::new();
    let actions = PageActions::with_options(
        Arc::new(host.clone()),
        PageActionsOptions {
            manual_copy_prompt: "Grab this:".into(),
            ..Default::default()
        },
    );

    actions
        .share_or_copy_link("https://example.com/a", "Article A")
        .await;

    let prompts = host.prompts();
    assert_eq!(prompts[0].0, "Grab this:");
    assert_eq!(prompts[0].1, "https://example.com/a");
}
