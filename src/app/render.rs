//! Plain text dump of the current view.

use std::fmt::Write;

use super::{AppState, OfferForm, View};

/// Render the state for a terminal.
pub fn render(state: &AppState) -> String {
    let mut out = String::new();

    let admin = if state.is_admin { " [admin]" } else { "" };
    let _ = writeln!(out, "== SKRYMI / {}{} ==", state.view.as_str(), admin);

    match state.view {
        View::Casino => render_casino(state, &mut out),
        View::Calls => render_calls(state, &mut out),
        View::Admin => render_admin(state, &mut out),
    }

    if state.show_login {
        let _ = writeln!(out, "-- login: enter the admin password --");
    }
    if let Some(question) = state.pending_confirmation.as_ref().map(|c| c.question()) {
        let _ = writeln!(out, "?? {question} [y/N]");
    }
    if let Some(notice) = &state.notice {
        let _ = writeln!(out, "!! {notice}");
    }
    out
}

fn render_casino(state: &AppState, out: &mut String) {
    if state.offers.is_empty() {
        let _ = writeln!(out, "(no offers)");
    }
    for (index, offer) in state.offers.iter().enumerate() {
        let _ = writeln!(out, "{index:>2}. {} - {}", offer.title, offer.bonus);
        if !offer.description.is_empty() {
            let _ = writeln!(out, "    {}", offer.description);
        }
        if !offer.tags.is_empty() {
            let _ = writeln!(out, "    [{}]", offer.tags.join("] ["));
        }
        if state.is_admin {
            let _ = writeln!(out, "    id {} / {} clicks", offer.id, offer.clicks);
        }
    }
}

fn render_calls(state: &AppState, out: &mut String) {
    if state.calls.is_empty() {
        let _ = writeln!(out, "(no calls)");
        return;
    }
    let _ = writeln!(out, "{} call(s) in queue", state.calls.len());
    for (index, call) in state.calls.calls.iter().enumerate() {
        let _ = writeln!(out, "{index:>3}. {} ({})", call.slot, call.user);
    }
}

fn render_admin(state: &AppState, out: &mut String) {
    match &state.analytics {
        Some(analytics) => {
            let _ = writeln!(
                out,
                "{} clicks / {} calls",
                analytics.total_clicks, analytics.total_calls
            );
            for stat in &analytics.offers_stats {
                let _ = writeln!(out, "  {:<24} {:>6}", stat.title, stat.clicks);
            }
        }
        None => {
            let _ = writeln!(out, "(analytics not loaded)");
        }
    }

    if let Some(id) = &state.editing_offer {
        let _ = writeln!(out, "editing offer {id}");
    }
    let form = &state.offer_form;
    if *form != OfferForm::default() {
        let _ = writeln!(
            out,
            "offer form: {} | {} | {} | {}",
            form.title, form.bonus, form.link, form.tags
        );
    }

    for entry in &state.logs {
        let _ = writeln!(
            out,
            "  {} {} {} -> {}",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.ip,
            entry.username,
            entry.slot
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::app::Confirmation;
    use crate::models::{CallEntry, CallList};

    #[test]
    fn test_render_calls_in_order() {
        let state = AppState {
            view: View::Calls,
            calls: CallList::new(vec![
                CallEntry::new("Book of Ra", "alice"),
                CallEntry::new("Gates of Olympus", "bob"),
            ]),
            ..Default::default()
        };

        let text = render(&state);
        let ra = text.find("0. Book of Ra (alice)").unwrap();
        let olympus = text.find("1. Gates of Olympus (bob)").unwrap();
        assert!(ra < olympus);
        assert!(text.contains("2 call(s) in queue"));
    }

    #[test]
    fn test_render_empty_queue() {
        let state = AppState {
            view: View::Calls,
            ..Default::default()
        };
        assert!(render(&state).contains("(no calls)"));
    }

    #[test]
    fn test_render_prompt_and_notice() {
        let state = AppState {
            is_admin: true,
            pending_confirmation: Some(Confirmation::ResetCalls),
            notice: Some("Wrong password".to_string()),
            ..Default::default()
        };

        let text = render(&state);
        assert!(text.contains("[admin]"));
        assert!(text.contains("Clear the whole call list? [y/N]"));
        assert!(text.contains("!! Wrong password"));
    }
}
