//! Line commands typed at the terminal, translated into dispatcher actions.

use crate::app::{Action, AppState, CallField, OfferField, View};

pub const HELP: &str = "\
casino | calls | admin        switch view
call <slot> | <name>          request a slot
click <n>                     open offer n
refresh                       reload offers and calls
login <password> | logout     admin session
delete <i>                    (admin) remove call i
move <from> <to>              (admin) move a call
reset                         (admin) clear all calls
set <field> <value>           (admin) fill the offer form
edit <n> | save | remove <n>  (admin) edit, save or delete offers
analytics | logs              (admin) reload stats
ok                            dismiss the current notice
help | quit";

/// What a typed line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Actions(Vec<Action>),
    Help,
    Quit,
}

/// Parse one input line. Offer numbers refer to the order shown in the casino view.
pub fn parse(line: &str, state: &AppState) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let actions = match word {
        "" => Vec::new(),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "casino" | "calls" | "admin" => {
            vec![Action::Navigate(View::from_str(word).unwrap_or_default())]
        }
        "refresh" => vec![Action::RefreshOffers, Action::RefreshCalls],
        "login" => vec![
            Action::ShowLogin(true),
            Action::SetLoginPassword(rest.to_string()),
            Action::Login,
        ],
        "logout" => vec![Action::Logout],
        "call" => {
            let (slot, user) = rest
                .split_once('|')
                .ok_or("usage: call <slot> | <name>")?;
            vec![
                Action::EditCallForm(CallField::Slot, slot.trim().to_string()),
                Action::EditCallForm(CallField::User, user.trim().to_string()),
                Action::SubmitCall,
            ]
        }
        "click" => vec![Action::ClickOffer(offer_id(rest, state)?)],
        "delete" => vec![Action::DeleteCall(number(rest)?)],
        "move" => {
            let (from, to) = rest
                .split_once(char::is_whitespace)
                .ok_or("usage: move <from> <to>")?;
            vec![Action::MoveCall {
                from: number(from)?,
                to: number(to)?,
            }]
        }
        "reset" => vec![Action::RequestResetCalls],
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let field = OfferField::from_str(field).ok_or_else(|| {
                format!("unknown offer field {field:?} (title, bonus, description, color, logo, link, tags)")
            })?;
            vec![Action::EditOfferForm(field, value.trim().to_string())]
        }
        "edit" => vec![Action::EditOffer(offer_id(rest, state)?)],
        "save" => vec![Action::SubmitOffer],
        "remove" => vec![Action::RequestDeleteOffer(offer_id(rest, state)?)],
        "analytics" => vec![Action::LoadAnalytics],
        "logs" => vec![Action::LoadLogs],
        "ok" => vec![Action::DismissNotice],
        other => return Err(format!("unknown command {other:?}, try help")),
    };

    Ok(Command::Actions(actions))
}

/// Route one input line according to what the state is waiting for.
///
/// A pending confirmation takes the line as its answer. A pending notice blocks
/// every other command until it is acknowledged with `ok` (or an empty line).
pub fn route(line: &str, state: &AppState) -> Result<Command, String> {
    if state.pending_confirmation.is_some() {
        return Ok(Command::Actions(vec![Action::Confirm(is_yes(line))]));
    }

    if let Some(notice) = &state.notice {
        return match line.trim() {
            "" | "ok" => Ok(Command::Actions(vec![Action::DismissNotice])),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(format!("!! {notice}\n(type ok to continue)")),
        };
    }

    parse(line, state)
}

/// Interpret the answer to a confirmation question. Anything but yes declines.
pub fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

fn number(raw: &str) -> Result<usize, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("expected a position, got {raw:?}"))
}

fn offer_id(raw: &str, state: &AppState) -> Result<String, String> {
    let index = number(raw)?;
    state
        .offers
        .get(index)
        .map(|offer| offer.id.clone())
        .ok_or_else(|| format!("no offer {index}"))
}
