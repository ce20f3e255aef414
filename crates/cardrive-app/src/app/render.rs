use cardrive_chat::{CarCard, ResultView, SessionSnapshot};
use cardrive_logging::safe_truncate;
use cardrive_types::{FuelFilter, Message, MessageId};
use colored::Colorize;
use std::collections::HashMap;

/// Longest description shown under a card header
const CARD_DESCRIPTION_CHARS: usize = 120;

/// Terminal rendering of a session transcript.
///
/// Tracks which messages were already printed and keeps the show more /
/// show less state of every result list it has rendered.
pub struct Transcript {
    last_seen: Option<MessageId>,
    views: HashMap<MessageId, ResultView>,
    echo_user: bool,
}

impl Transcript {
    /// `echo_user` controls whether user messages are printed; the REPL
    /// leaves them out because the prompt line already shows them.
    pub fn new(echo_user: bool) -> Self {
        Self {
            last_seen: None,
            views: HashMap::new(),
            echo_user,
        }
    }

    /// Messages appended since the previous call, rendered in order
    pub fn render_new(&mut self, snapshot: &SessionSnapshot) -> Vec<String> {
        let fresh: Vec<(usize, &Message)> = snapshot
            .messages
            .iter()
            .enumerate()
            .filter(|(_, m)| self.last_seen.map_or(true, |seen| m.id > seen))
            .collect();

        if let Some((_, last)) = fresh.last() {
            self.last_seen = Some(last.id);
        }

        // A reset replaces every message, so views of old result lists are dead
        let live: Vec<MessageId> = snapshot.messages.iter().map(|m| m.id).collect();
        self.views.retain(|id, _| live.contains(id));

        let mut rendered = Vec::with_capacity(fresh.len());
        for (index, message) in fresh {
            if message.is_user() && !self.echo_user {
                continue;
            }
            let ordinal = result_ordinal(snapshot, index);
            rendered.push(self.render_message(message, ordinal));
        }
        rendered
    }

    /// Expand or collapse the n-th result list (1-based) and render it again
    pub fn set_expanded(
        &mut self,
        snapshot: &SessionSnapshot,
        ordinal: usize,
        expanded: bool,
    ) -> Option<String> {
        let message = snapshot
            .messages
            .iter()
            .filter(|m| m.cars.is_some())
            .nth(ordinal.checked_sub(1)?)?;

        let view = self.views.entry(message.id).or_default();
        if expanded {
            view.show_more();
        } else {
            view.show_less();
        }
        Some(self.render_message(message, Some(ordinal)))
    }

    fn render_message(&mut self, message: &Message, ordinal: Option<usize>) -> String {
        let time = format!("[{}]", message.timestamp).bright_black();
        match (&message.cars, ordinal) {
            (Some(cars), Some(ordinal)) => {
                let view = *self.views.entry(message.id).or_default();
                render_results(cars, view, ordinal)
            }
            _ if message.is_user() => {
                format!("{} {} {}", time, "You:".bright_green().bold(), message.text)
            }
            _ => format!("{} {} {}", time, "🤖".bright_cyan(), message.text),
        }
    }
}

/// 1-based position of the message at `index` among result-bearing messages
fn result_ordinal(snapshot: &SessionSnapshot, index: usize) -> Option<usize> {
    snapshot.messages[index].cars.as_ref()?;
    Some(
        snapshot.messages[..=index]
            .iter()
            .filter(|m| m.cars.is_some())
            .count(),
    )
}

fn render_results(cars: &[cardrive_types::Car], view: ResultView, ordinal: usize) -> String {
    let mut lines = Vec::new();
    for (i, car) in view.visible(cars).iter().enumerate() {
        let card = CarCard::from(car);
        let mut header = format!(
            "  {}. {} · {} · {}",
            i + 1,
            card.title.bold(),
            card.year,
            card.price.bright_green()
        );
        if card.test_drive {
            header.push_str(&format!(" · {}", "test drive".bright_blue()));
        }
        lines.push(header);

        if !card.description.trim().is_empty() {
            let description = safe_truncate(card.description.trim(), CARD_DESCRIPTION_CHARS);
            lines.push(format!("     {}", description.italic()));
        }
        if !card.features.is_empty() {
            let mut tags = card.features.join(" · ");
            if let Some(more) = &card.more_features {
                tags.push_str(&format!(" · {}", more));
            }
            lines.push(format!("     {}", tags.bright_black()));
        }
    }

    if view.can_show_more(cars.len()) {
        lines.push(format!(
            "     {}",
            format!("see more ›  (/more {})", ordinal).bright_blue()
        ));
    } else if view.can_show_less(cars.len()) {
        lines.push(format!(
            "     {}",
            format!("‹ see less  (/less {})", ordinal).bright_blue()
        ));
    }
    lines.join("\n")
}

/// Row of fuel filter tags with the active one highlighted
pub fn render_filters(active: Option<FuelFilter>) -> String {
    FuelFilter::ALL
        .iter()
        .map(|filter| {
            if Some(*filter) == active {
                format!("[{}]", filter.label()).black().on_bright_green().to_string()
            } else {
                format!(" {} ", filter.label()).bright_black().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Numbered list of suggested queries
pub fn render_suggestions(suggestions: &[&str]) -> String {
    let mut lines = vec![format!("{}", "✨ Popular searches (/suggest <n>):".bright_cyan())];
    for (i, text) in suggestions.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, text));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardrive_types::{Car, GREETING_TEXT};

    fn car(id: u64, features: &[&str]) -> Car {
        Car {
            id,
            make: "Tesla".to_string(),
            model: format!("Model {}", id),
            year: 2023,
            price: 42990.0,
            mileage: 100,
            color: "red".to_string(),
            transmission: "automatic".to_string(),
            fuel_type: "electric".to_string(),
            description: String::new(),
            images: Vec::new(),
            video: None,
            features: features.iter().map(|s| s.to_string()).collect(),
            available_for_test_drive: true,
        }
    }

    fn snapshot(messages: Vec<Message>) -> SessionSnapshot {
        SessionSnapshot {
            messages,
            loading: false,
            fuel_filter: None,
            input: String::new(),
        }
    }

    fn transcript_with_results(n: usize) -> SessionSnapshot {
        let cars = (1..=n as u64).map(|id| car(id, &["autopilot"])).collect();
        snapshot(vec![
            Message::assistant(MessageId(1), GREETING_TEXT, "10:00"),
            Message::user(MessageId(2), "tesla", "10:01"),
            Message::assistant(MessageId(3), "I found 5 cars", "10:01"),
            Message::results(MessageId(4), cars, "tesla", "10:01"),
        ])
    }

    #[test]
    fn test_render_new_only_returns_unseen_messages() {
        colored::control::set_override(false);
        let mut transcript = Transcript::new(true);
        let snap = transcript_with_results(2);

        assert_eq!(transcript.render_new(&snap).len(), 4);
        assert!(transcript.render_new(&snap).is_empty());
    }

    #[test]
    fn test_repl_mode_skips_user_echo() {
        colored::control::set_override(false);
        let mut transcript = Transcript::new(false);
        let rendered = transcript.render_new(&transcript_with_results(2));

        assert_eq!(rendered.len(), 3);
        assert!(rendered.iter().all(|line| !line.contains("You:")));
    }

    #[test]
    fn test_results_collapse_and_expand() {
        colored::control::set_override(false);
        let mut transcript = Transcript::new(true);
        let snap = transcript_with_results(5);

        let rendered = transcript.render_new(&snap);
        let results = rendered.last().unwrap();
        assert!(results.contains("3. Tesla Model 3"));
        assert!(!results.contains("4. Tesla Model 4"));
        assert!(results.contains("see more"));
        assert!(results.contains("/more 1"));

        let expanded = transcript.set_expanded(&snap, 1, true).unwrap();
        assert!(expanded.contains("5. Tesla Model 5"));
        assert!(expanded.contains("see less"));

        let collapsed = transcript.set_expanded(&snap, 1, false).unwrap();
        assert!(!collapsed.contains("4. Tesla Model 4"));
    }

    #[test]
    fn test_set_expanded_unknown_ordinal() {
        let mut transcript = Transcript::new(true);
        let snap = transcript_with_results(5);

        assert!(transcript.set_expanded(&snap, 0, true).is_none());
        assert!(transcript.set_expanded(&snap, 2, true).is_none());
    }

    #[test]
    fn test_card_shows_price_and_extra_features() {
        colored::control::set_override(false);
        let rendered = render_results(
            &[car(1, &["a", "b", "c", "d", "e"])],
            ResultView::new(),
            1,
        );

        assert!(rendered.contains("$42,990"));
        assert!(rendered.contains("+1 more"));
        assert!(!rendered.contains("see more"));
    }

    #[test]
    fn test_card_shows_description() {
        colored::control::set_override(false);
        let mut described = car(1, &[]);
        described.description = "Single owner, full service history".to_string();
        let mut long = car(2, &[]);
        long.description = "x".repeat(300);

        let rendered = render_results(&[described, long, car(3, &[])], ResultView::new(), 1);

        assert!(rendered.contains("Single owner, full service history"));
        assert!(rendered.contains(&format!("{}...", "x".repeat(117))));
        assert!(!rendered.contains(&"x".repeat(118)));
    }

    #[test]
    fn test_render_filters_marks_active() {
        colored::control::set_override(false);
        let row = render_filters(Some(FuelFilter::Diesel));
        assert!(row.contains("[Diesel]"));
        assert!(row.contains(" Electric "));
    }
}
