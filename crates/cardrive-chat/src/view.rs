//! Presentation helpers for result messages.
//!
//! Nothing here touches session state: a [`ResultView`] lives with whatever
//! renders a result message and is dropped with it.

use cardrive_types::{Car, RESULT_DISPLAY_CAP};

/// Number of feature tags shown on a card before collapsing the rest
pub const CARD_FEATURE_LIMIT: usize = 4;

/// Show more / show less state of one result list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultView {
    expanded: bool,
}

impl ResultView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cars to display given the current state
    pub fn visible<'a>(&self, cars: &'a [Car]) -> &'a [Car] {
        if self.expanded {
            cars
        } else {
            &cars[..cars.len().min(RESULT_DISPLAY_CAP)]
        }
    }

    /// Whether a "see more" affordance should be offered
    pub fn can_show_more(&self, total: usize) -> bool {
        total > RESULT_DISPLAY_CAP && !self.expanded
    }

    /// Whether a "see less" affordance should be offered
    pub fn can_show_less(&self, total: usize) -> bool {
        total > RESULT_DISPLAY_CAP && self.expanded
    }

    pub fn show_more(&mut self) {
        self.expanded = true;
    }

    pub fn show_less(&mut self) {
        self.expanded = false;
    }
}

/// Text rendering of one car for the result list
#[derive(Debug, Clone, PartialEq)]
pub struct CarCard {
    pub title: String,
    pub year: u32,
    pub price: String,
    pub features: Vec<String>,
    /// "+N more" when the car has more tags than fit on the card
    pub more_features: Option<String>,
    pub description: String,
    pub test_drive: bool,
}

impl From<&Car> for CarCard {
    fn from(car: &Car) -> Self {
        let features = car
            .features
            .iter()
            .take(CARD_FEATURE_LIMIT)
            .cloned()
            .collect();
        let hidden = car.features.len().saturating_sub(CARD_FEATURE_LIMIT);
        Self {
            title: car.title(),
            year: car.year,
            price: format_price(car.price),
            features,
            more_features: (hidden > 0).then(|| format!("+{} more", hidden)),
            description: car.description.clone(),
            test_drive: car.available_for_test_drive,
        }
    }
}

/// Dollar amount with thousands separators, e.g. `$42,990` or `$9,999.5`
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    match cents % 100 {
        0 => format!("{}${}", sign, whole),
        c if c % 10 == 0 => format!("{}${}.{}", sign, whole, c / 10),
        c => format!("{}${}.{:02}", sign, whole, c),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
