//! Listing card behaviour

use std::rc::Rc;

use crate::dom::{DomEvent, EventKind, Page};
use crate::error::Result;

pub const LISTING_CARD: &str = ".listing-card";

const CARD_TITLE: &str = "h3";
const CARD_DESCRIPTION: &str = "p";

pub const BOOKING_MESSAGE: &str =
    "Booking functionality would be implemented here. For now, please contact us directly.";

/// Inline styles for a card's two hover states
struct CardStyles {
    transform: &'static str,
    box_shadow: &'static str,
}

const RAISED: CardStyles = CardStyles {
    transform: "translateY(-5px)",
    box_shadow: "0 8px 16px rgba(0,0,0,0.2)",
};

const RESTING: CardStyles = CardStyles {
    transform: "translateY(0)",
    box_shadow: "0 4px 8px rgba(0,0,0,0.1)",
};

/// Lift cards under the pointer. Returns the number of cards bound.
pub fn bind_listing_cards<P: Page>(page: &P) -> Result<usize> {
    let cards = page.query_all(LISTING_CARD)?;

    for card in &cards {
        page.listen(
            card,
            EventKind::MouseEnter,
            Rc::new(|page: &P, event: &DomEvent<P::Node>| {
                apply_styles(page, event.current_target(), &RAISED)
            }),
        )?;
        page.listen(
            card,
            EventKind::MouseLeave,
            Rc::new(|page: &P, event: &DomEvent<P::Node>| {
                apply_styles(page, event.current_target(), &RESTING)
            }),
        )?;
    }

    Ok(cards.len())
}

fn apply_styles<P: Page>(page: &P, card: &P::Node, styles: &CardStyles) -> Result<()> {
    page.set_style(card, "transform", styles.transform)?;
    page.set_style(card, "box-shadow", styles.box_shadow)
}

/// Show only the cards whose title or description contains `term`,
/// ignoring case. Returns the number of cards left visible.
///
/// Every card must have an `h3` title and a `p` description.
pub fn filter_listings<P: Page>(page: &P, term: &str) -> Result<usize> {
    let needle = term.to_lowercase();
    let mut visible = 0;

    for card in page.query_all(LISTING_CARD)? {
        let title = page.require_within(&card, CARD_TITLE)?;
        let description = page.require_within(&card, CARD_DESCRIPTION)?;

        let matches = page.text_content(&title).to_lowercase().contains(&needle)
            || page.text_content(&description).to_lowercase().contains(&needle);

        if matches {
            visible += 1;
            page.set_style(&card, "display", "block")?;
        } else {
            page.set_style(&card, "display", "none")?;
        }
    }

    Ok(visible)
}

/// Placeholder for booking until the site takes reservations.
pub fn book_property<P: Page>(page: &P) {
    page.alert(BOOKING_MESSAGE);
}
