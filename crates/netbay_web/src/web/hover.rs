use std::rc::Rc;

use gloo::events::EventListener;
use netbay::hover::{hover_target_selector, is_hover_target, HoverTransform};
use tracing::{debug, warn};

use super::{dom, PageContext};

pub(super) fn wire(ctx: &Rc<PageContext>, listeners: &mut Vec<EventListener>) {
    let markers = &ctx.config.hover_class_markers;
    let cards = match dom::query_all(&ctx.document, &hover_target_selector(markers)) {
        Ok(c) => c,
        Err(e) => {
            warn!("hover effects disabled: {e}");
            return;
        }
    };

    let cards: Vec<_> = cards
        .into_iter()
        .filter(|el| is_hover_target(&el.get_attribute("class").unwrap_or_default(), markers))
        .collect();
    debug!(count = cards.len(), "hover targets found");

    for card in cards {
        for (event, transform) in [
            ("mouseenter", HoverTransform::Lifted),
            ("mouseleave", HoverTransform::Rest),
        ] {
            let el = card.clone();
            listeners.push(EventListener::new(&card, event, move |_| {
                dom::set_style(&el, "transform", transform.css());
            }));
        }
    }
}
