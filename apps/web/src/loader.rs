use std::cell::Cell;

use web_sys::Document;

use crate::dom;
use crate::error::{DashboardError, Result};
use crate::models::{Label, MessagesResponse};
use crate::render;

pub const MESSAGES_LIST_ID: &str = "messagesList";

/// Summary cards and the filter each one loads.
pub const CARD_FILTERS: [(&str, Option<Label>); 3] = [
    ("card-suspicious", Some(Label::Suspicious)),
    ("card-safe", Some(Label::Safe)),
    ("card-total", None),
];

/// Where loaded messages end up.
pub trait MessageSurface {
    fn set_counter(&self, id: &str, value: &str);
    fn has_list(&self) -> bool;
    fn set_list_html(&self, html: &str);
    fn redirect(&self, path: &str);
}

pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub const fn new(document: Document) -> Self {
        Self { document }
    }
}

impl MessageSurface for DomSurface {
    fn set_counter(&self, id: &str, value: &str) {
        dom::set_text(&self.document, id, value);
    }

    fn has_list(&self) -> bool {
        self.document.get_element_by_id(MESSAGES_LIST_ID).is_some()
    }

    fn set_list_html(&self, html: &str) {
        if let Some(list) = self.document.get_element_by_id(MESSAGES_LIST_ID) {
            list.set_inner_html(html);
        }
    }

    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(error) = window.location().set_href(path) {
            log::error!(
                "Failed to navigate to {path}: {}",
                crate::error::describe_js(&error)
            );
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Orders overlapping loads so that only the newest request may render.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Cell<u64>,
}

impl RequestSequencer {
    pub fn begin(&self) -> RequestTicket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered { cards: usize },
    Stale,
    Redirected,
    Failed,
}

pub fn render_response(surface: &impl MessageSurface, response: &MessagesResponse) -> usize {
    for (id, value) in render::counter_values(&response.stats) {
        surface.set_counter(id, &value);
    }

    if !surface.has_list() {
        return 0;
    }

    surface.set_list_html(&render::messages_html(&response.messages));
    response.messages.len()
}

/// Applies a finished request, unless a newer one has started since.
///
/// Failures are logged and leave the surface untouched.
pub fn finish_load(
    sequencer: &RequestSequencer,
    ticket: RequestTicket,
    surface: &impl MessageSurface,
    login_path: &str,
    result: Result<MessagesResponse>,
) -> LoadOutcome {
    if !sequencer.is_current(ticket) {
        log::debug!("Discarding superseded message response");
        return LoadOutcome::Stale;
    }

    match result {
        Ok(response) => LoadOutcome::Rendered {
            cards: render_response(surface, &response),
        },
        Err(DashboardError::Unauthorized) => {
            log::warn!("Session is not authenticated; redirecting to {login_path}");
            surface.redirect(login_path);
            LoadOutcome::Redirected
        }
        Err(error) => {
            log::error!("Message load error: {error}");
            LoadOutcome::Failed
        }
    }
}
