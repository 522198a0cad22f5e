use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::animation::{
    scroll_fraction, Reveal, SkyFrame, FADE_END_TRANSFORM, FADE_START_TRANSFORM,
    FADE_TRANSITION, SKY_TRANSITION,
};
use crate::api;
use crate::config::DashboardConfig;
use crate::decor;
use crate::dom;
use crate::error::describe_js;
use crate::loader::{finish_load, DomSurface, RequestSequencer, CARD_FILTERS};
use crate::models::Label;

const STARS_ID: &str = "stars";
const SKY_ID: &str = "sky";
const FADE_IN_SELECTOR: &str = ".fade-in";
const VISIBLE_CLASS: &str = "visible";

/// Page-wide handles shared by every event handler.
pub struct Dashboard {
    document: Document,
    config: DashboardConfig,
    stars: Option<HtmlElement>,
    sequencer: RequestSequencer,
    surface: DomSurface,
}

impl Dashboard {
    pub fn new(document: Document, config: DashboardConfig) -> Self {
        let stars = dom::html_element(&document, STARS_ID);
        Self {
            surface: DomSurface::new(document.clone()),
            document,
            config,
            stars,
            sequencer: RequestSequencer::default(),
        }
    }

    pub fn decorate(&self) -> Result<(), JsValue> {
        let mut random = decor::browser_random;
        if let Some(stars) = &self.stars {
            decor::populate_stars(&self.document, stars, self.config.star_count, &mut random)?;
        }
        decor::populate_skyline(
            &self.document,
            self.config.back_buildings,
            self.config.front_buildings,
            &mut random,
        )
    }

    fn on_scroll(&self, window: &Window) {
        let (Some(sky), Some(stars)) = (dom::html_element(&self.document, SKY_ID), &self.stars)
        else {
            return;
        };

        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0);
        let document_height = self
            .document
            .body()
            .map_or(0.0, |body| f64::from(body.scroll_height()));

        let fraction = scroll_fraction(scroll_y, document_height, viewport);
        let frame = SkyFrame::at(fraction, self.config.night_threshold);

        let sky_style = sky.style();
        let stars_style = stars.style();
        let applied = sky_style
            .set_property("transition", SKY_TRANSITION)
            .and_then(|()| sky_style.set_property("background", frame.theme.gradient()))
            .and_then(|()| stars_style.set_property("opacity", &frame.star_opacity.to_string()));
        if let Err(error) = applied {
            log::warn!("Failed to update sky: {}", describe_js(&error));
        }
    }

    pub fn bind_scroll(self: &Rc<Self>, window: &Window) -> Result<(), JsValue> {
        let dashboard = Rc::clone(self);
        let scroll_window = window.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            dashboard.on_scroll(&scroll_window);
        });
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        callback.forget();
        Ok(())
    }

    /// Hides every `.fade-in` element not already marked visible and reveals each one the first time it
    /// crosses the visibility threshold.
    pub fn observe_fade_ins(&self) -> Result<(), JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let mut reveal = Reveal::new(target.class_list().contains(VISIBLE_CLASS));
                    if !reveal.observe(entry.is_intersecting()) {
                        continue;
                    }
                    if let Err(error) = reveal_element(&target) {
                        log::warn!("Failed to reveal element: {}", describe_js(&error));
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.config.fade_threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        callback.forget();

        let nodes = self.document.query_selector_all(FADE_IN_SELECTOR)?;
        for index in 0..nodes.length() {
            let Some(element) = nodes
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            if !Reveal::new(element.class_list().contains(VISIBLE_CLASS)).needs_observation() {
                continue;
            }
            dom::apply_style(
                &element,
                &[
                    ("opacity", "0".to_string()),
                    ("transform", FADE_START_TRANSFORM.to_string()),
                ],
            )?;
            observer.observe(&element);
        }

        Ok(())
    }

    /// Starts a load; only the most recent one is allowed to render.
    pub fn load_messages(self: &Rc<Self>, filter: Option<Label>) {
        let ticket = self.sequencer.begin();
        let dashboard = Rc::clone(self);
        spawn_local(async move {
            let result = api::fetch_messages(&dashboard.config.endpoint, filter).await;
            finish_load(
                &dashboard.sequencer,
                ticket,
                &dashboard.surface,
                &dashboard.config.login_path,
                result,
            );
        });
    }

    pub fn bind_cards(self: &Rc<Self>) -> Result<(), JsValue> {
        for (id, filter) in CARD_FILTERS {
            let Some(card) = dom::html_element(&self.document, id) else {
                continue;
            };
            let dashboard = Rc::clone(self);
            let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                dashboard.load_messages(filter);
            });
            card.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
            callback.forget();
        }
        Ok(())
    }

    fn on_ready(self: &Rc<Self>) {
        if let Err(error) = self.bind_cards() {
            log::error!("Failed to bind summary cards: {}", describe_js(&error));
        }
        self.load_messages(None);
    }

    /// Runs card wiring and the first load once the DOM is parsed.
    pub fn when_ready(self: &Rc<Self>) -> Result<(), JsValue> {
        if self.document.ready_state() != "loading" {
            self.on_ready();
            return Ok(());
        }

        let dashboard = Rc::clone(self);
        let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            dashboard.on_ready();
        });
        self.document.add_event_listener_with_callback(
            "DOMContentLoaded",
            callback.as_ref().unchecked_ref(),
        )?;
        callback.forget();
        Ok(())
    }
}

fn reveal_element(target: &web_sys::Element) -> Result<(), JsValue> {
    target.class_list().add_1(VISIBLE_CLASS)?;
    if let Some(element) = target.dyn_ref::<HtmlElement>() {
        dom::apply_style(
            element,
            &[
                ("transition", FADE_TRANSITION.to_string()),
                ("opacity", "1".to_string()),
                ("transform", FADE_END_TRANSFORM.to_string()),
            ],
        )?;
    }
    Ok(())
}
