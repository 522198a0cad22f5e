use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::dom;

#[derive(Clone, Debug, PartialEq)]
pub struct StarStyle {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub opacity: f64,
}

impl StarStyle {
    /// Draws four samples from `random`, each expected in `[0, 1)`.
    pub fn generate(random: &mut impl FnMut() -> f64) -> Self {
        let size = random().mul_add(2.0, 1.0);
        let left = random() * 100.0;
        let top = random() * 70.0;
        let opacity = random().mul_add(0.8, 0.2);
        Self {
            size,
            left,
            top,
            opacity,
        }
    }

    pub fn properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("position", "absolute".to_string()),
            ("width", format!("{}px", self.size)),
            ("height", format!("{}px", self.size)),
            ("left", format!("{}%", self.left)),
            ("top", format!("{}%", self.top)),
            ("background", "white".to_string()),
            ("border-radius", "50%".to_string()),
            ("opacity", self.opacity.to_string()),
            ("transition", "opacity 0.5s ease".to_string()),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkylineLayer {
    Back,
    Front,
}

impl SkylineLayer {
    pub const fn container_id(self) -> &'static str {
        match self {
            Self::Back => "city-back",
            Self::Front => "city-front",
        }
    }

    const fn color(self) -> &'static str {
        match self {
            Self::Back => "#64748b",
            Self::Front => "#475569",
        }
    }

    const fn shadow(self) -> &'static str {
        match self {
            Self::Back => "0 0 10px rgba(255,255,255,0.05)",
            Self::Front => "0 0 15px rgba(0,0,0,0.3)",
        }
    }

    /// (base, spread) for width in percent and height in vh.
    const fn dimensions(self) -> ((f64, f64), (f64, f64)) {
        match self {
            Self::Back => ((5.0, 5.0), (20.0, 25.0)),
            Self::Front => ((8.0, 6.0), (10.0, 15.0)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BuildingStyle {
    pub layer: SkylineLayer,
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
}

impl BuildingStyle {
    pub fn generate(layer: SkylineLayer, random: &mut impl FnMut() -> f64) -> Self {
        let ((width_base, width_spread), (height_base, height_spread)) = layer.dimensions();
        let width = random().mul_add(width_spread, width_base);
        let height = random().mul_add(height_spread, height_base);
        let margin_left = random() * 2.0;
        Self {
            layer,
            width,
            height,
            margin_left,
        }
    }

    pub fn properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("width", format!("{}%", self.width)),
            ("height", format!("{}vh", self.height)),
            ("background", self.layer.color().to_string()),
            ("margin-left", format!("{}%", self.margin_left)),
            ("border-radius", "4px 4px 0 0".to_string()),
            ("box-shadow", self.layer.shadow().to_string()),
        ]
    }
}

pub fn browser_random() -> f64 {
    js_sys::Math::random()
}

/// Fills `container` with `count` stars.
pub fn populate_stars(
    document: &Document,
    container: &HtmlElement,
    count: usize,
    random: &mut impl FnMut() -> f64,
) -> Result<(), JsValue> {
    for _ in 0..count {
        let star = create_div(document)?;
        star.set_class_name("star");
        dom::apply_style(&star, &StarStyle::generate(random).properties())?;
        container.append_child(&star)?;
    }
    Ok(())
}

/// Rebuilds both skyline layers. Does nothing unless both containers exist.
pub fn populate_skyline(
    document: &Document,
    back_count: usize,
    front_count: usize,
    random: &mut impl FnMut() -> f64,
) -> Result<(), JsValue> {
    let (Some(back), Some(front)) = (
        dom::html_element(document, SkylineLayer::Back.container_id()),
        dom::html_element(document, SkylineLayer::Front.container_id()),
    ) else {
        return Ok(());
    };

    back.set_inner_html("");
    front.set_inner_html("");

    for (container, layer, count) in [
        (&back, SkylineLayer::Back, back_count),
        (&front, SkylineLayer::Front, front_count),
    ] {
        for _ in 0..count {
            let building = create_div(document)?;
            dom::apply_style(&building, &BuildingStyle::generate(layer, random).properties())?;
            container.append_child(&building)?;
        }
    }

    Ok(())
}

fn create_div(document: &Document) -> Result<HtmlElement, JsValue> {
    Ok(document.create_element("div")?.unchecked_into())
}
