// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in glyphs.

use understory_recipe::StyleObject;

use crate::element::{Element, Primitive};

const CHEVRON_PATH: &str = "M16.59 8.59L12 13.17 7.41 8.59 6 10l6 6 6-6z";
const CROSS_PATH: &str = "M.439,21.44a1.5,1.5,0,0,0,2.122,2.121L11.823,14.3a.25.25,0,0,1,.354,0l9.262,9.263a1.5,1.5,0,1,0,2.122-2.121L14.3,12.177a.25.25,0,0,1,0-.354l9.263-9.262A1.5,1.5,0,0,0,21.439.44L12.177,9.7a.25.25,0,0,1-.354,0L2.561.44A1.5,1.5,0,0,0,.439,2.561L9.7,11.823a.25.25,0,0,1,0,.354Z";
const CHECK_POINTS: &str =
    "5.5 11.9993304 14 3.49933039 12.5 2 5.5 8.99933039 1.5 4.9968652 0 6.49933039";
const TAG_CLOSE_PATH: &str = "M289.94 256l95-95A24 24 0 00351 127l-95 95-95-95a24 24 0 00-34 34l95 95-95 95a24 24 0 1034 34l95-95 95 95a24 24 0 0034-34z";

fn path(d: &'static str) -> Element {
    Element::new(Primitive::Path)
        .attr("fill", "currentColor")
        .attr("d", d)
}

/// Downward chevron used by the dropdown indicator.
#[must_use]
pub fn down_chevron(css: StyleObject) -> Element {
    Element::new(Primitive::Icon)
        .attr("role", "presentation")
        .attr("focusable", "false")
        .attr("aria-hidden", true)
        .css(css)
        .child(path(CHEVRON_PATH))
}

/// Cross used by the clear indicator.
#[must_use]
pub fn cross_icon(css: StyleObject) -> Element {
    Element::new(Primitive::Icon)
        .attr("focusable", "false")
        .attr("aria-hidden", true)
        .css(css)
        .child(path(CROSS_PATH))
}

/// Check mark shown next to selected options.
#[must_use]
pub fn check_icon() -> Element {
    Element::new(Primitive::Svg)
        .attr("viewBox", "0 0 14 14")
        .attr("width", "1em")
        .attr("height", "1em")
        .child(
            Element::new(Primitive::Polygon)
                .attr("fill", "currentColor")
                .attr("points", CHECK_POINTS),
        )
}

/// Small cross used by tag remove controls.
#[must_use]
pub fn tag_close_icon() -> Element {
    Element::new(Primitive::Icon)
        .attr("viewBox", "0 0 512 512")
        .css(StyleObject::new().with("verticalAlign", "inherit"))
        .child(path(TAG_CLOSE_PATH))
}
