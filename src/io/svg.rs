use crate::cam::HypocycloidCam;
use crate::float_types::Real;
use crate::io::{
    IoError, LAYER_CAM, LAYER_GUIDE, LAYER_PINS, LAYER_PRESSURE, LAYER_TEXT, check_circle_segments,
};
use geo::{BoundingRect, LineString};
use nalgebra::Point2;

use svg::node::element::path::Data;
use svg::node::element::{Circle, Element, Group, Path};
use svg::{Document, Node};

/// Stroke width as a fraction of the pin diameter.
const STROKE_RATIO: Real = 0.05;

impl HypocycloidCam {
    /// Render the cam as an SVG document.
    ///
    /// Every layer becomes a `<g id="...">` group; circles are tessellated with
    /// `circle_segments`, center points are small dots on the guide layer, and
    /// the property list goes into the document's `<desc>`. The root group flips
    /// the y axis so the drawing keeps CAD orientation.
    pub fn to_svg(&self) -> Result<String, IoError> {
        check_circle_segments(self.params.circle_segments)?;

        let sketch = self.to_sketch();
        let stroke = self.params.pin_diameter * STROKE_RATIO;

        let mut pressure = layer_group(LAYER_PRESSURE, stroke);
        for ring in &sketch.pressure {
            pressure = pressure.add(ring_path(ring));
        }

        let cam = layer_group(LAYER_CAM, stroke)
            .add(ring_path(sketch.cam.exterior()))
            .add(ring_path(sketch.cam_center.exterior()));

        let mut pins = layer_group(LAYER_PINS, stroke);
        for pin in &sketch.pins {
            pins = pins.add(ring_path(pin.exterior()));
        }
        pins = pins.add(ring_path(sketch.pin_center.exterior()));

        let mut guide = Group::new().set("id", LAYER_GUIDE).set("fill", "black");
        let mut centers = vec![self.cam_center(), Point2::origin()];
        centers.extend_from_slice(self.pins.distinct());
        for center in centers {
            guide = guide.add(
                Circle::new()
                    .set("cx", center.x)
                    .set("cy", center.y)
                    .set("r", stroke),
            );
        }

        let description = self
            .properties()
            .into_iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join("\n");
        let mut text = Element::new("desc");
        text.assign("id", LAYER_TEXT);
        text.append(svg::node::Text::new(description));

        let root = Group::new()
            .set("transform", "scale(1,-1)")
            .add(pressure)
            .add(cam)
            .add(pins)
            .add(guide);

        // Everything sits inside the pin circles plus one pin radius
        let extent = match sketch.pins.bounding_rect() {
            Some(rect) => rect.max().x.abs().max(rect.min().x.abs()).max(rect.max().y.abs()),
            None => self.params.bolt_circle() + self.params.pin_diameter,
        } + stroke * 4.0;

        let document = Document::new()
            .set("viewBox", (-extent, -extent, 2.0 * extent, 2.0 * extent))
            .add(text)
            .add(root);
        Ok(document.to_string())
    }
}

fn layer_group(id: &str, stroke: Real) -> Group {
    Group::new()
        .set("id", id)
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", stroke)
}

fn ring_path(ring: &LineString<Real>) -> Path {
    let mut coords = ring.coords();
    let mut data = Data::new();
    if let Some(first) = coords.next() {
        data = data.move_to((first.x, first.y));
        for c in coords {
            data = data.line_to((c.x, c.y));
        }
        if ring.is_closed() {
            data = data.close();
        }
    }
    Path::new().set("d", data)
}
