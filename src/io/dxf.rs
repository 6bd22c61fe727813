use crate::cam::HypocycloidCam;
use crate::float_types::Real;
use crate::io::{
    IoError, LAYER_CAM, LAYER_GUIDE, LAYER_PINS, LAYER_PRESSURE, LAYER_TEXT, LAYERS,
    check_circle_segments,
};
use nalgebra::Point2;

use dxf::{Drawing, LwPolylineVertex};
use dxf::entities::*;
use dxf::enums::AcadVersion;
use dxf::tables::Layer;

/// Relative height of property text, as a fraction of the bolt circle.
const TEXT_HEIGHT_RATIO: Real = 0.04;

impl HypocycloidCam {
    #[doc = " Export the cam, limit circles and pins to DXF."]
    #[doc = ""]
    #[doc = " Each part lands on its own layer: the profile as a closed LWPOLYLINE on"]
    #[doc = " `Hypocycloid_Cam`, limit circles on `Hypocycloid_Pressure`, one circle per"]
    #[doc = " distinct pin on `Hypocycloid_Pins`, center points on `Hypocycloid_Guide`"]
    #[doc = " and the property list as text on `Hypocycloid_Text`."]
    #[doc = ""]
    #[doc = " # Returns"]
    #[doc = " A `Result` containing the DXF file as a byte vector or an error if exporting fails."]
    #[allow(clippy::unnecessary_cast)]
    pub fn to_dxf(&self) -> Result<Vec<u8>, IoError> {
        check_circle_segments(self.params.circle_segments)?;

        let mut drawing = Drawing::new();
        // LWPOLYLINE needs R14 or later
        drawing.header.version = AcadVersion::R2000;
        for name in LAYERS {
            let mut layer = Layer::default();
            layer.name = name.to_string();
            drawing.add_layer(layer);
        }

        let radius = self.params.pin_diameter / 2.0;
        let center = self.cam_center();

        // Pressure group
        add_guide_point(&mut drawing, center);
        if let (Some(min), Some(max)) = (self.limits().pa_rad_min, self.limits().pa_rad_max) {
            add_circle(&mut drawing, LAYER_PRESSURE, center, min);
            add_circle(&mut drawing, LAYER_PRESSURE, center, max);
        }

        // Cam group
        add_guide_point(&mut drawing, center);
        let mut outline = LwPolyline::default();
        let closing = usize::from(self.profile.is_closed());
        for point in &self.profile.points[..self.profile.len() - closing] {
            let mut vertex = LwPolylineVertex::default();
            vertex.x = point.x as f64;
            vertex.y = point.y as f64;
            outline.vertices.push(vertex);
        }
        outline.set_is_closed(closing == 1);
        add_on_layer(&mut drawing, LAYER_CAM, EntityType::LwPolyline(outline));
        add_circle(&mut drawing, LAYER_CAM, center, radius);

        // Pins group
        add_guide_point(&mut drawing, Point2::origin());
        for &pin in self.pins.distinct() {
            add_guide_point(&mut drawing, pin);
            add_circle(&mut drawing, LAYER_PINS, pin, radius);
        }
        add_circle(&mut drawing, LAYER_PINS, Point2::origin(), radius);

        // Properties, stacked below the pin circle
        let height = self.params.bolt_circle() * TEXT_HEIGHT_RATIO;
        let top = -(self.params.bolt_circle() + radius) - height;
        for (row, (key, value)) in self.properties().into_iter().enumerate() {
            let mut text = Text::default();
            text.location = dxf::Point::new(
                -self.params.bolt_circle() as f64,
                (top - row as Real * height * 1.5) as f64,
                0.0,
            );
            text.text_height = height as f64;
            text.value = format!("{key}: {value}");
            add_on_layer(&mut drawing, LAYER_TEXT, EntityType::Text(text));
        }

        let mut buffer = Vec::new();
        drawing.save(&mut buffer)?;
        Ok(buffer)
    }
}

fn add_on_layer(drawing: &mut Drawing, layer: &str, specific: EntityType) {
    let mut entity = Entity::new(specific);
    entity.common.layer = layer.to_string();
    drawing.add_entity(entity);
}

#[allow(clippy::unnecessary_cast)]
fn add_circle(drawing: &mut Drawing, layer: &str, center: Point2<Real>, radius: Real) {
    let mut circle = Circle::default();
    circle.center = dxf::Point::new(center.x as f64, center.y as f64, 0.0);
    circle.radius = radius as f64;
    add_on_layer(drawing, layer, EntityType::Circle(circle));
}

#[allow(clippy::unnecessary_cast)]
fn add_guide_point(drawing: &mut Drawing, at: Point2<Real>) {
    let mut point = ModelPoint::default();
    point.location = dxf::Point::new(at.x as f64, at.y as f64, 0.0);
    add_on_layer(drawing, LAYER_GUIDE, EntityType::ModelPoint(point));
}
