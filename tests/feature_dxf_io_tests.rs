#![cfg(feature = "dxf-io")]

mod support;

use dxf::Drawing;
use dxf::entities::EntityType;
use hypocam::{HypocycloidCam, io::LAYERS};
use std::io::Cursor;

fn load(cam: &HypocycloidCam) -> Drawing {
    let bytes = cam.to_dxf().expect("DXF export");
    Drawing::load(&mut Cursor::new(bytes)).expect("DXF re-load")
}

#[test]
fn drawing_has_every_layer() {
    let cam = HypocycloidCam::generate(support::reference_params()).unwrap();
    let drawing = load(&cam);
    let names: Vec<String> = drawing.layers().map(|layer| layer.name.clone()).collect();
    for layer in LAYERS {
        assert!(names.iter().any(|n| n == layer), "missing layer {layer}");
    }
}

#[test]
fn entities_land_on_their_layers() {
    let cam = HypocycloidCam::generate(support::reference_params()).unwrap();
    let drawing = load(&cam);

    let count = |layer: &str, pred: fn(&EntityType) -> bool| {
        drawing
            .entities()
            .filter(|e| e.common.layer == layer && pred(&e.specific))
            .count()
    };
    let is_circle = |e: &EntityType| matches!(e, EntityType::Circle(_));

    assert_eq!(count("Hypocycloid_Pressure", is_circle), 2);
    // cam bore
    assert_eq!(count("Hypocycloid_Cam", is_circle), 1);
    // 11 distinct pins plus the center circle
    assert_eq!(count("Hypocycloid_Pins", is_circle), 12);
    assert_eq!(count("Hypocycloid_Text", |e| matches!(e, EntityType::Text(_))), 11);

    let outline = drawing
        .entities()
        .find_map(|e| match &e.specific {
            EntityType::LwPolyline(poly) if e.common.layer == "Hypocycloid_Cam" => Some(poly),
            _ => None,
        })
        .expect("cam outline");
    assert!(outline.is_closed());
    assert_eq!(outline.vertices.len(), 1000);
}

#[test]
fn too_few_circle_segments_is_rejected() {
    let params = support::reference_params().with_circle_segments(2);
    let cam = HypocycloidCam::generate(params).unwrap();
    assert!(matches!(
        cam.to_dxf(),
        Err(hypocam::io::IoError::MalformedInput(_))
    ));
}
