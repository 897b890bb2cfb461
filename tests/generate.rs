//! End-to-end generation against files on disk through the production router.

use codeboard::diagram::Scene;
use codeboard::fetch::{FetchConfig, FetchError, SourceRouter};
use codeboard::{DiagramError, DrawableElement, ErrorCode, GenerateOptions, Point, generate};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/order-pipeline.ts");

fn router() -> SourceRouter {
    SourceRouter::new(&FetchConfig::default()).unwrap()
}

fn labels(elements: &[DrawableElement]) -> Vec<String> {
    elements
        .iter()
        .filter_map(|e| match e {
            DrawableElement::Text(t) => Some(t.text.clone()),
            _ => None,
        })
        .collect()
}

fn arrows(elements: &[DrawableElement]) -> Vec<&codeboard::diagram::elements::Arrow> {
    elements
        .iter()
        .filter_map(|e| match e {
            DrawableElement::Arrow(a) => Some(a),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn fixture_produces_one_box_per_export_and_one_arrow_per_reference() {
    let diagram = generate(&router(), FIXTURE, GenerateOptions::default()).await.unwrap();

    // Five exports (interface, type, class, function, const) and four
    // references: OrderBuilder -> Order, submitOrder -> Order, OrderStatus
    // and MAX_AMOUNT.
    assert_eq!(diagram.elements.len(), 2 * 5 + 4);
    // Labels wrap at 18 characters inside the 180px label box.
    assert_eq!(
        labels(&diagram.elements),
        [
            "Order (interface)",
            "OrderStatus (type)",
            "OrderBuilder\n(class)",
            "submitOrder\n(function)",
            "MAX_AMOUNT\n(variable)",
        ]
    );
}

#[tokio::test]
async fn fixture_lays_out_on_three_columns() {
    let diagram = generate(&router(), FIXTURE, GenerateOptions::default()).await.unwrap();
    let rects: Vec<(f64, f64)> = diagram
        .elements
        .iter()
        .filter_map(|e| match e {
            DrawableElement::Rectangle(r) => Some((r.x, r.y)),
            _ => None,
        })
        .collect();

    assert_eq!(rects, [(-300.0, 0.0), (-20.0, 0.0), (260.0, 0.0), (-300.0, 210.0), (-20.0, 210.0)]);
}

#[tokio::test]
async fn fixture_arrows_leave_from_source_centers() {
    let diagram = generate(&router(), FIXTURE, GenerateOptions::default()).await.unwrap();
    let arrows = arrows(&diagram.elements);

    assert_eq!(arrows.len(), 4);
    // OrderBuilder (col 2, row 0) -> Order (col 0, row 0).
    assert_eq!((arrows[0].x, arrows[0].y), (360.0, 45.0));
    assert_eq!(arrows[0].points[1], [-560.0, 0.0]);
    // submitOrder (col 0, row 1) -> MAX_AMOUNT (col 1, row 1).
    assert_eq!((arrows[3].x, arrows[3].y), (-200.0, 255.0));
    assert_eq!(arrows[3].points[1], [280.0, 0.0]);
}

#[tokio::test]
async fn missing_file_is_a_fetch_failure() {
    let missing = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/does-not-exist.ts");
    let err = generate(&router(), missing, GenerateOptions::default()).await.unwrap_err();

    assert!(matches!(err, DiagramError::FetchFailure(FetchError::Io { .. })));
    assert_eq!(err.error_code(), "E_FETCH_FAILURE");
    assert!(err.to_string().starts_with("unable to load TypeScript file: "));
}

#[tokio::test]
async fn generated_elements_merge_into_an_existing_scene() {
    let options = GenerateOptions { origin: Point::new(0.0, 600.0) };
    let diagram = generate(&router(), FIXTURE, options).await.unwrap();
    let existing = r#"{"type":"excalidraw","version":2,"elements":[{"id":"note","type":"text"}],"appState":{}}"#;
    let mut scene = Scene::from_json(existing).unwrap();

    let added = scene.append(&diagram.elements).unwrap();

    assert_eq!(added, 14);
    assert_eq!(scene.elements[0]["id"], "note");
    assert_eq!(scene.elements[1]["y"], 600.0);
}
