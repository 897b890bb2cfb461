//! End-to-end tests for extraction through assembly.

use super::elements::DrawableElement;
use super::{Point, extract, render_to_elements};

const TWO_FUNCTIONS: &str = r"
export function A() { return B(); }
export function B() {}
";

fn kinds(elements: &[DrawableElement]) -> Vec<&'static str> {
    elements
        .iter()
        .map(|e| match e {
            DrawableElement::Rectangle(_) => "rect",
            DrawableElement::Text(_) => "text",
            DrawableElement::Arrow(_) => "arrow",
        })
        .collect()
}

#[test]
fn two_functions_render_as_two_boxes_and_one_arrow() {
    let symbols = extract("mod.ts", TWO_FUNCTIONS).unwrap();
    let elements = render_to_elements(&symbols, Point::ORIGIN);

    assert_eq!(kinds(&elements), ["rect", "text", "rect", "text", "arrow"]);

    let DrawableElement::Rectangle(a) = &elements[0] else { panic!("expected rectangle") };
    let DrawableElement::Rectangle(b) = &elements[2] else { panic!("expected rectangle") };
    assert_eq!((a.x, a.y), (-200.0, 0.0));
    assert_eq!((b.x, b.y), (80.0, 0.0));

    let DrawableElement::Text(label) = &elements[3] else { panic!("expected text") };
    assert_eq!(label.text, "B (function)");

    let DrawableElement::Arrow(arrow) = &elements[4] else { panic!("expected arrow") };
    assert_eq!((arrow.x, arrow.y), (-100.0, 45.0));
    assert_eq!(arrow.points, vec![[0.0, 0.0], [280.0, 0.0]]);
}

#[test]
fn origin_moves_the_whole_diagram() {
    let symbols = extract("mod.ts", TWO_FUNCTIONS).unwrap();
    let elements = render_to_elements(&symbols, Point::new(1000.0, 500.0));

    let DrawableElement::Rectangle(a) = &elements[0] else { panic!("expected rectangle") };
    assert_eq!((a.x, a.y), (800.0, 500.0));
    let DrawableElement::Arrow(arrow) = &elements[4] else { panic!("expected arrow") };
    assert_eq!((arrow.x, arrow.y), (900.0, 545.0));
    assert_eq!(arrow.points[1], [280.0, 0.0]);
}

#[test]
fn unrelated_exports_have_no_arrows() {
    let source = r"
export type Id = string;
export interface Point { x: number; y: number }
export const ZERO = 0;
";
    let symbols = extract("shapes.ts", source).unwrap();
    let elements = render_to_elements(&symbols, Point::ORIGIN);
    assert_eq!(kinds(&elements), ["rect", "text", "rect", "text", "rect", "text"]);
}

#[test]
fn empty_symbol_list_renders_nothing() {
    assert!(render_to_elements(&[], Point::ORIGIN).is_empty());
}

#[test]
fn rendering_twice_is_identical() {
    let symbols = extract("mod.ts", TWO_FUNCTIONS).unwrap();
    assert_eq!(render_to_elements(&symbols, Point::ORIGIN), render_to_elements(&symbols, Point::ORIGIN));
}
