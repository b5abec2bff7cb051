//! Integration tests for the shape report library
//!
//! These tests drive the public API end to end: building shapes, selecting a
//! language and rendering complete reports.

use rust_decimal_macros::dec;
use shape_report::{config::parse_shapes, generate_report, Language, ReportGenerator, Shape};

// ==================== Test Helpers ====================

/// Two squares, two circles and three triangles, interleaved
fn mixed_shapes() -> Vec<Shape> {
    vec![
        Shape::square(5),
        Shape::circle(3),
        Shape::equilateral_triangle(4),
        Shape::square(2),
        Shape::equilateral_triangle(9),
        Shape::circle(dec!(2.75)),
        Shape::equilateral_triangle(dec!(4.2)),
    ]
}

fn spanish() -> ReportGenerator {
    ReportGenerator::from_language_id(Language::SPANISH_ID)
}

fn english() -> ReportGenerator {
    ReportGenerator::from_language_id(Language::ENGLISH_ID)
}

// ==================== Empty Input ====================

#[test]
fn test_empty_list() {
    assert_eq!(spanish().generate(&[]), "<h1>Lista vacía de formas!</h1>");
    assert_eq!(english().generate(&[]), "<h1>Empty list of shapes!</h1>");
}

// ==================== Single Kind ====================

#[test]
fn test_single_square() {
    assert_eq!(
        spanish().generate(&[Shape::square(5)]),
        "<h1>Reporte de Formas</h1>1 Cuadrado | Area 25 | Perimetro 20 <br/>TOTAL:<br/>1 formas Perimetro 20 Area 25"
    );
}

#[test]
fn test_multiple_squares() {
    let shapes = vec![Shape::square(5), Shape::square(1), Shape::square(3)];

    assert_eq!(
        english().generate(&shapes),
        "<h1>Shapes report</h1>3 Squares | Area 35 | Perimeter 36 <br/>TOTAL:<br/>3 shapes Perimeter 36 Area 35"
    );
}

// ==================== Mixed Kinds ====================

#[test]
fn test_multiple_shapes_in_english() {
    assert_eq!(
        english().generate(&mixed_shapes()),
        "<h1>Shapes report</h1>2 Squares | Area 29 | Perimeter 28 <br/>2 Circles | Area 13.01 | Perimeter 18.06 <br/>3 Triangles | Area 49.64 | Perimeter 51.6 <br/>TOTAL:<br/>7 shapes Perimeter 97.66 Area 91.65"
    );
}

#[test]
fn test_multiple_shapes_in_spanish() {
    assert_eq!(
        spanish().generate(&mixed_shapes()),
        "<h1>Reporte de Formas</h1>2 Cuadrados | Area 29 | Perimetro 28 <br/>2 Círculos | Area 13,01 | Perimetro 18,06 <br/>3 Triángulos | Area 49,64 | Perimetro 51,6 <br/>TOTAL:<br/>7 formas Perimetro 97,66 Area 91,65"
    );
}

#[test]
fn test_trapezoid_calculations() {
    let trapezoid = Shape::trapezoid(4, 6, 10, 5);

    assert_eq!(trapezoid.area(), dec!(32));
    assert_eq!(trapezoid.perimeter(), dec!(26));
}

#[test]
fn test_multiple_shapes_with_trapezoid() {
    let shapes = vec![
        Shape::square(5),
        Shape::trapezoid(4, 6, 10, 5),
        Shape::circle(3),
    ];

    assert_eq!(
        spanish().generate(&shapes),
        "<h1>Reporte de Formas</h1>1 Cuadrado | Area 25 | Perimetro 20 <br/>1 Trapecio | Area 32 | Perimetro 26 <br/>1 Círculo | Area 7,07 | Perimetro 9,42 <br/>TOTAL:<br/>3 formas Perimetro 55,42 Area 64,07"
    );
}

// ==================== Language Selection ====================

#[test]
fn test_unrecognized_language_ids_use_english() {
    for id in [0, -1, 3, 1000] {
        assert_eq!(
            ReportGenerator::from_language_id(id).generate(&[Shape::square(5)]),
            english().generate(&[Shape::square(5)]),
            "language id {}",
            id
        );
    }
}

// ==================== JSON Input ====================

#[test]
fn test_report_from_json_input() {
    let json = r#"[
        {"kind": "square", "side": 5},
        {"kind": "trapezoid", "height": 4, "top": 6, "bottom": 10, "leg": 5},
        {"kind": "circle", "diameter": 3}
    ]"#;
    let shapes = parse_shapes(json).expect("valid shapes JSON");

    assert_eq!(
        generate_report(&shapes, Language::ENGLISH),
        "<h1>Shapes report</h1>1 Square | Area 25 | Perimeter 20 <br/>1 Trapezoid | Area 32 | Perimeter 26 <br/>1 Circle | Area 7.07 | Perimeter 9.42 <br/>TOTAL:<br/>3 shapes Perimeter 55.42 Area 64.07"
    );
}

// ==================== Concurrency ====================

#[test]
fn test_shared_generator_across_threads() {
    let generator = spanish();
    let expected = generator.generate(&mixed_shapes());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| generator.generate(&mixed_shapes())))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
