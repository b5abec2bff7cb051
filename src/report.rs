//! Report generation: group shapes by kind and render a localized summary.

use crate::i18n::Language;
use crate::shapes::{Shape, ShapeKind};
use rust_decimal::Decimal;
use std::fmt::Write;
use tracing::debug;

/// Aggregates for all shapes of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeGroup {
    pub kind: ShapeKind,
    pub count: usize,
    pub area: Decimal,
    pub perimeter: Decimal,
}

/// Partition shapes by kind.
///
/// Groups come out in the order each kind first appears in `shapes`.
pub fn group_shapes(shapes: &[Shape]) -> Vec<ShapeGroup> {
    let mut groups: Vec<ShapeGroup> = Vec::new();

    for shape in shapes {
        let kind = shape.kind();
        match groups.iter_mut().find(|group| group.kind == kind) {
            Some(group) => {
                group.count += 1;
                group.area += shape.area();
                group.perimeter += shape.perimeter();
            }
            None => groups.push(ShapeGroup {
                kind,
                count: 1,
                area: shape.area(),
                perimeter: shape.perimeter(),
            }),
        }
    }

    groups
}

/// Render the report for `shapes` in `language`.
///
/// An empty slice yields only the empty-list heading. Otherwise the result is
/// the header, one line per group and a totals line, concatenated with no
/// newlines.
///
/// # Example
/// ```
/// use shape_report::{generate_report, Language, Shape};
///
/// let report = generate_report(&[Shape::square(5)], Language::SPANISH);
/// assert_eq!(
///     report,
///     "<h1>Reporte de Formas</h1>1 Cuadrado | Area 25 | Perimetro 20 <br/>TOTAL:<br/>1 formas Perimetro 20 Area 25"
/// );
/// ```
pub fn generate_report(shapes: &[Shape], language: Language) -> String {
    if shapes.is_empty() {
        debug!("Rendering empty report ({})", language.code());
        return format!("<h1>{}</h1>", language.empty_list_message());
    }

    let groups = group_shapes(shapes);
    debug!(
        "Rendering report for {} shapes in {} groups ({})",
        shapes.len(),
        groups.len(),
        language.code()
    );

    let area_word = language.area_word();
    let perimeter_word = language.perimeter_word();

    let mut report = format!("<h1>{}</h1>", language.report_header());

    // Writing into a String cannot fail
    for group in &groups {
        let _ = write!(
            report,
            "{} {} | {} {} | {} {} <br/>",
            group.count,
            language.shape_name(group.kind, group.count),
            area_word,
            language.format_number(group.area),
            perimeter_word,
            language.format_number(group.perimeter),
        );
    }

    report.push_str("TOTAL:<br/>");

    let total_count = shapes.len();
    let total_perimeter: Decimal = shapes.iter().map(Shape::perimeter).sum();
    let total_area: Decimal = shapes.iter().map(Shape::area).sum();

    let _ = write!(
        report,
        "{} {} {} {} {} {}",
        total_count,
        language.shapes_word(total_count),
        perimeter_word,
        language.format_number(total_perimeter),
        area_word,
        language.format_number(total_area),
    );

    report
}

/// A report generator bound to one language.
///
/// Holds no state besides the language, so one generator can serve any
/// number of calls, including from several threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportGenerator {
    language: Language,
}

impl ReportGenerator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Create a generator from a numeric language id (unknown ids use English).
    pub fn from_language_id(id: i32) -> Self {
        Self::new(Language::from_id(id))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn generate(&self, shapes: &[Shape]) -> String {
        generate_report(shapes, self.language)
    }
}
