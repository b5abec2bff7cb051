/// Singular and plural forms of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plural {
    pub one: &'static str,
    pub other: &'static str,
}

impl Plural {
    /// Pick the form for `count`: exactly 1 is singular, anything else
    /// (including 0) is plural.
    pub fn select(&self, count: usize) -> &'static str {
        if count == 1 {
            self.one
        } else {
            self.other
        }
    }
}

/// All localized report strings for a language
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Report Frame ====================
    /// Header shown at the top of a non-empty report
    pub report_header: &'static str,

    /// Sole content of a report built from no shapes
    pub empty_list_message: &'static str,

    // ==================== Shape Names ====================
    pub square: Plural,
    pub circle: Plural,
    pub triangle: Plural,
    pub trapezoid: Plural,

    /// Word used in the totals line. Does not change with the count.
    pub shapes_word: &'static str,

    // ==================== Measurement Labels ====================
    pub area_word: &'static str,
    pub perimeter_word: &'static str,
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    report_header: "Shapes report",
    empty_list_message: "Empty list of shapes!",

    square: Plural {
        one: "Square",
        other: "Squares",
    },
    circle: Plural {
        one: "Circle",
        other: "Circles",
    },
    triangle: Plural {
        one: "Triangle",
        other: "Triangles",
    },
    trapezoid: Plural {
        one: "Trapezoid",
        other: "Trapezoids",
    },
    shapes_word: "shapes",

    area_word: "Area",
    perimeter_word: "Perimeter",
};

// ==================== Spanish Strings ====================

/// Spanish language strings
pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    report_header: "Reporte de Formas",
    empty_list_message: "Lista vacía de formas!",

    square: Plural {
        one: "Cuadrado",
        other: "Cuadrados",
    },
    circle: Plural {
        one: "Círculo",
        other: "Círculos",
    },
    triangle: Plural {
        one: "Triángulo",
        other: "Triángulos",
    },
    trapezoid: Plural {
        one: "Trapecio",
        other: "Trapecios",
    },
    shapes_word: "formas",

    area_word: "Area",
    perimeter_word: "Perimetro",
};
