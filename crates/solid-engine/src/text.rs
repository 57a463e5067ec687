//! Stroke-rectangle text rendering for board labels.
//!
//! Each glyph is a handful of axis-aligned rectangles in em units
//! (`[x, y, w, h]` with the glyph centered on its origin, cap height 1.0).
//! Rendering scales the rectangles by the font size, extrudes them to the
//! label depth, and unions them into one solid. Unsupported characters are
//! skipped but still advance the cursor, so the surrounding text keeps its
//! spacing.

use crossboard_types::DEFAULTS;
use geom_kernel::{Kernel, KernelError, SolidHandle};

/// Rectangles making up one glyph: `[x, y, w, h]` in em units.
type Glyph = &'static [[f64; 4]];

/// Look up a glyph. Lowercase letters map to their uppercase forms.
fn glyph(c: char) -> Option<Glyph> {
    let shapes: Glyph = match c.to_ascii_uppercase() {
        'A' => &[
            [-0.3, 0.0, 0.15, 1.0],
            [0.15, 0.0, 0.15, 1.0],
            [-0.15, 0.35, 0.3, 0.15],
        ],
        'B' => &[
            [-0.3, 0.0, 0.15, 1.0],
            [-0.15, 0.35, 0.3, 0.15],
            [-0.15, -0.35, 0.3, 0.15],
            [-0.15, 0.0, 0.3, 0.15],
            [0.15, 0.2, 0.15, 0.3],
            [0.15, -0.2, 0.15, 0.3],
        ],
        'C' => &[
            [-0.3, 0.0, 0.15, 1.0],
            [-0.15, 0.35, 0.3, 0.15],
            [-0.15, -0.35, 0.3, 0.15],
        ],
        'D' => &[
            [-0.3, 0.0, 0.15, 1.0],
            [-0.15, 0.35, 0.25, 0.15],
            [-0.15, -0.35, 0.25, 0.15],
            [0.1, 0.0, 0.15, 0.7],
        ],
        'E' => &[
            [-0.3, 0.0, 0.15, 1.0],
            [-0.15, 0.35, 0.3, 0.15],
            [-0.15, -0.35, 0.3, 0.15],
            [-0.15, 0.0, 0.25, 0.15],
        ],
        'F' => &[
            [-0.3, 0.0, 0.15, 1.0],
            [-0.15, 0.35, 0.3, 0.15],
            [-0.15, 0.0, 0.25, 0.15],
        ],
        'G' => &[
            [-0.3, 0.0, 0.15, 1.0],
            [-0.15, 0.35, 0.3, 0.15],
            [-0.15, -0.35, 0.3, 0.15],
            [0.15, -0.15, 0.15, 0.4],
            [0.0, -0.05, 0.15, 0.15],
        ],
        'H' => &[
            [-0.3, 0.0, 0.15, 1.0],
            [0.15, 0.0, 0.15, 1.0],
            [-0.15, 0.0, 0.3, 0.15],
        ],
        'I' => &[
            [0.0, 0.0, 0.15, 1.0],
            [-0.2, 0.35, 0.4, 0.15],
            [-0.2, -0.35, 0.4, 0.15],
        ],
        'J' => &[
            [0.15, 0.1, 0.15, 0.8],
            [-0.3, -0.25, 0.15, 0.3],
            [-0.15, -0.35, 0.3, 0.15],
        ],
        'K' => &[
            [-0.3, 0.0, 0.15, 1.0],
            [0.1, 0.25, 0.15, 0.4],
            [0.1, -0.25, 0.15, 0.4],
        ],
        'L' => &[[-0.3, 0.0, 0.15, 1.0], [-0.15, -0.35, 0.4, 0.15]],
        'M' => &[
            [-0.3, 0.0, 0.15, 1.0],
            [0.3, 0.0, 0.15, 1.0],
            [-0.1, 0.2, 0.1, 0.4],
            [0.1, 0.2, 0.1, 0.4],
        ],
        'N' => &[
            [-0.3, 0.0, 0.15, 1.0],
            [0.3, 0.0, 0.15, 1.0],
            [0.0, 0.0, 0.2, 0.8],
        ],
        'O' => &[
            [-0.3, 0.0, 0.15, 1.0],
            [0.3, 0.0, 0.15, 1.0],
            [-0.15, 0.35, 0.3, 0.15],
            [-0.15, -0.35, 0.3, 0.15],
        ],
        'P' => &[
            [-0.3, 0.0, 0.15, 1.0],
            [-0.15, 0.35, 0.3, 0.15],
            [-0.15, 0.0, 0.3, 0.15],
            [0.15, 0.175, 0.15, 0.35],
        ],
        'Q' => &[
            [-0.3, 0.0, 0.15, 0.9],
            [0.3, 0.0, 0.15, 0.9],
            [-0.15, 0.35, 0.3, 0.15],
            [-0.15, -0.3, 0.3, 0.15],
            [0.2, -0.4, 0.2, 0.1],
        ],
        'R' => &[
            [-0.3, 0.0, 0.15, 1.0],
            [-0.15, 0.35, 0.3, 0.15],
            [-0.15, 0.0, 0.3, 0.15],
            [0.15, 0.175, 0.15, 0.35],
            [0.15, -0.2, 0.15, 0.4],
        ],
        'S' => &[
            [-0.15, 0.35, 0.4, 0.15],
            [-0.3, 0.15, 0.15, 0.3],
            [-0.15, 0.0, 0.3, 0.15],
            [0.15, -0.15, 0.15, 0.3],
            [-0.15, -0.35, 0.4, 0.15],
        ],
        'T' => &[[0.0, 0.0, 0.15, 1.0], [-0.3, 0.35, 0.6, 0.15]],
        'U' => &[
            [-0.3, 0.05, 0.15, 0.9],
            [0.3, 0.05, 0.15, 0.9],
            [-0.15, -0.35, 0.3, 0.15],
        ],
        'V' => &[
            [-0.3, 0.1, 0.15, 0.8],
            [0.3, 0.1, 0.15, 0.8],
            [0.0, -0.3, 0.15, 0.2],
        ],
        'W' => &[
            [-0.4, 0.05, 0.12, 0.9],
            [-0.15, -0.1, 0.12, 0.6],
            [0.15, -0.1, 0.12, 0.6],
            [0.4, 0.05, 0.12, 0.9],
            [0.0, -0.35, 0.3, 0.12],
        ],
        'X' => &[
            [-0.2, 0.2, 0.15, 0.5],
            [0.2, 0.2, 0.15, 0.5],
            [-0.2, -0.2, 0.15, 0.5],
            [0.2, -0.2, 0.15, 0.5],
        ],
        'Y' => &[
            [-0.3, 0.2, 0.15, 0.5],
            [0.3, 0.2, 0.15, 0.5],
            [0.0, -0.15, 0.15, 0.5],
        ],
        'Z' => &[
            [-0.25, 0.35, 0.5, 0.15],
            [-0.25, -0.35, 0.5, 0.15],
            [0.0, 0.0, 0.3, 0.7],
        ],
        '0' => &[
            [-0.25, 0.0, 0.15, 0.9],
            [0.25, 0.0, 0.15, 0.9],
            [-0.1, 0.35, 0.2, 0.15],
            [-0.1, -0.35, 0.2, 0.15],
        ],
        '1' => &[[0.0, 0.0, 0.15, 1.0], [-0.15, 0.25, 0.15, 0.15]],
        '2' => &[
            [-0.2, 0.35, 0.4, 0.15],
            [0.15, 0.15, 0.15, 0.3],
            [-0.15, 0.0, 0.3, 0.15],
            [-0.2, -0.15, 0.15, 0.3],
            [-0.2, -0.35, 0.4, 0.15],
        ],
        '3' => &[
            [-0.2, 0.35, 0.4, 0.15],
            [0.15, 0.1, 0.15, 0.4],
            [-0.1, 0.0, 0.25, 0.15],
            [0.15, -0.1, 0.15, 0.4],
            [-0.2, -0.35, 0.4, 0.15],
        ],
        '4' => &[
            [-0.2, 0.2, 0.15, 0.5],
            [0.2, 0.0, 0.15, 1.0],
            [-0.2, -0.05, 0.4, 0.15],
        ],
        '5' => &[
            [-0.2, 0.35, 0.4, 0.15],
            [-0.2, 0.15, 0.15, 0.3],
            [-0.2, 0.0, 0.35, 0.15],
            [0.15, -0.15, 0.15, 0.3],
            [-0.2, -0.35, 0.4, 0.15],
        ],
        '6' => &[
            [-0.2, 0.0, 0.15, 0.9],
            [-0.05, 0.35, 0.25, 0.15],
            [-0.05, 0.0, 0.25, 0.15],
            [0.15, -0.175, 0.15, 0.35],
            [-0.05, -0.35, 0.2, 0.15],
        ],
        '7' => &[[-0.25, 0.35, 0.5, 0.15], [0.1, -0.05, 0.15, 0.8]],
        '8' => &[
            [-0.2, 0.1, 0.15, 0.4],
            [-0.2, -0.1, 0.15, 0.4],
            [0.2, 0.1, 0.15, 0.4],
            [0.2, -0.1, 0.15, 0.4],
            [-0.05, 0.35, 0.1, 0.15],
            [-0.05, 0.0, 0.1, 0.15],
            [-0.05, -0.35, 0.1, 0.15],
        ],
        '9' => &[
            [0.2, 0.0, 0.15, 0.9],
            [-0.05, 0.35, 0.25, 0.15],
            [-0.05, 0.0, 0.25, 0.15],
            [-0.2, 0.175, 0.15, 0.35],
            [-0.05, -0.35, 0.25, 0.15],
        ],
        '.' => &[[0.0, -0.35, 0.15, 0.15]],
        '-' => &[[-0.2, 0.0, 0.4, 0.15]],
        '+' => &[[0.0, 0.0, 0.15, 0.6], [-0.3, 0.0, 0.6, 0.15]],
        '/' => &[[0.0, 0.0, 0.15, 1.0]],
        '_' => &[[-0.3, -0.35, 0.6, 0.15]],
        _ => return None,
    };
    Some(shapes)
}

/// Render one glyph into a solid centered on its origin.
fn render_glyph(
    kernel: &mut dyn Kernel,
    shapes: Glyph,
    font_size: f64,
    thickness: f64,
) -> Result<Option<SolidHandle>, KernelError> {
    let mut glyph_solid: Option<SolidHandle> = None;
    for &[x, y, w, h] in shapes {
        let rect = kernel.make_box(w * font_size, h * font_size, thickness)?;
        let rect = kernel.translate(&rect, [x * font_size, y * font_size, 0.0])?;
        glyph_solid = Some(match glyph_solid {
            Some(acc) => kernel.union(&acc, &rect)?,
            None => rect,
        });
    }
    Ok(glyph_solid)
}

/// Render a line of text into a single solid of the given thickness,
/// centered vertically on z = 0, starting at x = 0 and advancing right.
///
/// Returns `Ok(None)` when no character produced geometry (empty string,
/// all-unsupported text), which callers treat as "no label".
pub fn render_text(
    kernel: &mut dyn Kernel,
    text: &str,
    font_size: f64,
    thickness: f64,
) -> Result<Option<SolidHandle>, KernelError> {
    let advance = font_size * DEFAULTS.text_advance;
    let mut cursor = 0.0;
    let mut line: Option<SolidHandle> = None;

    for c in text.chars() {
        if let Some(shapes) = glyph(c) {
            if let Some(glyph_solid) = render_glyph(kernel, shapes, font_size, thickness)? {
                let placed = kernel.translate(&glyph_solid, [cursor, 0.0, 0.0])?;
                line = Some(match line {
                    Some(acc) => kernel.union(&acc, &placed)?,
                    None => placed,
                });
            }
        }
        cursor += advance;
    }

    Ok(line)
}
