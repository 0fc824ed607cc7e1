//! One-way projection of a grid into an SVG document

use crate::grid::PixelGrid;

/// Side of one cell in the exported image, in SVG user units
pub const SVG_PIXEL_SIZE: u32 = 10;

const PROLOG: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#,
    "\n",
    r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#,
    "\n",
);

#[inline]
fn encode_dec(buf: &mut itoa::Buffer, num: impl itoa::Integer) -> &str {
    buf.format(num)
}

fn push_attr(svg: &mut String, num_buf: &mut itoa::Buffer, name: &str, value: u64) {
    svg.push(' ');
    svg.push_str(name);
    svg.push_str("=\"");
    svg.push_str(encode_dec(num_buf, value));
    svg.push('"');
}

impl PixelGrid {
    /// Render painted cells as squares on a transparent background
    pub fn to_svg(&self) -> String {
        let side = u64::from(SVG_PIXEL_SIZE);
        let mut num_buf = itoa::Buffer::new();

        let mut svg = String::from(PROLOG);
        svg.push_str(r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg""#);
        push_attr(&mut svg, &mut num_buf, "width", side * u64::from(self.width()));
        push_attr(&mut svg, &mut num_buf, "height", side * u64::from(self.height()));
        svg.push('>');

        for (y_pos, y_lane) in self.rows().enumerate() {
            for (x_pos, cell) in y_lane.iter().enumerate() {
                let Some(color) = cell else { continue };

                svg.push_str("<rect");
                push_attr(&mut svg, &mut num_buf, "x", x_pos as u64 * side);
                push_attr(&mut svg, &mut num_buf, "y", y_pos as u64 * side);
                push_attr(&mut svg, &mut num_buf, "width", side);
                push_attr(&mut svg, &mut num_buf, "height", side);
                svg.push_str(" style=\"fill:");
                svg.push_str(&color.to_string());
                svg.push_str("\"/>");
            }
        }

        svg.push_str("</svg>");
        svg
    }
}
