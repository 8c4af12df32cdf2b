//! SVG output for a laid-out sheet of shapes.

use simple_xml_builder::XMLElement;

use crate::layout::{Sheet, SCALE};

/// Radius of a drawn cell, in plane units
const CELL_RADIUS: f64 = 0.5;

/// Generate an SVG root element: white discs on a black background.
pub fn gen_svg(sheet: &Sheet) -> XMLElement {
    let (width, height) = sheet.pixel_size();

    let mut root = XMLElement::new("svg");
    root.add_attribute("width", &width.to_string());
    root.add_attribute("height", &height.to_string());
    root.add_attribute("xmlns", "http://www.w3.org/2000/svg");

    let mut background = XMLElement::new("rect");
    background.add_attribute("width", &width.to_string());
    background.add_attribute("height", &height.to_string());
    background.add_attribute("fill", "black");
    root.add_child(background);

    let radius = (CELL_RADIUS * SCALE).to_string();
    for points in &sheet.shapes {
        let mut group = XMLElement::new("g");
        for p in points {
            let mut cell = XMLElement::new("circle");
            cell.add_attribute("cx", &(p.x * SCALE).to_string());
            cell.add_attribute("cy", &(p.y * SCALE).to_string());
            cell.add_attribute("r", &radius);
            cell.add_attribute("fill", "white");
            group.add_child(cell);
        }
        root.add_child(group);
    }

    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout_shapes;
    use constellation_hex::{Hex, UP, UR};
    use constellation_shape::Shape;

    #[test]
    fn one_circle_per_cell() {
        let shapes = [
            Shape::of([Hex::ORIGIN, UP, UR]).into_shape(),
            Shape::of([Hex::ORIGIN, UP]).into_shape(),
        ];
        let svg = gen_svg(&layout_shapes(&shapes)).to_string();
        assert_eq!(svg.matches("<circle").count(), 5);
        assert_eq!(svg.matches("<g").count(), 2);
        assert!(svg.contains("fill=\"black\""));
    }

    #[test]
    fn empty_sheet_is_a_blank_canvas() {
        let svg = gen_svg(&Sheet::default()).to_string();
        assert!(svg.contains("width=\"0\""));
        assert!(!svg.contains("<circle"));
    }
}
