use lowpoly::image::io::RgbImageU8;
use std::collections::BTreeMap;

/// Uniformly colored RGB image.
pub fn solid_rgb(width: usize, height: usize, rgb: [u8; 3]) -> RgbImageU8 {
    RgbImageU8::filled(width, height, rgb).expect("non-empty image")
}

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height * 3];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let val = if (cx + cy) & 1 == 0 { 32u8 } else { 220u8 };
            let i = (y * width + x) * 3;
            img[i..i + 3].copy_from_slice(&[val, val, val]);
        }
    }
    RgbImageU8::new(width, height, img).expect("valid buffer")
}

/// Fresh scratch directory under the system temp dir.
pub fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("lowpoly-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

/// One parsed `<polygon>` or `<polyline>` child of the document root.
#[derive(Debug)]
pub struct ShapeElement {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
}

impl ShapeElement {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn coords(&self) -> Vec<f64> {
        self.attr("points")
            .unwrap_or_default()
            .split_whitespace()
            .map(|v| v.parse::<f64>().expect("numeric coordinate"))
            .collect()
    }
}

/// Parse an SVG document as XML and return its root attributes and shapes in order.
pub fn parse_svg(doc: &str) -> (BTreeMap<String, String>, Vec<ShapeElement>) {
    let opts = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let xml = roxmltree::Document::parse_with_options(doc, opts).expect("well-formed SVG");
    let root = xml.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    let attrs_of = |node: roxmltree::Node<'_, '_>| -> BTreeMap<String, String> {
        node.attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect()
    };
    let shapes = root
        .children()
        .filter(|n| n.has_tag_name("polygon") || n.has_tag_name("polyline"))
        .map(|n| ShapeElement {
            tag: n.tag_name().name().to_string(),
            attrs: attrs_of(n),
        })
        .collect();
    (attrs_of(root), shapes)
}
