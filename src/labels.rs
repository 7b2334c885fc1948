//! Identification Labels
//!
//! Renders a printable product label as an SVG string: optional name, SKU
//! and price text plus a decorative bar pattern derived from the SKU's
//! character codes. The bars are visual identification only, not a real
//! barcode symbology, and cannot be scanned back into data.

use crate::store::models::Product;

/// Physical label size presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelSize {
    /// 160x80 units; fits the bars and one text line.
    Small,

    /// 240x120 units.
    #[default]
    Medium,

    /// 360x180 units.
    Large,
}

impl LabelSize {
    /// Canvas dimensions in SVG user units.
    #[must_use]
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            LabelSize::Small => (160, 80),
            LabelSize::Medium => (240, 120),
            LabelSize::Large => (360, 180),
        }
    }
}

/// What a rendered label shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelOptions {
    /// Print the product name above the bars. Default: on.
    pub show_name: bool,

    /// Print the SKU text under the bars. Default: on.
    pub show_sku: bool,

    /// Print the unit price under the SKU. Default: off.
    pub show_price: bool,

    /// Label size preset. Default: [`LabelSize::Medium`].
    pub size: LabelSize,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            show_name: true,
            show_sku: true,
            show_price: false,
            size: LabelSize::default(),
        }
    }
}

/// Render a product label as an SVG document.
#[must_use]
pub fn render_label(product: &Product, options: &LabelOptions) -> String {
    let (width, height) = options.size.dimensions();

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    ));
    svg.push_str(&format!(
        r##"<rect width="{width}" height="{height}" fill="#ffffff"/>"##
    ));

    let margin = width / 12;
    let mut cursor_y = margin;

    if options.show_name {
        svg.push_str(&format!(
            r##"<text x="{x}" y="{y}" font-family="sans-serif" font-size="{size}" fill="#111111">{name}</text>"##,
            x = margin,
            y = cursor_y + margin / 2,
            size = height / 8,
            name = escape(&product.name),
        ));
        cursor_y += height / 6;
    }

    let bar_height = height / 3;
    append_bars(&mut svg, &product.sku, margin, cursor_y, width, bar_height);
    cursor_y += bar_height + height / 10;

    if options.show_sku {
        svg.push_str(&format!(
            r##"<text x="{x}" y="{y}" font-family="monospace" font-size="{size}" fill="#111111">{sku}</text>"##,
            x = margin,
            y = cursor_y,
            size = height / 10,
            sku = escape(&product.sku),
        ));
        cursor_y += height / 8;
    }

    if options.show_price {
        svg.push_str(&format!(
            r##"<text x="{x}" y="{y}" font-family="sans-serif" font-size="{size}" fill="#111111">${price}</text>"##,
            x = margin,
            y = cursor_y,
            size = height / 10,
            price = product.price,
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Map each SKU character code to a bar whose width is the code modulo a
/// small class count. Purely decorative.
fn append_bars(svg: &mut String, sku: &str, x: u32, y: u32, width: u32, bar_height: u32) {
    let unit = (width / 60).max(1);
    let mut cursor_x = x;
    let limit = width - x;

    for code in sku.chars().map(u32::from) {
        let bar_width = unit * (1 + code % 4);

        if cursor_x + bar_width > limit {
            break;
        }

        svg.push_str(&format!(
            r##"<rect x="{cursor_x}" y="{y}" width="{bar_width}" height="{bar_height}" fill="#111111"/>"##
        ));

        cursor_x += bar_width + unit;
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
