use std::path::Path;

use cellscan_core::detect::Detection;
use cellscan_core::params::DetectParams;
use console::Style;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    count: Style,
    dim: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            count: Style::new().green().bold(),
            dim: Style::new().dim(),
        }
    }
}

pub fn print_detect_summary(input: &Path, params: &DetectParams, detection: &Detection) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Cellscan Detection"));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(18))
    );
    println!();

    println!("  {:<14}{}", s.label.apply_to("Input"), input.display());
    println!(
        "  {:<14}H {}..{}  S {}..{}  V {}..{}",
        s.label.apply_to("HSV range"),
        params.hue_lo,
        params.hue_hi,
        params.sat_lo,
        params.sat_hi,
        params.val_lo,
        params.val_hi
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Kernel"),
        s.value.apply_to(params.kernel_size)
    );
    println!(
        "  {:<14}{} .. {}",
        s.label.apply_to("Area band"),
        params.min_area,
        params.max_area
    );
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Cell count"),
        s.count.apply_to(detection.count())
    );

    if !detection.contours.is_empty() {
        println!();
        println!(
            "  {}",
            s.dim.apply_to(format!(
                "{:>4}  {:>10}  {:>16}",
                "#", "area", "centroid"
            ))
        );
        for (i, contour) in detection.contours.iter().enumerate() {
            let centroid = match contour.centroid {
                Some((cx, cy)) => format!("({cx:.1}, {cy:.1})"),
                None => "-".to_string(),
            };
            println!("  {:>4}  {:>10.1}  {:>16}", i + 1, contour.area, centroid);
        }
    }
    println!();
}
