//! Triangulate a few seeded site sets and print their counts.
//!
//! Usage:
//!   cargo run -p diagram --example random_split -- uniform
//!   cargo run -p diagram --example random_split -- grid
//!
//! Each line shows n sites, hull size h, and the triangle count, which must
//! equal 2n - h - 2.

use diagram::prelude::*;

fn main() {
    let layout = match std::env::args().nth(1).as_deref() {
        None | Some("uniform") => SiteLayout::Uniform,
        Some("grid") => SiteLayout::JitteredGrid { jitter_frac: 0.1 },
        Some(other) => {
            eprintln!("usage: random_split [uniform|grid] (got {other})");
            return;
        }
    };
    let border = Rectangle::new(0.0, 0.0, 100.0, 100.0);
    let cfg = SiteCfg {
        count: SiteCount::Uniform { min: 8, max: 200 },
        layout,
        ..SiteCfg::default()
    };
    for i in 0..5 {
        let sites = draw_sites(cfg, border, ReplayToken::new(2025, i));
        let n = sites.len();
        match DelaunayDiagram::new(sites).split(border) {
            Ok(tri) => {
                let h = tri.hull().len();
                println!(
                    "sample {i}: n={n}, h={h}, T={} (expected {}), E={}",
                    tri.triangles().len(),
                    2 * n - h - 2,
                    tri.edges().len()
                );
            }
            Err(e) => println!("sample {i}: n={n}, failed: {e} ({:?})", e.kind()),
        }
    }
}
