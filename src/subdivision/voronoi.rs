//! Voronoi cells as half-plane intersections.
//!
//! The cell of a site is the image rectangle clipped by the perpendicular
//! bisector against each Delaunay neighbour. Sites without neighbours in a
//! multi-site set (degenerate engines) are clipped against every other site.
use super::Subdivision;
use crate::types::Point;
use nalgebra::Vector2;

type V2 = Vector2<f64>;

fn to_v2(p: Point) -> V2 {
    V2::new(p.x as f64, p.y as f64)
}

/// Keep the part of `poly` closer to `site` than to `other`.
fn clip_by_bisector(poly: &[V2], site: V2, other: V2) -> Vec<V2> {
    let normal = other - site;
    let mid = (site + other) * 0.5;
    let side = |q: &V2| (q - mid).dot(&normal);

    let mut out = Vec::with_capacity(poly.len() + 1);
    for (i, cur) in poly.iter().enumerate() {
        let next = &poly[(i + 1) % poly.len()];
        let (dc, dn) = (side(cur), side(next));
        if dc <= 0.0 {
            out.push(*cur);
        }
        if (dc < 0.0 && dn > 0.0) || (dc > 0.0 && dn < 0.0) {
            let t = dc / (dc - dn);
            out.push(cur + (next - cur) * t);
        }
    }
    out
}

/// Closed cell polygon of `site_idx` inside `[0, w] × [0, h]`.
pub fn cell_polygon(sub: &Subdivision, site_idx: usize) -> Vec<V2> {
    let bounds = sub.bounds();
    let (w, h) = (bounds.width as f64, bounds.height as f64);
    let mut poly = vec![
        V2::new(0.0, 0.0),
        V2::new(w, 0.0),
        V2::new(w, h),
        V2::new(0.0, h),
    ];
    let site = to_v2(sub.sites()[site_idx]);
    let neighbors = sub.neighbors(site_idx);
    let others: Vec<usize> = if neighbors.is_empty() {
        (0..sub.sites().len()).filter(|&i| i != site_idx).collect()
    } else {
        neighbors.to_vec()
    };
    for other in others {
        poly = clip_by_bisector(&poly, site, to_v2(sub.sites()[other]));
        if poly.is_empty() {
            break;
        }
    }
    poly
}

pub(super) fn cells(sub: &Subdivision) -> Vec<Vec<f64>> {
    let bounds = sub.bounds();
    let max_x = bounds.width.saturating_sub(1) as f64;
    let max_y = bounds.height.saturating_sub(1) as f64;
    (0..sub.sites().len())
        .map(|i| cell_polygon(sub, i))
        .filter(|poly| poly.len() >= 3)
        .map(|poly| {
            poly.iter()
                .flat_map(|v| [v.x.clamp(0.0, max_x), v.y.clamp(0.0, max_y)])
                .collect()
        })
        .collect()
}
