use geo::{Area, ConvexHull};
use geo_types::{Coord, LineString, Polygon};
use image::{GrayImage, Luma};
use imageproc::{
    contours::{find_contours, BorderType},
    drawing::draw_polygon_mut,
    point::Point,
};

use crate::{constants::*, types::RegionFills};

/// Axis-aligned bounding box in pixels, inclusive of both edge pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Outer border of one foreground component
#[derive(Debug, Clone)]
pub struct GarmentContour {
    pub points: Vec<Point<i32>>,
    pub area: f64,
    pub hull_area: f64,
    pub bbox: BoundingBox,
}

impl GarmentContour {
    pub fn from_points(points: Vec<Point<i32>>) -> Self {
        let polygon = to_polygon(&points);
        let area = polygon.unsigned_area();
        let hull_area = polygon.convex_hull().unsigned_area();

        Self {
            bbox: bounding_box(&points),
            points,
            area,
            hull_area,
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.bbox.width as f64 / self.bbox.height as f64
    }

    /// Contour area / hull area, 0 when the hull is degenerate
    pub fn solidity(&self) -> f64 {
        if self.hull_area > 0.0 {
            self.area / self.hull_area
        } else {
            0.0
        }
    }

    /// The contour and its interior drawn into an empty `width x height` mask
    pub fn filled_mask(&self, width: u32, height: u32) -> GrayImage {
        let mut mask = GrayImage::new(width, height);

        let mut polygon = self.points.clone();
        if polygon.len() > 1 && polygon.first() == polygon.last() {
            polygon.pop();
        }
        if polygon.len() >= 3 {
            draw_polygon_mut(&mut mask, &polygon, Luma([255]));
        }

        // border pixels belong to the shape even where the fill misses them
        for point in &self.points {
            if point.x >= 0 && point.y >= 0 && (point.x as u32) < width && (point.y as u32) < height {
                mask.put_pixel(point.x as u32, point.y as u32, Luma([255]));
            }
        }

        mask
    }

    /// Fill ratios of the handle, waistband, neckline and crotch sample regions
    pub fn region_fills(&self, filled: &GrayImage) -> RegionFills {
        let BoundingBox { x, y, width: w, height: h } = self.bbox;
        let part = |length: u32, fraction: f64| (length as f64 * fraction) as u32;

        let (handle_lit, handle_size) = count_region(
            filled,
            x + part(w, HANDLE_SPAN.0)..x + part(w, HANDLE_SPAN.1),
            y..y + part(h, HANDLE_HEIGHT),
        );
        let handle = if handle_size == 0 {
            1.0
        } else {
            handle_lit as f64 / handle_size as f64
        };

        let smoothed = |(lit, size): (usize, usize)| lit as f64 / (size + 1) as f64;

        RegionFills {
            handle,
            waist: smoothed(count_region(filled, x..x + w, y..y + part(h, WAIST_HEIGHT))),
            neck: smoothed(count_region(
                filled,
                x + part(w, NECK_SPAN.0)..x + part(w, NECK_SPAN.1),
                y..y + part(h, NECK_HEIGHT),
            )),
            crotch: smoothed(count_region(
                filled,
                x + part(w, CROTCH_SPAN.0)..x + part(w, CROTCH_SPAN.1),
                y + part(h, CROTCH_START)..y + h,
            )),
        }
    }
}

/// Largest outer contour by area; the first one wins ties
pub fn largest_external_contour(mask: &GrayImage) -> Option<GarmentContour> {
    let mut largest: Option<GarmentContour> = None;

    for contour in find_contours::<i32>(mask) {
        if contour.border_type != BorderType::Outer || contour.parent.is_some() {
            continue;
        }
        let candidate = GarmentContour::from_points(contour.points);
        if largest.as_ref().is_none_or(|best| candidate.area > best.area) {
            largest = Some(candidate);
        }
    }

    largest
}

fn to_polygon(points: &[Point<i32>]) -> Polygon<f64> {
    let coords: Vec<Coord<f64>> = points
        .iter()
        .map(|p| Coord {
            x: p.x as f64,
            y: p.y as f64,
        })
        .collect();
    Polygon::new(LineString::new(coords), vec![])
}

fn bounding_box(points: &[Point<i32>]) -> BoundingBox {
    let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
    let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    if points.is_empty() {
        return BoundingBox { x: 0, y: 0, width: 0, height: 0 };
    }

    BoundingBox {
        x: min_x.max(0) as u32,
        y: min_y.max(0) as u32,
        width: (max_x - min_x + 1) as u32,
        height: (max_y - min_y + 1) as u32,
    }
}

/// (lit pixels, total pixels) of the region, clipped to the mask
fn count_region(mask: &GrayImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) -> (usize, usize) {
    let xs = xs.start.min(mask.width())..xs.end.min(mask.width());
    let ys = ys.start.min(mask.height())..ys.end.min(mask.height());

    let mut lit = 0;
    let mut size = 0;
    for y in ys {
        for x in xs.clone() {
            size += 1;
            if mask.get_pixel(x, y).0[0] > 0 {
                lit += 1;
            }
        }
    }
    (lit, size)
}
